//! In-memory adapters for the status source port.

mod status;

pub use status::InMemoryStatusSource;
