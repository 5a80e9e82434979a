//! In-memory adapters for the task source port.

mod task;

pub use task::InMemoryTaskSource;
