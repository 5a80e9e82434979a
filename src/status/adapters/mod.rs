//! Adapter implementations for the status source port.

pub mod memory;
