//! Task cards and their per-column ordering.
//!
//! Tasks belong to exactly one status column and carry a dense rank within
//! it. The module follows hexagonal architecture:
//!
//! - Domain types and the position algebra in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
