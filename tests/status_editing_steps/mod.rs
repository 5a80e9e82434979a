//! Step definitions for status editing scenarios.

mod then;
mod when;
pub mod world;
