//! Step definitions for drag reorder scenarios.

mod when;
