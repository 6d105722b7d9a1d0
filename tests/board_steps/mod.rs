//! Step definitions and world state for board reconciliation scenarios.

pub mod given;
pub mod then;
pub mod when;
