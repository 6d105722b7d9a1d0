//! Orchestration services for the board synchronization core.

pub mod sync;

pub use sync::{BoardSyncError, BoardSyncResult, BoardSyncService};
