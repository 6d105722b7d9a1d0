//! Port contracts for the board synchronization core.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod publisher;
pub mod store;

pub use publisher::BoardPublisher;
pub use store::{BoardStore, BoardStoreError, BoardStoreResult};
