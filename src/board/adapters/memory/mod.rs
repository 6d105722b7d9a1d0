//! In-memory adapters for board persistence and snapshot publishing.

mod publisher;
mod store;

pub use publisher::LatestBoardPublisher;
pub use store::InMemoryBoardStore;
