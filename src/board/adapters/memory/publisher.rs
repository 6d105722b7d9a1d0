//! Publisher adapter retaining the most recently published snapshot.

use std::sync::{Arc, RwLock};

use crate::board::{domain::Board, ports::BoardPublisher};

/// Publisher that keeps the latest board snapshot for polling consumers.
///
/// Last publish wins: each call replaces the retained snapshot wholesale.
#[derive(Debug, Clone, Default)]
pub struct LatestBoardPublisher {
    latest: Arc<RwLock<Option<Board>>>,
}

impl LatestBoardPublisher {
    /// Creates a publisher with no snapshot yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently published snapshot, if any.
    #[must_use]
    pub fn latest(&self) -> Option<Board> {
        self.latest.read().ok().and_then(|guard| guard.clone())
    }
}

impl BoardPublisher for LatestBoardPublisher {
    fn publish(&self, board: &Board) {
        if let Ok(mut guard) = self.latest.write() {
            *guard = Some(board.clone());
        }
    }
}
