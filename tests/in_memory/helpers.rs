//! Shared helpers for in-memory integration tests.

use mockable::DefaultClock;
use pinboard::board::{
    adapters::memory::{InMemoryBoardStore, LatestBoardPublisher},
    domain::{Board, BoardId, ColumnId, TaskId},
    services::BoardSyncService,
};
use std::sync::Arc;

/// Service type used by the integration tests.
pub type MemoryBoardService =
    BoardSyncService<InMemoryBoardStore, LatestBoardPublisher, DefaultClock>;

/// A service wired to an in-memory store and latest-snapshot publisher.
pub struct TestRig {
    pub service: MemoryBoardService,
    pub store: Arc<InMemoryBoardStore>,
    pub publisher: Arc<LatestBoardPublisher>,
}

/// Builds a rig with a fresh store.
pub fn rig() -> TestRig {
    rig_sharing(&Arc::new(InMemoryBoardStore::new()))
}

/// Builds a rig against an existing store, as a second client would.
pub fn rig_sharing(store: &Arc<InMemoryBoardStore>) -> TestRig {
    let publisher = Arc::new(LatestBoardPublisher::new());
    let service = BoardSyncService::new(
        BoardId::new("demo"),
        Arc::clone(store),
        Arc::clone(&publisher),
        Arc::new(DefaultClock),
    );
    TestRig {
        service,
        store: Arc::clone(store),
        publisher,
    }
}

/// Column identifier from a literal.
pub fn col(value: &str) -> ColumnId {
    ColumnId::new(value)
}

/// Task identifier at the given index of a column's sequence.
pub fn task_at(board: &Board, column: &str, index: usize) -> TaskId {
    board
        .tasks_in(&col(column))
        .expect("column should exist")
        .get(index)
        .cloned()
        .expect("sequence index should exist")
}

/// Titles of a column's tasks in sequence order.
pub fn titles(board: &Board, column: &str) -> Vec<String> {
    board
        .tasks_in(&col(column))
        .expect("column should exist")
        .iter()
        .map(|id| {
            board
                .task(id)
                .expect("sequenced task should have a record")
                .title()
                .to_owned()
        })
        .collect()
}
