//! Store port for board persistence: the only gateway to the remote store.

use crate::board::domain::{Board, BoardId, ColumnId, Reposition, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Remote persistence contract for board state.
///
/// Each operation is independently failable; the reconciliation service
/// treats every failure identically by refetching authoritative state, so
/// implementations need not distinguish transport from validation errors
/// beyond the [`BoardStoreError`] variants.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Loads the board's columns and tasks ordered by persisted position.
    ///
    /// When no columns exist for the board, seeds the default column set
    /// first and then loads the result.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when loading or seeding
    /// fails.
    async fn fetch_or_seed(&self, board_id: &BoardId) -> BoardStoreResult<Board>;

    /// Stores a new task in the given column at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::UnknownColumn`] when the column does not
    /// exist on the board.
    async fn create_task(
        &self,
        board_id: &BoardId,
        task: &Task,
        column_id: &ColumnId,
        position: i64,
    ) -> BoardStoreResult<()>;

    /// Persists the editable fields and update timestamp of an existing
    /// task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::NotFound`] when the task does not exist.
    async fn update_task(&self, task: &Task) -> BoardStoreResult<()>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::NotFound`] when the task does not exist.
    async fn delete_task(&self, task_id: &TaskId) -> BoardStoreResult<()>;

    /// Applies every reposition entry, or reports the first failure.
    ///
    /// Entries already applied before a failure are not rolled back; the
    /// caller compensates by refetching authoritative state.
    ///
    /// # Errors
    ///
    /// Returns the error of the first entry that fails to apply.
    async fn batch_reposition(
        &self,
        board_id: &BoardId,
        entries: &[Reposition],
    ) -> BoardStoreResult<()>;
}

/// Errors returned by board store implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// The task was not found in the store.
    #[error("task not found in store: {0}")]
    NotFound(TaskId),

    /// The column was not found on the board.
    #[error("column not found in store: {0}")]
    UnknownColumn(ColumnId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
