//! Reconciliation service: optimistic board mutation with rollback-by-refetch.

use crate::board::{
    domain::{
        Board, BoardDomainError, BoardId, ColumnId, DEFAULT_SPACING, DropTarget, Reposition, Task,
        TaskDraft, TaskId, allocate_positions, resolve_move,
    },
    ports::{BoardPublisher, BoardStore, BoardStoreError},
};
use mockable::Clock;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Service-level errors for board synchronization.
#[derive(Debug, Error)]
pub enum BoardSyncError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Store operation failed and the recovery refetch also failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
}

/// Result type for board synchronization operations.
pub type BoardSyncResult<T> = Result<T, BoardSyncError>;

/// Orchestrates board commands against the store and the publisher.
///
/// Every mutating command follows the same shape: compute the next board as a
/// pure transformation of the latest snapshot, publish it immediately for the
/// collaborator to render, then issue the matching store call. When the store
/// call fails, the optimistic snapshot is discarded and the authoritative
/// board is refetched and republished.
///
/// The retained snapshot is swapped whole under a lock that is never held
/// across an await, so the most recently completed command or rollback always
/// wins. Commands that reference unknown identifiers, and commands issued
/// before [`BoardSyncService::load`] has published a first board, are silent
/// no-ops.
pub struct BoardSyncService<S, P, C>
where
    S: BoardStore,
    P: BoardPublisher,
    C: Clock + Send + Sync,
{
    board_id: BoardId,
    store: Arc<S>,
    publisher: Arc<P>,
    clock: Arc<C>,
    current: RwLock<Option<Board>>,
}

impl<S, P, C> BoardSyncService<S, P, C>
where
    S: BoardStore,
    P: BoardPublisher,
    C: Clock + Send + Sync,
{
    /// Creates a synchronization service for one board.
    #[must_use]
    pub fn new(board_id: BoardId, store: Arc<S>, publisher: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            board_id,
            store,
            publisher,
            clock,
            current: RwLock::new(None),
        }
    }

    /// Returns the identifier of the board this service synchronizes.
    #[must_use]
    pub const fn board_id(&self) -> &BoardId {
        &self.board_id
    }

    /// Returns the latest retained board snapshot, if one has been published.
    #[must_use]
    pub fn board(&self) -> Option<Board> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    /// Loads the authoritative board from the store and publishes it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Store`] when the fetch fails.
    pub async fn load(&self) -> BoardSyncResult<Board> {
        let board = self.store.fetch_or_seed(&self.board_id).await?;
        self.publish(&board);
        Ok(board)
    }

    /// Adds a new task to the end of a column.
    ///
    /// Generates the task identifier, applies the addition optimistically,
    /// and stores the record with its position in the post-insert sequence.
    /// An unknown column is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Domain`] when the draft title is empty, and
    /// [`BoardSyncError::Store`] when the store fails and the recovery
    /// refetch fails as well.
    pub async fn add_task(&self, column_id: &ColumnId, draft: TaskDraft) -> BoardSyncResult<()> {
        let Some(current) = self.board() else {
            return Ok(());
        };
        if !current.contains_column(column_id) {
            return Ok(());
        }

        let task = Task::new(TaskId::generate(), draft, &*self.clock)?;
        let next = current.with_task_added(column_id, task.clone())?;
        self.publish(&next);

        let position = appended_position(&next, column_id, task.id());
        let outcome = self
            .store
            .create_task(&self.board_id, &task, column_id, position)
            .await;
        self.settle(outcome).await
    }

    /// Replaces a task's editable fields with the draft contents.
    ///
    /// An unknown task is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Domain`] when the draft title is empty, and
    /// [`BoardSyncError::Store`] when the store fails and the recovery
    /// refetch fails as well.
    pub async fn edit_task(&self, task_id: &TaskId, draft: TaskDraft) -> BoardSyncResult<()> {
        let Some(current) = self.board() else {
            return Ok(());
        };
        if current.task(task_id).is_none() {
            return Ok(());
        }

        let next = current.with_task_edited(task_id, draft, &*self.clock)?;
        self.publish(&next);

        let Some(updated) = next.task(task_id).cloned() else {
            return Ok(());
        };
        let outcome = self.store.update_task(&updated).await;
        self.settle(outcome).await
    }

    /// Removes a task from its column and from the board.
    ///
    /// An unknown task is a silent no-op and issues no store call.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Store`] when the store fails and the
    /// recovery refetch fails as well.
    pub async fn delete_task(&self, task_id: &TaskId) -> BoardSyncResult<()> {
        let Some(current) = self.board() else {
            return Ok(());
        };
        if current.column_of(task_id).is_none() {
            return Ok(());
        }

        let next = current.with_task_removed(task_id)?;
        self.publish(&next);

        let outcome = self.store.delete_task(task_id).await;
        self.settle(outcome).await
    }

    /// Moves a task within or across columns.
    ///
    /// Applies the move optimistically, renumbers every task in the touched
    /// column(s), and issues one batched reposition write covering both the
    /// source and target sequences. Unknown identifiers and moves that
    /// resolve to the current position are silent no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Store`] when the store fails and the
    /// recovery refetch fails as well.
    pub async fn move_task(&self, task_id: &TaskId, target: &DropTarget) -> BoardSyncResult<()> {
        let Some(current) = self.board() else {
            return Ok(());
        };
        let Ok(next) = resolve_move(&current, task_id, target) else {
            return Ok(());
        };
        if next == current {
            return Ok(());
        }

        let source_column = current.column_of(task_id).cloned();
        let target_column = next.column_of(task_id).cloned();
        self.publish(&next);

        let mut entries: Vec<Reposition> = Vec::new();
        for column_id in touched_columns(source_column, target_column) {
            let sequence = next.tasks_in(&column_id).unwrap_or_default();
            entries.extend(allocate_positions(&column_id, sequence, DEFAULT_SPACING));
        }

        let outcome = self.store.batch_reposition(&self.board_id, &entries).await;
        self.settle(outcome).await
    }

    /// Completes a command: success settles the optimistic snapshot, failure
    /// discards it and refetches the authoritative board.
    async fn settle(&self, outcome: Result<(), BoardStoreError>) -> BoardSyncResult<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(_) => self.rollback().await,
        }
    }

    /// Refetches the authoritative board and republishes it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Store`] when the refetch itself fails; the
    /// last published snapshot is left in place for the collaborator.
    async fn rollback(&self) -> BoardSyncResult<()> {
        let board = self.store.fetch_or_seed(&self.board_id).await?;
        self.publish(&board);
        Ok(())
    }

    /// Retains and forwards a new snapshot; last publish wins.
    fn publish(&self, board: &Board) {
        if let Ok(mut guard) = self.current.write() {
            *guard = Some(board.clone());
        }
        self.publisher.publish(board);
    }
}

/// Position assigned to the task appended at the end of a column.
fn appended_position(board: &Board, column_id: &ColumnId, task_id: &TaskId) -> i64 {
    let sequence = board.tasks_in(column_id).unwrap_or_default();
    allocate_positions(column_id, sequence, DEFAULT_SPACING)
        .iter()
        .find(|entry| entry.task_id == *task_id)
        .map_or(0, |entry| entry.position)
}

/// Deduplicated source and target columns of a move.
fn touched_columns(source: Option<ColumnId>, target: Option<ColumnId>) -> Vec<ColumnId> {
    let mut columns = Vec::new();
    if let Some(column_id) = source {
        columns.push(column_id);
    }
    if let Some(column_id) = target
        && !columns.contains(&column_id)
    {
        columns.push(column_id);
    }
    columns
}
