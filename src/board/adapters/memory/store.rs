//! In-memory board store for integration and behaviour tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Board, BoardId, Column, ColumnId, Reposition, Task, TaskId, default_columns},
    ports::{BoardStore, BoardStoreError, BoardStoreResult},
};

/// Thread-safe in-memory board store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStore {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    columns: HashMap<BoardId, Vec<Column>>,
    rows: HashMap<TaskId, StoredTask>,
}

#[derive(Debug, Clone)]
struct StoredTask {
    board_id: BoardId,
    column_id: ColumnId,
    position: i64,
    task: Task,
}

impl InMemoryBoardStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> BoardStoreError {
    BoardStoreError::persistence(std::io::Error::other(err.to_string()))
}

/// Collects a board's rows ordered by persisted position within each column.
fn assemble_board(state: &InMemoryBoardState, board_id: &BoardId) -> BoardStoreResult<Board> {
    let columns = state.columns.get(board_id).cloned().unwrap_or_default();
    let mut board = Board::new(columns.clone());

    for column in &columns {
        let mut rows: Vec<&StoredTask> = state
            .rows
            .values()
            .filter(|row| row.board_id == *board_id && row.column_id == *column.id())
            .collect();
        rows.sort_by_key(|row| row.position);
        for row in rows {
            board = board
                .with_task_added(column.id(), row.task.clone())
                .map_err(BoardStoreError::persistence)?;
        }
    }
    Ok(board)
}

fn column_exists(state: &InMemoryBoardState, board_id: &BoardId, column_id: &ColumnId) -> bool {
    state
        .columns
        .get(board_id)
        .is_some_and(|columns| columns.iter().any(|column| column.id() == column_id))
}

#[async_trait]
impl BoardStore for InMemoryBoardStore {
    async fn fetch_or_seed(&self, board_id: &BoardId) -> BoardStoreResult<Board> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.columns.get(board_id).is_none_or(|columns| columns.is_empty()) {
            state.columns.insert(board_id.clone(), default_columns());
        }
        assemble_board(&state, board_id)
    }

    async fn create_task(
        &self,
        board_id: &BoardId,
        task: &Task,
        column_id: &ColumnId,
        position: i64,
    ) -> BoardStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !column_exists(&state, board_id, column_id) {
            return Err(BoardStoreError::UnknownColumn(column_id.clone()));
        }
        state.rows.insert(
            task.id().clone(),
            StoredTask {
                board_id: board_id.clone(),
                column_id: column_id.clone(),
                position,
                task: task.clone(),
            },
        );
        Ok(())
    }

    async fn update_task(&self, task: &Task) -> BoardStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let row = state
            .rows
            .get_mut(task.id())
            .ok_or_else(|| BoardStoreError::NotFound(task.id().clone()))?;
        row.task = task.clone();
        Ok(())
    }

    async fn delete_task(&self, task_id: &TaskId) -> BoardStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .rows
            .remove(task_id)
            .map(|_| ())
            .ok_or_else(|| BoardStoreError::NotFound(task_id.clone()))
    }

    async fn batch_reposition(
        &self,
        board_id: &BoardId,
        entries: &[Reposition],
    ) -> BoardStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        // Entries are applied one at a time: a mid-batch failure leaves the
        // earlier entries in place, matching the tolerated partial-application
        // behaviour the reconciliation service compensates for by refetching.
        for entry in entries {
            if !column_exists(&state, board_id, &entry.column_id) {
                return Err(BoardStoreError::UnknownColumn(entry.column_id.clone()));
            }
            let row = state
                .rows
                .get_mut(&entry.task_id)
                .ok_or_else(|| BoardStoreError::NotFound(entry.task_id.clone()))?;
            row.column_id = entry.column_id.clone();
            row.position = entry.position;
        }
        Ok(())
    }
}
