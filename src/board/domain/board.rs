//! Board aggregate: ordered columns, per-column task order, and task records.

use super::{BoardDomainError, BoardInvariantError, ColumnId, Task, TaskDraft, TaskId};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Column descriptor: identifier plus display title.
///
/// Column order on the board is the seeded order; this core never reorders
/// columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
}

impl Column {
    /// Creates a column descriptor.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Default column set seeded for a board with no columns.
#[must_use]
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new(ColumnId::new("todo"), "To Do"),
        Column::new(ColumnId::new("doing"), "In Progress"),
        Column::new(ColumnId::new("done"), "Done"),
    ]
}

/// In-memory board snapshot.
///
/// Every transformation returns a new `Board` value and leaves the receiver
/// untouched, so callers can retain the previous snapshot for rollback or
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
    sequences: HashMap<ColumnId, Vec<TaskId>>,
    tasks: HashMap<TaskId, Task>,
}

impl Board {
    /// Creates a board with the given columns and no tasks.
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        let sequences = columns
            .iter()
            .map(|column| (column.id().clone(), Vec::new()))
            .collect();
        Self {
            columns,
            sequences,
            tasks: HashMap::new(),
        }
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the ordered task identifiers of a column, or `None` for an
    /// unknown column.
    #[must_use]
    pub fn tasks_in(&self, column_id: &ColumnId) -> Option<&[TaskId]> {
        self.sequences.get(column_id).map(Vec::as_slice)
    }

    /// Returns the task record for an identifier, if present.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Returns the identifier of the column whose sequence contains the task.
    #[must_use]
    pub fn column_of(&self, task_id: &TaskId) -> Option<&ColumnId> {
        self.sequences
            .iter()
            .find(|(_, sequence)| sequence.contains(task_id))
            .map(|(column_id, _)| column_id)
    }

    /// Returns whether the board has a column with the given identifier.
    #[must_use]
    pub fn contains_column(&self, column_id: &ColumnId) -> bool {
        self.sequences.contains_key(column_id)
    }

    /// Returns a new board with the task appended to the column's sequence
    /// and its record inserted.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownColumn`] for an unknown column and
    /// [`BoardDomainError::DuplicateTask`] when the identifier is already on
    /// the board.
    pub fn with_task_added(
        &self,
        column_id: &ColumnId,
        task: Task,
    ) -> Result<Self, BoardDomainError> {
        if self.tasks.contains_key(task.id()) {
            return Err(BoardDomainError::DuplicateTask(task.id().clone()));
        }
        let mut next = self.clone();
        let sequence = next
            .sequences
            .get_mut(column_id)
            .ok_or_else(|| BoardDomainError::UnknownColumn(column_id.clone()))?;
        sequence.push(task.id().clone());
        next.tasks.insert(task.id().clone(), task);
        Ok(next)
    }

    /// Returns a new board with the task's editable fields replaced by the
    /// draft and its update timestamp refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownTask`] for an unknown task and
    /// [`BoardDomainError::EmptyTaskTitle`] when the draft title is empty.
    pub fn with_task_edited(
        &self,
        task_id: &TaskId,
        draft: TaskDraft,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let mut next = self.clone();
        let task = next
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| BoardDomainError::UnknownTask(task_id.clone()))?;
        task.apply_draft(draft, clock)?;
        Ok(next)
    }

    /// Returns a new board with the task removed from its column's sequence
    /// and from the task mapping.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownTask`] when the task is absent from
    /// every column sequence.
    pub fn with_task_removed(&self, task_id: &TaskId) -> Result<Self, BoardDomainError> {
        let column_id = self
            .column_of(task_id)
            .ok_or_else(|| BoardDomainError::UnknownTask(task_id.clone()))?
            .clone();
        let mut next = self.clone();
        if let Some(sequence) = next.sequences.get_mut(&column_id) {
            sequence.retain(|id| id != task_id);
        }
        next.tasks.remove(task_id);
        Ok(next)
    }

    /// Replaces a column's sequence wholesale.
    ///
    /// Used by move resolution, which edits sequences rather than records.
    pub(crate) fn set_sequence(&mut self, column_id: &ColumnId, sequence: Vec<TaskId>) {
        self.sequences.insert(column_id.clone(), sequence);
    }

    /// Checks the structural invariants of the board.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardInvariantError`] found: a sequence keyed by
    /// an unknown column, a duplicated sequence entry, a sequenced identifier
    /// without a record, or a record absent from every sequence.
    pub fn verify(&self) -> Result<(), BoardInvariantError> {
        let known_columns: HashSet<&ColumnId> =
            self.columns.iter().map(Column::id).collect();
        let mut sequenced: HashSet<&TaskId> = HashSet::new();

        for (column_id, sequence) in &self.sequences {
            if !known_columns.contains(column_id) {
                return Err(BoardInvariantError::UnknownSequenceColumn(column_id.clone()));
            }
            for task_id in sequence {
                if !sequenced.insert(task_id) {
                    return Err(BoardInvariantError::DuplicateEntry(task_id.clone()));
                }
                if !self.tasks.contains_key(task_id) {
                    return Err(BoardInvariantError::MissingRecord(task_id.clone()));
                }
            }
        }
        for task_id in self.tasks.keys() {
            if !sequenced.contains(task_id) {
                return Err(BoardInvariantError::OrphanedRecord(task_id.clone()));
            }
        }
        Ok(())
    }
}
