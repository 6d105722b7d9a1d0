//! Error types for board domain validation and invariant checking.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned by board transformation operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The referenced column does not exist on the board.
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),

    /// The referenced task does not exist on the board.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// A task with the same identifier is already present on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}

/// Structural invariant violations detected by [`Board::verify`].
///
/// These indicate a programming error in board construction or
/// transformation, not a recoverable runtime condition.
///
/// [`Board::verify`]: super::Board::verify
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardInvariantError {
    /// A task identifier appears more than once across column sequences.
    #[error("task {0} appears in more than one sequence position")]
    DuplicateEntry(TaskId),

    /// A sequence entry has no corresponding task record.
    #[error("task {0} is sequenced but has no record")]
    MissingRecord(TaskId),

    /// A task record is not referenced by any column sequence.
    #[error("task {0} has a record but appears in no column")]
    OrphanedRecord(TaskId),

    /// A task sequence is keyed by a column absent from the column list.
    #[error("sequence references unknown column {0}")]
    UnknownSequenceColumn(ColumnId),
}

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
