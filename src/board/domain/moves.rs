//! Move resolution: computes the board resulting from a drag-and-drop move.

use super::{Board, BoardDomainError, ColumnId, TaskId};

/// Where a dragged task was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Dropped on another task; the moved task is inserted relative to it
    /// inside that task's column.
    OnTask(TaskId),
    /// Dropped on a column body; the moved task is appended to that column.
    OnColumn(ColumnId),
}

/// Computes the board resulting from moving `task_id` to `target`.
///
/// Same-column moves are a remove-and-reinsert permutation of one sequence;
/// cross-column moves remove from the source sequence and insert into the
/// target sequence. Dropping a task on itself returns the input board
/// unchanged. A reference task that cannot be located in the target sequence
/// degrades to insert-at-end rather than failing.
///
/// # Errors
///
/// Returns [`BoardDomainError::UnknownTask`] when the moved task or a
/// reference task is on no column, and [`BoardDomainError::UnknownColumn`]
/// when the drop column does not exist.
pub fn resolve_move(
    board: &Board,
    task_id: &TaskId,
    target: &DropTarget,
) -> Result<Board, BoardDomainError> {
    if matches!(target, DropTarget::OnTask(reference) if reference == task_id) {
        return Ok(board.clone());
    }

    let source_column = board
        .column_of(task_id)
        .ok_or_else(|| BoardDomainError::UnknownTask(task_id.clone()))?
        .clone();

    let (target_column, reference) = match target {
        DropTarget::OnTask(reference) => {
            let column = board
                .column_of(reference)
                .ok_or_else(|| BoardDomainError::UnknownTask(reference.clone()))?
                .clone();
            (column, Some(reference))
        }
        DropTarget::OnColumn(column_id) => {
            if !board.contains_column(column_id) {
                return Err(BoardDomainError::UnknownColumn(column_id.clone()));
            }
            (column_id.clone(), None)
        }
    };

    let mut next = board.clone();
    if source_column == target_column {
        let sequence = board.tasks_in(&source_column).unwrap_or_default();
        let reordered = reorder_within(sequence, task_id, reference);
        if reordered == sequence {
            return Ok(board.clone());
        }
        next.set_sequence(&source_column, reordered);
    } else {
        let source = board.tasks_in(&source_column).unwrap_or_default();
        let destination = board.tasks_in(&target_column).unwrap_or_default();
        let (from, to) = transfer_between(source, destination, task_id, reference);
        next.set_sequence(&source_column, from);
        next.set_sequence(&target_column, to);
    }

    debug_assert!(next.verify().is_ok(), "move resolution broke board invariants");
    Ok(next)
}

/// Removes the task from the sequence and reinserts it at the reference
/// task's pre-removal index, or at the end without a reference.
fn reorder_within(sequence: &[TaskId], task_id: &TaskId, reference: Option<&TaskId>) -> Vec<TaskId> {
    let insert_at = reference.and_then(|id| sequence.iter().position(|entry| entry == id));
    let mut reordered: Vec<TaskId> = sequence
        .iter()
        .filter(|entry| *entry != task_id)
        .cloned()
        .collect();
    let index = insert_at.map_or(reordered.len(), |at| at.min(reordered.len()));
    reordered.insert(index, task_id.clone());
    reordered
}

/// Removes the task from the source sequence and inserts it into the
/// destination at the reference task's index, or at the end.
fn transfer_between(
    source: &[TaskId],
    destination: &[TaskId],
    task_id: &TaskId,
    reference: Option<&TaskId>,
) -> (Vec<TaskId>, Vec<TaskId>) {
    let from: Vec<TaskId> = source
        .iter()
        .filter(|entry| *entry != task_id)
        .cloned()
        .collect();
    let mut to: Vec<TaskId> = destination.to_vec();
    let index = reference
        .and_then(|id| to.iter().position(|entry| entry == id))
        .map_or(to.len(), |at| at.min(to.len()));
    to.insert(index, task_id.clone());
    (from, to)
}
