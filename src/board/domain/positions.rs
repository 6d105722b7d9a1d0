//! Position allocation: integer sort keys derived from sequence order.

use super::{ColumnId, TaskId};

/// Default gap between consecutive position keys.
pub const DEFAULT_SPACING: i64 = 100;

/// One persisted position assignment produced by allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reposition {
    /// Task being positioned.
    pub task_id: TaskId,
    /// Column owning the task after the triggering mutation.
    pub column_id: ColumnId,
    /// Integer sort key; strictly increasing in sequence order.
    pub position: i64,
}

/// Assigns `index * spacing` positions to every identifier in a column's
/// sequence.
///
/// Positions are strictly increasing in sequence order; no two entries from
/// one call share a key. The whole column is renumbered on every call. This
/// costs a full-column write per reorder and is acceptable for small boards;
/// no insert-without-renumbering scheme is implemented.
#[must_use]
pub fn allocate_positions(column_id: &ColumnId, sequence: &[TaskId], spacing: i64) -> Vec<Reposition> {
    let mut position = 0_i64;
    let mut entries = Vec::with_capacity(sequence.len());
    for task_id in sequence {
        entries.push(Reposition {
            task_id: task_id.clone(),
            column_id: column_id.clone(),
            position,
        });
        position = position.saturating_add(spacing);
    }
    entries
}
