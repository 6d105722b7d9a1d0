//! Domain model for the board synchronization core.
//!
//! The board domain models columns, per-column task order, task records,
//! move resolution, and position allocation as pure data and pure
//! transformations, keeping all infrastructure concerns outside of the
//! domain boundary.

mod board;
mod error;
mod ids;
mod moves;
mod positions;
mod task;

pub use board::{Board, Column, default_columns};
pub use error::{BoardDomainError, BoardInvariantError, ParsePriorityError};
pub use ids::{BoardId, ColumnId, TaskId};
pub use moves::{DropTarget, resolve_move};
pub use positions::{DEFAULT_SPACING, Reposition, allocate_positions};
pub use task::{PersistedTaskData, Priority, Task, TaskDraft};
