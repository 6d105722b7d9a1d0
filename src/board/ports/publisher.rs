//! Publisher port: the core-to-collaborator snapshot channel.

use crate::board::domain::Board;

/// Receives every board snapshot the core decides to render.
///
/// Called for optimistic, settled, and rollback snapshots alike; the most
/// recently published board is always the one to display. Publishing is a
/// local handoff to the rendering layer, so the port is synchronous.
pub trait BoardPublisher: Send + Sync {
    /// Publishes a new board snapshot.
    fn publish(&self, board: &Board);
}
