//! Pinboard: optimistic synchronization core for a kanban-style task board.
//!
//! This crate provides the ordering and reconciliation logic behind a board
//! of columns holding draggable tasks: the in-memory board model, move
//! resolution, persisted position allocation, and the optimistic-update
//! controller that rolls back to authoritative store state when a write
//! fails.
//!
//! # Architecture
//!
//! Pinboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board data and transformations with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the remote store and the
//!   snapshot publisher
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! Rendering, drag-gesture detection, and forms are collaborators outside
//! this crate: they issue commands to
//! [`BoardSyncService`](board::services::BoardSyncService) and render the
//! snapshots it publishes.

pub mod board;
