//! Ordered-collection synchronization for a column-based task board.
//!
//! This module keeps an in-memory board of columns and ordered task
//! sequences, computes the result of drag-and-drop moves, derives stable
//! integer positions for persistence, applies every mutation optimistically,
//! and reconciles with the remote store by refetching authoritative state
//! when a write fails. The module follows hexagonal architecture:
//!
//! - Domain types and pure transformations in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
