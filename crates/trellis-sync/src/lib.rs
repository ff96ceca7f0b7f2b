//! Optimistic sync for drag-and-drop reordering.
//!
//! [`SyncController`] owns the working copy of one board. Each finished drag
//! is planned, applied locally, and pushed to the server as concurrent
//! partial updates; any rejected write triggers a single wholesale refetch
//! that replaces the working copy with server truth.

pub mod backend;
pub mod controller;
pub mod state;

pub use backend::SyncBackend;
pub use controller::{DragOutcome, SyncController};
pub use state::BoardState;
