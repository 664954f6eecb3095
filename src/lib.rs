//! Rewind: linear undo/redo history for immutable snapshots
//!
//! Rewind keeps an ordered list of snapshots and a cursor into it. Moving
//! the cursor is undo and redo; writing after moving back discards the
//! unreachable future. An optional observer is told, synchronously,
//! whenever the current snapshot moves.
//!
//! # Core Concepts
//!
//! - **Snapshot**: Any value the caller hands in; the tracker never looks inside
//! - **Cursor**: Index of the current snapshot
//! - **Fork**: Dropping every snapshot after the cursor
//! - **Rewrite**: Undo, fork and push in one step, amending the current entry
//!
//! The [`board`] module shows a complete consumer: a tic-tac-toe model whose
//! moves, undo and redo are all expressed through the tracker.
//!
//! # Example
//!
//! ```rust
//! use rewind::core::StateTracker;
//!
//! let mut history = StateTracker::new();
//! history.push([0u8; 3]);
//! history.push([1, 0, 0]);
//! history.push([1, 2, 0]);
//!
//! history.back();
//! assert_eq!(history.current(), Some(&[1, 0, 0]));
//!
//! history.fork();
//! history.push([1, 0, 2]);
//! assert_eq!(history.len(), 3);
//! assert!(!history.can_redo());
//! ```

pub mod board;
pub mod core;

// Re-export commonly used types
pub use crate::board::{BoardError, BoardState, Game};
pub use crate::core::{EndpointMode, StateTracker, TrackerOptions};
