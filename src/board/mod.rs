//! Tic-tac-toe board model.
//!
//! A plain-data rendition of the board widget: snapshots of the nine cells
//! plus the player to move, recorded in a [`StateTracker`](crate::core::StateTracker)
//! so moves can be undone and redone. Rendering is left to the caller, which
//! can subscribe with [`Game::on_change`] and draw [`Game::board`].

mod cell;
mod error;
mod game;
mod state;

pub use cell::{Cell, Player};
pub use error::BoardError;
pub use game::Game;
pub use state::{BoardState, Position, CELL_COUNT, SIDE};
