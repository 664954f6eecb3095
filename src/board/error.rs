//! Board move errors.

use super::state::Position;
use thiserror::Error;

/// Errors that can occur when editing a board
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Index or coordinates do not name one of the nine cells
    #[error("Position {0} is outside the 3x3 board")]
    OutOfBounds(Position),

    /// Marking a cell that already holds a mark
    #[error("Cell {index} is already marked")]
    CellOccupied { index: usize },

    /// Clearing a cell that holds no mark
    #[error("Cell {index} is already empty")]
    CellEmpty { index: usize },
}
