//! Board snapshots and cell addressing.

use super::cell::{Cell, Player};
use super::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// Address of a cell, either row-major index or `(x, y)` coordinates.
///
/// # Example
///
/// ```rust
/// use rewind::board::Position;
///
/// assert_eq!(Position::from(4).index(), Ok(4));
/// assert_eq!(Position::from((2, 1)).index(), Ok(5));
/// assert!(Position::from((3, 0)).index().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Index(usize),
    Grid { x: usize, y: usize },
}

impl Position {
    /// Resolve to a row-major index, rejecting anything off the board.
    pub fn index(self) -> Result<usize, BoardError> {
        let index = match self {
            Self::Index(index) if index < CELL_COUNT => index,
            Self::Grid { x, y } if x < SIDE && y < SIDE => y * SIDE + x,
            _ => return Err(BoardError::OutOfBounds(self)),
        };
        Ok(index)
    }
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::Grid { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{}", index),
            Self::Grid { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

/// Full board configuration plus the player to move.
///
/// This is the snapshot stored in a game's history. It is `Copy`, so every
/// move produces a fresh value and earlier entries never change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; CELL_COUNT],
    pub turn: Player,
}

impl BoardState {
    /// Cell at a position.
    pub fn cell(&self, position: impl Into<Position>) -> Result<Cell, BoardError> {
        let index = position.into().index()?;
        Ok(self.cells[index])
    }

    /// Count of marked cells.
    pub fn marked(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
