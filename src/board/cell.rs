//! Players and cell contents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players. Player one marks `X`, player two marks `O`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Glyph drawn for this player's marks.
    pub fn mark(self) -> char {
        match self {
            Self::One => 'X',
            Self::Two => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("player one"),
            Self::Two => f.write_str("player two"),
        }
    }
}

/// Content of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Player),
}

impl Cell {
    /// `true` if no player has marked the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Owner of the mark, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Marked(player) => Some(player),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("."),
            Self::Marked(player) => write!(f, "{}", player.mark()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_swaps_players() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::One.other().other(), Player::One);
    }

    #[test]
    fn player_one_moves_first() {
        assert_eq!(Player::default(), Player::One);
    }

    #[test]
    fn cells_render_marks() {
        assert_eq!(Cell::Empty.to_string(), ".");
        assert_eq!(Cell::Marked(Player::One).to_string(), "X");
        assert_eq!(Cell::Marked(Player::Two).to_string(), "O");
    }

    #[test]
    fn owner_reports_marking_player() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Marked(Player::Two).owner(), Some(Player::Two));
        assert!(Cell::default().is_empty());
        assert!(!Cell::Marked(Player::One).is_empty());
    }

    #[test]
    fn cell_serializes_correctly() {
        let cell = Cell::Marked(Player::Two);
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
