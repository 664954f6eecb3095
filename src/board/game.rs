//! Tic-tac-toe game driven by a history tracker.

use super::cell::{Cell, Player};
use super::error::BoardError;
use super::state::{BoardState, Position};
use crate::core::StateTracker;
use tracing::debug;

/// A tic-tac-toe board with undo and redo.
///
/// Each edit records a fresh [`BoardState`] after discarding any redo
/// entries, so undoing a few moves and then playing a new one starts a new
/// branch. The player to move is part of each snapshot, which means undo
/// and redo hand the turn back and forth as well.
///
/// # Example
///
/// ```rust
/// use rewind::board::{Cell, Game, Player};
///
/// let mut game = Game::new();
/// game.mark_cell(4).unwrap();
/// game.mark_cell((0, 0)).unwrap();
/// assert_eq!(game.cell_at(0), Ok(Cell::Marked(Player::Two)));
///
/// game.undo();
/// assert_eq!(game.cell_at(0), Ok(Cell::Empty));
/// assert!(game.is_player_two());
///
/// game.redo();
/// assert!(game.is_player_one());
/// ```
#[derive(Debug)]
pub struct Game {
    history: StateTracker<BoardState>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start with an empty board and player one to move.
    pub fn new() -> Self {
        Self {
            history: StateTracker::with_initial(BoardState::default()),
        }
    }

    /// Register a callback fired whenever undo, redo, a move or a reset
    /// changes the visible board.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.history.set_on_change(callback);
    }

    /// Board currently shown.
    pub fn board(&self) -> BoardState {
        self.history.current().copied().unwrap_or_default()
    }

    /// Underlying history.
    pub fn history(&self) -> &StateTracker<BoardState> {
        &self.history
    }

    /// Content of a cell on the current board.
    pub fn cell_at(&self, position: impl Into<Position>) -> Result<Cell, BoardError> {
        self.board().cell(position)
    }

    /// Player whose mark the next `mark_cell` places.
    pub fn player_to_move(&self) -> Player {
        self.board().turn
    }

    /// `true` when player one (`X`) is to move.
    pub fn is_player_one(&self) -> bool {
        self.player_to_move() == Player::One
    }

    /// `true` when player two (`O`) is to move.
    pub fn is_player_two(&self) -> bool {
        self.player_to_move() == Player::Two
    }

    /// Place the current player's mark and pass the turn.
    pub fn mark_cell(&mut self, position: impl Into<Position>) -> Result<(), BoardError> {
        let index = position.into().index()?;
        let mut board = self.board();

        if !board.cells[index].is_empty() {
            return Err(BoardError::CellOccupied { index });
        }

        board.cells[index] = Cell::Marked(board.turn);
        debug!(index, player = %board.turn, "Cell marked");
        board.turn = board.turn.other();
        self.record(board);
        Ok(())
    }

    /// Remove a mark. The player who owned it moves next.
    pub fn clear_cell(&mut self, position: impl Into<Position>) -> Result<(), BoardError> {
        let index = position.into().index()?;
        let mut board = self.board();

        let Some(owner) = board.cells[index].owner() else {
            return Err(BoardError::CellEmpty { index });
        };

        board.cells[index] = Cell::Empty;
        board.turn = owner;
        debug!(index, player = %owner, "Cell cleared");
        self.record(board);
        Ok(())
    }

    /// Reset to an empty board, dropping all history.
    pub fn clear(&mut self) {
        self.history.clear(BoardState::default());
    }

    /// Step back one move. Returns `false` at the start of history.
    pub fn undo(&mut self) -> bool {
        self.history.back()
    }

    /// Step forward one move. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.next()
    }

    /// Whether [`undo`](Self::undo) would change the board.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`redo`](Self::redo) would change the board.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn record(&mut self, board: BoardState) {
        self.history.fork();
        self.history.push(board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell as Counter;
    use std::rc::Rc;

    fn x() -> Cell {
        Cell::Marked(Player::One)
    }

    fn o() -> Cell {
        Cell::Marked(Player::Two)
    }

    #[test]
    fn new_game_is_empty() {
        let game = Game::new();
        assert_eq!(game.board(), BoardState::default());
        assert!(game.is_player_one());
        assert!(!game.can_undo());
        assert!(!game.can_redo());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn marks_alternate_between_players() {
        let mut game = Game::new();

        game.mark_cell(0).unwrap();
        game.mark_cell(1).unwrap();
        game.mark_cell(2).unwrap();

        assert_eq!(game.cell_at(0), Ok(x()));
        assert_eq!(game.cell_at(1), Ok(o()));
        assert_eq!(game.cell_at(2), Ok(x()));
        assert!(game.is_player_two());
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn marking_occupied_cell_fails_without_recording() {
        let mut game = Game::new();
        game.mark_cell((1, 1)).unwrap();

        let result = game.mark_cell(4);

        assert_eq!(result, Err(BoardError::CellOccupied { index: 4 }));
        assert_eq!(game.history().len(), 2);
        assert!(game.is_player_two());
    }

    #[test]
    fn off_board_position_fails() {
        let mut game = Game::new();

        assert_eq!(
            game.mark_cell(9),
            Err(BoardError::OutOfBounds(Position::Index(9)))
        );
        assert_eq!(
            game.clear_cell((3, 3)),
            Err(BoardError::OutOfBounds(Position::Grid { x: 3, y: 3 }))
        );
        assert!(game.cell_at(10).is_err());
    }

    #[test]
    fn clear_cell_hands_turn_to_owner() {
        let mut game = Game::new();
        game.mark_cell(0).unwrap();
        game.mark_cell(1).unwrap();
        assert!(game.is_player_one());

        game.clear_cell(1).unwrap();

        assert_eq!(game.cell_at(1), Ok(Cell::Empty));
        assert!(game.is_player_two());
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn clearing_empty_cell_fails() {
        let mut game = Game::new();
        assert_eq!(game.clear_cell(3), Err(BoardError::CellEmpty { index: 3 }));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn undo_and_redo_restore_board_and_turn() {
        let mut game = Game::new();
        game.mark_cell(0).unwrap();
        game.mark_cell(8).unwrap();

        assert!(game.undo());
        assert_eq!(game.cell_at(8), Ok(Cell::Empty));
        assert!(game.is_player_two());

        assert!(game.undo());
        assert!(!game.undo());
        assert_eq!(game.board(), BoardState::default());

        assert!(game.redo());
        assert!(game.redo());
        assert!(!game.redo());
        assert_eq!(game.cell_at(8), Ok(o()));
        assert!(game.is_player_one());
    }

    #[test]
    fn move_after_undo_discards_redo_branch() {
        let mut game = Game::new();
        game.mark_cell(0).unwrap();
        game.mark_cell(1).unwrap();
        game.mark_cell(2).unwrap();
        game.undo();
        game.undo();

        game.mark_cell(5).unwrap();

        assert_eq!(game.history().len(), 3);
        assert!(!game.can_redo());
        assert_eq!(game.cell_at(1), Ok(Cell::Empty));
        assert_eq!(game.cell_at(5), Ok(o()));
    }

    #[test]
    fn clear_resets_board_and_history() {
        let mut game = Game::new();
        game.mark_cell(0).unwrap();
        game.mark_cell(1).unwrap();
        game.mark_cell(2).unwrap();

        game.clear();

        assert_eq!(game.board(), BoardState::default());
        assert_eq!(game.history().len(), 1);
        assert!(game.is_player_one());
    }

    #[test]
    fn on_change_fires_for_visible_updates() {
        let fired = Rc::new(Counter::new(0));
        let counter = Rc::clone(&fired);
        let mut game = Game::new();
        game.on_change(move || counter.set(counter.get() + 1));

        game.mark_cell(0).unwrap();
        game.mark_cell(1).unwrap();
        game.undo();
        game.redo();
        game.redo();
        let _ = game.mark_cell(0);
        game.clear();

        assert_eq!(fired.get(), 5);
    }
}
