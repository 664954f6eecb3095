//! Tic-tac-toe with undo and redo
//!
//! This example plays a short game and walks back and forth through its
//! history.
//!
//! Key concepts:
//! - Every move is a fresh snapshot in the history
//! - Undo/redo restore both the board and the player to move
//! - Playing after an undo discards the old redo branch
//! - The change callback is where a UI would re-render
//!
//! Run with: cargo run --example tic_tac_toe

use rewind::board::{BoardError, Game};
use std::cell::Cell;
use std::rc::Rc;

fn show(title: &str, game: &Game) {
    println!("{} ({} to move)", title, game.player_to_move());
    println!("{}\n", game.board());
}

fn main() -> Result<(), BoardError> {
    println!("=== Tic-Tac-Toe History Example ===\n");

    let renders = Rc::new(Cell::new(0));
    let counter = Rc::clone(&renders);

    let mut game = Game::new();
    game.on_change(move || counter.set(counter.get() + 1));

    game.mark_cell((1, 1))?;
    game.mark_cell((0, 0))?;
    game.mark_cell((2, 0))?;
    show("After three moves", &game);

    if let Err(err) = game.mark_cell(4) {
        println!("Rejected: {}\n", err);
    }

    game.undo();
    game.undo();
    show("After two undos", &game);

    game.redo();
    show("After one redo", &game);

    game.mark_cell((2, 2))?;
    show("New branch", &game);
    println!("Redo available: {}", game.can_redo());
    println!("History length: {}\n", game.history().len());

    game.clear_cell((1, 1))?;
    show("Centre cleared", &game);

    game.clear();
    show("Reset", &game);

    println!("Board re-rendered {} times", renders.get());
    println!("\n=== Example Complete ===");
    Ok(())
}
