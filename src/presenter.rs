//! Presentation boundary between the rules engine and any front end.

use crate::types::Board;
use std::io::Write;
use tracing::debug;

/// Receives display notifications from the rules engine.
///
/// The engine pushes state out through these two operations and never
/// learns anything about the display in return. Input travels the other
/// way: the front end calls [`Game::start`](crate::Game::start) and
/// [`Game::play_turn`](crate::Game::play_turn) itself.
pub trait Presenter {
    /// Redraws all nine cells.
    fn render_board(&mut self, board: &Board);

    /// Displays a status line (whose turn it is, or the result).
    fn set_message(&mut self, text: &str);
}

/// Presenter that prints the board and status line to a writer.
#[derive(Debug)]
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn render_board(&mut self, board: &Board) {
        if let Err(error) = writeln!(self.out, "\n{}", board.render()) {
            debug!(%error, "board write failed");
        }
    }

    fn set_message(&mut self, text: &str) {
        if let Err(error) = writeln!(self.out, "{text}") {
            debug!(%error, "message write failed");
        }
    }
}
