//! Oxo - a tic-tac-toe rules engine with a pluggable presentation layer.
//!
//! The engine owns the board, the two players, and the turn sequence.
//! Front ends implement [`Presenter`] to receive renders and status
//! messages, and feed input back in through [`Game::start`] and
//! [`Game::play_turn`]. Invalid input is absorbed as a silent no-op;
//! there are no error returns anywhere in the core.
//!
//! # Example
//!
//! ```
//! use oxo::{ConsolePresenter, Game, Status};
//!
//! let mut game = Game::new(ConsolePresenter::new(std::io::sink()));
//! game.start("Ada", "Grace");
//! for index in [0, 3, 1, 4, 2] {
//!     game.play_turn(index);
//! }
//! assert!(game.status().is_concluded());
//! assert!(matches!(game.status(), Status::Won(p) if p.name() == "Ada"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod presenter;
pub mod rules;
mod types;

pub use game::{Game, Player, Status};
pub use presenter::{ConsolePresenter, Presenter};
pub use types::{Board, Cell, Mark};
