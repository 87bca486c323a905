//! Turn sequencing and game lifecycle.

use crate::presenter::Presenter;
use crate::rules;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A named participant with an assigned mark.
///
/// Both players are constructed by [`Game::start`] and fixed for the
/// duration of the game. A blank name falls back to a placeholder so
/// the status line always has something to say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    fn new(name: &str, mark: Mark) -> Self {
        let name = match name.trim() {
            "" => match mark {
                Mark::X => "Player 1",
                Mark::O => "Player 2",
            },
            trimmed => trimmed,
        };
        Self {
            name: name.to_string(),
            mark,
        }
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Lifecycle of a game.
///
/// `NotStarted → InProgress → Won | Tie`, with [`Game::start`] looping
/// back to `InProgress` from any state. A game reaches a terminal
/// status at most once per start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// No players yet; waiting for the first start.
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// All cells filled with no complete line.
    Tie,
}

impl Status {
    /// Checks if the game has reached a terminal status.
    pub fn is_concluded(&self) -> bool {
        matches!(self, Status::Won(_) | Status::Tie)
    }
}

/// The rules engine: owns the board, the players, and whose turn it is.
///
/// Input arrives through [`start`](Game::start) and
/// [`play_turn`](Game::play_turn); state flows out through the
/// [`Presenter`] after every accepted input. Rejected input (occupied
/// cell, out-of-range index, move after the game ended) changes nothing
/// and notifies nothing.
#[derive(Debug)]
pub struct Game<P: Presenter> {
    board: Board,
    players: Option<(Player, Player)>,
    current: Mark,
    status: Status,
    history: Vec<usize>,
    presenter: P,
}

impl<P: Presenter> Game<P> {
    /// Creates an engine with no players and an empty board.
    #[instrument(skip_all)]
    pub fn new(presenter: P) -> Self {
        Self {
            board: Board::new(),
            players: None,
            current: Mark::X,
            status: Status::NotStarted,
            history: Vec::new(),
            presenter,
        }
    }

    /// Starts a fresh game between `name_a` (X) and `name_b` (O).
    ///
    /// Valid in any state: a finished or in-progress game is discarded
    /// and the board cleared. X always moves first. The presenter gets
    /// a board render and a whose-turn message.
    #[instrument(skip(self))]
    pub fn start(&mut self, name_a: &str, name_b: &str) {
        let player_x = Player::new(name_a, Mark::X);
        let player_o = Player::new(name_b, Mark::O);
        info!(x = %player_x.name(), o = %player_o.name(), "starting game");

        self.players = Some((player_x, player_o));
        self.current = Mark::X;
        self.status = Status::InProgress;
        self.board.reset();
        self.history.clear();

        self.presenter.render_board(&self.board);
        self.announce_turn();
    }

    /// Plays the current player's mark at `index` (0-8).
    ///
    /// No-op unless the game is in progress and the cell is empty and
    /// in range. An accepted move re-renders the board, then either
    /// concludes the game (win checked before tie, so a winning final
    /// move wins) or passes the turn to the other player.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, index: usize) {
        let Some((player_x, player_o)) = &self.players else {
            warn!(index, "turn ignored: game has not started");
            return;
        };
        if self.status.is_concluded() {
            warn!(index, "turn ignored: game is over");
            return;
        }
        if !self.board.is_empty(index) {
            debug!(index, "turn ignored: cell unavailable");
            return;
        }

        let mover = match self.current {
            Mark::X => player_x.clone(),
            Mark::O => player_o.clone(),
        };
        self.board.set(index, self.current);
        self.history.push(index);
        self.presenter.render_board(&self.board);

        // A complete line can only belong to the player who just moved.
        if rules::winner(&self.board).is_some() {
            info!(winner = %mover.name(), index, "game won");
            self.presenter
                .set_message(&format!("{} wins!", mover.name()));
            self.status = Status::Won(mover);
        } else if self.board.is_full() {
            info!(index, "game tied");
            self.presenter.set_message("It's a tie!");
            self.status = Status::Tie;
        } else {
            self.current = self.current.opponent();
            self.announce_turn();
        }
    }

    fn announce_turn(&mut self) {
        let message = match self.current_player() {
            Some(player) => format!("{}'s turn!", player.name()),
            None => return,
        };
        self.presenter.set_message(&message);
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the player whose turn it is, once the game has started.
    pub fn current_player(&self) -> Option<&Player> {
        let (player_x, player_o) = self.players.as_ref()?;
        Some(match self.current {
            Mark::X => player_x,
            Mark::O => player_o,
        })
    }

    /// Returns both players (X first), once the game has started.
    pub fn players(&self) -> Option<(&Player, &Player)> {
        self.players.as_ref().map(|(x, o)| (x, o))
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
