//! Terminal front end for the oxo engine.
//!
//! Reads cell numbers from stdin and forwards them to the rules
//! engine; the engine pushes renders and status lines back out through
//! a [`ConsolePresenter`] on stdout.

use anyhow::Result;
use clap::Parser;
use oxo::{ConsolePresenter, Game};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Name of the first player (plays X, moves first)
    #[arg(long, default_value = "")]
    player_one: String,

    /// Name of the second player (plays O)
    #[arg(long, default_value = "")]
    player_two: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut game = Game::new(ConsolePresenter::new(io::stdout()));
    game.start(&cli.player_one, &cli.player_two);
    println!("Pick a cell (1-9), or q to quit.");

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }
        match input.parse::<usize>() {
            Ok(cell @ 1..=9) => game.play_turn(cell - 1),
            _ => println!("Pick a cell (1-9), or q to quit."),
        }
        if game.status().is_concluded() {
            break;
        }
    }

    Ok(())
}
