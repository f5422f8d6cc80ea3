//! Command-line interface for sanmoku.

use clap::{Parser, Subcommand};
use sanmoku_core::GameEvent;

/// Sanmoku - tic-tac-toe with time-travel through the move history
#[derive(Parser, Debug)]
#[command(name = "sanmoku")]
#[command(about = "Tic-tac-toe with a browsable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults apply when it does not exist)
    #[arg(short, long, default_value = "sanmoku.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Feed events through the game and print the resulting position
    Replay {
        /// Events in order: `N` or `cell:N` selects cell N (0-8), `jump:N`
        /// views ply N, `toggle` flips the move-list order
        #[arg(required = true)]
        events: Vec<GameEvent>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,

        /// Start with the move list in descending order
        #[arg(long)]
        descending: bool,

        /// Hide move coordinates in the move list
        #[arg(long)]
        no_coordinates: bool,
    },
}
