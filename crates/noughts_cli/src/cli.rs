//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play or evaluate tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (missing default file means defaults)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game at this terminal
    Play {
        /// Start a new game as soon as one ends
        #[arg(long)]
        auto_new_game: bool,

        /// Leave empty squares blank instead of numbering them
        #[arg(long)]
        hide_indices: bool,

        /// Number cells 0-8 instead of 1-9
        #[arg(long)]
        zero_based: bool,
    },

    /// Evaluate a board written as nine cells, e.g. "XO./.X./..O"
    Eval {
        /// Board in compact notation (X, O, and . for empty; / is optional)
        board: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
