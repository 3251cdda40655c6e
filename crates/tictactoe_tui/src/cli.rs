//! Command-line interface for the tic-tac-toe client.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a sequence of moves and jumps, then print the resulting view
    Script {
        /// Tokens: `1`-`9` clicks that cell (row-major), `@N` jumps to step N
        #[arg(required = true)]
        tokens: Vec<String>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
