//! Tic-tac-toe - unified CLI
//!
//! Plays interactively in the terminal, or replays a scripted game.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{
    AppConfig, Cli, Command, init_file_logging, init_stderr_logging, render_text, run_script,
    run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(&config)?;
            run_tui(&config)
        }
        Command::Script { tokens, json } => {
            init_stderr_logging();
            info!(count = tokens.len(), "Running script");
            let game = run_script(&tokens)?;
            let view = game.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render_text(&view, *config.show_coordinates()));
            }
            Ok(())
        }
    }
}
