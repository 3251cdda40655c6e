//! Terminal front end for time-travel tic-tac-toe.
//!
//! A thin adapter over [`tictactoe_core`]: keys become intents, and every
//! frame is drawn from a freshly derived view.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod script;
mod terminal;
mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use input::{digit_position, move_cursor};
pub use logging::{init_file_logging, init_stderr_logging};
pub use script::{ScriptError, parse_token, render_text, run_script};
pub use terminal::run_tui;
pub use ui::draw;
