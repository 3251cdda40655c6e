//! Tic-tac-toe game state with move history and time travel.
//!
//! This crate is the framework-agnostic half of the game: it has no
//! rendering dependency and can be driven entirely from tests.
//!
//! # Architecture
//!
//! - **Rules**: [`check_winner`] evaluates a board.
//! - **History**: [`HistoryStore`] keeps every [`Snapshot`] plus a cursor.
//! - **Controller**: [`GameController`] applies [`Intent`]s and derives a
//!   [`ViewState`] for renderers.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameController, Intent, Position};
//!
//! let mut game = GameController::new();
//! game.dispatch(Intent::CellClicked(Position::Center)).unwrap();
//! assert_eq!(game.view().status_line(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod history;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::Intent;
pub use controller::GameController;
pub use history::{HistoryError, HistoryStore, Snapshot};
pub use position::Position;
pub use rules::check_winner;
pub use types::{Board, Player, Square};
pub use view::{GAME_START_LABEL, GameStatus, MoveEntry, ViewState};
