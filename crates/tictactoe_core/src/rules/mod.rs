//! Game rules for tic-tac-toe.
//!
//! Rules are pure functions over a [`Board`](crate::Board), kept apart from
//! history storage so the controller can re-evaluate any snapshot the
//! cursor lands on.

pub mod win;

pub use win::{LINES, check_winner};
