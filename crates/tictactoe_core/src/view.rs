//! Derived view state handed to renderers.
//!
//! Nothing here is stored: every value is recomputed from the history store
//! each time [`GameController::view`](crate::GameController::view) is called.

use crate::{Board, Player, Snapshot};
use derive_getters::Getters;
use serde::Serialize;

/// Label of the move-list entry for the initial snapshot.
pub const GAME_START_LABEL: &str = "Go to game start";

/// Status of the game at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum GameStatus {
    /// No winner yet; `next` is to move. Also covers a full board with no line.
    #[display("Next player: {next}")]
    InProgress {
        /// The player to move.
        next: Player,
    },
    /// The current board holds a winning line.
    #[display("Winner: {_0}")]
    Won(Player),
}

impl GameStatus {
    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress { .. } => None,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Button text, e.g. "Go to move #3".
    label: String,
    /// `(col, row)` of the move, empty for the game start.
    coordinate_text: String,
    /// Whether this entry is the step currently viewed.
    active: bool,
}

impl MoveEntry {
    /// Builds the entry for `snapshot` at `step`, given the current cursor.
    pub fn new(step: usize, snapshot: &Snapshot, cursor: usize) -> Self {
        let label = if step == 0 {
            GAME_START_LABEL.to_string()
        } else {
            format!("Go to move #{step}")
        };
        let coordinate_text = snapshot
            .position()
            .map(|pos| pos.coordinate_text().to_string())
            .unwrap_or_default();
        Self {
            step,
            label,
            coordinate_text,
            active: step == cursor,
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ViewState {
    /// Board at the current step.
    board: Board,
    /// Winner or next player at the current step.
    status: GameStatus,
    /// One entry per stored snapshot, in history order.
    moves: Vec<MoveEntry>,
}

impl ViewState {
    /// Assembles a view from its parts.
    pub fn new(board: Board, status: GameStatus, moves: Vec<MoveEntry>) -> Self {
        Self {
            board,
            status,
            moves,
        }
    }

    /// Returns the status line, e.g. "Winner: X".
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }

    /// Returns the step of the active move-list entry.
    pub fn active_step(&self) -> Option<usize> {
        self.moves
            .iter()
            .find(|entry| entry.active)
            .map(|entry| entry.step)
    }
}
