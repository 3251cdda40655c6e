//! Game controller: applies intents to the history store.

use crate::rules::check_winner;
use crate::{
    GameStatus, HistoryError, HistoryStore, Intent, MoveEntry, Position, Snapshot, ViewState,
};
use tracing::{debug, info, instrument};

/// Owns one session's history and turns user intents into history changes.
///
/// Status, turn and the move list are derived from the snapshot under the
/// cursor on every read, so time travel never leaves stale state behind.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    history: HistoryStore,
}

impl GameController {
    /// Starts a new session at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: HistoryStore::new(),
        }
    }

    /// Returns the underlying history store.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Handles a click on `pos`.
    ///
    /// Clicks on an occupied square, or on any square once the current
    /// board has a winner, are ignored and leave the history untouched.
    #[instrument(skip(self), fields(step = self.history.cursor()))]
    pub fn handle_cell_click(&mut self, pos: Position) {
        let current = self.history.current();
        if let Some(winner) = check_winner(current.board()) {
            debug!(%winner, "Ignoring click on finished board");
            return;
        }
        if !current.board().is_empty(pos) {
            debug!(position = %pos, "Ignoring click on occupied square");
            return;
        }

        let player = self.history.to_move();
        let board = current.board().with_mark(pos, player);
        self.history.append(Snapshot::after_move(board, pos));
        info!(%player, position = %pos, step = self.history.cursor(), "Move placed");
    }

    /// Moves the cursor to `step` without discarding any history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `step` is not a stored step.
    #[instrument(skip(self))]
    pub fn handle_history_jump(&mut self, step: usize) -> Result<(), HistoryError> {
        self.history.jump(step)?;
        info!(step, "Jumped in history");
        Ok(())
    }

    /// Applies one intent.
    ///
    /// # Errors
    ///
    /// Propagates [`HistoryError`] from history jumps.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), HistoryError> {
        match intent {
            Intent::CellClicked(pos) => {
                self.handle_cell_click(pos);
                Ok(())
            }
            Intent::HistoryStepSelected(step) => self.handle_history_jump(step),
        }
    }

    /// Returns the status of the snapshot under the cursor.
    pub fn status(&self) -> GameStatus {
        match check_winner(self.history.current().board()) {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress {
                next: self.history.to_move(),
            },
        }
    }

    /// Derives the complete view state for rendering.
    pub fn view(&self) -> ViewState {
        let cursor = self.history.cursor();
        let moves = self
            .history
            .all()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry::new(step, snapshot, cursor))
            .collect();
        ViewState::new(*self.history.current().board(), self.status(), moves)
    }
}
