//! Application state and key handling.

use crate::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_core::{GameController, HistoryError, Intent, Position};
use tracing::{debug, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

impl Focus {
    /// Toggles between `Board` and `Moves`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// Wraps the game controller with the UI-only state a terminal needs: a
/// board cursor standing in for the mouse, and a selected move-list row.
#[derive(Debug)]
pub struct App {
    game: GameController,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameController::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the highlighted move-list row.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Translates a key press into UI movement or a game intent.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] only if a jump targets a missing step, which
    /// the selection bounds rule out.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), HistoryError> {
        if let Some(pos) = digit_position(key) {
            self.cursor = pos;
            return self.apply(Intent::CellClicked(pos));
        }

        match (self.focus, key) {
            (_, KeyCode::Char('q') | KeyCode::Esc) => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            (_, KeyCode::Tab) => {
                self.focus = self.focus.toggle();
                self.selected_step = self.game.history().cursor();
            }
            (_, KeyCode::Home) => return self.apply(Intent::HistoryStepSelected(0)),
            (_, KeyCode::End) => {
                let last = self.game.history().len() - 1;
                return self.apply(Intent::HistoryStepSelected(last));
            }
            (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => {
                return self.apply(Intent::CellClicked(self.cursor));
            }
            (Focus::Board, arrow) => self.cursor = move_cursor(self.cursor, arrow),
            (Focus::Moves, KeyCode::Up) => {
                self.selected_step = self.selected_step.saturating_sub(1);
            }
            (Focus::Moves, KeyCode::Down) => {
                let last = self.game.history().len() - 1;
                self.selected_step = (self.selected_step + 1).min(last);
            }
            (Focus::Moves, KeyCode::Enter | KeyCode::Char(' ')) => {
                return self.apply(Intent::HistoryStepSelected(self.selected_step));
            }
            _ => {}
        }
        Ok(())
    }

    /// Forwards an intent to the controller and resyncs the selection.
    fn apply(&mut self, intent: Intent) -> Result<(), HistoryError> {
        debug!(%intent, "Dispatching intent");
        self.game.dispatch(intent)?;
        self.selected_step = self.game.history().cursor();
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
