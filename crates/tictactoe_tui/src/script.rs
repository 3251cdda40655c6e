//! Headless play: apply scripted intents and print the resulting view.

use derive_more::{Display, Error, From};
use tictactoe_core::{GameController, HistoryError, Intent, Position, ViewState};
use tracing::{info, instrument};

/// Errors from parsing or replaying a script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ScriptError {
    /// Token is neither a cell `1`-`9` nor a jump `@N`.
    #[display("Invalid script token {_0:?} (expected 1-9 or @N)")]
    #[from(skip)]
    InvalidToken(#[error(not(source))] String),

    /// A jump targeted a step that does not exist at that point.
    #[display("{_0}")]
    Jump(HistoryError),
}

/// Parses one token into an intent.
///
/// `1`-`9` click the cell with that move location; `@N` jumps to step `N`.
pub fn parse_token(token: &str) -> Result<Intent, ScriptError> {
    let token = token.trim();
    let invalid = || ScriptError::InvalidToken(token.to_string());

    if let Some(step) = token.strip_prefix('@') {
        let step = step.parse::<usize>().map_err(|_| invalid())?;
        return Ok(Intent::HistoryStepSelected(step));
    }

    token
        .parse::<usize>()
        .ok()
        .and_then(Position::from_move_location)
        .map(Intent::CellClicked)
        .ok_or_else(invalid)
}

/// Parses every token, then replays them on a fresh game.
///
/// Parsing happens up front so a bad token is reported before any move is
/// applied.
#[instrument(skip(tokens), fields(count = tokens.len()))]
pub fn run_script<S: AsRef<str>>(tokens: &[S]) -> Result<GameController, ScriptError> {
    let intents = tokens
        .iter()
        .map(|token| parse_token(token.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut game = GameController::new();
    for intent in intents {
        game.dispatch(intent)?;
    }
    info!(steps = game.history().len(), "Script finished");
    Ok(game)
}

/// Formats a view as plain text: board, status line, then the move list.
pub fn render_text(view: &ViewState, show_coordinates: bool) -> String {
    let mut out = format!("{}\n\n{}\n\n", view.board(), view.status());
    for entry in view.moves() {
        let marker = if *entry.active() { '>' } else { ' ' };
        let number = entry.step() + 1;
        out.push_str(&format!("{marker} {number}. {}", entry.label()));
        if show_coordinates && !entry.coordinate_text().is_empty() {
            out.push_str(&format!("  {}", entry.coordinate_text()));
        }
        out.push('\n');
    }
    out
}
