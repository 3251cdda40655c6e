//! Intent messages sent from the presentation layer to the controller.
//!
//! Intents are plain values rather than callbacks, so a renderer can build
//! them from whatever input it receives and tests can replay them directly.

use super::Position;
use serde::{Deserialize, Serialize};

/// A user intent the [`GameController`](crate::GameController) understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Intent {
    /// The user clicked a board cell.
    #[display("click {}", _0)]
    CellClicked(Position),

    /// The user selected an entry of the move list.
    #[display("jump to step {}", _0)]
    HistoryStepSelected(usize),
}
