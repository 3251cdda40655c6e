//! Snapshot history with a movable cursor.
//!
//! The store owns every board state reached in a session. Jumping moves the
//! cursor without touching the stored sequence; appending from a past step
//! discards the recorded future before pushing (branch-on-edit).

use crate::{Board, Player, Position};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument};

/// One immutable board state plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    board: Board,
    position: Option<Position>,
}

impl Snapshot {
    /// The snapshot every game starts from: an empty board, no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// Creates the snapshot reached by playing at `position`.
    pub fn after_move(board: Board, position: Position) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the position played to reach this snapshot.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns the 1-based move location (1-9), absent for the initial snapshot.
    pub fn move_location(&self) -> Option<usize> {
        self.position.map(Position::move_location)
    }
}

/// Contract violations raised by [`HistoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested step does not address a stored snapshot.
    #[display("Step {step} is out of range (history has {len} snapshots)")]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// Number of stored snapshots.
        len: usize,
    },
}

/// Ordered snapshots plus the currently viewed step.
///
/// Invariants: the first snapshot is always [`Snapshot::initial`], and the
/// cursor always addresses an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl HistoryStore {
    /// Creates a history holding only the initial snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            cursor: 0,
        }
    }

    /// Appends a snapshot after the cursor, discarding any later snapshots.
    #[instrument(skip(self, snapshot), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn append(&mut self, snapshot: Snapshot) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots after cursor");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Moves the cursor to `step` without modifying stored snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `step` does not address a
    /// stored snapshot. The cursor is left unchanged.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.snapshots.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.snapshots.len(),
            });
        }
        self.cursor = step;
        Ok(())
    }

    /// Returns the snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Returns every stored snapshot in insertion order.
    pub fn all(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Returns the current step.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of stored snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: the initial snapshot can never be removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the player to move at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Returns `true` when X is to move, i.e. the cursor is even.
    pub fn x_is_next(&self) -> bool {
        self.to_move() == Player::X
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(store: &mut HistoryStore, pos: Position) {
        let board = store.current().board().with_mark(pos, store.to_move());
        store.append(Snapshot::after_move(board, pos));
    }

    #[test]
    fn test_new_history_has_initial_snapshot() {
        let store = HistoryStore::new();
        assert_eq!(store.len(), 1);
        assert_eq!(store.cursor(), 0);
        assert_eq!(*store.current(), Snapshot::initial());
        assert_eq!(store.current().move_location(), None);
        assert!(store.x_is_next());
    }

    #[test]
    fn test_append_at_tip_grows_by_one() {
        let mut store = HistoryStore::new();
        play(&mut store, Position::Center);
        play(&mut store, Position::TopLeft);
        assert_eq!(store.len(), 3);
        assert_eq!(store.cursor(), 2);
        assert_eq!(store.current().move_location(), Some(1));
    }

    #[test]
    fn test_append_from_past_truncates_future() {
        let mut store = HistoryStore::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            play(&mut store, pos);
        }
        store.jump(1).unwrap();
        play(&mut store, Position::TopRight);

        assert_eq!(store.len(), 3);
        assert_eq!(store.cursor(), 2);
        let played: Vec<_> = store.all().iter().map(Snapshot::position).collect();
        assert_eq!(
            played,
            vec![None, Some(Position::Center), Some(Position::TopRight)]
        );
    }

    #[test]
    fn test_jump_keeps_length_and_moves_cursor() {
        let mut store = HistoryStore::new();
        play(&mut store, Position::Center);
        play(&mut store, Position::TopLeft);

        store.jump(0).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.cursor(), 0);
        assert!(store.x_is_next());

        store.jump(1).unwrap();
        assert!(!store.x_is_next());
    }

    #[test]
    fn test_jump_out_of_range_fails_without_clamping() {
        let mut store = HistoryStore::new();
        play(&mut store, Position::Center);

        let err = store.jump(2).unwrap_err();
        assert_eq!(err, HistoryError::StepOutOfRange { step: 2, len: 2 });
        assert_eq!(store.cursor(), 1);
        assert_eq!(store.len(), 2);
    }
}
