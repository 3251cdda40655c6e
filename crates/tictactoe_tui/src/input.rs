//! Keyboard mapping for the terminal client.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves the board cursor one cell in the arrow's direction.
///
/// The cursor stays put at the board edge and for non-arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (col, row) = cursor.coordinates();
    let (col, row) = match key {
        KeyCode::Left => (col.max(2) - 1, row),
        KeyCode::Right => ((col + 1).min(3), row),
        KeyCode::Up => (col, row.max(2) - 1),
        KeyCode::Down => (col, (row + 1).min(3)),
        _ => return cursor,
    };
    Position::from_coordinates(col, row).unwrap_or(cursor)
}

/// Maps a digit key `1`-`9` to the cell with that move location.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    let KeyCode::Char(c) = key else {
        return None;
    };
    let digit = c.to_digit(10)?;
    Position::from_move_location(digit as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_edges() {
        let corner = Position::TopLeft;
        assert_eq!(move_cursor(corner, KeyCode::Up), corner);
        assert_eq!(move_cursor(corner, KeyCode::Left), corner);

        let corner = Position::BottomRight;
        assert_eq!(move_cursor(corner, KeyCode::Right), corner);
        assert_eq!(move_cursor(corner, KeyCode::Down), corner);
    }

    #[test]
    fn test_cursor_moves_across_center() {
        let pos = move_cursor(Position::TopCenter, KeyCode::Down);
        assert_eq!(pos, Position::Center);
        assert_eq!(move_cursor(pos, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_every_arrow_moves_one_cell_within_board() {
        for pos in Position::all() {
            let (col, row) = pos.coordinates();

            let left = move_cursor(pos, KeyCode::Left).coordinates();
            let right = move_cursor(pos, KeyCode::Right).coordinates();
            let up = move_cursor(pos, KeyCode::Up).coordinates();
            let down = move_cursor(pos, KeyCode::Down).coordinates();

            assert_eq!(left, (col.max(2) - 1, row), "left from {pos}");
            assert_eq!(right, ((col + 1).min(3), row), "right from {pos}");
            assert_eq!(up, (col, row.max(2) - 1), "up from {pos}");
            assert_eq!(down, (col, (row + 1).min(3)), "down from {pos}");
            assert_eq!(move_cursor(pos, KeyCode::Enter), pos);
        }
    }

    #[test]
    fn test_digit_keys_are_one_based() {
        assert_eq!(digit_position(KeyCode::Char('1')), Some(Position::TopLeft));
        assert_eq!(
            digit_position(KeyCode::Char('9')),
            Some(Position::BottomRight)
        );
        assert_eq!(digit_position(KeyCode::Char('0')), None);
        assert_eq!(digit_position(KeyCode::Char('x')), None);
        assert_eq!(digit_position(KeyCode::Enter), None);
    }
}
