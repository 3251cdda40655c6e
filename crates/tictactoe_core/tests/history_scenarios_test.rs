//! End-to-end scenarios for moves, time travel and branching.

use tictactoe_core::{GameController, GameStatus, HistoryError, Intent, Player, Position, Square};

fn play(game: &mut GameController, indices: &[usize]) {
    for &index in indices {
        let pos = Position::from_index(index).expect("index on board");
        game.handle_cell_click(pos);
    }
}

#[test]
fn test_top_row_win() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 1, 3, 2]);

    let view = game.view();
    assert_eq!(view.status_line(), "Winner: X");
    assert_eq!(*view.status(), GameStatus::Won(Player::X));
    assert_eq!(view.moves().len(), 6);
    assert_eq!(view.moves()[1].coordinate_text(), "(1, 1)");
    assert_eq!(view.moves()[0].coordinate_text(), "");
    assert_eq!(view.active_step(), Some(5));
}

#[test]
fn test_six_entry_history_then_branch() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 1, 3, 8]);
    assert_eq!(game.view().moves().len(), 6);
    assert_eq!(game.view().status_line(), "Next player: O");

    game.handle_history_jump(2).unwrap();
    let view = game.view();
    let occupied: Vec<usize> = view
        .board()
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, sq)| **sq != Square::Empty)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(occupied, vec![0, 4]);
    assert_eq!(view.status_line(), "Next player: X");
    assert_eq!(game.history().len(), 6);

    play(&mut game, &[3]);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.history().cursor(), 3);
    let locations: Vec<Option<usize>> = game
        .history()
        .all()
        .iter()
        .map(|snapshot| snapshot.move_location())
        .collect();
    assert_eq!(locations, vec![None, Some(1), Some(5), Some(4)]);
    let board = game.history().current().board();
    assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopCenter), Square::Empty);
    assert_eq!(board.get(Position::BottomRight), Square::Empty);
}

#[test]
fn test_clicks_after_win_change_nothing() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 1, 3, 2]);
    let before = game.history().clone();

    for pos in Position::all() {
        game.handle_cell_click(pos);
    }
    assert_eq!(*game.history(), before);
}

#[test]
fn test_jump_back_out_of_win_reopens_play() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 1, 3, 2]);

    game.handle_history_jump(4).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });

    game.handle_history_jump(5).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    game.handle_history_jump(4).unwrap();
    play(&mut game, &[8]);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
}

#[test]
fn test_turn_parity_holds_after_every_operation() {
    let mut game = GameController::new();
    let intents = [
        Intent::CellClicked(Position::Center),
        Intent::CellClicked(Position::TopLeft),
        Intent::HistoryStepSelected(1),
        Intent::CellClicked(Position::BottomRight),
        Intent::CellClicked(Position::TopRight),
        Intent::HistoryStepSelected(0),
        Intent::HistoryStepSelected(3),
        Intent::CellClicked(Position::Center),
    ];
    for intent in intents {
        game.dispatch(intent).unwrap();
        let history = game.history();
        assert_eq!(
            history.x_is_next(),
            history.cursor() % 2 == 0,
            "after {intent}"
        );
        assert!(history.cursor() < history.len());
    }
}

#[test]
fn test_jump_never_changes_length() {
    let mut game = GameController::new();
    play(&mut game, &[4, 0, 8]);
    for step in [0, 3, 1, 2] {
        game.handle_history_jump(step).unwrap();
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.view().active_step(), Some(step));
    }
}

#[test]
fn test_out_of_range_jump_is_an_error() {
    let mut game = GameController::new();
    play(&mut game, &[4]);
    let err = game.handle_history_jump(7).unwrap_err();
    assert_eq!(err, HistoryError::StepOutOfRange { step: 7, len: 2 });
    assert_eq!(game.history().cursor(), 1);
}

#[test]
fn test_full_board_draw_reports_next_player() {
    // X O X / X O O / O X X, reached without any line
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.history().len(), 10);
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
    assert_eq!(game.view().status_line(), "Next player: O");
}

#[test]
fn test_view_serializes_to_json() {
    let mut game = GameController::new();
    play(&mut game, &[4]);
    let json = serde_json::to_value(game.view()).unwrap();
    assert_eq!(json["moves"][1]["label"], "Go to move #1");
    assert_eq!(json["moves"][1]["coordinate_text"], "(2, 2)");
    assert_eq!(json["moves"][1]["active"], true);
}
