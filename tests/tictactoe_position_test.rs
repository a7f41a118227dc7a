//! Tests for positions as seen through boards and sessions.

use tictactoe_core::{Board, LINES, Mode, Player, Position, Session};

#[test]
fn test_index_round_trips_through_session_moves() {
    let mut session = Session::new();
    session.apply_move(Position::MiddleRight.to_index()).unwrap();
    assert!(!session.board().is_empty(Position::MiddleRight));
    assert_eq!(session.board().empty_count(), 8);
}

#[test]
fn test_valid_moves_after_restart() {
    let mut session = Session::new();
    for index in [0, 4, 8] {
        session.apply_move(index).unwrap();
    }
    assert_eq!(Position::valid_moves(session.board()).len(), 6);

    session.restart();
    assert_eq!(Position::valid_moves(session.board()), Position::ALL.to_vec());
}

#[test]
fn test_valid_moves_follow_computer_reply() {
    let mut session = Session::new();
    session.set_mode(Mode::VsComputer);
    session.apply_move(Position::Center.to_index()).unwrap();

    let ticket = session.auto_move_ticket().unwrap();
    let mov = session.play_automated(ticket).unwrap();
    assert_eq!(mov.player, Player::O);

    let valid = Position::valid_moves(session.board());
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::Center));
    assert!(!valid.contains(&mov.position));
}

#[test]
fn test_corners_sit_on_three_lines() {
    for corner in Position::CORNERS {
        let lines = LINES.iter().filter(|line| line.contains(corner)).count();
        assert_eq!(lines, 3, "{} should be on 3 lines", corner);
    }
    let through_center = LINES
        .iter()
        .filter(|line| line.contains(Position::Center))
        .count();
    assert_eq!(through_center, 4);
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
    assert_eq!(
        Position::from_label_or_number(" bottom-left "),
        Some(Position::BottomLeft)
    );
    assert_eq!(Position::from_label_or_number("9"), None);
    assert_eq!(Position::from_label_or_number("middle"), None);
}

#[test]
fn test_display_uses_move_indices() {
    let board: Board = "X__/_O_/___".parse().unwrap();
    let shown = board.to_string();
    for pos in Position::valid_moves(&board) {
        assert!(shown.contains(&pos.to_index().to_string()));
    }
    assert!(!shown.contains('9'));
}
