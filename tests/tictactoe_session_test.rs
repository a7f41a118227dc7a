//! Tests for the session state machine through the public API.

use tictactoe_core::{
    Board, GameStatus, Mode, MoveOutcome, Player, Position, Rejection, Session,
    invariants::{InvariantSet, SessionInvariants},
};

#[test]
fn test_top_row_win() {
    let mut session = Session::new();
    for index in [0, 3, 1, 4, 2] {
        assert!(matches!(
            session.apply_move(index).unwrap(),
            MoveOutcome::Placed(_)
        ));
    }
    assert_eq!(session.status(), GameStatus::Won(Player::X));
    assert!(!session.is_active());
    assert_eq!(session.winner(), Some(Player::X));
    assert_eq!(session.winning_line().unwrap().indices(), [0, 1, 2]);
}

#[test]
fn test_occupied_square_changes_nothing() {
    let mut session = Session::new();
    session.apply_move(0).unwrap();
    session.apply_move(4).unwrap();
    let before = session.clone();

    let outcome = session.apply_move(0).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Ignored(Rejection::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(session.board(), before.board());
    assert_eq!(session.to_move(), before.to_move());
    assert_eq!(session.status(), before.status());
    assert_eq!(session.generation(), before.generation());
}

#[test]
fn test_out_of_range_index() {
    let mut session = Session::new();
    let err = session.apply_move(42).unwrap_err();
    assert_eq!(err.index, 42);
    assert_eq!(session, Session::new());
}

#[test]
fn test_restart_from_every_state() {
    let mut session = Session::new();

    session.restart();
    assert_eq!(session.generation(), 1);

    session.apply_move(4).unwrap();
    session.restart();
    assert_eq!(session.generation(), 2);
    assert_eq!(session.board(), &Board::new());

    for index in [0, 3, 1, 4, 2] {
        session.apply_move(index).unwrap();
    }
    session.restart();
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.generation(), 3);
}

#[test]
fn test_set_mode_same_mode_is_noop() {
    let mut session = Session::new();
    session.apply_move(4).unwrap();
    session.set_mode(Mode::TwoPlayer);
    assert_eq!(session.generation(), 0);
    assert_eq!(session.board().empty_count(), 8);
}

#[test]
fn test_set_mode_switch_resets() {
    let mut session = Session::new();
    session.apply_move(4).unwrap();
    session.set_mode(Mode::VsComputer);
    assert_eq!(session.generation(), 1);
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.to_move(), Player::X);

    session.set_mode(Mode::VsComputer);
    assert_eq!(session.generation(), 1);
}

#[test]
fn test_stale_ticket_never_touches_new_board() {
    let mut session = Session::new();
    session.set_mode(Mode::VsComputer);
    session.apply_move(0).unwrap();
    let ticket = session.auto_move_ticket().expect("computer to move");

    session.restart();
    session.apply_move(8).unwrap();
    let before = session.clone();

    // Same player to move and same ply count, but an older generation.
    assert_eq!(session.play_automated(ticket), None);
    assert_eq!(session, before);
}

#[test]
fn test_mode_change_invalidates_ticket() {
    let mut session = Session::new();
    session.set_mode(Mode::VsComputer);
    session.apply_move(0).unwrap();
    let ticket = session.auto_move_ticket().unwrap();

    session.set_mode(Mode::TwoPlayer);
    assert_eq!(session.play_automated(ticket), None);
    assert_eq!(session.board(), &Board::new());
}

#[test]
fn test_vs_computer_full_game_keeps_invariants() {
    let mut session = Session::new();
    session.set_mode(Mode::VsComputer);

    while session.is_active() {
        let human = Position::valid_moves(session.board())[0];
        session.apply_move(human.to_index()).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());

        if let Some(ticket) = session.auto_move_ticket() {
            assert!(session.play_automated(ticket).is_some());
            assert!(SessionInvariants::check_all(&session).is_ok());
        }
    }
    assert_eq!(session.status(), GameStatus::Won(Player::O));
}

#[test]
fn test_snapshot_serializes() {
    let mut session = Session::new();
    session.apply_move(4).unwrap();
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["mode"], "two-player");
    assert_eq!(json["to_move"], "O");
    assert_eq!(json["message"], "Player O's turn");
    assert_eq!(json["board"]["squares"][4]["Occupied"], "X");
}
