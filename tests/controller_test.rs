//! Tests for the controller event loop and computer-move scheduling.

use std::time::Duration;
use tictactoe_core::{
    Board, Command, Controller, EngineConfig, GameEvent, GameStatus, Mode, Player, Position,
    Square,
};
use tokio::sync::mpsc;

fn vs_computer(delay_ms: u64) -> EngineConfig {
    EngineConfig::default()
        .with_computer_delay_ms(delay_ms)
        .with_starting_mode(Mode::VsComputer)
}

fn drain(events: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    drained
}

#[tokio::test(start_paused = true)]
async fn test_computer_moves_after_delay() {
    let (controller, mut events) = Controller::new(&vs_computer(500));
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(controller.run(rx));

    tx.send(Command::Play(4)).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    let early = drain(&mut events);
    assert!(
        early
            .iter()
            .any(|e| matches!(e, GameEvent::ComputerThinking { generation: 1 }))
    );

    tokio::time::sleep(Duration::from_secs(1)).await;
    drop(tx);
    let session = handle.await.unwrap();

    assert_eq!(
        session.board().get(Position::TopLeft),
        Square::Occupied(Player::O)
    );
    assert_eq!(session.to_move(), Player::X);

    let late = drain(&mut events);
    match late.last() {
        Some(GameEvent::Updated(snapshot)) => assert_eq!(snapshot.board(), session.board()),
        other => panic!("Expected final update, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_restart_discards_pending_computer_move() {
    let (controller, _events) = Controller::new(&vs_computer(500));
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(controller.run(rx));

    tx.send(Command::Play(0)).unwrap();
    tx.send(Command::Restart).unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;
    drop(tx);
    let session = handle.await.unwrap();

    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.generation(), 2);
    assert_eq!(session.to_move(), Player::X);
}

#[tokio::test(start_paused = true)]
async fn test_mode_change_discards_pending_computer_move() {
    let (controller, _events) = Controller::new(&vs_computer(500));
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(controller.run(rx));

    tx.send(Command::Play(0)).unwrap();
    tokio::time::sleep(Duration::from_millis(250)).await;
    tx.send(Command::SetMode(Mode::TwoPlayer)).unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;
    drop(tx);
    let session = handle.await.unwrap();

    assert_eq!(session.mode(), Mode::TwoPlayer);
    assert_eq!(session.board(), &Board::new());
}

#[tokio::test(start_paused = true)]
async fn test_computer_wins_full_game() {
    let (controller, _events) = Controller::new(&vs_computer(500));
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(controller.run(rx));

    // Human takes the lowest free square each turn: 0, 1, 3.
    for index in [0, 1, 3] {
        tx.send(Command::Play(index)).unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    drop(tx);
    let session = handle.await.unwrap();

    assert_eq!(session.status(), GameStatus::Won(Player::O));
    assert_eq!(session.winning_line().unwrap().indices(), [2, 4, 6]);
}

#[tokio::test]
async fn test_two_player_never_schedules() {
    let config = EngineConfig::default();
    let (controller, mut events) = Controller::new(&config);
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(controller.run(rx));

    for index in [0, 3, 1, 4, 2] {
        tx.send(Command::Play(index)).unwrap();
    }
    drop(tx);
    let session = handle.await.unwrap();

    assert_eq!(session.status(), GameStatus::Won(Player::X));
    let all = drain(&mut events);
    assert!(
        !all.iter()
            .any(|e| matches!(e, GameEvent::ComputerThinking { .. }))
    );
    // Initial state plus one update per move.
    assert_eq!(all.len(), 6);
}
