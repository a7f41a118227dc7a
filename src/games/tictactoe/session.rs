//! The game session state machine.
//!
//! A [`Session`] owns the board and is the only thing that mutates it.
//! Human moves come in through [`Session::apply_move`]; computer moves come
//! in through [`Session::play_automated`] with a ticket captured when the
//! move was scheduled, so a move scheduled before a reset can never land
//! on the new board.

use super::action::{Move, MoveOutcome, OutOfRange, Rejection, position_at};
use super::invariants::{InvariantSet, SessionInvariants, single_placement};
use super::mode::{Mode, Seat};
use super::rules::{check_winner, is_draw, winning_line};
use super::strategy::select_move;
use super::{Board, GameStatus, Line, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Capture of a scheduled computer move.
///
/// Only valid while the session is still in the generation and at the ply
/// it was issued at, with `player` to move. Each ticket can play one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct AutoMoveTicket {
    /// Session generation when the move was scheduled.
    pub generation: u64,
    /// Marks on the board when the move was scheduled.
    pub ply: usize,
    /// The computer's mark.
    pub player: Player,
}

/// Read-only view of a session, for rendering and notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SessionSnapshot {
    board: Board,
    mode: Mode,
    to_move: Player,
    status: GameStatus,
    winning_line: Option<Line>,
    generation: u64,
    message: String,
}

/// A tic-tac-toe session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    mode: Mode,
    to_move: Player,
    status: GameStatus,
    generation: u64,
}

impl Session {
    /// Creates a two-player session with an empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            mode: Mode::TwoPlayer,
            to_move: Player::X,
            status: GameStatus::InProgress,
            generation: 0,
        }
    }

    /// Builds a session in an arbitrary, possibly inconsistent, state.
    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, mode: Mode, to_move: Player, status: GameStatus) -> Self {
        Self {
            board,
            mode,
            to_move,
            status,
            generation: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the player to move (the last mover once the game is over).
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns the completed line, if the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won(_) => winning_line(&self.board),
            _ => None,
        }
    }

    /// Returns the reset counter.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns a one-line description of the game state.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::InProgress => format!("Player {}'s turn", self.to_move),
        }
    }

    /// Returns a snapshot of every read accessor.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.clone(),
            mode: self.mode,
            to_move: self.to_move,
            status: self.status,
            winning_line: self.winning_line(),
            generation: self.generation,
            message: self.status_message(),
        }
    }

    /// Plays a human move at `index` (0-8).
    ///
    /// Rule violations leave the session untouched and are reported as
    /// [`MoveOutcome::Ignored`]: the game is over, the square is taken, or
    /// the computer is to move. Only an index outside 0-8 is an error.
    #[track_caller]
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, OutOfRange> {
        let position = position_at(index)?;
        Ok(self.apply_for(Seat::Human, position))
    }

    /// Returns a ticket if the computer should move now.
    pub fn auto_move_ticket(&self) -> Option<AutoMoveTicket> {
        let computer_to_move =
            self.is_active() && self.mode.seat(self.to_move) == Seat::Computer;
        computer_to_move.then(|| {
            AutoMoveTicket::new(self.generation, 9 - self.board.empty_count(), self.to_move)
        })
    }

    /// Plays the computer's move for a previously issued ticket.
    ///
    /// A stale ticket (the session was reset, the mode changed, the game
    /// ended, or a move was played since it was issued) is a no-op and
    /// returns `None`.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn play_automated(&mut self, ticket: AutoMoveTicket) -> Option<Move> {
        if self.auto_move_ticket() != Some(ticket) {
            debug!(?ticket, "Discarding stale computer move");
            return None;
        }
        let position = select_move(&self.board, ticket.player)?;
        self.apply_for(Seat::Computer, position).placed()
    }

    /// Clears the board and starts a new game in the current mode.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.generation += 1;
        info!(generation = self.generation, mode = %self.mode, "Session restarted");
    }

    /// Switches mode, restarting the game; does nothing if `mode` is current.
    #[instrument(skip(self), fields(current = %self.mode))]
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            debug!("Mode unchanged");
            return;
        }
        self.mode = mode;
        self.restart();
    }

    /// Shared placement path for human and computer moves.
    fn apply_for(&mut self, seat: Seat, position: Position) -> MoveOutcome {
        if let Some(rejection) = self.rejection(seat, position) {
            debug!(%rejection, ?position, "Move ignored");
            return MoveOutcome::Ignored(rejection);
        }

        let mov = Move::new(self.to_move, position);
        let before = self.board.clone();
        self.board.place(position, mov.player);

        if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
            info!(%winner, "Game won");
        } else if is_draw(&self.board) {
            self.status = GameStatus::Draw;
            info!("Game drawn");
        } else {
            self.to_move = self.to_move.opponent();
        }

        debug!(%mov, status = ?self.status, "Move placed");
        self.assert_consistent(&before, mov);
        MoveOutcome::Placed(mov)
    }

    fn rejection(&self, seat: Seat, position: Position) -> Option<Rejection> {
        if !self.is_active() {
            Some(Rejection::GameOver)
        } else if self.mode.seat(self.to_move) != seat {
            Some(Rejection::NotYourTurn(self.to_move))
        } else if !self.board.is_empty(position) {
            Some(Rejection::SquareOccupied(position))
        } else {
            None
        }
    }

    fn assert_consistent(&self, before: &Board, mov: Move) {
        if cfg!(debug_assertions) {
            let placed = single_placement(before, &self.board, mov);
            if !placed {
                warn!(%mov, "Placement changed more than one square");
            }
            let invariants = SessionInvariants::check_all(self);
            debug_assert!(placed && invariants.is_ok(), "Session invariants violated");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
