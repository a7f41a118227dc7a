//! Tic-tac-toe engine with a rule-based computer opponent.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Position`] and the eight [`LINES`]
//! - **Rules**: pure win and draw evaluation in [`rules`]
//! - **Strategy**: [`select_move`], a greedy win/block/center/corner heuristic
//! - **Session**: [`Session`], the state machine that owns the board
//! - **Controller**: [`Controller`], a single-owner event loop that schedules
//!   cancellable computer moves and publishes [`GameEvent`]s
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameStatus, Player, Session};
//!
//! let mut session = Session::new();
//! for index in [0, 3, 1, 4, 2] {
//!     session.apply_move(index)?;
//! }
//! assert_eq!(session.status(), GameStatus::Won(Player::X));
//! assert_eq!(session.winning_line().map(|line| line.indices()), Some([0, 1, 2]));
//! # Ok::<(), tictactoe_core::OutOfRange>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod games;
mod scheduler;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Controller
pub use controller::{Command, Controller, GameEvent};
pub use scheduler::AutoMoveScheduler;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AutoMoveTicket, Board, BoardParseError, GameStatus, LINES, Line, Mode, Move, MoveOutcome,
    OutOfRange, Player, Position, Rejection, Seat, Session, SessionSnapshot, Square, invariants,
    rules, select_move,
};
pub use games::tictactoe::rules::{check_winner, is_draw, is_full, winning_line};
