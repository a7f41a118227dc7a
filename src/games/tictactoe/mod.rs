//! Tic-tac-toe: board model, rules, computer strategy and session.

mod action;
mod line;
mod mode;
mod position;
mod session;
mod strategy;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveOutcome, OutOfRange, Rejection};
pub use line::{LINES, Line};
pub use mode::{Mode, Seat};
pub use position::Position;
pub use session::{AutoMoveTicket, Session, SessionSnapshot};
pub use strategy::select_move;
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
