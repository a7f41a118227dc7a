//! Single-owner event loop around a [`Session`].
//!
//! The controller is the only holder of the session. Commands from the
//! view layer and fired computer-move tickets are handled one at a time,
//! so the session needs no lock. Observers receive [`GameEvent`]s.

use crate::config::EngineConfig;
use crate::games::tictactoe::{AutoMoveTicket, Mode, Session, SessionSnapshot};
use crate::scheduler::AutoMoveScheduler;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Requests from the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the human move at a cell index (0-8).
    Play(usize),
    /// Start a new game in the current mode.
    Restart,
    /// Switch mode (restarts if the mode changes).
    SetMode(Mode),
}

/// Notifications sent to the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The session changed.
    Updated(SessionSnapshot),
    /// A computer move was scheduled.
    ComputerThinking {
        /// Generation the move belongs to.
        generation: u64,
    },
}

/// Owns a session and its computer-move scheduler.
#[derive(Debug)]
pub struct Controller {
    session: Session,
    scheduler: AutoMoveScheduler,
    tickets: mpsc::UnboundedReceiver<AutoMoveTicket>,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl Controller {
    /// Creates a controller and the channel its events arrive on.
    ///
    /// The configured starting mode is applied through [`Session::set_mode`],
    /// so a vs-computer start begins at generation 1.
    #[instrument(skip(config), fields(delay_ms = *config.computer_delay_ms(), mode = %config.starting_mode()))]
    pub fn new(config: &EngineConfig) -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (scheduler, tickets) = AutoMoveScheduler::new(config.computer_delay());
        let (events, events_rx) = mpsc::unbounded_channel();
        let mut session = Session::new();
        session.set_mode(*config.starting_mode());
        info!("Creating controller");
        let controller = Self {
            session,
            scheduler,
            tickets,
            events,
        };
        (controller, events_rx)
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sends the current state to observers.
    pub fn publish(&self) {
        self.emit(GameEvent::Updated(self.session.snapshot()));
    }

    /// Applies a command.
    ///
    /// Any change to the session cancels a pending computer move, then
    /// schedules a fresh one if the computer is to move. Outside a tokio
    /// runtime nothing is scheduled; the caller can still play the move with
    /// [`Controller::fire`] and [`Session::auto_move_ticket`].
    #[instrument(skip(self), fields(generation = self.session.generation()))]
    pub fn handle(&mut self, command: Command) {
        let before = self.session.clone();
        match command {
            Command::Play(index) => {
                if let Err(e) = self.session.apply_move(index) {
                    warn!(error = %e, "Rejected move request");
                    return;
                }
            }
            Command::Restart => self.session.restart(),
            Command::SetMode(mode) => self.session.set_mode(mode),
        }

        if self.session != before {
            self.after_change();
        } else {
            debug!(?command, "Command left session unchanged");
        }
    }

    /// Plays a delivered computer-move ticket; stale tickets are ignored.
    ///
    /// Safe to call outside a tokio runtime.
    #[instrument(skip(self), fields(generation = self.session.generation()))]
    pub fn fire(&mut self, ticket: AutoMoveTicket) {
        if let Some(mov) = self.session.play_automated(ticket) {
            info!(%mov, "Computer moved");
            self.after_change();
        }
    }

    /// Runs until `commands` closes, then returns the final session.
    ///
    /// Pending computer moves are dropped on shutdown.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) -> Session {
        info!("Starting controller loop");
        self.publish();
        self.reschedule();

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                Some(ticket) = self.tickets.recv() => self.fire(ticket),
            }
        }

        info!(generation = self.session.generation(), "Controller loop finished");
        self.scheduler.cancel();
        self.session
    }

    fn after_change(&mut self) {
        self.publish();
        self.reschedule();
    }

    fn reschedule(&mut self) {
        self.scheduler.cancel();
        let Some(ticket) = self.session.auto_move_ticket() else {
            return;
        };
        if self.scheduler.schedule(ticket) {
            debug!(
                delay_ms = self.scheduler.delay().as_millis() as u64,
                ply = ticket.ply,
                "Computer is thinking"
            );
            self.emit(GameEvent::ComputerThinking {
                generation: ticket.generation,
            });
        }
    }

    fn emit(&self, event: GameEvent) {
        if self.events.send(event).is_err() {
            debug!("No event listener");
        }
    }
}
