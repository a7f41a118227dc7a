//! Delayed, cancellable delivery of computer moves.

use crate::games::tictactoe::AutoMoveTicket;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

/// Delivers computer-move tickets after a fixed delay.
///
/// At most one ticket is pending. Scheduling a new one or calling
/// [`AutoMoveScheduler::cancel`] aborts the previous timer. A ticket that was
/// already delivered can still be stale; the session re-validates it.
#[derive(Debug)]
pub struct AutoMoveScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<AutoMoveTicket>,
    pending: Option<JoinHandle<()>>,
}

impl AutoMoveScheduler {
    /// Creates a scheduler and the channel its tickets arrive on.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<AutoMoveTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            delay,
            tx,
            pending: None,
        };
        (scheduler, rx)
    }

    /// Returns the delay before a ticket is delivered.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `ticket` for delivery, replacing any pending one.
    ///
    /// Returns false and schedules nothing when called outside a tokio
    /// runtime; the previous ticket is still cancelled.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, ticket: AutoMoveTicket) -> bool {
        self.cancel();
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!(error = %e, "No tokio runtime; computer move not scheduled");
                return false;
            }
        };
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone only when the controller shut down.
            let _ = tx.send(ticket);
        }));
        debug!("Computer move scheduled");
        true
    }

    /// Aborts the pending delivery, if any.
    ///
    /// Returns true if a timer was still running.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!("Pending computer move cancelled");
                true
            }
            _ => false,
        }
    }

    /// Returns true while a timer is running.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for AutoMoveScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
