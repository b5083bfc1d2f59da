//! Fatal-error reporting for background serve tasks.
//!
//! # Design Decisions
//! - A serve-loop death is reported through a typed channel instead of
//!   exiting the process from inside the task; only the binary entry point
//!   maps it to an exit code
//! - Reporting never blocks and tolerates a dropped receiver, so tests can
//!   inject their own receiver and the supervisor stays side-effect-free
//!   with respect to process lifetime

use tokio::sync::mpsc;

use crate::http::server::ServeError;

/// Receiving half of the fatal-error channel, held by the process entry
/// point (or a test harness).
pub type FatalReceiver = mpsc::UnboundedReceiver<ServeError>;

/// Sending half of the fatal-error channel. Clone freely.
#[derive(Clone, Debug)]
pub struct FatalSignal {
    tx: mpsc::UnboundedSender<ServeError>,
}

impl FatalSignal {
    /// Create a connected reporter/receiver pair.
    pub fn channel() -> (Self, FatalReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Report a fatal error. Never blocks; a dropped receiver is ignored.
    pub fn report(&self, err: ServeError) {
        let _ = self.tx.send(err);
    }
}
