//! HTTP serving lifecycle.
//!
//! # Responsibilities
//! - Own the acquired listener and the handler-chain factory
//! - Serve requests on a background task until shutdown
//! - Publish readiness once the server is accepting
//! - Optionally open the system browser at the console URL
//! - Drain in-flight requests under a bounded grace period
//!
//! # Design Decisions
//! - The serving unit runs once; `start` consumes it
//! - An unexpected serve-loop death is reported through the fatal channel,
//!   never by exiting the process from inside a task
//! - A missed grace deadline aborts the serve task so the listener is
//!   always released

use std::io;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tokio::time;

use crate::config::ConsoleConfig;
use crate::http::handler::{HandlerError, HandlerFactory};
use crate::lifecycle::fatal::FatalSignal;
use crate::lifecycle::shutdown::Shutdown;

/// Error type for the serving lifecycle.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Handler chain construction failed; nothing was served.
    #[error("building handler chain: {0}")]
    Handler(#[from] HandlerError),

    /// The serve loop died with an I/O error outside the shutdown path.
    #[error("serve loop failed: {0}")]
    Serve(#[source] io::Error),

    /// The serve task panicked.
    #[error("serve task panicked")]
    Panicked,

    /// The serve loop returned before shutdown was requested. The detailed
    /// cause travels on the fatal channel.
    #[error("serve loop exited before shutdown was requested")]
    UnexpectedExit,

    /// In-flight requests outlived the grace period; the listener was
    /// released by force.
    #[error("graceful shutdown exceeded {grace:?}")]
    GracePeriodExceeded { grace: Duration },
}

/// The serving unit: owns the bound listener and the HTTP serving lifecycle.
///
/// State machine: `Constructed → Serving → ShuttingDown → Stopped`; the only
/// path from `Serving` straight to `Stopped` is an unexpected serve-loop
/// death, reported via [`FatalSignal`].
pub struct ServerUnit {
    listener: TcpListener,
    factory: HandlerFactory,
    open_browser: bool,
    browser_path: Option<String>,
    grace: Duration,
    shutdown: Shutdown,
    fatal: FatalSignal,
}

impl ServerUnit {
    /// Create a serving unit over an already-acquired listener.
    pub fn new(
        listener: TcpListener,
        factory: HandlerFactory,
        config: &ConsoleConfig,
        shutdown: Shutdown,
        fatal: FatalSignal,
    ) -> Self {
        Self {
            listener,
            factory,
            open_browser: config.browser.open,
            browser_path: config.browser.path.clone(),
            grace: config.shutdown.serve_grace(),
            shutdown,
            fatal,
        }
    }

    /// Run the serving lifecycle to completion.
    ///
    /// Sends at most one `true` on `ready`, after the server is accepting
    /// and before any browser-open attempt. Returns when the drain has
    /// finished, the grace period has elapsed, or the serve loop has died.
    pub async fn start(self, ready: Option<oneshot::Sender<bool>>) -> Result<(), ServeError> {
        let app = (self.factory)()?;

        let addr = self.listener.local_addr().map_err(ServeError::Serve)?;
        let drain = Shutdown::new();
        let mut serve_task = spawn_serve(self.listener, app, drain.clone());

        let console_url = format!("http://{addr}");
        tracing::info!(url = %console_url, "Console is available");

        if let Some(tx) = ready {
            // The receiver may already be gone; readiness is best-effort.
            let _ = tx.send(true);
        }

        if self.open_browser {
            let target = browser_url(&console_url, self.browser_path.as_deref());
            if let Err(e) = open::that(&target) {
                tracing::warn!(url = %target, error = %e, "Unable to open browser");
            }
        }

        tokio::select! {
            _ = self.shutdown.cancelled() => {}
            outcome = &mut serve_task => {
                let err = serve_outcome(outcome);
                tracing::error!(error = %err, "Serve loop died outside the shutdown path");
                self.fatal.report(err);
                return Err(ServeError::UnexpectedExit);
            }
        }

        tracing::info!(grace = ?self.grace, "Draining in-flight requests");
        drain.trigger();

        match time::timeout(self.grace, &mut serve_task).await {
            Ok(Ok(Ok(()))) => Ok(()),
            Ok(outcome) => Err(serve_outcome(outcome)),
            Err(_) => {
                serve_task.abort();
                Err(ServeError::GracePeriodExceeded { grace: self.grace })
            }
        }
    }
}

fn spawn_serve(
    listener: TcpListener,
    app: Router,
    drain: Shutdown,
) -> JoinHandle<io::Result<()>> {
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { drain.cancelled().await })
            .await
    })
}

fn serve_outcome(outcome: Result<io::Result<()>, JoinError>) -> ServeError {
    match outcome {
        Ok(Ok(())) => ServeError::UnexpectedExit,
        Ok(Err(e)) => ServeError::Serve(e),
        Err(join) if join.is_panic() => ServeError::Panicked,
        Err(_) => ServeError::UnexpectedExit,
    }
}

/// Target URL for the browser: base plus an optional path normalized to a
/// leading `/`.
fn browser_url(base: &str, path: Option<&str>) -> String {
    let mut target = base.to_string();
    if let Some(path) = path {
        if !path.starts_with('/') {
            target.push('/');
        }
        target.push_str(path);
    }
    target
}
