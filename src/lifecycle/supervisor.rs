//! Supervisor for the console's long-lived subsystems.
//!
//! # Responsibilities
//! - Run the serving unit on a background task
//! - Wait for the shared shutdown signal
//! - Tear down owned subsystems in a fixed order, bounded per call
//! - Signal completion on the shutdown sink, exactly once
//!
//! # Design Decisions
//! - The serving task is fire-and-forget here: its error is logged, and
//!   its fatal policy lives in the serving unit
//! - Modules unload before plugins stop; module resources consume plugin
//!   services, so plugins must outlive module teardown
//! - Teardown runs after cancellation and is not itself cancellable by the
//!   same signal; each call is bounded by the teardown grace instead
//! - `start` consumes the supervisor, so a second start cannot compile

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time;

use crate::http::server::ServerUnit;
use crate::lifecycle::shutdown::Shutdown;
use crate::registry::{ModuleRegistry, PluginRegistry};

/// Coordinates startup and shutdown of all subsystems in one process.
pub struct Supervisor {
    modules: ModuleRegistry,
    plugins: PluginRegistry,
    server: ServerUnit,
    shutdown: Shutdown,
    teardown_grace: Duration,
}

impl Supervisor {
    /// Create a supervisor owning the given subsystems.
    pub fn new(
        modules: ModuleRegistry,
        plugins: PluginRegistry,
        server: ServerUnit,
        shutdown: Shutdown,
        teardown_grace: Duration,
    ) -> Self {
        Self {
            modules,
            plugins,
            server,
            shutdown,
            teardown_grace,
        }
    }

    /// Run the supervised lifecycle until teardown completes.
    ///
    /// The readiness sink is forwarded to the serving unit. Exactly one
    /// `true` is sent on `shutdown_done`, strictly after both registries
    /// have been torn down (modules first, then plugins).
    pub async fn start(
        self,
        startup: Option<oneshot::Sender<bool>>,
        shutdown_done: oneshot::Sender<bool>,
    ) {
        let Self {
            modules,
            plugins,
            server,
            shutdown,
            teardown_grace,
        } = self;

        tokio::spawn(async move {
            if let Err(e) = server.start(startup).await {
                tracing::warn!(error = %e, "Serving unit stopped with error");
            }
        });

        shutdown.cancelled().await;
        tracing::info!("Shutdown requested, tearing down subsystems");

        if time::timeout(teardown_grace, modules.unload()).await.is_err() {
            tracing::warn!(grace = ?teardown_grace, "Module teardown exceeded its deadline, abandoning");
        }
        if time::timeout(teardown_grace, plugins.stop()).await.is_err() {
            tracing::warn!(grace = ?teardown_grace, "Plugin teardown exceeded its deadline, abandoning");
        }

        if shutdown_done.send(true).is_err() {
            tracing::debug!("Shutdown sink dropped before completion signal");
        }
    }
}
