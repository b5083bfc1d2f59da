//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize all subsystems in dependency order
//! - Start plugins before any traffic can arrive
//! - Acquire the listener last
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and typed
//! - Subsystems initialize in order, not concurrently
//! - A construction failure after plugins have started stops them again,
//!   so an aborted startup leaves nothing running

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::oneshot;

use crate::config::ConsoleConfig;
use crate::http::handler;
use crate::http::server::ServerUnit;
use crate::lifecycle::fatal::FatalSignal;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::supervisor::Supervisor;
use crate::net::listener::{self, ListenerError};
use crate::observability::metrics;
use crate::registry::{Module, ModuleRegistry, Plugin, PluginError, PluginRegistry, RegistryError};

/// Error type for construction-time failures.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Registering a module failed.
    #[error("registering module: {0}")]
    Registry(#[from] RegistryError),

    /// A plugin failed to come up.
    #[error("starting plugins: {0}")]
    Plugin(#[from] PluginError),

    /// The listener could not be acquired.
    #[error("acquiring listener: {0}")]
    Listener(#[from] ListenerError),
}

/// Owns the fully-wired supervisor for one process run.
pub struct Runner {
    supervisor: Supervisor,
}

impl Runner {
    /// Assemble all subsystems in dependency order.
    ///
    /// Plugins are started here, before the listener exists; the listener
    /// is acquired last so no request can arrive before every subsystem is
    /// in place.
    pub async fn new(
        config: &ConsoleConfig,
        modules: Vec<Arc<dyn Module>>,
        plugins: Vec<Arc<dyn Plugin>>,
        shutdown: Shutdown,
        fatal: FatalSignal,
    ) -> Result<Self, StartupError> {
        let mut module_registry = ModuleRegistry::new();
        for module in modules {
            module_registry.register(module)?;
        }
        metrics::set_modules_loaded(module_registry.len());

        let mut plugin_registry = PluginRegistry::new();
        for plugin in plugins {
            plugin_registry.register(plugin);
        }
        plugin_registry.start().await?;

        let listener = match listener::acquire(&config.listener.bind_address).await {
            Ok(listener) => listener,
            Err(e) => {
                // Listener acquisition is the only step after plugins come
                // up; stop them again so the failed startup leaves nothing
                // running.
                plugin_registry.stop().await;
                return Err(e.into());
            }
        };

        let factory = handler::default_factory(module_registry.modules(), config);
        let server = ServerUnit::new(listener, factory, config, shutdown.clone(), fatal);

        Ok(Self {
            supervisor: Supervisor::new(
                module_registry,
                plugin_registry,
                server,
                shutdown,
                config.shutdown.teardown_grace(),
            ),
        })
    }

    /// Run the supervised lifecycle. See [`Supervisor::start`].
    pub async fn start(
        self,
        startup: Option<oneshot::Sender<bool>>,
        shutdown_done: oneshot::Sender<bool>,
    ) {
        self.supervisor.start(startup, shutdown_done).await;
    }
}
