//! console-server binary entry point.
//!
//! Wires configuration, signal handling, and the fatal-error channel around
//! the supervised lifecycle. This is the only place that maps failures to a
//! process exit code.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::oneshot;

use console_server::config;
use console_server::lifecycle::{signals, FatalSignal, Runner, Shutdown};
use console_server::observability::{logging, metrics};
use console_server::registry::{Module, Plugin, SystemModule};

/// Module- and plugin-extensible web console.
#[derive(Debug, Parser)]
#[command(name = "console-server", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overriding config file and environment.
    #[arg(long)]
    listen: Option<String>,

    /// Do not open the system browser after startup.
    #[arg(long)]
    no_browser: bool,

    /// Path appended to the console URL when opening the browser.
    #[arg(long)]
    browser_path: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "console-server starting");

    let mut config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    if let Some(listen) = cli.listen {
        config.listener.bind_address = listen;
    }
    if cli.no_browser {
        config.browser.open = false;
    }
    if let Some(path) = cli.browser_path {
        config.browser.path = Some(path);
    }

    // CLI overrides bypass the loader, so check the merged result once more.
    if let Err(errors) = config::validate_config(&config) {
        for error in &errors {
            tracing::error!(error = %error, "Invalid configuration");
        }
        return ExitCode::FAILURE;
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let shutdown = Shutdown::new();
    signals::spawn_watcher(shutdown.clone());
    let (fatal, mut fatal_rx) = FatalSignal::channel();

    let modules: Vec<Arc<dyn Module>> =
        vec![Arc::new(SystemModule::new(vec!["system".to_string()]))];
    let plugins: Vec<Arc<dyn Plugin>> = Vec::new();

    let runner = match Runner::new(&config, modules, plugins, shutdown.clone(), fatal).await {
        Ok(runner) => runner,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return ExitCode::FAILURE;
        }
    };

    let (startup_tx, startup_rx) = oneshot::channel();
    let (shutdown_tx, _shutdown_rx) = oneshot::channel();

    tokio::spawn(async move {
        if startup_rx.await.is_ok() {
            tracing::info!("Startup complete");
        }
    });

    tokio::select! {
        _ = runner.start(Some(startup_tx), shutdown_tx) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Some(err) = fatal_rx.recv() => {
            tracing::error!(error = %err, "Server terminated unexpectedly");
            ExitCode::FAILURE
        }
    }
}
