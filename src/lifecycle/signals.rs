//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT)
//! - Translate signals into the shared shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - A second SIGTERM/SIGINT while draining forces immediate exit

use crate::lifecycle::shutdown::Shutdown;

#[cfg(unix)]
async fn termination() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigint.recv() => {}
        _ = sigterm.recv() => {}
    }
    Ok(())
}

#[cfg(not(unix))]
async fn termination() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Spawn the signal watcher.
///
/// The first termination signal triggers graceful shutdown; a second one
/// exits the process immediately.
pub fn spawn_watcher(shutdown: Shutdown) {
    tokio::spawn(async move {
        if termination().await.is_err() {
            tracing::error!("Failed to install signal handlers");
            return;
        }

        tracing::info!("Termination signal received, shutting down");
        shutdown.trigger();

        if termination().await.is_ok() {
            tracing::warn!("Second termination signal, exiting immediately");
            std::process::exit(1);
        }
    });
}
