//! Listener acquisition with instance contention detection.
//!
//! # Responsibilities
//! - Probe the configured address for an already-running instance
//! - Bind exactly one TCP listener when the address is free
//! - Distinguish "address in use" from other bind failures
//!
//! # Design Decisions
//! - The probe is a short-timeout outbound connect, not a lock; a listener
//!   appearing between probe and bind is an accepted race
//! - Acquisition is sequential: no serving task exists until it returns

use std::io;
use std::time::Duration;

use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tokio::time;

/// How long the contention probe waits before concluding nothing is listening.
const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Error type for listener acquisition.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Another instance is already serving on the address.
    #[error("{addr}: another instance is already listening")]
    AddressInUse { addr: String },

    /// Binding the listener failed (permissions, invalid address, ...).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
}

/// Acquire the listener for `addr`, probing for a running instance first.
///
/// A successful probe connect means something is already accepting on `addr`;
/// acquisition fails with [`ListenerError::AddressInUse`] without attempting
/// to bind. A refused or timed-out probe falls through to the bind.
pub async fn acquire(addr: &str) -> Result<TcpListener, ListenerError> {
    match time::timeout(PROBE_TIMEOUT, TcpStream::connect(addr)).await {
        Ok(Ok(probe)) => {
            drop(probe);
            tracing::warn!(address = %addr, "Address is served by another instance");
            Err(ListenerError::AddressInUse {
                addr: addr.to_string(),
            })
        }
        Ok(Err(_)) | Err(_) => {
            let listener = TcpListener::bind(addr)
                .await
                .map_err(|source| ListenerError::Bind {
                    addr: addr.to_string(),
                    source,
                })?;

            if let Ok(local) = listener.local_addr() {
                tracing::info!(address = %local, "Listener bound");
            }
            Ok(listener)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn acquires_free_address() {
        let listener = acquire("127.0.0.1:0").await.unwrap();
        assert_eq!(listener.local_addr().unwrap().ip().to_string(), "127.0.0.1");
    }

    #[tokio::test]
    async fn detects_running_instance() {
        let first = acquire("127.0.0.1:0").await.unwrap();
        let addr = first.local_addr().unwrap().to_string();

        match acquire(&addr).await {
            Err(ListenerError::AddressInUse { addr: reported }) => assert_eq!(reported, addr),
            other => panic!("expected AddressInUse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn contention_leaves_no_second_listener() {
        let first = acquire("127.0.0.1:0").await.unwrap();
        let addr = first.local_addr().unwrap().to_string();

        assert!(acquire(&addr).await.is_err());

        // Releasing the original listener frees the address again, so the
        // failed acquisition cannot have left anything bound.
        drop(first);
        assert!(acquire(&addr).await.is_ok());
    }

    #[tokio::test]
    async fn bind_failure_is_not_contention() {
        match acquire("definitely-not-a-host:0").await {
            Err(ListenerError::Bind { .. }) => {}
            other => panic!("expected Bind error, got {:?}", other),
        }
    }
}
