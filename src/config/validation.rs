//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (grace periods > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ConsoleConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ConsoleConfig;

/// A single semantic config defect.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The listen address is not a parseable `host:port`.
    #[error("listener.bind_address '{0}' is not a valid host:port")]
    InvalidBindAddress(String),

    /// The HTTP drain grace is zero, which would drop every in-flight request.
    #[error("shutdown.serve_grace_secs must be greater than zero")]
    ZeroServeGrace,

    /// The registry teardown grace is zero.
    #[error("shutdown.teardown_grace_secs must be greater than zero")]
    ZeroTeardownGrace,

    /// The per-request timeout is zero.
    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    /// The metrics exporter address is not parseable.
    #[error("observability.metrics_address '{0}' is not a valid host:port")]
    InvalidMetricsAddress(String),
}

/// Validate a config, collecting every defect.
pub fn validate_config(config: &ConsoleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.shutdown.serve_grace_secs == 0 {
        errors.push(ValidationError::ZeroServeGrace);
    }
    if config.shutdown.teardown_grace_secs == 0 {
        errors.push(ValidationError::ZeroTeardownGrace);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
