//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the console.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the console server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Browser launch behavior after startup.
    pub browser: BrowserConfig,

    /// Grace periods for the shutdown sequence.
    pub shutdown: ShutdownConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:7777").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:7777".to_string(),
        }
    }
}

/// Browser launch configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Whether to open the system browser once the server is serving.
    pub open: bool,

    /// Optional path appended to the console URL when opening the browser.
    pub path: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            open: true,
            path: None,
        }
    }
}

/// Grace periods for the shutdown sequence.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Seconds the HTTP server may spend draining in-flight requests.
    pub serve_grace_secs: u64,

    /// Seconds each registry teardown call may run before being abandoned.
    pub teardown_grace_secs: u64,
}

impl ShutdownConfig {
    /// Serve drain grace as a `Duration`.
    pub fn serve_grace(&self) -> Duration {
        Duration::from_secs(self.serve_grace_secs)
    }

    /// Registry teardown grace as a `Duration`.
    pub fn teardown_grace(&self) -> Duration {
        Duration::from_secs(self.teardown_grace_secs)
    }
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            serve_grace_secs: 5,
            teardown_grace_secs: 10,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-request timeout enforced in the handler chain.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 60 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Address the metrics exporter binds to.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9100".to_string(),
        }
    }
}
