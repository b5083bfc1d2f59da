//! Shared utilities for lifecycle integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::routing::get;
use axum::Router;
use console_server::config::ConsoleConfig;
use console_server::registry::{Module, Plugin, PluginError};

/// Records lifecycle events across modules and plugins so tests can assert
/// teardown ordering.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn contains(&self, event: &str) -> bool {
        self.events.lock().unwrap().iter().any(|e| e == event)
    }
}

/// Module that records its unload into the shared event log.
pub struct RecordingModule {
    name: String,
    log: EventLog,
    route_delay: Option<Duration>,
}

impl RecordingModule {
    pub fn new(name: &str, log: &EventLog) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            log: log.clone(),
            route_delay: None,
        })
    }

    /// Module whose route holds each request open for `delay`.
    pub fn with_route_delay(name: &str, log: &EventLog, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            log: log.clone(),
            route_delay: Some(delay),
        })
    }
}

#[async_trait]
impl Module for RecordingModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn routes(&self) -> Router {
        let delay = self.route_delay;
        Router::new().route(
            "/",
            get(move || async move {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                "ok"
            }),
        )
    }

    async fn unload(&self) {
        self.log.push(format!("unload:{}", self.name));
    }
}

/// Plugin that records lifecycle events; can fail to start or stall on stop.
pub struct RecordingPlugin {
    name: String,
    log: EventLog,
    fail_start: bool,
    stall_stop: Option<Duration>,
}

impl RecordingPlugin {
    pub fn new(name: &str, log: &EventLog) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            log: log.clone(),
            fail_start: false,
            stall_stop: None,
        })
    }

    /// Plugin that refuses to start.
    pub fn failing(name: &str, log: &EventLog) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            log: log.clone(),
            fail_start: true,
            stall_stop: None,
        })
    }

    /// Plugin whose stop hangs for `delay` before recording.
    pub fn stalling(name: &str, log: &EventLog, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            log: log.clone(),
            fail_start: false,
            stall_stop: Some(delay),
        })
    }
}

#[async_trait]
impl Plugin for RecordingPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    async fn start(&self) -> Result<(), PluginError> {
        if self.fail_start {
            return Err(PluginError::Start {
                name: self.name.clone(),
                reason: "injected failure".to_string(),
            });
        }
        self.log.push(format!("start:{}", self.name));
        Ok(())
    }

    async fn stop(&self) {
        if let Some(delay) = self.stall_stop {
            tokio::time::sleep(delay).await;
        }
        self.log.push(format!("stop:{}", self.name));
    }
}

/// Test config: no browser, short grace periods.
pub fn test_config(bind: &str) -> ConsoleConfig {
    let mut config = ConsoleConfig::default();
    config.listener.bind_address = bind.to_string();
    config.browser.open = false;
    config.shutdown.serve_grace_secs = 1;
    config.shutdown.teardown_grace_secs = 1;
    config
}
