//! Built-in system module.
//!
//! Serves a JSON overview of the running console: service identity, uptime,
//! and the set of registered modules.

use std::time::Instant;

use async_trait::async_trait;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::registry::Module;

/// The console's own overview module, mounted like any other.
pub struct SystemModule {
    started_at: Instant,
    module_names: Vec<String>,
}

impl SystemModule {
    /// Create the system module, advertising the given module names.
    pub fn new(module_names: Vec<String>) -> Self {
        Self {
            started_at: Instant::now(),
            module_names,
        }
    }
}

#[async_trait]
impl Module for SystemModule {
    fn name(&self) -> &str {
        "system"
    }

    fn routes(&self) -> Router {
        let started_at = self.started_at;
        let modules = self.module_names.clone();

        Router::new().route(
            "/",
            get(move || {
                let modules = modules.clone();
                async move {
                    Json(json!({
                        "service": "console-server",
                        "version": env!("CARGO_PKG_VERSION"),
                        "uptime_secs": started_at.elapsed().as_secs(),
                        "modules": modules,
                    }))
                }
            }),
        )
    }

    async fn unload(&self) {}
}
