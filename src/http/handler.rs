//! Handler chain construction.
//!
//! # Responsibilities
//! - Build the axum router served by the console: core status route plus
//!   one mounted router per registered module
//! - Wire cross-cutting middleware (request ID, tracing, timeout, metrics)
//! - Validate module mount segments before the chain is accepted
//!
//! # Design Decisions
//! - The factory is `FnOnce`: the chain is built exactly once per serving
//!   unit, at start time
//! - Module names double as mount segments and are checked here rather than
//!   at registration, so every chain failure surfaces through the serving
//!   unit's start path

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use thiserror::Error;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ConsoleConfig;
use crate::http::request::RequestIdLayer;
use crate::observability::metrics;
use crate::registry::Module;

/// Path prefix for the console API.
pub const API_PREFIX: &str = "/api/v1";

/// A fallible, build-once factory for the request-handler chain.
pub type HandlerFactory = Box<dyn FnOnce() -> Result<Router, HandlerError> + Send>;

/// Error type for handler chain construction.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A module name cannot be used as a mount segment.
    #[error("module '{0}' cannot be mounted: names must be non-empty lowercase alphanumeric or '-'")]
    InvalidMountPath(String),
}

/// Build the default handler factory over the given modules.
///
/// Each module is mounted under `{API_PREFIX}/modules/{name}`.
pub fn default_factory(modules: Vec<Arc<dyn Module>>, config: &ConsoleConfig) -> HandlerFactory {
    let request_timeout = Duration::from_secs(config.timeouts.request_secs);

    Box::new(move || {
        let mut api = Router::new().route("/status", get(status_handler));

        for module in &modules {
            let name = module.name();
            if !valid_mount_segment(name) {
                return Err(HandlerError::InvalidMountPath(name.to_string()));
            }
            api = api.nest(&format!("/modules/{name}"), module.routes());
        }

        Ok(Router::new()
            .nest(API_PREFIX, api)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(middleware::from_fn(track_request))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http()))
    })
}

/// Liveness endpoint outside any module.
async fn status_handler() -> Json<serde_json::Value> {
    Json(json!({
        "service": "console-server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok",
    }))
}

async fn track_request(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let start = Instant::now();
    let response = next.run(req).await;
    metrics::record_request(&method, response.status().as_u16(), start);
    response
}

fn valid_mount_segment(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
