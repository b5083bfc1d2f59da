//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (listener acquired by net)
//!     → server.rs (serving lifecycle: serve task, readiness, drain)
//!     → handler.rs (chain: status route + mounted module routers)
//!     → request.rs (request ID stamped at the edge)
//! ```

pub mod handler;
pub mod request;
pub mod server;

pub use handler::{default_factory, HandlerError, HandlerFactory, API_PREFIX};
pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::{ServeError, ServerUnit};
