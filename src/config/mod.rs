//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, env override)
//!     → validation.rs (semantic checks)
//!     → ConsoleConfig (validated, immutable)
//!     → passed by reference into each component at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no ambient settings store,
//!   every component receives the value it needs at construction
//! - All fields have defaults so an empty config is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, LISTENER_ADDR_ENV};
pub use schema::{
    BrowserConfig, ConsoleConfig, ListenerConfig, ObservabilityConfig, ShutdownConfig,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
