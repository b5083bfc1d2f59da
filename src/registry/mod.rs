//! Module and plugin registries.
//!
//! # Data Flow
//! ```text
//! Construction:
//!     modules  → ModuleRegistry (duplicate names rejected)
//!     plugins  → PluginRegistry → start() in registration order
//!
//! Serving:
//!     ModuleRegistry → handler chain mounts each module's router
//!
//! Teardown (driven by the supervisor):
//!     ModuleRegistry::unload()  (reverse registration order)
//!     PluginRegistry::stop()    (reverse registration order, after modules)
//! ```
//!
//! # Design Decisions
//! - Registries are the narrow interface to otherwise opaque subsystems:
//!   the supervisor only knows start/stop, never business logic
//! - Teardown calls are expected to complete; bounding them is the
//!   supervisor's job

pub mod modules;
pub mod plugins;
pub mod system;

pub use modules::{Module, ModuleRegistry, RegistryError};
pub use plugins::{Plugin, PluginError, PluginRegistry};
pub use system::SystemModule;
