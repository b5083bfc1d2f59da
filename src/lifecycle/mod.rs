//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → registries → start plugins → acquire listener
//!     → serving unit → supervisor
//!
//! Shutdown (shutdown.rs, supervisor.rs):
//!     Signal received → serving unit drains (bounded) while the
//!     supervisor unloads modules, then stops plugins → shutdown sink
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//!     second signal  → immediate exit
//!
//! Fatality (fatal.rs):
//!     serve-loop death → typed error channel → binary entry point
//! ```
//!
//! # Design Decisions
//! - Ordered startup: subsystems first, listener last
//! - Ordered teardown: modules before plugins, sink write strictly last
//! - Teardown is bounded: a missed deadline is abandoned with a warning
//! - Only the binary entry point may terminate the process

pub mod fatal;
pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod supervisor;

pub use fatal::{FatalReceiver, FatalSignal};
pub use shutdown::Shutdown;
pub use startup::{Runner, StartupError};
pub use supervisor::Supervisor;
