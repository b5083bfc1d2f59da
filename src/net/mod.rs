//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! listener.rs:
//!     probe bind address for a running instance
//!     → free: bind exactly one TCP listener
//!     → busy: fail with AddressInUse, nothing bound
//!     → hand the listener to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Exactly one live listener per address within this process
//! - Contention is detected before binding so "port already taken by
//!   another console" is distinguishable from a plain bind failure

pub mod listener;

pub use listener::{acquire, ListenerError};
