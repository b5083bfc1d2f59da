//! console-server
//!
//! A module- and plugin-extensible web console built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────────────┐
//!                      │                  CONSOLE SERVER                    │
//!                      │                                                    │
//!   Startup            │  config ──▶ modules ──▶ plugins ──▶ listener      │
//!   ─────────────────▶ │     (lifecycle::startup, dependency order)         │
//!                      │                                                    │
//!   HTTP Request       │  ┌─────────┐    ┌─────────┐    ┌───────────────┐  │
//!   ─────────────────▶ │  │   net   │───▶│  http   │───▶│ module routes │  │
//!                      │  │listener │    │ server  │    │  (registry)   │  │
//!                      │  └─────────┘    └─────────┘    └───────────────┘  │
//!                      │                                                    │
//!   Shutdown Signal    │  supervisor: cancel ──▶ drain HTTP (bounded)      │
//!   ─────────────────▶ │              ──▶ unload modules ──▶ stop plugins  │
//!                      │              ──▶ shutdown sink                    │
//!                      │                                                    │
//!                      │  ┌──────────────────────────────────────────────┐ │
//!                      │  │           Cross-Cutting Concerns             │ │
//!                      │  │  ┌─────────┐ ┌──────────────┐ ┌───────────┐  │ │
//!                      │  │  │ config  │ │observability │ │ lifecycle │  │ │
//!                      │  │  └─────────┘ └──────────────┘ └───────────┘  │ │
//!                      │  └──────────────────────────────────────────────┘ │
//!                      └────────────────────────────────────────────────────┘
//! ```
//!
//! The coordination logic lives in `lifecycle`: ordered construction,
//! contention-checked listener acquisition, a background serving task with a
//! readiness signal, and a bounded, ordered graceful shutdown.

// Core subsystems
pub mod config;
pub mod http;
pub mod net;
pub mod registry;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
