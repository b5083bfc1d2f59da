//! Content module registry.
//!
//! # Responsibilities
//! - Track registered content modules by name
//! - Reject duplicate registrations
//! - Unload modules in reverse registration order at teardown

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use thiserror::Error;

/// A content module served by the console.
///
/// Modules contribute a router mounted under `/api/v1/modules/{name}` and
/// release their resources in [`Module::unload`].
#[async_trait]
pub trait Module: Send + Sync {
    /// Unique module name; doubles as the mount segment.
    fn name(&self) -> &str;

    /// Router serving this module's content.
    fn routes(&self) -> Router;

    /// Release the module's resources. Expected to complete.
    async fn unload(&self);
}

/// Error type for registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A module with the same name is already registered.
    #[error("module '{0}' is already registered")]
    Duplicate(String),
}

/// Registry of content modules.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module; duplicate names are rejected.
    pub fn register(&mut self, module: Arc<dyn Module>) -> Result<(), RegistryError> {
        if self.modules.iter().any(|m| m.name() == module.name()) {
            return Err(RegistryError::Duplicate(module.name().to_string()));
        }
        tracing::debug!(module = %module.name(), "Module registered");
        self.modules.push(module);
        Ok(())
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Snapshot of the registered modules, in registration order.
    pub fn modules(&self) -> Vec<Arc<dyn Module>> {
        self.modules.clone()
    }

    /// Unload every module, most recently registered first.
    pub async fn unload(&self) {
        for module in self.modules.iter().rev() {
            module.unload().await;
            tracing::debug!(module = %module.name(), "Module unloaded");
        }
        tracing::info!(count = self.modules.len(), "All modules unloaded");
    }
}
