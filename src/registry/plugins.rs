//! Plugin registry.
//!
//! # Responsibilities
//! - Track registered plugins
//! - Start plugins in registration order, failing fast
//! - Stop plugins in reverse registration order at teardown

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// A long-lived plugin with a start/stop contract.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Unique plugin name, used in logs.
    fn name(&self) -> &str;

    /// Bring the plugin up. Called once, before the listener exists.
    async fn start(&self) -> Result<(), PluginError>;

    /// Release the plugin's resources. Expected to complete.
    async fn stop(&self);
}

/// Error type for plugin operations.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The plugin failed to come up.
    #[error("plugin '{name}' failed to start: {reason}")]
    Start { name: String, reason: String },
}

/// Registry of plugins, stopped in reverse order.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Register a plugin.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) {
        tracing::debug!(plugin = %plugin.name(), "Plugin registered");
        self.plugins.push(plugin);
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Start every plugin in registration order.
    ///
    /// On failure the already-started plugins are stopped again in reverse
    /// order before the error is returned, so a failed startup leaves
    /// nothing running.
    pub async fn start(&self) -> Result<(), PluginError> {
        for (idx, plugin) in self.plugins.iter().enumerate() {
            if let Err(e) = plugin.start().await {
                for started in self.plugins[..idx].iter().rev() {
                    started.stop().await;
                }
                return Err(e);
            }
            tracing::debug!(plugin = %plugin.name(), "Plugin started");
        }
        Ok(())
    }

    /// Stop every plugin, most recently started first.
    pub async fn stop(&self) {
        for plugin in self.plugins.iter().rev() {
            plugin.stop().await;
            tracing::debug!(plugin = %plugin.name(), "Plugin stopped");
        }
        tracing::info!(count = self.plugins.len(), "All plugins stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct RecordingPlugin {
        name: String,
        fail_start: bool,
        log: Arc<Mutex<Vec<String>>>,
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
                    reason: "injected".to_string(),
                });
            }
            self.log.lock().unwrap().push(format!("start:{}", self.name));
            Ok(())
        }

        async fn stop(&self) {
            self.log.lock().unwrap().push(format!("stop:{}", self.name));
        }
    }

    fn plugin(name: &str, fail_start: bool, log: &Arc<Mutex<Vec<String>>>) -> Arc<dyn Plugin> {
        Arc::new(RecordingPlugin {
            name: name.to_string(),
            fail_start,
            log: log.clone(),
        })
    }

    #[tokio::test]
    async fn starts_and_stops_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = PluginRegistry::new();
        registry.register(plugin("a", false, &log));
        registry.register(plugin("b", false, &log));

        registry.start().await.unwrap();
        registry.stop().await;

        assert_eq!(
            *log.lock().unwrap(),
            vec!["start:a", "start:b", "stop:b", "stop:a"]
        );
    }

    #[tokio::test]
    async fn failed_start_unwinds_started_plugins() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = PluginRegistry::new();
        registry.register(plugin("a", false, &log));
        registry.register(plugin("broken", true, &log));
        registry.register(plugin("c", false, &log));

        match registry.start().await {
            Err(PluginError::Start { name, .. }) => assert_eq!(name, "broken"),
            Ok(()) => panic!("expected start failure"),
        }
        // "a" came up and was stopped again; "c" never started.
        assert_eq!(*log.lock().unwrap(), vec!["start:a", "stop:a"]);
    }
}
