//! Application state for the report engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::targets::{InMemoryTargetStore, TargetStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded report configuration and the target override store. The store
/// sits behind a `RwLock` so a save's read-modify-write cycle is atomic
/// with respect to concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// The loaded report configuration.
    config: Arc<ConfigLoader>,
    /// The persistence backend for monthly target overrides.
    store: Arc<RwLock<Box<dyn TargetStore + Send + Sync>>>,
}

impl AppState {
    /// Creates a new application state with the given configuration
    /// loader, backed by an in-memory target store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(config, Box::new(InMemoryTargetStore::new()))
    }

    /// Creates a new application state with an explicit target store
    /// backend.
    pub fn with_store(config: ConfigLoader, store: Box<dyn TargetStore + Send + Sync>) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the lock guarding the target override store.
    pub fn store(&self) -> &RwLock<Box<dyn TargetStore + Send + Sync>> {
        &self.store
    }
}
