//! Storage abstraction for persisted override tables.

use std::collections::HashMap;

use crate::error::EngineResult;

/// Key-value access to persisted override payloads.
///
/// The engine reads and writes whole year-scoped payloads as text; the
/// concrete transport (browser storage, a file, a database row) lives with
/// the collaborator implementing this trait.
pub trait TargetStore {
    /// Reads the payload stored under `key`, if any.
    fn get(&self, key: &str) -> EngineResult<Option<String>>;

    /// Stores `value` under `key`, replacing any existing payload.
    fn put(&mut self, key: &str, value: String) -> EngineResult<()>;
}

/// A [`TargetStore`] backed by a process-local map.
///
/// Suitable for tests and single-process deployments; nothing survives a
/// restart.
///
/// # Example
///
/// ```
/// use report_engine::targets::{InMemoryTargetStore, TargetStore};
///
/// let mut store = InMemoryTargetStore::new();
/// store.put("monthly-targets:2025", "{}".to_string()).unwrap();
/// assert_eq!(store.get("monthly-targets:2025").unwrap(), Some("{}".to_string()));
/// assert_eq!(store.get("monthly-targets:2026").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTargetStore {
    entries: HashMap<String, String>,
}

impl InMemoryTargetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TargetStore for InMemoryTargetStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: String) -> EngineResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
