// crates/review-prompt-core/src/runtime/memory.rs
// ============================================================================
// Module: In-Memory Settings Store
// Description: Mutex-guarded map implementing the settings store interface.
// Purpose: Provide a deterministic store for tests and examples.
// Dependencies: crate::interfaces, serde_json
// ============================================================================

//! ## Overview
//! A settings store backed by an in-process map. Suitable for tests,
//! examples, and single-process hosts that persist settings elsewhere.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::interfaces::SettingsError;
use crate::interfaces::SettingsStore;

// ============================================================================
// SECTION: Store
// ============================================================================

/// In-memory settings store.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    /// Stored values keyed by setting name.
    values: Mutex<BTreeMap<String, Value>>,
}

impl InMemorySettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: Mutex::new(BTreeMap::new()),
        }
    }

    /// Returns a snapshot of all stored values.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the store mutex is poisoned.
    pub fn snapshot(&self) -> Result<BTreeMap<String, Value>, SettingsError> {
        let guard =
            self.values.lock().map_err(|_| SettingsError::Store("mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<Value>, SettingsError> {
        let guard =
            self.values.lock().map_err(|_| SettingsError::Store("mutex poisoned".to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), SettingsError> {
        let mut guard =
            self.values.lock().map_err(|_| SettingsError::Store("mutex poisoned".to_string()))?;
        guard.insert(key.to_string(), value);
        Ok(())
    }
}
