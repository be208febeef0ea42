//! Interpolation-time session store.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

/// Mutable scratch space threaded through variable interpolation.
///
/// Interpolators may cache computed values here for the lifetime of one
/// session turn. The runtime itself treats it as opaque; it only passes it
/// along. Interior mutability keeps the interpolation seam `&self`-based.
#[derive(Debug, Default)]
pub struct SessionStore {
    cache: Mutex<HashMap<String, Value>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under the given key, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.cache.lock().unwrap().insert(key.into(), value);
    }

    /// Returns a clone of the value stored under the given key.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.cache.lock().unwrap().get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_then_get_round_trips() {
        let store = SessionStore::new();
        store.set("computed", json!({"total": 42}));
        assert_eq!(store.get("computed"), Some(json!({"total": 42})));
    }

    #[test]
    fn get_missing_returns_none() {
        let store = SessionStore::new();
        assert_eq!(store.get("absent"), None);
    }

    #[test]
    fn set_replaces_existing_value() {
        let store = SessionStore::new();
        store.set("k", json!(1));
        store.set("k", json!(2));
        assert_eq!(store.get("k"), Some(json!(2)));
    }
}
