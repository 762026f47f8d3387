// web_app/theme/storage.rs - Persistence seam for the theme store

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::ThemeError;

/// String key/value persistence, shaped like the browser's `localStorage`
pub trait ThemeStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// In-process storage used during server rendering and in tests
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the store persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        if let Ok(mut map) = storage.entries.lock() {
            map.extend(entries.into_iter().map(|(k, v)| (k.to_string(), v.to_string())));
        }
        storage
    }

    fn poisoned(action: &'static str, key: &str) -> ThemeError {
        ThemeError::Storage {
            action,
            key: key.to_string(),
            reason: "lock poisoned".to_string(),
        }
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let map = self.entries.lock().map_err(|_| Self::poisoned("read", key))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut map = self.entries.lock().map_err(|_| Self::poisoned("write", key))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set("theme", "dark").unwrap();
        assert_eq!(handle.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(handle.get("missing").unwrap(), None);
    }
}
