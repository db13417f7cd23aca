//! Key/value preference storage
//!
//! Values are stored as JSON strings under a string key. Backends only move
//! raw strings around; encoding, decoding and defaults live in the provided
//! methods of [`PreferenceStore`]. Storage never fails from the caller's
//! point of view: unreadable values fall back to the default and write
//! errors are logged by the backend.

#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStoragePreferences;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// A simple synchronous key/value preference store
pub trait PreferenceStore {
    /// Raw stored string for a key, if present
    fn read_raw(&self, key: &str) -> Option<String>;

    /// Store a raw string under a key
    fn write_raw(&mut self, key: &str, value: &str);

    /// Read a typed preference, or `default_value` when absent or unreadable
    fn get_preference<T: DeserializeOwned>(&self, key: &str, default_value: T) -> T {
        let Some(raw) = self.read_raw(key) else {
            return default_value;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring unreadable preference {}: {}", key, e);
                default_value
            }
        }
    }

    /// Store a typed preference
    fn save_preference<T: Serialize>(&mut self, key: &str, value: T) {
        match serde_json::to_string(&value) {
            Ok(json) => self.write_raw(key, &json),
            Err(e) => log::warn!("Could not encode preference {}: {}", key, e),
        }
    }
}

/// In-process store, used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn read_raw(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write_raw(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
