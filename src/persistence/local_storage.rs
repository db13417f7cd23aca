//! Browser LocalStorage backend (WASM only)

use web_sys::Storage;

use super::PreferenceStore;

/// Preferences kept in the page's LocalStorage under a key prefix
#[derive(Debug, Clone)]
pub struct LocalStoragePreferences {
    prefix: &'static str,
}

impl Default for LocalStoragePreferences {
    fn default() -> Self {
        Self::new("brick_car_")
    }
}

impl LocalStoragePreferences {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn read_raw(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(&self.full_key(key)).ok().flatten()
    }

    fn write_raw(&mut self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, preference {} not saved", key);
            return;
        };
        if storage.set_item(&self.full_key(key), value).is_err() {
            log::warn!("Failed to save preference {}", key);
        }
    }
}
