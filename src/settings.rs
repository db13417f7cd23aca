//! Session settings
//!
//! Persisted next to the high score through the LocalStorage preference store.

use serde::{Deserialize, Serialize};

use crate::sim::Density;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Surface pixels per device-independent unit
    pub density_scale: f32,
    /// Fixed RNG seed for reproducible runs (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,

    // === Demo ===
    /// Enemy moves the headless demo runs before stopping
    pub demo_max_ticks: u32,
    /// Simulated wall-clock step fed to the ticker per demo frame (ms)
    pub demo_frame_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            density_scale: 1.0,
            seed: None,
            demo_max_ticks: 2000,
            demo_frame_ms: 16,
        }
    }
}

impl Settings {
    /// Density derived from the configured scale (non-positive scales fall back to 1.0)
    pub fn density(&self) -> Density {
        if self.density_scale > 0.0 && self.density_scale.is_finite() {
            Density::new(self.density_scale)
        } else {
            log::warn!("Invalid density scale {}, using 1.0", self.density_scale);
            Density::default()
        }
    }

    /// Seed for a new session
    pub fn session_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Preference key under the LocalStorage prefix
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        use crate::persistence::{LocalStoragePreferences, PreferenceStore};

        LocalStoragePreferences::default().get_preference(Self::STORAGE_KEY, Self::default())
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        use crate::persistence::{LocalStoragePreferences, PreferenceStore};

        LocalStoragePreferences::default().save_preference(Self::STORAGE_KEY, self);
        log::info!("Settings saved");
    }

    /// Native: defaults, with an optional fixed seed from `BRICK_CAR_SEED`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let mut settings = Self::default();
        if let Some(seed) = std::env::var("BRICK_CAR_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            settings.seed = Some(seed);
        }
        settings
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.density(), Density::new(1.0));
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_invalid_density_falls_back() {
        let settings = Settings {
            density_scale: 0.0,
            ..Settings::default()
        };
        assert_eq!(settings.density(), Density::default());
        let settings = Settings {
            density_scale: f32::NAN,
            ..Settings::default()
        };
        assert_eq!(settings.density(), Density::default());
    }

    #[test]
    fn test_configured_seed_is_used() {
        let settings = Settings {
            seed: Some(1234),
            ..Settings::default()
        };
        assert_eq!(settings.session_seed(), 1234);
    }

    #[test]
    fn test_json_without_seed() {
        let json = r#"{"density_scale":2.0,"demo_max_ticks":10,"demo_frame_ms":5}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.density_scale, 2.0);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.demo_max_ticks, 10);
    }
}
