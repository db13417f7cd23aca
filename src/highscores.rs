//! High score tracking
//!
//! A single best score persisted through a [`PreferenceStore`].

use serde::{Deserialize, Serialize};

use crate::consts::HIGH_SCORE_KEY;
use crate::persistence::PreferenceStore;

/// Best score reached so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
}

impl HighScore {
    pub fn new(score: u32) -> Self {
        Self { score }
    }

    /// Check if a score beats this one
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.score
    }

    /// Load the stored high score (0 when nothing is stored)
    pub fn load<P: PreferenceStore>(prefs: &P) -> Self {
        let score = prefs.get_preference(HIGH_SCORE_KEY, 0u32);
        log::info!("Loaded high score {}", score);
        Self { score }
    }

    /// Persist this high score
    pub fn save<P: PreferenceStore>(&self, prefs: &mut P) {
        prefs.save_preference(HIGH_SCORE_KEY, self.score);
        log::info!("High score saved ({})", self.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryPreferences;

    #[test]
    fn test_load_defaults_to_zero() {
        let prefs = MemoryPreferences::new();
        assert_eq!(HighScore::load(&prefs), HighScore::new(0));
    }

    #[test]
    fn test_save_and_load() {
        let mut prefs = MemoryPreferences::new();
        HighScore::new(21).save(&mut prefs);
        assert_eq!(HighScore::load(&prefs).score, 21);
    }

    #[test]
    fn test_qualifies_strictly_greater() {
        let best = HighScore::new(10);
        assert!(best.qualifies(11));
        assert!(!best.qualifies(10));
        assert!(!best.qualifies(0));
        assert!(HighScore::default().qualifies(1));
    }
}
