//! A play session: game state, its random source and high score storage
//!
//! Owns the only mutable [`GameState`] of a session and serializes every
//! event through [`GameSession::dispatch`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::highscores::HighScore;
use crate::persistence::PreferenceStore;
use crate::settings::Settings;
use crate::sim::{Density, GameEvent, GameState, apply_event};

pub struct GameSession<P: PreferenceStore> {
    state: GameState,
    rng: Pcg32,
    prefs: P,
    seed: u64,
}

impl<P: PreferenceStore> GameSession<P> {
    /// Start a session, hydrating the high score from storage
    pub fn new(prefs: P, seed: u64) -> Self {
        let mut session = Self {
            state: GameState::new(),
            rng: Pcg32::seed_from_u64(seed),
            prefs,
            seed,
        };
        let stored = HighScore::load(&session.prefs);
        session.dispatch(GameEvent::HighScoreChanged(stored.score));
        session
    }

    /// Start a session from settings (random seed unless one is configured)
    pub fn from_settings(prefs: P, settings: &Settings) -> Self {
        let seed = settings.session_seed();
        log::info!("Session seed {}", seed);
        Self::new(prefs, seed)
    }

    /// Set up the board; repeated calls are ignored
    pub fn initialize(&mut self, density: Density) -> bool {
        self.state.initialize(density, &mut self.rng)
    }

    pub fn dispatch(&mut self, event: GameEvent) {
        apply_event(&mut self.state, event, &mut self.rng);
    }

    /// Record the current score if it beats the stored high score
    ///
    /// Updates both the in-memory state and storage. Returns true when a new
    /// high score was recorded.
    pub fn save_high_score(&mut self) -> bool {
        let stored = HighScore::load(&self.prefs);
        let score = self.state.score();
        if !stored.qualifies(score) {
            return false;
        }
        log::info!("New high score {} (was {})", score, stored.score);
        self.dispatch(GameEvent::HighScoreChanged(score));
        HighScore::new(score).save(&mut self.prefs);
        true
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
