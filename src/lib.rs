//! Brick Car - a two-lane reflex game on a brick board
//!
//! Core modules:
//! - `sim`: Deterministic simulation (cars, collisions, game state)
//! - `session`: One play session (state + RNG + high score storage)
//! - `platform`: Tick scheduling and lifecycle hooks
//! - `persistence`: Key/value preference storage
//! - `highscores`: High score load/record rules
//! - `settings`: Session configuration

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use persistence::{MemoryPreferences, PreferenceStore};
pub use session::GameSession;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Brick body edge in device-independent units
    pub const BRICK_BODY_DP: f32 = 16.0;
    /// Brick border stroke in device-independent units
    pub const BRICK_STROKE_DP: f32 = 4.0;
    /// Pixel grid that brick metrics snap to (a power of two keeps sums exact)
    pub const PIXEL_QUANTUM: f32 = 1.0 / 16.0;

    /// Enemy move interval at normal speed (ms)
    pub const NORMAL_TICK_MS: u64 = 150;
    /// Enemy move interval while the player holds the board (ms)
    pub const ACCELERATED_TICK_MS: u64 = 50;
    /// Maximum enemy moves per driver advance to prevent spiral of death
    pub const MAX_TICKS_PER_ADVANCE: u32 = 8;

    /// Enemies on the board at all times
    pub const ENEMY_COUNT: usize = 3;

    /// Preference key holding the best score
    pub const HIGH_SCORE_KEY: &str = "high_score";
}

/// Browser entry point: wire up logging and panic reporting
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Brick Car (web) starting...");
    platform::web::run();
}
