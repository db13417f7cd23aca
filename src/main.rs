//! Brick Car entry point
//!
//! Native builds run a headless autopilot demo on a simulated clock. The web
//! build starts from `wasm_start` in the library instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Duration;

    use brick_car::platform::Ticker;
    use brick_car::sim::{GameEvent, GameStatus, autopilot};
    use brick_car::{GameSession, MemoryPreferences, Settings};

    env_logger::init();
    log::info!("Brick Car (native) starting...");

    let settings = Settings::load();
    let mut session = GameSession::from_settings(MemoryPreferences::new(), &settings);
    session.initialize(settings.density());

    let board = session.state().board_size();
    log::info!("Board {}x{} px", board.width, board.height);

    let mut ticker = Ticker::new();
    ticker.dispatch(&mut session, GameEvent::PlayOrResume);

    let frame = Duration::from_millis(settings.demo_frame_ms.max(1));
    let mut moves = 0;
    while moves < settings.demo_max_ticks && session.state().status() == GameStatus::Running {
        if let Some(event) = autopilot::choose_event(session.state()) {
            ticker.dispatch(&mut session, event);
        }
        moves += ticker.advance(&mut session, frame);
    }

    println!(
        "Demo finished after {} moves: status {}, score {}, high score {} (seed {})",
        moves,
        session.state().status().as_str(),
        session.state().score(),
        session.state().high_score(),
        session.seed()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_start, this is just to satisfy the compiler
}
