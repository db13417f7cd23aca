//! Tick scheduler
//!
//! Turns elapsed wall-clock time into `MoveEnemyCars` events at the interval
//! set by the current velocity, and reacts to status transitions: leaving
//! `Running` cancels the pending wait, entering `GameOver` saves the high
//! score once.

use std::time::Duration;

use crate::consts::MAX_TICKS_PER_ADVANCE;
use crate::persistence::PreferenceStore;
use crate::session::GameSession;
use crate::sim::{GameEvent, GameStatus};

#[derive(Debug, Clone)]
pub struct Ticker {
    accumulator: Duration,
    last_status: GameStatus,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_status: GameStatus::Idle,
        }
    }

    /// Time banked toward the next enemy move
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Feed elapsed time; returns the number of enemy moves emitted
    ///
    /// Status is checked before every move, so a collision stops the burst.
    pub fn advance<P: PreferenceStore>(
        &mut self,
        session: &mut GameSession<P>,
        elapsed: Duration,
    ) -> u32 {
        self.observe(session);
        if !session.state().is_running() {
            self.accumulator = Duration::ZERO;
            return 0;
        }

        self.accumulator += elapsed;
        let mut moves = 0;
        while session.state().is_running() && moves < MAX_TICKS_PER_ADVANCE {
            let interval = session.state().velocity().interval();
            if self.accumulator < interval {
                break;
            }
            self.accumulator -= interval;
            session.dispatch(GameEvent::MoveEnemyCars);
            moves += 1;
        }

        if moves == MAX_TICKS_PER_ADVANCE {
            log::debug!("Tick backlog dropped ({:?})", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.observe(session);
        moves
    }

    /// Apply an input event and react to any status change it causes
    pub fn dispatch<P: PreferenceStore>(&mut self, session: &mut GameSession<P>, event: GameEvent) {
        session.dispatch(event);
        self.observe(session);
    }

    /// The host lost focus or was backgrounded: pause a running game
    pub fn focus_lost<P: PreferenceStore>(&mut self, session: &mut GameSession<P>) {
        if session.state().is_running() {
            self.dispatch(session, GameEvent::Pause);
        }
    }

    fn observe<P: PreferenceStore>(&mut self, session: &mut GameSession<P>) {
        let status = session.state().status();
        if status == self.last_status {
            return;
        }
        if status != GameStatus::Running {
            self.accumulator = Duration::ZERO;
        }
        if status == GameStatus::GameOver {
            log::info!("Game over with score {}", session.state().score());
            session.save_high_score();
        }
        self.last_status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScore;
    use crate::persistence::MemoryPreferences;
    use crate::sim::{Car, Density, Point, Velocity};

    fn running_session(seed: u64) -> (GameSession<MemoryPreferences>, Ticker) {
        let mut session = GameSession::new(MemoryPreferences::new(), seed);
        session.initialize(Density::default());
        let mut ticker = Ticker::new();
        ticker.dispatch(&mut session, GameEvent::PlayOrResume);
        (session, ticker)
    }

    /// Keep every enemy out of the player's lane
    fn clear_player_lane(session: &mut GameSession<MemoryPreferences>) {
        let state = session.state_mut();
        let x = state.lane_x_for(state.lane_of(&state.player_car).opposite());
        for car in state.enemy_cars.iter_mut() {
            *car = car.with_head(Point::new(x, car.head.y));
        }
    }

    /// Park an enemy one move above contact with the player
    fn doom_player(session: &mut GameSession<MemoryPreferences>) {
        let state = session.state_mut();
        let head = state.player_car.head;
        let brick = state.brick_size();
        state.enemy_cars[0] = Car::new(Point::new(head.x, head.y - 4.0 * brick), brick);
    }

    #[test]
    fn test_waits_full_interval_before_first_move() {
        let (mut session, mut ticker) = running_session(1);
        let y = session.state().enemy_cars()[0].head.y;

        assert_eq!(ticker.advance(&mut session, Duration::from_millis(149)), 0);
        assert_eq!(session.state().enemy_cars()[0].head.y, y);

        assert_eq!(ticker.advance(&mut session, Duration::from_millis(1)), 1);
        assert_eq!(session.state().enemy_cars()[0].head.y, y + 20.0);
        assert_eq!(ticker.pending(), Duration::ZERO);
    }

    #[test]
    fn test_accelerated_interval() {
        let (mut session, mut ticker) = running_session(2);
        clear_player_lane(&mut session);
        ticker.dispatch(&mut session, GameEvent::VelocityChanged { accelerate: true });
        assert_eq!(session.state().velocity(), Velocity::Accelerated);

        assert_eq!(ticker.advance(&mut session, Duration::from_millis(150)), 3);
        assert_eq!(ticker.pending(), Duration::ZERO);
    }

    #[test]
    fn test_no_moves_unless_running() {
        let mut session = GameSession::new(MemoryPreferences::new(), 3);
        session.initialize(Density::default());
        let mut ticker = Ticker::new();
        assert_eq!(ticker.advance(&mut session, Duration::from_secs(1)), 0);

        ticker.dispatch(&mut session, GameEvent::PlayOrResume);
        ticker.advance(&mut session, Duration::from_millis(100));
        ticker.dispatch(&mut session, GameEvent::Pause);
        assert_eq!(ticker.pending(), Duration::ZERO);
        assert_eq!(ticker.advance(&mut session, Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_burst_is_capped() {
        let (mut session, mut ticker) = running_session(4);
        clear_player_lane(&mut session);
        let moves = ticker.advance(&mut session, Duration::from_secs(10));
        assert_eq!(moves, MAX_TICKS_PER_ADVANCE);
        assert_eq!(ticker.pending(), Duration::ZERO);
    }

    #[test]
    fn test_focus_lost_pauses_running_game() {
        let (mut session, mut ticker) = running_session(5);
        ticker.focus_lost(&mut session);
        assert_eq!(session.state().status(), GameStatus::Paused);

        // Idle stays idle
        let mut idle = GameSession::new(MemoryPreferences::new(), 6);
        ticker.focus_lost(&mut idle);
        assert_eq!(idle.state().status(), GameStatus::Idle);
    }

    #[test]
    fn test_game_over_saves_high_score_once() {
        let (mut session, mut ticker) = running_session(7);
        session.state_mut().score = 5;
        doom_player(&mut session);

        assert_eq!(ticker.advance(&mut session, Duration::from_millis(600)), 1);
        assert_eq!(session.state().status(), GameStatus::GameOver);
        assert_eq!(session.state().high_score(), 5);
        assert_eq!(HighScore::load(session.prefs()).score, 5);

        // Further advances neither move nor save again
        assert_eq!(ticker.advance(&mut session, Duration::from_secs(1)), 0);
        assert_eq!(session.state().high_score(), 5);
    }

    #[test]
    fn test_lower_score_keeps_stored_high_score() {
        let mut prefs = MemoryPreferences::new();
        HighScore::new(50).save(&mut prefs);
        let mut session = GameSession::new(prefs, 8);
        session.initialize(Density::default());
        let mut ticker = Ticker::new();
        ticker.dispatch(&mut session, GameEvent::PlayOrResume);
        session.state_mut().score = 2;
        doom_player(&mut session);

        ticker.advance(&mut session, Duration::from_millis(150));
        assert_eq!(session.state().status(), GameStatus::GameOver);
        assert_eq!(session.state().high_score(), 50);
        assert_eq!(HighScore::load(session.prefs()).score, 50);
    }

    #[test]
    fn test_restart_then_second_game_over_saves_again() {
        let (mut session, mut ticker) = running_session(9);
        session.state_mut().score = 3;
        doom_player(&mut session);
        ticker.advance(&mut session, Duration::from_millis(150));
        assert_eq!(session.state().high_score(), 3);

        ticker.dispatch(&mut session, GameEvent::Restart);
        assert_eq!(session.state().status(), GameStatus::Running);
        assert_eq!(session.state().score(), 0);

        session.state_mut().score = 9;
        doom_player(&mut session);
        ticker.advance(&mut session, Duration::from_millis(150));
        assert_eq!(session.state().status(), GameStatus::GameOver);
        assert_eq!(session.state().high_score(), 9);
        assert_eq!(HighScore::load(session.prefs()).score, 9);
    }
}
