//! Pointer input to game events
//!
//! The board has a single control surface: holding it speeds the enemies up
//! and tapping it either starts/resumes/restarts the game or switches lanes.

use crate::sim::{GameEvent, GameStatus};

/// Event for a tap on the board in the given status
pub fn tap_event(status: GameStatus) -> GameEvent {
    match status {
        GameStatus::Idle | GameStatus::Paused => GameEvent::PlayOrResume,
        GameStatus::GameOver => GameEvent::Restart,
        GameStatus::Running => GameEvent::ChangePlayerCarPosition,
    }
}

/// Event for the pointer going down (`true`) or up (`false`)
pub fn hold_event(pressed: bool) -> GameEvent {
    GameEvent::VelocityChanged {
        accelerate: pressed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_event_per_status() {
        assert_eq!(tap_event(GameStatus::Idle), GameEvent::PlayOrResume);
        assert_eq!(tap_event(GameStatus::Paused), GameEvent::PlayOrResume);
        assert_eq!(tap_event(GameStatus::GameOver), GameEvent::Restart);
        assert_eq!(
            tap_event(GameStatus::Running),
            GameEvent::ChangePlayerCarPosition
        );
    }

    #[test]
    fn test_hold_event() {
        assert_eq!(
            hold_event(true),
            GameEvent::VelocityChanged { accelerate: true }
        );
        assert_eq!(
            hold_event(false),
            GameEvent::VelocityChanged { accelerate: false }
        );
    }
}
