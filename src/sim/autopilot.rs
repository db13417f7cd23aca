//! Demo mode: a tiny AI that plays the game
//!
//! Looks one move ahead and switches lanes when staying would end the run.

use super::car::Car;
use super::collision::first_collision;
use super::geometry::Point;
use super::state::{GameEvent, GameState};

/// Event the autopilot wants applied before the next enemy move, if any
pub fn choose_event(state: &GameState) -> Option<GameEvent> {
    if !state.is_running() {
        return None;
    }

    let player = *state.player_car();
    if !hit_on_next_move(state, &player) {
        return None;
    }

    let other_lane = state.lane_of(&player).opposite();
    let dodge = player.with_head(state.player_head(other_lane));
    if hit_on_next_move(state, &dodge) {
        // Nowhere to go
        return None;
    }
    Some(GameEvent::ChangePlayerCarPosition)
}

fn hit_on_next_move(state: &GameState, player: &Car) -> bool {
    let step = Point::new(0.0, state.brick_size());
    let enemies = *state.enemy_cars();
    let next = enemies.map(|car| car.with_head(car.head + step));
    first_collision(player, &next).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Density, GameStatus, Lane, apply_event};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_idle_does_nothing() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::new();
        state.initialize(Density::default(), &mut rng);
        assert_eq!(choose_event(&state), None);
    }

    #[test]
    fn test_dodges_incoming_enemy() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut state = GameState::new();
        state.initialize(Density::default(), &mut rng);
        apply_event(&mut state, GameEvent::PlayOrResume, &mut rng);

        let head = state.player_car().head;
        let brick = state.brick_size();
        state.enemy_cars[0] = Car::new(Point::new(head.x, head.y - 4.0 * brick), brick);
        assert_eq!(
            choose_event(&state),
            Some(GameEvent::ChangePlayerCarPosition)
        );

        apply_event(&mut state, GameEvent::ChangePlayerCarPosition, &mut rng);
        assert_eq!(state.lane_of(state.player_car()), Lane::Right);
        assert_eq!(choose_event(&state), None);
    }

    #[test]
    fn test_autopilot_survives_long_run() {
        let mut rng = Pcg32::seed_from_u64(77);
        let mut state = GameState::new();
        state.initialize(Density::new(2.0), &mut rng);
        apply_event(&mut state, GameEvent::PlayOrResume, &mut rng);

        for _ in 0..1000 {
            if let Some(event) = choose_event(&state) {
                apply_event(&mut state, event, &mut rng);
            }
            apply_event(&mut state, GameEvent::MoveEnemyCars, &mut rng);
        }
        assert_eq!(state.status(), GameStatus::Running);
        assert!(state.score() > 90);
    }
}
