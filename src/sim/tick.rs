//! Event handling and the enemy move cycle
//!
//! Every change to a [`GameState`] after initialization goes through
//! [`apply_event`]. Events must be applied one at a time, in the order they
//! were emitted.

use rand::Rng;

use super::collision::first_collision;
use super::geometry::Point;
use super::state::{GameEvent, GameState, GameStatus, Lane, Velocity};

/// Apply a single event to the game state
///
/// Total over [`GameEvent`]; no event is ever rejected, though some are
/// no-ops in certain states (see the individual handlers).
pub fn apply_event<R: Rng + ?Sized>(state: &mut GameState, event: GameEvent, rng: &mut R) {
    match event {
        GameEvent::PlayOrResume => set_status(state, GameStatus::Running),
        GameEvent::Pause => set_status(state, GameStatus::Paused),
        GameEvent::Restart => restart(state, rng),
        GameEvent::VelocityChanged { accelerate } => {
            state.velocity = if accelerate {
                Velocity::Accelerated
            } else {
                Velocity::Normal
            };
        }
        GameEvent::HighScoreChanged(high_score) => state.high_score = high_score,
        GameEvent::ChangePlayerCarPosition => change_player_lane(state),
        GameEvent::MoveEnemyCars => move_enemy_cars(state, rng),
    }
}

fn set_status(state: &mut GameState, status: GameStatus) {
    if state.status != status {
        log::info!("Status {} -> {}", state.status.as_str(), status.as_str());
    }
    state.status = status;
}

/// Reset score and enemy layout; the player stays where it is
fn restart<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    state.score = 0;
    state.place_enemy_cars(rng);
    set_status(state, GameStatus::Running);
}

/// Toggle the player between the two lanes (running only)
fn change_player_lane(state: &mut GameState) {
    if !state.is_running() {
        return;
    }
    let lane = match state.lane_of(&state.player_car) {
        Lane::Right => Lane::Left,
        Lane::Left => Lane::Right,
    };
    let head = state.player_head(lane);
    state.player_car = state.player_car.with_head(head);
}

/// Advance every enemy one brick, then check collisions, then respawns
///
/// Ignored before initialization and after game over.
fn move_enemy_cars<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    if !state.is_initialized() || state.status == GameStatus::GameOver {
        log::debug!("MoveEnemyCars ignored in {}", state.status.as_str());
        return;
    }

    let brick = state.brick_size();
    for car in state.enemy_cars.iter_mut() {
        *car = car.with_head(car.head + Point::new(0.0, brick));
    }

    check_collision(state);
    respawn_enemy_cars(state, rng);
}

fn check_collision(state: &mut GameState) {
    if let Some(index) = first_collision(&state.player_car, &state.enemy_cars) {
        log::info!("Enemy {} hit the player, final score {}", index, state.score);
        set_status(state, GameStatus::GameOver);
    }
}

/// Respawn every enemy that reached the bottom edge, one point each
///
/// Each respawn flips its own lane, independent of the other enemies.
fn respawn_enemy_cars<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    let border = state.board_size.height;
    let respawn_y = -state.distance_between_cars();
    for i in 0..state.enemy_cars.len() {
        let car = state.enemy_cars[i];
        if car.head.y + state.pixel_size < border {
            continue;
        }
        state.score += 1;
        let x = state.lane_x_for(Lane::flip(rng));
        state.enemy_cars[i] = car.with_head(Point::new(x, respawn_y));
        log::debug!("Enemy {} respawned, score {}", i, state.score);
    }
}
