//! Game state and core simulation types
//!
//! `GameState` is the single aggregate for one play session. It is mutated
//! only through [`GameState::initialize`] and the event handler in
//! [`super::tick`].

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::car::Car;
use super::geometry::{Density, Point, Size};
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Board set up, waiting for the first play
    #[default]
    Idle,
    /// Enemies are descending
    Running,
    /// Suspended by the player or by focus loss
    Paused,
    /// Player was hit; waits for a restart
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "Idle",
            GameStatus::Running => "Running",
            GameStatus::Paused => "Paused",
            GameStatus::GameOver => "GameOver",
        }
    }
}

/// Tick interval selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Velocity {
    #[default]
    Normal,
    Accelerated,
}

impl Velocity {
    /// Milliseconds between enemy moves
    pub fn millis(&self) -> u64 {
        match self {
            Velocity::Normal => NORMAL_TICK_MS,
            Velocity::Accelerated => ACCELERATED_TICK_MS,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.millis())
    }
}

/// Lateral slot a car can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Right,
}

impl Lane {
    /// Lane picked by a fair coin flip
    pub fn flip<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Lane::Left
        } else {
            Lane::Right
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Lane::Left => Lane::Right,
            Lane::Right => Lane::Left,
        }
    }
}

/// Everything that can happen to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayOrResume,
    Pause,
    Restart,
    VelocityChanged { accelerate: bool },
    HighScoreChanged(u32),
    ChangePlayerCarPosition,
    MoveEnemyCars,
}

/// Complete state of one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) status: GameStatus,
    /// Size of one brick body (pixels)
    pub(crate) pixel_size: f32,
    /// Border stroke around each brick (pixels)
    pub(crate) stroke_width: f32,
    pub(crate) board_size: Size,
    pub(crate) velocity: Velocity,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) player_car: Car,
    /// Enemy order is fixed; each index owns one spawn slot
    pub(crate) enemy_cars: [Car; ENEMY_COUNT],
    initialized: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty, idle state; call [`GameState::initialize`] before playing
    pub fn new() -> Self {
        Self {
            status: GameStatus::Idle,
            pixel_size: 0.0,
            stroke_width: 0.0,
            board_size: Size::ZERO,
            velocity: Velocity::Normal,
            score: 0,
            high_score: 0,
            player_car: Car::default(),
            enemy_cars: [Car::default(); ENEMY_COUNT],
            initialized: false,
        }
    }

    /// Set up board metrics and place all cars
    ///
    /// Runs once per state. Later calls are ignored and return `false`.
    pub fn initialize<R: Rng + ?Sized>(&mut self, density: Density, rng: &mut R) -> bool {
        if self.initialized {
            log::debug!("Board already initialized, ignoring");
            return false;
        }

        self.pixel_size = density.dp_to_grid_px(BRICK_BODY_DP);
        self.stroke_width = density.dp_to_grid_px(BRICK_STROKE_DP);
        self.board_size = Size::new(
            self.car_size().width * 3.0,
            self.distance_between_cars() * 2.0,
        );
        self.player_car = Car::new(self.player_head(Lane::Left), self.brick_size());
        self.place_enemy_cars(rng);
        self.initialized = true;

        log::info!(
            "Board initialized: {}x{} px, brick {} px",
            self.board_size.width,
            self.board_size.height,
            self.brick_size()
        );
        true
    }

    /// Initial enemy layout, stacked one spawn distance apart
    ///
    /// A single flip decides the lanes: the first and third enemy share it,
    /// the second takes the other lane.
    pub(crate) fn place_enemy_cars<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let lane = Lane::flip(rng);
        let brick = self.brick_size();
        let distance = self.distance_between_cars();
        let lanes = [lane, lane.opposite(), lane];
        for (i, (car, lane)) in self.enemy_cars.iter_mut().zip(lanes).enumerate() {
            let x = Self::lane_x(self.board_size, brick, self.stroke_width, lane);
            *car = Car::new(Point::new(x, -distance * i as f32), brick);
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn board_size(&self) -> Size {
        self.board_size
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn player_car(&self) -> &Car {
        &self.player_car
    }

    pub fn enemy_cars(&self) -> &[Car; ENEMY_COUNT] {
        &self.enemy_cars
    }

    /// Grid quantum: brick body plus its border
    pub fn brick_size(&self) -> f32 {
        self.pixel_size + self.stroke_width
    }

    /// Bounding box of one car (3 bricks wide, 4 tall)
    pub fn car_size(&self) -> Size {
        let brick = self.brick_size();
        Size::new(brick * 3.0, brick * 4.0)
    }

    /// Vertical gap between stacked enemy spawn slots
    pub fn distance_between_cars(&self) -> f32 {
        self.car_size().height * 2.0 + self.brick_size() * 2.0
    }

    /// Head x of a car in the given lane
    pub fn lane_x_for(&self, lane: Lane) -> f32 {
        Self::lane_x(self.board_size, self.brick_size(), self.stroke_width, lane)
    }

    fn lane_x(board: Size, brick: f32, stroke: f32, lane: Lane) -> f32 {
        match lane {
            Lane::Left => brick * 3.0 + stroke,
            Lane::Right => board.width - brick * 3.0 + stroke,
        }
    }

    /// Lane a car currently occupies (anything off the right lane is left)
    pub fn lane_of(&self, car: &Car) -> Lane {
        if car.head.x == self.lane_x_for(Lane::Right) {
            Lane::Right
        } else {
            Lane::Left
        }
    }

    /// Head position of the player car in a lane
    pub fn player_head(&self, lane: Lane) -> Point {
        Point::new(
            self.lane_x_for(lane),
            self.board_size.height - self.brick_size() * 4.0,
        )
    }
}
