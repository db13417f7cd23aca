//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only (timing belongs to the driver)
//! - Injected RNG only
//! - Fixed enemy order (index = spawn slot)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod car;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use car::Car;
pub use collision::{first_collision, masks_intersect};
pub use geometry::{Density, Point, Size};
pub use state::{GameEvent, GameState, GameStatus, Lane, Velocity};
pub use tick::apply_event;
