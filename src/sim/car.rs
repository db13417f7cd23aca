//! Car entity (the figure the player and the enemies are drawn as)
//!
//! A car is a 3x4 brick figure hanging off a single head position:
//!
//! ```text
//!  body        collision mask
//!  . # .       # # #
//!  # # #       # # #
//!  . # .       # # #
//!  # . #       # # #
//! ```
//!
//! The rendered body has 7 bricks. Hit-testing uses the full 3x4 block so a
//! near miss through the gaps of the figure still counts as contact.

use serde::{Deserialize, Serialize};

use super::collision::masks_intersect;
use super::geometry::Point;

/// Number of bricks in the rendered body
pub const BODY_POINTS: usize = 7;
/// Number of bricks in the collision mask
pub const MASK_POINTS: usize = 12;

/// An immutable car snapshot; moving a car means building a new one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Head brick position (the car's anchor)
    pub head: Point,
    /// Grid quantum the car was built with
    pub brick_size: f32,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            head: Point::ZERO,
            brick_size: 0.0,
        }
    }
}

impl Car {
    pub fn new(head: Point, brick_size: f32) -> Self {
        Self { head, brick_size }
    }

    /// Same car shifted to a new head position
    pub fn with_head(&self, head: Point) -> Self {
        Self {
            head,
            brick_size: self.brick_size,
        }
    }

    /// Brick at a grid offset from the head
    #[inline]
    fn brick(&self, dx: f32, dy: f32) -> Point {
        Point::new(
            self.head.x + self.brick_size * dx,
            self.head.y + self.brick_size * dy,
        )
    }

    /// Bricks to draw: head, arms and neck, stomach, legs
    pub fn body(&self) -> [Point; BODY_POINTS] {
        [
            self.head,
            self.brick(-1.0, 1.0),
            self.brick(0.0, 1.0),
            self.brick(1.0, 1.0),
            self.brick(0.0, 2.0),
            self.brick(-1.0, 3.0),
            self.brick(1.0, 3.0),
        ]
    }

    /// Solid 3-wide silhouette used for hit-testing
    pub fn collision_mask(&self) -> [Point; MASK_POINTS] {
        let mut mask = [Point::ZERO; MASK_POINTS];
        for (i, p) in mask.iter_mut().enumerate() {
            let row = (i / 3) as f32;
            let col = (i % 3) as f32 - 1.0;
            *p = self.brick(col, row);
        }
        mask
    }

    /// True if the two collision masks share at least one brick
    pub fn collides_with(&self, other: &Car) -> bool {
        masks_intersect(&self.collision_mask(), &other.collision_mask())
    }
}
