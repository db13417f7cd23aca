//! Geometry primitives for the brick board
//!
//! Positions are plain `glam::Vec2` values in surface pixels. Every position
//! the simulation produces is snapped to the brick grid, so equality between
//! points is exact rather than approximate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PIXEL_QUANTUM;

/// A position on the board (pixels, y grows downward)
pub type Point = Vec2;

/// Width and height of a board region
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Conversion from device-independent units to surface pixels
///
/// Supplied by whatever presents the board. A scale of 1.0 maps one unit
/// to one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density {
    pub scale: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Density {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Convert device-independent units to pixels
    #[inline]
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.scale
    }

    /// Convert to pixels, snapped to the [`PIXEL_QUANTUM`] grid
    ///
    /// Sums and multiples of snapped values stay exact in `f32`, which exact
    /// point comparison relies on. Never returns less than one quantum.
    pub fn dp_to_grid_px(&self, dp: f32) -> f32 {
        let steps = (self.dp_to_px(dp) / PIXEL_QUANTUM).round().max(1.0);
        steps * PIXEL_QUANTUM
    }
}

/// Hashable key for exact point comparison
///
/// `-0.0` and `0.0` compare equal as floats, so the sign of zero is folded
/// before taking the bit pattern.
#[inline]
pub(crate) fn point_key(p: Point) -> (u32, u32) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}
