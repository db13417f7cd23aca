//! Collision detection between cars
//!
//! All car positions sit on the brick grid, so contact is exact point
//! coincidence between collision masks, not a distance test.

use std::collections::HashSet;

use super::car::Car;
use super::geometry::{Point, point_key};

/// True if the two point sets share at least one point
///
/// Computed as a set intersection, so the result does not depend on the
/// order of either slice or on which side is passed first.
pub fn masks_intersect(a: &[Point], b: &[Point]) -> bool {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let keys: HashSet<(u32, u32)> = large.iter().copied().map(point_key).collect();
    small.iter().any(|p| keys.contains(&point_key(*p)))
}

/// Index of the first enemy touching the player, if any
///
/// Stops at the first hit; later enemies are not tested.
pub fn first_collision(player: &Car, enemies: &[Car]) -> Option<usize> {
    enemies.iter().position(|enemy| player.collides_with(enemy))
}
