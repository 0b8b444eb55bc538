//! Asteroid splitting
//!
//! A destroyed asteroid breaks into four fragments of the next smaller tier,
//! flying off along the four cardinal directions. Small asteroids leave nothing.

use glam::Vec2;

use super::state::AsteroidTier;

/// Blueprint for an asteroid produced by a split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    pub pos: Vec2,
    pub vel: Vec2,
    pub tier: AsteroidTier,
}

/// Directions of the four fragments (screen space)
const SPLIT_DIRECTIONS: [Vec2; 4] = [Vec2::X, Vec2::NEG_X, Vec2::Y, Vec2::NEG_Y];

/// Fragments left behind by an asteroid of `tier` destroyed at `pos`.
///
/// Fragment velocity does not inherit anything from the parent.
pub fn subdivide(pos: Vec2, tier: AsteroidTier, split_speed: f32) -> Vec<Fragment> {
    let Some(child_tier) = tier.split_into() else {
        return Vec::new();
    };

    SPLIT_DIRECTIONS
        .iter()
        .map(|dir| Fragment {
            pos,
            vel: *dir * split_speed,
            tier: child_tier,
        })
        .collect()
}
