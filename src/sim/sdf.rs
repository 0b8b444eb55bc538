//! Signed-distance helpers for circular hit shapes

use glam::Vec2;

/// Signed distance to a circle (negative inside)
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Whether a point lies inside (or on) a circle
#[inline]
pub fn point_in_circle(p: Vec2, center: Vec2, radius: f32) -> bool {
    sd_circle(p, center, radius) <= 0.0
}

/// Whether two circles overlap.
///
/// Equivalent to the distance from one center to the other circle, grown by
/// the first radius, being non-positive.
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    sd_circle(a, b, radius_a + radius_b) <= 0.0
}
