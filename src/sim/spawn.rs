//! Probabilistic spawning of asteroids and stars
//!
//! Spawners only append new entities; they never touch existing ones.

use glam::Vec2;

use super::state::{Asteroid, AsteroidTier, GameEvent, Star, VisualKind, World};
use super::surface::RandomSource;
use crate::config::SimConfig;

/// Roll the per-tick spawn gate: passes when a draw from `[0, rate]` is 0
pub fn spawn_gate<R: RandomSource + ?Sized>(rng: &mut R, rate: u32) -> bool {
    let high = i32::try_from(rate).unwrap_or(i32::MAX);
    rng.uniform_int(0, high) == 0
}

/// Whether a point lies strictly outside the viewport on at least one axis
fn outside_viewport(pos: Vec2, viewport: Vec2) -> bool {
    let x_outside = pos.x < 0.0 || pos.x > viewport.x;
    let y_outside = pos.y < 0.0 || pos.y > viewport.y;
    x_outside || y_outside
}

/// Maybe spawn a large asteroid just off-screen, drifting roughly toward the center.
///
/// Returns `true` if an asteroid was appended. Candidates that land inside the
/// viewport are discarded rather than re-rolled.
pub fn spawn_asteroid<R: RandomSource + ?Sized>(
    world: &mut World,
    viewport: Vec2,
    rng: &mut R,
    config: &SimConfig,
) -> bool {
    if !spawn_gate(rng, config.asteroid.spawn_rate) {
        return false;
    }

    let margin = config.asteroid.spawn_margin;
    let x = rng.uniform_int(-margin, viewport.x as i32 + margin);
    let y = rng.uniform_int(-margin, viewport.y as i32 + margin);
    let pos = Vec2::new(x as f32, y as f32);

    if !outside_viewport(pos, viewport) {
        return false;
    }

    // Random fraction of the way to the center per axis, so asteroids
    // spread out instead of converging on one point
    let center = viewport / 2.0;
    let drift = Vec2::new(
        rng.uniform_float() * (center.x - pos.x),
        rng.uniform_float() * (center.y - pos.y),
    );
    let vel = drift * config.asteroid.speed_limiter;

    let asteroid = world.create_asteroid(pos, vel, AsteroidTier::Large, config);
    let id = asteroid.visual.id;
    world.asteroids.push(asteroid);
    world.record(GameEvent::AsteroidSpawned { id, pos });
    log::debug!(
        "Asteroid {} spawned at ({}, {}) vel ({:.3}, {:.3})",
        id,
        x,
        y,
        vel.x,
        vel.y
    );
    true
}

/// Maybe place a stationary star somewhere inside the viewport
pub fn spawn_star<R: RandomSource + ?Sized>(
    world: &mut World,
    viewport: Vec2,
    rng: &mut R,
    config: &SimConfig,
) -> bool {
    if !spawn_gate(rng, config.star.spawn_rate) {
        return false;
    }

    let x = rng.uniform_int(0, viewport.x as i32);
    let y = rng.uniform_int(0, viewport.y as i32);
    let pos = Vec2::new(x as f32, y as f32);

    let mut visual = world.create_visual(VisualKind::Star, pos);
    visual.scale = config.star.scale;
    let id = visual.id;
    world.stars.push(Star { visual });
    world.record(GameEvent::StarSpawned { id, pos });
    log::debug!("Star {} spawned at ({}, {})", id, x, y);
    true
}

/// Drift every asteroid in `asteroids` by its velocity
pub fn move_asteroids(asteroids: &mut [Asteroid]) {
    for asteroid in asteroids {
        asteroid.visual.pos += asteroid.vel;
    }
}
