//! Spaceship motion and player controls
//!
//! Input events only flip flags; the per-tick functions read those flags.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, Laser, Spaceship, TurnSide, VisualKind, World};
use crate::config::SimConfig;
use crate::heading;

/// Logical keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    TurnLeft,
    TurnRight,
    Accelerate,
    Fire,
    Pause,
}

impl Key {
    /// Map an engine key name to a logical key (`None` for keys we ignore)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "a" | "left" => Some(Key::TurnLeft),
            "d" | "right" => Some(Key::TurnRight),
            "w" | "up" => Some(Key::Accelerate),
            "space" | " " => Some(Key::Fire),
            "p" | "escape" => Some(Key::Pause),
            _ => None,
        }
    }
}

pub fn begin_turn(ship: &mut Spaceship, side: TurnSide) {
    match side {
        TurnSide::Left => ship.turning_left = true,
        TurnSide::Right => ship.turning_right = true,
    }
}

pub fn end_turn(ship: &mut Spaceship, side: TurnSide) {
    match side {
        TurnSide::Left => ship.turning_left = false,
        TurnSide::Right => ship.turning_right = false,
    }
}

pub fn begin_accelerate(ship: &mut Spaceship) {
    ship.accelerating = true;
}

pub fn end_accelerate(ship: &mut Spaceship) {
    ship.accelerating = false;
}

/// Rotate the ship by one tick of turning. Left wins if both keys are held.
pub fn apply_turning(ship: &mut Spaceship, config: &SimConfig) {
    if ship.turning_left {
        ship.visual.angle += config.ship.turn_speed;
    } else if ship.turning_right {
        ship.visual.angle -= config.ship.turn_speed;
    }
}

/// Thrust along the current facing. Speed is not capped.
pub fn apply_acceleration(ship: &mut Spaceship, config: &SimConfig) {
    if ship.accelerating {
        ship.vel += heading(ship.visual.angle) * config.ship.acceleration;
    }
}

pub fn integrate_position(ship: &mut Spaceship) {
    ship.visual.pos += ship.vel;
}

/// Screen-edge correction.
///
/// Past the far edge the coordinate wraps by modulo; below zero it snaps to
/// the far edge exactly. The two sides are intentionally not symmetric.
pub fn wrap_position(ship: &mut Spaceship, viewport: Vec2) {
    let pos = &mut ship.visual.pos;
    pos.x = wrap_axis(pos.x, viewport.x);
    pos.y = wrap_axis(pos.y, viewport.y);
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value > extent {
        value % extent
    } else if value < 0.0 {
        extent
    } else {
        value
    }
}

/// Fire a laser from the ship's nose along its current facing
pub fn fire_laser(world: &mut World, config: &SimConfig) {
    let ship = &world.spaceship.visual;
    let (pos, angle) = (ship.pos, ship.angle);

    let mut visual = world.create_visual(VisualKind::Laser, pos);
    visual.angle = angle;
    visual.scale = config.laser.scale;
    let id = visual.id;

    world.lasers.push(Laser {
        visual,
        vel: heading(angle) * config.laser.speed,
        age_ticks: 0,
    });
    world.record(GameEvent::LaserFired { id });
    log::trace!("Laser {} fired at ({:.1}, {:.1}) angle {:.0}", id, pos.x, pos.y, angle);
}

/// Advance every laser one tick, dropping those older than their lifetime (if one is set).
///
/// A laser that is exactly `lifetime` ticks old still takes part in this tick's hit checks.
pub fn move_lasers(world: &mut World, config: &SimConfig) {
    let lifetime = config.laser.lifetime_ticks;
    world.lasers = std::mem::take(&mut world.lasers)
        .into_iter()
        .filter_map(|mut laser| {
            laser.visual.pos += laser.vel;
            laser.age_ticks = laser.age_ticks.saturating_add(1);
            match lifetime {
                Some(max) if laser.age_ticks > max => None,
                _ => Some(laser),
            }
        })
        .collect();
}
