//! Asteroid Drift - simulation core for an Asteroids-style arcade game
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (motion, spawning, collisions, game state)
//! - `config`: Data-driven game tuning

pub mod config;
pub mod sim;

pub use config::{ConfigError, SimConfig};

use glam::Vec2;

/// Default tuning constants
pub mod consts {
    /// Degrees turned per tick while a turn key is held
    pub const SPACESHIP_TURN_SPEED: f32 = 15.0;
    /// Velocity added per tick while accelerating
    pub const SPACESHIP_ACCELERATION: f32 = 1.0;
    /// Spaceship sprite scale
    pub const SPACESHIP_SCALE: f32 = 0.075;

    /// Laser speed (units per tick)
    pub const LASER_SPEED: f32 = 10.0;
    pub const LASER_SCALE: f32 = 0.1;

    /// One asteroid spawn attempt passes the gate every `ASTEROID_SPAWN_RATE + 1` ticks on average
    pub const ASTEROID_SPAWN_RATE: u32 = 25;
    /// Damping applied to the randomized drift toward the viewport center
    pub const ASTEROID_SPEED_LIMITER: f32 = 0.01;
    /// How far beyond each viewport edge asteroids may spawn
    pub const ASTEROID_SPAWN_MARGIN: i32 = 50;
    /// Speed of the four fragments produced by a split
    pub const ASTEROID_SPLIT_SPEED: f32 = 5.0;

    pub const STAR_SPAWN_RATE: u32 = 100;
    pub const STAR_SCALE: f32 = 0.05;
}

/// Screen-space heading for a sprite angle in degrees.
///
/// Sprites face "up" at 0 degrees, so the angle is offset by 90 degrees
/// before conversion. Screen y grows downward, hence the negated sine.
#[inline]
pub fn heading(angle_deg: f32) -> Vec2 {
    let radians = (angle_deg + 90.0).to_radians();
    Vec2::new(radians.cos(), -radians.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_zero_faces_up() {
        let dir = heading(0.0);
        assert!(dir.x.abs() < 1e-6);
        assert!((dir.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_heading_quarter_turns() {
        // Positive angles rotate counter-clockwise on screen
        let left = heading(90.0);
        assert!((left.x + 1.0).abs() < 1e-6);
        assert!(left.y.abs() < 1e-6);

        let right = heading(-90.0);
        assert!((right.x - 1.0).abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);
    }
}
