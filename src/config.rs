//! Game tuning
//!
//! A single immutable configuration handed to the simulation at startup.
//! Every field has a default, so partial JSON files only override what they name.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Spaceship handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    /// Degrees turned per tick
    pub turn_speed: f32,
    /// Velocity added per tick while accelerating
    pub acceleration: f32,
    pub scale: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            turn_speed: SPACESHIP_TURN_SPEED,
            acceleration: SPACESHIP_ACCELERATION,
            scale: SPACESHIP_SCALE,
        }
    }
}

/// Laser projectiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserTuning {
    pub speed: f32,
    pub scale: f32,
    /// Ticks a laser survives without hitting anything (`None` = forever)
    pub lifetime_ticks: Option<u32>,
}

impl Default for LaserTuning {
    fn default() -> Self {
        Self {
            speed: LASER_SPEED,
            scale: LASER_SCALE,
            lifetime_ticks: None,
        }
    }
}

/// Asteroid spawning and splitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    /// Upper bound of the per-tick spawn roll; a roll of 0 attempts a spawn
    pub spawn_rate: u32,
    /// Multiplier applied to the drift velocity of new asteroids
    pub speed_limiter: f32,
    /// Spawn band width beyond each viewport edge
    pub spawn_margin: i32,
    /// Fragment speed after a split
    pub split_speed: f32,
    pub large_scale: f32,
    pub medium_scale: f32,
    pub small_scale: f32,
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            spawn_rate: ASTEROID_SPAWN_RATE,
            speed_limiter: ASTEROID_SPEED_LIMITER,
            spawn_margin: ASTEROID_SPAWN_MARGIN,
            split_speed: ASTEROID_SPLIT_SPEED,
            large_scale: 0.2,
            medium_scale: 0.1,
            small_scale: 0.05,
        }
    }
}

/// Star pickups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarTuning {
    pub spawn_rate: u32,
    pub scale: f32,
}

impl Default for StarTuning {
    fn default() -> Self {
        Self {
            spawn_rate: STAR_SPAWN_RATE,
            scale: STAR_SCALE,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ship: ShipTuning,
    pub laser: LaserTuning,
    pub asteroid: AsteroidTuning,
    pub star: StarTuning,
}

impl SimConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Configuration where every spawn roll succeeds (rates of 0)
    pub fn always_spawn() -> Self {
        let mut config = Self::default();
        config.asteroid.spawn_rate = 0;
        config.star.spawn_rate = 0;
        config
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("ship.turn_speed", self.ship.turn_speed),
            ("ship.acceleration", self.ship.acceleration),
            ("laser.speed", self.laser.speed),
            ("asteroid.speed_limiter", self.asteroid.speed_limiter),
            ("asteroid.split_speed", self.asteroid.split_speed),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not finite")));
            }
        }

        let scales = [
            ("ship.scale", self.ship.scale),
            ("laser.scale", self.laser.scale),
            ("asteroid.large_scale", self.asteroid.large_scale),
            ("asteroid.medium_scale", self.asteroid.medium_scale),
            ("asteroid.small_scale", self.asteroid.small_scale),
            ("star.scale", self.star.scale),
        ];
        for (field, value) in scales {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("scale must be positive, got {value}")));
            }
        }

        if self.asteroid.spawn_margin < 0 {
            return Err(invalid(
                "asteroid.spawn_margin",
                format!("margin must not be negative, got {}", self.asteroid.spawn_margin),
            ));
        }
        if self.laser.lifetime_ticks == Some(0) {
            return Err(invalid("laser.lifetime_ticks", "lifetime must be at least 1 tick".into()));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
