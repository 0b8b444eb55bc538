//! Simulation module
//!
//! All gameplay logic lives here. Rendering, input polling and window sizing
//! stay outside and are reached through the traits in [`surface`]:
//! - One `tick` call per frame, stages in a fixed order
//! - Input events only flip flags
//! - Collections are rebuilt, never mutated while iterated

pub mod collision;
pub mod control;
pub mod sdf;
pub mod spawn;
pub mod state;
pub mod subdivide;
pub mod surface;
pub mod tick;

pub use collision::{check_fatal_collision, collect_stars, resolve_laser_hits};
pub use control::{
    Key, apply_acceleration, apply_turning, begin_accelerate, begin_turn, end_accelerate,
    end_turn, fire_laser, integrate_position, move_lasers, wrap_position,
};
pub use spawn::{move_asteroids, spawn_asteroid, spawn_gate, spawn_star};
pub use state::{
    Asteroid, AsteroidTier, GameEvent, GamePhase, Laser, Spaceship, Star, TurnSide, Visual,
    VisualKind, World,
};
pub use subdivide::{Fragment, subdivide};
pub use surface::{BaseRadii, CircleSurface, RandomSource, Surface};
pub use tick::{Game, tick};
