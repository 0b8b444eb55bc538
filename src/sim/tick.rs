//! Per-tick simulation pipeline and session driver
//!
//! Core game loop that advances the world one step at a time.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{check_fatal_collision, collect_stars, resolve_laser_hits};
use super::control::{
    Key, apply_acceleration, apply_turning, begin_accelerate, begin_turn, end_accelerate,
    end_turn, fire_laser, integrate_position, move_lasers, wrap_position,
};
use super::spawn::{move_asteroids, spawn_asteroid, spawn_star};
use super::state::{GamePhase, TurnSide, World};
use super::surface::{RandomSource, Surface};
use crate::config::SimConfig;

/// Advance the world by one tick.
///
/// The stage order is fixed: later stages read collections that earlier
/// stages already rebuilt this tick. Returns `true` if the ship was destroyed
/// during this tick. Does nothing unless the world is [`GamePhase::Playing`].
///
/// Events still in the log from earlier ticks are dropped at the start, so a
/// caller that never drains only holds one tick's worth.
pub fn tick<S, R>(world: &mut World, surface: &mut S, rng: &mut R, config: &SimConfig) -> bool
where
    S: Surface + ?Sized,
    R: RandomSource + ?Sized,
{
    if world.phase != GamePhase::Playing {
        return false;
    }

    world.expire_events();
    world.time_ticks += 1;
    let viewport = surface.viewport();

    integrate_position(&mut world.spaceship);
    wrap_position(&mut world.spaceship, viewport);

    move_lasers(world, config);
    resolve_laser_hits(world, &*surface, config);

    // A freshly spawned asteroid starts moving next tick
    let settled = world.asteroids.len();
    spawn_asteroid(world, viewport, rng, config);
    move_asteroids(&mut world.asteroids[..settled]);

    spawn_star(world, viewport, rng, config);
    collect_stars(world, surface);

    apply_acceleration(&mut world.spaceship, config);
    apply_turning(&mut world.spaceship, config);

    let destroyed = check_fatal_collision(world, surface);
    world.settle_events();
    destroyed
}

/// One play session: world plus the collaborators that drive it.
///
/// The scheduler calls [`Game::on_start`] once (done by the constructors),
/// [`Game::on_tick`] every frame, and the key hooks whenever input arrives.
pub struct Game<S: Surface, R: RandomSource = Pcg32> {
    pub world: World,
    pub surface: S,
    rng: R,
    config: SimConfig,
}

impl<S: Surface> Game<S, Pcg32> {
    /// Create a reproducible session: same seed and inputs give the same run
    pub fn with_seed(config: SimConfig, surface: S, seed: u64) -> Self {
        Self::new(config, surface, Pcg32::seed_from_u64(seed))
    }
}

impl<S: Surface, R: RandomSource> Game<S, R> {
    pub fn new(config: SimConfig, surface: S, rng: R) -> Self {
        let world = World::new(surface.viewport(), &config);
        let mut game = Self {
            world,
            surface,
            rng,
            config,
        };
        game.on_start();
        game
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Start (or restart) the session with a fresh world
    pub fn on_start(&mut self) {
        let viewport = self.surface.viewport();
        self.world = World::new(viewport, &self.config);
        self.surface.show_score(0);
        self.surface.resume();
        log::info!("Session started on {}x{} viewport", viewport.x, viewport.y);
    }

    /// Run one tick. Returns `true` on the tick the ship is destroyed.
    pub fn on_tick(&mut self) -> bool {
        tick(&mut self.world, &mut self.surface, &mut self.rng, &self.config)
    }

    pub fn on_key_pressed(&mut self, key: Key) {
        match key {
            Key::TurnLeft => begin_turn(&mut self.world.spaceship, TurnSide::Left),
            Key::TurnRight => begin_turn(&mut self.world.spaceship, TurnSide::Right),
            Key::Accelerate => begin_accelerate(&mut self.world.spaceship),
            Key::Fire => {
                if self.world.phase == GamePhase::Playing {
                    fire_laser(&mut self.world, &self.config);
                }
            }
            Key::Pause => self.toggle_pause(),
        }
    }

    pub fn on_key_released(&mut self, key: Key) {
        let ship = &mut self.world.spaceship;
        match key {
            Key::TurnLeft => end_turn(ship, TurnSide::Left),
            Key::TurnRight => end_turn(ship, TurnSide::Right),
            Key::Accelerate => end_accelerate(ship),
            Key::Fire | Key::Pause => {}
        }
    }

    /// Press by engine key name; unknown keys are ignored
    pub fn on_key_name_pressed(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.on_key_pressed(key);
        }
    }

    /// Release by engine key name; unknown keys are ignored
    pub fn on_key_name_released(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.on_key_released(key);
        }
    }

    /// Halt or resume the loop. Has no effect after game over.
    pub fn toggle_pause(&mut self) {
        match self.world.phase {
            GamePhase::Playing => {
                self.world.phase = GamePhase::Paused;
                self.surface.halt();
                log::info!("Paused at tick {}", self.world.time_ticks);
            }
            GamePhase::Paused => {
                self.world.phase = GamePhase::Playing;
                self.surface.resume();
                log::info!("Resumed at tick {}", self.world.time_ticks);
            }
            GamePhase::GameOver => {}
        }
    }

    /// Current viewport as reported by the surface
    pub fn viewport(&self) -> Vec2 {
        self.surface.viewport()
    }
}
