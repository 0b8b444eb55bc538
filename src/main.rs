//! Asteroid Drift headless runner
//!
//! Plays one session against the circle-based surface with a scripted pilot
//! and prints a JSON summary. Useful for soak-testing tuning files.
//!
//! Usage: `asteroid-drift [config.json]`
//! Environment: `ASTEROID_DRIFT_SEED`, `ASTEROID_DRIFT_TICKS`, `RUST_LOG`

use std::error::Error;

use asteroid_drift::SimConfig;
use asteroid_drift::sim::{CircleSurface, Game, GameEvent, Key};

const VIEWPORT_WIDTH: f32 = 800.0;
const VIEWPORT_HEIGHT: f32 = 600.0;
const DEFAULT_TICK_LIMIT: u64 = 10_000;

/// Ticks between shots
const FIRE_INTERVAL: u64 = 6;
/// Short thrust bursts so the ship keeps drifting without running away
const THRUST_INTERVAL: u64 = 150;
const THRUST_TICKS: u64 = 2;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let seed: u64 = env_or("ASTEROID_DRIFT_SEED", 42);
    let tick_limit: u64 = env_or("ASTEROID_DRIFT_TICKS", DEFAULT_TICK_LIMIT);

    log::info!("Asteroid Drift (headless) starting, seed {}", seed);
    let surface = CircleSurface::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let mut game = Game::with_seed(config, surface, seed);

    let mut shots = 0u64;
    let mut splits = 0u64;
    game.on_key_pressed(Key::TurnLeft);

    while game.world.time_ticks < tick_limit && !game.surface.halted {
        let t = game.world.time_ticks;
        if t % FIRE_INTERVAL == 0 {
            game.on_key_pressed(Key::Fire);
        }
        match t % THRUST_INTERVAL {
            0 => game.on_key_pressed(Key::Accelerate),
            THRUST_TICKS => game.on_key_released(Key::Accelerate),
            _ => {}
        }

        game.on_tick();

        for event in game.world.drain_events() {
            match event {
                GameEvent::LaserFired { .. } => shots += 1,
                GameEvent::AsteroidSplit { .. } | GameEvent::AsteroidDestroyed { .. } => splits += 1,
                _ => {}
            }
        }
        if game.world.time_ticks % 1_000 == 0 {
            log::info!(
                "tick {}: score {}, {} asteroids, {} lasers, {} stars",
                game.world.time_ticks,
                game.world.score,
                game.world.asteroids.len(),
                game.world.lasers.len(),
                game.world.stars.len()
            );
        }
    }

    let summary = serde_json::json!({
        "seed": seed,
        "ticks": game.world.time_ticks,
        "phase": game.world.phase,
        "score": game.world.score,
        "shots_fired": shots,
        "asteroids_destroyed": splits,
        "asteroids_remaining": game.world.asteroids.len(),
        "lasers_in_flight": game.world.lasers.len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
