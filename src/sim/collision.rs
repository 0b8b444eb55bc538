//! Collision detection and resolution
//!
//! Every check scans first and rebuilds the affected collection afterwards;
//! no collection is mutated while it is being iterated.
//!
//! Three checks run each tick:
//! - laser vs asteroid: both destroyed, asteroid replaced by its fragments
//! - spaceship vs star: star collected, score +1
//! - spaceship vs asteroid: game over

use super::state::{GameEvent, GamePhase, World};
use super::subdivide::subdivide;
use super::surface::Surface;
use crate::config::SimConfig;

/// Destroy every laser and asteroid involved in a laser/asteroid overlap.
///
/// All pairs are tested against the collections as they were at the start of
/// the call. A laser touching two asteroids destroys both; an asteroid hit by
/// several lasers still splits only once. Returns the number of asteroids destroyed.
pub fn resolve_laser_hits<S: Surface + ?Sized>(
    world: &mut World,
    surface: &S,
    config: &SimConfig,
) -> usize {
    if world.lasers.is_empty() || world.asteroids.is_empty() {
        return 0;
    }

    // Phase 1: mark
    let mut laser_hit = vec![false; world.lasers.len()];
    let mut asteroid_hit = vec![false; world.asteroids.len()];
    for (li, laser) in world.lasers.iter().enumerate() {
        for (ai, asteroid) in world.asteroids.iter().enumerate() {
            if surface.overlaps(&laser.visual, &asteroid.visual) {
                laser_hit[li] = true;
                asteroid_hit[ai] = true;
            }
        }
    }

    let destroyed = asteroid_hit.iter().filter(|&&hit| hit).count();
    if destroyed == 0 {
        return 0;
    }

    // Phase 2: rebuild
    world.lasers = std::mem::take(&mut world.lasers)
        .into_iter()
        .zip(laser_hit)
        .filter_map(|(laser, hit)| (!hit).then_some(laser))
        .collect();

    let old_asteroids = std::mem::take(&mut world.asteroids);
    let mut rebuilt = Vec::with_capacity(old_asteroids.len() + destroyed * 4);
    for (asteroid, hit) in old_asteroids.into_iter().zip(asteroid_hit) {
        if !hit {
            rebuilt.push(asteroid);
            continue;
        }

        let id = asteroid.visual.id;
        let fragments = subdivide(asteroid.visual.pos, asteroid.tier, config.asteroid.split_speed);
        if fragments.is_empty() {
            world.record(GameEvent::AsteroidDestroyed { id });
            log::debug!("Asteroid {} destroyed", id);
        } else {
            world.record(GameEvent::AsteroidSplit {
                id,
                tier: asteroid.tier,
                fragments: fragments.len(),
            });
            log::debug!("Asteroid {} ({:?}) split into {}", id, asteroid.tier, fragments.len());
        }

        for fragment in fragments {
            rebuilt.push(world.create_asteroid(fragment.pos, fragment.vel, fragment.tier, config));
        }
    }
    world.asteroids = rebuilt;

    destroyed
}

/// Collect every star the spaceship overlaps. Returns the number collected.
///
/// Each collected star adds exactly one point and refreshes the score display.
pub fn collect_stars<S: Surface + ?Sized>(world: &mut World, surface: &mut S) -> usize {
    let ship = world.spaceship.visual.clone();
    let (collected, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut world.stars)
        .into_iter()
        .partition(|star| surface.overlaps(&ship, &star.visual));
    world.stars = kept;

    for star in &collected {
        world.score += 1;
        surface.show_score(world.score);
        world.record(GameEvent::StarCollected {
            id: star.visual.id,
            score: world.score,
        });
        log::debug!("Star {} collected, score {}", star.visual.id, world.score);
    }

    collected.len()
}

/// Check whether the spaceship has flown into an asteroid.
///
/// Only the ship's center point is tested against each asteroid's shape, so
/// grazing contact is forgiven. On the first hit the session is latched into
/// [`GamePhase::GameOver`], the surface is halted, and `true` is returned.
pub fn check_fatal_collision<S: Surface + ?Sized>(world: &mut World, surface: &mut S) -> bool {
    let ship_pos = world.spaceship.visual.pos;
    let Some(asteroid_id) = world
        .asteroids
        .iter()
        .find(|asteroid| surface.contains_point(&asteroid.visual, ship_pos))
        .map(|asteroid| asteroid.visual.id)
    else {
        return false;
    };

    world.phase = GamePhase::GameOver;
    world.record(GameEvent::ShipDestroyed { asteroid_id });
    surface.halt();
    log::info!(
        "Ship destroyed by asteroid {} at tick {}, final score {}",
        asteroid_id,
        world.time_ticks,
        world.score
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{AsteroidTier, Laser, Star, VisualKind};
    use crate::sim::surface::CircleSurface;
    use glam::Vec2;

    fn setup() -> (World, CircleSurface, SimConfig) {
        let config = SimConfig::default();
        let world = World::new(Vec2::new(800.0, 600.0), &config);
        (world, CircleSurface::new(800.0, 600.0), config)
    }

    fn add_laser(world: &mut World, config: &SimConfig, pos: Vec2) -> u32 {
        let mut visual = world.create_visual(VisualKind::Laser, pos);
        visual.scale = config.laser.scale;
        let id = visual.id;
        world.lasers.push(Laser {
            visual,
            vel: Vec2::ZERO,
            age_ticks: 0,
        });
        id
    }

    fn add_asteroid(world: &mut World, config: &SimConfig, pos: Vec2, tier: AsteroidTier) -> u32 {
        let rock = world.create_asteroid(pos, Vec2::new(1.0, 1.0), tier, config);
        let id = rock.visual.id;
        world.asteroids.push(rock);
        id
    }

    fn add_star(world: &mut World, config: &SimConfig, pos: Vec2) -> u32 {
        let mut visual = world.create_visual(VisualKind::Star, pos);
        visual.scale = config.star.scale;
        let id = visual.id;
        world.stars.push(Star { visual });
        id
    }

    #[test]
    fn test_laser_splits_medium_asteroid() {
        let (mut world, surface, config) = setup();
        let hit_pos = Vec2::new(100.0, 100.0);
        add_laser(&mut world, &config, hit_pos);
        let bystander = add_asteroid(&mut world, &config, Vec2::new(600.0, 500.0), AsteroidTier::Large);
        let target = add_asteroid(&mut world, &config, hit_pos, AsteroidTier::Medium);

        assert_eq!(resolve_laser_hits(&mut world, &surface, &config), 1);

        assert!(world.lasers.is_empty());
        assert_eq!(world.asteroids.len(), 5);
        assert_eq!(world.asteroids[0].visual.id, bystander);
        assert_eq!(world.asteroids[0].visual.pos, Vec2::new(600.0, 500.0));
        assert!(world.asteroids.iter().all(|a| a.visual.id != target));

        let fragments = &world.asteroids[1..];
        assert!(fragments.iter().all(|a| a.tier == AsteroidTier::Small && a.visual.pos == hit_pos));
        assert!(fragments.iter().all(|a| a.visual.scale == config.asteroid.small_scale));
        assert_eq!(
            world.drain_events(),
            vec![GameEvent::AsteroidSplit {
                id: target,
                tier: AsteroidTier::Medium,
                fragments: 4
            }]
        );
    }

    #[test]
    fn test_small_asteroid_leaves_nothing() {
        let (mut world, surface, config) = setup();
        add_laser(&mut world, &config, Vec2::new(50.0, 50.0));
        let rock = add_asteroid(&mut world, &config, Vec2::new(52.0, 50.0), AsteroidTier::Small);

        assert_eq!(resolve_laser_hits(&mut world, &surface, &config), 1);
        assert!(world.lasers.is_empty());
        assert!(world.asteroids.is_empty());
        assert_eq!(world.drain_events(), vec![GameEvent::AsteroidDestroyed { id: rock }]);
    }

    #[test]
    fn test_missing_laser_survives() {
        let (mut world, surface, config) = setup();
        let laser = add_laser(&mut world, &config, Vec2::new(10.0, 10.0));
        add_asteroid(&mut world, &config, Vec2::new(700.0, 500.0), AsteroidTier::Large);

        assert_eq!(resolve_laser_hits(&mut world, &surface, &config), 0);
        assert_eq!(world.lasers.len(), 1);
        assert_eq!(world.lasers[0].visual.id, laser);
        assert_eq!(world.asteroids.len(), 1);
    }

    #[test]
    fn test_multiple_lasers_split_asteroid_once() {
        let (mut world, surface, config) = setup();
        let pos = Vec2::new(300.0, 300.0);
        add_laser(&mut world, &config, pos);
        add_laser(&mut world, &config, pos + Vec2::new(5.0, 0.0));
        add_asteroid(&mut world, &config, pos, AsteroidTier::Large);

        assert_eq!(resolve_laser_hits(&mut world, &surface, &config), 1);
        assert!(world.lasers.is_empty());
        assert_eq!(world.asteroids.len(), 4);
        assert!(world.asteroids.iter().all(|a| a.tier == AsteroidTier::Medium));
    }

    #[test]
    fn test_one_laser_can_destroy_two_asteroids() {
        let (mut world, surface, config) = setup();
        let pos = Vec2::new(300.0, 300.0);
        add_laser(&mut world, &config, pos);
        add_asteroid(&mut world, &config, pos + Vec2::new(10.0, 0.0), AsteroidTier::Small);
        add_asteroid(&mut world, &config, pos - Vec2::new(10.0, 0.0), AsteroidTier::Small);

        assert_eq!(resolve_laser_hits(&mut world, &surface, &config), 2);
        assert!(world.asteroids.is_empty());
    }

    #[test]
    fn test_fragments_are_not_hit_in_same_pass() {
        let (mut world, surface, config) = setup();
        let pos = Vec2::new(300.0, 300.0);
        add_laser(&mut world, &config, pos);
        add_asteroid(&mut world, &config, pos, AsteroidTier::Large);

        resolve_laser_hits(&mut world, &surface, &config);
        // Fragments sit right where the laser was, but the laser is gone
        assert_eq!(world.asteroids.len(), 4);
        assert_eq!(resolve_laser_hits(&mut world, &surface, &config), 0);
    }

    #[test]
    fn test_star_pickup() {
        let (mut world, mut surface, config) = setup();
        let near = add_star(&mut world, &config, Vec2::new(405.0, 300.0));
        let far = add_star(&mut world, &config, Vec2::new(50.0, 50.0));

        assert_eq!(collect_stars(&mut world, &mut surface), 1);
        assert_eq!(world.score, 1);
        assert_eq!(surface.displayed_score, 1);
        assert_eq!(world.stars.len(), 1);
        assert_eq!(world.stars[0].visual.id, far);
        assert_eq!(world.stars[0].visual.pos, Vec2::new(50.0, 50.0));
        assert_eq!(
            world.drain_events(),
            vec![GameEvent::StarCollected { id: near, score: 1 }]
        );
    }

    #[test]
    fn test_simultaneous_pickups_each_score() {
        let (mut world, mut surface, config) = setup();
        add_star(&mut world, &config, Vec2::new(400.0, 300.0));
        add_star(&mut world, &config, Vec2::new(410.0, 305.0));
        add_star(&mut world, &config, Vec2::new(390.0, 290.0));

        assert_eq!(collect_stars(&mut world, &mut surface), 3);
        assert_eq!(world.score, 3);
        assert!(world.stars.is_empty());
    }

    #[test]
    fn test_fatal_collision_at_ship_center() {
        let (mut world, mut surface, config) = setup();
        add_asteroid(&mut world, &config, Vec2::new(400.0, 300.0), AsteroidTier::Large);

        assert!(check_fatal_collision(&mut world, &mut surface));
        assert!(world.is_game_over());
        assert!(surface.halted);
    }

    #[test]
    fn test_grazing_asteroid_is_forgiven() {
        let (mut world, mut surface, config) = setup();
        // Large rock radius 50, ship radius 22.5: shapes overlap, center point does not
        add_asteroid(&mut world, &config, Vec2::new(460.0, 300.0), AsteroidTier::Large);
        assert!(surface.overlaps(&world.spaceship.visual, &world.asteroids[0].visual));

        assert!(!check_fatal_collision(&mut world, &mut surface));
        assert_eq!(world.phase, GamePhase::Playing);
        assert!(!surface.halted);
    }

    #[test]
    fn test_first_fatal_asteroid_is_reported() {
        let (mut world, mut surface, config) = setup();
        add_asteroid(&mut world, &config, Vec2::new(100.0, 100.0), AsteroidTier::Large);
        let first = add_asteroid(&mut world, &config, Vec2::new(410.0, 300.0), AsteroidTier::Large);
        add_asteroid(&mut world, &config, Vec2::new(400.0, 310.0), AsteroidTier::Medium);

        assert!(check_fatal_collision(&mut world, &mut surface));
        assert_eq!(
            world.drain_events(),
            vec![GameEvent::ShipDestroyed { asteroid_id: first }]
        );
    }
}
