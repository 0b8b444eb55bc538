//! World state and entity records
//!
//! Records are plain data. Systems in the sibling modules own all behavior.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Loop halted by the player, resumable
    Paused,
    /// Ship hit an asteroid. Never left once entered.
    GameOver,
}

/// What a visual depicts (selects sprite and hit extent in the presentation layer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualKind {
    Spaceship,
    Laser,
    Asteroid,
    Star,
}

/// Presentation handle: everything a renderer needs to place a sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visual {
    pub id: u32,
    pub kind: VisualKind,
    pub pos: Vec2,
    /// Rotation in degrees, counter-clockwise, 0 = facing up
    pub angle: f32,
    pub scale: f32,
}

/// Asteroid size tier, also governing what a destroyed asteroid splits into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidTier {
    Large,
    Medium,
    Small,
}

impl AsteroidTier {
    /// Tier of the fragments produced when this tier is destroyed
    pub fn split_into(self) -> Option<AsteroidTier> {
        match self {
            AsteroidTier::Large => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => None,
        }
    }

    /// Sprite scale for this tier
    pub fn scale(self, config: &SimConfig) -> f32 {
        match self {
            AsteroidTier::Large => config.asteroid.large_scale,
            AsteroidTier::Medium => config.asteroid.medium_scale,
            AsteroidTier::Small => config.asteroid.small_scale,
        }
    }
}

/// Which way a turn key rotates the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnSide {
    Left,
    Right,
}

/// The player's craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spaceship {
    pub visual: Visual,
    pub vel: Vec2,
    pub turning_left: bool,
    pub turning_right: bool,
    pub accelerating: bool,
}

/// A projectile fired by the ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    pub visual: Visual,
    pub vel: Vec2,
    /// Ticks since firing
    pub age_ticks: u32,
}

/// A drifting hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub visual: Visual,
    pub vel: Vec2,
    pub tier: AsteroidTier,
}

/// A stationary bonus pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub visual: Visual,
}

/// Notable things that happened during a tick, for presentation collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LaserFired { id: u32 },
    AsteroidSpawned { id: u32, pos: Vec2 },
    /// A destroyed asteroid broke into `fragments` smaller ones
    AsteroidSplit { id: u32, tier: AsteroidTier, fragments: usize },
    /// A small asteroid was destroyed outright
    AsteroidDestroyed { id: u32 },
    StarSpawned { id: u32, pos: Vec2 },
    StarCollected { id: u32, score: u64 },
    ShipDestroyed { asteroid_id: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub spaceship: Spaceship,
    /// Lasers in firing order
    pub lasers: Vec<Laser>,
    /// Asteroids in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Stars in spawn order
    pub stars: Vec<Star>,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events of the latest tick plus any recorded since it ended.
    /// Older undrained events are dropped when the next tick starts.
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Log length when the latest tick finished
    #[serde(skip)]
    settled_events: usize,
    /// Next entity ID
    next_id: u32,
}

impl World {
    /// Create a world with the ship parked at the center of the viewport
    pub fn new(viewport: Vec2, config: &SimConfig) -> Self {
        let mut world = Self {
            spaceship: Spaceship {
                visual: Visual {
                    id: 0,
                    kind: VisualKind::Spaceship,
                    pos: Vec2::ZERO,
                    angle: 0.0,
                    scale: 1.0,
                },
                vel: Vec2::ZERO,
                turning_left: false,
                turning_right: false,
                accelerating: false,
            },
            lasers: Vec::new(),
            asteroids: Vec::new(),
            stars: Vec::new(),
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            settled_events: 0,
            next_id: 1,
        };

        let mut visual = world.create_visual(VisualKind::Spaceship, viewport / 2.0);
        visual.scale = config.ship.scale;
        world.spaceship.visual = visual;
        world
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create a fresh visual handle at `pos` with a unit scale and no rotation
    pub fn create_visual(&mut self, kind: VisualKind, pos: Vec2) -> Visual {
        Visual {
            id: self.next_entity_id(),
            kind,
            pos,
            angle: 0.0,
            scale: 1.0,
        }
    }

    /// Build an asteroid of the given tier
    pub fn create_asteroid(
        &mut self,
        pos: Vec2,
        vel: Vec2,
        tier: AsteroidTier,
        config: &SimConfig,
    ) -> Asteroid {
        let mut visual = self.create_visual(VisualKind::Asteroid, pos);
        visual.scale = tier.scale(config);
        Asteroid { visual, vel, tier }
    }

    /// Whether the terminal latch has been set
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn record(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the previous drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.settled_events = 0;
        std::mem::take(&mut self.events)
    }

    /// Drop events left over from earlier ticks, keeping those recorded
    /// between ticks (input such as firing)
    pub(crate) fn expire_events(&mut self) {
        self.events.drain(..self.settled_events);
        self.settled_events = 0;
    }

    /// Mark everything logged so far as belonging to the finished tick
    pub(crate) fn settle_events(&mut self) {
        self.settled_events = self.events.len();
    }
}
