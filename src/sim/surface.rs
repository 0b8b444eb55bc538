//! Collaborator seams
//!
//! The simulation never draws, sizes windows, or owns an entropy source.
//! It talks to those collaborators through the two traits here:
//! - [`Surface`]: viewport, overlap predicates, score display, loop control
//! - [`RandomSource`]: uniform integer/float draws

use glam::Vec2;
use rand::Rng;

use super::sdf::{circles_overlap, point_in_circle};
use super::state::{Visual, VisualKind};

/// Presentation-side services consumed by the simulation
pub trait Surface {
    /// Current viewport size (width, height)
    fn viewport(&self) -> Vec2;

    /// Shape-to-shape overlap between two visuals
    fn overlaps(&self, a: &Visual, b: &Visual) -> bool;

    /// Whether `point` lies within the visual's shape
    fn contains_point(&self, visual: &Visual, point: Vec2) -> bool;

    /// Update the score display
    fn show_score(&mut self, score: u64);

    /// Stop delivering ticks
    fn halt(&mut self);

    /// Resume delivering ticks after a halt
    fn resume(&mut self);
}

/// Uniform random draws
pub trait RandomSource {
    /// Uniform integer in `[low, high]` (inclusive)
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;

    /// Uniform float in `[0, 1)`
    fn uniform_float(&mut self) -> f32;
}

impl<R: Rng> RandomSource for R {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        self.random_range(low..=high)
    }

    fn uniform_float(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Hit radius of each visual kind at scale 1.0 (half the sprite size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseRadii {
    pub spaceship: f32,
    pub laser: f32,
    pub asteroid: f32,
    pub star: f32,
}

impl Default for BaseRadii {
    fn default() -> Self {
        Self {
            spaceship: 300.0,
            laser: 50.0,
            asteroid: 250.0,
            star: 200.0,
        }
    }
}

impl BaseRadii {
    pub fn for_kind(&self, kind: VisualKind) -> f32 {
        match kind {
            VisualKind::Spaceship => self.spaceship,
            VisualKind::Laser => self.laser,
            VisualKind::Asteroid => self.asteroid,
            VisualKind::Star => self.star,
        }
    }
}

/// Headless surface that treats every visual as a circle.
///
/// Used by the native runner and by tests; a real renderer would answer the
/// overlap queries from sprite bounds instead.
#[derive(Debug, Clone)]
pub struct CircleSurface {
    pub size: Vec2,
    pub radii: BaseRadii,
    /// Last value passed to [`Surface::show_score`]
    pub displayed_score: u64,
    /// Whether the loop has been halted
    pub halted: bool,
}

impl CircleSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            radii: BaseRadii::default(),
            displayed_score: 0,
            halted: false,
        }
    }

    /// Hit radius of a visual at its current scale
    pub fn radius(&self, visual: &Visual) -> f32 {
        self.radii.for_kind(visual.kind) * visual.scale
    }

    /// Resize the viewport (window resize)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }
}

impl Surface for CircleSurface {
    fn viewport(&self) -> Vec2 {
        self.size
    }

    fn overlaps(&self, a: &Visual, b: &Visual) -> bool {
        circles_overlap(a.pos, self.radius(a), b.pos, self.radius(b))
    }

    fn contains_point(&self, visual: &Visual, point: Vec2) -> bool {
        point_in_circle(point, visual.pos, self.radius(visual))
    }

    fn show_score(&mut self, score: u64) {
        self.displayed_score = score;
    }

    fn halt(&mut self) {
        self.halted = true;
    }

    fn resume(&mut self) {
        self.halted = false;
    }
}
