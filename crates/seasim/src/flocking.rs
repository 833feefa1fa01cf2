//! Seagulls circling on closed parametric paths.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Path-angle offset used to sample the direction of travel
pub const HEADING_LOOKAHEAD: f32 = 0.1;
/// Wing phase advance per tick
pub const WING_STEP: f32 = 0.1;
/// Peak vertical offset of the wing tips
pub const WING_AMPLITUDE: f32 = 0.5;
/// Vertical swing of the path
pub const ALTITUDE_SWING: f32 = 10.0;

/// Resting outline of a gull: left tip, crest, right tip, body, tail
pub const GULL_OUTLINE: [Vec3; 5] = [
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.5, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
];
/// Outline points moved by the wing flap
pub const WING_CONTROL_POINTS: [usize; 2] = [1, 3];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockingActor {
    pub phase: f32,
    pub radius: f32,
    pub height: f32,
    pub speed: f32,
    pub wing_phase: f32,
}

impl FlockingActor {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            speed: 0.2 + rng.random::<f32>() * 0.3,
            radius: 50.0 + rng.random::<f32>() * 100.0,
            height: 50.0 + rng.random::<f32>() * 30.0,
            phase: rng.random::<f32>() * TAU,
            wing_phase: 0.0,
        }
    }

    fn path_angle(&self, elapsed: f32) -> f32 {
        elapsed * self.speed + self.phase
    }

    /// Position on the path; depends on nothing but `elapsed`
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        let angle = self.path_angle(elapsed);
        Vec3::new(
            angle.cos() * self.radius,
            self.height + (elapsed * self.speed * 2.0).sin() * ALTITUDE_SWING,
            angle.sin() * self.radius,
        )
    }

    /// Yaw facing along the path, from a forward difference of the path angle.
    ///
    /// `(sin(yaw), cos(yaw))` points along the horizontal step from `elapsed` to
    /// `elapsed + HEADING_LOOKAHEAD / speed`.
    pub fn heading_at(&self, elapsed: f32) -> f32 {
        let angle = self.path_angle(elapsed);
        let ahead = angle + HEADING_LOOKAHEAD;
        (ahead.cos() - angle.cos()).atan2(ahead.sin() - angle.sin())
    }

    /// Vertical offset currently applied to the wing control points
    pub fn wing_offset(&self) -> f32 {
        self.wing_phase.sin() * WING_AMPLITUDE
    }

    /// Outline with the wing control points lifted by the current flap
    pub fn outline(&self) -> [Vec3; 5] {
        let mut points = GULL_OUTLINE;
        for index in WING_CONTROL_POINTS {
            points[index].y = self.wing_offset();
        }
        points
    }
}

/// Placement of one gull for the current tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorPose {
    pub position: Vec3,
    pub heading: f32,
    pub wing_offset: f32,
}

/// A batch of gulls, created and discarded as a whole
#[derive(Debug, Clone, Default)]
pub struct Flock {
    actors: Vec<FlockingActor>,
    poses: Vec<ActorPose>,
    generation: u32,
}

impl Flock {
    pub fn actors(&self) -> &[FlockingActor] {
        &self.actors
    }

    pub fn poses(&self) -> &[ActorPose] {
        &self.poses
    }

    /// Bumped every rebuild so the presentation knows to respawn
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Throw away the current batch and create `count` new gulls
    pub fn rebuild(&mut self, count: usize, rng: &mut impl Rng) {
        self.actors = (0..count).map(|_| FlockingActor::random(rng)).collect();
        self.poses.clear();
        self.generation = self.generation.wrapping_add(1);
        log::info!("Flock rebuilt with {count} gulls");
    }

    pub fn clear(&mut self) {
        if !self.actors.is_empty() {
            self.actors.clear();
            self.poses.clear();
            self.generation = self.generation.wrapping_add(1);
        }
    }

    pub fn tick(&mut self, elapsed: f32) {
        self.poses.clear();
        for actor in &mut self.actors {
            actor.wing_phase += WING_STEP;
            self.poses.push(ActorPose {
                position: actor.position_at(elapsed),
                heading: actor.heading_at(elapsed),
                wing_offset: actor.wing_offset(),
            });
        }
    }
}
