//! Camera modes, ownership of the camera node and orbit math.

use crate::vehicle::Vehicle;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;

pub const DEFAULT_OFFSET: Vec3 = Vec3::new(0.0, 10.0, 30.0);
pub const INITIAL_LOOK_AT: Vec3 = Vec3::new(50.0, 10.0, 0.0);
/// Camera position relative to the ship in first person
pub const FIRST_PERSON_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const FIRST_PERSON_LOOK_AT: Vec3 = Vec3::new(0.0, 0.0, -10.0);

pub const MIN_ORBIT_DISTANCE: f32 = 10.0;
pub const MAX_ORBIT_DISTANCE: f32 = 100.0;
/// Keeps the camera just above the horizon
pub const MAX_POLAR_ANGLE: f32 = PI * 0.495;
const MIN_POLAR_ANGLE: f32 = 1e-3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMode {
    #[default]
    Orbit,
    Follow,
    FirstPerson,
}

impl CameraMode {
    pub const ALL: [CameraMode; 3] = [CameraMode::Orbit, CameraMode::Follow, CameraMode::FirstPerson];

    pub fn label(self) -> &'static str {
        match self {
            CameraMode::Orbit => "Orbit",
            CameraMode::Follow => "Follow",
            CameraMode::FirstPerson => "First Person",
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which node owns the camera. A single value, so the camera can never have two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CameraParent {
    #[default]
    SceneRoot,
    Vehicle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    pub mode: CameraMode,
    pub parent: CameraParent,
    /// Position in the parent's space
    pub position: Vec3,
    /// Point the camera faces, in the parent's space
    pub look_at: Vec3,
    /// Pivot of orbit controls, in world space
    pub target: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            mode: CameraMode::Orbit,
            parent: CameraParent::SceneRoot,
            position: DEFAULT_OFFSET,
            look_at: INITIAL_LOOK_AT,
            target: Vec3::ZERO,
        }
    }
}

impl CameraRig {
    /// Enter `mode`. Modes that need the ship fall back to the default framing
    /// while it is absent.
    pub fn set_mode(&mut self, mode: CameraMode, vehicle: &Vehicle) {
        self.mode = mode;
        match mode {
            CameraMode::Follow if vehicle.is_present() => {
                self.attach_to_root();
                self.target = vehicle.position;
            }
            CameraMode::FirstPerson if vehicle.is_present() => {
                // Detach first so the camera is never owned twice
                self.parent = CameraParent::SceneRoot;
                self.position = FIRST_PERSON_OFFSET;
                self.look_at = FIRST_PERSON_LOOK_AT;
                self.parent = CameraParent::Vehicle;
            }
            _ => {
                self.attach_to_root();
                self.position = DEFAULT_OFFSET;
                self.look_at = Vec3::ZERO;
                self.target = Vec3::ZERO;
            }
        }
    }

    fn attach_to_root(&mut self) {
        if self.parent == CameraParent::Vehicle {
            self.parent = CameraParent::SceneRoot;
            self.position = DEFAULT_OFFSET;
            self.look_at = self.target;
        }
    }

    /// Frame a freshly loaded ship of the given size
    pub fn frame_model(&mut self, size: Vec3) {
        if self.parent == CameraParent::Vehicle {
            return;
        }
        self.position = Vec3::new(0.0, size.y * 1.5, size.z * 3.0);
        self.look_at = Vec3::ZERO;
        self.target = Vec3::ZERO;
    }

    /// Per-tick update: follow mode keeps the pivot on the ship
    pub fn tick(&mut self, vehicle: &Vehicle) {
        if self.mode == CameraMode::Follow && vehicle.is_present() {
            self.target = vehicle.position;
            self.look_at = vehicle.position;
        }
    }

    /// Apply an orbit gesture. Ignored while the camera rides the ship.
    pub fn orbit(&mut self, input: &OrbitInput) {
        if self.parent == CameraParent::Vehicle || input.is_idle() {
            return;
        }
        self.position = orbit_position(self.position, self.target, input);
        self.look_at = self.target;
    }
}

/// One frame of orbit gestures
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitInput {
    /// Rotation around the pivot's vertical axis (radians)
    pub yaw: f32,
    /// Change of the polar angle (radians, positive tilts towards the horizon)
    pub pitch: f32,
    /// Distance multiplier, 1.0 keeps the distance
    pub zoom: f32,
}

impl OrbitInput {
    pub fn is_idle(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0 && (self.zoom == 1.0 || self.zoom == 0.0)
    }
}

/// Move `position` around `target` on a sphere, clamping distance and polar angle
pub fn orbit_position(position: Vec3, target: Vec3, input: &OrbitInput) -> Vec3 {
    let offset = position - target;
    let radius = offset.length().max(f32::EPSILON);
    let mut polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
    let mut azimuth = offset.x.atan2(offset.z);

    let zoom = if input.zoom > 0.0 { input.zoom } else { 1.0 };
    let radius = (radius * zoom).clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE);
    azimuth += input.yaw;
    polar = (polar + input.pitch).clamp(MIN_POLAR_ANGLE, MAX_POLAR_ANGLE);

    target
        + Vec3::new(
            polar.sin() * azimuth.sin(),
            polar.cos(),
            polar.sin() * azimuth.cos(),
        ) * radius
}

/// Perspective projection parameters, touched only by resizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 10_000.0,
        }
    }
}

impl Projection {
    /// Zero-sized windows (minimised) keep the previous aspect
    pub fn on_resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }
}
