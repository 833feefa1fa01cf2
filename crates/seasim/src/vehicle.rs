//! Ship kinematics: discrete steering, smoothed orientation, wave bobbing and wake.

use crate::config::SimulationTuning;
use crate::error::SimError;
use crate::input::InputState;
use crate::params::ParameterStore;
use glam::{EulerRot, Quat, Vec3};

/// Lifecycle of the ship model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    Absent,
    Loading,
    Present,
}

/// Euler angles in radians: roll about Z, pitch about X, yaw about Y
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    /// Move every angle towards `target` by `factor` of the remaining distance
    pub fn smooth_towards(&mut self, target: Orientation, factor: f32) {
        self.roll += (target.roll - self.roll) * factor;
        self.pitch += (target.pitch - self.pitch) * factor;
        self.yaw += (target.yaw - self.yaw) * factor;
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub position: Vec3,
    pub orientation: Orientation,
    pub target_orientation: Orientation,
    pub base_altitude: f32,
    pub presence: Presence,
    /// Why the model never arrived, once loading failed
    pub load_error: Option<String>,
    /// Model extents measured at load time
    pub size: Vec3,
}

impl Vehicle {
    pub fn new(tuning: &SimulationTuning) -> Self {
        Self {
            position: Vec3::new(0.0, tuning.base_altitude, 0.0),
            orientation: Orientation::default(),
            target_orientation: Orientation::default(),
            base_altitude: tuning.base_altitude,
            presence: Presence::Absent,
            load_error: None,
            size: Vec3::ZERO,
        }
    }

    pub fn is_present(&self) -> bool {
        self.presence == Presence::Present
    }

    /// The host started loading the model. A failed ship never goes back to loading.
    pub fn begin_loading(&mut self) {
        if self.presence == Presence::Absent && self.load_error.is_none() {
            self.presence = Presence::Loading;
        }
    }

    /// The model arrived with the given measured size
    pub fn on_model_ready(&mut self, size: Vec3) -> Result<(), SimError> {
        if !size.is_finite() || size.cmple(Vec3::ZERO).any() {
            self.on_model_failed(format!("unusable model size {size}"));
            return Err(SimError::InvalidBounds {
                x: size.x,
                y: size.y,
                z: size.z,
            });
        }
        self.size = size;
        self.presence = Presence::Present;
        self.load_error = None;
        Ok(())
    }

    /// The model will never arrive; everything that reads the ship stays idle
    pub fn on_model_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("Ship model failed to load: {reason}");
        self.presence = Presence::Absent;
        self.load_error = Some(reason);
    }

    /// One kinematics step. No-op unless the ship is present.
    pub fn tick(
        &mut self,
        input: &InputState,
        params: &ParameterStore,
        elapsed: f32,
        tuning: &SimulationTuning,
    ) {
        if !self.is_present() {
            return;
        }

        let speed = params.ship_speed;
        let natural_roll = (elapsed * tuning.natural_roll_frequency).sin()
            * params.wave_intensity
            * 0.005;
        let mut target = Orientation {
            roll: natural_roll,
            ..Default::default()
        };

        if input.forward {
            self.position.z -= speed;
            target.pitch = params.ship_pitch_intensity;
        } else if input.backward {
            self.position.z += speed;
            target.pitch = -params.ship_pitch_intensity;
        }

        if input.left {
            self.position.x -= speed;
            target.yaw = tuning.turn_yaw;
            target.roll = params.ship_roll_intensity;
        } else if input.right {
            self.position.x += speed;
            target.yaw = -tuning.turn_yaw;
            target.roll = -params.ship_roll_intensity;
        }

        self.target_orientation = target;
        self.orientation.smooth_towards(target, tuning.smoothing_factor);

        self.position.y = self.base_altitude
            + (elapsed * tuning.bob_frequency).sin() * params.wave_intensity * 0.1;
    }
}

/// Foam trail drawn behind the ship
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WakeState {
    pub visible: bool,
    pub position: Vec3,
    pub heading: f32,
    pub opacity: f32,
}

impl WakeState {
    pub const ALTITUDE: f32 = -7.7;
    pub const TRAIL_OFFSET: f32 = 10.0;
    pub const MAX_OPACITY: f32 = 0.8;

    pub fn hidden() -> Self {
        Self {
            visible: false,
            position: Vec3::new(0.0, Self::ALTITUDE, Self::TRAIL_OFFSET),
            heading: 0.0,
            opacity: Self::MAX_OPACITY,
        }
    }

    /// Wake for this tick. Keeps its last placement while hidden.
    pub fn track(&self, vehicle: &Vehicle, params: &ParameterStore) -> WakeState {
        if !params.ship_wake_enabled || !vehicle.is_present() {
            return WakeState {
                visible: false,
                ..*self
            };
        }
        WakeState {
            visible: true,
            position: Vec3::new(
                vehicle.position.x,
                Self::ALTITUDE,
                vehicle.position.z + Self::TRAIL_OFFSET,
            ),
            heading: vehicle.orientation.yaw,
            opacity: Self::MAX_OPACITY * (params.ship_speed / 2.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn present_vehicle(tuning: &SimulationTuning) -> Vehicle {
        let mut vehicle = Vehicle::new(tuning);
        vehicle.on_model_ready(Vec3::new(10.0, 20.0, 60.0)).unwrap();
        vehicle
    }

    fn calm_params() -> ParameterStore {
        ParameterStore {
            wave_intensity: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_sustained_forward_moves_exactly() {
        let tuning = SimulationTuning::default();
        let mut vehicle = present_vehicle(&tuning);
        let params = ParameterStore {
            ship_speed: 0.75,
            ..Default::default()
        };
        let start_z = vehicle.position.z;

        for tick in 0..40 {
            vehicle.tick(&InputState::FORWARD, &params, tick as f32 / 60.0, &tuning);
        }

        assert_eq!(vehicle.position.z, start_z - 40.0 * 0.75);
        assert_eq!(vehicle.position.x, 0.0);
    }

    #[test]
    fn test_opposing_inputs_do_not_cancel() {
        let tuning = SimulationTuning::default();
        let mut vehicle = present_vehicle(&tuning);
        let params = calm_params();
        let input = InputState {
            forward: true,
            backward: true,
            left: true,
            right: true,
        };

        vehicle.tick(&input, &params, 0.0, &tuning);

        assert_eq!(vehicle.position.z, -params.ship_speed);
        assert_eq!(vehicle.position.x, -params.ship_speed);
    }

    #[test]
    fn test_turn_converges_to_target_and_relaxes() {
        let tuning = SimulationTuning::default();
        let mut vehicle = present_vehicle(&tuning);
        let params = calm_params();
        let left = InputState {
            left: true,
            ..Default::default()
        };

        for _ in 0..300 {
            vehicle.tick(&left, &params, 0.0, &tuning);
        }
        assert!((vehicle.orientation.yaw - tuning.turn_yaw).abs() < EPS);
        assert!((vehicle.orientation.roll - params.ship_roll_intensity).abs() < EPS);

        for _ in 0..300 {
            vehicle.tick(&InputState::default(), &params, 0.0, &tuning);
        }
        assert!(vehicle.orientation.yaw.abs() < EPS);
        assert!(vehicle.orientation.roll.abs() < EPS);
    }

    #[test]
    fn test_smoothing_is_first_order() {
        let tuning = SimulationTuning::default();
        let mut vehicle = present_vehicle(&tuning);
        let params = calm_params();
        let right = InputState {
            right: true,
            ..Default::default()
        };

        vehicle.tick(&right, &params, 0.0, &tuning);
        assert!((vehicle.orientation.yaw + tuning.turn_yaw * 0.1).abs() < 1e-6);
        vehicle.tick(&right, &params, 0.0, &tuning);
        assert!((vehicle.orientation.yaw + tuning.turn_yaw * 0.19).abs() < 1e-6);
    }

    #[test]
    fn test_forward_pitches_and_backward_pitches_back() {
        let tuning = SimulationTuning::default();
        let mut vehicle = present_vehicle(&tuning);
        let params = calm_params();

        for _ in 0..300 {
            vehicle.tick(&InputState::FORWARD, &params, 0.0, &tuning);
        }
        assert!((vehicle.orientation.pitch - params.ship_pitch_intensity).abs() < EPS);

        let back = InputState {
            backward: true,
            ..Default::default()
        };
        for _ in 0..300 {
            vehicle.tick(&back, &params, 0.0, &tuning);
        }
        assert!((vehicle.orientation.pitch + params.ship_pitch_intensity).abs() < EPS);
    }

    #[test]
    fn test_bobbing_follows_waves() {
        let tuning = SimulationTuning::default();
        let mut vehicle = present_vehicle(&tuning);
        let params = ParameterStore::default();
        let elapsed = std::f32::consts::PI; // sin(elapsed * 0.5) == 1

        vehicle.tick(&InputState::default(), &params, elapsed, &tuning);

        let expected = tuning.base_altitude + params.wave_intensity * 0.1;
        assert!((vehicle.position.y - expected).abs() < EPS);
    }

    #[test]
    fn test_natural_roll_targets_wave_sway() {
        let tuning = SimulationTuning::default();
        let mut vehicle = present_vehicle(&tuning);
        let params = ParameterStore::default();
        let elapsed = std::f32::consts::FRAC_PI_2 / 0.3;

        vehicle.tick(&InputState::default(), &params, elapsed, &tuning);

        let sway = params.wave_intensity * 0.005;
        assert!((vehicle.target_orientation.roll - sway).abs() < EPS);
        assert!((vehicle.orientation.roll - sway * 0.1).abs() < EPS);
    }

    #[test]
    fn test_absent_vehicle_ignores_input() {
        let tuning = SimulationTuning::default();
        let mut vehicle = Vehicle::new(&tuning);
        let before = vehicle.clone();

        vehicle.tick(&InputState::FORWARD, &ParameterStore::default(), 3.0, &tuning);
        assert_eq!(vehicle, before);

        vehicle.begin_loading();
        vehicle.tick(&InputState::FORWARD, &ParameterStore::default(), 3.0, &tuning);
        assert_eq!(vehicle.position, before.position);
    }

    #[test]
    fn test_failed_load_is_permanent() {
        let tuning = SimulationTuning::default();
        let mut vehicle = Vehicle::new(&tuning);
        vehicle.begin_loading();
        vehicle.on_model_failed("404");
        vehicle.begin_loading();

        assert_eq!(vehicle.presence, Presence::Absent);
        assert_eq!(vehicle.load_error.as_deref(), Some("404"));
    }

    #[test]
    fn test_invalid_bounds_are_rejected() {
        let tuning = SimulationTuning::default();
        let mut vehicle = Vehicle::new(&tuning);
        let err = vehicle.on_model_ready(Vec3::new(1.0, f32::NAN, 1.0)).unwrap_err();

        assert!(matches!(err, SimError::InvalidBounds { .. }));
        assert_eq!(vehicle.presence, Presence::Absent);
    }

    #[test]
    fn test_wake_tracks_ship() {
        let tuning = SimulationTuning::default();
        let mut vehicle = present_vehicle(&tuning);
        vehicle.position = Vec3::new(4.0, -7.8, -30.0);
        vehicle.orientation.yaw = 0.2;
        let params = ParameterStore {
            ship_speed: 1.0,
            ..Default::default()
        };

        let wake = WakeState::hidden().track(&vehicle, &params);
        assert!(wake.visible);
        assert_eq!(wake.position, Vec3::new(4.0, WakeState::ALTITUDE, -20.0));
        assert_eq!(wake.heading, 0.2);
        assert!((wake.opacity - 0.4).abs() < EPS);
    }

    #[test]
    fn test_wake_hidden_when_disabled_or_absent() {
        let tuning = SimulationTuning::default();
        let params = ParameterStore {
            ship_wake_enabled: false,
            ..Default::default()
        };
        let wake = WakeState::hidden().track(&present_vehicle(&tuning), &params);
        assert!(!wake.visible);

        let wake = WakeState::hidden().track(&Vehicle::new(&tuning), &ParameterStore::default());
        assert!(!wake.visible);
    }
}
