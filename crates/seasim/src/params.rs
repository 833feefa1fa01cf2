//! The parameter store: every tunable the control panel can touch.
//!
//! Keys are the struct fields, fixed at compile time. The configuration layer may
//! write any value between ticks; subsystems read it through `&ParameterStore`.

use crate::camera::CameraMode;
use crate::color::Rgb;
use crate::weather::WeatherMode;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DAY_NIGHT_SPEED_RANGE: RangeInclusive<f32> = 0.1..=5.0;
pub const SHIP_SPEED_RANGE: RangeInclusive<f32> = 0.1..=2.0;
pub const ROLL_PITCH_RANGE: RangeInclusive<f32> = 0.0..=0.2;
pub const WAVE_INTENSITY_RANGE: RangeInclusive<f32> = 0.0..=10.0;
pub const FOG_DENSITY_RANGE: RangeInclusive<f32> = 0.001..=0.05;
pub const MOON_SIZE_RANGE: RangeInclusive<f32> = 50.0..=500.0;
pub const STAR_DENSITY_RANGE: RangeInclusive<u32> = 500..=5000;
pub const STAR_DENSITY_STEP: u32 = 500;
pub const AMBIENT_LIGHT_RANGE: RangeInclusive<f32> = 0.0..=2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterStore {
    // Weather & environment
    pub weather_mode: WeatherMode,
    pub wave_intensity: f32,
    /// Water animation speed; written by weather presets as their speed multiplier
    pub water_speed: f32,
    pub distortion_scale: f32,
    pub turbidity: f32,
    pub rayleigh: f32,
    pub fog_enabled: bool,
    pub fog_density: f32,
    pub water_color: Rgb,
    pub sun_color: Rgb,

    // Time
    pub day_night_speed: f32,
    pub pause_day_night: bool,
    pub ambient_light_intensity: f32,

    // Ship
    pub ship_speed: f32,
    pub ship_roll_intensity: f32,
    pub ship_pitch_intensity: f32,
    pub ship_wake_enabled: bool,
    pub ship_color: Rgb,

    // Camera
    pub camera_mode: CameraMode,

    // Sky & space
    pub moon_size: f32,
    pub star_density: u32,

    // Effects
    pub enable_particles: bool,
    pub enable_compass: bool,
    pub enable_seagulls: bool,
    pub enable_auto_sail: bool,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self {
            weather_mode: WeatherMode::Calm,
            wave_intensity: 3.7,
            water_speed: 1.0,
            distortion_scale: 3.7,
            turbidity: 10.0,
            rayleigh: 2.0,
            fog_enabled: false,
            fog_density: 0.01,
            water_color: Rgb::from_hex(0x001e0f),
            sun_color: Rgb::WHITE,

            day_night_speed: 1.0,
            pause_day_night: false,
            ambient_light_intensity: 1.0,

            ship_speed: 0.5,
            ship_roll_intensity: 0.05,
            ship_pitch_intensity: 0.05,
            ship_wake_enabled: true,
            ship_color: Rgb::from_hex(0x333333),

            camera_mode: CameraMode::Orbit,

            moon_size: 200.0,
            star_density: 2000,

            enable_particles: true,
            enable_compass: true,
            enable_seagulls: true,
            enable_auto_sail: false,
        }
    }
}

impl ParameterStore {
    /// Pull every ranged value back into its slider range.
    ///
    /// This is the configuration layer's validation step; the core assumes it ran.
    pub fn clamp_to_ranges(&mut self) {
        self.day_night_speed = clamp(self.day_night_speed, DAY_NIGHT_SPEED_RANGE);
        self.ship_speed = clamp(self.ship_speed, SHIP_SPEED_RANGE);
        self.ship_roll_intensity = clamp(self.ship_roll_intensity, ROLL_PITCH_RANGE);
        self.ship_pitch_intensity = clamp(self.ship_pitch_intensity, ROLL_PITCH_RANGE);
        self.wave_intensity = clamp(self.wave_intensity, WAVE_INTENSITY_RANGE);
        self.fog_density = clamp(self.fog_density, FOG_DENSITY_RANGE);
        self.moon_size = clamp(self.moon_size, MOON_SIZE_RANGE);
        self.ambient_light_intensity = clamp(self.ambient_light_intensity, AMBIENT_LIGHT_RANGE);

        let stars = self
            .star_density
            .clamp(*STAR_DENSITY_RANGE.start(), *STAR_DENSITY_RANGE.end());
        self.star_density = (stars + STAR_DENSITY_STEP / 2) / STAR_DENSITY_STEP * STAR_DENSITY_STEP;
    }

    /// Wave intensity slider also drives the water distortion
    pub fn set_wave_intensity(&mut self, value: f32) {
        self.wave_intensity = value;
        self.distortion_scale = value;
    }
}

fn clamp(value: f32, range: RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}
