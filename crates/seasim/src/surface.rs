//! Uniform-level state of the water and sky materials.

use crate::color::Rgb;
use crate::environment::EnvironmentState;
use crate::params::ParameterStore;
use crate::weather::FOG_COLOR;
use glam::Vec3;

pub const MIE_COEFFICIENT: f32 = 0.005;
pub const MIE_DIRECTIONAL_G: f32 = 0.8;
/// The water clock advances `water_speed / WATER_TICKS_PER_UNIT` every tick
pub const WATER_TICKS_PER_UNIT: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogState {
    pub color: Rgb,
    pub density: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceState {
    /// Phase of the water normal animation
    pub water_time: f32,
    pub distortion_scale: f32,
    pub water_color: Rgb,
    pub sun_color: Rgb,
    pub sun_direction: Vec3,
    pub turbidity: f32,
    pub rayleigh: f32,
    pub mie_coefficient: f32,
    pub mie_directional_g: f32,
    pub fog: Option<FogState>,
    /// Cycle brightness scaled by the ambient slider
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
}

impl SurfaceState {
    pub fn new(params: &ParameterStore, environment: &EnvironmentState) -> Self {
        let mut surface = Self {
            water_time: 0.0,
            distortion_scale: 0.0,
            water_color: params.water_color,
            sun_color: params.sun_color,
            sun_direction: environment.sun_direction,
            turbidity: 0.0,
            rayleigh: 0.0,
            mie_coefficient: MIE_COEFFICIENT,
            mie_directional_g: MIE_DIRECTIONAL_G,
            fog: None,
            ambient_intensity: 0.0,
            directional_intensity: 0.0,
        };
        surface.sync(params, environment);
        surface
    }

    pub fn tick(&mut self, params: &ParameterStore, environment: &EnvironmentState) {
        self.water_time += params.water_speed / WATER_TICKS_PER_UNIT;
        self.sync(params, environment);
    }

    fn sync(&mut self, params: &ParameterStore, environment: &EnvironmentState) {
        self.distortion_scale = params.distortion_scale;
        self.water_color = params.water_color;
        self.sun_color = params.sun_color;
        self.sun_direction = environment.sun_direction;
        self.turbidity = params.turbidity;
        self.rayleigh = params.rayleigh;
        self.fog = params.fog_enabled.then_some(FogState {
            color: FOG_COLOR,
            density: params.fog_density,
        });
        self.ambient_intensity = environment.ambient_intensity * params.ambient_light_intensity;
        self.directional_intensity = environment.directional_intensity;
    }
}
