//! Weather presets and the state machine that switches between them.

use crate::color::Rgb;
use crate::params::ParameterStore;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEEP_GREEN_WATER: Rgb = Rgb::from_hex(0x001e0f);
pub const TEAL_WATER: Rgb = Rgb::from_hex(0x5f9ea0);
pub const BLUE_WATER: Rgb = Rgb::from_hex(0x0066ff);
pub const SUNSET_ORANGE: Rgb = Rgb::from_hex(0xff8c00);
pub const FOG_COLOR: Rgb = Rgb::from_hex(0xcccccc);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherMode {
    #[default]
    Calm,
    Stormy,
    Foggy,
    Sunset,
}

impl WeatherMode {
    pub const ALL: [WeatherMode; 4] = [
        WeatherMode::Calm,
        WeatherMode::Stormy,
        WeatherMode::Foggy,
        WeatherMode::Sunset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WeatherMode::Calm => "Calm",
            WeatherMode::Stormy => "Stormy",
            WeatherMode::Foggy => "Foggy",
            WeatherMode::Sunset => "Sunset",
        }
    }

    pub fn preset(self) -> WeatherPreset {
        match self {
            WeatherMode::Calm => WeatherPreset {
                distortion_scale: 3.7,
                wave_intensity: 3.7,
                speed_multiplier: 1.0,
                turbidity: 10.0,
                rayleigh: Some(2.0),
                fog_enabled: false,
                fog_density: None,
                water_color: DEEP_GREEN_WATER,
                sun_color: Some(Rgb::WHITE),
            },
            WeatherMode::Stormy => WeatherPreset {
                distortion_scale: 8.0,
                wave_intensity: 8.0,
                speed_multiplier: 2.0,
                turbidity: 20.0,
                rayleigh: None,
                fog_enabled: false,
                fog_density: None,
                water_color: DEEP_GREEN_WATER,
                sun_color: None,
            },
            WeatherMode::Foggy => WeatherPreset {
                distortion_scale: 2.5,
                wave_intensity: 2.5,
                speed_multiplier: 0.7,
                turbidity: 15.0,
                rayleigh: None,
                fog_enabled: true,
                fog_density: None,
                water_color: TEAL_WATER,
                sun_color: None,
            },
            WeatherMode::Sunset => WeatherPreset {
                distortion_scale: 3.0,
                wave_intensity: 3.0,
                speed_multiplier: 0.8,
                turbidity: 5.0,
                rayleigh: Some(4.0),
                fog_enabled: false,
                fog_density: None,
                water_color: BLUE_WATER,
                sun_color: Some(SUNSET_ORANGE),
            },
        }
    }
}

impl fmt::Display for WeatherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Appearance and physics bundle of one weather state.
///
/// `None` fields are left as they are on the store: Stormy and Foggy keep whatever
/// rayleigh and sun color were in effect, and no preset touches the fog density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherPreset {
    pub distortion_scale: f32,
    pub wave_intensity: f32,
    pub speed_multiplier: f32,
    pub turbidity: f32,
    pub rayleigh: Option<f32>,
    pub fog_enabled: bool,
    pub fog_density: Option<f32>,
    pub water_color: Rgb,
    pub sun_color: Option<Rgb>,
}

impl WeatherPreset {
    /// Write the whole bundle to the store in one step
    pub fn apply(&self, params: &mut ParameterStore) {
        params.distortion_scale = self.distortion_scale;
        params.wave_intensity = self.wave_intensity;
        params.water_speed = self.speed_multiplier;
        params.turbidity = self.turbidity;
        if let Some(rayleigh) = self.rayleigh {
            params.rayleigh = rayleigh;
        }
        params.fog_enabled = self.fog_enabled;
        if let Some(density) = self.fog_density {
            params.fog_density = density;
        }
        params.water_color = self.water_color;
        if let Some(sun_color) = self.sun_color {
            params.sun_color = sun_color;
        }
    }
}

/// Tracks which preset is active. Every transition is allowed.
#[derive(Debug, Clone, Default)]
pub struct WeatherMachine {
    active: WeatherMode,
}

impl WeatherMachine {
    pub fn active(&self) -> WeatherMode {
        self.active
    }

    /// Switch to `mode` and apply its preset, even when it is already active
    pub fn select(&mut self, mode: WeatherMode, params: &mut ParameterStore) {
        self.active = mode;
        params.weather_mode = mode;
        mode.preset().apply(params);
        log::info!("Weather preset {mode} applied");
    }
}
