use crate::color::Rgb;
use crate::error::SimError;
use crate::params::ParameterStore;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sun pose and sky color at one end of the day/night interpolation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPose {
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
    pub background: Rgb,
}

/// Fixed constants of the simulation. Not exposed on the control panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationTuning {
    /// Length of one day/night period at speed 1.0 (seconds)
    pub cycle_duration_secs: f32,
    pub day: SkyPose,
    pub night: SkyPose,

    /// Per-tick exponential smoothing factor for ship orientation
    pub smoothing_factor: f32,
    /// Resting altitude of the ship hull
    pub base_altitude: f32,
    /// Yaw target while turning (radians)
    pub turn_yaw: f32,
    pub bob_frequency: f32,
    pub natural_roll_frequency: f32,

    pub spray_pool_size: usize,
    /// Life lost by an active spray particle every tick
    pub spray_life_decrement: f32,

    pub flock_size: usize,

    /// Auto-sail keeps the ship inside a square of this half-width
    pub auto_sail_boundary: f32,

    /// Minimum ticks between two reflection regenerations
    pub reflection_refresh_interval: u32,

    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for SimulationTuning {
    fn default() -> Self {
        Self {
            cycle_duration_secs: 20.0,
            day: SkyPose {
                elevation_deg: 45.0,
                azimuth_deg: 180.0,
                background: Rgb::from_hex(0x87ceeb),
            },
            night: SkyPose {
                elevation_deg: -10.0,
                azimuth_deg: 0.0,
                background: Rgb::from_hex(0x000020),
            },
            smoothing_factor: 0.1,
            base_altitude: -7.8,
            turn_yaw: std::f32::consts::PI * 0.1,
            bob_frequency: 0.5,
            natural_roll_frequency: 0.3,
            spray_pool_size: 500,
            spray_life_decrement: 0.01,
            flock_size: 10,
            auto_sail_boundary: 100.0,
            reflection_refresh_interval: 1,
            seed: None,
        }
    }
}

/// Contents of `seafarer.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeafarerConfig {
    pub tuning: SimulationTuning,
    pub parameters: ParameterStore,
}

impl SeafarerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, SimError> {
        let mut config: SeafarerConfig = toml::from_str(content)?;
        config.parameters.clamp_to_ranges();
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the config, falling back to defaults when the file is missing or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(SimError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("Ignoring config at {}: {err}", path.display());
                Self::default()
            }
        }
    }
}
