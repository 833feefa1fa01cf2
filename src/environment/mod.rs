pub mod components;
mod logic;
pub mod resources;
mod systems;

use crate::environment::resources::SkyReflection;
use crate::environment::systems::*;
use crate::simulation::SeaSet;
use bevy::prelude::*;

/// Lux of the directional light at full daylight
pub const SUN_ILLUMINANCE: f32 = 10_000.0;
/// Ambient brightness at intensity 1.0
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
pub const SKY_RADIUS: f32 = 9_000.0;
/// Wave height per unit of distortion scale
pub const WAVE_HEIGHT_PER_DISTORTION: f32 = 0.15;

pub struct EnvironmentPlugin;

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkyReflection>()
            .add_systems(Startup, (spawn_sun, spawn_sea_and_sky, spawn_celestial))
            .add_systems(
                Update,
                (
                    update_lighting,
                    update_fog,
                    (refresh_sky, animate_water).chain(),
                    update_stars,
                    update_moon,
                )
                    .in_set(SeaSet::Present),
            );
    }
}
