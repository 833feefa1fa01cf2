pub mod components;
mod logic;
mod systems;

use crate::core::state::AppState;
use crate::ship::systems::*;
use crate::simulation::SeaSet;
use bevy::prelude::*;

/// Uniform scale applied to the imported ship scene
pub const SHIP_SCALE: f32 = 1000.0;
pub const WAKE_WIDTH: f32 = 5.0;
pub const WAKE_LENGTH: f32 = 20.0;

pub struct ShipPlugin;

impl Plugin for ShipPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_wake)
            .add_systems(OnEnter(AppState::Sailing), spawn_ship)
            .add_systems(
                Update,
                measure_ship
                    .in_set(SeaSet::Input)
                    .run_if(in_state(AppState::Sailing)),
            )
            .add_systems(
                Update,
                (sync_ship_transform, paint_hull, sync_wake).in_set(SeaSet::Present),
            );
    }
}
