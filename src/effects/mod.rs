pub mod components;
mod logic;
mod systems;

use crate::effects::systems::*;
use crate::simulation::SeaSet;
use bevy::prelude::*;

/// Spray around the ship and the circling gulls
pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (spawn_spray, sync_spray).chain(),
                (respawn_flock, animate_flock).chain(),
            )
                .in_set(SeaSet::Present),
        );
    }
}
