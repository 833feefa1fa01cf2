pub(crate) mod components;
mod logic;
mod systems;

use crate::core::camera::components::*;
use crate::core::camera::systems::*;
use crate::simulation::SeaSet;
use bevy::prelude::*;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MainCamera>()
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                (orbit_camera_control, apply_window_resize).in_set(SeaSet::Input),
            )
            .add_systems(Update, sync_camera_rig.in_set(SeaSet::Present));
    }
}
