mod logic;
mod systems;

use crate::ui::systems::*;
use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

pub const HELP_TEXT: &str = "Use Arrow Keys or WASD to move ship";
/// Side of the compass overlay in logical pixels
pub const COMPASS_SIZE: f32 = 100.0;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default()).add_systems(
            EguiPrimaryContextPass,
            (render_control_panel, render_compass, render_help),
        );
    }
}
