mod core;
mod effects;
mod environment;
mod helpers;
mod loading;
mod ship;
mod simulation;
mod ui;

use crate::core::camera::CameraPlugin;
use crate::core::state::AppState;
use crate::effects::EffectsPlugin;
use crate::environment::EnvironmentPlugin;
use crate::loading::LoadingPlugin;
use crate::ship::ShipPlugin;
use crate::simulation::SimulationPlugin;
use crate::ui::UIPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>().add_plugins((
            SimulationPlugin,
            CameraPlugin,
            LoadingPlugin,
            EnvironmentPlugin,
            ShipPlugin,
            EffectsPlugin,
            UIPlugin,
        ));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
