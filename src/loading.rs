use crate::core::state::AppState;
use crate::simulation::events::ShipModelFailed;
use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

pub const SHIP_MODEL_PATH: &str = "models/liberty_ship.glb";

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_loading_state(
            LoadingState::new(AppState::Loading)
                .continue_to_state(AppState::Sailing)
                .on_failure_continue_to_state(AppState::ShipMissing)
                .load_collection::<ShipAssets>(),
        )
        .add_systems(OnEnter(AppState::ShipMissing), report_missing_ship);
    }
}

#[derive(AssetCollection, Resource)]
pub struct ShipAssets {
    #[asset(path = "models/liberty_ship.glb#Scene0")]
    pub ship: Handle<Scene>,
}

fn report_missing_ship(mut failed: MessageWriter<ShipModelFailed>) {
    failed.write(ShipModelFailed {
        reason: format!("could not load {SHIP_MODEL_PATH}"),
    });
}
