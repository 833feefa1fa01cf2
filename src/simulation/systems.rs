use crate::simulation::events::{ShipModelFailed, ShipModelReady};
use crate::simulation::logic::steering_from_keys;
use crate::simulation::resources::*;
use bevy::prelude::*;

pub fn begin_ship_loading(mut simulation: ResMut<SeaSimulation>) {
    simulation.begin_loading();
}

pub fn read_steering_keys(keys: Res<ButtonInput<KeyCode>>, mut steering: ResMut<SteeringInput>) {
    let input = steering_from_keys(|key| keys.pressed(key));
    if steering.0 != input {
        steering.0 = input;
    }
}

pub fn apply_model_messages(
    mut ready: MessageReader<ShipModelReady>,
    mut failed: MessageReader<ShipModelFailed>,
    mut simulation: ResMut<SeaSimulation>,
) {
    for msg in ready.read() {
        if let Err(err) = simulation.on_model_ready(msg.size) {
            error!("Ship model rejected: {err}");
        }
    }
    for msg in failed.read() {
        simulation.on_model_failed(msg.reason.clone());
    }
}

pub fn advance_simulation(
    time: Res<Time>,
    steering: Res<SteeringInput>,
    mut params: ResMut<Parameters>,
    mut simulation: ResMut<SeaSimulation>,
    mut last_frame: ResMut<LastFrame>,
) {
    let report = simulation.tick(&mut params.0, &steering.0, time.delta_secs());
    if let Some(mode) = report.weather_applied {
        debug!("Tick {}: weather switched to {mode}", report.tick.frame);
    }
    last_frame.0 = report;
}
