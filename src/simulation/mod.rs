pub mod events;
mod logic;
pub mod resources;
mod systems;

use crate::simulation::events::*;
use crate::simulation::resources::*;
use crate::simulation::systems::*;
use bevy::prelude::*;
use seasim::{SeafarerConfig, Simulation};

/// Configuration file read at startup, relative to the working directory
pub const CONFIG_PATH: &str = "seafarer.toml";

/// Frame phases. Presentation always sees the state of the tick that just ran.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeaSet {
    Input,
    Advance,
    Present,
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let mut config = SeafarerConfig::load_or_default(CONFIG_PATH);
        let simulation = Simulation::new(&mut config.parameters, config.tuning);

        app.insert_resource(Parameters(config.parameters))
            .insert_resource(SeaSimulation(simulation))
            .init_resource::<SteeringInput>()
            .init_resource::<LastFrame>()
            .add_message::<ShipModelReady>()
            .add_message::<ShipModelFailed>()
            .configure_sets(
                Update,
                (SeaSet::Input, SeaSet::Advance, SeaSet::Present).chain(),
            )
            .add_systems(Startup, begin_ship_loading)
            .add_systems(
                Update,
                (read_steering_keys, apply_model_messages).in_set(SeaSet::Input),
            )
            .add_systems(Update, advance_simulation.in_set(SeaSet::Advance));
    }
}
