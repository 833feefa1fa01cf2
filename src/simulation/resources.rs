use bevy::prelude::*;
use seasim::{FrameReport, InputState, ParameterStore, Simulation};

/// Live parameters. The control panel writes them, the next tick reads them.
#[derive(Resource, Deref, DerefMut)]
pub struct Parameters(pub ParameterStore);

#[derive(Resource, Deref, DerefMut)]
pub struct SeaSimulation(pub Simulation);

/// Steering keys held this frame
#[derive(Resource, Default, Deref, DerefMut)]
pub struct SteeringInput(pub InputState);

/// Report of the most recent tick
#[derive(Resource, Default, Deref)]
pub struct LastFrame(pub FrameReport);
