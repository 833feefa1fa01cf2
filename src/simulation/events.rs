use bevy::prelude::*;

/// The ship scene is instantiated and measured
#[derive(Message)]
pub struct ShipModelReady {
    pub size: Vec3,
}

#[derive(Message)]
pub struct ShipModelFailed {
    pub reason: String,
}
