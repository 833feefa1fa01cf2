use bevy::prelude::*;

/// Point cloud drawing the spray pool
#[derive(Component)]
pub struct SprayCloud;

/// One gull, indexing into the flock
#[derive(Component)]
pub struct Seagull(pub usize);
