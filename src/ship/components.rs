use bevy::prelude::*;

/// Root of the instantiated ship scene
#[derive(Component)]
pub struct Ship;

/// A mesh inside the ship scene that takes the hull color.
/// Tagged once when the scene is measured.
#[derive(Component)]
pub struct HullMesh;

#[derive(Component)]
pub struct Wake;
