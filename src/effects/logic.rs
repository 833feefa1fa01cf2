use bevy::math::{Quat, Vec3};
use bevy::transform::components::Transform;
use seasim::flocking::ActorPose;
use seasim::particles::SprayPool;
use std::f32::consts::PI;

/// Uniform scale of a gull outline
pub const GULL_SCALE: f32 = 2.0;

pub fn spray_positions(pool: &SprayPool) -> Vec<Vec3> {
    pool.particles().iter().map(|p| p.position).collect()
}

/// Gull placed on its path and turned along its direction of travel.
///
/// Heading `h` travels along `(sin h, cos h)` on XZ and the outline's tail sits at
/// local +Z, so local -Z has to end up on the travel direction.
pub fn gull_transform(pose: &ActorPose) -> Transform {
    Transform::from_translation(pose.position)
        .with_rotation(Quat::from_rotation_y(pose.heading + PI))
        .with_scale(Vec3::splat(GULL_SCALE))
}
