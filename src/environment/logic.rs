use bevy::color::{Color, Mix};
use bevy::math::Vec3;
use bevy::transform::components::Transform;

/// Share of the sky reflection in the visible water color
pub const REFLECTION_SHARE: f32 = 0.25;
/// Distance at which the sun light is placed; only its direction matters
const SUN_DISTANCE: f32 = 1_000.0;

pub fn water_tint(water: Color, reflection: Color) -> Color {
    water.mix(&reflection, REFLECTION_SHARE)
}

/// Rougher water for stronger distortion
pub fn water_roughness(distortion_scale: f32) -> f32 {
    (0.05 + distortion_scale / 8.0 * 0.3).clamp(0.05, 0.5)
}

/// Directional light shining from `sun_direction` towards the origin
pub fn sun_transform(sun_direction: Vec3) -> Transform {
    Transform::from_translation(sun_direction * SUN_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y)
}
