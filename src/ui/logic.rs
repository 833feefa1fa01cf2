use bevy_egui::egui::{Pos2, vec2};
use seasim::vehicle::Vehicle;

/// Compass rotation in degrees, or `None` while the compass should be hidden
pub fn compass_rotation_deg(enabled: bool, vehicle: &Vehicle) -> Option<f32> {
    (enabled && vehicle.is_present()).then(|| vehicle.orientation.yaw.to_degrees())
}

/// North and south tips of a needle rotated clockwise by `rotation_deg` on screen
pub fn needle_tips(center: Pos2, length: f32, rotation_deg: f32) -> [Pos2; 2] {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let north = vec2(length * sin, -length * cos);
    [center + north, center - north]
}
