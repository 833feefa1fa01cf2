pub mod mesh;

use bevy::color::Color;
use seasim::color::Rgb;

pub fn to_color(rgb: Rgb) -> Color {
    Color::srgb(rgb.r, rgb.g, rgb.b)
}
