use bevy::prelude::*;

/// Sky color the water currently mirrors. Only refreshed when the sun moved.
#[derive(Resource, Clone, Copy)]
pub struct SkyReflection(pub Color);

impl Default for SkyReflection {
    fn default() -> Self {
        Self(Color::srgb_u8(0x87, 0xce, 0xeb))
    }
}
