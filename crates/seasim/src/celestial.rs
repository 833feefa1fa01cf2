//! Stars and moon: generated geometry plus their slow per-tick drift.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

pub const STAR_SPHERE_RADIUS: f32 = 5000.0;
pub const STAR_ROTATION_STEP: f32 = 0.0001;
pub const MOON_ROTATION_STEP: f32 = 0.001;
pub const MOON_RADIUS: f32 = 200.0;
pub const MOON_POSITION: Vec3 = Vec3::new(0.0, 2000.0, -5000.0);
/// `moonSize` at which the moon is drawn at its natural radius
pub const MOON_REFERENCE_SIZE: f32 = 200.0;

#[derive(Debug, Clone, Default)]
pub struct StarField {
    positions: Vec<Vec3>,
    /// Rotation of the whole field about +Y
    pub rotation: f32,
    pub opacity: f32,
    generation: u32,
}

impl StarField {
    pub fn generate(density: u32, rng: &mut impl Rng) -> Self {
        let mut field = Self::default();
        field.regenerate(density, rng);
        field
    }

    /// Replace every star. Rotation restarts from zero like a freshly built field.
    pub fn regenerate(&mut self, density: u32, rng: &mut impl Rng) {
        self.positions = (0..density)
            .map(|_| {
                let theta = rng.random::<f32>() * TAU;
                let phi = rng.random::<f32>() * PI;
                Vec3::new(
                    phi.sin() * theta.cos(),
                    phi.sin() * theta.sin(),
                    phi.cos(),
                ) * STAR_SPHERE_RADIUS
            })
            .collect();
        self.rotation = 0.0;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Drift the field and set its opacity.
    ///
    /// A running cycle dictates opacity; a paused one leaves the stars twinkling.
    pub fn tick(&mut self, elapsed: f32, cycle_opacity: f32, cycle_paused: bool) {
        self.rotation += STAR_ROTATION_STEP;
        self.opacity = if cycle_paused {
            0.5 + (elapsed * 0.5).sin() * 0.5
        } else {
            cycle_opacity
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moon {
    pub scale: f32,
    pub rotation: f32,
    pub opacity: f32,
}

impl Default for Moon {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            opacity: 0.0,
        }
    }
}

impl Moon {
    pub fn tick(&mut self, moon_size: f32, cycle_opacity: f32) {
        self.scale = moon_size / MOON_REFERENCE_SIZE;
        self.rotation += MOON_ROTATION_STEP;
        self.opacity = cycle_opacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_stars_lie_on_sphere() {
        let field = StarField::generate(1000, &mut StdRng::seed_from_u64(5));
        assert_eq!(field.positions().len(), 1000);
        for star in field.positions() {
            assert!((star.length() - STAR_SPHERE_RADIUS).abs() < 0.5);
        }
    }

    #[test]
    fn test_regenerate_replaces_field() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut field = StarField::generate(500, &mut rng);
        field.tick(1.0, 0.0, false);
        let generation = field.generation();

        field.regenerate(2500, &mut rng);

        assert_eq!(field.positions().len(), 2500);
        assert_eq!(field.rotation, 0.0);
        assert_ne!(field.generation(), generation);
    }

    #[test]
    fn test_star_opacity_follows_cycle_or_twinkles() {
        let mut field = StarField::default();
        field.tick(0.0, 0.7, false);
        assert_eq!(field.opacity, 0.7);

        field.tick(std::f32::consts::PI, 0.7, true);
        assert!((field.opacity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_moon_scales_with_size() {
        let mut moon = Moon::default();
        moon.tick(400.0, 0.25);
        moon.tick(100.0, 0.5);

        assert_eq!(moon.scale, 0.5);
        assert_eq!(moon.opacity, 0.5);
        assert!((moon.rotation - 2.0 * MOON_ROTATION_STEP).abs() < 1e-7);
    }
}
