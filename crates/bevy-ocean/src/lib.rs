//! # Bevy Ocean Crate
//!
//! Stateless builders for a sea scene on Bevy 0.17: an animated water plane, a
//! foam wake strip and an inverted sky dome.
//!
//! ## Usage
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_ocean::*;
//!
//! fn setup(
//!     mut commands: Commands,
//!     mut meshes: ResMut<Assets<Mesh>>,
//!     mut materials: ResMut<Assets<StandardMaterial>>,
//! ) {
//!     let water = WaterSurfaceBuilder::new(WaterSurfaceConfig::default())
//!         .with_time(0.0)
//!         .build();
//!
//!     commands.spawn((
//!         Mesh3d(meshes.add(water.mesh)),
//!         MeshMaterial3d(materials.add(water.material)),
//!     ));
//! }
//! ```

use bevy::asset::RenderAssetUsages;
use bevy::color::{Color, LinearRgba};
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};
use bevy::pbr::StandardMaterial;
use bevy::prelude::AlphaMode;

/// Configuration for the water plane - your game provides this
#[derive(Debug, Clone, Copy)]
pub struct WaterSurfaceConfig {
    /// Edge length of the square plane
    pub size: f32,
    /// Number of grid subdivisions per side
    pub grid_size: u32,
    /// Height of the water at rest
    pub sea_level: f32,
    /// Wave height amplitude
    pub wave_amplitude: f32,
    /// Waves per unit length
    pub wave_frequency: f32,
    /// Base water color
    pub water_color: Color,
}

impl Default for WaterSurfaceConfig {
    fn default() -> Self {
        Self {
            size: 10_000.0,
            grid_size: 96,
            sea_level: 0.0,
            wave_amplitude: 0.5,
            wave_frequency: 0.02,
            water_color: Color::srgb(0.0, 0.118, 0.059),
        }
    }
}

/// The output of a builder - ready to render
pub struct OceanOutput {
    pub mesh: Mesh,
    pub material: StandardMaterial,
}

/// Builder for the water plane
pub struct WaterSurfaceBuilder {
    config: WaterSurfaceConfig,
    time: f32,
}

impl WaterSurfaceBuilder {
    pub fn new(config: WaterSurfaceConfig) -> Self {
        Self { config, time: 0.0 }
    }

    /// Set the water clock used to phase the waves
    pub fn with_time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    pub fn build(self) -> OceanOutput {
        OceanOutput {
            mesh: self.build_mesh(),
            material: water_material(self.config.water_color),
        }
    }

    /// Height of the surface at `(x, z)`
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let k = self.config.wave_frequency;
        let t = self.time;
        self.config.sea_level
            + self.config.wave_amplitude
                * ((x * k + t).sin() * 0.6 + (z * k * 1.3 - t * 0.8).sin() * 0.4)
    }

    /// Only the mesh, for refreshing an existing asset in place
    pub fn build_mesh(&self) -> Mesh {
        let size = self.config.grid_size.max(1);
        let half = self.config.size / 2.0;
        let step = self.config.size / size as f32;
        // Central difference for normals
        let eps = step * 0.5;

        let mut positions = Vec::with_capacity(((size + 1) * (size + 1)) as usize);
        let mut normals = Vec::with_capacity(positions.capacity());
        let mut uvs = Vec::with_capacity(positions.capacity());
        let mut indices = Vec::with_capacity((size * size * 6) as usize);

        for row in 0..=size {
            for col in 0..=size {
                let x = -half + col as f32 * step;
                let z = -half + row as f32 * step;
                let y = self.height_at(x, z);

                let dx = self.height_at(x + eps, z) - self.height_at(x - eps, z);
                let dz = self.height_at(x, z + eps) - self.height_at(x, z - eps);
                let normal = bevy::math::Vec3::new(-dx, 2.0 * eps, -dz).normalize();

                positions.push([x, y, z]);
                normals.push(normal.to_array());
                uvs.push([col as f32 / size as f32, row as f32 / size as f32]);
            }
        }

        for row in 0..size {
            for col in 0..size {
                let i0 = row * (size + 1) + col;
                let i1 = i0 + 1;
                let i2 = i0 + (size + 1);
                let i3 = i2 + 1;

                indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
            }
        }

        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_indices(Indices::U32(indices));
        mesh
    }
}

pub fn water_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        metallic: 0.0,
        perceptual_roughness: 0.1,
        reflectance: 0.8,
        double_sided: true,
        cull_mode: None,
        ..Default::default()
    }
}

/// Flat strip lying in the XZ plane, centred on the origin, long side along Z
pub fn wake_plane(width: f32, length: f32, color: Color) -> OceanOutput {
    let (hw, hl) = (width / 2.0, length / 2.0);
    let positions = vec![[-hw, 0.0, -hl], [hw, 0.0, -hl], [hw, 0.0, hl], [-hw, 0.0, hl]];
    let normals = vec![[0.0, 1.0, 0.0]; 4];
    let uvs = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(vec![0, 2, 1, 0, 3, 2]));

    OceanOutput {
        mesh,
        material: StandardMaterial {
            base_color: color,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..Default::default()
        },
    }
}

/// Builder for the sky dome: a sphere seen from inside
pub struct SkyDomeBuilder {
    radius: f32,
    segments: u32,
    color: Color,
}

impl SkyDomeBuilder {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            segments: 32,
            color: Color::WHITE,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn build(self) -> OceanOutput {
        OceanOutput {
            mesh: self.build_mesh(),
            material: StandardMaterial {
                base_color: self.color,
                unlit: true,
                fog_enabled: false,
                cull_mode: None,
                ..Default::default()
            },
        }
    }

    fn build_mesh(&self) -> Mesh {
        let size = self.segments.max(3);
        let mut positions = Vec::new();
        let mut normals = Vec::new();
        let mut uvs = Vec::new();
        let mut indices = Vec::new();

        for y in 0..=size {
            for x in 0..=size {
                let u = x as f32 / size as f32;
                let v = y as f32 / size as f32;

                let theta = u * std::f32::consts::TAU;
                let phi = v * std::f32::consts::PI;
                let dir = [phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin()];

                positions.push(dir.map(|c| c * self.radius));
                // Facing inwards
                normals.push(dir.map(|c| -c));
                uvs.push([u, v]);
            }
        }

        for y in 0..size {
            for x in 0..size {
                let i0 = y * (size + 1) + x;
                let i1 = i0 + 1;
                let i2 = i0 + (size + 1);
                let i3 = i2 + 1;

                // Reversed winding so the inside is the front face
                indices.extend_from_slice(&[i0, i1, i2, i1, i3, i2]);
            }
        }

        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_indices(Indices::U32(indices));
        mesh
    }
}

/// Sky tint from the atmosphere parameters.
///
/// Rayleigh scattering pushes towards blue, turbidity washes the color out
/// towards white haze and the sun color tints the whole dome.
pub fn sky_tint(background: Color, sun_color: Color, turbidity: f32, rayleigh: f32) -> Color {
    let base = background.to_linear();
    let sun = sun_color.to_linear();
    let haze = (turbidity / 20.0).clamp(0.0, 1.0) * 0.3;
    let blue = (rayleigh / 4.0).clamp(0.0, 1.0) * 0.15;

    let mix = |channel: f32, sun: f32| (channel * (1.0 - haze) + haze) * (0.7 + 0.3 * sun);
    Color::from(LinearRgba::new(
        mix(base.red, sun.red),
        mix(base.green, sun.green),
        mix(base.blue, sun.blue) + blue,
        1.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_mesh_vertex_count() {
        let config = WaterSurfaceConfig {
            grid_size: 4,
            ..Default::default()
        };
        let mesh = WaterSurfaceBuilder::new(config).build_mesh();
        assert_eq!(mesh.count_vertices(), 25);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(96));
    }

    #[test]
    fn test_water_height_stays_within_amplitude() {
        let config = WaterSurfaceConfig::default();
        let builder = WaterSurfaceBuilder::new(config).with_time(3.0);
        for i in 0..100 {
            let h = builder.height_at(i as f32 * 13.0, i as f32 * -7.0);
            assert!((h - config.sea_level).abs() <= config.wave_amplitude + 1e-4);
        }
    }

    #[test]
    fn test_wake_plane_is_flat() {
        let wake = wake_plane(5.0, 20.0, Color::WHITE);
        assert_eq!(wake.mesh.count_vertices(), 4);
        assert_eq!(wake.material.alpha_mode, AlphaMode::Blend);
    }
}
