use bevy::asset::RenderAssetUsages;
use bevy::math::Vec3;
use bevy::mesh::{Mesh, PrimitiveTopology};

/// Open polyline through `points`, drawn as line segments in order.
/// The positions attribute can be rewritten in place to animate the line.
pub fn polyline_mesh(points: &[Vec3]) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions(points));
    mesh
}

/// One render point per position (stars, spray)
pub fn point_cloud_mesh(points: &[Vec3]) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions(points));
    mesh
}

/// Replace the positions of a line or point mesh, keeping its topology
pub fn set_positions(mesh: &mut Mesh, points: &[Vec3]) {
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions(points));
}

fn positions(points: &[Vec3]) -> Vec<[f32; 3]> {
    points.iter().map(|p| p.to_array()).collect()
}
