use crate::helpers::to_color;
use crate::loading::ShipAssets;
use crate::ship::components::*;
use crate::ship::logic::{bounds_size, world_corners};
use crate::ship::{SHIP_SCALE, WAKE_LENGTH, WAKE_WIDTH};
use crate::simulation::events::ShipModelReady;
use crate::simulation::resources::{Parameters, SeaSimulation};
use bevy::camera::primitives::Aabb;
use bevy::prelude::*;
use bevy_ocean::wake_plane;
use seasim::color::Rgb;

pub fn spawn_ship(mut commands: Commands, assets: Res<ShipAssets>, simulation: Res<SeaSimulation>) {
    commands.spawn((
        Ship,
        SceneRoot(assets.ship.clone()),
        Transform::from_translation(simulation.vehicle().position)
            .with_scale(Vec3::splat(SHIP_SCALE)),
        Visibility::Hidden,
    ));
}

/// Wait for the ship scene to have bounds, then report its size and tag its meshes.
pub fn measure_ship(
    mut commands: Commands,
    mut measured: Local<bool>,
    ship_q: Query<Entity, With<Ship>>,
    children_q: Query<&Children>,
    mesh_q: Query<(&Aabb, &GlobalTransform, Has<MeshMaterial3d<StandardMaterial>>), With<Mesh3d>>,
    mut ready: MessageWriter<ShipModelReady>,
) {
    if *measured {
        return;
    }
    let Ok(ship) = ship_q.single() else {
        return;
    };

    let mut corners = Vec::new();
    let mut hull = Vec::new();
    for entity in children_q.iter_descendants(ship) {
        let Ok((aabb, transform, has_material)) = mesh_q.get(entity) else {
            continue;
        };
        corners.extend(world_corners(
            aabb.center.into(),
            aabb.half_extents.into(),
            &transform.affine(),
        ));
        if has_material {
            hull.push(entity);
        }
    }

    let Some(size) = bounds_size(corners) else {
        return;
    };
    for entity in &hull {
        commands.entity(*entity).insert(HullMesh);
    }
    info!("Ship measured: size {size}, {} hull meshes", hull.len());
    ready.write(ShipModelReady { size });
    *measured = true;
}

pub fn sync_ship_transform(
    simulation: Res<SeaSimulation>,
    mut ship_q: Query<(&mut Transform, &mut Visibility), With<Ship>>,
) {
    let Ok((mut transform, mut visibility)) = ship_q.single_mut() else {
        return;
    };
    let vehicle = simulation.vehicle();
    if !vehicle.is_present() {
        *visibility = Visibility::Hidden;
        return;
    }

    *visibility = Visibility::Inherited;
    transform.translation = vehicle.position;
    transform.rotation = vehicle.orientation.to_quat();
}

/// Repaint the hull whenever the color changes or new hull meshes were tagged
pub fn paint_hull(
    params: Res<Parameters>,
    mut applied: Local<Option<Rgb>>,
    new_hull: Query<(), Added<HullMesh>>,
    hull_q: Query<&MeshMaterial3d<StandardMaterial>, With<HullMesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if *applied == Some(params.ship_color) && new_hull.is_empty() {
        return;
    }

    for material in &hull_q {
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = to_color(params.ship_color);
            material.metallic = 0.7;
            material.perceptual_roughness = 0.3;
        }
    }
    *applied = Some(params.ship_color);
}

pub fn spawn_wake(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let wake = wake_plane(WAKE_WIDTH, WAKE_LENGTH, Color::WHITE);
    commands.spawn((
        Wake,
        Mesh3d(meshes.add(wake.mesh)),
        MeshMaterial3d(materials.add(wake.material)),
        Transform::default(),
        Visibility::Hidden,
    ));
}

pub fn sync_wake(
    simulation: Res<SeaSimulation>,
    mut wake_q: Query<(&mut Transform, &mut Visibility, &MeshMaterial3d<StandardMaterial>), With<Wake>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok((mut transform, mut visibility, material)) = wake_q.single_mut() else {
        return;
    };
    let wake = simulation.wake();
    if !wake.visible {
        *visibility = Visibility::Hidden;
        return;
    }

    *visibility = Visibility::Inherited;
    transform.translation = wake.position;
    transform.rotation = Quat::from_rotation_y(wake.heading);
    if let Some(material) = materials.get_mut(&material.0) {
        material.base_color.set_alpha(wake.opacity);
    }
}
