use crate::effects::components::*;
use crate::effects::logic::{gull_transform, spray_positions};
use crate::helpers::mesh::{point_cloud_mesh, polyline_mesh, set_positions};
use crate::simulation::resources::SeaSimulation;
use bevy::prelude::*;

/// The pool is created lazily, so the cloud appears the first frame it exists
pub fn spawn_spray(
    mut commands: Commands,
    simulation: Res<SeaSimulation>,
    spray_q: Query<(), With<SprayCloud>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !spray_q.is_empty() {
        return;
    }
    let Some(pool) = simulation.spray().pool() else {
        return;
    };

    commands.spawn((
        SprayCloud,
        Mesh3d(meshes.add(point_cloud_mesh(&spray_positions(pool)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE.with_alpha(0.6),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::default(),
        Visibility::Hidden,
    ));
}

pub fn sync_spray(
    simulation: Res<SeaSimulation>,
    mut spray_q: Query<(&Mesh3d, &mut Visibility), With<SprayCloud>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Ok((mesh, mut visibility)) = spray_q.single_mut() else {
        return;
    };
    let spray = simulation.spray();
    let (Some(pool), true) = (spray.pool(), spray.is_visible()) else {
        *visibility = Visibility::Hidden;
        return;
    };

    *visibility = Visibility::Inherited;
    if let Some(mesh) = meshes.get_mut(&mesh.0) {
        set_positions(mesh, &spray_positions(pool));
    }
}

/// Replace every gull entity whenever the flock was rebuilt or cleared
pub fn respawn_flock(
    mut commands: Commands,
    simulation: Res<SeaSimulation>,
    mut spawned_generation: Local<Option<u32>>,
    gull_q: Query<Entity, With<Seagull>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let flock = simulation.flock();
    if *spawned_generation == Some(flock.generation()) {
        return;
    }

    for entity in &gull_q {
        commands.entity(entity).despawn();
    }

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });
    for (index, actor) in flock.actors().iter().enumerate() {
        let transform = flock
            .poses()
            .get(index)
            .map(gull_transform)
            .unwrap_or_default();
        commands.spawn((
            Seagull(index),
            Mesh3d(meshes.add(polyline_mesh(&actor.outline()))),
            MeshMaterial3d(material.clone()),
            transform,
        ));
    }
    debug!("Spawned {} gulls", flock.actors().len());
    *spawned_generation = Some(flock.generation());
}

pub fn animate_flock(
    simulation: Res<SeaSimulation>,
    mut gull_q: Query<(&Seagull, &mut Transform, &Mesh3d)>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let flock = simulation.flock();
    for (gull, mut transform, mesh) in gull_q.iter_mut() {
        let (Some(actor), Some(pose)) = (flock.actors().get(gull.0), flock.poses().get(gull.0)) else {
            continue;
        };
        *transform = gull_transform(pose);
        if let Some(mesh) = meshes.get_mut(&mesh.0) {
            set_positions(mesh, &actor.outline());
        }
    }
}
