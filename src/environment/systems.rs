use crate::core::camera::components::MainCamera;
use crate::environment::components::*;
use crate::environment::logic::{sun_transform, water_roughness, water_tint};
use crate::environment::resources::SkyReflection;
use crate::environment::{AMBIENT_BRIGHTNESS, SKY_RADIUS, SUN_ILLUMINANCE, WAVE_HEIGHT_PER_DISTORTION};
use crate::helpers::mesh::{point_cloud_mesh, set_positions};
use crate::helpers::to_color;
use crate::simulation::resources::{LastFrame, Parameters, SeaSimulation};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy_ocean::{SkyDomeBuilder, WaterSurfaceBuilder, WaterSurfaceConfig, sky_tint};
use seasim::celestial::{MOON_POSITION, MOON_RADIUS};

pub fn spawn_sun(mut commands: Commands, simulation: Res<SeaSimulation>) {
    commands.spawn((
        Sun,
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        sun_transform(simulation.environment().sun_direction),
    ));
}

pub fn spawn_sea_and_sky(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    params: Res<Parameters>,
    reflection: Res<SkyReflection>,
) {
    let water = WaterSurfaceBuilder::new(water_config(&params)).build();
    commands.spawn((
        WaterSurface,
        Mesh3d(meshes.add(water.mesh)),
        MeshMaterial3d(materials.add(water.material)),
    ));

    let sky = SkyDomeBuilder::new(SKY_RADIUS).with_color(reflection.0).build();
    commands.spawn((
        SkyDome,
        Mesh3d(meshes.add(sky.mesh)),
        MeshMaterial3d(materials.add(sky.material)),
    ));
}

pub fn spawn_celestial(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    simulation: Res<SeaSimulation>,
) {
    commands.spawn((
        Stars,
        Mesh3d(meshes.add(point_cloud_mesh(simulation.stars().positions()))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE.with_alpha(0.0),
            unlit: true,
            fog_enabled: false,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::default(),
    ));

    commands.spawn((
        MoonBody,
        Mesh3d(meshes.add(Sphere::new(MOON_RADIUS).mesh().uv(64, 64))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.85, 0.85, 0.8, 0.0),
            unlit: true,
            fog_enabled: false,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::from_translation(MOON_POSITION),
        Visibility::Hidden,
    ));
}

pub fn update_lighting(
    simulation: Res<SeaSimulation>,
    mut clear_color: ResMut<ClearColor>,
    mut ambient: ResMut<AmbientLight>,
    mut sun_q: Query<(&mut DirectionalLight, &mut Transform), With<Sun>>,
) {
    let environment = simulation.environment();
    let surface = simulation.surface();

    clear_color.0 = to_color(environment.background_color);
    ambient.brightness = AMBIENT_BRIGHTNESS * surface.ambient_intensity;

    for (mut light, mut transform) in sun_q.iter_mut() {
        light.illuminance = SUN_ILLUMINANCE * surface.directional_intensity;
        light.color = to_color(surface.sun_color);
        *transform = sun_transform(surface.sun_direction);
    }
}

/// Exponential fog on the camera while enabled, removed otherwise.
/// The component is only touched when the fog settings differ from what it holds.
pub fn update_fog(
    mut commands: Commands,
    simulation: Res<SeaSimulation>,
    mut cameras: Query<(Entity, Option<&mut DistanceFog>), With<MainCamera>>,
) {
    for (entity, current) in cameras.iter_mut() {
        match (simulation.surface().fog, current) {
            (Some(fog), Some(mut current)) => {
                let color = to_color(fog.color);
                if !fog_matches(&current, color, fog.density) {
                    current.color = color;
                    current.falloff = FogFalloff::Exponential {
                        density: fog.density,
                    };
                }
            }
            (Some(fog), None) => {
                commands.entity(entity).insert(DistanceFog {
                    color: to_color(fog.color),
                    falloff: FogFalloff::Exponential {
                        density: fog.density,
                    },
                    ..default()
                });
            }
            (None, Some(_)) => {
                commands.entity(entity).remove::<DistanceFog>();
            }
            (None, None) => {}
        }
    }
}

fn fog_matches(current: &DistanceFog, color: Color, density: f32) -> bool {
    current.color == color
        && matches!(current.falloff, FogFalloff::Exponential { density: d } if d == density)
}

/// Recolor the sky every tick; the mirrored copy only when the tick allowed it
pub fn refresh_sky(
    simulation: Res<SeaSimulation>,
    last_frame: Res<LastFrame>,
    mut reflection: ResMut<SkyReflection>,
    sky_q: Query<&MeshMaterial3d<StandardMaterial>, With<SkyDome>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let surface = simulation.surface();
    let tint = sky_tint(
        to_color(simulation.environment().background_color),
        to_color(surface.sun_color),
        surface.turbidity,
        surface.rayleigh,
    );

    for material in &sky_q {
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = tint;
        }
    }

    if last_frame.reflection_refreshed {
        reflection.0 = tint;
    }
}

pub fn animate_water(
    simulation: Res<SeaSimulation>,
    params: Res<Parameters>,
    reflection: Res<SkyReflection>,
    water_q: Query<(&Mesh3d, &MeshMaterial3d<StandardMaterial>), With<WaterSurface>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok((mesh, material)) = water_q.single() else {
        return;
    };
    let surface = simulation.surface();

    if let Some(mesh) = meshes.get_mut(&mesh.0) {
        *mesh = WaterSurfaceBuilder::new(water_config(&params))
            .with_time(surface.water_time)
            .build_mesh();
    }
    if let Some(material) = materials.get_mut(&material.0) {
        material.base_color = water_tint(to_color(surface.water_color), reflection.0);
        material.perceptual_roughness = water_roughness(surface.distortion_scale);
    }
}

pub fn update_stars(
    simulation: Res<SeaSimulation>,
    last_frame: Res<LastFrame>,
    mut stars_q: Query<(&mut Transform, &Mesh3d, &MeshMaterial3d<StandardMaterial>), With<Stars>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok((mut transform, mesh, material)) = stars_q.single_mut() else {
        return;
    };
    let stars = simulation.stars();

    if last_frame.stars_regenerated {
        if let Some(mesh) = meshes.get_mut(&mesh.0) {
            set_positions(mesh, stars.positions());
        }
    }
    transform.rotation = Quat::from_rotation_y(stars.rotation);
    if let Some(material) = materials.get_mut(&material.0) {
        material.base_color.set_alpha(stars.opacity);
    }
}

pub fn update_moon(
    simulation: Res<SeaSimulation>,
    mut moon_q: Query<
        (&mut Transform, &mut Visibility, &MeshMaterial3d<StandardMaterial>),
        With<MoonBody>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok((mut transform, mut visibility, material)) = moon_q.single_mut() else {
        return;
    };
    let moon = simulation.moon();

    transform.scale = Vec3::splat(moon.scale);
    transform.rotation = Quat::from_rotation_y(moon.rotation);
    *visibility = if moon.opacity > 0.0 {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    if let Some(material) = materials.get_mut(&material.0) {
        material.base_color.set_alpha(moon.opacity);
    }
}

fn water_config(params: &Parameters) -> WaterSurfaceConfig {
    WaterSurfaceConfig {
        wave_amplitude: params.distortion_scale * WAVE_HEIGHT_PER_DISTORTION,
        water_color: to_color(params.water_color),
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seasim::{ParameterStore, Simulation, SimulationTuning};

    fn fog_app(fog_enabled: bool) -> (App, Entity) {
        let mut params = ParameterStore {
            fog_enabled,
            ..Default::default()
        };
        let tuning = SimulationTuning {
            seed: Some(11),
            ..Default::default()
        };
        let simulation = Simulation::new(&mut params, tuning);

        let mut app = App::new();
        app.insert_resource(SeaSimulation(simulation))
            .add_systems(Update, update_fog);
        let camera = app.world_mut().spawn(MainCamera).id();
        (app, camera)
    }

    #[test]
    fn test_fog_inserted_once_while_enabled() {
        let (mut app, camera) = fog_app(true);
        app.update();
        let inserted = app.world().entity(camera).get_ref::<DistanceFog>().unwrap().last_changed();

        app.update();
        app.update();

        let fog = app.world().entity(camera).get_ref::<DistanceFog>().unwrap();
        assert_eq!(fog.last_changed(), inserted);
        assert!(matches!(fog.falloff, FogFalloff::Exponential { density } if density == 0.01));
    }

    #[test]
    fn test_fog_removed_when_disabled() {
        let (mut app, camera) = fog_app(false);
        app.world_mut().entity_mut(camera).insert(DistanceFog::default());

        app.update();

        assert!(app.world().get::<DistanceFog>(camera).is_none());
    }
}
