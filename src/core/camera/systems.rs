use crate::core::camera::components::MainCamera;
use crate::core::camera::logic::{OrbitGesture, orbit_input, perspective, rig_transform};
use crate::ship::components::Ship;
use crate::simulation::resources::SeaSimulation;
use bevy::input::ButtonInput;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::log::info;
use bevy::prelude::*;
use bevy::window::WindowResized;
use bevy_egui::EguiContexts;
use seasim::camera::CameraParent;

pub fn spawn_camera(mut commands: Commands, simulation: Res<SeaSimulation>) {
    let rig = simulation.camera();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(perspective(simulation.projection())),
        rig_transform(rig.position, rig.look_at),
        MainCamera,
    ));

    info!("Camera spawned");
}

pub fn orbit_camera_control(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut simulation: ResMut<SeaSimulation>,
) {
    let mut mouse_delta = Vec2::ZERO;
    for ev in mouse_motion.read() {
        mouse_delta += ev.delta;
    }

    let mut wheel_delta = 0.0;
    for ev in mouse_wheel.read() {
        wheel_delta += ev.y;
    }

    // Drags and scrolls over the control panel belong to the panel
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.is_pointer_over_area() || ctx.is_using_pointer() {
            return;
        }
    }

    let input = orbit_input(&OrbitGesture {
        rotate_pressed: mouse_input.pressed(MouseButton::Left),
        mouse_delta,
        wheel_delta,
    });
    if !input.is_idle() {
        simulation.orbit_camera(&input);
    }
}

pub fn apply_window_resize(
    mut resized: MessageReader<WindowResized>,
    mut simulation: ResMut<SeaSimulation>,
    mut camera_q: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };
    simulation.on_resize(last.width, last.height);

    let Ok(mut projection) = camera_q.single_mut() else {
        return;
    };
    *projection = Projection::Perspective(perspective(simulation.projection()));
}

/// Mirror the camera rig: owner first, then the local transform.
///
/// `ChildOf` holds a single parent, so moving the camera between the ship and
/// the scene root replaces the old link instead of adding a second one.
pub fn sync_camera_rig(
    mut commands: Commands,
    simulation: Res<SeaSimulation>,
    ship_q: Query<Entity, With<Ship>>,
    mut camera_q: Query<(Entity, &mut Transform, Option<&ChildOf>), With<MainCamera>>,
) {
    let Ok((camera, mut transform, child_of)) = camera_q.single_mut() else {
        return;
    };
    let rig = simulation.camera();

    let wanted_parent = match rig.parent {
        CameraParent::Vehicle => ship_q.single().ok(),
        CameraParent::SceneRoot => None,
    };
    let current_parent = child_of.map(ChildOf::parent);

    if wanted_parent != current_parent {
        match wanted_parent {
            Some(ship) => {
                commands.entity(camera).insert(ChildOf(ship));
            }
            None => {
                commands.entity(camera).remove::<ChildOf>();
            }
        }
    }

    *transform = rig_transform(rig.position, rig.look_at);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::resources::Parameters;
    use seasim::camera::CameraMode;
    use seasim::{InputState, ParameterStore, Simulation, SimulationTuning};

    fn test_app() -> (App, Entity, Entity) {
        let mut params = ParameterStore::default();
        let tuning = SimulationTuning {
            seed: Some(7),
            ..Default::default()
        };
        let mut simulation = Simulation::new(&mut params, tuning);
        simulation.on_model_ready(Vec3::new(10.0, 20.0, 60.0)).unwrap();

        let mut app = App::new();
        app.insert_resource(Parameters(params))
            .insert_resource(SeaSimulation(simulation))
            .add_systems(Update, sync_camera_rig);

        let ship = app.world_mut().spawn((Ship, Transform::default())).id();
        let camera = app.world_mut().spawn((MainCamera, Transform::default())).id();
        (app, ship, camera)
    }

    fn select_mode(app: &mut App, mode: CameraMode) {
        app.world_mut()
            .resource_scope(|world, mut simulation: Mut<SeaSimulation>| {
                let mut params = world.resource_mut::<Parameters>();
                params.camera_mode = mode;
                simulation.tick(&mut params.0, &InputState::default(), 1.0 / 60.0);
            });
        app.update();
    }

    fn parent_of(app: &App, entity: Entity) -> Option<Entity> {
        app.world().get::<ChildOf>(entity).map(ChildOf::parent)
    }

    fn ship_has_child(app: &App, ship: Entity, camera: Entity) -> bool {
        app.world()
            .get::<Children>(ship)
            .is_some_and(|children| children.contains(&camera))
    }

    #[test]
    fn test_first_person_parents_camera_to_ship() {
        let (mut app, ship, camera) = test_app();

        select_mode(&mut app, CameraMode::FirstPerson);

        assert_eq!(parent_of(&app, camera), Some(ship));
        assert!(ship_has_child(&app, ship, camera));
        let transform = app.world().get::<Transform>(camera).unwrap();
        assert_eq!(transform.translation, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn test_leaving_first_person_detaches_camera() {
        let (mut app, ship, camera) = test_app();
        select_mode(&mut app, CameraMode::FirstPerson);

        select_mode(&mut app, CameraMode::Orbit);

        assert_eq!(parent_of(&app, camera), None);
        assert!(!ship_has_child(&app, ship, camera));
        let transform = app.world().get::<Transform>(camera).unwrap();
        assert_eq!(transform.translation, Vec3::new(0.0, 10.0, 30.0));
    }

    #[test]
    fn test_follow_keeps_camera_on_root() {
        let (mut app, ship, camera) = test_app();
        select_mode(&mut app, CameraMode::FirstPerson);
        select_mode(&mut app, CameraMode::Follow);
        app.update();

        assert_eq!(parent_of(&app, camera), None);
        assert!(!ship_has_child(&app, ship, camera));
    }
}
