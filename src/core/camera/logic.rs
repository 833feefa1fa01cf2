use bevy::camera::PerspectiveProjection;
use bevy::math::{Vec2, Vec3};
use bevy::transform::components::Transform;
use seasim::camera::{OrbitInput, Projection};

/// Radians of orbit per pixel of mouse drag
pub const ROTATE_SPEED: f32 = 0.005;
/// Fraction of the distance covered by one wheel notch
pub const ZOOM_STEP: f32 = 0.1;
const MIN_ZOOM_FACTOR: f32 = 0.1;

pub struct OrbitGesture {
    pub rotate_pressed: bool,
    pub mouse_delta: Vec2,
    pub wheel_delta: f32,
}

/// Turn one frame of mouse activity into an orbit step.
/// Dragging right swings the camera left around the target, dragging down raises it.
pub fn orbit_input(gesture: &OrbitGesture) -> OrbitInput {
    let (yaw, pitch) = if gesture.rotate_pressed {
        (
            -gesture.mouse_delta.x * ROTATE_SPEED,
            -gesture.mouse_delta.y * ROTATE_SPEED,
        )
    } else {
        (0.0, 0.0)
    };

    OrbitInput {
        yaw,
        pitch,
        zoom: (1.0 - gesture.wheel_delta * ZOOM_STEP).max(MIN_ZOOM_FACTOR),
    }
}

pub fn rig_transform(position: Vec3, look_at: Vec3) -> Transform {
    Transform::from_translation(position).looking_at(look_at, Vec3::Y)
}

pub fn perspective(projection: &Projection) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: projection.fov_deg.to_radians(),
        aspect_ratio: projection.aspect,
        near: projection.near,
        far: projection.far,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn idle() -> OrbitGesture {
        OrbitGesture {
            rotate_pressed: false,
            mouse_delta: Vec2::ZERO,
            wheel_delta: 0.0,
        }
    }

    #[test]
    fn test_no_input_is_idle() {
        assert!(orbit_input(&idle()).is_idle());
    }

    #[rstest]
    #[case(100.0, 0.0, -0.5, 0.0)]
    #[case(0.0, 100.0, 0.0, -0.5)]
    #[case(-40.0, 20.0, 0.2, -0.1)]
    fn test_drag_rotates(
        #[case] dx: f32,
        #[case] dy: f32,
        #[case] expected_yaw: f32,
        #[case] expected_pitch: f32,
    ) {
        let gesture = OrbitGesture {
            rotate_pressed: true,
            mouse_delta: Vec2::new(dx, dy),
            ..idle()
        };

        let input = orbit_input(&gesture);

        assert!((input.yaw - expected_yaw).abs() < 1e-5, "yaw was {}", input.yaw);
        assert!((input.pitch - expected_pitch).abs() < 1e-5, "pitch was {}", input.pitch);
        assert_eq!(input.zoom, 1.0);
    }

    #[test]
    fn test_drag_without_button_does_nothing() {
        let gesture = OrbitGesture {
            mouse_delta: Vec2::new(100.0, 100.0),
            ..idle()
        };
        assert!(orbit_input(&gesture).is_idle());
    }

    #[rstest]
    #[case(1.0, 0.9)] // scroll up zooms in
    #[case(-2.0, 1.2)] // scroll down zooms out
    #[case(50.0, 0.1)] // never inverts the distance
    fn test_wheel_zoom(#[case] wheel: f32, #[case] expected_zoom: f32) {
        let gesture = OrbitGesture {
            wheel_delta: wheel,
            ..idle()
        };
        let input = orbit_input(&gesture);
        assert!((input.zoom - expected_zoom).abs() < 1e-5);
    }

    #[test]
    fn test_rig_transform_faces_target() {
        let transform = rig_transform(Vec3::new(0.0, 10.0, 30.0), Vec3::ZERO);
        let forward = transform.forward();
        let expected = (Vec3::ZERO - Vec3::new(0.0, 10.0, 30.0)).normalize();
        assert!(forward.dot(expected) > 0.9999);
    }

    #[test]
    fn test_perspective_from_projection() {
        let projection = perspective(&Projection::default());
        assert!((projection.fov - 75.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(projection.near, 0.1);
        assert_eq!(projection.far, 10_000.0);
    }
}
