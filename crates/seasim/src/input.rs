use glam::Vec3;

/// Logical steering actions, held-key semantics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub const FORWARD: InputState = InputState {
        forward: true,
        backward: false,
        left: false,
        right: false,
    };

    /// True while any directional action is held
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Steering input that keeps the ship inside the `±boundary` square.
    ///
    /// Whichever edge is exceeded, the ship is pushed back across it; inside the
    /// square it simply sails forward (towards -Z).
    pub fn auto_sail(position: Vec3, boundary: f32) -> InputState {
        let mut input = InputState::default();

        if position.x > boundary {
            input.left = true;
        } else if position.x < -boundary {
            input.right = true;
        }

        if position.z < -boundary {
            input.backward = true;
        } else {
            input.forward = true;
        }

        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any() {
        assert!(!InputState::default().any());
        assert!(InputState::FORWARD.any());
        assert!(
            InputState {
                right: true,
                ..Default::default()
            }
            .any()
        );
    }

    #[test]
    fn test_auto_sail_inside_bounds_goes_forward() {
        let input = InputState::auto_sail(Vec3::new(10.0, -7.8, -40.0), 100.0);
        assert_eq!(input, InputState::FORWARD);
    }

    #[test]
    fn test_auto_sail_pushes_away_from_edges() {
        let east = InputState::auto_sail(Vec3::new(120.0, 0.0, 0.0), 100.0);
        assert!(east.left && !east.right && east.forward);

        let west = InputState::auto_sail(Vec3::new(-120.0, 0.0, 0.0), 100.0);
        assert!(west.right && !west.left);

        let north = InputState::auto_sail(Vec3::new(0.0, 0.0, -130.0), 100.0);
        assert!(north.backward && !north.forward);

        let south = InputState::auto_sail(Vec3::new(0.0, 0.0, 130.0), 100.0);
        assert!(south.forward && !south.backward);
    }
}
