use bevy::input::keyboard::KeyCode;
use seasim::InputState;

/// Arrow keys and WASD, held-key semantics
pub fn steering_from_keys(pressed: impl Fn(KeyCode) -> bool) -> InputState {
    let any = |keys: [KeyCode; 2]| keys.into_iter().any(&pressed);
    InputState {
        forward: any([KeyCode::ArrowUp, KeyCode::KeyW]),
        backward: any([KeyCode::ArrowDown, KeyCode::KeyS]),
        left: any([KeyCode::ArrowLeft, KeyCode::KeyA]),
        right: any([KeyCode::ArrowRight, KeyCode::KeyD]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_no_keys_no_input() {
        assert_eq!(steering_from_keys(|_| false), InputState::default());
    }

    #[rstest]
    #[case(KeyCode::ArrowUp, true, false, false, false)]
    #[case(KeyCode::KeyW, true, false, false, false)]
    #[case(KeyCode::ArrowDown, false, true, false, false)]
    #[case(KeyCode::KeyS, false, true, false, false)]
    #[case(KeyCode::ArrowLeft, false, false, true, false)]
    #[case(KeyCode::KeyA, false, false, true, false)]
    #[case(KeyCode::ArrowRight, false, false, false, true)]
    #[case(KeyCode::KeyD, false, false, false, true)]
    #[case(KeyCode::Space, false, false, false, false)]
    fn test_single_key(
        #[case] key: KeyCode,
        #[case] forward: bool,
        #[case] backward: bool,
        #[case] left: bool,
        #[case] right: bool,
    ) {
        let input = steering_from_keys(|k| k == key);
        assert_eq!(
            input,
            InputState {
                forward,
                backward,
                left,
                right
            }
        );
    }

    #[test]
    fn test_held_keys_combine() {
        let input = steering_from_keys(|k| matches!(k, KeyCode::KeyW | KeyCode::ArrowRight));
        assert!(input.forward && input.right);
        assert!(!input.backward && !input.left);
    }
}
