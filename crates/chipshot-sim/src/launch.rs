use chipshot_core::config::LaunchConfig;
use chipshot_core::kinematics::{KinematicState, Vec2};
use chipshot_core::launch_params::LaunchParameters;

/// Initial launch velocity for the given parameters.
pub fn launch_velocity(params: &LaunchParameters, config: &LaunchConfig) -> Vec2 {
    let speed = params.power * config.speed_scale;
    let angle = params.angle.radians();
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}

/// Build the initial state of a shot. Every input is accepted; negative power
/// simply launches backwards.
pub fn configure_launch(params: &LaunchParameters, config: &LaunchConfig) -> KinematicState {
    KinematicState::launched(config.start, launch_velocity(params, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chipshot_core::launch_params::LaunchAngle;
    use chipshot_core::test_helpers::launch_params;

    #[test]
    fn forty_five_degree_launch_splits_speed_evenly() {
        let state = configure_launch(&launch_params(15.0, 45.0, 0.0), &LaunchConfig::default());
        let expected = 15.0 * 1.5 * std::f32::consts::FRAC_1_SQRT_2;
        assert!((state.velocity.x - expected).abs() < 1e-4);
        assert!((state.velocity.y - expected).abs() < 1e-4);
        assert!((state.velocity.x - 15.9).abs() < 0.05);
    }

    #[test]
    fn initial_state_is_offset_and_fresh() {
        let state = configure_launch(&launch_params(10.0, 30.0, 2.0), &LaunchConfig::default());
        assert_eq!(state.position, Vec2::new(0.5, 0.15));
        assert_eq!(state.trail, vec![Vec2::new(0.5, 0.15)]);
        assert_eq!(state.bounce_count, 0);
        assert!(!state.stopped);
    }

    #[test]
    fn loft_uses_affine_angle() {
        // Loft 50 -> 45 degrees.
        let params = LaunchParameters::new(20.0, LaunchAngle::Loft(50.0), 0.0);
        let v = launch_velocity(&params, &LaunchConfig::default());
        assert!((v.x - v.y).abs() < 1e-4);
        assert!((v.length() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn origin_start_preset() {
        let config = LaunchConfig {
            start: Vec2::ZERO,
            ..LaunchConfig::default()
        };
        let state = configure_launch(&launch_params(10.0, 45.0, 0.0), &config);
        assert_eq!(state.position, Vec2::ZERO);
        assert_eq!(state.trail, vec![Vec2::ZERO]);
    }

    #[test]
    fn negative_power_launches_backwards() {
        let state = configure_launch(&launch_params(-5.0, 45.0, 0.0), &LaunchConfig::default());
        assert!(state.velocity.x < 0.0);
        assert!(state.velocity.y < 0.0);
        assert!(!state.stopped);
    }

    #[test]
    fn zero_power_has_no_velocity() {
        let state = configure_launch(&launch_params(0.0, 60.0, 0.0), &LaunchConfig::default());
        assert_eq!(state.velocity.length(), 0.0);
    }
}
