pub mod config;
pub mod error;
pub mod events;
pub mod kinematics;
pub mod launch_params;
pub mod observer;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::kinematics::KinematicState;
    use crate::launch_params::{LaunchAngle, LaunchParameters};
    use crate::observer::StepObserver;

    /// Launch parameters with an angle given directly in degrees.
    pub fn launch_params(power: f32, degrees: f32, wind: f32) -> LaunchParameters {
        LaunchParameters::new(power, LaunchAngle::Degrees(degrees), wind)
    }

    /// Observer that keeps a copy of every frame it is shown.
    #[derive(Debug, Default)]
    pub struct RecordingObserver {
        pub frames: Vec<KinematicState>,
    }

    impl StepObserver for RecordingObserver {
        fn on_frame(&mut self, state: &KinematicState) {
            self.frames.push(state.clone());
        }
    }

    // ================================================================
    // State invariant checks
    // ================================================================
    // Shared by the stepper, driver and session tests so that every path
    // that produces a state is held to the same rules.

    /// Assert the per-state invariants: on or above the ground, finite, and
    /// zero velocity once stopped.
    pub fn assert_state_invariants(state: &KinematicState) {
        assert!(
            state.position.y >= 0.0,
            "ball below ground: y = {}",
            state.position.y
        );
        assert!(
            state.position.x.is_finite() && state.position.y.is_finite(),
            "position must be finite: {:?}",
            state.position
        );
        if state.stopped {
            assert_eq!(
                (state.velocity.x, state.velocity.y),
                (0.0, 0.0),
                "stopped ball must have zero velocity"
            );
        }
    }

    /// Assert the invariants that relate a state to its successor.
    pub fn assert_transition_invariants(before: &KinematicState, after: &KinematicState) {
        assert_state_invariants(after);
        assert!(
            after.bounce_count >= before.bounce_count,
            "bounce count went backwards: {} -> {}",
            before.bounce_count,
            after.bounce_count
        );
        assert!(
            after.trail.len() >= before.trail.len(),
            "trail shrank: {} -> {}",
            before.trail.len(),
            after.trail.len()
        );
        assert_eq!(
            &after.trail[..before.trail.len()],
            &before.trail[..],
            "trail is append-only"
        );
        if before.stopped {
            assert_eq!(before, after, "stopped state must not change");
        }
    }

    /// Assert that consecutive trail points are more than `spacing` apart
    /// along at least one axis.
    pub fn assert_trail_spacing(state: &KinematicState, spacing: f32) {
        for pair in state.trail.windows(2) {
            let dx = (pair[1].x - pair[0].x).abs();
            let dy = (pair[1].y - pair[0].y).abs();
            assert!(
                dx > spacing || dy > spacing,
                "trail points too close: {:?} -> {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}
