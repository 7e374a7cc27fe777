use chipshot_core::events::{ShotResult, Termination};
use chipshot_core::kinematics::KinematicState;

/// Summarize a finished shot.
///
/// The score is the final horizontal distance, whether the ball stopped on
/// its own or the iteration cap cut it off.
pub fn shot_result(state: &KinematicState, steps: u32, termination: Termination) -> ShotResult {
    ShotResult {
        distance: state.distance(),
        final_position: state.position,
        bounces: state.bounce_count,
        steps,
        termination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chipshot_core::kinematics::Vec2;

    #[test]
    fn distance_is_final_x() {
        let mut state = KinematicState::at_rest(Vec2::new(76.2, 0.0));
        state.bounce_count = 7;
        let result = shot_result(&state, 473, Termination::Stopped);
        assert_eq!(result.distance, 76.2);
        assert_eq!(result.bounces, 7);
        assert_eq!(result.steps, 473);
        assert_eq!(result.termination, Termination::Stopped);
    }

    #[test]
    fn capped_shot_scores_position_at_cap() {
        let mut state = KinematicState::launched(Vec2::new(0.5, 0.15), Vec2::new(2.0, 0.0));
        state.position = Vec2::new(310.5, 0.0);
        let result = shot_result(&state, 5000, Termination::IterationCap);
        assert_eq!(result.distance, 310.5);
        assert_eq!(result.termination, Termination::IterationCap);
    }

    #[test]
    fn headwind_can_score_negative() {
        let state = KinematicState::at_rest(Vec2::new(-3.5, 0.0));
        assert_eq!(shot_result(&state, 90, Termination::Stopped).distance, -3.5);
    }
}
