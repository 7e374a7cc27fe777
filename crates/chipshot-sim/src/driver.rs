use chipshot_core::config::{DriverConfig, PhysicsConfig};
use chipshot_core::events::Termination;
use chipshot_core::kinematics::KinematicState;
use chipshot_core::launch_params::LaunchParameters;
use chipshot_core::observer::StepObserver;

use crate::physics::step;

/// Result of one real-time frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    pub state: KinematicState,
    /// Steps actually simulated this frame (fewer than requested once stopped).
    pub steps: u32,
}

/// Drives the stepper once per display refresh.
///
/// Several fixed steps may run per frame to speed up the perceived flight
/// without changing the physical timestep. Cancelling is just not calling
/// [`RealtimeDriver::frame`] again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealtimeDriver {
    steps_per_frame: u32,
}

impl RealtimeDriver {
    pub fn new(steps_per_frame: u32) -> Self {
        Self {
            steps_per_frame: steps_per_frame.max(1),
        }
    }

    pub fn from_config(config: &DriverConfig) -> Self {
        Self::new(config.steps_per_frame)
    }

    pub fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    /// Simulate one frame, never more than `step_budget` steps, then show the
    /// result to `observer`.
    pub fn frame(
        &self,
        mut state: KinematicState,
        params: &LaunchParameters,
        physics: &PhysicsConfig,
        step_budget: u32,
        observer: &mut dyn StepObserver,
    ) -> FrameOutcome {
        let mut steps = 0;
        while steps < self.steps_per_frame.min(step_budget) && !state.stopped {
            state = step(state, params, physics);
            steps += 1;
        }
        observer.on_frame(&state);
        FrameOutcome { state, steps }
    }
}

impl Default for RealtimeDriver {
    fn default() -> Self {
        Self::from_config(&DriverConfig::default())
    }
}

/// Result of a fast-forward run.
#[derive(Debug, Clone, PartialEq)]
pub struct FastForward {
    pub state: KinematicState,
    pub steps: u32,
    pub termination: Termination,
}

/// Step in a tight loop until the ball stops or `max_steps` is reached.
///
/// Nothing is rendered in between; `observer` sees only the final state.
/// Hitting the cap is not an error: the state at cap-out is the result.
pub fn fast_forward(
    mut state: KinematicState,
    params: &LaunchParameters,
    physics: &PhysicsConfig,
    max_steps: u32,
    observer: &mut dyn StepObserver,
) -> FastForward {
    let mut steps = 0;
    while !state.stopped && steps < max_steps {
        state = step(state, params, physics);
        steps += 1;
    }

    let termination = if state.stopped {
        Termination::Stopped
    } else {
        tracing::warn!(
            steps,
            x = state.position.x,
            vx = state.velocity.x,
            "Fast-forward hit iteration cap before the ball stopped"
        );
        Termination::IterationCap
    };

    observer.on_frame(&state);
    FastForward {
        state,
        steps,
        termination,
    }
}
