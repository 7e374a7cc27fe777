pub mod driver;
pub mod launch;
pub mod physics;
pub mod rewards;
pub mod scoring;

use serde::{Deserialize, Serialize};

use chipshot_core::config::SimConfig;
use chipshot_core::error::{SnapshotError, decode_snapshot, encode_snapshot};
use chipshot_core::events::{SessionEvent, ShotResult, Termination};
use chipshot_core::kinematics::KinematicState;
use chipshot_core::launch_params::LaunchParameters;
use chipshot_core::observer::StepObserver;

use driver::{RealtimeDriver, fast_forward};
use launch::configure_launch;
use scoring::shot_result;

/// Where the session is in its launch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Idle,
    Flying,
    Finished,
}

/// Serializable session state mirrored to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub status: SessionStatus,
    pub params: LaunchParameters,
    pub ball: KinematicState,
    /// Steps simulated since launch, counted against the iteration cap.
    pub steps: u32,
    pub last_result: Option<ShotResult>,
}

/// One player's shot screen: launch, watch in real time or skip, then return
/// to the menu.
///
/// All simulation state is owned here and advanced only by explicit
/// commands; every command returns the events it produced.
pub struct LaunchSession {
    config: SimConfig,
    driver: RealtimeDriver,
    state: SessionState,
}

impl LaunchSession {
    pub fn new(config: SimConfig) -> Self {
        let ball = KinematicState::at_rest(config.launch.start);
        Self {
            driver: RealtimeDriver::from_config(&config.driver),
            state: SessionState {
                status: SessionStatus::Idle,
                params: LaunchParameters::default(),
                ball,
                steps: 0,
                last_result: None,
            },
            config,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status
    }

    pub fn ball(&self) -> &KinematicState {
        &self.state.ball
    }

    /// Replace the parameters used by the next launch. A flight in progress
    /// keeps the parameters it was launched with.
    pub fn set_params(&mut self, params: LaunchParameters) {
        if self.state.status == SessionStatus::Flying {
            tracing::debug!("Ignored parameter change during flight");
            return;
        }
        self.state.params = params;
    }

    pub fn params(&self) -> &LaunchParameters {
        &self.state.params
    }

    /// Start a new shot from the configured spawn point.
    pub fn launch(&mut self) -> Vec<SessionEvent> {
        if self.state.status != SessionStatus::Idle {
            tracing::debug!(status = ?self.state.status, "Rejected launch");
            return Vec::new();
        }

        self.state.ball = configure_launch(&self.state.params, &self.config.launch);
        self.state.steps = 0;
        self.state.last_result = None;
        self.state.status = SessionStatus::Flying;

        let initial_velocity = self.state.ball.velocity;
        tracing::debug!(
            vx = initial_velocity.x,
            vy = initial_velocity.y,
            "Shot launched"
        );
        vec![SessionEvent::Launched { initial_velocity }]
    }

    /// Advance one display frame of a flight in progress.
    pub fn frame(&mut self, observer: &mut dyn StepObserver) -> Vec<SessionEvent> {
        if self.state.status != SessionStatus::Flying {
            return Vec::new();
        }

        let budget = self.remaining_steps();
        let ball = self.take_ball();
        let outcome = self.driver.frame(
            ball,
            &self.state.params,
            &self.config.physics,
            budget,
            observer,
        );
        self.state.ball = outcome.state;
        self.state.steps += outcome.steps;

        if self.state.ball.stopped || self.remaining_steps() == 0 {
            let termination = if self.state.ball.stopped {
                Termination::Stopped
            } else {
                tracing::warn!(
                    steps = self.state.steps,
                    "Real-time flight hit iteration cap before the ball stopped"
                );
                Termination::IterationCap
            };
            return self.finish(termination);
        }
        Vec::new()
    }

    /// Run the current flight to completion without intermediate frames.
    pub fn skip(&mut self, observer: &mut dyn StepObserver) -> Vec<SessionEvent> {
        if self.state.status != SessionStatus::Flying {
            tracing::debug!(status = ?self.state.status, "Rejected skip");
            return Vec::new();
        }

        let budget = self.remaining_steps();
        let ball = self.take_ball();
        let result = fast_forward(
            ball,
            &self.state.params,
            &self.config.physics,
            budget,
            observer,
        );
        self.state.ball = result.state;
        self.state.steps += result.steps;
        self.finish(result.termination)
    }

    /// Abandon the shot screen: reset to an idle ball at the spawn point and
    /// ask the host to return to the menu.
    pub fn restart(&mut self) -> Vec<SessionEvent> {
        self.state.status = SessionStatus::Idle;
        self.state.ball = KinematicState::at_rest(self.config.launch.start);
        self.state.steps = 0;
        vec![SessionEvent::ReturnToMenu]
    }

    pub fn last_result(&self) -> Option<&ShotResult> {
        self.state.last_result.as_ref()
    }

    pub fn serialize_state(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_snapshot(&self.state)
    }

    pub fn apply_state(&mut self, data: &[u8]) -> Result<(), SnapshotError> {
        self.state = decode_snapshot(data)?;
        Ok(())
    }

    /// Move the ball out for a by-value step; the caller puts the successor back.
    fn take_ball(&mut self) -> KinematicState {
        let placeholder = KinematicState::at_rest(self.config.launch.start);
        std::mem::replace(&mut self.state.ball, placeholder)
    }

    fn remaining_steps(&self) -> u32 {
        self.config
            .driver
            .max_fast_forward_steps
            .saturating_sub(self.state.steps)
    }

    fn finish(&mut self, termination: Termination) -> Vec<SessionEvent> {
        let result = shot_result(&self.state.ball, self.state.steps, termination);
        tracing::debug!(
            distance = result.distance,
            bounces = result.bounces,
            steps = result.steps,
            "Shot finished"
        );
        self.state.last_result = Some(result.clone());
        self.state.status = SessionStatus::Finished;
        vec![SessionEvent::Finished { result }]
    }
}

impl Default for LaunchSession {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
