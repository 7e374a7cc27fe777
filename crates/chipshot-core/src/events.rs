use serde::{Deserialize, Serialize};

use crate::kinematics::Vec2;

/// Why a shot's simulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The ball came to rest on its own.
    Stopped,
    /// The fast-forward safety cap was reached first.
    IterationCap,
}

/// Final outcome of a shot, handed to the scoring collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotResult {
    /// Final horizontal distance. Can be negative under a strong headwind.
    pub distance: f32,
    pub final_position: Vec2,
    pub bounces: u32,
    pub steps: u32,
    pub termination: Termination,
}

/// Events emitted by a launch session in response to commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    Launched { initial_velocity: Vec2 },
    Finished { result: ShotResult },
    /// The player asked to leave the shot screen.
    ReturnToMenu,
}
