use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::kinematics::Vec2;

/// Gravity acceleration (units/s^2, downward).
pub const GRAVITY: f32 = 9.8;
/// Fixed simulation timestep in seconds, independent of display rate.
pub const TIME_STEP: f32 = 1.0 / 60.0;
/// Wind stat to horizontal acceleration multiplier.
pub const WIND_FACTOR: f32 = 0.5;
/// Minimum per-axis movement before a new trail point is recorded.
pub const TRAIL_SPACING: f32 = 0.5;
/// Power to launch speed multiplier.
pub const SPEED_SCALE: f32 = 1.5;
/// Vertical landing speed below which the ball stops rebounding.
pub const BOUNCE_THRESHOLD: f32 = 0.5;
/// Horizontal speed below which a sliding ball comes to rest.
pub const STOP_SPEED: f32 = 0.1;
/// Steps simulated per rendered frame by the real-time driver.
pub const STEPS_PER_FRAME: u32 = 3;
/// Safety cap on fast-forward iterations.
pub const MAX_FAST_FORWARD_STEPS: u32 = 5000;

/// Where the horizontal ground friction multiplier comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FrictionSource {
    /// `min(cap, base + run / 100)`: a higher run stat keeps more speed.
    Run { base: f32, cap: f32 },
    /// Constant multiplier.
    Fixed(f32),
}

impl FrictionSource {
    pub fn coefficient(self, run: f32) -> f32 {
        match self {
            Self::Run { base, cap } => (base + run / 100.0).min(cap),
            Self::Fixed(f) => f,
        }
    }
}

/// Ground-contact resolution strategy.
///
/// Each variant carries its own tuning; they are separate presets and are
/// never blended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroundPolicy {
    /// Rebound while the landing is hard enough, otherwise slide to a stop.
    VelocityThreshold {
        restitution: f32,
        friction: FrictionSource,
        bounce_threshold: f32,
        stop_speed: f32,
    },
    /// Like `VelocityThreshold`, but forced to slide once the rebound cap is hit.
    BounceLimit {
        restitution: f32,
        friction: f32,
        /// Used when the shot's parameters carry no limit of their own.
        default_limit: u32,
        bounce_threshold: f32,
        stop_speed: f32,
    },
    /// One constant friction for both sliding and rebounding.
    FixedFriction {
        restitution: f32,
        friction: f32,
        bounce_threshold: f32,
        stop_speed: f32,
    },
}

impl GroundPolicy {
    pub fn velocity_threshold() -> Self {
        Self::VelocityThreshold {
            restitution: 0.6,
            friction: FrictionSource::Run {
                base: 0.5,
                cap: 0.98,
            },
            bounce_threshold: BOUNCE_THRESHOLD,
            stop_speed: STOP_SPEED,
        }
    }

    pub fn bounce_limit() -> Self {
        Self::BounceLimit {
            restitution: 0.7,
            friction: 0.7,
            default_limit: 3,
            bounce_threshold: BOUNCE_THRESHOLD,
            stop_speed: STOP_SPEED,
        }
    }

    pub fn fixed_friction() -> Self {
        Self::FixedFriction {
            restitution: 0.6,
            friction: 0.53,
            bounce_threshold: BOUNCE_THRESHOLD,
            stop_speed: STOP_SPEED,
        }
    }
}

impl Default for GroundPolicy {
    fn default() -> Self {
        Self::velocity_threshold()
    }
}

/// Integration constants and the ground policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub time_step: f32,
    pub wind_factor: f32,
    pub trail_spacing: f32,
    pub ground: GroundPolicy,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            time_step: TIME_STEP,
            wind_factor: WIND_FACTOR,
            trail_spacing: TRAIL_SPACING,
            ground: GroundPolicy::default(),
        }
    }
}

/// Launch configurator tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LaunchConfig {
    pub speed_scale: f32,
    /// Spawn offset. Kept off the ground so the first step does not register
    /// a spurious ground contact.
    pub start: Vec2,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            speed_scale: SPEED_SCALE,
            start: Vec2::new(0.5, 0.15),
        }
    }
}

/// Driver loop tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DriverConfig {
    pub steps_per_frame: u32,
    pub max_fast_forward_steps: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            steps_per_frame: STEPS_PER_FRAME,
            max_fast_forward_steps: MAX_FAST_FORWARD_STEPS,
        }
    }
}

/// Named configurations matching the shot variants shipped so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Run-derived friction, offset spawn.
    Classic,
    /// Rebound cap, offset spawn.
    BounceLimited,
    /// Fixed friction, spawn at the origin.
    Simple,
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "bounce_limited" | "bounce-limited" => Ok(Self::BounceLimited),
            "simple" => Ok(Self::Simple),
            other => Err(format!("unknown preset: {other}")),
        }
    }
}

/// Top-level simulator configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub physics: PhysicsConfig,
    pub launch: LaunchConfig,
    pub driver: DriverConfig,
}

impl SimConfig {
    pub fn preset(preset: Preset) -> Self {
        let mut config = Self::default();
        match preset {
            Preset::Classic => {},
            Preset::BounceLimited => config.physics.ground = GroundPolicy::bounce_limit(),
            Preset::Simple => {
                config.physics.ground = GroundPolicy::fixed_friction();
                config.launch.start = Vec2::ZERO;
            },
        }
        config
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load config from `CHIPSHOT_CONFIG` or `config/chipshot.toml`. Falls back
    /// to defaults if the file is missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("CHIPSHOT_CONFIG")
            .unwrap_or_else(|_| "config/chipshot.toml".to_string());
        match Self::from_path(&path) {
            Ok(cfg) => cfg,
            Err(ConfigError::Io { .. }) => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to parse {path}: {e}, using defaults");
                Self::default()
            },
        }
    }
}
