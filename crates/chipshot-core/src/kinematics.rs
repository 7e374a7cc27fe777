use serde::{Deserialize, Serialize};

/// A 2D point or vector. `x` runs downrange, `y` is height above the ground.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Coarse motion phase derived from a [`KinematicState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionPhase {
    Airborne,
    Sliding,
    Stopped,
}

/// Simulation state of the launched ball.
///
/// States are replaced, never shared: the stepper consumes the previous
/// value and hands back the next one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KinematicState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub bounce_count: u32,
    /// Terminal. Once set, velocity is zero and stepping is a no-op.
    pub stopped: bool,
    /// Sparse position history for drawing the flight path.
    pub trail: Vec<Vec2>,
}

impl KinematicState {
    /// A freshly launched ball at `position` moving with `velocity`.
    pub fn launched(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            bounce_count: 0,
            stopped: false,
            trail: vec![position],
        }
    }

    /// A ball resting at `position` before any launch (or after a restart).
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            bounce_count: 0,
            stopped: true,
            trail: Vec::new(),
        }
    }

    pub fn phase(&self) -> MotionPhase {
        if self.stopped {
            MotionPhase::Stopped
        } else if self.position.y <= 0.0 && self.velocity.y == 0.0 {
            MotionPhase::Sliding
        } else {
            MotionPhase::Airborne
        }
    }

    /// Horizontal distance covered so far. This is the shot's score once stopped.
    pub fn distance(&self) -> f32 {
        self.position.x
    }

    /// Append the current position to the trail if it moved more than
    /// `spacing` along either axis since the last recorded point.
    pub fn record_trail(&mut self, spacing: f32) {
        let far_enough = match self.trail.last() {
            Some(last) => {
                (self.position.x - last.x).abs() > spacing
                    || (self.position.y - last.y).abs() > spacing
            },
            None => true,
        };
        if far_enough {
            self.trail.push(self.position);
        }
    }
}
