use serde::{Deserialize, Serialize};

/// Launch angle at loft 0.
pub const LOFT_BASE_DEGREES: f32 = 15.0;
/// Degrees added per loft point (loft 0..100 spans 15..75 degrees).
pub const LOFT_DEGREES_PER_POINT: f32 = 0.6;

/// How the launch angle is specified.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LaunchAngle {
    /// Angle above the horizon in degrees.
    Degrees(f32),
    /// Quiz-facing loft stat, mapped affinely onto degrees.
    Loft(f32),
}

impl LaunchAngle {
    /// Single fixed angle used by the simplified configuration.
    pub const FIXED_45: Self = Self::Degrees(45.0);

    pub fn degrees(self) -> f32 {
        match self {
            Self::Degrees(d) => d,
            Self::Loft(loft) => LOFT_BASE_DEGREES + loft * LOFT_DEGREES_PER_POINT,
        }
    }

    pub fn radians(self) -> f32 {
        self.degrees().to_radians()
    }
}

impl Default for LaunchAngle {
    fn default() -> Self {
        Self::FIXED_45
    }
}

/// Immutable per-shot configuration derived from quiz rewards or user input.
///
/// No field is validated. Negative power or extreme wind still produce a
/// defined (if degenerate) trajectory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchParameters {
    pub power: f32,
    #[serde(default)]
    pub angle: LaunchAngle,
    /// Positive is a tailwind. Applied as constant horizontal acceleration.
    #[serde(default)]
    pub wind: f32,
    /// Ground-roll stat feeding the run-derived friction preset.
    #[serde(default)]
    pub run: f32,
    /// Rebound cap for the bounce-limit ground policy.
    #[serde(default)]
    pub bounce_limit: Option<u32>,
}

impl LaunchParameters {
    pub fn new(power: f32, angle: LaunchAngle, wind: f32) -> Self {
        Self {
            power,
            angle,
            wind,
            run: 0.0,
            bounce_limit: None,
        }
    }

    pub fn with_run(mut self, run: f32) -> Self {
        self.run = run;
        self
    }

    pub fn with_bounce_limit(mut self, limit: u32) -> Self {
        self.bounce_limit = Some(limit);
        self
    }
}

impl Default for LaunchParameters {
    /// The opening stats before any quiz answer is scored.
    fn default() -> Self {
        Self::new(15.0, LaunchAngle::Loft(30.0), 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loft_maps_to_degrees() {
        assert!((LaunchAngle::Loft(0.0).degrees() - 15.0).abs() < 1e-5);
        assert!((LaunchAngle::Loft(50.0).degrees() - 45.0).abs() < 1e-5);
        assert!((LaunchAngle::Loft(100.0).degrees() - 75.0).abs() < 1e-5);
    }

    #[test]
    fn degrees_pass_through() {
        assert_eq!(LaunchAngle::Degrees(30.0).degrees(), 30.0);
        assert!((LaunchAngle::FIXED_45.radians() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn builder_sets_optional_fields() {
        let params = LaunchParameters::new(10.0, LaunchAngle::FIXED_45, 0.0)
            .with_run(20.0)
            .with_bounce_limit(2);
        assert_eq!(params.run, 20.0);
        assert_eq!(params.bounce_limit, Some(2));
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let params: LaunchParameters = toml::from_str("power = 12.0").unwrap();
        assert_eq!(params.power, 12.0);
        assert_eq!(params.angle, LaunchAngle::FIXED_45);
        assert_eq!(params.wind, 0.0);
        assert_eq!(params.run, 0.0);
        assert_eq!(params.bounce_limit, None);
    }

    #[test]
    fn loft_angle_from_toml() {
        let params: LaunchParameters =
            toml::from_str("power = 12.0\nwind = -3.0\nangle = { loft = 40.0 }").unwrap();
        assert_eq!(params.angle, LaunchAngle::Loft(40.0));
        assert_eq!(params.wind, -3.0);
    }
}
