use chipshot_core::config::Preset;
use chipshot_core::launch_params::{LaunchAngle, LaunchParameters};

/// Parsed command line for a single shot.
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    pub params: LaunchParameters,
    /// Built-in configuration to use instead of loading `chipshot.toml`.
    pub preset: Option<Preset>,
    /// Pace frames at the display rate instead of skipping to the end.
    pub realtime: bool,
    pub print_trail: bool,
}

#[derive(Debug, PartialEq)]
pub enum ArgError {
    MissingValue(String),
    InvalidNumber { flag: String, value: String },
    UnknownFlag(String),
    InvalidPreset(String),
}

impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::InvalidNumber { flag, value } => write!(f, "{flag}: not a number: {value}"),
            Self::UnknownFlag(flag) => write!(f, "unknown argument: {flag}"),
            Self::InvalidPreset(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ArgError {}

pub const USAGE: &str = "usage: chipshot-runner [--power N] [--loft N | --angle DEG] [--wind N] \
[--run N] [--bounce-limit N] [--preset classic|bounce-limited|simple] [--realtime] [--trail]";

/// Parse runner arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<RunArgs, ArgError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = RunArgs {
        params: LaunchParameters::default(),
        preset: None,
        realtime: false,
        print_trail: false,
    };

    let mut args = args.into_iter();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--power" => parsed.params.power = number(&flag, args.next())?,
            "--loft" => parsed.params.angle = LaunchAngle::Loft(number(&flag, args.next())?),
            "--angle" => parsed.params.angle = LaunchAngle::Degrees(number(&flag, args.next())?),
            "--wind" => parsed.params.wind = number(&flag, args.next())?,
            "--run" => parsed.params.run = number(&flag, args.next())?,
            "--bounce-limit" => {
                let value = value(&flag, args.next())?;
                let limit = value.parse::<u32>().map_err(|_| ArgError::InvalidNumber {
                    flag: flag.clone(),
                    value,
                })?;
                parsed.params.bounce_limit = Some(limit);
            },
            "--preset" => {
                parsed.preset = Some(
                    value(&flag, args.next())?
                        .parse::<Preset>()
                        .map_err(ArgError::InvalidPreset)?,
                );
            },
            "--realtime" => parsed.realtime = true,
            "--trail" => parsed.print_trail = true,
            _ => return Err(ArgError::UnknownFlag(flag)),
        }
    }
    Ok(parsed)
}

fn value(flag: &str, next: Option<String>) -> Result<String, ArgError> {
    next.ok_or_else(|| ArgError::MissingValue(flag.to_string()))
}

fn number(flag: &str, next: Option<String>) -> Result<f32, ArgError> {
    let value = value(flag, next)?;
    value.parse::<f32>().map_err(|_| ArgError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<RunArgs, ArgError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_gives_default_shot() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.params, LaunchParameters::default());
        assert_eq!(args.preset, None);
        assert!(!args.realtime);
    }

    #[test]
    fn full_argument_set() {
        let args = parse(&[
            "--power",
            "22",
            "--angle",
            "40",
            "--wind",
            "-3.5",
            "--run",
            "12",
            "--bounce-limit",
            "2",
            "--preset",
            "bounce-limited",
            "--realtime",
            "--trail",
        ])
        .unwrap();
        assert_eq!(args.params.power, 22.0);
        assert_eq!(args.params.angle, LaunchAngle::Degrees(40.0));
        assert_eq!(args.params.wind, -3.5);
        assert_eq!(args.params.run, 12.0);
        assert_eq!(args.params.bounce_limit, Some(2));
        assert_eq!(args.preset, Some(Preset::BounceLimited));
        assert!(args.realtime);
        assert!(args.print_trail);
    }

    #[test]
    fn loft_sets_loft_angle() {
        let args = parse(&["--loft", "50"]).unwrap();
        assert_eq!(args.params.angle, LaunchAngle::Loft(50.0));
    }

    #[test]
    fn missing_value_is_reported() {
        assert_eq!(
            parse(&["--power"]),
            Err(ArgError::MissingValue("--power".to_string()))
        );
    }

    #[test]
    fn bad_number_is_reported() {
        let err = parse(&["--wind", "gusty"]).unwrap_err();
        assert_eq!(err.to_string(), "--wind: not a number: gusty");
    }

    #[test]
    fn negative_bounce_limit_rejected() {
        assert!(matches!(
            parse(&["--bounce-limit", "-1"]),
            Err(ArgError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn unknown_flag_and_preset() {
        assert_eq!(
            parse(&["--spin", "3"]),
            Err(ArgError::UnknownFlag("--spin".to_string()))
        );
        assert!(matches!(
            parse(&["--preset", "sticky"]),
            Err(ArgError::InvalidPreset(_))
        ));
    }
}
