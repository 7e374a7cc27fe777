mod args;

use std::process::ExitCode;
use std::time::Duration;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use chipshot_core::config::SimConfig;
use chipshot_core::events::{SessionEvent, ShotResult};
use chipshot_core::kinematics::{KinematicState, Vec2};
use chipshot_core::launch_params::LaunchParameters;
use chipshot_core::observer::StepObserver;
use chipshot_sim::{LaunchSession, SessionStatus};

use args::{USAGE, parse_args};

/// JSON report printed after the shot.
#[derive(Debug, Serialize)]
struct ShotReport {
    params: LaunchParameters,
    result: ShotResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    trail: Option<Vec<Vec2>>,
}

/// Logs each presented frame at trace level.
struct FrameLog {
    frames: u32,
}

impl StepObserver for FrameLog {
    fn on_frame(&mut self, state: &KinematicState) {
        self.frames += 1;
        tracing::trace!(
            frame = self.frames,
            x = state.position.x,
            y = state.position.y,
            bounces = state.bounce_count,
            "frame"
        );
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        },
    };

    let config = match args.preset {
        Some(preset) => SimConfig::preset(preset),
        None => SimConfig::load(),
    };
    let frame_interval =
        Duration::try_from_secs_f32(config.physics.time_step).unwrap_or(Duration::from_millis(16));

    let mut session = LaunchSession::new(config);
    session.set_params(args.params.clone());
    session.launch();

    let mut frames = FrameLog { frames: 0 };
    let events = if args.realtime {
        loop {
            let events = session.frame(&mut frames);
            if !events.is_empty() || session.status() != SessionStatus::Flying {
                break events;
            }
            std::thread::sleep(frame_interval);
        }
    } else {
        session.skip(&mut frames)
    };

    let Some(result) = events.into_iter().find_map(|e| match e {
        SessionEvent::Finished { result } => Some(result),
        _ => None,
    }) else {
        tracing::error!("Shot ended without a result");
        return ExitCode::FAILURE;
    };
    tracing::info!(
        distance = result.distance,
        frames = frames.frames,
        termination = ?result.termination,
        "Shot complete"
    );

    let report = ShotReport {
        params: args.params,
        result,
        trail: args.print_trail.then(|| session.ball().trail.clone()),
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode report");
            ExitCode::FAILURE
        },
    }
}
