use chipshot_core::config::{GroundPolicy, PhysicsConfig};
use chipshot_core::kinematics::{KinematicState, Vec2};
use chipshot_core::launch_params::LaunchParameters;

/// Advance a shot by one fixed timestep.
///
/// Pure and total: the previous state is consumed and the next one returned.
/// A stopped state comes back unchanged, so drivers may safely over-call.
pub fn step(
    mut state: KinematicState,
    params: &LaunchParameters,
    config: &PhysicsConfig,
) -> KinematicState {
    if state.stopped {
        return state;
    }

    let dt = config.time_step;

    // Velocity first, then position (semi-implicit Euler).
    state.velocity.y -= config.gravity * dt;
    state.velocity.x += params.wind * config.wind_factor * dt;

    state.position.x += state.velocity.x * dt;
    state.position.y += state.velocity.y * dt;

    if state.position.y <= 0.0 {
        state.position.y = 0.0;
        resolve_ground_contact(&mut state, params, &config.ground);
    }

    state.record_trail(config.trail_spacing);
    state
}

/// Apply exactly one ground policy to a ball touching the ground.
fn resolve_ground_contact(
    state: &mut KinematicState,
    params: &LaunchParameters,
    policy: &GroundPolicy,
) {
    match *policy {
        GroundPolicy::VelocityThreshold {
            restitution,
            friction,
            bounce_threshold,
            stop_speed,
        } => {
            let friction = friction.coefficient(params.run);
            if state.velocity.y.abs() < bounce_threshold {
                slide(state, friction, stop_speed);
            } else {
                bounce(state, restitution, friction);
            }
        },
        GroundPolicy::BounceLimit {
            restitution,
            friction,
            default_limit,
            bounce_threshold,
            stop_speed,
        } => {
            let limit = params.bounce_limit.unwrap_or(default_limit);
            if state.bounce_count >= limit {
                slide(state, friction, stop_speed);
            } else if state.velocity.y.abs() < bounce_threshold {
                if state.velocity.x.abs() < stop_speed {
                    come_to_rest(state);
                } else {
                    state.velocity.y = 0.0;
                    state.velocity.x *= friction;
                }
            } else {
                bounce(state, restitution, friction);
            }
        },
        GroundPolicy::FixedFriction {
            restitution,
            friction,
            bounce_threshold,
            stop_speed,
        } => {
            if state.velocity.y.abs() < bounce_threshold {
                slide(state, friction, stop_speed);
            } else {
                bounce(state, restitution, friction);
            }
        },
    }
}

/// Kill vertical motion and roll with friction, stopping once slow enough.
fn slide(state: &mut KinematicState, friction: f32, stop_speed: f32) {
    state.velocity.y = 0.0;
    state.velocity.x *= friction;
    if state.velocity.x.abs() < stop_speed {
        come_to_rest(state);
    }
}

fn bounce(state: &mut KinematicState, restitution: f32, friction: f32) {
    state.velocity.y = -state.velocity.y * restitution;
    state.velocity.x *= friction;
    state.bounce_count += 1;
}

fn come_to_rest(state: &mut KinematicState) {
    state.velocity = Vec2::ZERO;
    state.stopped = true;
}
