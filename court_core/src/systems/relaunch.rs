use hecs::World;
use rand::Rng;

use crate::components::Ball;
use crate::params::Params;
use crate::resources::{Events, RelaunchState, ShotParams, SimRng, Time};

/// Roll random parameters for an automatic relaunch
pub fn roll_relaunch_params(rng: &mut SimRng) -> ShotParams {
    ShotParams {
        force: rng
            .0
            .gen_range(Params::RELAUNCH_FORCE_MIN..=Params::RELAUNCH_FORCE_MAX),
        angle: rng
            .0
            .gen_range(Params::RELAUNCH_ANGLE_MIN..=Params::RELAUNCH_ANGLE_MAX),
        spin: rng
            .0
            .gen_range(Params::RELAUNCH_SPIN_MIN..=Params::RELAUNCH_SPIN_MAX),
    }
}

/// Advance the relaunch-wait timer on the raw clock and, when it fires,
/// reset every ball for a fresh shot with rolled parameters. Returns the
/// parameters used when a relaunch happened.
pub fn relaunch_tick(
    world: &mut World,
    relaunch: &mut RelaunchState,
    time: &Time,
    rng: &mut SimRng,
    events: &mut Events,
) -> Option<ShotParams> {
    if !relaunch.tick(time.dt) {
        return None;
    }

    let params = roll_relaunch_params(rng);
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset_shot(params.force, params.angle, params.spin);
    }
    events.relaunched = true;
    Some(params)
}
