use hecs::World;

use crate::components::{Ball, Defender, DefenderIntent};
use crate::config::Config;
use crate::params::Params;
use crate::resources::{Events, Time};

/// Move the defender from raw directional input at the configured speed,
/// clamped to its own half of the court. Runs on the raw clock; the pace
/// multiplier does not change how fast RIGHTY walks.
pub fn move_defender(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (defender, intent)) in world.query_mut::<(&mut Defender, &DefenderIntent)>() {
        if intent.dir != 0 {
            defender.x += intent.dir as f32 * config.defender_speed * time.dt;
            defender.x = defender.x.clamp(
                Params::NET_X + Params::DEFENDER_RADIUS,
                Params::COURT_LENGTH - Params::DEFENDER_RADIUS,
            );
        }
    }
}

/// Ball-vs-defender overlap test: horizontal distance within the combined
/// radii and height inside the defender's reach window. Sets the event flag
/// for the controller to act on.
pub fn check_defender_hit(world: &mut World, events: &mut Events) {
    let defender_x = {
        let mut query = world.query::<&Defender>();
        match query.iter().next() {
            Some((_entity, defender)) => defender.x,
            None => return,
        }
    };

    let reach = Params::BALL_RADIUS + Params::DEFENDER_RADIUS;
    let ceiling = Params::DEFENDER_HIT_CEILING * Params::NET_HEIGHT;

    for (_entity, ball) in world.query::<&Ball>().iter() {
        if !ball.active {
            continue;
        }
        let dx = (ball.pos.x - defender_x).abs();
        if dx <= reach && ball.pos.y >= 0.0 && ball.pos.y <= ceiling {
            events.defender_hit = true;
        }
    }
}
