use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::{Ball, FlightKind, TracePoint};
use crate::params::Params;
use crate::resources::{Events, SimRng, Time};

/// Advance every ball in the world by one physics step
pub fn step_flight(world: &mut World, time: &Time, rng: &mut SimRng, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        step_ball(ball, time.dt, rng, events);
    }
}

/// One integrator tick for a single ball.
///
/// Order matters and is part of the model: gravity, then the spin term using
/// the post-gravity speed, then vertical integration, then drag and
/// horizontal integration, then net / ground / bounds checks. The trajectory
/// sample is taken before the ground clamp, so the plot keeps the raw
/// integrated height.
pub fn step_ball(ball: &mut Ball, dt: f32, rng: &mut SimRng, events: &mut Events) {
    if !ball.active {
        return;
    }

    let prev = ball.pos;
    ball.t += dt;

    ball.vel.y -= Params::GRAVITY * dt;

    // Simplified Magnus term: topspin presses the ball down. The force only
    // ever acts on the vertical channel.
    let speed = ball.vel.length();
    if speed > Params::MAGNUS_SPEED_GATE {
        let omega = ball.spin * std::f32::consts::TAU / 60.0;
        let magnus = Params::MAGNUS_COEFF * omega * speed;
        ball.vel.y -= magnus / Params::BALL_MASS * dt;
    }

    ball.pos.y += ball.vel.y * dt;

    // Quadratic drag on the horizontal channel
    let drag_force = -ball.drag * ball.vel.x * ball.vel.x.abs();
    ball.vel.x += drag_force / Params::BALL_MASS * dt;
    ball.pos.x += ball.vel.x * dt;

    if ball.kind == FlightKind::Shot {
        check_net(ball, prev, rng, events);
    }

    ball.trajectory.push(TracePoint {
        t: ball.t,
        y: ball.pos.y,
    });

    if ball.pos.y <= 0.0 {
        ground_bounce(ball, events);
    }

    if ball.pos.x < 0.0 || ball.pos.x > Params::COURT_LENGTH {
        ball.active = false;
        events.ball_out = true;
    }
}

/// Net strike test on the segment travelled this tick. The crossing height
/// is interpolated between the pre- and post-step positions; a strike kills
/// 80% of the momentum on each axis independently and most of the spin.
fn check_net(ball: &mut Ball, prev: Vec2, rng: &mut SimRng, events: &mut Events) {
    let crossed = (prev.x - Params::NET_X) * (ball.pos.x - Params::NET_X) < 0.0;
    if !crossed {
        return;
    }

    let frac = (Params::NET_X - prev.x) / (ball.pos.x - prev.x);
    let cross_y = prev.y + frac * (ball.pos.y - prev.y);
    if cross_y > Params::NET_HEIGHT + Params::BALL_RADIUS {
        return;
    }

    let keep = 1.0 - Params::NET_ABSORB;
    ball.pos.x = Params::NET_X;
    ball.pos.y = cross_y;
    ball.vel.x = -ball.vel.x * keep;
    ball.vel.y = -ball.vel.y * keep;
    ball.vel.y += rng.0.gen_range(-Params::NET_JITTER..=Params::NET_JITTER);
    ball.spin *= keep;

    // Ball drops dead at the net when nothing is left of its momentum
    if ball.vel.x.abs() < Params::NET_DEAD_SPEED && ball.vel.y.abs() < Params::NET_DEAD_SPEED {
        ball.vel.x = 0.0;
    }

    events.net_hit = true;
}

/// Ground bounce: surface restitution on the vertical axis, fixed retention
/// plus the spin kick on the horizontal axis, spin decay, and the two stop
/// conditions (dead rebound or exhausted bounces).
fn ground_bounce(ball: &mut Ball, events: &mut Events) {
    ball.pos.y = 0.0;

    if ball.bounces.len() < Params::RECORDED_BOUNCES {
        ball.bounces.push(TracePoint {
            t: ball.t,
            y: 0.0,
        });
    }

    ball.vel.y = -ball.vel.y * ball.surface.restitution;
    ball.vel.x *= Params::GROUND_VX_RETAIN;
    ball.vel.x += ball.spin / Params::SPIN_KICK_DIVISOR * Params::SPIN_KICK_SCALE;
    ball.spin *= Params::SPIN_BOUNCE_DECAY;
    ball.bounce_count += 1;
    events.ground_bounce = true;

    if ball.vel.y.abs() < Params::STOP_SPEED || ball.bounce_count > Params::MAX_BOUNCES {
        ball.active = false;
        ball.vel = Vec2::ZERO;
        events.ball_settled = true;
    }
}
