/// Tuning parameters for the ball flight model
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_LENGTH: f32 = 23.77;
    pub const NET_X: f32 = Self::COURT_LENGTH / 2.0;
    pub const NET_HEIGHT: f32 = 0.914;

    // Ball
    pub const BALL_RADIUS: f32 = 0.0335;
    pub const BALL_MASS: f32 = 0.058;
    pub const DROP_HEIGHT: f32 = 2.0;
    pub const LAUNCH_X_FRACTION: f32 = 0.05;

    // Launch envelope: force maps linearly onto a 0-50 m/s speed range
    pub const LAUNCH_FORCE_MAX: f32 = 1000.0;
    pub const LAUNCH_SPEED_MAX: f32 = 50.0;
    pub const FORCE_STEP: f32 = 10.0;

    // Spin. The Magnus term only ever loads the vertical channel.
    pub const MAGNUS_COEFF: f32 = 0.00015;
    pub const MAGNUS_SPEED_GATE: f32 = 0.1;
    pub const SPIN_KICK_DIVISOR: f32 = 5000.0;
    pub const SPIN_KICK_SCALE: f32 = 2.0;
    pub const SPIN_BOUNCE_DECAY: f32 = 0.7;

    // Ground bounce
    pub const GROUND_VX_RETAIN: f32 = 0.8;
    pub const STOP_SPEED: f32 = 0.1;
    pub const MAX_BOUNCES: u32 = 10;
    pub const RECORDED_BOUNCES: usize = 3;

    // Net strike
    pub const NET_ABSORB: f32 = 0.80;
    pub const NET_JITTER: f32 = 0.15;
    pub const NET_DEAD_SPEED: f32 = 0.5;

    // Defender
    pub const DEFENDER_RADIUS: f32 = 0.05;
    pub const DEFENDER_SPAWN_FRACTION: f32 = 0.75;
    pub const DEFENDER_HIT_CEILING: f32 = 2.5; // multiple of net height

    // Return shot
    pub const RETURN_FORCE_MIN: f32 = 10.0;
    pub const RETURN_FORCE_MAX: f32 = 600.0;
    pub const RETURN_ANGLE_MIN: f32 = 0.0;
    pub const RETURN_ANGLE_MAX: f32 = 75.0;
    pub const RETURN_SPEED_MAX: f32 = 30.0;
    pub const RETURN_SPEED_FLOOR: f32 = 5.0;
    pub const RETURN_NUDGE: f32 = 0.1;
    // Dialog defaults before any return shot has been confirmed
    pub const RETURN_DEFAULT_FORCE: f32 = 100.0;
    pub const RETURN_DEFAULT_ANGLE: f32 = 45.0;
    pub const RETURN_DEFAULT_SPIN: f32 = 0.0;

    // Automatic relaunch after the ball leaves play
    pub const RELAUNCH_DELAY: f32 = 2.0;
    pub const RELAUNCH_FORCE_MIN: f32 = 200.0;
    pub const RELAUNCH_FORCE_MAX: f32 = 400.0;
    pub const RELAUNCH_ANGLE_MIN: f32 = 9.0;
    pub const RELAUNCH_ANGLE_MAX: f32 = 39.0;
    pub const RELAUNCH_SPIN_MIN: f32 = 60.0;
    pub const RELAUNCH_SPIN_MAX: f32 = 600.0;

    // Pace multiplier scales the physics dt only, never raw timers
    pub const PACE_MIN: f32 = 0.1;
    pub const PACE_MAX: f32 = 10.0;
    pub const PACE_FACTOR: f32 = 1.1;

    // Physics
    pub const GRAVITY: f32 = 9.81;
    pub const FIXED_DT: f32 = 0.016;

    // Startup defaults (overridable through Config)
    pub const DEFAULT_FORCE: f32 = 300.0;
    pub const DEFAULT_ANGLE: f32 = 30.0;
    pub const ANGLE_STEP: f32 = 3.0;
    pub const DEFAULT_SPIN: f32 = 120.0;
    pub const SPIN_STEP: f32 = 60.0;
    pub const SPIN_MIN: f32 = -3000.0;
    pub const SPIN_MAX: f32 = 9000.0;
    pub const DEFAULT_PACE: f32 = 1.0;
    pub const DEFENDER_SPEED: f32 = 3.0;
}
