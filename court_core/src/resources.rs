use crate::controller::DisplayMode;
use crate::params::Params;

/// Time resource for one tick
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,
    pub now: f32,
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    /// The same clock with its dt scaled by the visual pace multiplier
    pub fn paced(&self, pace: f32) -> Self {
        Self {
            dt: self.dt * pace,
            now: self.now,
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Seeded random number generator
pub struct SimRng(pub rand::rngs::StdRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Launch or return-shot parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotParams {
    pub force: f32,
    pub angle: f32,
    pub spin: f32,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub net_hit: bool,
    pub ground_bounce: bool,
    /// Ball left the court bounds
    pub ball_out: bool,
    /// Ball stopped after exhausting its bounces
    pub ball_settled: bool,
    pub defender_hit: bool,
    pub relaunched: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Timer state for the automatic relaunch after a ball leaves play.
///
/// Accumulates raw (unpaced) tick time; the pace multiplier never touches it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaunchState {
    pub waiting: bool,
    pub elapsed: f32,
}

impl RelaunchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.waiting = true;
        self.elapsed = 0.0;
    }

    pub fn clear(&mut self) {
        self.waiting = false;
        self.elapsed = 0.0;
    }

    /// Advance the wait timer; returns true exactly once, when the delay
    /// elapses
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.waiting {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < Params::RELAUNCH_DELAY {
            return false;
        }
        self.clear();
        true
    }
}

/// Command surface consumed by the controller. Keyboard/mouse decoding
/// happens outside the core; by the time a command lands here it is already
/// discrete. Signed variants carry the adjustment direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Start,
    Reset,
    SelectMode(DisplayMode),
    AdjustForce(i8),
    AdjustAngle(i8),
    AdjustSpin(i8),
    AdjustPace(i8),
    CycleAir,
    Defender(i8),
}

/// Queue of commands to drain on the next tick
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pub commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

/// Request issued to the presentation layer when the match pauses for a
/// return shot. Defaults are the last confirmed values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnShotRequest {
    pub defaults: ShotParams,
}

/// Outcome of the return-shot request. Cancellation is a first-class result,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReturnShotOutcome {
    Confirmed(ShotParams),
    Cancelled,
}
