use glam::Vec2;

use crate::params::Params;
use crate::surfaces::SurfaceProfile;

/// One recorded (time, height) sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub t: f32,
    pub y: f32,
}

/// Which flight model a ball runs: a straight vertical drop, or a horizontal
/// shot across the net
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightKind {
    Drop,
    Shot,
}

/// Ball component - full kinematic state of one simulated ball.
///
/// `pos.x` runs along the court (0 = near baseline), `pos.y` is height above
/// the ground. The trajectory grows by one sample per tick for the whole run;
/// that unbounded growth is the accepted cost of keeping the plot data.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Elapsed flight time in seconds
    pub t: f32,
    /// Spin in RPM, positive = topspin
    pub spin: f32,
    /// Total ground contacts, keeps counting past the recorded three
    pub bounce_count: u32,
    pub active: bool,
    pub kind: FlightKind,
    pub surface: SurfaceProfile,
    /// Horizontal drag coefficient from the selected air preset
    pub drag: f32,
    pub trajectory: Vec<TracePoint>,
    /// First three ground contacts only
    pub bounces: Vec<TracePoint>,
}

impl Ball {
    pub fn new(surface: SurfaceProfile, drag: f32) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            t: 0.0,
            spin: 0.0,
            bounce_count: 0,
            active: true,
            kind: FlightKind::Drop,
            surface,
            drag,
            trajectory: Vec::new(),
            bounces: Vec::new(),
        };
        ball.reset_drop();
        ball
    }

    /// Reset for the vertical-drop mode: released at rest from 2 m
    pub fn reset_drop(&mut self) {
        self.pos = Vec2::new(0.0, Params::DROP_HEIGHT);
        self.vel = Vec2::ZERO;
        self.spin = 0.0;
        self.kind = FlightKind::Drop;
        self.rearm();
    }

    /// Reset for a horizontal shot: launched from net height near the
    /// baseline, with speed derived linearly from the launch force
    pub fn reset_shot(&mut self, force: f32, angle_deg: f32, spin: f32) {
        let speed = Self::launch_speed(force);
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        self.pos = Vec2::new(
            Params::LAUNCH_X_FRACTION * Params::COURT_LENGTH,
            Params::NET_HEIGHT,
        );
        self.vel = Vec2::new(speed * cos, speed * sin);
        self.spin = spin;
        self.kind = FlightKind::Shot;
        self.rearm();
    }

    /// Map a launch force onto the 0-50 m/s speed envelope
    pub fn launch_speed(force: f32) -> f32 {
        force / Params::LAUNCH_FORCE_MAX * Params::LAUNCH_SPEED_MAX
    }

    fn rearm(&mut self) {
        self.t = 0.0;
        self.bounce_count = 0;
        self.active = true;
        self.trajectory.clear();
        self.bounces.clear();
        self.trajectory.push(TracePoint {
            t: 0.0,
            y: self.pos.y,
        });
    }
}

/// Defender component - RIGHTY, the fixed-shape return-shot target on the far
/// side of the net
#[derive(Debug, Clone, Copy)]
pub struct Defender {
    pub x: f32,
}

impl Defender {
    pub fn new() -> Self {
        Self {
            x: Params::DEFENDER_SPAWN_FRACTION * Params::COURT_LENGTH,
        }
    }
}

impl Default for Defender {
    fn default() -> Self {
        Self::new()
    }
}

/// Movement intent for the defender
#[derive(Debug, Clone, Copy, Default)]
pub struct DefenderIntent {
    pub dir: i8, // -1 = toward the net, 0 = stop, 1 = toward the far baseline
}

impl DefenderIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
