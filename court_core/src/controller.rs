use hecs::World;

use crate::components::{Ball, Defender};
use crate::config::Config;
use crate::fsm::{MatchFsm, PhaseAction, RunPhase};
use crate::params::Params;
use crate::resources::{
    Command, CommandQueue, Events, RelaunchState, ReturnShotOutcome, ReturnShotRequest,
    ShotParams, SimRng, Time,
};
use crate::surfaces::{AirPreset, SurfaceKind, AIR_PRESETS};
use crate::systems;

/// What the screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Four vertical drops side by side, one per surface
    AllCourts,
    /// One horizontal shot against the defender on the chosen surface
    Shot(SurfaceKind),
}

/// Rejection of a return-shot resolution. Out-of-range values leave the
/// pause state untouched so the requester can re-prompt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReturnShotError {
    #[error("no return shot is pending")]
    NotPaused,
    #[error("{field} {value} outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Owns the world, the run-phase machine and every per-mode knob. One
/// instance lives for the whole process; an external fixed-rate timer calls
/// [`MatchController::update`] once per tick.
pub struct MatchController {
    pub world: World,
    pub mode: DisplayMode,
    pub fsm: MatchFsm,
    pub config: Config,
    /// Launch parameters for the next shot
    pub launch: ShotParams,
    pub pace: f32,
    pub air_index: usize,
    pub relaunch: RelaunchState,
    pub pending_return: Option<ReturnShotRequest>,
    /// Seeds the dialog defaults for the next hit
    pub last_return: ShotParams,
    pub queue: CommandQueue,
    pub rng: SimRng,
    pub events: Events,
    pub time: Time,
}

impl MatchController {
    pub fn new(config: Config, seed: u64) -> Self {
        let launch = ShotParams {
            force: config.clamp_force(config.default_force),
            angle: config.clamp_angle(config.default_angle),
            spin: config.clamp_spin(config.default_spin),
        };
        let pace = config.clamp_pace(config.default_pace);
        let mut controller = Self {
            world: World::new(),
            mode: DisplayMode::AllCourts,
            fsm: MatchFsm::new(),
            config,
            launch,
            pace,
            air_index: 0,
            relaunch: RelaunchState::new(),
            pending_return: None,
            last_return: ShotParams {
                force: Params::RETURN_DEFAULT_FORCE,
                angle: Params::RETURN_DEFAULT_ANGLE,
                spin: Params::RETURN_DEFAULT_SPIN,
            },
            queue: CommandQueue::new(),
            rng: SimRng::new(seed),
            events: Events::new(),
            time: Time::new(Params::FIXED_DT, 0.0),
        };
        controller.rebuild_world();
        controller
    }

    pub fn air_preset(&self) -> AirPreset {
        AIR_PRESETS[self.air_index]
    }

    pub fn phase(&self) -> RunPhase {
        self.fsm.phase()
    }

    pub fn defender_x(&self) -> Option<f32> {
        let mut query = self.world.query::<&Defender>();
        query.iter().next().map(|(_entity, defender)| defender.x)
    }

    pub fn pending_return_shot(&self) -> Option<ReturnShotRequest> {
        self.pending_return
    }

    pub fn push_command(&mut self, command: Command) {
        self.queue.push(command);
    }

    /// Advance one external tick. The raw dt drives the defender and the
    /// relaunch timer; the physics step gets dt scaled by the pace
    /// multiplier.
    pub fn update(&mut self, dt: f32) {
        self.events.clear();
        for command in self.queue.drain() {
            self.apply_command(command);
        }

        self.time.dt = dt;
        self.time.now += dt;

        if !self.fsm.is_running() {
            return;
        }

        match self.mode {
            DisplayMode::AllCourts => self.update_all_courts(),
            DisplayMode::Shot(_) => self.update_shot(),
        }
    }

    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::Start => {
                if self.fsm.apply(PhaseAction::Start) {
                    self.reseed_balls();
                    self.relaunch.clear();
                    self.pending_return = None;
                }
            }
            Command::Reset => {
                self.fsm.apply(PhaseAction::Reset);
                self.reseed_balls();
                self.relaunch.clear();
                self.pending_return = None;
            }
            Command::SelectMode(mode) => {
                self.mode = mode;
                self.fsm.reset();
                self.rebuild_world();
            }
            Command::AdjustForce(sign) => {
                self.launch.force = self
                    .config
                    .clamp_force(self.launch.force + sign as f32 * Params::FORCE_STEP);
                self.reseed_if_idle();
            }
            Command::AdjustAngle(sign) => {
                self.launch.angle = self
                    .config
                    .clamp_angle(self.launch.angle + sign as f32 * self.config.angle_step);
                self.reseed_if_idle();
            }
            Command::AdjustSpin(sign) => {
                self.launch.spin = self
                    .config
                    .clamp_spin(self.launch.spin + sign as f32 * self.config.spin_step);
                self.reseed_if_idle();
            }
            Command::AdjustPace(sign) => {
                let next = if sign > 0 {
                    self.pace * Params::PACE_FACTOR
                } else {
                    self.pace / Params::PACE_FACTOR
                };
                self.pace = self.config.clamp_pace(next);
            }
            Command::CycleAir => {
                if !self.fsm.is_running() {
                    self.air_index = (self.air_index + 1) % AIR_PRESETS.len();
                    if self.fsm.is_idle() {
                        self.reseed_balls();
                    }
                }
            }
            Command::Defender(dir) => {
                systems::set_defender_dir(&mut self.world, dir);
            }
        }
    }

    /// Resolve the pending return-shot request. Confirmation recomputes the
    /// ball's velocity from the supplied force/angle and sends it back the
    /// way it came; cancellation bounces the ball off the defender instead.
    pub fn resolve_return_shot(
        &mut self,
        outcome: ReturnShotOutcome,
    ) -> Result<(), ReturnShotError> {
        if self.pending_return.is_none() || !self.fsm.is_paused() {
            return Err(ReturnShotError::NotPaused);
        }

        let defender_x = self.defender_x().unwrap_or(Params::NET_X);
        match outcome {
            ReturnShotOutcome::Confirmed(params) => {
                validate_return(&params)?;
                self.last_return = params;
                let speed = (params.force / Params::RETURN_FORCE_MAX * Params::RETURN_SPEED_MAX)
                    .max(Params::RETURN_SPEED_FLOOR);
                let (sin, cos) = params.angle.to_radians().sin_cos();
                for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                    // back toward the near baseline
                    ball.vel.x = -speed * cos;
                    ball.vel.y = speed * sin;
                    ball.spin = params.spin;
                    ball.pos.x += nudge_away(ball.pos.x, defender_x);
                }
            }
            ReturnShotOutcome::Cancelled => {
                for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                    ball.vel.x = -ball.vel.x * 0.5;
                    ball.pos.x += nudge_away(ball.pos.x, defender_x);
                }
            }
        }

        self.pending_return = None;
        self.fsm.apply(PhaseAction::ShotResolved);
        Ok(())
    }

    fn update_all_courts(&mut self) {
        let paced = self.time.paced(self.pace);
        systems::step_flight(&mut self.world, &paced, &mut self.rng, &mut self.events);

        let all_settled = {
            let mut query = self.world.query::<&Ball>();
            query.iter().all(|(_entity, ball)| !ball.active)
        };
        if all_settled {
            self.fsm.apply(PhaseAction::AllSettled);
        }
    }

    fn update_shot(&mut self) {
        systems::move_defender(&mut self.world, &self.time, &self.config);

        match self.fsm.phase() {
            RunPhase::RelaunchWait => {
                let fired = systems::relaunch_tick(
                    &mut self.world,
                    &mut self.relaunch,
                    &self.time,
                    &mut self.rng,
                    &mut self.events,
                );
                if fired.is_some() {
                    self.fsm.apply(PhaseAction::RelaunchFired);
                }
            }
            RunPhase::Flight => self.advance_shot_ball(),
            _ => {}
        }
    }

    fn advance_shot_ball(&mut self) {
        let paced = self.time.paced(self.pace);
        systems::step_flight(&mut self.world, &paced, &mut self.rng, &mut self.events);

        // The step's bounds check is strict; a ball parked exactly on the
        // far baseline still ends the rally
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            if ball.active && ball.pos.x >= Params::COURT_LENGTH {
                ball.active = false;
                self.events.ball_out = true;
            }
        }

        systems::check_defender_hit(&mut self.world, &mut self.events);
        if self.events.defender_hit {
            self.fsm.apply(PhaseAction::DefenderHit);
            self.pending_return = Some(ReturnShotRequest {
                defaults: self.last_return,
            });
            return;
        }

        let ball_gone = {
            let mut query = self.world.query::<&Ball>();
            query.iter().any(|(_entity, ball)| !ball.active)
        };
        if ball_gone {
            self.fsm.apply(PhaseAction::BallOut);
            self.relaunch.start();
        }
    }

    /// Rebuild the world for the current mode: four drop balls for the
    /// all-courts view, one shot ball plus the defender otherwise
    fn rebuild_world(&mut self) {
        self.world.clear();
        let drag = self.air_preset().drag;
        match self.mode {
            DisplayMode::AllCourts => {
                crate::create_drop_balls(&mut self.world, drag);
            }
            DisplayMode::Shot(kind) => {
                crate::create_shot_ball(&mut self.world, kind, drag, self.launch);
                crate::create_defender(&mut self.world);
            }
        }
        self.relaunch.clear();
        self.pending_return = None;
    }

    /// Re-seed every ball from the current launch parameters and air preset
    /// without touching the defender
    fn reseed_balls(&mut self) {
        let drag = self.air_preset().drag;
        let launch = self.launch;
        let mode = self.mode;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.drag = drag;
            match mode {
                DisplayMode::AllCourts => ball.reset_drop(),
                DisplayMode::Shot(_) => ball.reset_shot(launch.force, launch.angle, launch.spin),
            }
        }
    }

    fn reseed_if_idle(&mut self) {
        if self.fsm.is_idle() {
            self.reseed_balls();
        }
    }
}

fn nudge_away(ball_x: f32, defender_x: f32) -> f32 {
    if ball_x <= defender_x {
        -Params::RETURN_NUDGE
    } else {
        Params::RETURN_NUDGE
    }
}

fn validate_return(params: &ShotParams) -> Result<(), ReturnShotError> {
    check_range(
        "force",
        params.force,
        Params::RETURN_FORCE_MIN,
        Params::RETURN_FORCE_MAX,
    )?;
    check_range(
        "angle",
        params.angle,
        Params::RETURN_ANGLE_MIN,
        Params::RETURN_ANGLE_MAX,
    )?;
    check_range("spin", params.spin, Params::SPIN_MIN, Params::SPIN_MAX)?;
    Ok(())
}

fn check_range(
    field: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<(), ReturnShotError> {
    if value.is_nan() || value < min || value > max {
        return Err(ReturnShotError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
