//! Session wrapper driven by an external presentation layer.
//!
//! Owns the match controller, decodes inbound [`proto`] messages into core
//! commands, advances one fixed tick per external timer callback, and emits
//! the per-tick snapshot plus the return-shot prompt when the match pauses.
//! The window, drawing, input decoding, and the dialog itself all live on
//! the other side of the byte contract.

pub mod settings;

use court_core::{
    Ball, Command, Config, DisplayMode, MatchController, Params, ReturnShotError,
    ReturnShotOutcome, ShotParams, SurfaceKind,
};
use proto::{BallTelemetry, CourtKind, ReturnShotOutcome as WireOutcome, SimToUi, UiToSim, ViewMode};

pub struct MatchSession {
    pub controller: MatchController,
    pub tick: u32,
    /// One prompt per pause; re-issued only after a rejected confirmation
    prompt_outstanding: bool,
}

impl MatchSession {
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            controller: MatchController::new(config, seed),
            tick: 0,
            prompt_outstanding: false,
        }
    }

    /// Decode and apply one inbound message. Malformed bytes are logged and
    /// dropped; a bad command must never kill the tick loop.
    pub fn handle_bytes(&mut self, bytes: &[u8]) -> Vec<SimToUi> {
        match UiToSim::from_bytes(bytes) {
            Ok(message) => self.handle_message(message),
            Err(err) => {
                log::warn!("dropping malformed command: {err}");
                Vec::new()
            }
        }
    }

    /// Apply one decoded message; any direct replies (a re-prompt after a
    /// rejected confirmation) are returned
    pub fn handle_message(&mut self, message: UiToSim) -> Vec<SimToUi> {
        let mut replies = Vec::new();
        match message {
            UiToSim::ReturnShot { outcome } => {
                match self.controller.resolve_return_shot(map_outcome(outcome)) {
                    Ok(()) => {
                        self.prompt_outstanding = false;
                        log::info!("return shot resolved, play resumes");
                    }
                    Err(err @ ReturnShotError::OutOfRange { .. }) => {
                        log::warn!("return shot rejected: {err}");
                        replies.push(self.shot_prompt());
                    }
                    Err(err) => {
                        log::warn!("return shot ignored: {err}");
                    }
                }
            }
            UiToSim::SelectMode { mode } => {
                log::info!("switching view to {mode:?}");
                self.controller.push_command(Command::SelectMode(map_mode(mode)));
            }
            other => {
                if let Some(command) = map_command(other) {
                    self.controller.push_command(command);
                }
            }
        }
        replies
    }

    /// One external timer callback: advance the fixed tick and collect the
    /// outbound messages
    pub fn step(&mut self) -> Vec<SimToUi> {
        self.controller.update(Params::FIXED_DT);
        self.tick += 1;

        let mut out = Vec::new();
        if self.controller.pending_return_shot().is_some() {
            if !self.prompt_outstanding {
                self.prompt_outstanding = true;
                log::info!("defender hit at tick {}, requesting return shot", self.tick);
                out.push(self.shot_prompt());
            }
        } else {
            // a reset mid-pause drops the request without a resolution
            self.prompt_outstanding = false;
        }
        out.push(self.snapshot());
        out
    }

    /// Build the return-shot prompt from the pending request
    pub fn shot_prompt(&self) -> SimToUi {
        let defaults = self
            .controller
            .pending_return_shot()
            .map(|request| request.defaults)
            .unwrap_or(ShotParams {
                force: Params::RETURN_DEFAULT_FORCE,
                angle: Params::RETURN_DEFAULT_ANGLE,
                spin: Params::RETURN_DEFAULT_SPIN,
            });
        SimToUi::ShotPrompt {
            default_force: defaults.force,
            default_angle: defaults.angle,
            default_spin: defaults.spin,
            force_range: (Params::RETURN_FORCE_MIN, Params::RETURN_FORCE_MAX),
            angle_range: (Params::RETURN_ANGLE_MIN, Params::RETURN_ANGLE_MAX),
            spin_range: (Params::SPIN_MIN, Params::SPIN_MAX),
        }
    }

    /// Per-tick state for drawing and the stats readout
    pub fn snapshot(&self) -> SimToUi {
        let balls = {
            let mut query = self.controller.world.query::<&Ball>();
            query
                .iter()
                .map(|(_entity, ball)| BallTelemetry {
                    t: ball.t,
                    x: ball.pos.x,
                    y: ball.pos.y,
                    vx: ball.vel.x,
                    vy: ball.vel.y,
                    spin: ball.spin,
                    bounce_count: ball.bounce_count,
                    active: ball.active,
                })
                .collect()
        };
        SimToUi::Snapshot {
            tick: self.tick,
            mode: mode_to_wire(self.controller.mode),
            balls,
            defender_x: self.controller.defender_x().unwrap_or(0.0),
            pace: self.controller.pace,
            air_preset: self.controller.air_index as u8,
            paused: self.controller.fsm.is_paused(),
            waiting_relaunch: self.controller.relaunch.waiting,
        }
    }
}

fn map_command(message: UiToSim) -> Option<Command> {
    match message {
        UiToSim::Start => Some(Command::Start),
        UiToSim::Reset => Some(Command::Reset),
        UiToSim::SelectMode { mode } => Some(Command::SelectMode(map_mode(mode))),
        UiToSim::AdjustForce { dir } => Some(Command::AdjustForce(dir)),
        UiToSim::AdjustAngle { dir } => Some(Command::AdjustAngle(dir)),
        UiToSim::AdjustSpin { dir } => Some(Command::AdjustSpin(dir)),
        UiToSim::AdjustPace { dir } => Some(Command::AdjustPace(dir)),
        UiToSim::CycleAir => Some(Command::CycleAir),
        UiToSim::Defender { dir } => Some(Command::Defender(dir)),
        UiToSim::ReturnShot { .. } => None,
    }
}

fn map_mode(mode: ViewMode) -> DisplayMode {
    match mode {
        ViewMode::AllCourts => DisplayMode::AllCourts,
        ViewMode::Shot(kind) => DisplayMode::Shot(map_kind(kind)),
    }
}

fn mode_to_wire(mode: DisplayMode) -> ViewMode {
    match mode {
        DisplayMode::AllCourts => ViewMode::AllCourts,
        DisplayMode::Shot(kind) => ViewMode::Shot(kind_to_wire(kind)),
    }
}

fn map_kind(kind: CourtKind) -> SurfaceKind {
    match kind {
        CourtKind::Clay => SurfaceKind::Clay,
        CourtKind::Grass => SurfaceKind::Grass,
        CourtKind::Hard => SurfaceKind::Hard,
        CourtKind::ExhibitionHard => SurfaceKind::ExhibitionHard,
    }
}

fn kind_to_wire(kind: SurfaceKind) -> CourtKind {
    match kind {
        SurfaceKind::Clay => CourtKind::Clay,
        SurfaceKind::Grass => CourtKind::Grass,
        SurfaceKind::Hard => CourtKind::Hard,
        SurfaceKind::ExhibitionHard => CourtKind::ExhibitionHard,
    }
}

fn map_outcome(outcome: WireOutcome) -> ReturnShotOutcome {
    match outcome {
        WireOutcome::Confirmed { force, angle, spin } => {
            ReturnShotOutcome::Confirmed(ShotParams { force, angle, spin })
        }
        WireOutcome::Cancelled => ReturnShotOutcome::Cancelled,
    }
}
