//! Message contract between the simulation core and the presentation layer
//!
//! Uses postcard for compact binary serialization. The crate is
//! self-contained: the presentation side can depend on it without pulling in
//! the physics.

use postcard::{from_bytes, to_allocvec};

/// Court surface selector as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CourtKind {
    Clay,
    Grass,
    Hard,
    ExhibitionHard,
}

/// Display mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ViewMode {
    /// Four vertical drops, one per surface
    AllCourts,
    /// Horizontal shot against the defender on one surface
    Shot(CourtKind),
}

/// Result of the return-shot dialog
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ReturnShotOutcome {
    Confirmed { force: f32, angle: f32, spin: f32 },
    Cancelled,
}

// ============================================================================
// UI -> Sim
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum UiToSim {
    /// Start or restart the current mode
    Start,
    /// Return every ball to its seeded state
    Reset,
    /// Switch the display mode
    SelectMode { mode: ViewMode },
    /// Launch force +/- 10 N; dir is the sign
    AdjustForce { dir: i8 },
    /// Launch angle +/- one configured step (keyboard or mouse wheel)
    AdjustAngle { dir: i8 },
    /// Launch spin +/- one configured step
    AdjustSpin { dir: i8 },
    /// Visual pace x1.1 / /1.1
    AdjustPace { dir: i8 },
    /// Cycle the air-resistance preset (pointer click on the control region)
    CycleAir,
    /// Defender walk direction: -1 = toward the net, 0 = stop, 1 = away
    Defender { dir: i8 },
    /// Deliver the return-shot dialog result
    ReturnShot { outcome: ReturnShotOutcome },
}

// ============================================================================
// Sim -> UI
// ============================================================================

/// Telemetry for one ball, enough for drawing and the stats readout
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BallTelemetry {
    pub t: f32,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub spin: f32,
    pub bounce_count: u32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SimToUi {
    /// Per-tick state for drawing
    Snapshot {
        tick: u32,
        mode: ViewMode,
        balls: Vec<BallTelemetry>,
        defender_x: f32,
        pace: f32,
        air_preset: u8,
        paused: bool,
        waiting_relaunch: bool,
    },

    /// The match paused on a defender hit; collect return-shot parameters.
    /// Defaults are the last confirmed values, ranges are the validation
    /// bounds the dialog should enforce before sending them back.
    ShotPrompt {
        default_force: f32,
        default_angle: f32,
        default_spin: f32,
        force_range: (f32, f32),
        angle_range: (f32, f32),
        spin_range: (f32, f32),
    },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl UiToSim {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl SimToUi {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
