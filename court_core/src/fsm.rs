//! Run-phase state machine.
//!
//! One machine covers every display mode: the drop view only ever moves
//! between Idle, Flight and Complete, while the shot modes add the
//! relaunch-wait and paused-for-hit phases.

/// Lifecycle phases of the current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Waiting for a start command; balls are seeded but not advancing
    Idle,
    /// Physics advancing every tick
    Flight,
    /// Ball left play; raw-time countdown to an automatic relaunch
    RelaunchWait,
    /// Defender was struck; flight is frozen until the return shot resolves
    PausedForHit,
    /// Every ball has settled (drop view only)
    Complete,
}

/// Actions that drive phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseAction {
    Start,
    Reset,
    /// Ball deactivated in a shot mode (bounds exit or bounce exhaustion)
    BallOut,
    RelaunchFired,
    DefenderHit,
    ShotResolved,
    /// All drop balls inactive
    AllSettled,
}

/// Phase machine with a total transition table; invalid (phase, action)
/// pairs are rejected without a state change.
#[derive(Debug, Clone, Copy)]
pub struct MatchFsm {
    phase: RunPhase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Idle,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Check whether an action is valid in the current phase
    pub fn can_apply(&self, action: PhaseAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition; returns whether it was taken
    pub fn apply(&mut self, action: PhaseAction) -> bool {
        match self.next_phase(action) {
            Some(next) => {
                self.phase = next;
                true
            }
            None => false,
        }
    }

    fn next_phase(&self, action: PhaseAction) -> Option<RunPhase> {
        match (self.phase, action) {
            (RunPhase::Idle, PhaseAction::Start) => Some(RunPhase::Flight),

            (RunPhase::Flight, PhaseAction::BallOut) => Some(RunPhase::RelaunchWait),
            (RunPhase::Flight, PhaseAction::DefenderHit) => Some(RunPhase::PausedForHit),
            (RunPhase::Flight, PhaseAction::AllSettled) => Some(RunPhase::Complete),

            (RunPhase::RelaunchWait, PhaseAction::RelaunchFired) => Some(RunPhase::Flight),

            (RunPhase::PausedForHit, PhaseAction::ShotResolved) => Some(RunPhase::Flight),

            (RunPhase::Complete, PhaseAction::Start) => Some(RunPhase::Flight),

            // Reset always returns to Idle
            (_, PhaseAction::Reset) => Some(RunPhase::Idle),

            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.phase = RunPhase::Idle;
    }

    /// True while the mode is live (flight, waiting, or paused)
    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            RunPhase::Flight | RunPhase::RelaunchWait | RunPhase::PausedForHit
        )
    }

    pub fn is_idle(&self) -> bool {
        self.phase == RunPhase::Idle
    }

    pub fn is_paused(&self) -> bool {
        self.phase == RunPhase::PausedForHit
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let fsm = MatchFsm::new();
        assert_eq!(fsm.phase(), RunPhase::Idle);
        assert!(fsm.is_idle());
    }

    #[test]
    fn test_shot_mode_flow() {
        let mut fsm = MatchFsm::new();
        assert!(fsm.apply(PhaseAction::Start));
        assert_eq!(fsm.phase(), RunPhase::Flight);
        assert!(fsm.apply(PhaseAction::BallOut));
        assert_eq!(fsm.phase(), RunPhase::RelaunchWait);
        assert!(fsm.apply(PhaseAction::RelaunchFired));
        assert_eq!(fsm.phase(), RunPhase::Flight);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut fsm = MatchFsm::new();
        fsm.apply(PhaseAction::Start);
        assert!(fsm.apply(PhaseAction::DefenderHit));
        assert!(fsm.is_paused());
        assert!(fsm.apply(PhaseAction::ShotResolved));
        assert_eq!(fsm.phase(), RunPhase::Flight);
    }

    #[test]
    fn test_invalid_action_rejected_without_change() {
        let mut fsm = MatchFsm::new();
        assert!(!fsm.can_apply(PhaseAction::DefenderHit));
        assert!(!fsm.apply(PhaseAction::DefenderHit));
        assert_eq!(fsm.phase(), RunPhase::Idle);
        fsm.apply(PhaseAction::Start);
        assert!(!fsm.apply(PhaseAction::RelaunchFired));
        assert_eq!(fsm.phase(), RunPhase::Flight);
    }

    #[test]
    fn test_reset_from_any_phase() {
        for actions in [
            vec![],
            vec![PhaseAction::Start],
            vec![PhaseAction::Start, PhaseAction::BallOut],
            vec![PhaseAction::Start, PhaseAction::DefenderHit],
            vec![PhaseAction::Start, PhaseAction::AllSettled],
        ] {
            let mut fsm = MatchFsm::new();
            for action in actions {
                fsm.apply(action);
            }
            assert!(fsm.apply(PhaseAction::Reset));
            assert_eq!(fsm.phase(), RunPhase::Idle);
        }
    }

    #[test]
    fn test_complete_can_restart() {
        let mut fsm = MatchFsm::new();
        fsm.apply(PhaseAction::Start);
        fsm.apply(PhaseAction::AllSettled);
        assert_eq!(fsm.phase(), RunPhase::Complete);
        assert!(fsm.apply(PhaseAction::Start));
        assert_eq!(fsm.phase(), RunPhase::Flight);
    }
}
