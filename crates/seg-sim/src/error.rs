use seg_core::{AgentId, Position, SegError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] SegError),

    #[error("{got} explicit placements given for {expected} agents")]
    PlacementCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("invalid placement at {position}: {reason}")]
    InvalidPlacement {
        position: Position,
        reason:   &'static str,
    },

    #[error("ran out of vacancies after placing {placed} of {requested} agents")]
    OutOfVacancies {
        placed:    usize,
        requested: usize,
    },

    // ── Invariant violations (engine bugs) ─────────────────────────────────

    #[error("invariant violated: {agent} cannot move to {target}, already held by {occupant}")]
    TargetOccupied {
        agent:    AgentId,
        target:   Position,
        occupant: AgentId,
    },

    #[error("invariant violated: {agent} records {recorded} but that cell holds {found:?}")]
    LocationMismatch {
        agent:    AgentId,
        recorded: Position,
        found:    Option<AgentId>,
    },

    #[error("invariant violated: {occupied} occupied cells for {agents} agents")]
    OccupancyMismatch {
        occupied: usize,
        agents:   usize,
    },
}

impl SimError {
    /// `true` for errors that indicate a bug in the engine rather than bad
    /// input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            SimError::TargetOccupied { .. }
                | SimError::LocationMismatch { .. }
                | SimError::OccupancyMismatch { .. }
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;
