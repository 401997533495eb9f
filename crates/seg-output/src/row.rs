//! Plain data row types written by output backends.

use seg_sim::IterationSummary;

/// One occupied cell at a given iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSnapshotRow {
    pub iteration: u64,
    pub x:         i32,
    pub y:         i32,
    /// Agent kind label (`A`, `B`, …).
    pub kind:      char,
}

/// Summary statistics for one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationSummaryRow {
    pub iteration: u64,
    pub happy:     u64,
    pub total:     u64,
    pub moved:     u64,
    pub stuck:     u64,
}

impl From<&IterationSummary> for IterationSummaryRow {
    fn from(s: &IterationSummary) -> Self {
        Self {
            iteration: s.iteration.0,
            happy:     s.happy as u64,
            total:     s.total as u64,
            moved:     s.moved as u64,
            stuck:     s.stuck as u64,
        }
    }
}
