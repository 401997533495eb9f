//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CellSnapshotRow, IterationSummaryRow, OutputResult};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the occupied cells of one grid snapshot.
    fn write_snapshot(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()>;

    /// Write one iteration summary row.
    fn write_iteration_summary(&mut self, row: &IterationSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
