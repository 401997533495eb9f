//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use seg_sim::{GridView, IterationSummary, RunSummary, SimObserver};

use crate::row::{CellSnapshotRow, IterationSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes iteration summaries and grid snapshots to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `world.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    /// Write a grid snapshot every N iterations; 0 disables snapshots.
    snapshot_every: u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` that snapshots the grid every
    /// `snapshot_every` iterations (0 = summaries only).
    pub fn new(writer: W, snapshot_every: u64) -> Self {
        Self {
            writer,
            snapshot_every,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `world.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_iteration_end(&mut self, summary: &IterationSummary, grid: GridView<'_>) {
        let result = self.writer.write_iteration_summary(&IterationSummaryRow::from(summary));
        self.store_err(result);

        let iteration = summary.iteration.0;
        if self.snapshot_every == 0 || !iteration.is_multiple_of(self.snapshot_every) {
            return;
        }

        let rows: Vec<CellSnapshotRow> = grid
            .cells()
            .filter_map(|(pos, kind)| {
                kind.map(|k| CellSnapshotRow {
                    iteration,
                    x:    pos.x,
                    y:    pos.y,
                    kind: k.label(),
                })
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshot(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
