//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `grid_snapshots.csv`
//! - `iteration_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CellSnapshotRow, IterationSummaryRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("grid_snapshots.csv"))?;
        snapshots.write_record(["iteration", "x", "y", "kind"])?;

        let mut summaries = Writer::from_path(dir.join("iteration_summaries.csv"))?;
        summaries.write_record(["iteration", "happy", "total", "moved", "stuck"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.iteration.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.kind.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_iteration_summary(&mut self, row: &IterationSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.iteration.to_string(),
            row.happy.to_string(),
            row.total.to_string(),
            row.moved.to_string(),
            row.stuck.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
