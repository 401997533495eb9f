//! `seg-output` — reporting collaborators for the segregation model.
//!
//! Nothing here affects the simulation; every type is a
//! [`SimObserver`][seg_sim::SimObserver] that receives a per-iteration
//! summary and a read-only grid view.
//!
//! | Type                  | Does                                                  |
//! |-----------------------|-------------------------------------------------------|
//! | [`ProgressObserver`]  | `info!` line per iteration, optional ASCII grid       |
//! | [`SimOutputObserver`] | Drives any [`OutputWriter`]                           |
//! | [`CsvWriter`]         | `iteration_summaries.csv`, `grid_snapshots.csv`       |
//! | [`Tee`]               | Fans callbacks out to two observers                   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use seg_output::{CsvWriter, ProgressObserver, SimOutputObserver, Tee};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = Tee(ProgressObserver::new(), SimOutputObserver::new(writer, 1));
//! world.run(&mut rng, &mut obs)?;
//! obs.1.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod progress;
pub mod render;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use progress::{ProgressObserver, Tee};
pub use render::render_ascii;
pub use row::{CellSnapshotRow, IterationSummaryRow};
pub use writer::OutputWriter;
