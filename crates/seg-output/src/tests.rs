//! Integration tests for seg-output.

#[cfg(test)]
fn small_world() -> seg_sim::World {
    use seg_core::{AgentKind, Position, SimConfig, SimRng};
    use seg_sim::WorldBuilder;

    let config = SimConfig {
        width:           3,
        height:          2,
        agent_count:     2,
        same_preference: 1,
        kind_count:      2,
        iterations:      2,
        seed:            5,
    };
    WorldBuilder::new(config)
        .placements(vec![
            (AgentKind::A, Position::new(0, 0)),
            (AgentKind::B, Position::new(2, 1)),
        ])
        .build(&mut SimRng::new(5))
        .unwrap()
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{CellSnapshotRow, IterationSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn cell_row(iteration: u64, x: i32, y: i32, kind: char) -> CellSnapshotRow {
        CellSnapshotRow { iteration, x, y, kind }
    }

    fn summary_row(iteration: u64) -> IterationSummaryRow {
        IterationSummaryRow { iteration, happy: 7, total: 10, moved: 2, stuck: 1 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("grid_snapshots.csv").exists());
        assert!(dir.path().join("iteration_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("grid_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["iteration", "x", "y", "kind"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("iteration_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["iteration", "happy", "total", "moved", "stuck"]);
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshot(&[cell_row(3, 0, 1, 'A'), cell_row(3, 2, 2, 'B')]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("grid_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[0][3], "A");
        assert_eq!(&rows[1][3], "B");
    }

    #[test]
    fn csv_iteration_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_iteration_summary(&summary_row(4)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("iteration_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");  // iteration
        assert_eq!(&rows[0][1], "7");  // happy
        assert_eq!(&rows[0][2], "10"); // total
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_is_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use seg_core::{SimConfig, SimRng};
    use seg_sim::WorldBuilder;
    use tempfile::TempDir;

    use crate::row::{CellSnapshotRow, IterationSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputResult, SimOutputObserver};

    /// In-memory writer for inspecting what the observer emits.
    #[derive(Default)]
    struct MemWriter {
        snapshots: Vec<CellSnapshotRow>,
        summaries: Vec<IterationSummaryRow>,
        finishes:  usize,
    }

    impl OutputWriter for MemWriter {
        fn write_snapshot(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()> {
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }

        fn write_iteration_summary(&mut self, row: &IterationSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    /// Writer whose every call fails.
    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_snapshot(&mut self, _rows: &[CellSnapshotRow]) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }

        fn write_iteration_summary(&mut self, _row: &IterationSummaryRow) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn summaries_every_iteration_snapshots_on_interval() {
        let config = SimConfig { iterations: 5, ..SimConfig::default() };
        let mut rng = SimRng::new(config.seed);
        let mut world = WorldBuilder::new(config).build(&mut rng).unwrap();

        let mut obs = SimOutputObserver::new(MemWriter::default(), 2);
        world.run(&mut rng, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.summaries.len(), 5);
        assert_eq!(w.finishes, 1);
        // Iterations 0, 2, 4 → 3 snapshots of 200 occupied cells each.
        assert_eq!(w.snapshots.len(), 3 * 200);
        assert!(w.snapshots.iter().all(|r| r.iteration % 2 == 0));
    }

    #[test]
    fn snapshot_interval_zero_disables_snapshots() {
        let mut world = super::small_world();
        let mut obs = SimOutputObserver::new(MemWriter::default(), 0);
        world.run(&mut SimRng::new(1), &mut obs).unwrap();
        let w = obs.into_writer();
        assert_eq!(w.summaries.len(), 2);
        assert!(w.snapshots.is_empty());
    }

    #[test]
    fn snapshot_rows_carry_kind_labels() {
        let mut world = super::small_world();
        let mut obs = SimOutputObserver::new(MemWriter::default(), 1);
        world.run_iterations(1, &mut SimRng::new(1), &mut obs).unwrap();
        let w = obs.into_writer();
        let mut kinds: Vec<char> = w.snapshots.iter().map(|r| r.kind).collect();
        kinds.sort();
        assert_eq!(kinds, vec!['A', 'B']);
    }

    #[test]
    fn first_error_is_kept() {
        let mut world = super::small_world();
        let mut obs = SimOutputObserver::new(FailingWriter, 1);
        world.run(&mut SimRng::new(1), &mut obs).unwrap();
        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let config = SimConfig { width: 6, height: 6, agent_count: 20, iterations: 3, ..SimConfig::default() };
        let mut rng = SimRng::new(config.seed);
        let mut world = WorldBuilder::new(config).build(&mut rng).unwrap();

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, 1);
        world.run(&mut rng, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("iteration_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 3);

        let mut rdr = csv::Reader::from_path(dir.path().join("grid_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 3 * 20);
    }
}

#[cfg(test)]
mod render_tests {
    use seg_core::SimRng;

    use crate::render_ascii;

    #[test]
    fn renders_rows_by_y() {
        let world = super::small_world();
        assert_eq!(render_ascii(world.view()), "A..\n..B\n");
    }

    #[test]
    fn render_has_one_char_per_cell() {
        let mut world = super::small_world();
        world.run(&mut SimRng::new(3), &mut seg_sim::NoopObserver).unwrap();
        let text = render_ascii(world.view());
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.chars().count() == 3));
        assert_eq!(text.chars().filter(|c| *c == 'A' || *c == 'B').count(), 2);
    }
}

#[cfg(test)]
mod progress_tests {
    use seg_core::{Iteration, SimRng};
    use seg_sim::{GridView, IterationSummary, SimObserver};

    use crate::{ProgressObserver, Tee};

    #[derive(Default)]
    struct Count(usize, usize);

    impl SimObserver for Count {
        fn on_iteration_start(&mut self, _i: Iteration) {
            self.0 += 1;
        }
        fn on_iteration_end(&mut self, _s: &IterationSummary, _g: GridView<'_>) {
            self.1 += 1;
        }
    }

    #[test]
    fn progress_observer_runs_without_subscriber() {
        let mut world = super::small_world();
        let mut obs = ProgressObserver::new().with_grid();
        world.run(&mut SimRng::new(1), &mut obs).unwrap();
    }

    #[test]
    fn tee_forwards_to_both() {
        let mut world = super::small_world();
        let mut tee = Tee(Count::default(), Count::default());
        world.run(&mut SimRng::new(1), &mut tee).unwrap();
        assert_eq!((tee.0.0, tee.0.1), (2, 2));
        assert_eq!((tee.1.0, tee.1.1), (2, 2));
    }
}
