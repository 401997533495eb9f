//! Progress reporting through `tracing`.

use seg_sim::{GridView, IterationSummary, RunSummary, SimObserver};
use tracing::{debug, info};

use crate::render_ascii;

/// Logs one line per iteration at `info` level, and the rendered grid at
/// `debug` level.
///
/// Compose with other observers by wrapping; it holds no state besides the
/// render switch.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProgressObserver {
    render_grid: bool,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also emit the ASCII grid (at `debug` level) after every iteration.
    pub fn with_grid(mut self) -> Self {
        self.render_grid = true;
        self
    }
}

impl SimObserver for ProgressObserver {
    fn on_iteration_end(&mut self, summary: &IterationSummary, grid: GridView<'_>) {
        info!(
            iteration = summary.iteration.0,
            happy = summary.happy,
            total = summary.total,
            moved = summary.moved,
            stuck = summary.stuck,
            happy_fraction = summary.happy_fraction(),
            "iteration report: {}/{} agents are happy",
            summary.happy,
            summary.total
        );
        if self.render_grid {
            debug!(iteration = summary.iteration.0, "grid state\n{}", render_ascii(grid));
        }
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        info!(
            iterations = summary.iterations,
            final_happy = summary.final_happy,
            total = summary.total,
            total_moves = summary.total_moves,
            "simulation complete"
        );
    }
}

/// Fan one set of callbacks out to two observers, first `.0` then `.1`.
pub struct Tee<A, B>(pub A, pub B);

impl<A: SimObserver, B: SimObserver> SimObserver for Tee<A, B> {
    fn on_iteration_start(&mut self, iteration: seg_core::Iteration) {
        self.0.on_iteration_start(iteration);
        self.1.on_iteration_start(iteration);
    }

    fn on_iteration_end(&mut self, summary: &IterationSummary, grid: GridView<'_>) {
        self.0.on_iteration_end(summary, grid);
        self.1.on_iteration_end(summary, grid);
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        self.0.on_sim_end(summary);
        self.1.on_sim_end(summary);
    }
}
