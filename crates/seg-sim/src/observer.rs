//! Simulation observer trait for progress reporting and data collection.

use seg_core::Iteration;

use crate::GridView;

/// Outcome tallies for one completed iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IterationSummary {
    pub iteration: Iteration,
    /// Agents happy at their location after every move of this iteration.
    pub happy:     usize,
    /// Population size.
    pub total:     usize,
    pub moved:     usize,
    pub stayed:    usize,
    pub stuck:     usize,
}

impl IterationSummary {
    /// Share of the population that is happy, in `[0, 1]`.
    pub fn happy_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.happy as f64 / self.total as f64
        }
    }
}

/// Totals for a finished run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations:  u64,
    pub final_happy: usize,
    pub total:       usize,
    pub total_moves: usize,
}

/// Callbacks invoked by [`World::run`][crate::World::run] at key points in
/// the iteration loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers cannot influence the
/// simulation; the run is identical with or without them.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_iteration_end(&mut self, s: &IterationSummary, _grid: GridView<'_>) {
///         println!("{}: {}/{} agents are happy", s.iteration, s.happy, s.total);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the activation order of an iteration is drawn.
    fn on_iteration_start(&mut self, _iteration: Iteration) {}

    /// Called once per iteration after every agent has had its turn.
    ///
    /// `grid` is a read-only view of the occupancy at that instant.
    fn on_iteration_end(&mut self, _summary: &IterationSummary, _grid: GridView<'_>) {}

    /// Called once after the final iteration completes.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_iteration_start(&mut self, iteration: Iteration) {
        (**self).on_iteration_start(iteration);
    }

    fn on_iteration_end(&mut self, summary: &IterationSummary, grid: GridView<'_>) {
        (**self).on_iteration_end(summary, grid);
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        (**self).on_sim_end(summary);
    }
}
