//! The `World` struct and its iteration loop.

use seg_core::{AgentId, Iteration, Position, SimConfig, SimRng};
use tracing::{debug, trace};

use crate::{
    AgentStore, Grid, GridView, IterationSummary, RunSummary, SimError, SimObserver, SimResult,
};

/// What one call to [`World::attempt_move`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The agent was already happy and did not look for a new cell.
    Stayed,
    /// The agent moved to the first vacancy where it would be happy.
    Moved { from: Position, to: Position },
    /// The agent was unhappy and no vacancy would satisfy it.
    Stuck,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The whole model: the occupancy grid plus the population.
///
/// Each iteration:
///
/// 1. **Shuffle**: draw a fresh, uniformly random activation order.  The
///    order is scratch state and is rebuilt from scratch every iteration.
/// 2. **Moves** (sequential, in that order): each agent runs
///    [`attempt_move`](Self::attempt_move).  A move is visible to every agent
///    processed after it in the same iteration.
/// 3. **Report**: count happy agents and hand the summary plus a read-only
///    grid view to the observer.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
#[derive(Debug)]
pub struct World {
    /// The validated configuration this world was built from.
    pub config: SimConfig,

    grid:   Grid,
    agents: AgentStore,

    /// Index of the next iteration to run.
    next_iteration: Iteration,

    /// Activation-order scratch buffer, reused across iterations.
    order: Vec<AgentId>,
}

impl World {
    pub(crate) fn new(config: SimConfig, grid: Grid, agents: AgentStore) -> Self {
        let order = Vec::with_capacity(agents.count);
        Self {
            config,
            grid,
            agents,
            next_iteration: Iteration::ZERO,
            order,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    /// Read-only snapshot for observers and renderers.
    #[inline]
    pub fn view(&self) -> GridView<'_> {
        GridView::new(&self.grid, &self.agents)
    }

    /// Index the next call to [`run_iteration`](Self::run_iteration) will use.
    #[inline]
    pub fn next_iteration(&self) -> Iteration {
        self.next_iteration
    }

    /// Every empty cell, in grid enumeration order.
    pub fn find_vacant_all(&self) -> Vec<Position> {
        self.grid.vacancies()
    }

    /// One uniformly random empty cell, or `None` if the grid is full.
    pub fn find_vacant_one(&self, rng: &mut SimRng) -> Option<Position> {
        self.grid.random_vacancy(rng)
    }

    /// Is `agent` happy at its current cell?
    #[inline]
    pub fn is_happy(&self, agent: AgentId) -> bool {
        self.agents.is_happy(agent, &self.grid)
    }

    /// Would `agent` be happy at `candidate`?
    #[inline]
    pub fn is_happy_at(&self, agent: AgentId, candidate: Position) -> bool {
        self.agents.is_happy_at(agent, candidate, &self.grid)
    }

    /// Number of agents currently happy where they stand.
    pub fn happy_count(&self) -> usize {
        self.agents
            .agent_ids()
            .filter(|&a| self.agents.is_happy(a, &self.grid))
            .count()
    }

    // ── Moves ─────────────────────────────────────────────────────────────

    /// Let one agent decide whether, and where, to move.
    ///
    /// A happy agent stays put.  An unhappy agent scans a snapshot of the
    /// vacancies, taken before anything is mutated, in grid order and takes
    /// the **first** one where it would be happy.  This is first-fit: a later
    /// vacancy with more same-kind neighbors is never preferred.
    pub fn attempt_move(&mut self, agent: AgentId) -> SimResult<MoveOutcome> {
        let from = self.agents.location(agent);
        self.check_agent(agent)?;

        if self.agents.is_happy_at(agent, from, &self.grid) {
            return Ok(MoveOutcome::Stayed);
        }

        let vacancies = self.grid.vacancies();
        let target = vacancies
            .into_iter()
            .find(|&candidate| self.agents.is_happy_at(agent, candidate, &self.grid));

        match target {
            Some(to) => {
                self.relocate(agent, to)?;
                trace!(%agent, %from, %to, "agent relocated");
                Ok(MoveOutcome::Moved { from, to })
            }
            None => Ok(MoveOutcome::Stuck),
        }
    }

    /// Move `agent` to `to`: vacate the old cell, update the back-reference,
    /// occupy the new cell.  The only code path that changes a location.
    pub(crate) fn relocate(&mut self, agent: AgentId, to: Position) -> SimResult<()> {
        if let Some(occupant) = self.grid.get(to) {
            return Err(SimError::TargetOccupied { agent, target: to, occupant });
        }
        let from = self.agents.location(agent);
        let previous = self.grid.set(from, None);
        if previous != Some(agent) {
            // Put the cell back before reporting so the grid is left as found.
            self.grid.set(from, previous);
            return Err(SimError::LocationMismatch { agent, recorded: from, found: previous });
        }
        self.agents.set_location(agent, to);
        self.grid.set(to, Some(agent));
        Ok(())
    }

    /// Fail if `agent`'s recorded location does not hold `agent`.
    fn check_agent(&self, agent: AgentId) -> SimResult<()> {
        let recorded = self.agents.location(agent);
        let found = self.grid.get(recorded);
        if found != Some(agent) {
            return Err(SimError::LocationMismatch { agent, recorded, found });
        }
        Ok(())
    }

    // ── Iteration loop ────────────────────────────────────────────────────

    /// Run one iteration at index [`next_iteration`](Self::next_iteration)
    /// and advance the counter.
    pub fn run_iteration<O: SimObserver>(
        &mut self,
        rng:      &mut SimRng,
        observer: &mut O,
    ) -> SimResult<IterationSummary> {
        let iteration = self.next_iteration;
        observer.on_iteration_start(iteration);

        let mut order = std::mem::take(&mut self.order);
        order.clear();
        order.extend(self.agents.agent_ids());
        rng.shuffle(&mut order);

        let (mut moved, mut stayed, mut stuck) = (0, 0, 0);
        let result = order.iter().try_for_each(|&agent| {
            match self.attempt_move(agent)? {
                MoveOutcome::Stayed => stayed += 1,
                MoveOutcome::Moved { .. } => moved += 1,
                MoveOutcome::Stuck => stuck += 1,
            }
            Ok::<(), SimError>(())
        });
        self.order = order;
        result?;

        debug_assert!(self.check_invariants().is_ok());

        let summary = IterationSummary {
            iteration,
            happy: self.happy_count(),
            total: self.agents.count,
            moved,
            stayed,
            stuck,
        };
        debug!(
            %iteration,
            happy = summary.happy,
            total = summary.total,
            moved,
            stuck,
            "iteration complete"
        );

        observer.on_iteration_end(&summary, self.view());
        self.next_iteration = iteration.next();
        Ok(summary)
    }

    /// Run exactly `config.iterations` iterations.
    ///
    /// There is no early exit: the loop keeps going even once every agent is
    /// happy.
    pub fn run<O: SimObserver>(
        &mut self,
        rng:      &mut SimRng,
        observer: &mut O,
    ) -> SimResult<RunSummary> {
        self.run_iterations(self.config.iterations, rng, observer)
    }

    /// Run exactly `n` iterations from the current index.
    pub fn run_iterations<O: SimObserver>(
        &mut self,
        n:        u64,
        rng:      &mut SimRng,
        observer: &mut O,
    ) -> SimResult<RunSummary> {
        let mut total_moves = 0;
        let mut final_happy = self.happy_count();
        for _ in 0..n {
            let summary = self.run_iteration(rng, observer)?;
            total_moves += summary.moved;
            final_happy = summary.happy;
        }

        let summary = RunSummary {
            iterations: n,
            final_happy,
            total: self.agents.count,
            total_moves,
        };
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Verify the grid/agent bookkeeping:
    ///
    /// - every agent's recorded location holds that agent;
    /// - the number of occupied cells equals the population.
    ///
    /// Together these rule out lost, duplicated, or cross-wired agents.
    pub fn check_invariants(&self) -> SimResult<()> {
        for agent in self.agents.agent_ids() {
            self.check_agent(agent)?;
        }
        let occupied = self.grid.occupied_count();
        if occupied != self.agents.count {
            return Err(SimError::OccupancyMismatch { occupied, agents: self.agents.count });
        }
        Ok(())
    }
}
