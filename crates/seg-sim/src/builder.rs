//! Fluent builder for constructing a [`World`].

use std::collections::HashSet;

use seg_core::{AgentId, AgentKind, Position, SimConfig, SimRng};
use tracing::debug;

use crate::agent::split_kinds;
use crate::{AgentStore, Grid, SimError, SimResult, World};

/// Fluent builder for [`World`].
///
/// # Required inputs
///
/// - [`SimConfig`] — grid size, population, preference, iterations, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                              |
/// |---------------------|------------------------------------------------------|
/// | `.placements(v)`    | Kinds split by index, each agent dropped on a random vacancy |
///
/// # Example
///
/// ```rust,ignore
/// let mut rng = SimRng::new(config.seed);
/// let mut world = WorldBuilder::new(config).build(&mut rng)?;
/// world.run(&mut rng, &mut NoopObserver)?;
/// ```
pub struct WorldBuilder {
    config:     SimConfig,
    placements: Option<Vec<(AgentKind, Position)>>,
}

impl WorldBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, placements: None }
    }

    /// Supply an explicit kind and starting cell for every agent.
    ///
    /// Must have exactly `config.agent_count` entries, all in bounds, no two
    /// on the same cell, and every kind below `config.kind_count`.  Agent `i`
    /// gets entry `i`.
    pub fn placements(mut self, placements: Vec<(AgentKind, Position)>) -> Self {
        self.placements = Some(placements);
        self
    }

    /// Validate the configuration, build the empty grid and the population,
    /// and place every agent.
    ///
    /// Random placement visits agents in index order and gives each a
    /// uniformly random cell among those still vacant.
    pub fn build(self, rng: &mut SimRng) -> SimResult<World> {
        let config = self.config;
        config.validate()?;

        let mut grid = Grid::new(config.width, config.height);

        let (kinds, locations) = match self.placements {
            Some(p) => explicit_placements(&config, &grid, p)?,
            None => {
                let kinds = split_kinds(config.agent_count, config.kind_count);
                let locations = random_placements(&grid, config.agent_count, rng)?;
                (kinds, locations)
            }
        };

        for (i, &pos) in locations.iter().enumerate() {
            grid.set(pos, Some(AgentId(i as u32)));
        }

        let prefs = vec![config.same_preference; config.agent_count];
        let agents = AgentStore::new(kinds, prefs, locations);

        debug!(
            width = config.width,
            height = config.height,
            agents = agents.count,
            same_preference = config.same_preference,
            "world initialised"
        );

        let world = World::new(config, grid, agents);
        world.check_invariants()?;
        Ok(world)
    }
}

/// Draw `count` distinct cells, one per agent in index order, each uniform
/// over the cells still vacant at that point.
fn random_placements(grid: &Grid, count: usize, rng: &mut SimRng) -> SimResult<Vec<Position>> {
    let mut vacant = grid.vacancies();
    let mut locations = Vec::with_capacity(count);
    for placed in 0..count {
        if vacant.is_empty() {
            return Err(SimError::OutOfVacancies { placed, requested: count });
        }
        let pick = rng.gen_range(0..vacant.len());
        locations.push(vacant.swap_remove(pick));
    }
    Ok(locations)
}

fn explicit_placements(
    config:     &SimConfig,
    grid:       &Grid,
    placements: Vec<(AgentKind, Position)>,
) -> SimResult<(Vec<AgentKind>, Vec<Position>)> {
    if placements.len() != config.agent_count {
        return Err(SimError::PlacementCountMismatch {
            expected: config.agent_count,
            got:      placements.len(),
        });
    }

    let mut seen = HashSet::with_capacity(placements.len());
    for &(kind, position) in &placements {
        if grid.index_of(position).is_none() {
            return Err(SimError::InvalidPlacement { position, reason: "outside the grid" });
        }
        if kind.0 >= config.kind_count {
            return Err(SimError::InvalidPlacement { position, reason: "unknown agent kind" });
        }
        if !seen.insert(position) {
            return Err(SimError::InvalidPlacement { position, reason: "cell already taken" });
        }
    }

    Ok(placements.into_iter().unzip())
}
