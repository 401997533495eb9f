//! Agent storage: kind, preference, and location as Structure-of-Arrays.
//!
//! # Location is a back-reference
//!
//! The [`Grid`] is the single source of truth for who sits where.  Each
//! agent's `location` mirrors its grid cell and is written in exactly one
//! place, [`World::relocate`][crate::World], so the two never drift apart.
//! Outside this crate `location` is read-only.
//!
//! # Happiness
//!
//! An agent is happy at a cell when at least `same_preference` of the cell's
//! 8 toroidal neighbors hold an agent of the same kind.  Every occupied
//! neighbor counts, including the agent's own cell: a candidate next to the
//! cell the agent is about to vacate sees the agent there, and on a torus one
//! cell wide or tall the wrapped offsets land back on the agent itself.

use seg_core::{AgentId, AgentKind, Position};

use crate::Grid;

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for the whole population.
///
/// Every `Vec` has exactly `count` elements; the `AgentId` value is the index
/// into all of them:
///
/// ```ignore
/// let kind = store.kind[agent.index()];  // O(1), cache-friendly
/// ```
#[derive(Clone, Debug)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Immutable agent kind.
    pub kind: Vec<AgentKind>,

    /// Minimum same-kind neighbor count for happiness.  Immutable.
    pub same_preference: Vec<u8>,

    /// Current cell.  Mirrors the grid; see the module docs.
    location: Vec<Position>,
}

impl AgentStore {
    /// Assemble a store from per-agent columns of equal length.
    pub(crate) fn new(
        kind:            Vec<AgentKind>,
        same_preference: Vec<u8>,
        location:        Vec<Position>,
    ) -> Self {
        debug_assert_eq!(kind.len(), same_preference.len());
        debug_assert_eq!(kind.len(), location.len());
        Self {
            count: kind.len(),
            kind,
            same_preference,
            location,
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn kind(&self, agent: AgentId) -> AgentKind {
        self.kind[agent.index()]
    }

    #[inline]
    pub fn same_preference(&self, agent: AgentId) -> u8 {
        self.same_preference[agent.index()]
    }

    /// The agent's current cell.
    #[inline]
    pub fn location(&self, agent: AgentId) -> Position {
        self.location[agent.index()]
    }

    /// Only [`World::relocate`][crate::World] may call this.
    #[inline]
    pub(crate) fn set_location(&mut self, agent: AgentId, to: Position) {
        self.location[agent.index()] = to;
    }

    // ── Happiness predicate ───────────────────────────────────────────────

    /// Count the same-kind occupants among the 8 neighbors of `at`.
    ///
    /// Returns `(same, considered)` where `considered` is the number of
    /// neighbor cells inspected.
    pub fn same_kind_neighbors(&self, agent: AgentId, at: Position, grid: &Grid) -> (usize, usize) {
        let kind = self.kind(agent);
        let neighbors = grid.neighbors(at);
        let same = neighbors
            .iter()
            .filter_map(|&p| grid.get(p))
            .filter(|&other| self.kind(other) == kind)
            .count();
        (same, neighbors.len())
    }

    /// Would `agent` be happy at `at`?  Pure query; `at` need not be the
    /// agent's current cell.
    pub fn is_happy_at(&self, agent: AgentId, at: Position, grid: &Grid) -> bool {
        let (same, considered) = self.same_kind_neighbors(agent, at, grid);
        // Unreachable on a torus, which always yields 8 neighbor cells.
        if considered == 0 {
            return false;
        }
        same >= self.same_preference(agent) as usize
    }

    /// Is `agent` happy where it currently stands?
    #[inline]
    pub fn is_happy(&self, agent: AgentId, grid: &Grid) -> bool {
        self.is_happy_at(agent, self.location(agent), grid)
    }

    /// Number of agents of each kind, indexed by `AgentKind::index()`.
    pub fn kind_counts(&self) -> Vec<usize> {
        let mut counts = Vec::new();
        for k in &self.kind {
            if counts.len() <= k.index() {
                counts.resize(k.index() + 1, 0);
            }
            counts[k.index()] += 1;
        }
        counts
    }
}

// ── Kind assignment ───────────────────────────────────────────────────────────

/// Kind of agent `index` in a population of `count` split into `kinds`
/// contiguous blocks: `floor(index * kinds / count)`.
///
/// With two kinds, agent `i` is [`AgentKind::A`] iff `2 * i < count`, so an
/// odd population gives `A` the extra agent.
pub fn kind_for_index(index: usize, count: usize, kinds: u8) -> AgentKind {
    debug_assert!(index < count && kinds > 0);
    AgentKind(((index as u64 * kinds as u64) / count as u64) as u8)
}

/// Kinds for a whole population, in index order.
pub fn split_kinds(count: usize, kinds: u8) -> Vec<AgentKind> {
    (0..count).map(|i| kind_for_index(i, count, kinds)).collect()
}
