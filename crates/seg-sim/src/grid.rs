//! Toroidal occupancy grid.
//!
//! Every cell of `[0, width) × [0, height)` has an entry; an entry is either
//! empty or holds exactly one `AgentId`.  Cells are stored column-major
//! (`x` outer, `y` inner) and every enumeration — including the vacancy list
//! the relocation search scans — follows that order.

use seg_core::{AgentId, AgentKind, Position, SimRng};

use crate::AgentStore;

/// Cell → occupant mapping on a torus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width:  i32,
    height: i32,
    cells:  Vec<Option<AgentId>>,
}

impl Grid {
    /// An all-empty grid.  Dimensions are assumed validated by
    /// [`SimConfig::validate`][seg_core::SimConfig::validate].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width:  width as i32,
            height: height as i32,
            cells:  vec![None; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Storage index of an in-bounds position.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        pos.in_bounds(self.width, self.height)
            .then(|| (pos.x * self.height + pos.y) as usize)
    }

    /// Position stored at `index`.
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        let index = index as i32;
        Position::new(index / self.height, index % self.height)
    }

    /// Occupant of `pos`, wrapping out-of-range coordinates onto the torus.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<AgentId> {
        let wrapped = pos.wrap(self.width, self.height);
        self.cells[(wrapped.x * self.height + wrapped.y) as usize]
    }

    #[inline]
    pub fn is_vacant(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Overwrite one cell and return its previous occupant.
    ///
    /// Crate-private: only construction and the world's relocation routine
    /// write cells.
    pub(crate) fn set(&mut self, pos: Position, occupant: Option<AgentId>) -> Option<AgentId> {
        let wrapped = pos.wrap(self.width, self.height);
        let index = (wrapped.x * self.height + wrapped.y) as usize;
        std::mem::replace(&mut self.cells[index], occupant)
    }

    /// The 8 toroidal neighbors of `pos`.
    #[inline]
    pub fn neighbors(&self, pos: Position) -> [Position; 8] {
        pos.neighbors(self.width, self.height)
    }

    /// Every empty cell, in storage order.
    pub fn vacancies(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| self.position_of(i))
            .collect()
    }

    /// One uniformly random empty cell, or `None` if the grid is full.
    pub fn random_vacancy(&self, rng: &mut SimRng) -> Option<Position> {
        rng.choose(&self.vacancies()).copied()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterator over `(position, occupant)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<AgentId>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (self.position_of(i), c))
    }
}

// ── GridView ──────────────────────────────────────────────────────────────────

/// Read-only snapshot handed to observers: enough to render each cell's
/// occupant kind without exposing anything mutable.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    grid:   &'a Grid,
    agents: &'a AgentStore,
}

impl<'a> GridView<'a> {
    pub fn new(grid: &'a Grid, agents: &'a AgentStore) -> Self {
        Self { grid, agents }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Kind of the agent at `pos`, or `None` for an empty cell.
    #[inline]
    pub fn kind_at(&self, pos: Position) -> Option<AgentKind> {
        self.grid.get(pos).map(|id| self.agents.kind(id))
    }

    /// `(position, kind)` for every cell in storage order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<AgentKind>)> + 'a {
        let (grid, agents) = (self.grid, self.agents);
        grid.iter()
            .map(move |(p, c)| (p, c.map(|id| agents.kind(id))))
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn agents(&self) -> &'a AgentStore {
        self.agents
    }
}
