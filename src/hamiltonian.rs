//! The [HamiltonianCycle] facade: validates a grid, builds its cycle once and
//! answers successor queries against it.
use num_format::{Locale, ToFormattedString};
use rand::{rngs::SmallRng, thread_rng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::CycleConfig;
use crate::cycle::build_cycle;
use crate::debug::DebugDump;
use crate::dimensions::GridDimensions;
use crate::error::GridError;
use crate::maze::{generate_maze, Maze};
use crate::snapshot::CycleSnapshot;
use crate::types::Direction;

/// A closed path through every cell of an even by even grid.
///
/// The cycle is generated once, when the value is built, and never changes
/// afterwards. Two index spaces are in play: a *position* is an index into the
/// cycle sequence, a *cell* is a row major cell id of the grid. The
/// `get_*` methods work on positions, the others on cells.
///
/// ```
/// use hcycle_grid::HamiltonianCycle;
///
/// let hc = HamiltonianCycle::from_seed(4, 4, 7).unwrap();
/// let head = 5;
/// let next = hc.next_cell(head).unwrap();
/// assert_eq!(hc.dimensions().manhattan(head, next), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CycleSnapshot", into = "CycleSnapshot")]
pub struct HamiltonianCycle {
    dimensions: GridDimensions,
    cycle: Box<[usize]>,
    // positions[cell] is the index of cell in cycle
    positions: Box<[usize]>,
}

impl HamiltonianCycle {
    /// Builds a cycle over a `cols` x `rows` grid from a fresh random maze.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is odd or zero. Use [HamiltonianCycle::try_new]
    /// to handle that case instead.
    pub fn new(cols: usize, rows: usize) -> Self {
        match Self::try_new(cols, rows) {
            Ok(hc) => hc,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds a cycle over a `cols` x `rows` grid from a fresh random maze
    pub fn try_new(cols: usize, rows: usize) -> Result<Self, GridError> {
        Self::with_rng(cols, rows, &mut thread_rng())
    }

    /// Builds a cycle with every random choice drawn from `rng`
    pub fn with_rng(cols: usize, rows: usize, rng: &mut impl Rng) -> Result<Self, GridError> {
        let dimensions = GridDimensions::new(cols, rows)?;
        let maze = generate_maze(dimensions, rng);
        Ok(Self::from_maze(&maze))
    }

    /// Builds a cycle from the maze drawn from `seed`. The same seed and grid
    /// always give the same cycle
    pub fn from_seed(cols: usize, rows: usize, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(cols, rows, &mut SmallRng::seed_from_u64(seed))
    }

    /// Builds a cycle as described by `config`
    pub fn from_config(config: &CycleConfig) -> Result<Self, GridError> {
        match config.seed {
            Some(seed) => Self::from_seed(config.cols, config.rows, seed),
            None => Self::with_rng(config.cols, config.rows, &mut SmallRng::from_entropy()),
        }
    }

    /// Builds the cycle that outlines an existing maze
    pub fn from_maze(maze: &Maze) -> Self {
        let dimensions = maze.dimensions();
        let cycle = build_cycle(dimensions, maze);
        trace!("{}", DebugDump::new(maze, &cycle));

        let hc = Self::from_verified_cycle(dimensions, cycle);
        debug!(
            cols = dimensions.cols(),
            rows = dimensions.rows(),
            cells = %dimensions.cell_count().to_formatted_string(&Locale::en),
            "built hamiltonian cycle"
        );
        hc
    }

    /// `cycle` must already be a hamiltonian cycle of `dimensions`
    pub(crate) fn from_verified_cycle(dimensions: GridDimensions, cycle: Vec<usize>) -> Self {
        let mut positions = vec![0; cycle.len()];
        for (position, &cell) in cycle.iter().enumerate() {
            positions[cell] = position;
        }
        Self {
            dimensions,
            cycle: cycle.into_boxed_slice(),
            positions: positions.into_boxed_slice(),
        }
    }

    /// the grid this cycle covers
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// number of cells in the cycle, which is every cell of the grid
    pub fn len(&self) -> usize {
        self.cycle.len()
    }

    /// always false, a valid grid has at least four cells
    pub fn is_empty(&self) -> bool {
        self.cycle.is_empty()
    }

    /// the whole cycle, as cell ids in visiting order
    pub fn get_hcycle(&self) -> &[usize] {
        &self.cycle
    }

    /// cell ids in visiting order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cycle.iter().copied()
    }

    /// The cell stored one position after `position` in the cycle, wrapping
    /// from the last position to the first.
    ///
    /// `position` is an index into [HamiltonianCycle::get_hcycle], not a cell
    /// id; it is taken modulo the cycle length. Use
    /// [HamiltonianCycle::next_cell] to ask by cell id.
    pub fn get_next_pos(&self, position: usize) -> usize {
        let len = self.cycle.len();
        self.cycle[(position % len + 1) % len]
    }

    /// the position of `cell` in the cycle
    pub fn position_of(&self, cell: usize) -> Result<usize, GridError> {
        self.dimensions.check_cell(cell)?;
        Ok(self.positions[cell])
    }

    /// the cell visited right after `cell`
    pub fn next_cell(&self, cell: usize) -> Result<usize, GridError> {
        let position = self.position_of(cell)?;
        Ok(self.get_next_pos(position))
    }

    /// the move that takes `cell` to the cell after it in the cycle
    pub fn direction_from(&self, cell: usize) -> Result<Direction, GridError> {
        let next = self.next_cell(cell)?;
        self.dimensions
            .direction_between(cell, next)
            .ok_or_else(|| GridError::InvalidCycle {
                reason: format!("cells {cell} and {next} are not adjacent"),
            })
    }

    /// number of steps along the cycle from `from` to `to`, zero when they are
    /// the same cell
    pub fn distance(&self, from: usize, to: usize) -> Result<usize, GridError> {
        let a = self.position_of(from)?;
        let b = self.position_of(to)?;
        Ok((b + self.len() - a) % self.len())
    }

    /// the serializable form of this cycle
    pub fn snapshot(&self) -> CycleSnapshot {
        CycleSnapshot {
            cols: self.dimensions.cols(),
            rows: self.dimensions.rows(),
            cycle: self.cycle.to_vec(),
        }
    }
}
