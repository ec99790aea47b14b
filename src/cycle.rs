//! Turning a parent grid spanning tree into a hamiltonian cycle
//!
//! Every parent cell owns a 2x2 block of fine cells. Walking the fine grid
//! while keeping the maze's walls on the right hand side traces the outline
//! of the spanning tree: inside a block the walk may always move between the
//! block's own cells, and it may only cross into a neighbouring block through
//! a door. Because the maze is a tree, the outline is a single loop touching
//! every fine cell exactly once.

use itertools::Itertools;
use tracing::instrument;

use crate::dimensions::GridDimensions;
use crate::error::GridError;
use crate::maze::Maze;
use crate::types::Direction;

/// can the walk leave `cell` in `direction`, either inside its own block or
/// through a door of the maze
fn can_move(dimensions: &GridDimensions, maze: &Maze, cell: usize, direction: Direction) -> bool {
    let (row, col) = dimensions.row_col(cell);
    let inside_block = match direction {
        Direction::Up => row % 2 == 1,
        Direction::Right => col % 2 == 0,
        Direction::Down => row % 2 == 0,
        Direction::Left => col % 2 == 1,
    };
    inside_block || maze.has_door(dimensions.parent_of(cell), direction)
}

/// Walks the fine grid around `maze`, starting at cell 0 facing up, and
/// returns the visited cells in order.
///
/// At each cell the walk tries a left turn, then straight on, then a right
/// turn, taking the first move that is allowed. It never needs to turn back.
#[instrument(level = "trace", skip_all, fields(cols = dimensions.cols(), rows = dimensions.rows()))]
pub fn build_cycle(dimensions: GridDimensions, maze: &Maze) -> Vec<usize> {
    debug_assert_eq!(maze.dimensions(), dimensions);
    let len = dimensions.cell_count();
    let mut cycle = Vec::with_capacity(len);

    let mut cell = 0;
    let mut heading = Direction::Up;
    while cycle.len() < len {
        cycle.push(cell);

        // a block always offers two exits of its own, and at most one of them
        // lies behind us, so one of the three candidates is always open
        let next = heading
            .walk_candidates()
            .into_iter()
            .find(|d| can_move(&dimensions, maze, cell, *d))
            .and_then(|d| dimensions.neighbor(cell, d).map(|n| (d, n)));
        match next {
            Some((direction, neighbor)) => {
                heading = direction;
                cell = neighbor;
            }
            None => break,
        }
    }

    debug_assert_eq!(cycle.len(), len);
    cycle
}

/// Checks that `cycle` visits every fine cell of `dimensions` exactly once and
/// that each cell is adjacent to the next one, the last wrapping to the first
pub fn verify_cycle(dimensions: &GridDimensions, cycle: &[usize]) -> Result<(), GridError> {
    let len = dimensions.cell_count();
    if cycle.len() != len {
        return Err(GridError::InvalidCycle {
            reason: format!("expected {} cells, found {}", len, cycle.len()),
        });
    }

    let mut seen = vec![false; len];
    for &cell in cycle {
        if cell >= len {
            return Err(GridError::InvalidCycle {
                reason: format!("cell {cell} is outside the grid"),
            });
        }
        if seen[cell] {
            return Err(GridError::InvalidCycle {
                reason: format!("cell {cell} is visited twice"),
            });
        }
        seen[cell] = true;
    }

    if let Some((a, b)) = cycle
        .iter()
        .circular_tuple_windows()
        .find(|(a, b)| dimensions.manhattan(**a, **b) != 1)
    {
        return Err(GridError::InvalidCycle {
            reason: format!("cells {a} and {b} are not adjacent"),
        });
    }

    Ok(())
}
