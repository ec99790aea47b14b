//! Diagnostic dump of a maze and the cycle built around it
//!
//! Nothing in the crate depends on this output. The facade emits it as a
//! `trace` event while building a cycle.
use std::fmt;

use itertools::Itertools;

use crate::maze::Maze;
use crate::types::Direction;

/// Formats a maze as ascii art followed by the cycle sequence:
///
/// ```plain
/// Maze:
///  _ _
/// |_ _|
///
/// Hamiltonian cycle:
///
/// 0 1 2 3 7 6 5 4
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DebugDump<'a> {
    maze: &'a Maze,
    cycle: &'a [usize],
}

impl<'a> DebugDump<'a> {
    #[allow(missing_docs)]
    pub fn new(maze: &'a Maze, cycle: &'a [usize]) -> Self {
        Self { maze, cycle }
    }
}

impl fmt::Display for DebugDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.maze.dimensions();
        writeln!(f, "Maze:")?;
        for _ in 0..dims.parent_cols() {
            write!(f, " _")?;
        }
        writeln!(f)?;
        for row in 0..dims.parent_rows() {
            write!(f, "|")?;
            for col in 0..dims.parent_cols() {
                let parent = row * dims.parent_cols() + col;
                let south = if self.maze.has_door(parent, Direction::Down) {
                    " "
                } else {
                    "_"
                };
                let east = if self.maze.has_door(parent, Direction::Right) {
                    " "
                } else {
                    "|"
                };
                write!(f, "{south}{east}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "Hamiltonian cycle:")?;
        writeln!(f)?;
        writeln!(f, "{}", self.cycle.iter().join(" "))
    }
}
