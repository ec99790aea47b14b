//! error type for grid validation and cycle queries
use std::fmt;

/// Errors arising from grid construction, hand built mazes, snapshots and
/// cell queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// at least one dimension is odd
    OddDimension {
        /// requested column count
        cols: usize,
        /// requested row count
        rows: usize,
    },
    /// at least one dimension is zero
    ZeroDimension {
        /// requested column count
        cols: usize,
        /// requested row count
        rows: usize,
    },
    /// the cell count does not fit in a usize
    TooLarge {
        /// requested column count
        cols: usize,
        /// requested row count
        rows: usize,
    },
    /// a hand built maze is not a spanning tree over the parent cells
    InvalidMaze {
        /// what went wrong
        reason: String,
    },
    /// a sequence is not a hamiltonian cycle of its grid
    InvalidCycle {
        /// what went wrong
        reason: String,
    },
    /// a snapshot could not be decoded
    MalformedSnapshot {
        /// decoder message
        reason: String,
    },
    /// a cell id outside the grid
    CellOutOfBounds {
        /// the offending cell id
        cell: usize,
        /// number of cells in the grid
        len: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddDimension { cols, rows } => {
                write!(f, "grid dimensions must both be even, got {cols}x{rows}")
            }
            Self::ZeroDimension { cols, rows } => {
                write!(f, "grid dimensions must both be positive, got {cols}x{rows}")
            }
            Self::TooLarge { cols, rows } => {
                write!(f, "grid of {cols}x{rows} cells is too large")
            }
            Self::InvalidMaze { reason } => write!(f, "invalid maze: {reason}"),
            Self::InvalidCycle { reason } => write!(f, "invalid hamiltonian cycle: {reason}"),
            Self::MalformedSnapshot { reason } => write!(f, "malformed snapshot: {reason}"),
            Self::CellOutOfBounds { cell, len } => {
                write!(f, "cell {cell} out of bounds for grid of {len} cells")
            }
        }
    }
}

impl std::error::Error for GridError {}
