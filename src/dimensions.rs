//! Validated grid dimensions and the index math between the two resolutions
//!
//! Fine cells are the cells of the real grid, numbered row major. Parent cells
//! are the cells of the half resolution grid the maze is built on, each one
//! covering a 2x2 block of fine cells. Both kinds of cell are plain `usize`
//! indices; this struct is the only place that converts between them.

use crate::error::GridError;
use crate::types::{Direction, Vector};

/// Width and height of an even by even grid
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    cols: usize,
    rows: usize,
}

impl GridDimensions {
    /// Validates `cols` and `rows`: both must be positive and even, and their
    /// product must fit in a usize
    pub fn new(cols: usize, rows: usize) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::ZeroDimension { cols, rows });
        }
        if cols % 2 != 0 || rows % 2 != 0 {
            return Err(GridError::OddDimension { cols, rows });
        }
        if cols.checked_mul(rows).is_none() {
            return Err(GridError::TooLarge { cols, rows });
        }

        Ok(Self { cols, rows })
    }

    /// number of fine columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// number of fine rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// total number of fine cells
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// number of parent columns
    pub fn parent_cols(&self) -> usize {
        self.cols / 2
    }

    /// number of parent rows
    pub fn parent_rows(&self) -> usize {
        self.rows / 2
    }

    /// total number of parent cells
    pub fn parent_count(&self) -> usize {
        self.parent_cols() * self.parent_rows()
    }

    /// checks that `cell` is a fine cell of this grid
    pub fn check_cell(&self, cell: usize) -> Result<(), GridError> {
        if cell < self.cell_count() {
            Ok(())
        } else {
            Err(GridError::CellOutOfBounds {
                cell,
                len: self.cell_count(),
            })
        }
    }

    /// (row, col) of a fine cell
    pub fn row_col(&self, cell: usize) -> (usize, usize) {
        (cell / self.cols, cell % self.cols)
    }

    /// fine cell at (row, col)
    pub fn cell_at(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// the parent cell owning a fine cell
    pub fn parent_of(&self, cell: usize) -> usize {
        let (row, col) = self.row_col(cell);
        (row / 2) * self.parent_cols() + col / 2
    }

    /// (row, col) of a parent cell on the parent grid
    pub fn parent_row_col(&self, parent: usize) -> (usize, usize) {
        (parent / self.parent_cols(), parent % self.parent_cols())
    }

    /// the parent cell next to `parent` in `direction`, if it is on the grid
    pub fn parent_neighbor(&self, parent: usize, direction: Direction) -> Option<usize> {
        let (row, col) = self.parent_row_col(parent);
        step(row, col, direction, self.parent_rows(), self.parent_cols())
            .map(|(r, c)| r * self.parent_cols() + c)
    }

    /// the fine cell next to `cell` in `direction`, if it is on the grid
    pub fn neighbor(&self, cell: usize, direction: Direction) -> Option<usize> {
        let (row, col) = self.row_col(cell);
        step(row, col, direction, self.rows, self.cols).map(|(r, c)| self.cell_at(r, c))
    }

    /// manhattan distance between two fine cells
    pub fn manhattan(&self, a: usize, b: usize) -> usize {
        let (ar, ac) = self.row_col(a);
        let (br, bc) = self.row_col(b);
        ar.abs_diff(br) + ac.abs_diff(bc)
    }

    /// the direction leading from fine cell `from` to the adjacent fine cell `to`
    pub fn direction_between(&self, from: usize, to: usize) -> Option<Direction> {
        let (fr, fc) = self.row_col(from);
        let (tr, tc) = self.row_col(to);
        Direction::from_vector(Vector {
            x: tc as i64 - fc as i64,
            y: tr as i64 - fr as i64,
        })
    }
}

fn step(
    row: usize,
    col: usize,
    direction: Direction,
    rows: usize,
    cols: usize,
) -> Option<(usize, usize)> {
    let v = direction.to_vector();
    let r = row as i64 + v.y;
    let c = col as i64 + v.x;
    if r < 0 || c < 0 || r >= rows as i64 || c >= cols as i64 {
        None
    } else {
        Some((r as usize, c as usize))
    }
}
