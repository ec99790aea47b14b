//! small value types shared by the maze generator and the cycle builder
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vector with which to do positional math, in (column, row) order.
/// Rows grow downwards, so `Up` is a negative y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// column delta
    pub x: i64,
    /// row delta
    pub y: i64,
}

/// Represents a direction of travel on the grid. The discriminants are the
/// clockwise direction indices used while walking the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Right,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Left,
}

/// number of directions
pub const N_DIRECTIONS: usize = 4;

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
        }
    }
}

impl Direction {
    /// returns all directions in clockwise index order, starting with `Up`
    pub fn all() -> [Direction; N_DIRECTIONS] {
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left]
    }

    /// converts this direction to its clockwise index. Up is 0, Left is 3
    pub fn as_index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// converts a clockwise index to a direction, wrapping modulo 4
    pub fn from_index(index: usize) -> Direction {
        match index % N_DIRECTIONS {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }

    /// the direction after a quarter turn counter clockwise
    pub fn turn_left(self) -> Direction {
        Direction::from_index(self.as_index() + 3)
    }

    /// the direction after a quarter turn clockwise
    pub fn turn_right(self) -> Direction {
        Direction::from_index(self.as_index() + 1)
    }

    /// the direction facing the other way
    pub fn opposite(self) -> Direction {
        Direction::from_index(self.as_index() + 2)
    }

    /// the order in which the doubling walk tries to leave a cell when
    /// travelling in this direction: left turn, straight on, right turn
    pub fn walk_candidates(self) -> [Direction; 3] {
        [self.turn_left(), self, self.turn_right()]
    }

    /// convert this direction to a vector
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::Up => Vector { x: 0, y: -1 },
            Direction::Right => Vector { x: 1, y: 0 },
            Direction::Down => Vector { x: 0, y: 1 },
            Direction::Left => Vector { x: -1, y: 0 },
        }
    }

    /// create a direction from a unit vector, None for anything else
    pub fn from_vector(vector: Vector) -> Option<Self> {
        match vector {
            Vector { x: 0, y: -1 } => Some(Direction::Up),
            Vector { x: 1, y: 0 } => Some(Direction::Right),
            Vector { x: 0, y: 1 } => Some(Direction::Down),
            Vector { x: -1, y: 0 } => Some(Direction::Left),
            _ => None,
        }
    }

    /// bit used for this direction in a door mask
    pub(crate) fn mask(self) -> u8 {
        1 << self.as_index()
    }
}

/// An unordered pair of adjacent parent cells. The smaller index is always
/// stored first so a set of walls never holds the same edge twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wall {
    low: usize,
    high: usize,
}

impl Wall {
    /// builds the canonical wall between two parent cells, in either order
    pub fn new(a: usize, b: usize) -> Self {
        Wall {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// the smaller parent cell index
    pub fn low(&self) -> usize {
        self.low
    }

    /// the larger parent cell index
    pub fn high(&self) -> usize {
        self.high
    }

    /// both endpoints, smaller first
    pub fn cells(&self) -> (usize, usize) {
        (self.low, self.high)
    }
}

impl From<(usize, usize)> for Wall {
    fn from((a, b): (usize, usize)) -> Self {
        Wall::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, d) in Direction::all().iter().enumerate() {
            assert_eq!(d.as_index(), i);
            assert_eq!(Direction::from_index(i), *d);
        }
        assert_eq!(Direction::from_index(5), Direction::Right);
    }

    #[test]
    fn test_turns() {
        assert_eq!(Direction::Up.turn_left(), Direction::Left);
        assert_eq!(Direction::Up.turn_right(), Direction::Right);
        assert_eq!(Direction::Left.turn_right(), Direction::Up);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(
            Direction::Up.walk_candidates(),
            [Direction::Left, Direction::Up, Direction::Right]
        );
        assert_eq!(
            Direction::Left.walk_candidates(),
            [Direction::Down, Direction::Left, Direction::Up]
        );
    }

    #[test]
    fn test_vectors() {
        for d in Direction::all() {
            assert_eq!(Direction::from_vector(d.to_vector()), Some(d));
        }
        assert_eq!(Direction::from_vector(Vector { x: 1, y: 1 }), None);
    }

    #[test]
    fn test_masks_are_distinct() {
        let combined = Direction::all().iter().fold(0u8, |acc, d| acc | d.mask());
        assert_eq!(combined, 0b1111);
    }

    #[test]
    fn test_wall_is_canonical() {
        assert_eq!(Wall::new(3, 1), Wall::new(1, 3));
        assert_eq!(Wall::new(7, 2).cells(), (2, 7));
        let set: HashSet<Wall> = vec![Wall::new(0, 1), Wall::new(1, 0), (1, 0).into()]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
