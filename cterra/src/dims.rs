use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Position in the grid, `(row, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub i32, pub i32);

impl Coord {
    pub const UP: Coord = Coord(-1, 0);
    pub const DOWN: Coord = Coord(1, 0);
    pub const LEFT: Coord = Coord(0, -1);
    pub const RIGHT: Coord = Coord(0, 1);

    /// Unit offsets in the order every search expands them: up, down, left, right.
    pub const DIRECTIONS: [Coord; 4] = [Coord::UP, Coord::DOWN, Coord::LEFT, Coord::RIGHT];

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    pub fn manhattan(self, other: Coord) -> i32 {
        (self - other).abs_sum()
    }

    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// All four neighbors, in [`Coord::DIRECTIONS`] order. No bounds checking.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Coord::DIRECTIONS.into_iter().map(move |dir| self + dir)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Coord {
        Coord(self.0 - other.0, self.1 - other.1)
    }
}

impl From<(i32, i32)> for Coord {
    fn from(tuple: (i32, i32)) -> Self {
        Coord(tuple.0, tuple.1)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(val: Coord) -> Self {
        (val.0, val.1)
    }
}
