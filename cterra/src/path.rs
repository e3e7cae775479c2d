use serde::{Deserialize, Serialize};

use crate::{
    cost,
    dims::Coord,
    error::{Error, Result},
    grid::Maze,
};

/// Non-empty route of 4-adjacent cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coord>", into = "Vec<Coord>")]
pub struct Path(Vec<Coord>);

impl Path {
    /// `None` for an empty sequence.
    pub fn new(cells: Vec<Coord>) -> Option<Path> {
        (!cells.is_empty()).then_some(Path(cells))
    }

    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn start(&self) -> Coord {
        self.0[0]
    }

    pub fn end(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    pub fn contains(&self, pos: Coord) -> bool {
        self.0.contains(&pos)
    }

    /// Connects the maze's start to its end over open cells, one step at a time.
    pub fn is_valid_in(&self, maze: &Maze) -> bool {
        self.start() == maze.start()
            && self.end() == maze.end()
            && self.0.iter().all(|&pos| maze.grid().is_passable(pos))
            && self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    pub fn cost_in(&self, maze: &Maze) -> Result<u32> {
        cost::cost(maze, &self.0)
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = Error;

    fn try_from(cells: Vec<Coord>) -> Result<Path> {
        Path::new(cells).ok_or(Error::EmptyPath)
    }
}

impl From<Path> for Vec<Coord> {
    fn from(path: Path) -> Self {
        path.0
    }
}
