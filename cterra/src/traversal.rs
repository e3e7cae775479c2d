use std::{collections::VecDeque, fmt, str::FromStr};

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::{dims::Coord, error::Error, grid::Maze};

/// Unweighted exploration strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Traversal {
    #[default]
    Bfs,
    Dfs,
}

impl Traversal {
    pub const ALL: [Traversal; 2] = [Traversal::Bfs, Traversal::Dfs];
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Traversal::Bfs => write!(f, "BFS"),
            Traversal::Dfs => write!(f, "DFS"),
        }
    }
}

impl FromStr for Traversal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Traversal::Bfs),
            "dfs" => Ok(Traversal::Dfs),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Visitation order from the start, ending with the end cell when it is reachable.
///
/// Cells are marked visited when they are queued, so the result never contains duplicates.
/// Neighbors are expanded up, down, left, right; depth-first pushes them in reverse so they
/// are popped in that same order.
pub fn traverse(maze: &Maze, strategy: Traversal) -> Vec<Coord> {
    let order = match strategy {
        Traversal::Bfs => breadth_first(maze),
        Traversal::Dfs => depth_first(maze),
    };

    if !reaches_end(maze, &order) {
        log::warn!(
            "{} exhausted {} cells without reaching {:?}",
            strategy,
            order.len(),
            maze.end()
        );
    }

    order
}

/// Whether a visitation order produced by [`traverse`] got to the end.
pub fn reaches_end(maze: &Maze, order: &[Coord]) -> bool {
    order.last() == Some(&maze.end())
}

fn breadth_first(maze: &Maze) -> Vec<Coord> {
    let grid = maze.grid();
    let mut order = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(maze.start());
    queue.push_back(maze.start());

    while let Some(current) = queue.pop_front() {
        order.push(current);
        if current == maze.end() {
            break;
        }

        for next in grid.passable_neighbors(current) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    order
}

fn depth_first(maze: &Maze) -> Vec<Coord> {
    let grid = maze.grid();
    let mut order = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![maze.start()];

    visited.insert(maze.start());

    while let Some(current) = stack.pop() {
        order.push(current);
        if current == maze.end() {
            break;
        }

        for next in grid.passable_neighbors(current).into_iter().rev() {
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }

    order
}
