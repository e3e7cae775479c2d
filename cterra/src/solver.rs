use std::{cmp::Ordering, collections::BinaryHeap, fmt, str::FromStr};

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::{
    dims::Coord,
    error::{Error, Result},
    grid::Maze,
    path::Path,
};

/// Weighted shortest-path strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Solver {
    #[default]
    Dijkstra,
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 2] = [Solver::Dijkstra, Solver::AStar];
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solver::Dijkstra => write!(f, "Dijkstra"),
            Solver::AStar => write!(f, "A*"),
        }
    }
}

impl FromStr for Solver {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Solver::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Solver::AStar),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Remaining-cost estimate used by A*.
///
/// [`Heuristic::Manhattan`] assumes every step costs at least 1, footpaths cost 0, so it can
/// overestimate and A* may then return a costlier route than Dijkstra. [`Heuristic::Zero`] is
/// the only admissible choice for this terrain and makes A* as exact as Dijkstra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Zero,
}

impl Heuristic {
    pub fn estimate(self, from: Coord, to: Coord) -> u32 {
        match self {
            Heuristic::Manhattan => from.manhattan(to).unsigned_abs(),
            Heuristic::Zero => 0,
        }
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "zero" => Ok(Heuristic::Zero),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Cheapest route from start to end, A* uses the Manhattan heuristic.
pub fn solve(maze: &Maze, strategy: Solver) -> Result<Path> {
    solve_with(maze, strategy, Heuristic::Manhattan)
}

/// Like [`solve`] with a chosen A* heuristic, Dijkstra ignores it.
pub fn solve_with(maze: &Maze, strategy: Solver, heuristic: Heuristic) -> Result<Path> {
    let path = match strategy {
        Solver::Dijkstra => dijkstra(maze),
        Solver::AStar => a_star(maze, heuristic),
    };

    if path.is_err() {
        log::warn!("{} found no path from {:?} to {:?}", strategy, maze.start(), maze.end());
    }

    path
}

#[derive(Debug, Clone, Copy)]
struct PriorityEntry {
    priority: u32,
    seq: u64,
    cost: u32,
    coord: Coord,
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityEntry {}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityEntry {
    // reversed, `BinaryHeap` is a max-heap; equal priorities pop in insertion order
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-queue without decrease-key, improved costs are pushed again.
#[derive(Debug, Default)]
struct Frontier {
    seq: u64,
    heap: BinaryHeap<PriorityEntry>,
}

impl Frontier {
    fn push(&mut self, coord: Coord, cost: u32, priority: u32) {
        self.heap.push(PriorityEntry {
            priority,
            seq: self.seq,
            cost,
            coord,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<PriorityEntry> {
        self.heap.pop()
    }
}

fn dijkstra(maze: &Maze) -> Result<Path> {
    let grid = maze.grid();
    let (start, end) = (maze.start(), maze.end());

    let mut dist = HashMap::new();
    let mut parent = HashMap::new();
    let mut frontier = Frontier::default();

    dist.insert(start, 0);
    frontier.push(start, 0, 0);

    while let Some(PriorityEntry { cost, coord, .. }) = frontier.pop() {
        if coord == end {
            return reconstruct(&parent, start, end);
        }

        if dist.get(&coord).is_some_and(|&best| cost > best) {
            log::trace!("Skipping stale {:?} at {}", coord, cost);
            continue;
        }

        for next in grid.passable_neighbors(coord) {
            let Some(weight) = grid.weight(next) else {
                continue;
            };

            let new_cost = cost.saturating_add(weight);
            if dist.get(&next).map_or(true, |&known| new_cost < known) {
                dist.insert(next, new_cost);
                parent.insert(next, coord);
                frontier.push(next, new_cost, new_cost);
            }
        }
    }

    Err(Error::NotFound)
}

fn a_star(maze: &Maze, heuristic: Heuristic) -> Result<Path> {
    let grid = maze.grid();
    let (start, end) = (maze.start(), maze.end());

    let mut g_score = HashMap::new();
    let mut parent = HashMap::new();
    let mut closed = HashSet::new();
    let mut frontier = Frontier::default();

    g_score.insert(start, 0u32);
    frontier.push(start, 0, heuristic.estimate(start, end));

    while let Some(PriorityEntry { coord, .. }) = frontier.pop() {
        if coord == end {
            return reconstruct(&parent, start, end);
        }

        if !closed.insert(coord) {
            continue;
        }

        let Some(&current) = g_score.get(&coord) else {
            continue;
        };

        for next in grid.passable_neighbors(coord) {
            if closed.contains(&next) {
                continue;
            }
            let Some(weight) = grid.weight(next) else {
                continue;
            };

            let tentative = current.saturating_add(weight);
            if g_score.get(&next).map_or(true, |&known| tentative < known) {
                g_score.insert(next, tentative);
                parent.insert(next, coord);
                frontier.push(
                    next,
                    tentative,
                    tentative.saturating_add(heuristic.estimate(next, end)),
                );
            }
        }
    }

    Err(Error::NotFound)
}

fn reconstruct(parent: &HashMap<Coord, Coord>, start: Coord, end: Coord) -> Result<Path> {
    let mut cells = vec![end];
    let mut current = end;

    while current != start {
        current = *parent.get(&current).ok_or(Error::NotFound)?;
        cells.push(current);
    }
    cells.reverse();

    Path::new(cells).ok_or(Error::NotFound)
}
