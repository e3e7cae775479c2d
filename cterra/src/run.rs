use std::time::{Duration, Instant};

use crate::{
    config::RunSpec,
    dims::Coord,
    error::{Error, Result},
    grid::Maze,
    path::Path,
    solver::{self, Solver},
    traversal::{self, Traversal},
};

/// Outcome of exploring a maze and then solving it.
#[derive(Debug, Clone)]
pub struct Report {
    pub traversal: Traversal,
    pub solver: Solver,
    pub exploration: Vec<Coord>,
    pub path: Path,
    pub cost: u32,
    pub solve_time: Duration,
}

impl Report {
    pub fn exploration_steps(&self) -> usize {
        self.exploration.len()
    }

    pub fn solution_steps(&self) -> usize {
        self.path.len()
    }
}

/// Explores first; the weighted search only runs when exploration got to the end.
pub fn run(maze: &Maze, spec: &RunSpec) -> Result<Report> {
    log::info!("Exploring with {}", spec.traversal);
    let exploration = traversal::traverse(maze, spec.traversal);
    if !traversal::reaches_end(maze, &exploration) {
        return Err(Error::ExplorationFailed);
    }
    log::debug!("Exploration took {} steps", exploration.len());

    log::info!("Solving with {}", spec.solver);
    let started = Instant::now();
    let path = solver::solve_with(maze, spec.solver, spec.heuristic)?;
    let solve_time = started.elapsed();

    let cost = path.cost_in(maze)?;
    log::debug!(
        "{} found a path of {} steps costing {} in {:?}",
        spec.solver,
        path.len(),
        cost,
        solve_time
    );

    Ok(Report {
        traversal: spec.traversal,
        solver: spec.solver,
        exploration,
        path,
        cost,
        solve_time,
    })
}
