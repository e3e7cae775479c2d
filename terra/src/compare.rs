use cterra::{run, Maze, Report, RunSpec, Solver, Traversal};
use rayon::prelude::*;

/// Every exploration/solver pairing, in a stable order.
pub fn combinations(base: &RunSpec) -> Vec<RunSpec> {
    Traversal::ALL
        .into_iter()
        .flat_map(|traversal| {
            Solver::ALL.into_iter().map(move |solver| RunSpec {
                traversal,
                solver,
                ..*base
            })
        })
        .collect()
}

/// Runs all pairings on the same maze in parallel, results keep the order of [`combinations`].
pub fn compare(maze: &Maze, base: &RunSpec) -> Vec<cterra::Result<Report>> {
    combinations(base)
        .into_par_iter()
        .map(|spec| run(maze, &spec))
        .collect()
}

/// Cost Dijkstra found when A* found a different one.
pub fn cost_mismatch(reports: &[Report]) -> Option<(u32, u32)> {
    let cost_of = |solver| {
        reports
            .iter()
            .find(|r| r.solver == solver)
            .map(|r| r.cost)
    };

    match (cost_of(Solver::Dijkstra), cost_of(Solver::AStar)) {
        (Some(dijkstra), Some(a_star)) if dijkstra != a_star => Some((dijkstra, a_star)),
        _ => None,
    }
}
