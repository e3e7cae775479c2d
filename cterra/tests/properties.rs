use std::collections::VecDeque;

use cterra::{
    cost, generate, reaches_end, solve, solve_with, traverse, CellKind, Coord, Error, Grid,
    Heuristic, Maze, Solver, Traversal,
};
use hashbrown::HashSet;

const SEEDS: std::ops::Range<u64> = 0..40;
const SIZES: [i32; 4] = [5, 7, 11, 21];

fn mazes() -> impl Iterator<Item = Maze> {
    SIZES
        .into_iter()
        .flat_map(|size| SEEDS.map(move |seed| generate(size, seed).unwrap()))
}

fn reachable(maze: &Maze) -> HashSet<Coord> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([maze.start()]);
    seen.insert(maze.start());
    while let Some(pos) = queue.pop_front() {
        for next in maze.grid().passable_neighbors(pos) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Every simple path from start to end, only feasible on tiny grids.
fn all_paths(maze: &Maze) -> Vec<Vec<Coord>> {
    fn walk(maze: &Maze, path: &mut Vec<Coord>, out: &mut Vec<Vec<Coord>>) {
        let Some(&last) = path.last() else { return };
        if last == maze.end() {
            out.push(path.clone());
            return;
        }
        for next in maze.grid().passable_neighbors(last) {
            if !path.contains(&next) {
                path.push(next);
                walk(maze, path, out);
                path.pop();
            }
        }
    }

    let mut out = Vec::new();
    walk(maze, &mut vec![maze.start()], &mut out);
    out
}

fn looped_maze() -> Maze {
    // the top route costs 3 in grass, the long way around is all footpath
    let grid = Grid::parse(&[
        "#######", //
        "#.ggg.#", //
        "#.###.#", //
        "#.....#", //
        "#######", //
    ])
    .unwrap();
    Maze::new(grid, Coord(1, 1), Coord(1, 5)).unwrap()
}

fn ring_maze() -> Maze {
    // footpath everywhere but one mud cell on the right-hand route
    let grid = Grid::parse(&[
        "#####", //
        "#...#", //
        "#.#m#", //
        "#...#", //
        "#####", //
    ])
    .unwrap();
    Maze::new(grid, Coord(1, 1), Coord(3, 3)).unwrap()
}

#[test]
fn connectivity() {
    for maze in mazes() {
        let seen = reachable(&maze);
        assert!(seen.contains(&maze.end()));
        assert_eq!(seen.len(), maze.grid().iter_passable().count());
    }
}

#[test]
fn carved_cells_form_a_tree() {
    for maze in mazes() {
        let grid = maze.grid();
        let cells = grid.iter_passable().count();
        let edges = grid
            .iter_passable()
            .map(|pos| {
                [pos + Coord::DOWN, pos + Coord::RIGHT]
                    .into_iter()
                    .filter(|&n| grid.is_passable(n))
                    .count()
            })
            .sum::<usize>();
        assert_eq!(edges, cells - 1);
    }
}

#[test]
fn border_is_wall() {
    for maze in mazes() {
        let grid = maze.grid();
        let Coord(rows, cols) = grid.size();
        assert_eq!(rows, cols);
        for pos in grid.cells().iter_pos() {
            let on_border = pos.0 == 0 || pos.1 == 0 || pos.0 == rows - 1 || pos.1 == cols - 1;
            if on_border {
                assert_eq!(grid.kind(pos), Some(CellKind::Wall), "{:?}", pos);
            }
        }
    }
}

#[test]
fn weights_match_terrain() {
    for maze in mazes() {
        let grid = maze.grid();
        for pos in grid.iter_passable() {
            assert_eq!(grid.kind(pos).and_then(CellKind::cost), grid.weight(pos));
        }
    }
}

#[test]
fn terrain_is_mixed() {
    let maze = generate(41, 5).unwrap();
    let kinds: HashSet<_> = maze
        .grid()
        .iter_passable()
        .filter_map(|pos| maze.grid().kind(pos))
        .collect();
    assert_eq!(kinds.len(), 4);
}

#[test]
fn deterministic() {
    for size in SIZES {
        for seed in SEEDS {
            assert_eq!(generate(size, seed), generate(size, seed));
        }
    }
}

#[test]
fn traversal_visits_once_and_ends_at_end() {
    for maze in mazes() {
        for strategy in Traversal::ALL {
            let order = traverse(&maze, strategy);
            let unique: HashSet<_> = order.iter().collect();
            assert_eq!(unique.len(), order.len());
            assert_eq!(order.first(), Some(&maze.start()));
            assert!(reaches_end(&maze, &order));
            assert!(order.iter().all(|&pos| maze.grid().is_passable(pos)));
        }
    }
}

#[test]
fn solved_paths_are_valid() {
    for maze in mazes() {
        for strategy in Solver::ALL {
            let path = solve(&maze, strategy).unwrap();
            assert!(path.is_valid_in(&maze), "{} on {}", strategy, maze.grid());
        }
    }
}

#[test]
fn dijkstra_is_optimal() {
    let small = [5, 7]
        .into_iter()
        .flat_map(|size| SEEDS.map(move |seed| generate(size, seed).unwrap()))
        .chain([looped_maze()]);

    for maze in small {
        let best = solve(&maze, Solver::Dijkstra).unwrap().cost_in(&maze).unwrap();
        let paths = all_paths(&maze);
        assert!(!paths.is_empty());
        for path in paths {
            assert!(best <= cost(&maze, &path).unwrap());
        }
    }
}

#[test]
fn a_star_matches_dijkstra_on_generated_mazes() {
    // a tree has a single simple route, any heuristic finds it
    for maze in mazes() {
        let dijkstra = solve(&maze, Solver::Dijkstra).unwrap();
        let a_star = solve(&maze, Solver::AStar).unwrap();
        assert_eq!(dijkstra, a_star);
        assert_eq!(dijkstra.cost_in(&maze), a_star.cost_in(&maze));
    }
}

#[test]
fn manhattan_a_star_overpays_on_free_footpaths() {
    let maze = looped_maze();

    let dijkstra = solve(&maze, Solver::Dijkstra).unwrap();
    assert_eq!(dijkstra.cost_in(&maze), Ok(0));
    assert_eq!(dijkstra.len(), 9);

    let manhattan = solve(&maze, Solver::AStar).unwrap();
    assert!(manhattan.is_valid_in(&maze));
    assert_eq!(manhattan.cost_in(&maze), Ok(3));
    assert_eq!(
        manhattan.cells(),
        &[Coord(1, 1), Coord(1, 2), Coord(1, 3), Coord(1, 4), Coord(1, 5)]
    );

    let zero = solve_with(&maze, Solver::AStar, Heuristic::Zero).unwrap();
    assert_eq!(zero.cost_in(&maze), Ok(0));
}

#[test]
fn zero_heuristic_keeps_parity() {
    for maze in mazes().chain([looped_maze()]) {
        let dijkstra = solve(&maze, Solver::Dijkstra).unwrap().cost_in(&maze);
        let a_star = solve_with(&maze, Solver::AStar, Heuristic::Zero)
            .unwrap()
            .cost_in(&maze);
        assert_eq!(dijkstra, a_star);
    }
}

#[test]
fn cost_is_stable() {
    let maze = generate(21, 11).unwrap();
    let path = solve(&maze, Solver::Dijkstra).unwrap();
    let first = cost(&maze, path.cells());
    for _ in 0..5 {
        assert_eq!(cost(&maze, path.cells()), first);
    }
    assert_eq!(
        cost(&maze, &[Coord(21, 0)]),
        Err(Error::OutOfBounds(Coord(21, 0)))
    );
}

#[test]
fn ring_scenario() {
    let maze = ring_maze();
    let free = [Coord(1, 1), Coord(2, 1), Coord(3, 1), Coord(3, 2), Coord(3, 3)];

    for strategy in Solver::ALL {
        let path = solve(&maze, strategy).unwrap();
        assert_eq!(path.cells(), &free, "{}", strategy);
        assert_eq!(path.cost_in(&maze), Ok(0));
    }

    let bfs = traverse(&maze, Traversal::Bfs);
    assert_eq!(
        bfs,
        vec![
            Coord(1, 1),
            Coord(2, 1),
            Coord(1, 2),
            Coord(3, 1),
            Coord(1, 3),
            Coord(3, 2),
            Coord(2, 3),
            Coord(3, 3),
        ]
    );
    let interior: HashSet<_> = maze.grid().iter_passable().collect();
    assert_eq!(bfs.iter().copied().collect::<HashSet<_>>(), interior);

    assert_eq!(traverse(&maze, Traversal::Dfs), free.to_vec());
}
