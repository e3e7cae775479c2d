//! Weighted grid mazes: generation, unweighted exploration and cheapest-route search.
//!
//! ```
//! use cterra::{generate, solve, traverse, Solver, Traversal};
//!
//! let maze = generate(21, 7).unwrap();
//! let explored = traverse(&maze, Traversal::Bfs);
//! assert_eq!(explored.last(), Some(&maze.end()));
//!
//! let path = solve(&maze, Solver::Dijkstra).unwrap();
//! assert_eq!(path.start(), maze.start());
//! ```

pub mod array;
pub mod config;
pub mod cost;
pub mod dims;
pub mod error;
pub mod generator;
pub mod grid;
pub mod path;
pub mod run;
pub mod solver;
pub mod traversal;

pub use config::RunSpec;
pub use cost::cost;
pub use dims::Coord;
pub use error::{Error, Result};
pub use generator::{generate, Generator, Random};
pub use grid::{CellKind, Grid, GridBuilder, Maze};
pub use path::Path;
pub use run::{run, Report};
pub use solver::{solve, solve_with, Heuristic, Solver};
pub use traversal::{reaches_end, traverse, Traversal};
