use std::collections::VecDeque;

use rand::{thread_rng, Rng, SeedableRng as _};
use smallvec::SmallVec;

use crate::{
    array::Array2D,
    dims::Coord,
    error::{Error, Result},
    grid::{CellKind, Grid, GridBuilder, Maze},
};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

pub const MIN_SIZE: i32 = 5;
pub const DEFAULT_SIZE: i32 = 21;

/// Cell every maze grows from.
pub const START: Coord = Coord(1, 1);

pub fn validate_size(size: i32) -> Result<()> {
    if size < MIN_SIZE || size % 2 == 0 {
        return Err(Error::InvalidSize(size));
    }
    Ok(())
}

/// Generates a maze of the given size, deterministic for a fixed seed.
pub fn generate(size: i32, seed: u64) -> Result<Maze> {
    Generator::new(size).with_seed(seed).generate()
}

/// Randomized spanning-tree carver with weighted terrain.
///
/// Growth starts at [`START`] and proceeds by unit steps: a random frontier wall is opened only
/// when exactly one carved cell touches it, which keeps the carved cells a tree. After carving,
/// the cell furthest from the start (in steps) becomes the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    size: i32,
    seed: Option<u64>,
}

impl Generator {
    pub fn new(size: i32) -> Self {
        Self { size, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Generates with the configured seed, or a fresh one when there is none.
    pub fn generate(&self) -> Result<Maze> {
        validate_size(self.size)?;

        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        log::debug!("Generating {0}x{0} maze with seed {1}", self.size, seed);

        let mut rng = Random::seed_from_u64(seed);
        self.generate_with(&mut rng)
    }

    /// Generates using the given random source, the configured seed is ignored.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Maze> {
        validate_size(self.size)?;

        let mut board = GridBuilder::square(self.size as usize);
        board.carve(START, CellKind::Footpath);

        let mut frontier = Vec::new();
        push_walls(&board, START, &mut frontier);

        while !frontier.is_empty() {
            let wall = frontier.swap_remove(rng.gen_range(0..frontier.len()));
            if !board.is_wall(wall) {
                continue;
            }

            let (carved, walls): (SmallVec<[Coord; 4]>, SmallVec<[Coord; 4]>) =
                interior_neighbors(&board, wall).partition(|&n| !board.is_wall(n));

            // a second carved neighbor would close a loop
            if carved.len() != 1 || walls.is_empty() {
                continue;
            }

            board.carve(wall, random_terrain(rng));

            let candidates = walls
                .into_iter()
                .filter(|&n| interior_neighbors(&board, n).all(|m| m == wall || board.is_wall(m)))
                .collect::<SmallVec<[_; 4]>>();
            if candidates.is_empty() {
                continue;
            }

            let next = candidates[rng.gen_range(0..candidates.len())];
            board.carve(next, random_terrain(rng));
            push_walls(&board, next, &mut frontier);
        }

        let end = furthest_from(&board, START);
        board.carve(START, CellKind::Footpath);
        board.carve(end, CellKind::Footpath);

        let grid: Grid = board.build();
        log::trace!(
            "Carved {} cells, end at {:?}",
            grid.iter_passable().count(),
            end
        );

        Maze::new(grid, START, end)
    }
}

fn random_terrain<R: Rng + ?Sized>(rng: &mut R) -> CellKind {
    CellKind::from_roll(rng.gen_range(0..100))
}

fn is_interior(board: &GridBuilder, pos: Coord) -> bool {
    let Coord(rows, cols) = board.size();
    pos.0 > 0 && pos.0 < rows - 1 && pos.1 > 0 && pos.1 < cols - 1
}

fn interior_neighbors(board: &GridBuilder, pos: Coord) -> impl Iterator<Item = Coord> + '_ {
    pos.neighbors().filter(move |&n| is_interior(board, n))
}

fn push_walls(board: &GridBuilder, pos: Coord, frontier: &mut Vec<Coord>) {
    frontier.extend(interior_neighbors(board, pos).filter(|&n| board.is_wall(n)));
}

/// Breadth-first step distance; ties go to the cell dequeued first.
fn furthest_from(board: &GridBuilder, start: Coord) -> Coord {
    let Coord(rows, cols) = board.size();
    let mut distances = Array2D::new(None, cols as usize, rows as usize);
    let mut queue = VecDeque::new();

    distances[start] = Some(0usize);
    queue.push_back(start);

    let (mut furthest, mut max_dist) = (start, 0);
    while let Some(current) = queue.pop_front() {
        let dist = distances[current].unwrap_or_default();
        if dist > max_dist {
            max_dist = dist;
            furthest = current;
        }

        for next in current.neighbors() {
            let open = board.kind(next).is_some_and(CellKind::is_passable);
            if open && distances.get(next) == Some(&None) {
                distances[next] = Some(dist + 1);
                queue.push_back(next);
            }
        }
    }

    furthest
}
