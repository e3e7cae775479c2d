use thiserror::Error;

use crate::dims::Coord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid maze size {0}, expected an odd number of at least {min}", min = crate::generator::MIN_SIZE)]
    InvalidSize(i32),
    #[error("invalid grid layout: {0}")]
    InvalidLayout(String),
    #[error("coordinate {0:?} lies outside of the grid")]
    OutOfBounds(Coord),
    #[error("coordinate {0:?} is a wall")]
    Impassable(Coord),
    #[error("no path connects start and end")]
    NotFound,
    #[error("exploration did not reach the end")]
    ExplorationFailed,
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
    #[error("path cost does not fit into 32 bits")]
    CostOverflow,
    #[error("a path needs at least one cell")]
    EmptyPath,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
