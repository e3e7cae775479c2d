use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    generator::{self, Generator, DEFAULT_SIZE},
    solver::{Heuristic, Solver},
    traversal::Traversal,
};

/// Everything needed to generate a maze and run both stages on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSpec {
    /// Side length, odd and at least [`generator::MIN_SIZE`].
    #[serde(default = "default_size")]
    pub size: i32,

    /// Seed of the maze.
    ///
    /// Used for deterministic generation, a fresh one is drawn when missing.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub traversal: Traversal,

    #[serde(default)]
    pub solver: Solver,

    #[serde(default)]
    pub heuristic: Heuristic,
}

fn default_size() -> i32 {
    DEFAULT_SIZE
}

impl Default for RunSpec {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            traversal: Traversal::default(),
            solver: Solver::default(),
            heuristic: Heuristic::default(),
        }
    }
}

impl RunSpec {
    pub fn validate(&self) -> Result<()> {
        generator::validate_size(self.size)
    }

    pub fn generator(&self) -> Generator {
        Generator::new(self.size).with_optional_seed(self.seed)
    }
}
