use std::{
    fs,
    path::{Path, PathBuf},
};

use cterra::{generator::DEFAULT_SIZE, Heuristic, RunSpec, Solver, Traversal};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// User settings, every field is optional so old or partial files keep loading.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub size: Option<i32>,
    #[serde(default)]
    pub traversal: Option<Traversal>,
    #[serde(default)]
    pub solver: Option<Solver>,
    #[serde(default)]
    pub heuristic: Option<Heuristic>,
    #[serde(default)]
    pub color: Option<bool>,
}

impl Settings {
    pub fn base_path() -> PathBuf {
        dirs::preference_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("terra")
    }

    pub fn default_path() -> PathBuf {
        Self::base_path().join("settings.ron")
    }

    /// Missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        Ok(ron::from_str(&text)?)
    }

    pub fn reset_config(path: impl AsRef<Path>) -> Result<(), AppError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let text = ron::ser::to_string_pretty(
            &Self::default().populate(),
            ron::ser::PrettyConfig::default(),
        )?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Fills every unset field with its default.
    pub fn populate(mut self) -> Self {
        self.size = Some(self.get_size());
        self.traversal = Some(self.get_traversal());
        self.solver = Some(self.get_solver());
        self.heuristic = Some(self.get_heuristic());
        self.color = Some(self.get_color());

        self
    }

    pub fn get_size(&self) -> i32 {
        self.size.unwrap_or(DEFAULT_SIZE)
    }

    pub fn get_traversal(&self) -> Traversal {
        self.traversal.unwrap_or_default()
    }

    pub fn get_solver(&self) -> Solver {
        self.solver.unwrap_or_default()
    }

    pub fn get_heuristic(&self) -> Heuristic {
        self.heuristic.unwrap_or_default()
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn run_spec(&self) -> RunSpec {
        RunSpec {
            size: self.get_size(),
            seed: None,
            traversal: self.get_traversal(),
            solver: self.get_solver(),
            heuristic: self.get_heuristic(),
        }
    }
}
