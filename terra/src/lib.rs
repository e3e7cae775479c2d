pub mod compare;
pub mod logging;
pub mod render;
pub mod settings;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Maze(#[from] cterra::Error),
    #[error("failed to access settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to write settings: {0}")]
    Serialize(#[from] ron::Error),
}
