//! Error types for the streaming engine

use thiserror::Error;

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    #[error("chunk width must be positive, got {0}")]
    InvalidChunkWidth(u32),

    #[error("speed must be a positive finite number, got {0}")]
    InvalidSpeed(f32),

    #[error("obstacle rate must be a number, got {0}")]
    InvalidObstacleRate(f32),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
