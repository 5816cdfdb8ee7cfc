//! Error types for configuration loading

use thiserror::Error;

/// Reasons a level table is rejected at load
#[derive(Debug, Error, PartialEq)]
pub enum LevelTableError {
    #[error("level table is empty")]
    Empty,
    #[error("level {level} ({name}): {field} must be positive, got {value}")]
    NonPositiveSpawnRate {
        level: usize,
        name: String,
        field: &'static str,
        value: i64,
    },
    #[error(
        "level {level} ({name}): scoreToNextLevel {threshold} does not exceed previous {previous}"
    )]
    NonIncreasingThreshold {
        level: usize,
        name: String,
        threshold: u64,
        previous: u64,
    },
}

/// Settings / level file loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    LevelTable(#[from] LevelTableError),
}
