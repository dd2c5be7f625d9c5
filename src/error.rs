//! Error types for start-up.
//!
//! Gameplay itself is infallible; everything here aborts the process.

use std::io;
use thiserror::Error;

/// A [`GameConfig`](crate::config::GameConfig) that cannot describe a playable street.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("street must be at least {min} column wide (got {value})")]
    TooNarrow { min: usize, value: usize },
    #[error("street must be at least {min} lanes tall (got {value})")]
    TooShort { min: usize, value: usize },
    #[error("initial tick interval must be positive")]
    ZeroTickInterval,
    #[error("frame interval must be positive")]
    ZeroFrameInterval,
}

/// Fatal errors that end the game.
#[derive(Debug, Error)]
pub enum StreetError {
    #[error("terminal backend unavailable: {0}")]
    Terminal(#[from] io::Error),
    #[error("invalid street configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to start async runtime: {0}")]
    Runtime(io::Error),
}
