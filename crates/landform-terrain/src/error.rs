//! Errors surfaced by the terrain pipeline.

use std::io;

use thiserror::Error;

use landform_core::error::ConfigError;

#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
