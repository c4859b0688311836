//! Configuration errors, raised before any generation work starts.

use std::path::PathBuf;

use thiserror::Error;

/// Grid axis, used to label per-axis errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Z => f.write_str("z"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("segment count along {axis} must be in 1..={max}, got {value}")]
    SegmentsOutOfRange { axis: Axis, value: u32, max: u32 },

    #[error("world size along {axis} must be positive and finite, got {value}")]
    InvalidWorldSize { axis: Axis, value: f32 },

    #[error("height amplitude must be non-negative and finite, got {0}")]
    InvalidHeightAmplitude(f32),

    #[error("noise scale must be positive and finite, got {0}")]
    InvalidNoiseScale(f32),

    #[error("detail factor must be positive and finite, got {0}")]
    InvalidDetail(f32),

    #[error("color gradient needs at least one stop")]
    EmptyGradient,

    #[error("gradient stop {index} is invalid: position {position} must lie in [0, 1] with a finite color")]
    InvalidGradientStop { index: usize, position: f32 },
}

/// Failures loading terrain settings from JSON.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
