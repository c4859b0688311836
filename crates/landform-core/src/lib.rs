//! Core types and definitions for landform.
//!
//! This crate defines the vocabulary shared by the terrain pipeline and
//! its front ends: colors, gradients, elevation ranges, generation
//! configuration, and the event published after each generation.
//! It has no dependency on the parallel runtime or the noise backend.

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod gradient;
pub mod types;

pub use config::{GenerationConfig, TerrainSettings};
pub use error::{ConfigError, SettingsError};
pub use events::TerrainGenerated;
pub use gradient::{ColorGradient, GradientStop};
pub use types::{Color, ElevationRange};
