//! Generation configuration and the UI-facing terrain settings it is
//! derived from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Axis, ConfigError, SettingsError};
use crate::gradient::ColorGradient;

/// Everything one generation pass needs. Read-only for the duration
/// of the pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Grid cells along X.
    pub segments_x: u32,
    /// Grid cells along Z.
    pub segments_z: u32,
    /// World-space extent along X.
    pub world_size_x: f32,
    /// World-space extent along Z.
    pub world_size_z: f32,
    /// Vertical scale applied to the [0, 1] noise value.
    pub height_amplitude: f32,
    /// Frequency multiplier applied to world coordinates before sampling.
    pub noise_scale: f32,
    /// Noise permutation seed.
    #[serde(default)]
    pub seed: u32,
    /// Ramp used to color vertices by normalized height.
    #[serde(default)]
    pub gradient: ColorGradient,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            segments_x: DEFAULT_BASE_SIZE_X,
            segments_z: DEFAULT_BASE_SIZE_Z,
            world_size_x: DEFAULT_BASE_SIZE_X as f32,
            world_size_z: DEFAULT_BASE_SIZE_Z as f32,
            height_amplitude: DEFAULT_HEIGHT_AMPLITUDE,
            noise_scale: DEFAULT_NOISE_SCALE,
            seed: 0,
            gradient: ColorGradient::default(),
        }
    }
}

impl GenerationConfig {
    /// Check every field. Nothing is generated from a config that fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_segments(Axis::X, self.segments_x)?;
        check_segments(Axis::Z, self.segments_z)?;
        check_world_size(Axis::X, self.world_size_x)?;
        check_world_size(Axis::Z, self.world_size_z)?;

        if !self.height_amplitude.is_finite() || self.height_amplitude < 0.0 {
            return Err(ConfigError::InvalidHeightAmplitude(self.height_amplitude));
        }
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(ConfigError::InvalidNoiseScale(self.noise_scale));
        }
        Ok(())
    }
}

fn check_segments(axis: Axis, value: u32) -> Result<(), ConfigError> {
    if value == 0 || value > MAX_SEGMENTS {
        return Err(ConfigError::SegmentsOutOfRange {
            axis,
            value,
            max: MAX_SEGMENTS,
        });
    }
    Ok(())
}

fn check_world_size(axis: Axis, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidWorldSize { axis, value });
    }
    Ok(())
}

/// Terrain parameters as an editor or UI exposes them.
///
/// The base sizes are the world extents; the detail factor scales them
/// into segment counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainSettings {
    pub base_size_x: u32,
    pub base_size_z: u32,
    /// Segments per world unit.
    pub detail: f32,
    pub height_amplitude: f32,
    pub noise_scale: f32,
    #[serde(default)]
    pub seed: u32,
    #[serde(default)]
    pub gradient: ColorGradient,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            base_size_x: DEFAULT_BASE_SIZE_X,
            base_size_z: DEFAULT_BASE_SIZE_Z,
            detail: DEFAULT_DETAIL,
            height_amplitude: DEFAULT_HEIGHT_AMPLITUDE,
            noise_scale: DEFAULT_NOISE_SCALE,
            seed: 0,
            gradient: ColorGradient::default(),
        }
    }
}

impl TerrainSettings {
    /// Parse settings from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Segment count for one axis: `round(base * detail)` clamped to
    /// `1..=MAX_SEGMENTS`.
    pub fn segments_for(&self, base_size: u32) -> u32 {
        let raw = (base_size as f32 * self.detail).round();
        raw.clamp(1.0, MAX_SEGMENTS as f32) as u32
    }

    /// Derive and validate a generation config.
    pub fn to_config(&self) -> Result<GenerationConfig, ConfigError> {
        if !self.detail.is_finite() || self.detail <= 0.0 {
            return Err(ConfigError::InvalidDetail(self.detail));
        }

        let config = GenerationConfig {
            segments_x: self.segments_for(self.base_size_x),
            segments_z: self.segments_for(self.base_size_z),
            world_size_x: self.base_size_x as f32,
            world_size_z: self.base_size_z as f32,
            height_amplitude: self.height_amplitude,
            noise_scale: self.noise_scale,
            seed: self.seed,
            gradient: self.gradient.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}
