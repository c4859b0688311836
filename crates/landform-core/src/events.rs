//! Events published once a terrain generation has completed.

use serde::{Deserialize, Serialize};

use crate::types::ElevationRange;

/// Emitted exactly once per completed generation, after the geometry
/// has been fully assembled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainGenerated {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub min_height: f32,
    pub max_height: f32,
    /// World-space extent along X of the generated terrain.
    pub world_size_x: f32,
    /// World-space extent along Z of the generated terrain.
    pub world_size_z: f32,
}

impl TerrainGenerated {
    pub fn elevation_range(&self) -> ElevationRange {
        ElevationRange::new(self.min_height, self.max_height)
    }
}
