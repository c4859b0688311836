//! Terrain pipeline for landform.
//!
//! Noise sampling, grid topology, parallel height field generation,
//! height-based coloring, mesh assembly, and completion notifications.

pub use landform_core as core;

pub mod colors;
pub mod error;
pub mod export;
pub mod generator;
pub mod heightfield;
pub mod mesh;
pub mod publisher;
pub mod sampler;
pub mod service;
pub mod topology;
pub mod water;

// Re-export key types for convenience.
pub use error::TerrainError;
pub use generator::TerrainGenerator;
pub use heightfield::HeightField;
pub use mesh::GeometrySnapshot;
pub use publisher::{TerrainListener, TerrainPublisher};
pub use sampler::NoiseSampler;
pub use service::TerrainService;
pub use topology::GridTopology;
pub use water::{flooded_surface, flooded_surface_at, FloodedSurface, WaterPlacement, WaterSurface};

#[cfg(test)]
mod tests;
