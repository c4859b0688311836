//! TerrainGenerator: runs one full generation pass.
//!
//! Two fork-join phases run side by side: row-parallel heights (with the
//! merged elevation range) and row-parallel triangle indices. Color
//! mapping starts only after the height phase has joined, then the mesh
//! is assembled on the calling thread.

use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info_span};

use landform_core::config::GenerationConfig;

use crate::colors::map_colors;
use crate::error::TerrainError;
use crate::heightfield::HeightField;
use crate::mesh::GeometrySnapshot;
use crate::sampler::NoiseSampler;
use crate::topology::GridTopology;

/// Stateless generation driver, optionally bound to a dedicated pool.
#[derive(Debug, Default)]
pub struct TerrainGenerator {
    pool: Option<ThreadPool>,
}

impl TerrainGenerator {
    /// Generator that runs on rayon's global pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator with its own pool of `threads` workers.
    /// `0` falls back to rayon's global pool.
    pub fn with_threads(threads: usize) -> Result<Self, TerrainError> {
        if threads == 0 {
            return Ok(Self::new());
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("landform-worker-{i}"))
            .build()?;
        Ok(Self { pool: Some(pool) })
    }

    /// Worker count that generation will use.
    pub fn num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Validate `config` and produce a complete snapshot.
    ///
    /// Nothing is allocated when validation fails.
    pub fn generate(&self, config: &GenerationConfig) -> Result<GeometrySnapshot, TerrainError> {
        config.validate()?;
        let topology = GridTopology::new(config.segments_x, config.segments_z)?;

        let span = info_span!(
            "generate",
            segments_x = config.segments_x,
            segments_z = config.segments_z
        );
        let _guard = span.enter();

        let sampler = NoiseSampler::new(config.seed);
        let started = Instant::now();

        let (field, indices, colors) = self.install(|| {
            let (field, indices) = rayon::join(
                || HeightField::generate(config, &topology, &sampler),
                || topology.build_indices(),
            );
            let colors = map_colors(&field.positions, field.range, &config.gradient);
            (field, indices, colors)
        });
        debug!(
            vertices = field.vertex_count(),
            indices = indices.len(),
            min = field.range.min,
            max = field.range.max,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "buffers generated"
        );

        let snapshot = GeometrySnapshot::assemble(
            topology,
            [config.world_size_x, config.world_size_z],
            field.positions,
            indices,
            colors,
            field.range,
        );
        debug!(
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "mesh assembled"
        );
        Ok(snapshot)
    }

    fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landform_core::error::ConfigError;

    #[test]
    fn test_generate_counts() {
        let config = GenerationConfig {
            segments_x: 8,
            segments_z: 5,
            ..Default::default()
        };
        let snapshot = TerrainGenerator::new().generate(&config).unwrap();
        assert_eq!(snapshot.vertex_count(), 9 * 6);
        assert_eq!(snapshot.indices().len(), 8 * 5 * 6);
        assert_eq!(snapshot.colors().len(), snapshot.vertex_count());
        assert_eq!(snapshot.normals().len(), snapshot.vertex_count());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GenerationConfig {
            segments_x: 0,
            ..Default::default()
        };
        let err = TerrainGenerator::new().generate(&config).unwrap_err();
        assert!(matches!(
            err,
            TerrainError::Config(ConfigError::SegmentsOutOfRange { .. })
        ));
    }

    #[test]
    fn test_dedicated_pool_matches_global_pool() {
        let config = GenerationConfig {
            segments_x: 40,
            segments_z: 30,
            seed: 99,
            ..Default::default()
        };
        let global = TerrainGenerator::new().generate(&config).unwrap();
        let pooled = TerrainGenerator::with_threads(3).unwrap();
        assert_eq!(pooled.num_threads(), 3);
        assert_eq!(pooled.generate(&config).unwrap(), global);

        let single = TerrainGenerator::with_threads(1).unwrap();
        assert_eq!(single.generate(&config).unwrap(), global);
    }

    #[test]
    fn test_zero_threads_uses_global_pool() {
        let generator = TerrainGenerator::with_threads(0).unwrap();
        assert_eq!(generator.num_threads(), rayon::current_num_threads());
    }
}
