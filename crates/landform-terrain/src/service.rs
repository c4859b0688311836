//! TerrainService — the entry point a host application drives.
//!
//! Owns a generator and a publisher. Every configuration change re-runs
//! the whole pipeline and publishes a fresh snapshot; a failed run leaves
//! the previous snapshot in place.

use std::sync::mpsc;
use std::sync::Arc;

use tracing::info;

use landform_core::config::{GenerationConfig, TerrainSettings};
use landform_core::events::TerrainGenerated;

use crate::error::TerrainError;
use crate::generator::TerrainGenerator;
use crate::mesh::GeometrySnapshot;
use crate::publisher::{TerrainListener, TerrainPublisher};

#[derive(Default)]
pub struct TerrainService {
    generator: TerrainGenerator,
    publisher: TerrainPublisher,
    config: Option<GenerationConfig>,
}

impl TerrainService {
    pub fn new(generator: TerrainGenerator) -> Self {
        Self {
            generator,
            publisher: TerrainPublisher::new(),
            config: None,
        }
    }

    pub fn register(&mut self, listener: impl TerrainListener + 'static) {
        self.publisher.register(listener);
    }

    pub fn register_fn<F>(&mut self, f: F)
    where
        F: FnMut(&TerrainGenerated) + Send + 'static,
    {
        self.publisher.register_fn(f);
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<TerrainGenerated> {
        self.publisher.subscribe()
    }

    /// Config of the last successful generation.
    pub fn config(&self) -> Option<&GenerationConfig> {
        self.config.as_ref()
    }

    /// Latest published snapshot.
    pub fn current(&self) -> Option<Arc<GeometrySnapshot>> {
        self.publisher.current()
    }

    /// Generate from `config`, publish, and return the new snapshot.
    pub fn regenerate(
        &mut self,
        config: &GenerationConfig,
    ) -> Result<Arc<GeometrySnapshot>, TerrainError> {
        let snapshot = self.generator.generate(config)?;
        let range = snapshot.elevation_range();
        info!(
            vertices = snapshot.vertex_count(),
            triangles = snapshot.triangle_count(),
            min_height = range.min,
            max_height = range.max,
            "terrain generated"
        );

        self.config = Some(config.clone());
        Ok(self.publisher.publish(snapshot))
    }

    /// Derive a config from UI-level settings and regenerate.
    pub fn apply_settings(
        &mut self,
        settings: &TerrainSettings,
    ) -> Result<Arc<GeometrySnapshot>, TerrainError> {
        let config = settings.to_config()?;
        self.regenerate(&config)
    }

    /// Re-run the last successful configuration.
    /// Returns `None` if nothing has been generated yet.
    pub fn refresh(&mut self) -> Option<Result<Arc<GeometrySnapshot>, TerrainError>> {
        let config = self.config.clone()?;
        Some(self.regenerate(&config))
    }
}
