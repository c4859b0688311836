//! Height field generation: noise-displaced grid positions plus their
//! elevation range.

use glam::Vec3;
use rayon::prelude::*;

use landform_core::config::GenerationConfig;
use landform_core::types::ElevationRange;

use crate::sampler::NoiseSampler;
use crate::topology::GridTopology;

/// Vertex positions of one generation pass and their exact height bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    /// Row-major positions, `topology.vertex_count()` long.
    pub positions: Vec<Vec3>,
    /// Tight bounds over every `position.y`.
    pub range: ElevationRange,
}

impl HeightField {
    /// Displace every grid vertex by the sampled noise.
    ///
    /// Rows run as independent parallel tasks, each writing its own slice
    /// of the position buffer and folding its own local range. The row
    /// ranges are merged as tasks complete, and the result is only
    /// returned after every row has finished.
    pub fn generate(
        config: &GenerationConfig,
        topology: &GridTopology,
        sampler: &NoiseSampler,
    ) -> Self {
        let mut positions = vec![Vec3::ZERO; topology.vertex_count()];

        let range = positions
            .par_chunks_mut(topology.row_width())
            .enumerate()
            .map(|(z, row)| fill_row(config, topology, sampler, z as u32, row))
            .reduce(|| ElevationRange::EMPTY, ElevationRange::merge);

        Self { positions, range }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.positions.iter().map(|p| p.y)
    }
}

/// World position of grid vertex (x, z).
pub fn vertex_position(
    config: &GenerationConfig,
    topology: &GridTopology,
    sampler: &NoiseSampler,
    x: u32,
    z: u32,
) -> Vec3 {
    let (u, v) = topology.uv(x, z);
    let world_x = u * config.world_size_x;
    let world_z = v * config.world_size_z;
    let y = config.height_amplitude
        * sampler.sample(world_x * config.noise_scale, world_z * config.noise_scale);
    Vec3::new(world_x, y, world_z)
}

fn fill_row(
    config: &GenerationConfig,
    topology: &GridTopology,
    sampler: &NoiseSampler,
    z: u32,
    row: &mut [Vec3],
) -> ElevationRange {
    let mut range = ElevationRange::EMPTY;
    for (x, slot) in row.iter_mut().enumerate() {
        let p = vertex_position(config, topology, sampler, x as u32, z);
        range.include(p.y);
        *slot = p;
    }
    range
}
