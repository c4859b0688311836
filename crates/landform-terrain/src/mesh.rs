//! GeometrySnapshot: the assembled, render-ready terrain mesh.

use glam::Vec3;

use landform_core::events::TerrainGenerated;
use landform_core::types::{Color, ElevationRange};

use crate::topology::GridTopology;

/// One complete generation result. Immutable once assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySnapshot {
    topology: GridTopology,
    world_size: [f32; 2],
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
    colors: Vec<Color>,
    range: ElevationRange,
}

impl GeometrySnapshot {
    /// Package the generated buffers and compute vertex normals.
    ///
    /// # Panics
    /// If any buffer length disagrees with `topology`. That can only
    /// happen through a defect in the pipeline, not through bad input.
    pub fn assemble(
        topology: GridTopology,
        world_size: [f32; 2],
        positions: Vec<Vec3>,
        indices: Vec<u32>,
        colors: Vec<Color>,
        range: ElevationRange,
    ) -> Self {
        assert_eq!(
            positions.len(),
            topology.vertex_count(),
            "vertex buffer length does not match topology"
        );
        assert_eq!(
            indices.len(),
            topology.index_count(),
            "index buffer length does not match topology"
        );
        assert_eq!(
            colors.len(),
            positions.len(),
            "color buffer length does not match vertex buffer"
        );

        let normals = compute_normals(&positions, &indices);
        Self {
            topology,
            world_size,
            positions,
            normals,
            indices,
            colors,
            range,
        }
    }

    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// World extents along X and Z.
    pub fn world_size(&self) -> [f32; 2] {
        self.world_size
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn elevation_range(&self) -> ElevationRange {
        self.range
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Completion event describing this snapshot.
    pub fn event(&self) -> TerrainGenerated {
        TerrainGenerated {
            vertex_count: self.vertex_count(),
            triangle_count: self.triangle_count(),
            min_height: self.range.min,
            max_height: self.range.max,
            world_size_x: self.world_size[0],
            world_size_z: self.world_size[1],
        }
    }
}

/// Area-weighted vertex normals.
///
/// Each triangle adds its unnormalized face normal to its three
/// vertices; the sums are then normalized. Vertices that touch no
/// triangle (or only degenerate ones) get +Y.
pub fn compute_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for n in &mut normals {
        let unit = n.normalize_or_zero();
        *n = if unit == Vec3::ZERO { Vec3::Y } else { unit };
    }
    normals
}
