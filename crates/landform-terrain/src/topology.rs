//! GridTopology: vertex layout and triangle connectivity of a segmented grid.
//!
//! Vertices are row-major: row `z` holds `segments_x + 1` vertices and
//! vertex `(x, z)` lives at `z * row_width + x`. Each cell emits six
//! indices, `(v, v + w, v + 1)` and `(v + 1, v + w, v + w + 1)` with
//! `w = row_width`; the two triangles share the diagonal `(v + 1, v + w)`.

use rayon::prelude::*;

use landform_core::constants::{INDICES_PER_CELL, MAX_SEGMENTS};
use landform_core::error::{Axis, ConfigError};

/// Validated segment counts and the layout derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTopology {
    segments_x: u32,
    segments_z: u32,
}

impl GridTopology {
    /// Create a topology. Both counts must be in `1..=MAX_SEGMENTS`.
    pub fn new(segments_x: u32, segments_z: u32) -> Result<Self, ConfigError> {
        for (axis, value) in [(Axis::X, segments_x), (Axis::Z, segments_z)] {
            if value == 0 || value > MAX_SEGMENTS {
                return Err(ConfigError::SegmentsOutOfRange {
                    axis,
                    value,
                    max: MAX_SEGMENTS,
                });
            }
        }
        Ok(Self {
            segments_x,
            segments_z,
        })
    }

    pub fn segments_x(&self) -> u32 {
        self.segments_x
    }

    pub fn segments_z(&self) -> u32 {
        self.segments_z
    }

    /// Vertices per row.
    pub fn row_width(&self) -> usize {
        self.segments_x as usize + 1
    }

    /// Number of vertex rows.
    pub fn row_count(&self) -> usize {
        self.segments_z as usize + 1
    }

    pub fn vertex_count(&self) -> usize {
        self.row_width() * self.row_count()
    }

    pub fn cell_count(&self) -> usize {
        self.segments_x as usize * self.segments_z as usize
    }

    pub fn index_count(&self) -> usize {
        self.cell_count() * INDICES_PER_CELL
    }

    pub fn triangle_count(&self) -> usize {
        self.cell_count() * 2
    }

    /// Index entries written per cell row.
    pub fn indices_per_row(&self) -> usize {
        self.segments_x as usize * INDICES_PER_CELL
    }

    /// Linear vertex index of grid coordinate (x, z).
    pub fn vertex_index(&self, x: u32, z: u32) -> u32 {
        z * (self.segments_x + 1) + x
    }

    /// The six indices of cell (x, z).
    pub fn cell_indices(&self, x: u32, z: u32) -> [u32; 6] {
        let v = self.vertex_index(x, z);
        let w = self.segments_x + 1;
        [v, v + w, v + 1, v + 1, v + w, v + w + 1]
    }

    /// Write the indices of cell row `z` into `out`, which must hold
    /// exactly `indices_per_row()` entries.
    pub fn write_row_indices(&self, z: u32, out: &mut [u32]) {
        assert_eq!(out.len(), self.indices_per_row(), "row index slice length");
        for (x, cell) in out.chunks_exact_mut(INDICES_PER_CELL).enumerate() {
            cell.copy_from_slice(&self.cell_indices(x as u32, z));
        }
    }

    /// Build the full index buffer, one parallel task per cell row.
    /// Rows write disjoint ranges, so no synchronization is needed.
    pub fn build_indices(&self) -> Vec<u32> {
        let mut indices = vec![0u32; self.index_count()];
        indices
            .par_chunks_mut(self.indices_per_row())
            .enumerate()
            .for_each(|(z, row)| self.write_row_indices(z as u32, row));
        indices
    }

    /// Normalized (u, v) in [0, 1] of grid coordinate (x, z).
    pub fn uv(&self, x: u32, z: u32) -> (f32, f32) {
        (
            x as f32 / self.segments_x as f32,
            z as f32 / self.segments_z as f32,
        )
    }
}
