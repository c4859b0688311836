//! Water surfaces that follow the generated terrain.
//!
//! `WaterSurface` listens for completed generations and keeps a flat water
//! plane positioned relative to the terrain's elevation range.
//! `flooded_surface` builds the alternative water mesh: terrain below a
//! level derived from the mean height is raised to that level, and only
//! the fully submerged triangles are kept.

use glam::Vec3;

use landform_core::constants::{DEFAULT_WATER_DEPTH, FLOOD_LEVEL_FRACTION, WATER_LEVEL_FRACTION};
use landform_core::events::TerrainGenerated;

use crate::mesh::{compute_normals, GeometrySnapshot};
use crate::publisher::TerrainListener;

/// Where the water plane sits for the current terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterPlacement {
    /// Water surface height.
    pub height: f32,
    /// Plane center; x and z are the middle of the terrain extents.
    pub center: Vec3,
    /// Plane extents along X and Z.
    pub size: [f32; 2],
}

/// Flat water plane placed at a fixed fraction of the elevation range
/// plus an adjustable depth.
#[derive(Debug, Clone)]
pub struct WaterSurface {
    depth: f32,
    level_fraction: f32,
    last_terrain: Option<TerrainGenerated>,
    placement: Option<WaterPlacement>,
}

impl Default for WaterSurface {
    fn default() -> Self {
        Self::new(DEFAULT_WATER_DEPTH)
    }
}

impl WaterSurface {
    pub fn new(depth: f32) -> Self {
        Self {
            depth,
            level_fraction: WATER_LEVEL_FRACTION,
            last_terrain: None,
            placement: None,
        }
    }

    /// Override the fraction of the elevation range the plane sits at.
    pub fn with_level_fraction(mut self, fraction: f32) -> Self {
        self.level_fraction = fraction;
        self
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Change the depth and re-place the plane against the last terrain.
    pub fn set_depth(&mut self, depth: f32) {
        self.depth = depth;
        self.update_placement();
    }

    /// `None` until the first terrain has been generated.
    pub fn placement(&self) -> Option<WaterPlacement> {
        self.placement
    }

    fn update_placement(&mut self) {
        self.placement = self.last_terrain.map(|terrain| {
            let height = terrain.elevation_range().lerp(self.level_fraction) + self.depth;
            WaterPlacement {
                height,
                center: Vec3::new(terrain.world_size_x / 2.0, height, terrain.world_size_z / 2.0),
                size: [terrain.world_size_x, terrain.world_size_z],
            }
        });
    }
}

impl TerrainListener for WaterSurface {
    fn on_terrain_generated(&mut self, event: &TerrainGenerated) {
        self.last_terrain = Some(*event);
        self.update_placement();
    }
}

/// Terrain-shaped water mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct FloodedSurface {
    pub level: f32,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

/// Flood the terrain up to `mean height * FLOOD_LEVEL_FRACTION`.
pub fn flooded_surface(snapshot: &GeometrySnapshot) -> FloodedSurface {
    flooded_surface_at(snapshot, FLOOD_LEVEL_FRACTION)
}

/// Flood the terrain up to `mean height * fraction`.
///
/// Vertices below the level are raised onto it. A triangle is kept only
/// when all three of its vertices end up at exactly the same height.
pub fn flooded_surface_at(snapshot: &GeometrySnapshot, fraction: f32) -> FloodedSurface {
    let terrain = snapshot.positions();
    let mean = terrain.iter().map(|p| p.y as f64).sum::<f64>() / terrain.len() as f64;
    let level = mean as f32 * fraction;

    let positions: Vec<Vec3> = terrain
        .iter()
        .map(|p| if p.y < level { Vec3::new(p.x, level, p.z) } else { *p })
        .collect();

    let indices: Vec<u32> = snapshot
        .triangles()
        .filter(|[a, b, c]| {
            let (ya, yb, yc) = (
                positions[*a as usize].y,
                positions[*b as usize].y,
                positions[*c as usize].y,
            );
            ya == yb && yb == yc
        })
        .flatten()
        .collect();

    let normals = compute_normals(&positions, &indices);
    FloodedSurface {
        level,
        positions,
        normals,
        indices,
    }
}
