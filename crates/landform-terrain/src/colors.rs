//! Per-vertex colors from normalized height.

use glam::Vec3;
use rayon::prelude::*;

use landform_core::gradient::ColorGradient;
use landform_core::types::{Color, ElevationRange};

/// Color every vertex by where its height falls in `range`.
///
/// `range` must be the final bounds of `positions`; a flat range maps
/// every vertex to `gradient.evaluate(0.0)`.
pub fn map_colors(positions: &[Vec3], range: ElevationRange, gradient: &ColorGradient) -> Vec<Color> {
    positions
        .par_iter()
        .map(|p| gradient.evaluate(range.normalize(p.y)))
        .collect()
}
