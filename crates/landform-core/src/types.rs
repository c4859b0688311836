//! Fundamental color and elevation types.

use serde::{Deserialize, Serialize};

/// Linear RGBA color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation towards `other`. `t` is not clamped.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Whether every channel is finite.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }
}

/// Minimum and maximum elevation observed over a vertex set.
///
/// Starts out empty (`min = +inf`, `max = -inf`) and only ever widens.
/// Partial ranges built by independent workers combine with [`merge`],
/// which is associative and commutative, so the order workers finish in
/// does not affect the result.
///
/// [`merge`]: ElevationRange::merge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationRange {
    pub min: f32,
    pub max: f32,
}

impl Default for ElevationRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl ElevationRange {
    /// Identity element for [`merge`](ElevationRange::merge).
    pub const EMPTY: ElevationRange = ElevationRange {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True until at least one height has been included.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Widen the range to cover `y`.
    pub fn include(&mut self, y: f32) {
        self.min = self.min.min(y);
        self.max = self.max.max(y);
    }

    /// Combine two partial ranges.
    pub fn merge(self, other: ElevationRange) -> ElevationRange {
        ElevationRange {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Build a range from an iterator of heights.
    pub fn from_heights(heights: impl IntoIterator<Item = f32>) -> Self {
        let mut range = Self::EMPTY;
        for y in heights {
            range.include(y);
        }
        range
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// True when every included height was the same value.
    pub fn is_flat(&self) -> bool {
        self.max == self.min
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.min && y <= self.max
    }

    /// Position of `y` within the range, clamped to [0, 1].
    /// A flat (or empty) range maps everything to 0.
    pub fn normalize(&self, y: f32) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        ((y - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Height at fraction `t` of the way from min to max.
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }
}
