//! Color gradient: ordered color stops sampled by a normalized scalar.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Color;

/// A single gradient stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient, in [0, 1].
    pub position: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(position: f32, color: Color) -> Self {
        Self { position, color }
    }
}

/// Piecewise-linear color ramp.
///
/// Stops are kept sorted by position. Sampling before the first stop or
/// after the last one returns that stop's color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GradientStop>", into = "Vec<GradientStop>")]
pub struct ColorGradient {
    stops: Vec<GradientStop>,
}

impl ColorGradient {
    /// Build a gradient, sorting the stops by position.
    pub fn new(mut stops: Vec<GradientStop>) -> Result<Self, ConfigError> {
        if stops.is_empty() {
            return Err(ConfigError::EmptyGradient);
        }
        for (index, stop) in stops.iter().enumerate() {
            let in_range = stop.position.is_finite() && (0.0..=1.0).contains(&stop.position);
            if !in_range || !stop.color.is_finite() {
                return Err(ConfigError::InvalidGradientStop {
                    index,
                    position: stop.position,
                });
            }
        }
        // Stable sort keeps the caller's order for coincident stops.
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(Self { stops })
    }

    /// Single-color gradient.
    pub fn solid(color: Color) -> Self {
        Self {
            stops: vec![GradientStop::new(0.0, color)],
        }
    }

    /// Water, sand, grass, rock, snow.
    pub fn terrain() -> Self {
        Self {
            stops: vec![
                GradientStop::new(0.0, Color::rgb(0.12, 0.28, 0.55)),
                GradientStop::new(0.25, Color::rgb(0.86, 0.80, 0.58)),
                GradientStop::new(0.45, Color::rgb(0.30, 0.58, 0.22)),
                GradientStop::new(0.75, Color::rgb(0.45, 0.40, 0.36)),
                GradientStop::new(1.0, Color::rgb(0.97, 0.97, 0.99)),
            ],
        }
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Sample the gradient at `t` (clamped to [0, 1]).
    pub fn evaluate(&self, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let first = &self.stops[0];
        if t <= first.position {
            return first.color;
        }
        let last = &self.stops[self.stops.len() - 1];
        if t >= last.position {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t <= b.position {
                let width = b.position - a.position;
                if width <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.position) / width);
            }
        }

        last.color
    }
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self::terrain()
    }
}

impl TryFrom<Vec<GradientStop>> for ColorGradient {
    type Error = ConfigError;

    fn try_from(stops: Vec<GradientStop>) -> Result<Self, Self::Error> {
        Self::new(stops)
    }
}

impl From<ColorGradient> for Vec<GradientStop> {
    fn from(gradient: ColorGradient) -> Self {
        gradient.stops
    }
}
