//! Seeded coherent noise over the XZ plane.

use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use landform_core::constants::{NOISE_OFFSET_RANGE, NOISE_PERIOD};

/// Deterministic 2D Perlin sampler returning values in [0, 1].
///
/// The seed picks both the permutation table and a fixed offset into
/// the noise plane, so grid coordinates never land on the integer
/// lattice where Perlin noise is pinned to its midpoint.
#[derive(Debug, Clone)]
pub struct NoiseSampler {
    perlin: Perlin,
    seed: u32,
    offset: [f64; 2],
}

impl NoiseSampler {
    pub fn new(seed: u32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        let offset = [
            rng.gen_range(-NOISE_OFFSET_RANGE..NOISE_OFFSET_RANGE),
            rng.gen_range(-NOISE_OFFSET_RANGE..NOISE_OFFSET_RANGE),
        ];
        Self {
            perlin: Perlin::new(seed),
            seed,
            offset,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Noise value at plane coordinates (x, z), in [0, 1].
    ///
    /// Defined for every input: coordinates are wrapped onto the noise
    /// period, and non-finite ones sample the plane origin.
    pub fn sample(&self, x: f32, z: f32) -> f32 {
        let point = [
            wrap(x as f64 + self.offset[0]),
            wrap(z as f64 + self.offset[1]),
        ];
        let raw = self.perlin.get(point);
        ((raw * 0.5 + 0.5) as f32).clamp(0.0, 1.0)
    }
}

fn wrap(coord: f64) -> f64 {
    if coord.is_finite() {
        coord.rem_euclid(NOISE_PERIOD)
    } else {
        0.0
    }
}

impl Default for NoiseSampler {
    fn default() -> Self {
        Self::new(0)
    }
}
