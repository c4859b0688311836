//! Generation limits and default tuning parameters.

// --- Grid ---

/// Upper bound on segments per axis. Keeps a single generation at
/// roughly one million vertices and two million triangles.
pub const MAX_SEGMENTS: u32 = 1000;

/// Index entries emitted per grid cell (two triangles).
pub const INDICES_PER_CELL: usize = 6;

// --- Terrain defaults ---

/// Default terrain extent along X, in world units.
pub const DEFAULT_BASE_SIZE_X: u32 = 20;

/// Default terrain extent along Z, in world units.
pub const DEFAULT_BASE_SIZE_Z: u32 = 20;

/// Default detail factor (segments per world unit).
pub const DEFAULT_DETAIL: f32 = 1.0;

/// Default vertical scale applied to the [0, 1] noise value.
pub const DEFAULT_HEIGHT_AMPLITUDE: f32 = 2.0;

/// Default noise frequency multiplier.
pub const DEFAULT_NOISE_SCALE: f32 = 0.3;

// --- Noise ---

/// Half-width of the plane offset drawn from the seed.
pub const NOISE_OFFSET_RANGE: f64 = 10_000.0;

/// Sample coordinates are wrapped into `[0, NOISE_PERIOD)`. A multiple
/// of the 256-cell Perlin permutation period, so wrapping never changes
/// the noise value and the lattice coordinate always fits in `isize`.
pub const NOISE_PERIOD: f64 = 65_536.0;

// --- Water ---

/// Fraction of the elevation range at which the water plane sits
/// before depth is added.
pub const WATER_LEVEL_FRACTION: f32 = 0.2;

/// Default extra depth added on top of the water level.
pub const DEFAULT_WATER_DEPTH: f32 = 0.5;

/// Fraction of the mean terrain height used as the flooded-surface level.
pub const FLOOD_LEVEL_FRACTION: f32 = 0.7;
