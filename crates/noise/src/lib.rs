#![deny(unsafe_code)]
//! Deterministic noise fields over 2D/3D coordinates.
//!
//! Every generator is a pure function of its input coordinates and an
//! immutable seed-derived table: identical seeds produce identical fields.
//! Variants: [`Perlin`] (classic gradient noise), [`Simplex`] (skewed-grid
//! gradient noise), [`Worley`] (cellular distance noise), and [`Fractal`]
//! (octave composition over any of the others).
//!
//! Renderers call [`NoiseSource::sample2`] per pixel; no assumption is made
//! about call pattern or resolution.

pub mod fractal;
pub mod perlin;
pub mod simplex;
pub mod worley;

pub use fractal::{Fractal, FractalMode};
pub use perlin::Perlin;
pub use simplex::Simplex;
pub use worley::{DistanceMetric, Worley};

use morphogen_core::params::{param_f64, param_string, param_usize};
use morphogen_core::{GenError, Recipe, Xorshift64};
use serde_json::Value;

/// A deterministic scalar field over 2D/3D coordinates.
///
/// Implementations hold only immutable tables, so a single instance can be
/// shared read-only across concurrent callers.
pub trait NoiseSource: Send + Sync {
    /// Samples the field at (x, y). Output is approximately [-1, 1] for the
    /// gradient variants; [`Worley`] returns a non-negative distance.
    fn sample2(&self, x: f64, y: f64) -> f64;

    /// Samples the field at (x, y, z).
    fn sample3(&self, x: f64, y: f64, z: f64) -> f64;

    /// Samples at (x, y) remapped from the nominal [-1, 1] range into [0, 1],
    /// clamped against the documented overshoot.
    fn normalized2(&self, x: f64, y: f64) -> f64 {
        (self.sample2(x, y) * 0.5 + 0.5).clamp(0.0, 1.0)
    }

    /// Samples at (x, y, z) remapped into [0, 1].
    fn normalized3(&self, x: f64, y: f64, z: f64) -> f64 {
        (self.sample3(x, y, z) * 0.5 + 0.5).clamp(0.0, 1.0)
    }

    /// Samples at (x, y) remapped into [min, max].
    fn mapped2(&self, x: f64, y: f64, min: f64, max: f64) -> f64 {
        min + self.normalized2(x, y) * (max - min)
    }

    /// Samples at (x, y, z) remapped into [min, max].
    fn mapped3(&self, x: f64, y: f64, z: f64, min: f64, max: f64) -> f64 {
        min + self.normalized3(x, y, z) * (max - min)
    }
}

// ---------------------------------------------------------------------------
// Permutation table
// ---------------------------------------------------------------------------

/// Ken Perlin's reference permutation, used when no seed is supplied.
const REFERENCE: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Permutation table for gradient noise: 256 unique bytes doubled to 512
/// so corner lookups never need a modulo. Immutable after construction.
#[derive(Clone)]
pub struct PermutationTable {
    p: [u8; 512],
}

impl PermutationTable {
    /// Builds the table from Ken Perlin's reference permutation.
    pub fn reference() -> Self {
        Self::from_base(REFERENCE)
    }

    /// Builds the table from a seeded Fisher–Yates shuffle of the identity
    /// sequence 0..=255.
    pub fn seeded(seed: u64) -> Self {
        let mut base = [0u8; 256];
        for (i, slot) in base.iter_mut().enumerate() {
            *slot = i as u8;
        }
        let mut rng = Xorshift64::new(seed);
        rng.shuffle(&mut base);
        Self::from_base(base)
    }

    fn from_base(base: [u8; 256]) -> Self {
        let mut p = [0u8; 512];
        p[..256].copy_from_slice(&base);
        p[256..].copy_from_slice(&base);
        Self { p }
    }

    /// Raw lookup. `i` must be below 512; callers keep indices in range by
    /// masking lattice coordinates with `& 255` before chaining.
    #[inline]
    pub(crate) fn at(&self, i: usize) -> usize {
        self.p[i] as usize
    }

    /// Hashes a 2D lattice point into [0, 255].
    #[inline]
    pub(crate) fn hash2(&self, x: i64, y: i64) -> usize {
        let xi = (x & 255) as usize;
        let yi = (y & 255) as usize;
        self.at(xi + self.at(yi))
    }

    /// Hashes a 3D lattice point into [0, 255].
    #[inline]
    pub(crate) fn hash3(&self, x: i64, y: i64, z: i64) -> usize {
        let xi = (x & 255) as usize;
        let yi = (y & 255) as usize;
        let zi = (z & 255) as usize;
        self.at(xi + self.at(yi + self.at(zi)))
    }
}

// ---------------------------------------------------------------------------
// Shared gradient math
// ---------------------------------------------------------------------------

/// Fixed 2D gradient set: the four axis directions and four diagonals.
pub(crate) const GRAD2: [[f64; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
];

/// The 12 edge directions of the unit cube, shared by 3D Perlin and both
/// Simplex dimensions (indexed modulo 12).
pub(crate) const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`; zero first and second
/// derivatives at both endpoints.
#[inline]
pub(crate) fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// All recognized generator names.
const GENERATOR_NAMES: &[&str] = &["perlin", "simplex", "worley", "fractal"];

/// Returns a slice of all recognized generator names.
pub fn list_generators() -> &'static [&'static str] {
    GENERATOR_NAMES
}

/// Constructs a noise source by name.
///
/// Recognized params (all optional):
/// - `worley`: `metric` ("euclidean", "manhattan", "chebyshev", "minkowski"),
///   `minkowski_p` (sanitized to >= 1).
/// - `fractal`: `base` (any non-fractal generator name, default "perlin"),
///   `mode` ("fbm", "turbulence", "ridged"), `octaves`, `frequency`,
///   `lacunarity`, `persistence`.
///
/// Returns `GenError::UnknownGenerator` for unrecognized names and
/// `GenError::InvalidParam` for unrecognized metric/mode strings or a
/// nested fractal base.
pub fn from_name(name: &str, seed: u64, params: &Value) -> Result<Box<dyn NoiseSource>, GenError> {
    match name {
        "perlin" => Ok(Box::new(Perlin::seeded(seed))),
        "simplex" => Ok(Box::new(Simplex::seeded(seed))),
        "worley" => {
            let metric = match param_string(params, "metric", "euclidean").as_str() {
                "euclidean" => DistanceMetric::Euclidean,
                "manhattan" => DistanceMetric::Manhattan,
                "chebyshev" => DistanceMetric::Chebyshev,
                "minkowski" => DistanceMetric::Minkowski(param_f64(params, "minkowski_p", 2.0)),
                other => {
                    return Err(GenError::InvalidParam {
                        name: "metric".into(),
                        reason: format!("unrecognized distance metric '{other}'"),
                    })
                }
            };
            Ok(Box::new(Worley::new(seed).metric(metric)))
        }
        "fractal" => {
            let base_name = param_string(params, "base", "perlin");
            if base_name == "fractal" {
                return Err(GenError::InvalidParam {
                    name: "base".into(),
                    reason: "fractal cannot wrap another fractal".into(),
                });
            }
            let mode = match param_string(params, "mode", "fbm").as_str() {
                "fbm" => FractalMode::Fbm,
                "turbulence" => FractalMode::Turbulence,
                "ridged" => FractalMode::Ridged,
                other => {
                    return Err(GenError::InvalidParam {
                        name: "mode".into(),
                        reason: format!("unrecognized fractal mode '{other}'"),
                    })
                }
            };
            let base = from_name(&base_name, seed, params)?;
            Ok(Box::new(
                Fractal::new(base)
                    .octaves(param_usize(params, "octaves", 4) as u32)
                    .frequency(param_f64(params, "frequency", 1.0))
                    .lacunarity(param_f64(params, "lacunarity", 2.0))
                    .persistence(param_f64(params, "persistence", 0.5))
                    .mode(mode),
            ))
        }
        _ => Err(GenError::UnknownGenerator(name.to_string())),
    }
}

/// Constructs a noise source from a [`Recipe`] (generator name, seed, params).
///
/// Recipe dimensions are ignored; noise fields are resolution-independent.
pub fn from_recipe(recipe: &Recipe) -> Result<Box<dyn NoiseSource>, GenError> {
    from_name(&recipe.generator, recipe.seed, &recipe.params)
}
