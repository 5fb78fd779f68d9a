//! Worley (cellular) noise.
//!
//! Each integer cell owns one pseudo-random feature point, derived by
//! hashing the cell coordinates together with the generator seed into a
//! fresh `Xorshift64` and drawing the point's offsets from it. A query
//! returns the distance to the nearest feature point among the 3×3 (2D) or
//! 3×3×3 (3D) neighborhood, under a selectable distance metric.

use crate::NoiseSource;
use morphogen_core::Xorshift64;

/// Mixing constants for the cell-coordinate hash (multiplicative/xor).
const HASH_X: u64 = 0x9E37_79B1_85EB_CA87;
const HASH_Y: u64 = 0xC2B2_AE3D_27D4_EB4F;
const HASH_Z: u64 = 0x1656_67B1_9E37_79F9;
const HASH_MIX: u64 = 0x2545_F491_4F6C_DD1D;

/// Distance metric for Worley noise.
///
/// `Minkowski(p)` generalizes the others; `p` below 1 is sanitized to 1
/// (Manhattan) rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceMetric {
    /// Straight-line distance (default).
    Euclidean,
    /// Sum of absolute axis differences.
    Manhattan,
    /// Maximum absolute axis difference.
    Chebyshev,
    /// `(Σ |dᵢ|^p)^(1/p)` with the given exponent.
    Minkowski(f64),
}

impl Default for DistanceMetric {
    fn default() -> Self {
        DistanceMetric::Euclidean
    }
}

impl DistanceMetric {
    /// Distance between two 2D points under this metric.
    fn distance2(&self, dx: f64, dy: f64) -> f64 {
        match *self {
            DistanceMetric::Euclidean => (dx * dx + dy * dy).sqrt(),
            DistanceMetric::Manhattan => dx.abs() + dy.abs(),
            DistanceMetric::Chebyshev => dx.abs().max(dy.abs()),
            DistanceMetric::Minkowski(p) => {
                let p = p.max(1.0);
                (dx.abs().powf(p) + dy.abs().powf(p)).powf(1.0 / p)
            }
        }
    }

    /// Distance between two 3D points under this metric.
    fn distance3(&self, dx: f64, dy: f64, dz: f64) -> f64 {
        match *self {
            DistanceMetric::Euclidean => (dx * dx + dy * dy + dz * dz).sqrt(),
            DistanceMetric::Manhattan => dx.abs() + dy.abs() + dz.abs(),
            DistanceMetric::Chebyshev => dx.abs().max(dy.abs()).max(dz.abs()),
            DistanceMetric::Minkowski(p) => {
                let p = p.max(1.0);
                (dx.abs().powf(p) + dy.abs().powf(p) + dz.abs().powf(p)).powf(1.0 / p)
            }
        }
    }
}

/// Worley cellular noise over 2D/3D coordinates.
///
/// `sample2`/`sample3` return the minimum feature-point distance, a
/// non-negative value (roughly [0, 1.5] for Euclidean). Use
/// [`Worley::distances2`] / [`Worley::distances3`] for multi-distance
/// effects (F2, edges).
#[derive(Debug, Clone)]
pub struct Worley {
    seed: u64,
    metric: DistanceMetric,
}

impl Worley {
    /// Creates a generator with the given seed and Euclidean distance.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            metric: DistanceMetric::default(),
        }
    }

    /// Sets the distance metric.
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Hashes cell coordinates and the generator seed into a PRNG seed.
    fn cell_seed(&self, cx: i64, cy: i64, cz: i64) -> u64 {
        let mut h = self.seed;
        h ^= (cx as u64).wrapping_mul(HASH_X);
        h ^= (cy as u64).wrapping_mul(HASH_Y);
        h ^= (cz as u64).wrapping_mul(HASH_Z);
        h.wrapping_mul(HASH_MIX)
    }

    /// The feature point owned by 2D cell (cx, cy).
    fn feature_point2(&self, cx: i64, cy: i64) -> (f64, f64) {
        let mut rng = Xorshift64::new(self.cell_seed(cx, cy, 0));
        (cx as f64 + rng.next_f64(), cy as f64 + rng.next_f64())
    }

    /// The feature point owned by 3D cell (cx, cy, cz).
    fn feature_point3(&self, cx: i64, cy: i64, cz: i64) -> (f64, f64, f64) {
        let mut rng = Xorshift64::new(self.cell_seed(cx, cy, cz));
        (
            cx as f64 + rng.next_f64(),
            cy as f64 + rng.next_f64(),
            cz as f64 + rng.next_f64(),
        )
    }

    /// Distances from (x, y) to every feature point in the 3×3 neighborhood.
    fn neighborhood2(&self, x: f64, y: f64) -> Vec<f64> {
        let xi = x.floor() as i64;
        let yi = y.floor() as i64;
        let mut dists = Vec::with_capacity(9);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let (px, py) = self.feature_point2(xi + dx, yi + dy);
                dists.push(self.metric.distance2(x - px, y - py));
            }
        }
        dists
    }

    /// Distances from (x, y, z) to every feature point in the 3×3×3 neighborhood.
    fn neighborhood3(&self, x: f64, y: f64, z: f64) -> Vec<f64> {
        let xi = x.floor() as i64;
        let yi = y.floor() as i64;
        let zi = z.floor() as i64;
        let mut dists = Vec::with_capacity(27);
        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let (px, py, pz) = self.feature_point3(xi + dx, yi + dy, zi + dz);
                    dists.push(self.metric.distance3(x - px, y - py, z - pz));
                }
            }
        }
        dists
    }

    /// The `count` smallest feature-point distances from (x, y), sorted
    /// ascending. At most one feature point exists per neighbor cell, so
    /// at most 9 distances are available.
    pub fn distances2(&self, x: f64, y: f64, count: usize) -> Vec<f64> {
        let mut dists = self.neighborhood2(x, y);
        dists.sort_by(f64::total_cmp);
        dists.truncate(count);
        dists
    }

    /// The `count` smallest feature-point distances from (x, y, z), sorted
    /// ascending. At most 27 distances are available.
    pub fn distances3(&self, x: f64, y: f64, z: f64, count: usize) -> Vec<f64> {
        let mut dists = self.neighborhood3(x, y, z);
        dists.sort_by(f64::total_cmp);
        dists.truncate(count);
        dists
    }
}

impl NoiseSource for Worley {
    fn sample2(&self, x: f64, y: f64) -> f64 {
        self.neighborhood2(x, y)
            .into_iter()
            .fold(f64::INFINITY, f64::min)
    }

    fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.neighborhood3(x, y, z)
            .into_iter()
            .fold(f64::INFINITY, f64::min)
    }

    /// Worley output is a non-negative distance, not a signed value, so
    /// normalization clamps the raw distance into [0, 1].
    fn normalized2(&self, x: f64, y: f64) -> f64 {
        self.sample2(x, y).clamp(0.0, 1.0)
    }

    fn normalized3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample3(x, y, z).clamp(0.0, 1.0)
    }
}
