//! Simplex gradient noise.
//!
//! Input coordinates are skewed onto a simplex grid; the containing
//! triangle (2D) or tetrahedron (3D) is found by comparing skewed
//! coordinate order, and each corner contributes a radially attenuated
//! gradient dot product `(0.5 - d²)⁴ · (grad · offset)`. The sum is scaled
//! by a fixed normalization constant (70 in 2D, 32 in 3D) to land
//! approximately in [-1, 1].

use crate::{NoiseSource, PermutationTable, GRAD3};

/// 2D skew factor `(√3 - 1) / 2`.
const F2: f64 = 0.366_025_403_784_438_6;
/// 2D unskew factor `(3 - √3) / 6`.
const G2: f64 = 0.211_324_865_405_187_1;
/// 3D skew factor `1/3`.
const F3: f64 = 1.0 / 3.0;
/// 3D unskew factor `1/6`.
const G3: f64 = 1.0 / 6.0;

/// Normalization constant scaling the 2D corner sum into [-1, 1].
const SCALE2: f64 = 70.0;
/// Normalization constant scaling the 3D corner sum into [-1, 1].
const SCALE3: f64 = 32.0;

/// Simplex gradient noise over 2D/3D coordinates.
///
/// Uses the same permutation table mechanism as [`Perlin`](crate::Perlin);
/// gradients come from the 12 unit-cube edge directions indexed modulo 12.
#[derive(Clone)]
pub struct Simplex {
    table: PermutationTable,
}

impl Simplex {
    /// Creates a generator using the fixed reference permutation.
    pub fn new() -> Self {
        Self {
            table: PermutationTable::reference(),
        }
    }

    /// Creates a generator whose permutation is shuffled from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            table: PermutationTable::seeded(seed),
        }
    }

    /// Radial falloff contribution from one simplex corner.
    #[inline]
    fn corner2(hash: usize, x: f64, y: f64) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            return 0.0;
        }
        let t2 = t * t;
        let g = &GRAD3[hash % 12];
        t2 * t2 * (g[0] * x + g[1] * y)
    }

    #[inline]
    fn corner3(hash: usize, x: f64, y: f64, z: f64) -> f64 {
        let t = 0.5 - x * x - y * y - z * z;
        if t < 0.0 {
            return 0.0;
        }
        let t2 = t * t;
        let g = &GRAD3[hash % 12];
        t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
    }
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for Simplex {
    fn sample2(&self, x: f64, y: f64) -> f64 {
        // Skew into simplex space and locate the containing cell.
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Upper or lower triangle of the skewed square.
        let (i1, j1) = if x0 > y0 { (1.0, 0.0) } else { (0.0, 1.0) };

        let x1 = x0 - i1 + G2;
        let y1 = y0 - j1 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = i as i64;
        let jj = j as i64;
        let gi0 = self.table.hash2(ii, jj);
        let gi1 = self.table.hash2(ii + i1 as i64, jj + j1 as i64);
        let gi2 = self.table.hash2(ii + 1, jj + 1);

        let n0 = Self::corner2(gi0, x0, y0);
        let n1 = Self::corner2(gi1, x1, y1);
        let n2 = Self::corner2(gi2, x2, y2);

        SCALE2 * (n0 + n1 + n2)
    }

    fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        let s = (x + y + z) * F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();

        let t = (i + j + k) * G3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        // Rank the skewed coordinates to pick the traversal order through
        // the tetrahedron.
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = i as i64;
        let jj = j as i64;
        let kk = k as i64;
        let gi0 = self.table.hash3(ii, jj, kk);
        let gi1 = self.table.hash3(ii + i1, jj + j1, kk + k1);
        let gi2 = self.table.hash3(ii + i2, jj + j2, kk + k2);
        let gi3 = self.table.hash3(ii + 1, jj + 1, kk + 1);

        let n0 = Self::corner3(gi0, x0, y0, z0);
        let n1 = Self::corner3(gi1, x1, y1, z1);
        let n2 = Self::corner3(gi2, x2, y2, z2);
        let n3 = Self::corner3(gi3, x3, y3, z3);

        SCALE3 * (n0 + n1 + n2 + n3)
    }
}
