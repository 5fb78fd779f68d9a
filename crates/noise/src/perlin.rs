//! Classic Perlin gradient noise.
//!
//! For each query, the enclosing unit cell's corners are hashed through the
//! doubled permutation table to select gradients; the corner dot products
//! are blended with the quintic fade curve. Output is approximately [-1, 1]
//! (not strictly bounded — small overshoot is possible and documented).

use crate::{fade, lerp, NoiseSource, PermutationTable, GRAD2, GRAD3};

/// Classic Perlin gradient noise over 2D/3D coordinates.
#[derive(Clone)]
pub struct Perlin {
    table: PermutationTable,
}

impl Perlin {
    /// Creates a generator using the fixed reference permutation.
    pub fn new() -> Self {
        Self {
            table: PermutationTable::reference(),
        }
    }

    /// Creates a generator whose permutation is shuffled from `seed`.
    ///
    /// Identical seeds produce identical tables and therefore identical
    /// fields.
    pub fn seeded(seed: u64) -> Self {
        Self {
            table: PermutationTable::seeded(seed),
        }
    }

    /// Dot product of a hashed 2D gradient with the corner offset.
    #[inline]
    fn grad2(hash: usize, x: f64, y: f64) -> f64 {
        let g = &GRAD2[hash & 7];
        g[0] * x + g[1] * y
    }

    /// Dot product of a hashed 3D gradient with the corner offset.
    #[inline]
    fn grad3(hash: usize, x: f64, y: f64, z: f64) -> f64 {
        let g = &GRAD3[hash % 12];
        g[0] * x + g[1] * y + g[2] * z
    }
}

impl Default for Perlin {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for Perlin {
    fn sample2(&self, x: f64, y: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();
        let x0 = xf as i64;
        let y0 = yf as i64;

        // Fractional offsets within the cell.
        let fx = x - xf;
        let fy = y - yf;

        let u = fade(fx);
        let v = fade(fy);

        let h00 = self.table.hash2(x0, y0);
        let h10 = self.table.hash2(x0 + 1, y0);
        let h01 = self.table.hash2(x0, y0 + 1);
        let h11 = self.table.hash2(x0 + 1, y0 + 1);

        let n00 = Self::grad2(h00, fx, fy);
        let n10 = Self::grad2(h10, fx - 1.0, fy);
        let n01 = Self::grad2(h01, fx, fy - 1.0);
        let n11 = Self::grad2(h11, fx - 1.0, fy - 1.0);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        lerp(nx0, nx1, v)
    }

    fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();
        let zf = z.floor();

        let xi = ((xf as i64) & 255) as usize;
        let yi = ((yf as i64) & 255) as usize;
        let zi = ((zf as i64) & 255) as usize;

        let fx = x - xf;
        let fy = y - yf;
        let fz = z - zf;

        let u = fade(fx);
        let v = fade(fy);
        let w = fade(fz);

        // Incremental corner hashing through the doubled table.
        let t = &self.table;
        let a = t.at(xi) + yi;
        let aa = t.at(a) + zi;
        let ab = t.at(a + 1) + zi;
        let b = t.at(xi + 1) + yi;
        let ba = t.at(b) + zi;
        let bb = t.at(b + 1) + zi;

        let g000 = Self::grad3(t.at(aa), fx, fy, fz);
        let g100 = Self::grad3(t.at(ba), fx - 1.0, fy, fz);
        let g010 = Self::grad3(t.at(ab), fx, fy - 1.0, fz);
        let g110 = Self::grad3(t.at(bb), fx - 1.0, fy - 1.0, fz);
        let g001 = Self::grad3(t.at(aa + 1), fx, fy, fz - 1.0);
        let g101 = Self::grad3(t.at(ba + 1), fx - 1.0, fy, fz - 1.0);
        let g011 = Self::grad3(t.at(ab + 1), fx, fy - 1.0, fz - 1.0);
        let g111 = Self::grad3(t.at(bb + 1), fx - 1.0, fy - 1.0, fz - 1.0);

        let x00 = lerp(g000, g100, u);
        let x10 = lerp(g010, g110, u);
        let x01 = lerp(g001, g101, u);
        let x11 = lerp(g011, g111, u);

        let y0 = lerp(x00, x10, v);
        let y1 = lerp(x01, x11, v);

        lerp(y0, y1, w)
    }
}
