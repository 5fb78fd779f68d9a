//! Conway's Game of Life on a bounded (non-toroidal) grid.
//!
//! The grid is a row-major boolean array. Each `step()` computes the whole
//! next generation from a frozen snapshot of the current one, so update
//! order can never leak into the result. Moore neighbors that fall off the
//! grid count as dead — there is no wraparound.

use crate::patterns::Pattern;
use morphogen_core::params::{param_f64_clamped, param_string};
use morphogen_core::{GenError, Xorshift64};
use serde_json::Value;

/// Default live-cell density for random initialization.
const DEFAULT_DENSITY: f64 = 0.3;

/// Conway's Game of Life (B3/S23) on a bounded grid.
#[derive(Debug, Clone)]
pub struct GameOfLife {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl GameOfLife {
    /// Creates an all-dead grid.
    ///
    /// Returns `GenError::InvalidDimensions` if either dimension is zero or
    /// `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, GenError> {
        if width == 0 || height == 0 {
            return Err(GenError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(GenError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Creates a grid where each cell is independently alive with
    /// probability `density`, drawn from a source seeded with `seed`.
    pub fn random(width: usize, height: usize, density: f64, seed: u64) -> Result<Self, GenError> {
        let mut life = Self::new(width, height)?;
        let mut rng = Xorshift64::new(seed);
        for cell in &mut life.cells {
            *cell = rng.next_bool(density);
        }
        Ok(life)
    }

    /// Creates a grid from a JSON params object.
    ///
    /// Keys (all optional): `init` ("random" default, or "empty"),
    /// `density` (default 0.3, clamped into [0, 1]).
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, GenError> {
        let init = param_string(params, "init", "random");
        match init.as_str() {
            "random" => {
                let density = param_f64_clamped(params, "density", DEFAULT_DENSITY, 0.0, 1.0);
                Self::random(width, height, density, seed)
            }
            "empty" => Self::new(width, height),
            other => Err(GenError::InvalidParam {
                name: "init".into(),
                reason: format!("unrecognized initializer '{other}'"),
            }),
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major cell data.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Whether the cell at (x, y) is alive; off-grid coordinates are dead.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            return false;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Sets the cell at (x, y); off-grid writes are silently ignored.
    pub fn set(&mut self, x: isize, y: isize, alive: bool) {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = alive;
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Copies a pattern into the grid with its top-left corner at (x, y).
    ///
    /// Both live and dead pattern cells are copied; cells falling outside
    /// the grid are clipped.
    pub fn stamp(&mut self, pattern: &Pattern, x: isize, y: isize) {
        for py in 0..pattern.height() {
            for px in 0..pattern.width() {
                self.set(x + px as isize, y + py as isize, pattern.get(px, py));
            }
        }
    }

    /// Advances one generation under B3/S23.
    ///
    /// The entire next grid is computed from a single frozen snapshot of
    /// the current grid (copy-then-mutate), so results are independent of
    /// cell visit order.
    pub fn step(&mut self) {
        let prev = self.cells.clone();
        let w = self.width;
        let h = self.height;

        for y in 0..h {
            for x in 0..w {
                let mut neighbors = 0;
                for dy in -1_isize..=1 {
                    for dx in -1_isize..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = x as isize + dx;
                        let ny = y as isize + dy;
                        if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                            continue;
                        }
                        if prev[ny as usize * w + nx as usize] {
                            neighbors += 1;
                        }
                    }
                }
                let alive = prev[y * w + x];
                self.cells[y * w + x] = matches!((alive, neighbors), (true, 2 | 3) | (false, 3));
            }
        }
    }

    /// Advances `n` generations.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect()
    }
}
