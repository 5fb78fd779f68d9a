//! 1D elementary cellular automaton (Wolfram rules 0–255).
//!
//! The rule number's bit `k` gives the next state for the 3-bit
//! neighborhood pattern `(left << 2) | (center << 1) | right`; the 8-entry
//! lookup table is derived once at construction. Cells beyond either end
//! of the row are dead — there is no wraparound.

use morphogen_core::params::{param_f64_clamped, param_string, param_u64};
use morphogen_core::{GenError, Xorshift64};
use serde_json::Value;

/// Default rule for `from_json` when none is given (rule 30, chaotic).
const DEFAULT_RULE: u64 = 30;
/// Default live probability for random initialization.
const DEFAULT_PROBABILITY: f64 = 0.5;

/// Well-known elementary rules.
pub mod rules {
    /// Rule 30 — chaotic; historically used as a randomness source.
    pub const RULE_30: u32 = 30;
    /// Rule 90 — XOR of the two neighbors; draws a Sierpinski triangle.
    pub const RULE_90: u32 = 90;
    /// Rule 110 — Turing complete.
    pub const RULE_110: u32 = 110;
    /// Rule 184 — traffic-flow model.
    pub const RULE_184: u32 = 184;
}

/// 1D elementary cellular automaton over a boolean row.
#[derive(Debug, Clone)]
pub struct ElementaryCA {
    cells: Vec<bool>,
    rule: u8,
    table: [bool; 8],
}

impl ElementaryCA {
    /// Creates an all-dead row of the given width.
    ///
    /// Rule numbers above 255 are clamped to 255. Returns
    /// `GenError::InvalidDimensions` for a zero-width row.
    pub fn new(width: usize, rule: u32) -> Result<Self, GenError> {
        if width == 0 {
            return Err(GenError::InvalidDimensions);
        }
        let rule = rule.min(255) as u8;
        Ok(Self {
            cells: vec![false; width],
            rule,
            table: rule_table(rule),
        })
    }

    /// Creates a row with only the center cell alive — the classic
    /// starting condition for triangle-shaped rule plots.
    pub fn single_center(width: usize, rule: u32) -> Result<Self, GenError> {
        let mut ca = Self::new(width, rule)?;
        let center = ca.cells.len() / 2;
        ca.cells[center] = true;
        Ok(ca)
    }

    /// Creates a row where each cell is independently alive with
    /// `probability`, drawn from a source seeded with `seed`.
    pub fn random(width: usize, rule: u32, probability: f64, seed: u64) -> Result<Self, GenError> {
        let mut ca = Self::new(width, rule)?;
        let mut rng = Xorshift64::new(seed);
        for cell in &mut ca.cells {
            *cell = rng.next_bool(probability);
        }
        Ok(ca)
    }

    /// Creates an automaton from a JSON params object.
    ///
    /// Keys (all optional): `rule` (default 30, clamped to [0, 255]),
    /// `init` ("center" default, "random", or "empty"), `probability`
    /// (default 0.5, clamped into [0, 1], used by "random").
    pub fn from_json(width: usize, seed: u64, params: &Value) -> Result<Self, GenError> {
        let rule = param_u64(params, "rule", DEFAULT_RULE).min(255) as u32;
        let init = param_string(params, "init", "center");
        match init.as_str() {
            "center" => Self::single_center(width, rule),
            "random" => {
                let probability =
                    param_f64_clamped(params, "probability", DEFAULT_PROBABILITY, 0.0, 1.0);
                Self::random(width, rule, probability, seed)
            }
            "empty" => Self::new(width, rule),
            other => Err(GenError::InvalidParam {
                name: "init".into(),
                reason: format!("unrecognized initializer '{other}'"),
            }),
        }
    }

    /// Row width in cells.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// The effective (clamped) rule number.
    pub fn rule(&self) -> u8 {
        self.rule
    }

    /// Read-only access to the row.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// The cell at `x`, or dead if `x` is out of range.
    pub fn get(&self, x: usize) -> bool {
        self.cells.get(x).copied().unwrap_or(false)
    }

    /// Sets the cell at `x`; out-of-range writes are silently ignored.
    pub fn set(&mut self, x: usize, alive: bool) {
        if let Some(cell) = self.cells.get_mut(x) {
            *cell = alive;
        }
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Advances one generation, computing the whole next row from the
    /// frozen current row. Out-of-range neighbors are dead.
    pub fn step(&mut self) {
        let width = self.cells.len();
        let mut next = vec![false; width];
        for (i, slot) in next.iter_mut().enumerate() {
            let left = i > 0 && self.cells[i - 1];
            let center = self.cells[i];
            let right = i + 1 < width && self.cells[i + 1];
            let pattern = ((left as usize) << 2) | ((center as usize) << 1) | (right as usize);
            *slot = self.table[pattern];
        }
        self.cells = next;
    }

    /// Advances `n` generations.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Returns generation 0 (the current state) through generation
    /// `generations` inclusive as row snapshots.
    ///
    /// Operates on a copy; the automaton itself is not mutated.
    pub fn generate_history(&self, generations: usize) -> Vec<Vec<bool>> {
        let mut scratch = self.clone();
        let mut history = Vec::with_capacity(generations + 1);
        history.push(scratch.cells.clone());
        for _ in 0..generations {
            scratch.step();
            history.push(scratch.cells.clone());
        }
        history
    }
}

/// Derives the 8-entry lookup table from a rule number: bit `k` of the
/// rule gives the output for neighborhood pattern `k`.
fn rule_table(rule: u8) -> [bool; 8] {
    std::array::from_fn(|k| (rule >> k) & 1 == 1)
}
