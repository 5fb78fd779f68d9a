#![deny(unsafe_code)]
//! L-systems (Lindenmayer systems): string rewriting from production rules.
//!
//! An [`LSystem`] is an immutable value — axiom, single-valued rule map,
//! and a turn angle for interpreters. Generation is a pure fold: symbols
//! with a rule are replaced, everything else passes through unchanged.
//! String length can grow exponentially with the branching factor; the
//! caller bounds the generation count.
//!
//! [`StochasticLSystem`] supports multiple weighted successors per symbol
//! and therefore owns a seeded PRNG (stateful, unlike the pure core).

pub mod presets;
pub mod turtle;

pub use turtle::{bounding_box, fit_to_bounds, Bounds, LineSegment, Turtle};

use morphogen_core::Xorshift64;
use std::collections::HashMap;

/// A deterministic L-system: axiom, rule map, and turn angle.
///
/// ```
/// use morphogen_lsystem::LSystem;
///
/// let koch = LSystem::new("F").with_rule('F', "F+F-F-F+F").with_angle(90.0);
/// assert_eq!(koch.iterate(1), "F+F-F-F+F");
/// ```
#[derive(Debug, Clone)]
pub struct LSystem {
    axiom: String,
    rules: HashMap<char, String>,
    angle: f64,
}

impl LSystem {
    /// Default turn angle in degrees when none is configured.
    const DEFAULT_ANGLE: f64 = 90.0;

    /// Creates an L-system with the given axiom, no rules, and a 90° angle.
    pub fn new(axiom: &str) -> Self {
        Self {
            axiom: axiom.to_string(),
            rules: HashMap::new(),
            angle: Self::DEFAULT_ANGLE,
        }
    }

    /// Adds (or replaces) the production rule for `symbol`.
    pub fn with_rule(mut self, symbol: char, replacement: &str) -> Self {
        self.rules.insert(symbol, replacement.to_string());
        self
    }

    /// Sets the canonical turn angle in degrees for turtle interpretation.
    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.angle = degrees;
        self
    }

    /// The starting string.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// The turn angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The replacement for `symbol`, if a rule exists.
    pub fn replacement(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Applies one rewrite pass: each symbol is replaced by its rule's
    /// successor, or kept unchanged when no rule exists.
    pub fn generate(&self, current: &str) -> String {
        let mut next = String::with_capacity(current.len() * 2);
        for symbol in current.chars() {
            match self.rules.get(&symbol) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(symbol),
            }
        }
        next
    }

    /// Applies `generations` rewrite passes starting from the axiom.
    pub fn iterate(&self, generations: usize) -> String {
        let mut current = self.axiom.clone();
        for _ in 0..generations {
            current = self.generate(&current);
        }
        current
    }

    /// Like [`LSystem::iterate`], but retains every intermediate string.
    /// The result holds generations 0 (the axiom) through N inclusive.
    pub fn iterate_with_history(&self, generations: usize) -> Vec<String> {
        let mut history = Vec::with_capacity(generations + 1);
        let mut current = self.axiom.clone();
        for _ in 0..generations {
            let next = self.generate(&current);
            history.push(current);
            current = next;
        }
        history.push(current);
        history
    }
}

/// An L-system with multiple weighted successors per symbol.
///
/// Selection draws from an owned [`Xorshift64`] once per rewritten symbol
/// occurrence, so two instances with the same seed and the same call
/// sequence produce identical strings. Symbols with a single candidate are
/// rewritten without consuming a draw.
#[derive(Debug, Clone)]
pub struct StochasticLSystem {
    axiom: String,
    rules: HashMap<char, Vec<(String, f64)>>,
    rng: Xorshift64,
}

impl StochasticLSystem {
    /// Creates a stochastic L-system with the given axiom and seed.
    pub fn new(axiom: &str, seed: u64) -> Self {
        Self {
            axiom: axiom.to_string(),
            rules: HashMap::new(),
            rng: Xorshift64::new(seed),
        }
    }

    /// Adds a weighted successor for `symbol`. Weights are relative, not
    /// probabilities; non-positive weights are treated as zero at
    /// selection time.
    pub fn with_rule(mut self, symbol: char, replacement: &str, weight: f64) -> Self {
        self.rules
            .entry(symbol)
            .or_default()
            .push((replacement.to_string(), weight));
        self
    }

    /// The starting string.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// Applies one rewrite pass, drawing one selection per occurrence of a
    /// multi-candidate symbol.
    pub fn generate(&mut self, current: &str) -> String {
        let mut next = String::with_capacity(current.len() * 2);
        for symbol in current.chars() {
            match self.rules.get(&symbol) {
                Some(candidates) if candidates.len() == 1 => {
                    next.push_str(&candidates[0].0);
                }
                Some(candidates) => {
                    next.push_str(pick_weighted(&mut self.rng, candidates));
                }
                None => next.push(symbol),
            }
        }
        next
    }

    /// Applies `generations` rewrite passes starting from the axiom.
    pub fn iterate(&mut self, generations: usize) -> String {
        let mut current = self.axiom.clone();
        for _ in 0..generations {
            current = self.generate(&current);
        }
        current
    }
}

/// Selects a successor by cumulative weight. Falls back to the first
/// candidate when every weight is non-positive.
fn pick_weighted<'a>(rng: &mut Xorshift64, candidates: &'a [(String, f64)]) -> &'a str {
    let total: f64 = candidates.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 {
        return &candidates[0].0;
    }
    let mut r = rng.next_f64() * total;
    for (successor, weight) in candidates {
        let weight = weight.max(0.0);
        if r < weight {
            return successor;
        }
        r -= weight;
    }
    // Floating-point slack lands on the last candidate.
    &candidates[candidates.len() - 1].0
}
