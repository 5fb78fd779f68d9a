//! Fractal (octave) composition over any noise source.
//!
//! Accumulates `base.sample(coord · freq) · amp` per octave, multiplying
//! amplitude by `persistence` and frequency by `lacunarity` each layer, and
//! divides the sum by the total amplitude so the result stays within the
//! base generator's bound regardless of octave count.

use crate::NoiseSource;

/// How each octave's sample feeds the accumulated sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalMode {
    /// Signed sum (fractal Brownian motion). Output within the base bound.
    Fbm,
    /// Sum of absolute values. Output in [0, 1] against a [-1, 1] base.
    Turbulence,
    /// Sum of `1 - |sample|`: ridge-like maxima at the base's zero crossings.
    Ridged,
}

/// Octave composition wrapping a boxed [`NoiseSource`].
///
/// Builder-style configuration:
///
/// ```
/// use morphogen_noise::{Fractal, FractalMode, NoiseSource, Perlin};
///
/// let fractal = Fractal::new(Box::new(Perlin::seeded(42)))
///     .octaves(5)
///     .persistence(0.5)
///     .lacunarity(2.0)
///     .mode(FractalMode::Ridged);
/// let v = fractal.sample2(0.7, 1.3);
/// ```
pub struct Fractal {
    base: Box<dyn NoiseSource>,
    octaves: u32,
    frequency: f64,
    lacunarity: f64,
    persistence: f64,
    mode: FractalMode,
}

impl Fractal {
    /// Wraps `base` with default parameters: 4 octaves, frequency 1,
    /// lacunarity 2, persistence 0.5, [`FractalMode::Fbm`].
    pub fn new(base: Box<dyn NoiseSource>) -> Self {
        Self {
            base,
            octaves: 4,
            frequency: 1.0,
            lacunarity: 2.0,
            persistence: 0.5,
            mode: FractalMode::Fbm,
        }
    }

    /// Sets the octave count. 0 is treated as 1 (permissive policy).
    pub fn octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the initial sampling frequency.
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the per-octave frequency multiplier.
    pub fn lacunarity(mut self, lacunarity: f64) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Sets the per-octave amplitude multiplier.
    pub fn persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    /// Sets the accumulation mode.
    pub fn mode(mut self, mode: FractalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Accumulates octaves, sampling through `sample` at each scaled frequency.
    fn accumulate<F>(&self, mut sample: F) -> f64
    where
        F: FnMut(f64) -> f64,
    {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.frequency;
        let mut total_amplitude = 0.0;

        for _ in 0..self.octaves.max(1) {
            let s = sample(frequency);
            let contribution = match self.mode {
                FractalMode::Fbm => s,
                FractalMode::Turbulence => s.abs(),
                FractalMode::Ridged => 1.0 - s.abs(),
            };
            value += contribution * amplitude;
            total_amplitude += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        value / total_amplitude
    }
}

impl NoiseSource for Fractal {
    fn sample2(&self, x: f64, y: f64) -> f64 {
        self.accumulate(|freq| self.base.sample2(x * freq, y * freq))
    }

    fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.accumulate(|freq| self.base.sample3(x * freq, y * freq, z * freq))
    }
}
