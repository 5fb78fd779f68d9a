//! Reproducible specification for a generated artifact.
//!
//! A [`Recipe`] captures everything needed to recreate a generator's output:
//! generator name, grid dimensions (where relevant), parameter overrides,
//! PRNG seed, and step count.

use crate::error::GenError;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a generated artifact.
///
/// Two identical `Recipe` values fed to the same registry produce
/// bit-identical output. Dimensions apply to grid-based generators
/// (automata); noise generators ignore them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub generator: String,
    pub width: usize,
    pub height: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub steps: usize,
}

impl Recipe {
    /// Creates a new Recipe with default params (`{}`) and steps (`0`).
    pub fn new(generator: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            generator: generator.to_string(),
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            steps: 0,
        }
    }

    /// Validates that the generator name is non-empty, dimensions are
    /// non-zero, and `width * height` does not overflow.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.generator.is_empty() {
            return Err(GenError::InvalidRecipe("empty generator name".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(GenError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(GenError::InvalidDimensions)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_recipe_with_default_params_and_steps() {
        let r = Recipe::new("perlin", 128, 128, 42);
        assert_eq!(r.generator, "perlin");
        assert_eq!(r.width, 128);
        assert_eq!(r.height, 128);
        assert_eq!(r.seed, 42);
        assert_eq!(r.steps, 0);
        assert_eq!(r.params, serde_json::json!({}));
    }

    #[test]
    fn json_round_trip_with_defaults() {
        let original = Recipe::new("life", 80, 60, 8675309);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn json_round_trip_with_custom_params() {
        let mut r = Recipe::new("fractal", 256, 256, 99);
        r.params = serde_json::json!({
            "base": "simplex",
            "octaves": 6,
            "persistence": 0.45,
        });
        r.steps = 100;

        let json = serde_json::to_string_pretty(&r).unwrap();
        let restored: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(r, restored);
    }

    #[test]
    fn json_contains_expected_keys() {
        let v: serde_json::Value =
            serde_json::to_value(Recipe::new("elementary", 64, 1, 1)).unwrap();
        for key in ["generator", "width", "height", "params", "seed", "steps"] {
            assert!(v.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn validate_succeeds_for_valid_recipe() {
        assert!(Recipe::new("worley", 32, 32, 42).validate().is_ok());
    }

    #[test]
    fn validate_fails_for_empty_generator() {
        let r = Recipe::new("", 32, 32, 42);
        assert!(matches!(r.validate(), Err(GenError::InvalidRecipe(_))));
    }

    #[test]
    fn validate_fails_for_zero_dimension() {
        assert!(Recipe::new("life", 0, 32, 42).validate().is_err());
        assert!(Recipe::new("life", 32, 0, 42).validate().is_err());
    }

    #[test]
    fn validate_fails_for_overflow() {
        assert!(Recipe::new("life", usize::MAX, 2, 42).validate().is_err());
    }
}
