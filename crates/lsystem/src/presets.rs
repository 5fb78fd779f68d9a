//! Named preset L-systems for classic fractals and plants.
//!
//! Each preset carries its canonical turn angle, so
//! `Turtle::new(step, preset.angle())` reproduces the expected shape.

use crate::{LSystem, StochasticLSystem};
use morphogen_core::GenError;

/// All recognized preset names.
const PRESET_NAMES: &[&str] = &[
    "koch-curve",
    "koch-snowflake",
    "sierpinski-triangle",
    "dragon-curve",
    "hilbert-curve",
    "fractal-plant",
    "binary-tree",
];

/// Returns a slice of all recognized preset names.
pub fn list_presets() -> &'static [&'static str] {
    PRESET_NAMES
}

/// Looks up a preset by name.
///
/// Returns `GenError::UnknownPreset` for unrecognized names.
pub fn from_name(name: &str) -> Result<LSystem, GenError> {
    match name {
        "koch-curve" => Ok(koch_curve()),
        "koch-snowflake" => Ok(koch_snowflake()),
        "sierpinski-triangle" => Ok(sierpinski_triangle()),
        "dragon-curve" => Ok(dragon_curve()),
        "hilbert-curve" => Ok(hilbert_curve()),
        "fractal-plant" => Ok(fractal_plant()),
        "binary-tree" => Ok(binary_tree()),
        _ => Err(GenError::UnknownPreset(name.to_string())),
    }
}

/// Quadratic Koch curve.
pub fn koch_curve() -> LSystem {
    LSystem::new("F")
        .with_rule('F', "F+F-F-F+F")
        .with_angle(90.0)
}

/// Koch snowflake.
pub fn koch_snowflake() -> LSystem {
    LSystem::new("F--F--F")
        .with_rule('F', "F+F--F+F")
        .with_angle(60.0)
}

/// Sierpinski triangle (arrowhead form with two draw symbols).
pub fn sierpinski_triangle() -> LSystem {
    LSystem::new("F-G-G")
        .with_rule('F', "F-G+F+G-F")
        .with_rule('G', "GG")
        .with_angle(120.0)
}

/// Heighway dragon curve.
pub fn dragon_curve() -> LSystem {
    LSystem::new("F")
        .with_rule('F', "F+G")
        .with_rule('G', "F-G")
        .with_angle(90.0)
}

/// Hilbert space-filling curve.
pub fn hilbert_curve() -> LSystem {
    LSystem::new("A")
        .with_rule('A', "-BF+AFA+FB-")
        .with_rule('B', "+AF-BFB-FA+")
        .with_angle(90.0)
}

/// Branching fractal plant.
pub fn fractal_plant() -> LSystem {
    LSystem::new("X")
        .with_rule('X', "F+[[X]-X]-F[-FX]+X")
        .with_rule('F', "FF")
        .with_angle(25.0)
}

/// Symmetric binary tree.
pub fn binary_tree() -> LSystem {
    LSystem::new("X")
        .with_rule('X', "F[+X]F[-X]+X")
        .with_rule('F', "FF")
        .with_angle(45.0)
}

/// Stochastic tree with branch-shape variation.
///
/// Stateful (owns the seeded PRNG), so it lives outside the name registry.
pub fn stochastic_tree(seed: u64) -> StochasticLSystem {
    StochasticLSystem::new("X", seed)
        .with_rule('X', "F[+X][-X]FX", 0.5)
        .with_rule('X', "F[-X]FX", 0.3)
        .with_rule('X', "F[+X]FX", 0.2)
        .with_rule('F', "FF", 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Turtle;

    #[test]
    fn from_name_resolves_every_listed_preset() {
        for &name in list_presets() {
            assert!(from_name(name).is_ok(), "preset '{name}' failed to resolve");
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        assert!(matches!(
            from_name("menger-sponge"),
            Err(GenError::UnknownPreset(_))
        ));
    }

    #[test]
    fn koch_curve_first_generation_is_exact() {
        assert_eq!(koch_curve().iterate(1), "F+F-F-F+F");
    }

    #[test]
    fn dragon_curve_first_generations_are_exact() {
        let dragon = dragon_curve();
        assert_eq!(dragon.iterate(1), "F+G");
        assert_eq!(dragon.iterate(2), "F+G+F-G");
    }

    #[test]
    fn every_preset_survives_interpretation() {
        for &name in list_presets() {
            let system = from_name(name).unwrap();
            let symbols = system.iterate(3);
            let turtle = Turtle::new(1.0, system.angle());
            let segments = turtle.interpret(&symbols);
            assert!(
                !segments.is_empty(),
                "preset '{name}' produced no segments after 3 generations"
            );
        }
    }

    #[test]
    fn presets_grow_monotonically() {
        for &name in list_presets() {
            let system = from_name(name).unwrap();
            let a = system.iterate(1).len();
            let b = system.iterate(3).len();
            assert!(b > a, "preset '{name}' did not grow: {a} -> {b}");
        }
    }

    #[test]
    fn stochastic_tree_is_reproducible_per_seed() {
        let mut a = stochastic_tree(2024);
        let mut b = stochastic_tree(2024);
        assert_eq!(a.iterate(4), b.iterate(4));
    }
}
