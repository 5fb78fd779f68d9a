//! Error types shared across the morphogen crates.
//!
//! Generation itself never fails: invalid inputs are clamped or ignored
//! (see the individual crates). `GenError` covers the two places where an
//! error is worth surfacing — construction with impossible dimensions and
//! lookup of an unknown name in a registry.

use thiserror::Error;

/// Errors produced by constructors and name-based registries.
#[derive(Debug, Error)]
pub enum GenError {
    /// Width or height was zero, or their product overflowed `usize`.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A noise generator name was not recognized by the registry.
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),

    /// An L-system preset name was not recognized.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A Game of Life pattern name was not recognized.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// A parameter value could not be used as given.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// A recipe failed validation before being handed to a registry.
    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = format!("{}", GenError::InvalidDimensions);
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn unknown_generator_includes_name() {
        let msg = format!("{}", GenError::UnknownGenerator("voronoi".into()));
        assert!(msg.contains("voronoi"), "missing name in: {msg}");
    }

    #[test]
    fn unknown_preset_includes_name() {
        let msg = format!("{}", GenError::UnknownPreset("peano".into()));
        assert!(msg.contains("peano"), "missing name in: {msg}");
    }

    #[test]
    fn unknown_pattern_includes_name() {
        let msg = format!("{}", GenError::UnknownPattern("pulsar".into()));
        assert!(msg.contains("pulsar"), "missing name in: {msg}");
    }

    #[test]
    fn invalid_param_includes_name_and_reason() {
        let err = GenError::InvalidParam {
            name: "base".into(),
            reason: "fractal cannot nest".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("base"), "missing param name in: {msg}");
        assert!(msg.contains("nest"), "missing reason in: {msg}");
    }

    #[test]
    fn gen_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GenError>();
    }

    #[test]
    fn gen_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<GenError>();
    }
}
