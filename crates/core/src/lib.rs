#![deny(unsafe_code)]
//! Core types for the morphogen procedural generation toolkit.
//!
//! Provides the `Xorshift64` PRNG (the random source every stochastic
//! component draws from), the `GenError` error type, the `Recipe`
//! reproducibility value, and JSON parameter helpers.

pub mod error;
pub mod params;
pub mod prng;
pub mod recipe;

pub use error::GenError;
pub use prng::Xorshift64;
pub use recipe::Recipe;
