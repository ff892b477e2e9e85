#![deny(unsafe_code)]
//! Core types for the palette-forge palette generation system.
//!
//! Provides the color types and conversions (`Srgb8`, `LinearRgb`, `OkLab`,
//! gamut clipping, perceptual distance), easing functions, the `Xorshift32`
//! PRNG, the `PaletteConfig` data model, and JSON parameter helpers.

pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod params;
pub mod prng;

pub use color::{LinearRgb, OkLab, Srgb8};
pub use config::{CurveDimensions, CurveStyle, LoopMode, PaletteConfig, VariationMode};
pub use error::PaletteError;
pub use prng::Xorshift32;
