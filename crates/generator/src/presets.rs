//! Built-in palette presets: ready-made configurations with anchor colors.
//!
//! Each preset bundles a [`PaletteConfig`] with the anchors it was tuned for,
//! constructible by name for CLI and host use.

use crate::{anchors_from_hex, generate, GenerateResult};
use palette_forge_core::config::{CurveStyle, LoopMode, VariationMode};
use palette_forge_core::{OkLab, PaletteConfig, PaletteError};

/// All available preset names.
const PRESET_NAMES: &[&str] = &["sunset", "ocean", "pastel"];

/// A named, ready-made generation setup.
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: &'static str,
    pub config: PaletteConfig,
    pub anchors: Vec<OkLab>,
}

impl Preset {
    /// Constructs a preset by name.
    ///
    /// Returns `PaletteError::UnknownPreset` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, PaletteError> {
        match name {
            "sunset" => Ok(Self::sunset()),
            "ocean" => Ok(Self::ocean()),
            "pastel" => Ok(Self::pastel()),
            _ => Err(PaletteError::UnknownPreset(name.to_string())),
        }
    }

    /// Returns a slice of all recognized preset names.
    pub fn list_names() -> &'static [&'static str] {
        PRESET_NAMES
    }

    /// Runs the generator with this preset's configuration and anchors.
    pub fn generate(&self) -> Result<GenerateResult, PaletteError> {
        generate(&self.config, &self.anchors)
    }

    /// Warm coral-to-peach gradient with a strong mid-segment boost.
    pub fn sunset() -> Self {
        Self {
            name: "sunset",
            config: PaletteConfig {
                chroma: 1.2,
                contrast: 0.05,
                vibrancy: 0.6,
                warmth: 0.2,
                seed: 42,
                num_colors: 8,
                num_anchors: 2,
                curve_style: CurveStyle::EaseIn,
                variation_mode: VariationMode::Subtle,
                ..PaletteConfig::default()
            },
            anchors: anchors_from_hex(["#ff7e5f", "#feb47b"])
                .expect("sunset preset hex values are valid"),
        }
    }

    /// Cool cyan-to-mint sweep with a sinusoidal curve.
    pub fn ocean() -> Self {
        Self {
            name: "ocean",
            config: PaletteConfig {
                lightness: -0.1,
                chroma: 1.1,
                contrast: 0.04,
                vibrancy: 0.5,
                warmth: -0.3,
                seed: 123,
                num_colors: 12,
                num_anchors: 2,
                curve_style: CurveStyle::Sinusoidal,
                ..PaletteConfig::default()
            },
            anchors: anchors_from_hex(["#00c9ff", "#92fe9d"])
                .expect("ocean preset hex values are valid"),
        }
    }

    /// Soft three-anchor pastel ring (closed loop, muted chroma).
    pub fn pastel() -> Self {
        Self {
            name: "pastel",
            config: PaletteConfig {
                lightness: 0.1,
                chroma: 0.8,
                contrast: 0.02,
                vibrancy: 0.3,
                seed: 2024,
                num_colors: 10,
                num_anchors: 3,
                loop_mode: LoopMode::Closed,
                curve_style: CurveStyle::EaseOut,
                curve_strength: 0.8,
                variation_mode: VariationMode::Subtle,
                ..PaletteConfig::default()
            },
            anchors: anchors_from_hex(["#a8e6cf", "#dcedc1", "#ffd3b6"])
                .expect("pastel preset hex values are valid"),
        }
    }
}
