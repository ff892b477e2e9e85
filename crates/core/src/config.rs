//! Palette generation configuration: [`PaletteConfig`] and its enumerations.
//!
//! A config is caller-owned and read-only for the duration of one generation
//! call. It serializes to JSON for presets and exports, and can also be built
//! from a loosely-typed JSON object via [`PaletteConfig::from_json`], where
//! missing or ill-typed keys fall back to defaults.

use crate::error::PaletteError;
use crate::params::{
    param_bool, param_f64, param_pair, param_string, param_u32, param_usize,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// How the normalized progress parameter wraps over the output sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoopMode {
    /// Progress runs 0 → 1 across the palette; first and last colors sit on
    /// the first and last anchors.
    Open,
    /// Progress runs 0 → 1 exclusive of the endpoint, and the last segment
    /// wraps back to the first anchor.
    Closed,
    /// Progress runs 0 → 1 → 0, folding at the midpoint.
    PingPong,
}

impl LoopMode {
    /// Parses a loop mode name ("open", "closed", "ping-pong").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "open" => Some(LoopMode::Open),
            "closed" => Some(LoopMode::Closed),
            "ping-pong" => Some(LoopMode::PingPong),
            _ => None,
        }
    }

    /// The canonical name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            LoopMode::Open => "open",
            LoopMode::Closed => "closed",
            LoopMode::PingPong => "ping-pong",
        }
    }
}

/// Amplitude class for the seeded micro-variation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariationMode {
    /// No noise; the generator is never consulted.
    Off,
    /// Noise amplitude 0.01.
    Subtle,
    /// Noise amplitude 0.03.
    Noticeable,
}

impl VariationMode {
    /// Parses a variation mode name ("off", "subtle", "noticeable").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "off" => Some(VariationMode::Off),
            "subtle" => Some(VariationMode::Subtle),
            "noticeable" => Some(VariationMode::Noticeable),
            _ => None,
        }
    }

    /// The canonical name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            VariationMode::Off => "off",
            VariationMode::Subtle => "subtle",
            VariationMode::Noticeable => "noticeable",
        }
    }

    /// Noise amplitude for the chroma axes; the lightness channel uses half.
    pub fn amplitude(self) -> f64 {
        match self {
            VariationMode::Off => 0.0,
            VariationMode::Subtle => 0.01,
            VariationMode::Noticeable => 0.03,
        }
    }
}

/// Named easing curve applied during the curve-shaping stage.
///
/// Unrecognized names deserialize to `Linear` rather than failing — an
/// unknown style falls back to the identity curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveStyle {
    Linear,
    EaseIn,
    EaseOut,
    Sinusoidal,
    Stepped,
    /// Cubic Bézier with caller-supplied control points.
    Custom,
}

impl CurveStyle {
    /// Parses a curve style name; anything unrecognized is `Linear`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ease-in" => CurveStyle::EaseIn,
            "ease-out" => CurveStyle::EaseOut,
            "sinusoidal" => CurveStyle::Sinusoidal,
            "stepped" => CurveStyle::Stepped,
            "custom" => CurveStyle::Custom,
            _ => CurveStyle::Linear,
        }
    }

    /// The canonical name of this style.
    pub fn name(self) -> &'static str {
        match self {
            CurveStyle::Linear => "linear",
            CurveStyle::EaseIn => "ease-in",
            CurveStyle::EaseOut => "ease-out",
            CurveStyle::Sinusoidal => "sinusoidal",
            CurveStyle::Stepped => "stepped",
            CurveStyle::Custom => "custom",
        }
    }
}

impl Serialize for CurveStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for CurveStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(CurveStyle::from_name(&s))
    }
}

/// Which color channels the eased curve applies to.
///
/// Channels not selected use the raw (linear) progress instead of the eased
/// one. The name `"all"` is a convenience that selects all three; it ORs
/// with any individually-named channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveDimensions {
    pub lightness: bool,
    pub chroma: bool,
    pub hue: bool,
}

impl CurveDimensions {
    /// All three channels selected.
    pub fn all() -> Self {
        Self {
            lightness: true,
            chroma: true,
            hue: true,
        }
    }

    /// No channel selected; every stage uses raw progress.
    pub fn none() -> Self {
        Self {
            lightness: false,
            chroma: false,
            hue: false,
        }
    }

    /// Builds a dimension set from channel names.
    ///
    /// Recognized names: "lightness", "chroma", "hue", "all". Unrecognized
    /// names are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dims = Self::none();
        for name in names {
            match name.as_ref() {
                "lightness" => dims.lightness = true,
                "chroma" => dims.chroma = true,
                "hue" => dims.hue = true,
                "all" => dims = Self::all(),
                _ => {}
            }
        }
        dims
    }

    /// The selected channel names, or `["all"]` when every channel is set.
    pub fn names(self) -> Vec<&'static str> {
        if self == Self::all() {
            return vec!["all"];
        }
        let mut names = Vec::new();
        if self.lightness {
            names.push("lightness");
        }
        if self.chroma {
            names.push("chroma");
        }
        if self.hue {
            names.push("hue");
        }
        names
    }
}

impl Default for CurveDimensions {
    fn default() -> Self {
        Self::all()
    }
}

impl Serialize for CurveDimensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.names().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CurveDimensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(CurveDimensions::from_names(&names))
    }
}

/// The full set of recognized palette generation options.
///
/// Field-by-field:
/// - `lightness` (−1..1), `chroma` (0..2), `contrast` (0..1), `vibrancy`
///   (0..1), `warmth` (−1..1): dynamics multipliers/offsets, each consumed
///   by a distinct pipeline stage.
/// - `seed`: seeds the deterministic noise generator; 0 is remapped to 1.
/// - `num_colors`, `num_anchors`: output length and anchor count, both ≥ 1.
/// - `loop_mode`, `variation_mode`: progress wrapping and noise amplitude.
/// - `enable_color_circle` + `arc_length` (degrees): hue rotation, only
///   meaningful with a single anchor.
/// - `curve_style` + `bezier_light`/`bezier_chroma` + `curve_dimensions` +
///   `curve_strength`: the curve-shaping stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub lightness: f64,
    pub chroma: f64,
    pub contrast: f64,
    pub vibrancy: f64,
    pub warmth: f64,
    pub seed: u32,
    pub num_colors: usize,
    pub num_anchors: usize,
    pub loop_mode: LoopMode,
    pub variation_mode: VariationMode,
    pub enable_color_circle: bool,
    pub arc_length: f64,
    pub curve_style: CurveStyle,
    pub bezier_light: [f64; 2],
    pub bezier_chroma: [f64; 2],
    pub curve_dimensions: CurveDimensions,
    pub curve_strength: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            lightness: 0.0,
            chroma: 1.0,
            contrast: 0.0,
            vibrancy: 0.0,
            warmth: 0.0,
            seed: 42,
            num_colors: 8,
            num_anchors: 1,
            loop_mode: LoopMode::Open,
            variation_mode: VariationMode::Off,
            enable_color_circle: false,
            arc_length: 360.0,
            curve_style: CurveStyle::Linear,
            bezier_light: [0.5, 0.5],
            bezier_chroma: [0.5, 0.5],
            curve_dimensions: CurveDimensions::all(),
            curve_strength: 1.0,
        }
    }
}

impl PaletteConfig {
    /// Builds a config from a loosely-typed JSON object.
    ///
    /// Missing or ill-typed keys fall back to the [`Default`] values;
    /// unrecognized `curve_style` names map to linear.
    pub fn from_json(params: &Value) -> Self {
        let d = Self::default();
        Self {
            lightness: param_f64(params, "lightness", d.lightness),
            chroma: param_f64(params, "chroma", d.chroma),
            contrast: param_f64(params, "contrast", d.contrast),
            vibrancy: param_f64(params, "vibrancy", d.vibrancy),
            warmth: param_f64(params, "warmth", d.warmth),
            seed: param_u32(params, "seed", d.seed),
            num_colors: param_usize(params, "num_colors", d.num_colors),
            num_anchors: param_usize(params, "num_anchors", d.num_anchors),
            loop_mode: LoopMode::from_name(&param_string(params, "loop_mode", ""))
                .unwrap_or(d.loop_mode),
            variation_mode: VariationMode::from_name(&param_string(
                params,
                "variation_mode",
                "",
            ))
            .unwrap_or(d.variation_mode),
            enable_color_circle: param_bool(
                params,
                "enable_color_circle",
                d.enable_color_circle,
            ),
            arc_length: param_f64(params, "arc_length", d.arc_length),
            curve_style: match params.get("curve_style").and_then(Value::as_str) {
                Some(name) => CurveStyle::from_name(name),
                None => d.curve_style,
            },
            bezier_light: param_pair(params, "bezier_light", d.bezier_light),
            bezier_chroma: param_pair(params, "bezier_chroma", d.bezier_chroma),
            curve_dimensions: params
                .get("curve_dimensions")
                .and_then(Value::as_array)
                .map(|arr| {
                    CurveDimensions::from_names(
                        arr.iter().filter_map(Value::as_str),
                    )
                })
                .unwrap_or(d.curve_dimensions),
            curve_strength: param_f64(params, "curve_strength", d.curve_strength),
        }
    }

    /// Validates the count fields.
    ///
    /// Generation is all-or-nothing: a zero `num_colors` or `num_anchors`
    /// yields an error, never a partial palette.
    pub fn validate(&self) -> Result<(), PaletteError> {
        if self.num_colors == 0 {
            return Err(PaletteError::InvalidColorCount);
        }
        if self.num_anchors == 0 {
            return Err(PaletteError::InvalidAnchorCount);
        }
        Ok(())
    }
}
