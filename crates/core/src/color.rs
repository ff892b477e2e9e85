//! Color types and conversion functions for palette generation.
//!
//! Three representations: `Srgb8` (8-bit display form), `LinearRgb`
//! (gamma-decoded intermediate), and `OkLab` (the perceptually uniform space
//! all palette math runs in). Conversions are pure functions over `f64`.
//!
//! `oklab_to_srgb` is gamut-correct: colors outside the sRGB cube are
//! projected onto its boundary along the line toward the equal-lightness
//! gray point, preserving lightness and hue.

use crate::error::PaletteError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Below this chroma a color is treated as achromatic during gamut clipping,
/// sidestepping division instability at zero chroma.
const ACHROMATIC_EPSILON: f64 = 1e-7;

/// 8-bit sRGB color, the display form of every palette entry.
///
/// Derived only — never an input to palette math. Serializes as a hex string
/// `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Srgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Linear RGB (gamma-decoded), used as the gamut-testing intermediate.
///
/// Components are conceptually in [0, 1] but may transiently fall outside
/// that range before clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color: lightness `l` in roughly [0, 1], chroma axes
/// `a`/`b` unconstrained. The canonical internal representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Srgb8 {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `PaletteError::InvalidColor` if the input is not a valid
    /// 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb8, PaletteError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(PaletteError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Srgb8 { r, g, b })
    }

    /// Formats the color as a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Srgb8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb8::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Applies sRGB gamma to convert a single linear component to sRGB.
fn linear_component_to_srgb(c: f64) -> f64 {
    if c > 0.0031308 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c
    }
}

/// Converts 8-bit sRGB to linear RGB by normalizing and de-gamma-correcting.
pub fn srgb_to_linear(c: Srgb8) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(f64::from(c.r) / 255.0),
        g: srgb_component_to_linear(f64::from(c.g) / 255.0),
        b: srgb_component_to_linear(f64::from(c.b) / 255.0),
    }
}

/// Converts linear RGB to OKLab via the OKLab matrix transform.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// Converts OKLab to linear RGB via the inverse OKLab matrix transform.
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let l_ = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let m_ = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let s_ = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Converts 8-bit sRGB to OKLab. Total function, no failure mode.
pub fn srgb_to_oklab(c: Srgb8) -> OkLab {
    linear_to_oklab(srgb_to_linear(c))
}

/// Finds the largest `t` in [0, 1] such that `lerp(start, target, t)` stays
/// inside the linear RGB unit cube.
///
/// `start` must be in gamut (it is always the equal-lightness gray point
/// here). Each channel that exits the cube at the target bounds `t` by its
/// own crossing point; the tightest bound wins.
fn find_gamut_intersection(start: OkLab, target: OkLab) -> f64 {
    let lin_start = oklab_to_linear(start);
    let lin_target = oklab_to_linear(target);
    let mut t: f64 = 1.0;
    for (c1, c2) in [
        (lin_start.r, lin_target.r),
        (lin_start.g, lin_target.g),
        (lin_start.b, lin_target.b),
    ] {
        if c2 < 0.0 {
            t = t.min(c1 / (c1 - c2));
        }
        if c2 > 1.0 {
            t = t.min((1.0 - c1) / (c2 - c1));
        }
    }
    t
}

/// Encodes one linear component to an 8-bit value, clamping after gamma.
fn encode_component(c: f64) -> u8 {
    (linear_component_to_srgb(c).clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Converts OKLab to 8-bit sRGB with gamut clipping.
///
/// In-gamut colors convert directly. Out-of-gamut colors are projected onto
/// the cube boundary: near-zero chroma falls back to the clamped gray point;
/// otherwise the chroma axes are scaled by the intersection of the segment
/// from `(l, 0, 0)` to the color with the unit cube.
pub fn oklab_to_srgb(c: OkLab) -> Srgb8 {
    let mut lin = oklab_to_linear(c);
    let in_gamut = (0.0..=1.0).contains(&lin.r)
        && (0.0..=1.0).contains(&lin.g)
        && (0.0..=1.0).contains(&lin.b);
    if !in_gamut {
        let chroma = (c.a * c.a + c.b * c.b).sqrt();
        if chroma < ACHROMATIC_EPSILON {
            let gray = OkLab {
                l: c.l.clamp(0.0, 1.0),
                a: 0.0,
                b: 0.0,
            };
            lin = oklab_to_linear(gray);
        } else {
            let desaturated = OkLab {
                l: c.l,
                a: 0.0,
                b: 0.0,
            };
            let t = find_gamut_intersection(desaturated, c);
            lin = oklab_to_linear(OkLab {
                l: c.l,
                a: c.a * t,
                b: c.b * t,
            });
        }
    }
    Srgb8 {
        r: encode_component(lin.r),
        g: encode_component(lin.g),
        b: encode_component(lin.b),
    }
}

/// Euclidean distance in OKLab space.
///
/// A cheap proxy for perceptual difference; adequate for adjacent-color
/// contrast checks, not a full Delta-E 2000.
pub fn delta_e_ok(c1: OkLab, c2: OkLab) -> f64 {
    let dl = c1.l - c2.l;
    let da = c1.a - c2.a;
    let db = c1.b - c2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Componentwise linear interpolation between two OKLab colors.
///
/// `t` is not clamped here; callers constrain it.
pub fn lerp_oklab(c1: OkLab, c2: OkLab, t: f64) -> OkLab {
    OkLab {
        l: c1.l * (1.0 - t) + c2.l * t,
        a: c1.a * (1.0 - t) + c2.a * t,
        b: c1.b * (1.0 - t) + c2.b * t,
    }
}

/// WCAG 2.x relative luminance of an 8-bit sRGB color.
fn relative_luminance(c: Srgb8) -> f64 {
    let channel = |v: u8| {
        let c = f64::from(v) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * channel(c.r) + 0.7152 * channel(c.g) + 0.0722 * channel(c.b)
}

/// WCAG 2.x contrast ratio between two colors, in [1, 21].
///
/// Order-independent: the lighter color's luminance goes in the numerator.
pub fn contrast_ratio(c1: Srgb8, c2: Srgb8) -> f64 {
    let l1 = relative_luminance(c1);
    let l2 = relative_luminance(c2);
    if l1 > l2 {
        (l1 + 0.05) / (l2 + 0.05)
    } else {
        (l2 + 0.05) / (l1 + 0.05)
    }
}
