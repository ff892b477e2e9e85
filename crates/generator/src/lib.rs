#![deny(unsafe_code)]
//! Discrete palette generation pipeline.
//!
//! A palette is generated in stages, all operating in OKLab space: anchor
//! interpolation, curve-shaped dynamics (lightness/chroma/vibrancy/warmth),
//! optional hue rotation around the color circle, seeded micro-variation,
//! periodic macro-modulation for long palettes, and an iterative
//! contrast-enforcement repair pass. Conversion to 8-bit sRGB happens once,
//! after every adjustment stage has run.
//!
//! Generation is a pure function of its inputs: the noise generator is
//! seeded fresh inside every call, so identical configuration and anchors
//! produce bit-identical output.

pub mod presets;

use palette_forge_core::color::{
    contrast_ratio, delta_e_ok, lerp_oklab, oklab_to_srgb, srgb_to_oklab, OkLab, Srgb8,
};
use palette_forge_core::easing::ease;
use palette_forge_core::{
    LoopMode, PaletteConfig, PaletteError, VariationMode, Xorshift32,
};
use serde::{Deserialize, Serialize};

/// Upper bound on contrast-enforcement repair passes.
const MAX_CONTRAST_PASSES: usize = 5;
/// Minimum enforced adjacent distance, even when `contrast` is 0.
const CONTRAST_FLOOR: f64 = 0.01;
/// Scales the `lightness` dynamics knob into an OKLab L offset.
const LIGHTNESS_SCALE: f64 = 0.2;
/// Half-width of the vibrancy bell around mid-segment.
const VIBRANCY_WIDTH: f64 = 0.35;
/// Scales the `vibrancy` knob into a chroma boost.
const VIBRANCY_SCALE: f64 = 0.6;
/// Palettes longer than this get the periodic macro-modulation pass.
const MODULATION_THRESHOLD: usize = 20;
/// Below this chroma the contrast repair skips its chroma rescale.
const CHROMA_RESCALE_EPSILON: f64 = 1e-5;
/// Scales the `warmth` knob into a hue shift (radians).
const WARMTH_HUE_SCALE: f64 = 0.5;

/// One palette entry: the OKLab value all math ran in, plus its gamut-correct
/// 8-bit sRGB projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPoint {
    pub ok: OkLab,
    pub rgb: Srgb8,
}

/// Summary measurements over a generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Smallest adjacent-pair OKLab distance (0 for a single-color palette).
    pub min_delta_e: f64,
    /// Largest adjacent-pair OKLab distance (0 for a single-color palette).
    pub max_delta_e: f64,
    /// Adjacent pairs still below the contrast floor after enforcement.
    pub contrast_violations: usize,
    /// Minimum WCAG contrast ratio of any entry against white.
    pub wcag_min_ratio: f64,
    /// Contrast repair passes executed (1 means the first pass was clean).
    pub enforcement_passes: usize,
}

/// A generated palette with its diagnostics. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResult {
    pub palette: Vec<ColorPoint>,
    pub diagnostics: Diagnostics,
}

/// Parses a list of hex color strings into OKLab anchors.
pub fn anchors_from_hex<I, S>(hexes: I) -> Result<Vec<OkLab>, PaletteError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    hexes
        .into_iter()
        .map(|h| Srgb8::from_hex(h.as_ref()).map(srgb_to_oklab))
        .collect()
}

/// Generates a discrete palette from a configuration and anchor colors.
///
/// The anchor slice is read-only and its length must equal
/// `config.num_anchors`. Returns the full palette or an error; generation is
/// all-or-nothing, never a partial palette.
pub fn generate(
    config: &PaletteConfig,
    anchors: &[OkLab],
) -> Result<GenerateResult, PaletteError> {
    config.validate()?;
    if anchors.len() != config.num_anchors {
        return Err(PaletteError::AnchorCountMismatch {
            declared: config.num_anchors,
            supplied: anchors.len(),
        });
    }

    let mut rng = Xorshift32::new(config.seed);
    let mut palette = Vec::with_capacity(config.num_colors);
    for i in 0..config.num_colors {
        let t = progress(config, i);
        let (base, local_t) = position_on_anchors(config, anchors, t);
        let mut color = shape_color(config, base, local_t, t);
        apply_variation(config.variation_mode, &mut rng, &mut color);
        color.l = color.l.clamp(0.0, 1.0);
        palette.push(color);
    }

    if config.num_colors > MODULATION_THRESHOLD {
        apply_periodic_modulation(&mut palette);
    }

    let min_contrast = (config.contrast * 0.1).max(CONTRAST_FLOOR);
    let enforcement_passes = enforce_contrast(&mut palette, min_contrast);

    let points: Vec<ColorPoint> = palette
        .into_iter()
        .map(|ok| ColorPoint {
            ok,
            rgb: oklab_to_srgb(ok),
        })
        .collect();
    let diagnostics = compute_diagnostics(&points, min_contrast, enforcement_passes);

    Ok(GenerateResult {
        palette: points,
        diagnostics,
    })
}

/// Computes the normalized progress for output index `i`.
///
/// Closed loops divide by the full count so the endpoint wraps around to the
/// start instead of landing on it; ping-pong folds the doubled parameter at 1.
fn progress(config: &PaletteConfig, i: usize) -> f64 {
    let n = config.num_colors;
    let mut t = match config.loop_mode {
        LoopMode::Closed => i as f64 / n as f64,
        LoopMode::Open | LoopMode::PingPong => {
            if n > 1 {
                i as f64 / (n - 1) as f64
            } else {
                0.5
            }
        }
    };
    if config.loop_mode == LoopMode::PingPong {
        t *= 2.0;
        if t > 1.0 {
            t = 2.0 - t;
        }
    }
    t
}

/// Maps global progress onto the anchor sequence.
///
/// Returns the interpolated color and the segment-relative progress. A single
/// anchor passes through unchanged with the global progress standing in for
/// the segment-relative one.
fn position_on_anchors(
    config: &PaletteConfig,
    anchors: &[OkLab],
    t: f64,
) -> (OkLab, f64) {
    if anchors.len() == 1 {
        return (anchors[0], t);
    }
    let segments = if config.loop_mode == LoopMode::Closed {
        anchors.len()
    } else {
        anchors.len() - 1
    };
    let segment_t = t * segments as f64;
    let segment_idx = (segment_t.floor() as usize).min(segments - 1);
    let local_t = segment_t - segment_idx as f64;
    let start = anchors[segment_idx];
    let end = anchors[(segment_idx + 1) % anchors.len()];
    (lerp_oklab(start, end, local_t), local_t)
}

/// Linear interpolation between two scalars; `t` unclamped.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Applies curve-shaped dynamics to one interpolated color: lightness offset,
/// chroma scaling, optional single-anchor hue rotation, and the mid-segment
/// vibrancy boost.
fn shape_color(config: &PaletteConfig, base: OkLab, local_t: f64, t: f64) -> OkLab {
    let dims = config.curve_dimensions;
    let eased_light = ease(
        config.curve_style,
        local_t,
        config.bezier_light[0],
        config.bezier_light[1],
    );
    let eased_chroma = ease(
        config.curve_style,
        local_t,
        config.bezier_chroma[0],
        config.bezier_chroma[1],
    );

    let base_chroma = (base.a * base.a + base.b * base.b).sqrt();
    let mut hue = base.b.atan2(base.a);

    let lightness_offset = if dims.lightness {
        lerp(
            0.0,
            config.lightness * LIGHTNESS_SCALE,
            eased_light * config.curve_strength,
        )
    } else {
        config.lightness * LIGHTNESS_SCALE * local_t
    };
    let mut chroma = if dims.chroma {
        lerp(
            base_chroma,
            base_chroma * config.chroma,
            eased_chroma * config.curve_strength,
        )
    } else {
        lerp(base_chroma, base_chroma * config.chroma, local_t)
    };

    if config.num_anchors == 1 && config.enable_color_circle {
        let arc_rad = config.arc_length / 360.0 * std::f64::consts::TAU;
        let hue_mod = if dims.hue {
            eased_light * config.curve_strength
        } else {
            t
        };
        hue += hue_mod * arc_rad + config.warmth * WARMTH_HUE_SCALE;
    }

    let boost = 1.0
        + config.vibrancy
            * VIBRANCY_SCALE
            * (1.0 - (local_t - 0.5).abs() / VIBRANCY_WIDTH).max(0.0);
    chroma *= boost;

    OkLab {
        l: base.l + lightness_offset,
        a: hue.cos() * chroma,
        b: hue.sin() * chroma,
    }
}

/// Adds seeded noise to one color.
///
/// Draw order is fixed — L, then A, then B — so the generator advances by
/// exactly three per index while variation is active.
fn apply_variation(mode: VariationMode, rng: &mut Xorshift32, color: &mut OkLab) {
    if mode == VariationMode::Off {
        return;
    }
    let amplitude = mode.amplitude();
    color.l += (rng.next_unit() - 0.5) * amplitude * 0.5;
    color.a += (rng.next_unit() - 0.5) * amplitude;
    color.b += (rng.next_unit() - 0.5) * amplitude;
}

/// Second pass over long palettes: a slow lightness wave, a chroma pulse,
/// and a stepping hue offset keep many-color palettes from banding.
fn apply_periodic_modulation(palette: &mut [OkLab]) {
    use std::f64::consts::PI;
    for (i, color) in palette.iter_mut().enumerate() {
        let idx = i as f64;
        color.l = (color.l + (idx * PI / 10.0).sin() * 0.05).clamp(0.0, 1.0);
        let pulse = 1.0 + 0.1 * (idx * PI / 5.0).cos();
        let hue_offset = 0.05 * (i % 12) as f64;
        let chroma = (color.a * color.a + color.b * color.b).sqrt() * pulse;
        let hue = color.b.atan2(color.a) + hue_offset;
        color.a = hue.cos() * chroma;
        color.b = hue.sin() * chroma;
    }
}

/// Greedy forward repair of adjacent-pair contrast.
///
/// Each pass sweeps the palette in order; a pair below the floor gets a
/// lightness nudge on the later color, then a chroma rescale if the nudge
/// alone was not enough. Converges when a full pass makes no adjustment or
/// the pass budget runs out — a best-effort bound, not a guarantee.
/// Returns the number of passes executed.
fn enforce_contrast(palette: &mut [OkLab], min_contrast: f64) -> usize {
    let mut passes = 0;
    while passes < MAX_CONTRAST_PASSES {
        passes += 1;
        let mut adjusted = false;
        for i in 1..palette.len() {
            let d_e = delta_e_ok(palette[i - 1], palette[i]);
            if d_e >= min_contrast {
                continue;
            }
            let nudge = (min_contrast - d_e) * 0.1;
            palette[i].l = (palette[i].l + nudge).clamp(0.0, 1.0);
            adjusted = true;
            if delta_e_ok(palette[i - 1], palette[i]) < min_contrast {
                let chroma =
                    (palette[i].a * palette[i].a + palette[i].b * palette[i].b).sqrt();
                if chroma >= CHROMA_RESCALE_EPSILON {
                    let scale = 1.0 + nudge / chroma;
                    palette[i].a *= scale;
                    palette[i].b *= scale;
                }
            }
        }
        if !adjusted {
            break;
        }
    }
    passes
}

/// Measures the finished palette.
fn compute_diagnostics(
    points: &[ColorPoint],
    min_contrast: f64,
    enforcement_passes: usize,
) -> Diagnostics {
    let white = Srgb8 {
        r: 255,
        g: 255,
        b: 255,
    };
    let mut min_delta_e = f64::INFINITY;
    let mut max_delta_e: f64 = 0.0;
    let mut contrast_violations = 0;
    for pair in points.windows(2) {
        let d_e = delta_e_ok(pair[0].ok, pair[1].ok);
        min_delta_e = min_delta_e.min(d_e);
        max_delta_e = max_delta_e.max(d_e);
        if d_e + 1e-9 < min_contrast {
            contrast_violations += 1;
        }
    }
    if points.len() < 2 {
        min_delta_e = 0.0;
        max_delta_e = 0.0;
    }
    let wcag_min_ratio = points
        .iter()
        .map(|p| contrast_ratio(p.rgb, white))
        .fold(f64::INFINITY, f64::min);
    Diagnostics {
        min_delta_e,
        max_delta_e,
        contrast_violations,
        wcag_min_ratio,
        enforcement_passes,
    }
}
