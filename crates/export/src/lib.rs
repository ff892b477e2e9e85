#![deny(unsafe_code)]
//! Output adapters for generated palettes.
//!
//! Three formats: CSS custom-property declarations, a self-describing JSON
//! document (configuration, palette, diagnostics), and a PNG swatch strip
//! (feature `png`, on by default).

pub mod swatch;

use palette_forge_core::{PaletteConfig, PaletteError};
use palette_forge_generator::{ColorPoint, GenerateResult};

/// Renders a palette as CSS custom-property declarations, one per color.
///
/// Variables are 1-based: `--<prefix>-1` through `--<prefix>-N`. Returns an
/// empty string for an empty palette. The caller wraps the declarations in a
/// selector block.
pub fn to_css_variables(palette: &[ColorPoint], prefix: &str) -> String {
    palette
        .iter()
        .enumerate()
        .map(|(i, point)| format!("  --{prefix}-{}: {};", i + 1, point.rgb.to_hex()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a generation result as a pretty-printed JSON document containing
/// the configuration, the palette, and the diagnostics.
pub fn to_json(
    config: &PaletteConfig,
    result: &GenerateResult,
) -> Result<String, PaletteError> {
    let doc = serde_json::json!({
        "config": config,
        "palette": result.palette,
        "diagnostics": result.diagnostics,
    });
    serde_json::to_string_pretty(&doc)
        .map_err(|e| PaletteError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_forge_core::color::{oklab_to_srgb, OkLab};
    use palette_forge_generator::generate;

    fn sample_points() -> Vec<ColorPoint> {
        [(0.3, 0.1, 0.0), (0.6, -0.05, 0.1)]
            .iter()
            .map(|&(l, a, b)| {
                let ok = OkLab { l, a, b };
                ColorPoint {
                    ok,
                    rgb: oklab_to_srgb(ok),
                }
            })
            .collect()
    }

    // -- CSS --

    #[test]
    fn css_variables_are_one_based_and_prefixed() {
        let css = to_css_variables(&sample_points(), "brand");
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  --brand-1: #"), "line: {}", lines[0]);
        assert!(lines[1].starts_with("  --brand-2: #"), "line: {}", lines[1]);
        assert!(lines.iter().all(|l| l.ends_with(';')));
    }

    #[test]
    fn css_for_empty_palette_is_empty() {
        assert_eq!(to_css_variables(&[], "brand"), "");
    }

    // -- JSON --

    #[test]
    fn json_document_has_config_palette_and_diagnostics() {
        let config = PaletteConfig {
            num_colors: 4,
            num_anchors: 1,
            ..PaletteConfig::default()
        };
        let anchor = OkLab {
            l: 0.5,
            a: 0.1,
            b: 0.0,
        };
        let result = generate(&config, &[anchor]).unwrap();
        let json = to_json(&config, &result).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["config"]["num_colors"], 4);
        assert_eq!(doc["palette"].as_array().unwrap().len(), 4);
        assert!(doc["diagnostics"]["min_delta_e"].is_number());
        // rgb entries are hex strings
        let rgb = doc["palette"][0]["rgb"].as_str().unwrap();
        assert!(rgb.starts_with('#') && rgb.len() == 7);
    }
}
