#![deny(unsafe_code)]
//! CLI binary for the palette-forge generation system.
//!
//! Subcommands:
//! - `generate` — generate a palette, print as hex/css/json
//! - `presets` — print available preset names
//! - `swatch` — generate a palette, write a PNG swatch strip

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use palette_forge_core::config::{CurveStyle, LoopMode, VariationMode};
use palette_forge_core::{OkLab, PaletteConfig};
use palette_forge_export::{to_css_variables, to_json};
use palette_forge_generator::presets::Preset;
use palette_forge_generator::{anchors_from_hex, generate};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "palette-forge", about = "Perceptual palette generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every generating subcommand.
#[derive(Args)]
struct GenerateArgs {
    /// Anchor colors as hex strings (e.g. "#ff7e5f").
    #[arg(required_unless_present = "preset")]
    anchors: Vec<String>,

    /// Start from a built-in preset (sunset, ocean, pastel).
    /// Explicit anchors and flags override the preset's values.
    #[arg(short, long)]
    preset: Option<String>,

    /// Number of output colors.
    #[arg(short, long)]
    num_colors: Option<usize>,

    /// PRNG seed for the variation stage.
    #[arg(long)]
    seed: Option<u32>,

    /// Loop mode (open, closed, ping-pong).
    #[arg(long)]
    loop_mode: Option<String>,

    /// Variation mode (off, subtle, noticeable).
    #[arg(long)]
    variation: Option<String>,

    /// Curve style (linear, ease-in, ease-out, sinusoidal, stepped, custom);
    /// unrecognized names fall back to linear.
    #[arg(long)]
    curve: Option<String>,

    /// Contrast floor knob (0 to 1).
    #[arg(long)]
    contrast: Option<f64>,

    /// Lightness offset knob (-1 to 1).
    #[arg(long)]
    lightness: Option<f64>,

    /// Chroma multiplier knob (0 to 2).
    #[arg(long)]
    chroma: Option<f64>,

    /// Mid-segment vibrancy boost knob (0 to 1).
    #[arg(long)]
    vibrancy: Option<f64>,

    /// Warmth hue-shift knob (-1 to 1, color-circle mode only).
    #[arg(long)]
    warmth: Option<f64>,

    /// Curve strength multiplier.
    #[arg(long)]
    curve_strength: Option<f64>,

    /// Remaining options as a JSON object (explicit flags take precedence;
    /// ignored when --preset is given).
    #[arg(long, default_value = "{}")]
    params: String,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a palette and print it.
    Generate {
        #[command(flatten)]
        args: GenerateArgs,

        /// Output format (hex, css, json).
        #[arg(short, long, default_value = "hex")]
        format: String,

        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available presets.
    Presets,
    /// Generate a palette and write a PNG swatch strip.
    Swatch {
        #[command(flatten)]
        args: GenerateArgs,

        /// Side length of each swatch cell in pixels.
        #[arg(long, default_value_t = 32)]
        cell: u32,

        /// Output file path.
        #[arg(short, long, default_value = "swatch.png")]
        output: PathBuf,
    },
}

/// Resolves preset, JSON params, and flag overrides into a generation request.
fn build_request(args: &GenerateArgs) -> Result<(PaletteConfig, Vec<OkLab>), CliError> {
    let params: serde_json::Value = serde_json::from_str(&args.params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

    let (mut config, mut anchors) = match &args.preset {
        Some(name) => {
            let preset = Preset::from_name(name)?;
            (preset.config, preset.anchors)
        }
        None => (PaletteConfig::from_json(&params), Vec::new()),
    };

    if !args.anchors.is_empty() {
        anchors = anchors_from_hex(&args.anchors)?;
    }
    config.num_anchors = anchors.len();

    if let Some(n) = args.num_colors {
        config.num_colors = n;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(name) = &args.loop_mode {
        config.loop_mode = LoopMode::from_name(name)
            .ok_or_else(|| CliError::Input(format!("unknown loop mode: {name}")))?;
    }
    if let Some(name) = &args.variation {
        config.variation_mode = VariationMode::from_name(name)
            .ok_or_else(|| CliError::Input(format!("unknown variation mode: {name}")))?;
    }
    if let Some(name) = &args.curve {
        config.curve_style = CurveStyle::from_name(name);
    }
    if let Some(v) = args.contrast {
        config.contrast = v;
    }
    if let Some(v) = args.lightness {
        config.lightness = v;
    }
    if let Some(v) = args.chroma {
        config.chroma = v;
    }
    if let Some(v) = args.vibrancy {
        config.vibrancy = v;
    }
    if let Some(v) = args.warmth {
        config.warmth = v;
    }
    if let Some(v) = args.curve_strength {
        config.curve_strength = v;
    }

    Ok((config, anchors))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Presets => {
            if cli.json {
                let presets: Vec<serde_json::Value> = Preset::list_names()
                    .iter()
                    .map(|name| {
                        let preset = Preset::from_name(name)?;
                        Ok(serde_json::json!({
                            "name": preset.name,
                            "config": preset.config,
                        }))
                    })
                    .collect::<Result<_, CliError>>()?;
                let info = serde_json::json!({ "presets": presets });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Presets:");
                for name in Preset::list_names() {
                    println!("  {name}");
                }
            }
        }
        Command::Generate {
            args,
            format,
            output,
        } => {
            let (config, anchors) = build_request(&args)?;
            let result = generate(&config, &anchors)?;

            let content = match format.as_str() {
                "hex" => result
                    .palette
                    .iter()
                    .map(|p| p.rgb.to_hex())
                    .collect::<Vec<_>>()
                    .join("\n"),
                "css" => to_css_variables(&result.palette, "palette"),
                "json" => to_json(&config, &result)?,
                other => {
                    return Err(CliError::Input(format!("unknown format: {other}")))
                }
            };

            match &output {
                Some(path) => {
                    std::fs::write(path, format!("{content}\n"))
                        .map_err(|e| CliError::Io(e.to_string()))?;
                }
                None => println!("{content}"),
            }

            if cli.json {
                let info = serde_json::json!({
                    "num_colors": result.palette.len(),
                    "diagnostics": result.diagnostics,
                    "output": output.as_ref().map(|p| p.display().to_string()),
                });
                eprintln!("{}", serde_json::to_string_pretty(&info)?);
            } else if let Some(path) = &output {
                eprintln!(
                    "generated {} colors ({format}) -> {}",
                    result.palette.len(),
                    path.display()
                );
            }
        }
        Command::Swatch { args, cell, output } => {
            let (config, anchors) = build_request(&args)?;
            let result = generate(&config, &anchors)?;
            palette_forge_export::swatch::write_png(&result.palette, cell, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "num_colors": result.palette.len(),
                    "cell": cell,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "wrote {} swatches ({cell}px cells) -> {}",
                    result.palette.len(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
