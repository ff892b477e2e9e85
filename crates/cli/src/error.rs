//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: generation error (bad counts, unknown preset, bad anchor color)
//! - 11: I/O error (file write, swatch rendering)
//! - 12: input error (bad JSON params, unknown loop/variation mode)
//! - 13: serialization error

use palette_forge_core::PaletteError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A generation-level error (invalid counts, unknown preset, bad color).
    Generation(PaletteError),
    /// An I/O error (file write, swatch rendering).
    Io(String),
    /// A user input error (bad JSON params, unknown mode name).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Generation(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Generation(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<PaletteError> for CliError {
    fn from(e: PaletteError) -> Self {
        match e {
            PaletteError::Io(msg) => CliError::Io(msg),
            PaletteError::Serialization(msg) => CliError::Serialization(msg),
            other => CliError::Generation(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_exit_code_is_10() {
        let err = CliError::Generation(PaletteError::InvalidColorCount);
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad params".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_palette_error_io_routes_to_cli_io() {
        let err = CliError::from(PaletteError::Io("disk full".into()));
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn from_palette_error_serialization_routes_to_serialization() {
        let err = CliError::from(PaletteError::Serialization("oops".into()));
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_palette_error_other_routes_to_generation() {
        let err = CliError::from(PaletteError::UnknownPreset("lava".into()));
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("lava"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let err = CliError::from(bad_json.unwrap_err());
        assert_eq!(err.exit_code(), 13);
    }
}
