//! Error types for the palette-forge core.

use thiserror::Error;

/// Errors produced by palette generation and its surrounding plumbing.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The configuration requested zero output colors.
    #[error("invalid color count: at least 1 output color is required")]
    InvalidColorCount,

    /// The configuration declared zero anchors.
    #[error("invalid anchor count: at least 1 anchor is required")]
    InvalidAnchorCount,

    /// The anchor slice length did not match the configured anchor count.
    #[error("anchor count mismatch: config declares {declared}, {supplied} supplied")]
    AnchorCountMismatch { declared: usize, supplied: usize },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A preset name was not recognized.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// An output value could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A file could not be written.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_count_displays_readable_message() {
        let err = PaletteError::InvalidColorCount;
        let msg = format!("{err}");
        assert!(
            msg.contains("color count"),
            "expected message mentioning color count, got: {msg}"
        );
    }

    #[test]
    fn anchor_count_mismatch_includes_both_counts() {
        let err = PaletteError::AnchorCountMismatch {
            declared: 3,
            supplied: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains('3'), "missing declared count in: {msg}");
        assert!(msg.contains('2'), "missing supplied count in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = PaletteError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_preset_includes_name() {
        let err = PaletteError::UnknownPreset("lava".into());
        let msg = format!("{err}");
        assert!(msg.contains("lava"), "missing preset name in: {msg}");
    }

    #[test]
    fn io_error_includes_message() {
        let err = PaletteError::Io("disk full".into());
        let msg = format!("{err}");
        assert!(msg.contains("disk full"), "missing message in: {msg}");
    }

    #[test]
    fn palette_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaletteError>();
    }

    #[test]
    fn palette_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<PaletteError>();
    }
}
