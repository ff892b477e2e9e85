//! PNG swatch-strip rendering of a palette.
//!
//! The pixel buffer builder is always available; the PNG writer is gated
//! behind the `png` feature (default on) so embedders can take the buffer
//! without pulling in the `image` crate.

#[cfg(feature = "png")]
use palette_forge_core::PaletteError;
use palette_forge_generator::ColorPoint;
#[cfg(feature = "png")]
use std::path::Path;

/// Builds an RGBA8 pixel buffer for a horizontal swatch strip.
///
/// One `cell × cell` block per color, left to right, alpha always 255.
/// The buffer length is `palette.len() * cell * cell * 4`.
pub fn swatch_rgba(palette: &[ColorPoint], cell: u32) -> Vec<u8> {
    let cell = cell as usize;
    let mut buf = Vec::with_capacity(palette.len() * cell * cell * 4);
    for _row in 0..cell {
        for point in palette {
            for _col in 0..cell {
                buf.extend_from_slice(&[point.rgb.r, point.rgb.g, point.rgb.b, 255]);
            }
        }
    }
    buf
}

/// Writes a palette as a PNG swatch strip.
///
/// Returns `PaletteError::InvalidColorCount` for an empty palette and
/// `PaletteError::Io` for a zero cell size, dimension overflow, or write
/// failure.
#[cfg(feature = "png")]
pub fn write_png(
    palette: &[ColorPoint],
    cell: u32,
    path: &Path,
) -> Result<(), PaletteError> {
    if palette.is_empty() {
        return Err(PaletteError::InvalidColorCount);
    }
    if cell == 0 {
        return Err(PaletteError::Io("swatch cell size must be non-zero".into()));
    }
    let width = u32::try_from(palette.len() as u64 * u64::from(cell))
        .map_err(|_| PaletteError::Io("swatch strip too wide".into()))?;
    let rgba = swatch_rgba(palette, cell);
    let img = image::RgbaImage::from_raw(width, cell, rgba)
        .ok_or_else(|| PaletteError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| PaletteError::Io(e.to_string()))
}
