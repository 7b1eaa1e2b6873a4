//! PNG header fields the image decoder hides.
//!
//! `image` always expands palettes, low bit depths and tRNS, so the stored
//! color type and the transparency key are read here with `png` directly.

use std::io::Cursor;

use png::{BitDepth, ColorType, Decoder, DecodingError};

use super::mode::ColorMode;

/// Color type, bit depth and tRNS chunk of a PNG file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngHeader {
    pub color_type: ColorType,
    pub bit_depth: BitDepth,
    pub trns: Option<Vec<u8>>,
}

impl PngHeader {
    /// Read the chunks up to the first IDAT. Pixel data is not decoded.
    pub fn read(bytes: &[u8]) -> Result<Self, DecodingError> {
        let reader = Decoder::new(Cursor::new(bytes)).read_info()?;
        let info = reader.info();
        Ok(Self {
            color_type: info.color_type,
            bit_depth: info.bit_depth,
            trns: info.trns.as_deref().map(<[u8]>::to_vec),
        })
    }

    pub const fn mode(&self) -> ColorMode {
        ColorMode::from_png(self.color_type)
    }

    /// Raw tRNS chunk for the pixels the image decoder hands out.
    ///
    /// `png` keeps one byte per sample below 16 bits, and the decoder scales
    /// grayscale below 8 bits up to 8 bits, so the key is widened back to
    /// 16-bit samples at that scale. `None` for palette and alpha modes.
    pub fn trns_chunk(&self) -> Option<Vec<u8>> {
        if !matches!(self.color_type, ColorType::Grayscale | ColorType::Rgb) {
            return None;
        }
        let trns = self.trns.as_ref()?;
        let depth = self.bit_depth as u8;
        if depth == 16 {
            return Some(trns.clone());
        }

        let scale = (255 / ((1u16 << depth) - 1)) as u8;
        Some(
            trns.iter()
                .flat_map(|&sample| [0, sample.saturating_mul(scale)])
                .collect(),
        )
    }
}
