//! Re-encode an image file in place as an optimized PNG.
//!
//! Pipeline: read → decode → classify → convert (RGBA/LA/P only) → encode → write.
//!
//! Encoding happens fully in memory before the target is touched, so a file
//! that fails to decode or encode is never modified. The ICC profile is
//! carried over, and RGB/L files keep their tRNS transparency key.

mod encode;
mod error;

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::error::{DecodingError, ImageFormatHint};
use image::{DynamicImage, ImageDecoder, ImageError, ImageFormat, ImageReader, ImageResult};

use super::header::PngHeader;
use super::mode::ColorMode;
use crate::utils::fs::write_atomic;
use encode::{Chunks, encode_png};

pub use error::NormalizeError;

/// Options for [`normalize`].
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Replace the file via temp file + rename instead of writing in place.
    pub atomic: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self { atomic: true }
    }
}

/// Result of a successful [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub before: ColorMode,
    pub after: ColorMode,
    pub bytes_before: u64,
    pub bytes_after: u64,
    /// False when the re-encoded bytes equal the file on disk.
    pub written: bool,
}

impl Normalized {
    pub const fn converted(&self) -> bool {
        self.before.is_normalizable()
    }
}

/// Normalize the image at `path` and write it back to the same path.
pub fn normalize(path: &Path, options: &NormalizeOptions) -> Result<Normalized, NormalizeError> {
    let original = fs::read(path).map_err(|err| NormalizeError::Read(path.to_path_buf(), err))?;
    let Decoded {
        image,
        mode: before,
        header,
        icc_profile,
    } = decode(&original).map_err(|err| NormalizeError::Decode(path.to_path_buf(), err))?;

    let (image, trns) = if before.is_normalizable() {
        (into_rgba8(image), None)
    } else {
        match header.as_ref().and_then(PngHeader::trns_chunk) {
            Some(trns) => (strip_alpha(image), Some(trns)),
            None => (image, None),
        }
    };
    let after = ColorMode::from_color(image.color());

    let chunks = Chunks {
        icc_profile: icc_profile.as_deref(),
        trns: trns.as_deref(),
    };
    let encoded = encode_png(&image, chunks)
        .map_err(|err| NormalizeError::Encode(path.to_path_buf(), err))?;

    let written = encoded != original;
    if written {
        let result = if options.atomic {
            write_atomic(path, &encoded)
        } else {
            fs::write(path, &encoded)
        };
        result.map_err(|err| NormalizeError::Write(path.to_path_buf(), err))?;
    }

    Ok(Normalized {
        before,
        after,
        bytes_before: original.len() as u64,
        bytes_after: encoded.len() as u64,
        written,
    })
}

/// Decode and classify the image at `path` without writing anything.
pub fn inspect(path: &Path) -> Result<ColorMode, NormalizeError> {
    let bytes = fs::read(path).map_err(|err| NormalizeError::Read(path.to_path_buf(), err))?;
    decode(&bytes)
        .map(|decoded| decoded.mode)
        .map_err(|err| NormalizeError::Decode(path.to_path_buf(), err))
}

struct Decoded {
    image: DynamicImage,
    mode: ColorMode,
    /// Set for PNG input only.
    header: Option<PngHeader>,
    icc_profile: Option<Vec<u8>>,
}

fn decode(bytes: &[u8]) -> ImageResult<Decoded> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format();

    let mut decoder = reader.into_decoder()?;
    let icc_profile = decoder.icc_profile()?;
    let image = DynamicImage::from_decoder(decoder)?;

    let header = match format {
        Some(ImageFormat::Png) => Some(PngHeader::read(bytes).map_err(|err| {
            ImageError::Decoding(DecodingError::new(
                ImageFormatHint::Exact(ImageFormat::Png),
                err,
            ))
        })?),
        _ => None,
    };
    let mode = match &header {
        Some(header) => header.mode(),
        None => ColorMode::from_color(image.color()),
    };

    Ok(Decoded {
        image,
        mode,
        header,
        icc_profile,
    })
}

fn into_rgba8(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(buf),
        other => DynamicImage::ImageRgba8(other.to_rgba8()),
    }
}

/// Drop the alpha channel the decoder synthesized from a tRNS key.
fn strip_alpha(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLumaA8(_) => DynamicImage::ImageLuma8(image.to_luma8()),
        DynamicImage::ImageLumaA16(_) => DynamicImage::ImageLuma16(image.to_luma16()),
        DynamicImage::ImageRgba8(_) => DynamicImage::ImageRgb8(image.to_rgb8()),
        DynamicImage::ImageRgba16(_) => DynamicImage::ImageRgb16(image.to_rgb16()),
        other => other,
    }
}
