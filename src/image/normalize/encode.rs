//! PNG encoding through `png` directly.
//!
//! `image`'s encoder cannot write a tRNS chunk, so the final encode goes
//! through `png` with the same settings `CompressionType::Best` maps to.

use std::borrow::Cow;

use image::error::{EncodingError, ImageFormatHint};
use image::{DynamicImage, ImageError, ImageFormat, ImageResult};
use png::{BitDepth, ColorType, Compression, Encoder, Filter, Info};

/// Ancillary chunks carried over from the source file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Chunks<'a> {
    pub icc_profile: Option<&'a [u8]>,
    pub trns: Option<&'a [u8]>,
}

/// Encode with the smallest-output settings `png` offers.
pub fn encode_png(image: &DynamicImage, chunks: Chunks<'_>) -> ImageResult<Vec<u8>> {
    let (color_type, bit_depth, data) = layout(image);

    let mut info = Info::with_size(image.width(), image.height());
    info.color_type = color_type;
    info.bit_depth = bit_depth;
    info.icc_profile = chunks.icc_profile.map(Cow::Borrowed);
    info.trns = chunks.trns.map(Cow::Borrowed);

    let mut buf = Vec::new();
    write(&mut buf, info, &data).map_err(|err| {
        ImageError::Encoding(EncodingError::new(
            ImageFormatHint::Exact(ImageFormat::Png),
            err,
        ))
    })?;
    Ok(buf)
}

fn write(buf: &mut Vec<u8>, info: Info<'_>, data: &[u8]) -> Result<(), png::EncodingError> {
    let mut encoder = Encoder::with_info(buf, info)?;
    encoder.set_compression(Compression::High);
    encoder.set_filter(Filter::Adaptive);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;
    writer.finish()
}

/// PNG color type, bit depth and big-endian sample bytes of a buffer.
fn layout(image: &DynamicImage) -> (ColorType, BitDepth, Cow<'_, [u8]>) {
    match image {
        DynamicImage::ImageLuma8(buf) => {
            (ColorType::Grayscale, BitDepth::Eight, Cow::Borrowed(buf.as_raw()))
        }
        DynamicImage::ImageLumaA8(buf) => {
            (ColorType::GrayscaleAlpha, BitDepth::Eight, Cow::Borrowed(buf.as_raw()))
        }
        DynamicImage::ImageRgb8(buf) => {
            (ColorType::Rgb, BitDepth::Eight, Cow::Borrowed(buf.as_raw()))
        }
        DynamicImage::ImageRgba8(buf) => {
            (ColorType::Rgba, BitDepth::Eight, Cow::Borrowed(buf.as_raw()))
        }
        DynamicImage::ImageLuma16(buf) => (ColorType::Grayscale, BitDepth::Sixteen, be_bytes(buf)),
        DynamicImage::ImageLumaA16(buf) => {
            (ColorType::GrayscaleAlpha, BitDepth::Sixteen, be_bytes(buf))
        }
        DynamicImage::ImageRgb16(buf) => (ColorType::Rgb, BitDepth::Sixteen, be_bytes(buf)),
        DynamicImage::ImageRgba16(buf) => (ColorType::Rgba, BitDepth::Sixteen, be_bytes(buf)),
        // float buffers (no PNG equivalent)
        other if other.color().has_alpha() => {
            (ColorType::Rgba, BitDepth::Sixteen, be_bytes(&other.to_rgba16()))
        }
        other => (ColorType::Rgb, BitDepth::Sixteen, be_bytes(&other.to_rgb16())),
    }
}

fn be_bytes(samples: &[u16]) -> Cow<'static, [u8]> {
    Cow::Owned(samples.iter().flat_map(|sample| sample.to_be_bytes()).collect())
}
