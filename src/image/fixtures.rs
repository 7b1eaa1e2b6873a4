//! Test fixtures: small PNG files in each color mode.
//!
//! Modes the `image` encoder cannot produce (indexed, tRNS, low bit depth)
//! are written with the `png` crate directly.

use std::borrow::Cow;
use std::fs;
use std::io::BufWriter;
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use png::{BitDepth, ColorType, Info};

/// ICC payload used by [`write_icc_png`]. The decoder does not validate it.
pub const ICC_PROFILE: &[u8] = b"pngfix test profile";

fn write_png(path: &Path, info: Info<'_>, data: &[u8]) {
    let file = BufWriter::new(fs::File::create(path).unwrap());
    let encoder = png::Encoder::with_info(file, info).unwrap();
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    writer.finish().unwrap();
}

fn info(color_type: ColorType, bit_depth: BitDepth) -> Info<'static> {
    let mut info = Info::with_size(2, 2);
    info.color_type = color_type;
    info.bit_depth = bit_depth;
    info
}

/// 2x2 indexed PNG: red, blue / blue, red.
pub fn write_palette_png(path: &Path) {
    let mut info = info(ColorType::Indexed, BitDepth::Eight);
    info.palette = Some(Cow::Borrowed(&[255, 0, 0, 0, 0, 255][..]));
    write_png(path, info, &[0, 1, 1, 0]);
}

/// 2x2 RGB PNG: red, green / blue, red, with red as the tRNS key.
pub fn write_rgb_trns_png(path: &Path) {
    let mut info = info(ColorType::Rgb, BitDepth::Eight);
    info.trns = Some(Cow::Borrowed(&[0, 255, 0, 0, 0, 0][..]));
    write_png(
        path,
        info,
        &[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 0, 0],
    );
}

/// 2x2 two-bit grayscale PNG: 1, 3 / 3, 1, with 1 as the tRNS key.
pub fn write_gray_trns_png(path: &Path) {
    let mut info = info(ColorType::Grayscale, BitDepth::Two);
    info.trns = Some(Cow::Borrowed(&[0, 1][..]));
    write_png(path, info, &[0b0111_0000, 0b1101_0000]);
}

/// [`write_palette_png`] with [`ICC_PROFILE`] in an iCCP chunk.
pub fn write_icc_png(path: &Path) {
    let mut info = info(ColorType::Indexed, BitDepth::Eight);
    info.palette = Some(Cow::Borrowed(&[255, 0, 0, 0, 0, 255][..]));
    info.icc_profile = Some(Cow::Borrowed(ICC_PROFILE));
    write_png(path, info, &[0, 1, 1, 0]);
}

pub fn write_image(path: &Path, image: DynamicImage) {
    image.save_with_format(path, ImageFormat::Png).unwrap();
}
