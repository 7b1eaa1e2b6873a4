//! Color mode classification.
//!
//! The decoded buffer alone cannot tell a palette PNG apart from a truecolor
//! one (the decoder expands palettes and tRNS), so PNG input is classified
//! from the color type stored in the IHDR chunk instead.

use std::fmt;

use image::ColorType;

/// Pixel encoding of an image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// RGB + alpha (`RGBA`).
    TruecolorAlpha,
    /// Grayscale + alpha (`LA`).
    GrayAlpha,
    /// Indexed palette (`P`).
    Palette,
    /// RGB without alpha (`RGB`).
    Truecolor,
    /// Grayscale without alpha (`L`).
    Gray,
    /// Anything else the decoder produced.
    Other,
}

impl ColorMode {
    /// Classify a decoded buffer by its color type.
    pub fn from_color(color: ColorType) -> Self {
        match color {
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => Self::TruecolorAlpha,
            ColorType::La8 | ColorType::La16 => Self::GrayAlpha,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => Self::Truecolor,
            ColorType::L8 | ColorType::L16 => Self::Gray,
            _ => Self::Other,
        }
    }

    /// Classify a PNG by the color type stored in its header.
    pub const fn from_png(color: png::ColorType) -> Self {
        match color {
            png::ColorType::Rgba => Self::TruecolorAlpha,
            png::ColorType::GrayscaleAlpha => Self::GrayAlpha,
            png::ColorType::Indexed => Self::Palette,
            png::ColorType::Rgb => Self::Truecolor,
            png::ColorType::Grayscale => Self::Gray,
        }
    }

    /// Whether this mode is converted to RGBA on normalize.
    pub const fn is_normalizable(self) -> bool {
        matches!(self, Self::TruecolorAlpha | Self::GrayAlpha | Self::Palette)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TruecolorAlpha => "RGBA",
            Self::GrayAlpha => "LA",
            Self::Palette => "P",
            Self::Truecolor => "RGB",
            Self::Gray => "L",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
