//! Image processing utilities.
//!
//! # Modules
//!
//! - [`mode`]: color mode classification
//! - [`header`]: PNG header fields hidden by the decoder
//! - [`normalize`]: in-place PNG re-encoding

pub mod header;
pub mod mode;
pub mod normalize;

#[cfg(test)]
pub(crate) mod fixtures;

pub use mode::ColorMode;
pub use normalize::{NormalizeError, NormalizeOptions, Normalized, inspect, normalize};
