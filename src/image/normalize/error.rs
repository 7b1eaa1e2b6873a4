//! Normalize error types.

use std::path::{Path, PathBuf};

use image::ImageError;
use thiserror::Error;

/// Everything that can go wrong while normalizing one file.
///
/// The source error is part of the message since reports print only the
/// top-level display.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("cannot read `{0}`: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("cannot decode `{0}`: {1}")]
    Decode(PathBuf, #[source] ImageError),

    #[error("cannot encode `{0}`: {1}")]
    Encode(PathBuf, #[source] ImageError),

    #[error("cannot write `{0}`: {1}")]
    Write(PathBuf, #[source] std::io::Error),
}

impl NormalizeError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read(path, _)
            | Self::Decode(path, _)
            | Self::Encode(path, _)
            | Self::Write(path, _) => path,
        }
    }
}
