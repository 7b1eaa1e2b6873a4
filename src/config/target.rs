//! `[[targets]]` entries.

use serde::Deserialize;
use std::path::PathBuf;

/// A labelled image file to fix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    /// Short name used in failure messages (e.g. `logo`).
    pub label: String,
    /// File path, relative to the root unless absolute.
    pub path: PathBuf,
}

impl Target {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Built-in targets: the site logo and background.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("logo", "assets/images/unikl-logo.png"),
            Self::new("background", "assets/images/unikl-background.png"),
        ]
    }
}
