//! Dry run: inspect targets without writing.

use crate::config::{FixConfig, Target};
use crate::image::{ColorMode, NormalizeError, inspect};
use crate::logger::{status_error, status_success};

/// What a fix would do to one target.
#[derive(Debug)]
pub struct CheckReport {
    pub target: Target,
    pub result: Result<ColorMode, NormalizeError>,
}

impl CheckReport {
    pub fn message(&self) -> String {
        match &self.result {
            Ok(mode) if mode.is_normalizable() => format!(
                "{} ({}) would be re-encoded as {}",
                self.target.path.display(),
                mode,
                ColorMode::TruecolorAlpha
            ),
            Ok(mode) => format!(
                "{} ({}) would be re-encoded",
                self.target.path.display(),
                mode
            ),
            Err(err) => format!("Error checking {}: {}", self.target.label, err),
        }
    }

    pub fn print(&self) {
        if self.result.is_ok() {
            status_success(&self.message());
        } else {
            status_error(&self.message());
        }
    }
}

/// Inspect every target in `config`.
pub fn check_targets(config: &FixConfig) -> Vec<CheckReport> {
    config
        .targets
        .iter()
        .map(|target| CheckReport {
            target: target.clone(),
            result: inspect(&config.root_join(&target.path)),
        })
        .collect()
}
