//! Fix command - re-encode every configured target.
//!
//! Targets are processed in order and isolated from each other: a failure
//! is recorded in that target's report and the next target still runs.

mod check;
mod report;

use crate::config::FixConfig;
use crate::debug;
use crate::image::normalize;

pub use check::check_targets;
pub use report::{TargetReport, print_reports};

/// Line printed after all targets ran.
pub const DONE_MESSAGE: &str = "Done! PNG files have been re-encoded.";

/// Normalize every target in `config`, collecting one report per target.
pub fn run_fix(config: &FixConfig) -> Vec<TargetReport> {
    let options = config.normalize_options();

    config
        .targets
        .iter()
        .map(|target| {
            let path = config.root_join(&target.path);
            debug!("fix"; "{} -> {}", target.label, path.display());
            let result = normalize(&path, &options);
            TargetReport::new(target.clone(), result)
        })
        .collect()
}
