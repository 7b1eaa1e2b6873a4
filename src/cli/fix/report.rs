use crate::config::Target;
use crate::debug;
use crate::image::{NormalizeError, Normalized};
use crate::logger::{status_error, status_success};

/// Outcome of fixing one target.
#[derive(Debug)]
pub struct TargetReport {
    pub target: Target,
    pub result: Result<Normalized, NormalizeError>,
}

impl TargetReport {
    pub fn new(target: Target, result: Result<Normalized, NormalizeError>) -> Self {
        Self { target, result }
    }

    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Status text without the marker symbol.
    ///
    /// Success names the configured path, failure names the label.
    pub fn message(&self) -> String {
        match &self.result {
            Ok(_) => format!("Fixed {}", self.target.path.display()),
            Err(err) => format!("Error fixing {}: {}", self.target.label, err),
        }
    }

    /// Print the status line, plus mode/size details in verbose mode.
    pub fn print(&self) {
        match &self.result {
            Ok(normalized) => {
                status_success(&self.message());
                debug!(
                    "fix";
                    "{}: {} {} -> {}, {} -> {} bytes{}",
                    self.target.label,
                    if normalized.converted() { "converted" } else { "kept" },
                    normalized.before,
                    normalized.after,
                    normalized.bytes_before,
                    normalized.bytes_after,
                    if normalized.written { "" } else { " (unchanged)" }
                );
            }
            Err(err) => {
                status_error(&self.message());
                debug!("fix"; "{}: {}", self.target.label, err.path().display());
            }
        }
    }
}

/// Print every report in order.
pub fn print_reports(reports: &[TargetReport]) {
    for report in reports {
        report.print();
    }
}
