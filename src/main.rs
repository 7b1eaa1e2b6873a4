//! pngfix - re-encode the site's PNG assets in place.
//!
//! Each target is decoded, converted to RGBA when it is RGBA/LA/P, and
//! written back as a maximally compressed PNG.

mod cli;
mod config;
mod image;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, fix};
use config::FixConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = FixConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "using {}", path.display());
    }

    if cli.dry_run {
        for report in fix::check_targets(&config) {
            report.print();
        }
        return Ok(());
    }

    // Failed targets are reported, not fatal.
    let reports = fix::run_fix(&config);
    fix::print_reports(&reports);
    debug!(
        "fix";
        "{}/{} targets fixed",
        reports.iter().filter(|r| r.is_ok()).count(),
        reports.len()
    );

    logger::blank();
    logger::plain(fix::DONE_MESSAGE);
    Ok(())
}
