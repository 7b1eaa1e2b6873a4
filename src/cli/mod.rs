//! Command-line interface module.

mod args;
pub mod fix;

pub use args::Cli;
