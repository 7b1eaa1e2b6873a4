//! Configuration for `pngfix.toml`.
//!
//! The file is optional. Without it the two built-in targets are fixed,
//! resolved against the current directory (or `--root`).
//!
//! ```toml
//! atomic = true
//!
//! [[targets]]
//! label = "logo"
//! path = "assets/images/unikl-logo.png"
//! ```

mod error;
mod target;

pub use error::ConfigError;
pub use target::Target;

use crate::{cli::Cli, image::NormalizeOptions, log};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, looked up under the root.
pub const CONFIG_FILE: &str = "pngfix.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pngfix.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FixConfig {
    /// Directory target paths are resolved against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Config file the values came from, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Replace files via temp file + rename
    pub atomic: bool,

    /// Files to fix, in order
    pub targets: Vec<Target>,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            config_path: None,
            atomic: true,
            targets: Target::defaults(),
        }
    }
}

impl FixConfig {
    /// Load configuration from CLI arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.clone().unwrap_or_default();
        let config = Self::load_from(&root, cli.config.as_deref()).with_context(|| {
            let path = root.join(cli.config.as_deref().unwrap_or(Path::new(CONFIG_FILE)));
            format!("failed to load config `{}`", path.display())
        })?;
        Ok(config)
    }

    /// Load configuration for `root`.
    ///
    /// An explicit config path must exist; the default `pngfix.toml` is
    /// optional.
    pub fn load_from(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match explicit {
            Some(path) => root.join(path),
            None => root.join(CONFIG_FILE),
        };

        let mut config = if config_path.is_file() {
            let mut config = Self::from_path(&config_path)?;
            config.config_path = Some(config_path);
            config
        } else if explicit.is_some() {
            return Err(ConfigError::Io(
                config_path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            ));
        } else {
            Self::default()
        };

        config.root = root.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Check targets are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.targets.is_empty() {
            return Err(ConfigError::Validation("no targets configured".into()));
        }

        let mut seen = FxHashSet::default();
        for target in &self.targets {
            if target.label.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "target `{}` has an empty label",
                    target.path.display()
                )));
            }
            if target.path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "target `{}` has an empty path",
                    target.label
                )));
            }
            if !seen.insert(&target.path) {
                return Err(ConfigError::Validation(format!(
                    "duplicate target path `{}`",
                    target.path.display()
                )));
            }
        }

        Ok(())
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    pub const fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            atomic: self.atomic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<FixConfig, ConfigError> {
        FixConfig::parse_with_ignored(content).map(|(config, _)| config)
    }

    #[test]
    fn test_default_targets() {
        let config = FixConfig::default();
        assert!(config.atomic);
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].label, "logo");
        assert_eq!(
            config.targets[0].path,
            PathBuf::from("assets/images/unikl-logo.png")
        );
        assert_eq!(config.targets[1].label, "background");
        assert_eq!(
            config.targets[1].path,
            PathBuf::from("assets/images/unikl-background.png")
        );
    }

    #[test]
    fn test_root_join_with_empty_root_keeps_path() {
        let config = FixConfig::default();
        assert_eq!(
            config.root_join(&config.targets[0].path),
            PathBuf::from("assets/images/unikl-logo.png")
        );
    }

    #[test]
    fn test_parse_targets() {
        let config = parse(
            r#"
            atomic = false

            [[targets]]
            label = "icon"
            path = "static/icon.png"
            "#,
        )
        .unwrap();

        assert!(!config.atomic);
        assert_eq!(config.targets, vec![Target::new("icon", "static/icon.png")]);
        assert!(!config.normalize_options().atomic);
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = parse("").unwrap();
        assert!(config.atomic);
        assert_eq!(config.targets, Target::defaults());
    }

    #[test]
    fn test_parse_collects_unknown_fields() {
        let (_, ignored) = FixConfig::parse_with_ignored("optimise = true\n").unwrap();
        assert_eq!(ignored, vec!["optimise".to_string()]);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse("targets = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_validate_rejects_empty_targets() {
        let config = FixConfig {
            targets: Vec::new(),
            ..FixConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let config = FixConfig {
            targets: vec![Target::new("a", "x.png"), Target::new("b", "x.png")],
            ..FixConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_validate_rejects_empty_label() {
        let config = FixConfig {
            targets: vec![Target::new(" ", "x.png")],
            ..FixConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_config_file() {
        let dir = TempDir::new().unwrap();
        let config = FixConfig::load_from(dir.path(), None).unwrap();

        assert_eq!(config.root, dir.path());
        assert!(config.config_path.is_none());
        assert_eq!(config.targets, Target::defaults());
    }

    #[test]
    fn test_load_default_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[[targets]]\nlabel = \"hero\"\npath = \"hero.png\"\n",
        )
        .unwrap();

        let config = FixConfig::load_from(dir.path(), None).unwrap();
        assert_eq!(config.config_path, Some(dir.path().join(CONFIG_FILE)));
        assert_eq!(config.targets, vec![Target::new("hero", "hero.png")]);
        assert_eq!(
            config.root_join(&config.targets[0].path),
            dir.path().join("hero.png")
        );
    }

    #[test]
    fn test_load_error_names_config_file() {
        use clap::Parser;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "targets = 3\n").unwrap();
        let root = dir.path().to_string_lossy().into_owned();

        let cli = Cli::parse_from(["pngfix", "--root", root.as_str()]);
        let err = FixConfig::load(&cli).unwrap_err();

        let expected = dir.path().join(CONFIG_FILE);
        assert!(err.to_string().contains(&*expected.to_string_lossy()));
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_load_missing_explicit_config() {
        let dir = TempDir::new().unwrap();
        let err = FixConfig::load_from(dir.path(), Some(Path::new("custom.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }
}
