//! Import configuration management for `sprites.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [import] and [assets]
//! ├── types/         # ConfigError, ConfigDiagnostics
//! ├── util.rs        # config file lookup
//! └── mod.rs         # ImportConfig (this file)
//! ```
//!
//! When no config file is found, the built-in table from `embed/sprites.toml`
//! is used with paths relative to the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{AssetEntry, AssetMap, ImportSectionConfig, OutputFormat, PickOrder};
pub use types::{ConfigDiagnostics, ConfigError};

use crate::{cli::Cli, debug, embed::DEFAULT_CONFIG, log, utils::path::normalize_path};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sprites.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportConfig {
    /// Path to the loaded config file, `None` for built-in defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against
    #[serde(skip)]
    pub root: PathBuf,

    /// Paths, format and pick rules
    #[serde(default)]
    pub import: ImportSectionConfig,

    /// Folder name -> destination file mapping
    #[serde(default)]
    pub assets: AssetMap,
}

impl ImportConfig {
    /// Load configuration for a CLI invocation, searching from the cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration, searching upward from `cwd` for the config file.
    ///
    /// Falls back to the built-in table only when the default file name was
    /// not found; an explicit `--config` that does not exist is an error.
    pub fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let cwd = &normalize_path(cwd);
        let mut config = match find_config_file(&cli.config, cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None if cli.config == Path::new(crate::cli::init::CONFIG_FILE) => {
                debug!("config"; "no {} found, using built-in asset table", cli.config.display());
                let mut config = Self::from_str(DEFAULT_CONFIG)?;
                config.root = cwd.to_path_buf();
                config
            }
            None => {
                let path = cwd.join(&cli.config);
                return Err(ConfigError::Io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                )
                .into());
            }
        };

        config.apply_cli(cli, cwd);
        config.finalize();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
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
            eprintln!("- {}", field);
        }
    }

    /// CLI paths are relative to the cwd, not to the config file.
    fn apply_cli(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(source) = &cli.source {
            self.import.source = cwd.join(source);
        }
        if let Some(dest) = &cli.dest {
            self.import.dest = cwd.join(dest);
        }
        if let Some(format) = cli.format {
            self.import.format = format;
        }
    }

    /// Resolve paths against the root and normalize extensions.
    fn finalize(&mut self) {
        self.root = normalize_path(&self.root);
        self.import.source = normalize_path(&self.root.join(&self.import.source));
        self.import.dest = normalize_path(&self.root.join(&self.import.dest));
        self.import.normalize_extensions();
    }

    /// Validate the whole config, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.import.validate(&mut diag);
        self.assets.validate(self.import.format, &mut diag);

        if self.assets.is_empty() {
            log!("warning"; "[assets] is empty, nothing to import");
        }

        diag.into_result()
            .map_err(|diag| ConfigError::Diagnostics(diag).into())
    }

    /// Source root (absolute after loading)
    pub fn source_root(&self) -> &Path {
        &self.import.source
    }

    /// Destination root (absolute after loading)
    pub fn dest_root(&self) -> &Path {
        &self.import.dest
    }

    /// Destination path for a mapping entry.
    pub fn dest_path(&self, entry: &AssetEntry) -> PathBuf {
        self.import
            .dest
            .join(entry.output_name(self.import.format))
    }
}

// ============================================================================
// tests
// ============================================================================
