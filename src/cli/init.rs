//! Configuration file generation.
//!
//! Writes the built-in `sprites.toml` so the mapping table can be edited
//! without touching the binary.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::embed::DEFAULT_CONFIG;
use crate::log;

/// Default config filename
pub const CONFIG_FILE: &str = "sprites.toml";

/// Write the default config into `root`.
///
/// Refuses to overwrite an existing file.
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!("'{}' already exists, not overwriting", path.display());
    }

    fs::write(&path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
