//! `[import]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [import]
//! source = "public/sprites copy"   # one folder per sprite
//! dest = "public/sprites/holo"     # flat output directory
//! format = "webp"                  # webp | png
//! extensions = ["png"]             # recognized input extensions
//! order = "sorted"                 # sorted | listing
//! ```

use std::path::PathBuf;

use image::ImageFormat;
use serde::Deserialize;

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportSectionConfig {
    /// Source root. Each mapped key names a folder directly below it.
    pub source: PathBuf,

    /// Destination root. Created on first run if missing.
    pub dest: PathBuf,

    /// Format every imported sprite is re-encoded to.
    pub format: OutputFormat,

    /// File extensions treated as images, compared case-insensitively.
    pub extensions: Vec<String>,

    /// How the representative file is chosen among several candidates.
    pub order: PickOrder,
}

impl Default for ImportSectionConfig {
    fn default() -> Self {
        Self {
            source: "public/sprites copy".into(),
            dest: "public/sprites/holo".into(),
            format: OutputFormat::default(),
            extensions: vec!["png".into()],
            order: PickOrder::default(),
        }
    }
}

impl ImportSectionConfig {
    /// Strip leading dots and lowercase every extension.
    pub fn normalize_extensions(&mut self) {
        for ext in &mut self.extensions {
            *ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        }
    }

    /// Check whether `ext` is one of the recognized input extensions.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extensions.is_empty() {
            diag.error_with_hint(
                "import.extensions",
                "no input extensions listed, nothing would ever be picked",
                "add at least one, e.g. extensions = [\"png\"]",
            );
        }
        for (idx, ext) in self.extensions.iter().enumerate() {
            if ext.is_empty() {
                diag.error(format!("import.extensions[{idx}]"), "empty extension");
            }
        }
        if self.source.as_os_str().is_empty() {
            diag.error("import.source", "source root is empty");
        }
        if self.dest.as_os_str().is_empty() {
            diag.error("import.dest", "destination root is empty");
        }
        if !self.source.as_os_str().is_empty() && self.source == self.dest {
            diag.error("import.dest", "destination root is the source root");
        }
    }
}

// ============================================================================
// OutputFormat
// ============================================================================

/// Encoded format of imported sprites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless WebP
    #[default]
    #[serde(alias = "WebP", alias = "WEBP")]
    Webp,
    /// PNG
    #[serde(alias = "PNG")]
    Png,
}

impl OutputFormat {
    /// File extension written on every destination name.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Webp => "webp",
            Self::Png => "png",
        }
    }

    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Webp => ImageFormat::WebP,
            Self::Png => ImageFormat::Png,
        }
    }
}

// ============================================================================
// PickOrder
// ============================================================================

/// Order in which candidate files in a sprite folder are considered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickOrder {
    /// Lexicographic by file name, stable across platforms.
    #[default]
    Sorted,
    /// Whatever order the filesystem lists entries in.
    Listing,
}
