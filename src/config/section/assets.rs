//! `[assets]` section: the sprite mapping table.
//!
//! Each key is a folder name under the source root, each value the file name
//! written under the destination root. The value's extension is replaced by the
//! output format's, so `"char_gura.png"` lands as `char_gura.webp`.
//!
//! ```toml
//! [assets]
//! sGuraIdle = "char_gura.png"
//! sShrimp = "enemy_shrimp.png"
//! ```
//!
//! Entries keep their document order so the run log reads top to bottom like
//! the file.

use std::fmt;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use crate::config::{ConfigDiagnostics, OutputFormat};

/// One row of the mapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Folder name under the source root.
    pub source_key: String,
    /// File name under the destination root (extension gets replaced).
    pub dest_name: String,
}

impl AssetEntry {
    pub fn new(source_key: impl Into<String>, dest_name: impl Into<String>) -> Self {
        Self {
            source_key: source_key.into(),
            dest_name: dest_name.into(),
        }
    }

    /// Destination file name with the output format's extension.
    pub fn output_name(&self, format: OutputFormat) -> PathBuf {
        Path::new(&self.dest_name).with_extension(format.extension())
    }
}

/// Ordered, immutable mapping table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMap {
    entries: Vec<AssetEntry>,
}

impl AssetMap {
    pub fn new(entries: Vec<AssetEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self, format: OutputFormat, diag: &mut ConfigDiagnostics) {
        // output file name -> source key that claimed it first
        let mut seen: FxHashMap<PathBuf, &str> = FxHashMap::default();

        for entry in &self.entries {
            let field = format!("assets.{}", entry.source_key);

            if entry.source_key.trim().is_empty() {
                diag.error("assets", "empty source folder name");
                continue;
            }
            if !is_folder_name(&entry.source_key) {
                diag.error_with_hint(
                    field,
                    format!("source key '{}' is not a single folder name", entry.source_key),
                    "keys name a folder directly under the source root",
                );
                continue;
            }
            if entry.dest_name.trim().is_empty() {
                diag.error(field, "destination name is empty");
                continue;
            }
            if entry.dest_name.contains(['/', '\\']) {
                diag.error_with_hint(
                    field,
                    format!("destination '{}' contains a path separator", entry.dest_name),
                    "the destination directory is flat, use a plain file name",
                );
                continue;
            }

            let output = entry.output_name(format);
            if let Some(prev) = seen.get(&output) {
                diag.error(
                    field,
                    format!(
                        "output conflict: '{}' and '{}' both write '{}'",
                        entry.source_key,
                        prev,
                        output.display()
                    ),
                );
            } else {
                seen.insert(output, &entry.source_key);
            }
        }
    }
}

/// A key must stay inside the source root: no separators, no `.`/`..`.
fn is_folder_name(key: &str) -> bool {
    !key.contains(['/', '\\'])
        && key != "."
        && key != ".."
        && !Path::new(key).is_absolute()
}

impl<'a> IntoIterator for &'a AssetMap {
    type Item = &'a AssetEntry;
    type IntoIter = std::slice::Iter<'a, AssetEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'de> Deserialize<'de> for AssetMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AssetMapVisitor;

        impl<'de> Visitor<'de> for AssetMapVisitor {
            type Value = AssetMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of `folder = \"file name\"` pairs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<AssetMap, A::Error> {
                let mut entries: Vec<AssetEntry> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    if entries.iter().any(|e| e.source_key == key) {
                        return Err(de::Error::custom(format!("duplicate asset key `{key}`")));
                    }
                    entries.push(AssetEntry::new(key, value));
                }
                Ok(AssetMap::new(entries))
            }
        }

        deserializer.deserialize_map(AssetMapVisitor)
    }
}
