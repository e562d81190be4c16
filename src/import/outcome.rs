//! Per-entry outcomes and the run report.

use std::path::PathBuf;

use crate::config::AssetEntry;
use crate::log;
use crate::utils::plural::plural_count;

/// What happened to one mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Written to `output`, decoded size `width`x`height`.
    Imported {
        output: PathBuf,
        width: u32,
        height: u32,
    },
    /// Source folder does not exist.
    Skipped,
    /// Source folder exists but holds no recognized image.
    Warned { extensions: Vec<String> },
    /// Listing, decoding or writing failed.
    Errored { path: PathBuf, message: String },
}

impl Outcome {
    /// Console tag, printed as `[OK]`, `[SKIP]`, `[WARN]` or `[ERR]`.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Imported { .. } => "ok",
            Self::Skipped => "skip",
            Self::Warned { .. } => "warn",
            Self::Errored { .. } => "err",
        }
    }

    /// Human-readable line body for `entry`.
    pub fn message(&self, entry: &AssetEntry) -> String {
        match self {
            Self::Imported {
                output,
                width,
                height,
            } => {
                let name = output
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_else(|| output.to_string_lossy());
                format!("Imported: {} -> {} ({}x{})", entry.source_key, name, width, height)
            }
            Self::Skipped => format!("Folder not found: {}", entry.source_key),
            Self::Warned { extensions } => {
                let kinds = extensions
                    .iter()
                    .map(|e| e.to_ascii_uppercase())
                    .collect::<Vec<_>>()
                    .join("/");
                format!("No {} found in {}", kinds, entry.source_key)
            }
            Self::Errored { path, message } => {
                format!("Failed to process {}: {}", path.display(), message)
            }
        }
    }

    /// Print the status line for `entry`.
    pub fn log(&self, entry: &AssetEntry) {
        log!(self.tag(); "{}", self.message(entry));
    }
}

/// Outcomes of a whole run, in table order.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub entries: Vec<(AssetEntry, Outcome)>,
}

impl ImportReport {
    pub fn push(&mut self, entry: AssetEntry, outcome: Outcome) {
        self.entries.push((entry, outcome));
    }

    #[cfg(test)]
    pub fn outcome(&self, source_key: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|(entry, _)| entry.source_key == source_key)
            .map(|(_, outcome)| outcome)
    }

    pub fn imported(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Imported { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    pub fn warned(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Warned { .. }))
    }

    pub fn errored(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Errored { .. }))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }

    /// One-line summary printed after the run.
    pub fn summary(&self) -> String {
        format!(
            "imported {} ({} skipped, {}, {})",
            plural_count(self.imported(), "asset"),
            self.skipped(),
            plural_count(self.warned(), "warning"),
            plural_count(self.errored(), "error"),
        )
    }
}
