//! Representative file selection.
//!
//! A sprite folder usually holds every animation frame; only one of them is
//! imported. With [`PickOrder::Sorted`] that is the lexicographically first
//! matching file name, so `frame0.png` wins over `frame1.png` on every
//! platform. [`PickOrder::Listing`] takes whatever the filesystem yields first.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ImportSectionConfig, PickOrder};

use super::ImportError;

/// Pick the representative image in `dir`.
///
/// Only regular files whose extension is recognized count. Returns
/// `Ok(None)` when the folder has no candidate.
pub fn find_representative(
    dir: &Path,
    import: &ImportSectionConfig,
) -> Result<Option<PathBuf>, ImportError> {
    let entries = fs::read_dir(dir).map_err(|err| ImportError::ReadDir(dir.to_path_buf(), err))?;

    let mut candidates = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| is_candidate(path, import));

    let picked = match import.order {
        PickOrder::Listing => candidates.next(),
        PickOrder::Sorted => candidates.min_by(|a, b| a.file_name().cmp(&b.file_name())),
    };

    Ok(picked)
}

/// Check whether `path` is a file with a recognized image extension.
fn is_candidate(path: &Path, import: &ImportSectionConfig) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    import.accepts_extension(ext) && path.is_file()
}
