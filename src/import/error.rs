//! Per-entry import errors.
//!
//! None of these stop a run: each one becomes an `[ERR]` line for its entry
//! and the importer moves on to the next one.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot list `{0}`: {1}")]
    ReadDir(PathBuf, #[source] io::Error),

    #[error("{1}")]
    Open(PathBuf, #[source] image::ImageError),

    #[error("cannot write `{0}`: {1}")]
    Write(PathBuf, #[source] image::ImageError),
}

impl ImportError {
    /// The file or folder the error is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::ReadDir(path, _) | Self::Open(path, _) | Self::Write(path, _) => path,
        }
    }
}
