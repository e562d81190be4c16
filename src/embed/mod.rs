//! Embedded static resources.
//!
//! - [`DEFAULT_CONFIG`]: the built-in `sprites.toml`, used when no config file
//!   is found and written out by `--init`.

/// Default `sprites.toml` content.
pub const DEFAULT_CONFIG: &str = include_str!("sprites.toml");
