//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sprites.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `import` | `[import]`   | Source/dest roots, format, pick rules    |
//! | `assets` | `[assets]`   | Folder name -> destination file mapping  |

mod assets;
mod import;

pub use assets::{AssetEntry, AssetMap};
pub use import::{ImportSectionConfig, OutputFormat, PickOrder};
