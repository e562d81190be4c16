//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Copy sprite folders into a flat asset directory, renamed and converted
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sprites.toml, searched upward from cwd)
    #[arg(short = 'C', long, default_value = "sprites.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Source root holding one folder per sprite (overrides `import.source`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Flat destination directory (overrides `import.dest`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dest: Option<PathBuf>,

    /// Output image format (overrides `import.format`)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the default sprites.toml into the current directory and exit
    #[arg(long)]
    pub init: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
