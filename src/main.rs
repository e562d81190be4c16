//! sprite-import - copy sprite folders into a flat, renamed, converted asset directory.

mod cli;
mod config;
mod embed;
mod import;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::ImportConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if cli.init {
        let cwd = std::env::current_dir()?;
        return cli::init::write_config(&cwd);
    }

    let config = ImportConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "loaded {}", path.display());
    }

    // Per-entry failures are already logged; only setup errors reach here.
    import::import_assets(&config)?;
    Ok(())
}
