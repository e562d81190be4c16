//! Logging utilities with colored tag prefixes.
//!
//! Every console line the importer prints has the shape `[TAG] message`.
//! The tag is colored by kind, so `[OK]` stands out from `[ERR]` at a glance.
//!
//! # Example
//!
//! ```ignore
//! log!("ok"; "Imported: {} -> {}", key, name);
//! debug!("pick"; "{} candidates in {}", count, dir.display());
//! ```

use owo_colors::{OwoColorize, Stream::Stdout};
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored tag prefix
///
/// The tag is upper-cased on output, so `log!("ok"; ..)` prints `[OK] ..`.
#[macro_export]
macro_rules! log {
    ($tag:expr; $($arg:tt)*) => {{
        $crate::logger::log($tag, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($tag:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($tag, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored tag prefix
#[inline]
pub fn log(tag: &str, message: &str) {
    let prefix = colorize_prefix(tag);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Format the bracketed tag without color.
#[inline]
fn plain_prefix(tag: &str) -> String {
    format!("[{}]", tag.to_ascii_uppercase())
}

/// Apply color to a tag prefix based on outcome kind
///
/// Honors `--color` through the owo-colors override.
#[inline]
fn colorize_prefix(tag: &str) -> String {
    let prefix = plain_prefix(tag);
    let colored = match tag.to_ascii_lowercase().as_str() {
        "ok" | "done" => prefix.if_supports_color(Stdout, |p| p.bright_green()).to_string(),
        "skip" => prefix.if_supports_color(Stdout, |p| p.bright_blue()).to_string(),
        "warn" | "warning" | "hint" => prefix
            .if_supports_color(Stdout, |p| p.bright_yellow())
            .to_string(),
        "err" | "error" => prefix.if_supports_color(Stdout, |p| p.bright_red()).to_string(),
        _ => prefix.if_supports_color(Stdout, |p| p.bright_cyan()).to_string(),
    };
    colored.if_supports_color(Stdout, |p| p.bold()).to_string()
}

// ============================================================================
// Tests
// ============================================================================
