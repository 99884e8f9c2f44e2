//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output only shown with `--verbose`
//! - `change_line` for rendering one working-tree change
//!
//! # Example
//!
//! ```ignore
//! log!("git"; "pushed to {}", branch);
//! debug!("config"; "loaded {}", path.display());
//! ```

use crate::utils::git::{Change, ChangeKind};
use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
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

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "publish" => prefix.bright_blue().bold().to_string(),
        "git" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.bright_magenta().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

/// Print one working-tree change, colored by its kind.
pub fn change_line(change: &Change) {
    let code = match change.kind() {
        ChangeKind::Added | ChangeKind::Untracked => change.code.green().to_string(),
        ChangeKind::Deleted => change.code.red().to_string(),
        ChangeKind::Renamed => change.code.cyan().to_string(),
        ChangeKind::Conflicted => change.code.bright_red().bold().to_string(),
        ChangeKind::Modified | ChangeKind::Other => change.code.yellow().to_string(),
    };

    let mut stdout = stdout().lock();
    match &change.from {
        Some(from) => writeln!(stdout, "  {code} {} -> {}", from.dimmed(), change.path).ok(),
        None => writeln!(stdout, "  {code} {}", change.path).ok(),
    };
    stdout.flush().ok();
}

// ============================================================================
// Tests
// ============================================================================
