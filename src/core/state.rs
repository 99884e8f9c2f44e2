//! Global process state.
//!
//! - `MUTATING`: git is staging, committing or pushing (Ctrl+C is reported as
//!   a possibly partial publish instead of a clean abort)

use std::sync::atomic::{AtomicBool, Ordering};

/// Exit status for termination by Ctrl+C (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

static MUTATING: AtomicBool = AtomicBool::new(false);

/// Whether git is currently changing repository state.
pub fn is_mutating() -> bool {
    MUTATING.load(Ordering::SeqCst)
}

/// Mark the start or end of the stage/commit/push phase.
pub fn set_mutating(value: bool) {
    MUTATING.store(value, Ordering::SeqCst);
}

/// Setup global Ctrl+C handler.
///
/// Before anything is staged (e.g. while waiting at the confirmation prompt)
/// the process exits immediately with nothing changed.
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        if is_mutating() {
            crate::log!("warning";
                "interrupted while publishing; check `git status` and `git log`");
        } else {
            eprintln!();
            crate::log!("publish"; "interrupted, nothing was committed");
        }
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutating_flag() {
        set_mutating(true);
        assert!(is_mutating());
        set_mutating(false);
        assert!(!is_mutating());
    }
}
