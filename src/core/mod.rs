//! Process-wide state.

mod state;

pub use state::{set_mutating, setup_shutdown_handler};
