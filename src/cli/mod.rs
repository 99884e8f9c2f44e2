//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod publish;

pub use args::{Cli, Commands, PublishArgs};
