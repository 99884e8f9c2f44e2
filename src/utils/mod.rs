//! Shared utilities: process execution, git, paths, prompting.

pub mod exec;
pub mod git;
pub mod path;
pub mod prompt;
