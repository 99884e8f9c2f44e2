//! Git operations used by the publish flow.
//!
//! The [`Vcs`] trait is the seam between publishing and git. [`GitCli`]
//! drives the `git` binary; repository discovery goes through `gix`.

mod cli;
mod repo;
mod status;

pub use cli::GitCli;
pub use repo::discover;
pub use status::{Change, ChangeKind, parse_porcelain};

use anyhow::Result;
use std::{fmt, path::Path};

/// Abbreviated or full object id of a created commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitId(pub String);

impl CommitId {
    /// First seven characters, as `git log --oneline` shows them.
    pub fn short(&self) -> &str {
        let end = self.0.len().min(7);
        &self.0[..end]
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Version-control operations needed to publish documentation.
pub trait Vcs {
    /// Working-tree status limited to `paths` (relative to the working directory).
    fn status(&self, paths: &[&Path]) -> Result<Vec<Change>>;

    /// Stage exactly these paths.
    fn stage(&self, files: &[&Path]) -> Result<()>;

    /// Create one commit recording only `files`; anything else in the index stays staged.
    fn commit(&self, message: &str, files: &[&Path]) -> Result<CommitId>;

    /// Push `HEAD` to `branch` on `remote`.
    fn push(&self, remote: &str, branch: &str) -> Result<()>;

    /// Configured fetch URL of `remote`, if any.
    fn remote_url(&self, remote: &str) -> Result<Option<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_id_short() {
        let id = CommitId("0123456789abcdef".into());
        assert_eq!(id.short(), "0123456");
        assert_eq!(CommitId("abc".into()).short(), "abc");
    }
}
