//! `[publish]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [publish]
//! docs_dir = "docs"
//! files = ["docs/index.html", "docs/README.md"]
//! message = "Update documentation"
//! remote = "origin"
//! branches = ["main", "master"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_contained;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to publish and where to push it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishSection {
    /// Directory whose working-tree status decides whether there is anything to publish.
    pub docs_dir: PathBuf,

    /// Files staged into the publish commit, relative to the project root.
    pub files: Vec<PathBuf>,

    /// Commit message.
    pub message: String,

    /// Remote to push to.
    pub remote: String,

    /// Target branches, tried in order until one push succeeds.
    pub branches: Vec<String>,
}

impl Default for PublishSection {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            files: Vec::new(),
            message: "Update documentation".to_string(),
            remote: "origin".to_string(),
            branches: vec!["main".to_string(), "master".to_string()],
        }
    }
}

impl PublishSection {
    pub const DOCS_DIR: FieldPath = FieldPath::new("publish.docs_dir");
    pub const FILES: FieldPath = FieldPath::new("publish.files");
    pub const MESSAGE: FieldPath = FieldPath::new("publish.message");
    pub const REMOTE: FieldPath = FieldPath::new("publish.remote");
    pub const BRANCHES: FieldPath = FieldPath::new("publish.branches");

    /// Validate the section. All problems are collected into `diag`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !is_contained(&self.docs_dir) {
            diag.error(
                Self::DOCS_DIR,
                format!("must be a path inside the project: {}", self.docs_dir.display()),
            );
        }

        if self.files.is_empty() {
            diag.error_with_hint(
                Self::FILES,
                "no files to publish",
                "list the documentation files, e.g. files = [\"docs/index.html\"]",
            );
        }
        for file in &self.files {
            if !is_contained(file) {
                diag.error(
                    Self::FILES,
                    format!("must be relative to the project root: {}", file.display()),
                );
            }
        }

        if self.message.trim().is_empty() {
            diag.error(Self::MESSAGE, "commit message cannot be empty");
        }

        if self.remote.trim().is_empty() {
            diag.error_with_hint(Self::REMOTE, "remote cannot be empty", "use \"origin\"");
        }

        if self.branches.is_empty() {
            diag.error(Self::BRANCHES, "at least one branch is required");
        }
        if self.branches.iter().any(|b| b.trim().is_empty()) {
            diag.error(Self::BRANCHES, "branch names cannot be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_publish_config() {
        let config = test_parse_config(
            r#"[publish]
docs_dir = "site"
files = ["site/index.html", "site/ONTOLOGY.md"]
message = "Publish docs"
remote = "upstream"
branches = ["gh-pages"]"#,
        );

        assert_eq!(config.publish.docs_dir, PathBuf::from("site"));
        assert_eq!(config.publish.files.len(), 2);
        assert_eq!(config.publish.message, "Publish docs");
        assert_eq!(config.publish.remote, "upstream");
        assert_eq!(config.publish.branches, vec!["gh-pages"]);
    }

    #[test]
    fn test_publish_config_defaults() {
        let config = test_parse_config("[publish]\nfiles = [\"docs/a.md\"]");

        assert_eq!(config.publish.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.publish.message, "Update documentation");
        assert_eq!(config.publish.remote, "origin");
        assert_eq!(config.publish.branches, vec!["main", "master"]);
    }

    #[test]
    fn test_validate_defaults_need_files() {
        let mut diag = ConfigDiagnostics::new();
        PublishSection::default().validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, PublishSection::FILES);
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let section = PublishSection {
            docs_dir: PathBuf::from("../elsewhere"),
            files: vec![PathBuf::from("/etc/passwd")],
            message: "  ".into(),
            remote: String::new(),
            branches: vec![String::new()],
        };
        let mut diag = ConfigDiagnostics::new();
        section.validate(&mut diag);
        assert_eq!(diag.len(), 5);
    }
}
