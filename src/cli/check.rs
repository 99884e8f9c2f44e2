//! `docpub check`: report what a publish would do, without changing anything.

use crate::{
    config::PublishConfig,
    log,
    publish::{Inventory, pages, show_changes},
    utils::{
        git::{GitCli, Vcs},
        path::plural_count,
    },
};
use anyhow::Result;

/// Summary of a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub present: usize,
    pub missing: usize,
    pub changes: usize,
}

/// Inventory, working-tree status and hosting hints. Never mutates the repository.
pub fn check_docs(config: &PublishConfig) -> Result<CheckReport> {
    let git = GitCli::new(config.get_root())?;
    check_with(config, &git)
}

fn check_with<V: Vcs>(config: &PublishConfig, vcs: &V) -> Result<CheckReport> {
    let publish = &config.publish;

    let inventory = Inventory::scan(config.get_root(), &publish.files);
    if inventory.is_complete() {
        log!("check"; "all {} present", plural_count(inventory.present.len(), "file"));
    } else {
        inventory.report();
        log!("check"; "{} present, {} missing",
            plural_count(inventory.present.len(), "file"), inventory.missing.len());
    }

    let changes = vcs.status(&[publish.docs_dir.as_path()])?;
    if changes.is_empty() {
        log!("check"; "no changes in {}", publish.docs_dir.display());
    } else {
        show_changes(&changes, &publish.docs_dir.display().to_string());
    }

    let target = publish.branches.first().map_or("main", String::as_str);
    let remote_url = vcs.remote_url(&publish.remote)?;
    if remote_url.is_none() {
        log!("warning"; "remote `{}` is not configured", publish.remote);
    }
    pages::print_instructions(&config.pages, remote_url.as_deref(), target, &publish.docs_dir);

    Ok(CheckReport {
        present: inventory.present.len(),
        missing: inventory.missing.len(),
        changes: changes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::utils::git::{Change, CommitId};
    use anyhow::bail;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    /// Read-only view of a repository; any mutation fails the test.
    struct ReadOnlyVcs {
        changes: Vec<Change>,
    }

    impl Vcs for ReadOnlyVcs {
        fn status(&self, _paths: &[&Path]) -> Result<Vec<Change>> {
            Ok(self.changes.clone())
        }
        fn stage(&self, _files: &[&Path]) -> Result<()> {
            bail!("check must not stage")
        }
        fn commit(&self, _message: &str, _files: &[&Path]) -> Result<CommitId> {
            bail!("check must not commit")
        }
        fn push(&self, _remote: &str, _branch: &str) -> Result<()> {
            bail!("check must not push")
        }
        fn remote_url(&self, _remote: &str) -> Result<Option<String>> {
            Ok(Some("git@github.com:alice/personal-os.git".into()))
        }
    }

    #[test]
    fn test_check_reports_without_mutating() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/index.html"), "<html/>").unwrap();

        let mut config = test_parse_config(
            "[publish]\nfiles = [\"docs/index.html\", \"docs/missing.md\"]",
        );
        config.set_root(temp.path());

        let vcs = ReadOnlyVcs {
            changes: vec![Change {
                code: "??".into(),
                path: "docs/index.html".into(),
                from: None,
            }],
        };
        let report = check_with(&config, &vcs).unwrap();

        assert_eq!(
            report,
            CheckReport {
                present: 1,
                missing: 1,
                changes: 1,
            }
        );
    }

    #[test]
    fn test_check_clean_and_complete() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/index.html"), "<html/>").unwrap();

        let mut config = test_parse_config("[publish]\nfiles = [\"docs/index.html\"]");
        config.set_root(temp.path());

        let vcs = ReadOnlyVcs { changes: vec![] };
        let report = check_with(&config, &vcs).unwrap();

        assert_eq!(
            report,
            CheckReport {
                present: 1,
                missing: 0,
                changes: 0,
            }
        );
    }
}
