//! The publish flow.
//!
//! ```text
//! inventory ─► status(docs_dir) ─► clean? ─► done
//!                                   │
//!                                   ▼
//!          show changes ─► listed files changed? ─► no ─► done
//!                                   │
//!                                   ▼
//!                               confirm? ─► no ─► done
//!                                   │
//!                                   ▼
//!         stage listed files ─► commit listed files ─► push (branch fallback)
//! ```
//!
//! Any failing git command aborts the run. A failed push falls through to the
//! next configured branch; every failure is logged and, if all branches fail,
//! reported together.

mod inventory;
pub mod pages;

pub use inventory::Inventory;

use crate::{
    config::PublishConfig,
    core::set_mutating,
    log, logger,
    utils::{
        git::{Change, CommitId, Vcs},
        path::plural_count,
        prompt::Confirm,
    },
};
use anyhow::Result;
use std::path::PathBuf;
use thiserror::Error;

/// How a publish run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// No changes to publish; nothing was touched.
    Clean,
    /// The operator declined; nothing was touched.
    Declined,
    /// `--dry-run`: these files would have been staged.
    DryRun { files: Vec<PathBuf> },
    /// One commit was created and pushed to `branch`.
    Published {
        commit: CommitId,
        branch: String,
    },
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("none of the configured files exist, nothing to stage")]
    NothingToStage,

    #[error("push to `{remote}` failed on every branch:{}", format_attempts(.attempts))]
    PushFailed {
        remote: String,
        /// `(branch, cause)` per attempt, in order.
        attempts: Vec<(String, String)>,
    },
}

fn format_attempts(attempts: &[(String, String)]) -> String {
    attempts
        .iter()
        .map(|(branch, cause)| format!("\n  {branch}: {cause}"))
        .collect()
}

/// Runs the publish flow against a [`Vcs`], asking a [`Confirm`] before mutating anything.
pub struct Publisher<'a, V, C> {
    config: &'a PublishConfig,
    vcs: &'a V,
    confirm: C,
    dry_run: bool,
}

impl<'a, V: Vcs, C: Confirm> Publisher<'a, V, C> {
    pub fn new(config: &'a PublishConfig, vcs: &'a V, confirm: C) -> Self {
        Self {
            config,
            vcs,
            confirm,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }

    pub fn run(mut self) -> Result<PublishOutcome> {
        let publish = &self.config.publish;

        let inventory = Inventory::scan(self.config.get_root(), &publish.files);
        inventory.report();

        let changes = self.vcs.status(&[publish.docs_dir.as_path()])?;
        if changes.is_empty() {
            log!("publish"; "no changes in {}, nothing to publish", publish.docs_dir.display());
            return Ok(PublishOutcome::Clean);
        }
        show_changes(&changes, &publish.docs_dir.display().to_string());

        if inventory.present.is_empty() {
            return Err(PublishError::NothingToStage.into());
        }

        if self.vcs.status(&inventory.present_paths())?.is_empty() {
            log!("publish"; "none of the listed files changed, nothing to publish");
            return Ok(PublishOutcome::Clean);
        }

        if self.dry_run {
            log!("publish"; "dry run: would commit {} with message {:?}",
                plural_count(inventory.present.len(), "file"), publish.message);
            for file in &inventory.present {
                log!("publish"; "  {}", file.display());
            }
            log!("publish"; "dry run: would push to {} ({})",
                publish.remote, publish.branches.join(", then "));
            return Ok(PublishOutcome::DryRun {
                files: inventory.present,
            });
        }

        if !self.confirm.confirm("Publish these changes?")? {
            log!("publish"; "aborted, nothing was committed");
            return Ok(PublishOutcome::Declined);
        }

        set_mutating(true);
        let result = self.commit_and_push(&inventory);
        set_mutating(false);
        result
    }

    fn commit_and_push(&self, inventory: &Inventory) -> Result<PublishOutcome> {
        let publish = &self.config.publish;

        let files = inventory.present_paths();
        self.vcs.stage(&files)?;
        let commit = self.vcs.commit(&publish.message, &files)?;
        log!("git"; "commit {}", commit.short());

        let branch = push_with_fallback(self.vcs, &publish.remote, &publish.branches)?;
        Ok(PublishOutcome::Published { commit, branch })
    }
}

/// Print the pending changes under the docs directory.
pub fn show_changes(changes: &[Change], scope: &str) {
    log!("publish"; "{} in {}:", plural_count(changes.len(), "change"), scope);
    for change in changes {
        logger::change_line(change);
    }
}

/// Push to each branch in order until one succeeds; returns that branch.
pub fn push_with_fallback<V: Vcs>(vcs: &V, remote: &str, branches: &[String]) -> Result<String> {
    let mut attempts = Vec::new();

    for branch in branches {
        match vcs.push(remote, branch) {
            Ok(()) => {
                log!("git"; "pushed to {}/{}", remote, branch);
                return Ok(branch.clone());
            }
            Err(e) => {
                let cause = format!("{e:#}");
                log!("warning"; "push to {}/{} failed: {}",
                    remote, branch, cause.lines().next().unwrap_or_default());
                attempts.push((branch.clone(), cause));
            }
        }
    }

    Err(PublishError::PushFailed {
        remote: remote.to_string(),
        attempts,
    }
    .into())
}
