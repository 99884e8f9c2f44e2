use super::{Change, CommitId, Vcs, parse_porcelain};
use crate::{
    debug, exec,
    utils::exec::{Cmd, FilterRule},
};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Advice lines git prints that add nothing to our own logging.
static GIT_FILTER: FilterRule = FilterRule::new(&["hint:", "remote:", "To ", "branch '"]);

/// [`Vcs`] backed by the `git` executable.
pub struct GitCli {
    root: PathBuf,
    program: PathBuf,
}

impl GitCli {
    /// Use the `git` found on `PATH`, operating in `root`.
    pub fn new(root: &Path) -> Result<Self> {
        let program = which::which("git")
            .context("`git` not found in PATH; it is required for publishing")?;
        Ok(Self::with_program(root, program))
    }

    pub fn with_program(root: &Path, program: PathBuf) -> Self {
        Self {
            root: root.to_path_buf(),
            program,
        }
    }

    fn git(&self) -> Cmd {
        Cmd::new(&self.program).cwd(&self.root)
    }
}

impl Vcs for GitCli {
    fn status(&self, paths: &[&Path]) -> Result<Vec<Change>> {
        if paths.is_empty() {
            return Ok(Vec::new());
        }
        let out = self
            .git()
            .args(["status", "--porcelain", "--untracked-files=all", "--"])
            .args(paths)
            .run_text()
            .with_context(|| format!("failed to query status of `{}`", paths[0].display()))?;
        parse_porcelain(&out)
    }

    fn stage(&self, files: &[&Path]) -> Result<()> {
        if files.is_empty() {
            bail!("no files to stage");
        }
        self.git()
            .args(["add", "--"])
            .args(files)
            .filter(&GIT_FILTER)
            .run()?;
        debug!("git"; "staged {} file(s)", files.len());
        Ok(())
    }

    fn commit(&self, message: &str, files: &[&Path]) -> Result<CommitId> {
        if message.trim().is_empty() {
            bail!("Commit message cannot be empty");
        }
        if files.is_empty() {
            bail!("no files to commit");
        }
        // Pathspecs imply `--only`: other staged entries are left out of the commit.
        self.git()
            .args(["commit", "--quiet", "-m", message, "--"])
            .args(files)
            .filter(&GIT_FILTER)
            .run()?;

        let id = self.git().args(["rev-parse", "HEAD"]).run_text()?;
        Ok(CommitId(id))
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        let refspec = format!("HEAD:refs/heads/{branch}");
        exec!(pty=true; filter=&GIT_FILTER; &self.root; &self.program; "push", remote, &refspec)?;
        Ok(())
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        let result = self
            .git()
            .args(["remote", "get-url", remote])
            .run_text();
        match result {
            Ok(url) if !url.is_empty() => Ok(Some(url)),
            Ok(_) => Ok(None),
            Err(e) => {
                debug!("git"; "no url for remote `{}`: {}", remote, e);
                Ok(None)
            }
        }
    }
}
