use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

/// What publishing needs to know about the enclosing repository.
#[derive(Debug, Clone)]
pub struct RepoInfo {
    /// Root of the working tree.
    pub workdir: PathBuf,
    /// Short name of the checked-out branch (`None` when HEAD is detached or unborn).
    pub branch: Option<String>,
}

/// Discover the repository containing `dir`.
pub fn discover(dir: &Path) -> Result<RepoInfo> {
    let repo = gix::discover(dir)
        .with_context(|| format!("`{}` is not inside a git repository", dir.display()))?;

    let workdir = repo
        .workdir()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("repository at `{}` is bare", repo.path().display()))?;

    let branch = repo
        .head_name()
        .ok()
        .flatten()
        .map(|name| name.shorten().to_string());

    Ok(RepoInfo { workdir, branch })
}
