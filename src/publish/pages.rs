//! Follow-up instructions for enabling static-page hosting.
//!
//! Hosting is configured out-of-band in the provider's web console; this
//! module only tells the operator where to click.

use crate::{config::PagesSection, log};
use std::path::{Component, Path};

/// `owner/repo` of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    /// Web console page where Pages is enabled.
    pub fn settings_url(&self) -> String {
        format!("https://github.com/{}/{}/settings/pages", self.owner, self.repo)
    }

    /// Public address the site is served from once enabled.
    pub fn site_url(&self) -> String {
        let user_site = format!("{}.github.io", self.owner);
        if self.repo.eq_ignore_ascii_case(&user_site) {
            format!("https://{}/", user_site.to_lowercase())
        } else {
            format!("https://{}.github.io/{}/", self.owner.to_lowercase(), self.repo)
        }
    }
}

/// Parse a GitHub remote URL in HTTPS, `ssh://` or scp-like (`git@host:owner/repo`) form.
pub fn parse_github_url(remote: &str) -> Option<RepoSlug> {
    let remote = remote.trim();

    let path = match url::Url::parse(remote) {
        Ok(parsed) if parsed.host_str()?.eq_ignore_ascii_case("github.com") => {
            parsed.path().to_string()
        }
        Ok(_) => return None,
        Err(_) => {
            // scp-like syntax has no scheme: [user@]host:path
            let (host, path) = remote.split_once(':')?;
            let host = host.rsplit_once('@').map_or(host, |(_, h)| h);
            if !host.eq_ignore_ascii_case("github.com") {
                return None;
            }
            path.to_string()
        }
    };

    let mut segments = path.trim_matches('/').split('/');
    let owner = segments.next().filter(|s| !s.is_empty())?;
    let repo = segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if repo.is_empty() {
        return None;
    }

    Some(RepoSlug {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

/// Build the instruction lines for the operator.
///
/// `remote_url` is ignored when `[pages] url` is set.
pub fn instructions(
    pages: &PagesSection,
    remote_url: Option<&str>,
    branch: &str,
    docs_dir: &Path,
) -> Vec<String> {
    let folder = pages_folder(docs_dir);

    let repo_url = pages.url.as_deref().or(remote_url);
    let slug = pages
        .provider
        .eq_ignore_ascii_case("github")
        .then(|| repo_url.and_then(parse_github_url))
        .flatten();

    let Some(slug) = slug else {
        return vec![
            "enable static-page hosting in your provider's web console:".to_string(),
            format!("  source: branch `{branch}`, folder `{folder}`"),
        ];
    };

    let mut lines = vec![
        format!("enable GitHub Pages at {}", slug.settings_url()),
        format!("  source: Deploy from a branch → `{branch}`, folder `{folder}`"),
    ];
    if folder != "/docs" && folder != "/ (root)" {
        lines.push(format!(
            "  note: GitHub Pages serves only `/` or `/docs`, not `{folder}`"
        ));
    }
    lines.push(format!("  site: {} (after the first Pages build)", slug.site_url()));
    lines
}

/// Folder as the Pages console names it: `/docs`, or `/ (root)` for the project root.
fn pages_folder(docs_dir: &Path) -> String {
    let parts: Vec<_> = docs_dir
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        "/ (root)".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Log the instructions under the `pages` prefix.
pub fn print_instructions(
    pages: &PagesSection,
    remote_url: Option<&str>,
    branch: &str,
    docs_dir: &Path,
) {
    for line in instructions(pages, remote_url, branch, docs_dir) {
        log!("pages"; "{}", line);
    }
}
