//! `docpub init`: write a default configuration file.

use crate::{config::CONFIG_FILE, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Commented default `docpub.toml`.
pub fn generate_config_template() -> String {
    format!(
        r#"# docpub configuration file (v{version})

[publish]
# Directory whose working-tree status decides whether there is anything to publish
docs_dir = "docs"
# Files staged into the publish commit (relative to this file)
files = [
    "docs/index.html",
    "docs/README.md",
]
# Commit message
message = "Update documentation"
# Remote to push to
remote = "origin"
# Target branches, tried in order until one push succeeds
branches = ["main", "master"]

[pages]
# Hosting provider; "github" prints GitHub Pages instructions
provider = "github"
# Repository URL for the instructions (defaults to the remote's URL)
# url = "https://github.com/user/repo"
"#,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Write the template to `path`. Never overwrites an existing file.
pub fn write_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("'{}' already exists, not overwriting", path.display());
    }
    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Handle `docpub init [--dry]`.
pub fn init_config(path: &Path, dry: bool) -> Result<()> {
    if dry {
        print!("{}", generate_config_template());
        return Ok(());
    }
    write_config(path)?;
    if path.file_name().is_some_and(|name| name != CONFIG_FILE) {
        log!("init"; "pass `-C {}` to other commands to use it", path.display());
    }
    Ok(())
}
