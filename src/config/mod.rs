//! Project configuration for `docpub.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── pages      # [pages]
//! │   └── publish    # [publish]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file lookup
//! └── mod.rs         # PublishConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::{PagesSection, PublishSection};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::{
    cli::{Cli, Commands, PublishArgs},
    log,
    utils::{
        path::{expand_path, normalize_path},
        prompt::{Confirm, stdin_confirm},
    },
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "docpub.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docpub.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// What to publish
    #[serde(default)]
    pub publish: PublishSection,

    /// Hosting follow-up hints
    #[serde(default)]
    pub pages: PagesSection,
}

impl PublishConfig {
    /// Load configuration for the given command line.
    ///
    /// For commands other than `init`, searches upward from cwd for the config
    /// file; the project root is the directory containing it.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let requested = expand_path(&cli.config, &cwd);

        if cli.is_init() {
            let mut config = Self::default();
            config.config_path = requested;
            config.set_root(&cwd);
            return Ok(config);
        }

        let Some(config_path) = find_config_file(&cli.config, &cwd).or_else(|| {
            requested.exists().then_some(requested.clone())
        }) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found. Run 'docpub init' to create one.",
                cli.config.display()
            )));
        };

        let mut config = Self::from_path(&config_path, &mut stdin_confirm())?;
        config.config_path = normalize_path(&config_path);
        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(cwd);
        config.set_root(&root);
        config.apply_command_options(&cli.command);
        config.validate()?;

        crate::debug!("config"; "loaded {}", config.config_path.display());
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path, confirm: &mut impl Confirm) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !confirm.confirm("Continue?")? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Publish { args } => self.apply_publish_args(args),
            Commands::Check | Commands::Init { .. } => {}
        }
    }

    /// Apply publish arguments from CLI.
    fn apply_publish_args(&mut self, args: &PublishArgs) {
        Self::update_option(&mut self.publish.message, args.message.as_ref());
        if !args.branches.is_empty() {
            self.publish.branches = args.branches.clone();
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration. Collects all errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.publish.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PublishConfig {
    let (parsed, ignored) = PublishConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::prompt::LineConfirm;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(PublishConfig::from_str("[publish\nfiles = []").is_err());
    }

    #[test]
    fn test_from_str_wrong_type() {
        assert!(PublishConfig::from_str("[publish]\nfiles = \"docs/a.md\"").is_err());
    }

    #[test]
    fn test_set_root() {
        let mut config = PublishConfig::default();
        assert_eq!(config.get_root(), Path::new(""));
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[publish]\nfiles = [\"docs/a.md\"]\nbrnaches = [\"main\"]\n[extra]\nx = 1";
        let (config, ignored) = PublishConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.publish.files, vec![PathBuf::from("docs/a.md")]);
        assert!(ignored.iter().any(|f| f.contains("brnaches")));
        assert!(ignored.iter().any(|f| f.contains("extra")));
    }

    #[test]
    fn test_unknown_fields_prompt_declined() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[publish]\nfiles = [\"a.md\"]\ntypo = 1").unwrap();

        let mut sink = Vec::new();
        let mut no = LineConfirm::new("n\n".as_bytes(), &mut sink);
        assert!(PublishConfig::from_path(&path, &mut no).is_err());

        let mut sink = Vec::new();
        let mut yes = LineConfirm::new("y\n".as_bytes(), &mut sink);
        let config = PublishConfig::from_path(&path, &mut yes).unwrap();
        assert_eq!(config.publish.files, vec![PathBuf::from("a.md")]);
    }

    #[test]
    fn test_publish_args_override() {
        let mut config = test_parse_config("[publish]\nfiles = [\"docs/a.md\"]");
        let args = PublishArgs {
            yes: false,
            dry_run: false,
            message: Some("Custom".into()),
            branches: vec!["gh-pages".into()],
        };
        config.apply_command_options(&Commands::Publish { args });

        assert_eq!(config.publish.message, "Custom");
        assert_eq!(config.publish.branches, vec!["gh-pages"]);
    }

    #[test]
    fn test_validate_reports_errors() {
        let config = test_parse_config("[publish]\nmessage = \"\"");
        let err = config.validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("publish.files"));
        assert!(msg.contains("publish.message"));
    }
}
