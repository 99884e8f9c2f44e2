//! `[pages]` section configuration.
//!
//! Only used to print follow-up instructions for the hosting platform.
//!
//! ```toml
//! [pages]
//! provider = "github"
//! url = "https://github.com/user/repo"   # optional, defaults to the remote URL
//! ```

use serde::{Deserialize, Serialize};

/// Static-page hosting hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesSection {
    /// Hosting provider; `github` gets tailored instructions.
    pub provider: String,

    /// Repository URL used for the instructions instead of the remote's URL.
    pub url: Option<String>,
}

impl Default for PagesSection {
    fn default() -> Self {
        Self {
            provider: "github".to_string(),
            url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_pages_config() {
        let config = test_parse_config(
            "[pages]\nprovider = \"github\"\nurl = \"https://github.com/u/r\"",
        );
        assert_eq!(config.pages.provider, "github");
        assert_eq!(config.pages.url.as_deref(), Some("https://github.com/u/r"));
    }

    #[test]
    fn test_pages_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.pages.provider, "github");
        assert!(config.pages.url.is_none());
    }
}
