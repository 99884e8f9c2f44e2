//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/project/docs/diagrams/  ← start
/// /home/user/project/docpub.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs/diagrams");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("docpub.toml"), "").unwrap();

        let found = find_config_file(Path::new("docpub.toml"), &nested).unwrap();
        assert_eq!(found, temp.path().join("docpub.toml"));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("docpub.toml"), "").unwrap();
        fs::write(nested.join("docpub.toml"), "").unwrap();

        let found = find_config_file(Path::new("docpub.toml"), &nested).unwrap();
        assert_eq!(found, nested.join("docpub.toml"));
    }

    #[test]
    fn test_find_config_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        assert!(find_config_file(&path, temp.path()).is_none());

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_find_config_directory_is_not_a_match() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/docpub-unique-name.toml")).unwrap();
        let start = temp.path().join("a");
        // A directory with the config's name is skipped.
        let found = find_config_file(Path::new("docpub-unique-name.toml"), &start);
        assert!(found.is_none_or(|p| p != start.join("docpub-unique-name.toml")));
    }
}
