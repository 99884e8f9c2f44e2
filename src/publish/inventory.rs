//! Expected-file inventory.

use crate::log;
use std::path::{Path, PathBuf};

/// Expected files split by whether they exist on disk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    /// Files found, in configured order.
    pub present: Vec<PathBuf>,
    /// Files not found, in configured order.
    pub missing: Vec<PathBuf>,
}

impl Inventory {
    /// Check each of `files` (relative to `root`) for existence.
    pub fn scan(root: &Path, files: &[PathBuf]) -> Self {
        let mut inventory = Self::default();
        for file in files {
            if root.join(file).is_file() {
                inventory.present.push(file.clone());
            } else {
                inventory.missing.push(file.clone());
            }
        }
        inventory
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Warn once per missing file. Never fails.
    pub fn report(&self) {
        for file in &self.missing {
            log!("warning"; "expected file missing: {}", file.display());
        }
    }

    /// Present files as path slices, ready for staging.
    pub fn present_paths(&self) -> Vec<&Path> {
        self.present.iter().map(PathBuf::as_path).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_splits_present_and_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/index.html"), "<svg/>").unwrap();
        fs::write(temp.path().join("docs/README.md"), "# Docs").unwrap();

        let files = vec![
            PathBuf::from("docs/index.html"),
            PathBuf::from("docs/GOVERNANCE.md"),
            PathBuf::from("docs/README.md"),
        ];
        let inventory = Inventory::scan(temp.path(), &files);

        assert_eq!(
            inventory.present,
            vec![PathBuf::from("docs/index.html"), PathBuf::from("docs/README.md")]
        );
        assert_eq!(inventory.missing, vec![PathBuf::from("docs/GOVERNANCE.md")]);
        assert!(!inventory.is_complete());
    }

    #[test]
    fn test_directory_is_not_a_present_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();

        let inventory = Inventory::scan(temp.path(), &[PathBuf::from("docs")]);
        assert!(inventory.present.is_empty());
        assert_eq!(inventory.missing.len(), 1);
    }

    #[test]
    fn test_empty_inventory_is_complete() {
        let temp = TempDir::new().unwrap();
        let inventory = Inventory::scan(temp.path(), &[]);
        assert!(inventory.is_complete());
        assert!(inventory.present_paths().is_empty());
    }
}
