//! Path helpers.

use std::path::{Component, Path, PathBuf};

/// Normalize a path to absolute form.
///
/// Canonicalizes when the path exists, otherwise joins it onto the cwd.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` and resolve relative paths against `root`.
pub fn expand_path(path: &Path, root: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    if path.is_relative() {
        root.join(path)
    } else {
        path
    }
}

/// Whether a relative path stays inside its base (no `..` escaping, no root).
pub fn is_contained(path: &Path) -> bool {
    let mut depth = 0usize;
    for component in path.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    true
}

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_contained() {
        assert!(is_contained(Path::new("docs/index.html")));
        assert!(is_contained(Path::new("./docs/../README.md")));
        assert!(!is_contained(Path::new("../secrets.txt")));
        assert!(!is_contained(Path::new("docs/../../x")));
        assert!(!is_contained(Path::new("/etc/passwd")));
    }

    #[test]
    fn test_expand_path_relative_and_absolute() {
        let root = Path::new("/project");
        assert_eq!(expand_path(Path::new("docs"), root), PathBuf::from("/project/docs"));
        assert_eq!(expand_path(Path::new("/abs/docs"), root), PathBuf::from("/abs/docs"));
    }

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "file"), "0 files");
        assert_eq!(plural_count(1, "file"), "1 file");
        assert_eq!(plural_count(3, "change"), "3 changes");
    }
}
