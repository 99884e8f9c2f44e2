//! Parsing of `git status --porcelain` (v1) output.

use anyhow::{Result, bail};

/// One changed path in the working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Two-character status code (`XY`): index state then worktree state.
    pub code: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Original path for renames and copies.
    pub from: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Renamed,
    Untracked,
    Conflicted,
    Other,
}

impl Change {
    pub fn kind(&self) -> ChangeKind {
        let code = self.code.as_str();
        if code == "??" {
            return ChangeKind::Untracked;
        }
        if code.contains('U') || code == "AA" || code == "DD" {
            return ChangeKind::Conflicted;
        }
        if code.contains('R') || code.contains('C') {
            ChangeKind::Renamed
        } else if code.contains('A') {
            ChangeKind::Added
        } else if code.contains('D') {
            ChangeKind::Deleted
        } else if code.contains('M') || code.contains('T') {
            ChangeKind::Modified
        } else {
            ChangeKind::Other
        }
    }
}

/// Parse porcelain v1 lines into changes. Ignored entries (`!!`) are skipped.
pub fn parse_porcelain(output: &str) -> Result<Vec<Change>> {
    let mut changes = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if line.len() < 4 || !line.is_char_boundary(2) || line.as_bytes()[2] != b' ' {
            bail!("malformed status line: {line:?}");
        }

        let code = &line[..2];
        if code == "!!" {
            continue;
        }

        let rest = &line[3..];
        let (from, path) = match split_rename(rest) {
            Some((from, to)) => (Some(unquote(from)?), unquote(to)?),
            None => (None, unquote(rest)?),
        };

        changes.push(Change {
            code: code.to_string(),
            path,
            from,
        });
    }

    Ok(changes)
}

/// Split `orig -> path`, honoring quotes around either side.
fn split_rename(rest: &str) -> Option<(&str, &str)> {
    let sep = " -> ";
    if let Some(stripped) = rest.strip_prefix('"') {
        // Find the closing quote of the first path
        let mut escaped = false;
        for (i, c) in stripped.char_indices() {
            match c {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => {
                    let end = i + 2;
                    return rest[end..]
                        .strip_prefix(sep)
                        .map(|to| (&rest[..end], to));
                }
                _ => escaped = false,
            }
        }
        None
    } else {
        rest.split_once(sep)
    }
}

/// Undo git's C-style quoting of paths with special characters.
fn unquote(raw: &str) -> Result<String> {
    let Some(inner) = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) else {
        return Ok(raw.to_string());
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.bytes().peekable();
    while let Some(b) = chars.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        match chars.next() {
            Some(b'n') => bytes.push(b'\n'),
            Some(b't') => bytes.push(b'\t'),
            Some(b'"') => bytes.push(b'"'),
            Some(b'\\') => bytes.push(b'\\'),
            Some(d @ b'0'..=b'7') => {
                let mut value = u32::from(d - b'0');
                for _ in 0..2 {
                    match chars.peek() {
                        Some(&o @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(o - b'0');
                            chars.next();
                        }
                        _ => break,
                    }
                }
                match u8::try_from(value) {
                    Ok(v) => bytes.push(v),
                    Err(_) => bail!("invalid octal escape in {raw}"),
                }
            }
            other => bail!("unsupported escape {other:?} in {raw}"),
        }
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_lines() {
        let out = " M docs/README.md\n?? docs/new.md\nA  docs/index.html\n D docs/old.md\n";
        let changes = parse_porcelain(out).unwrap();

        assert_eq!(changes.len(), 4);
        assert_eq!(changes[0].path, "docs/README.md");
        assert_eq!(changes[0].kind(), ChangeKind::Modified);
        assert_eq!(changes[1].kind(), ChangeKind::Untracked);
        assert_eq!(changes[2].kind(), ChangeKind::Added);
        assert_eq!(changes[3].kind(), ChangeKind::Deleted);
    }

    #[test]
    fn test_parse_rename() {
        let changes = parse_porcelain("R  docs/a.md -> docs/b.md").unwrap();
        assert_eq!(changes[0].from.as_deref(), Some("docs/a.md"));
        assert_eq!(changes[0].path, "docs/b.md");
        assert_eq!(changes[0].kind(), ChangeKind::Renamed);
    }

    #[test]
    fn test_parse_quoted_paths() {
        let changes = parse_porcelain("?? \"docs/with space\\t.md\"").unwrap();
        assert_eq!(changes[0].path, "docs/with space\t.md");

        let changes = parse_porcelain("R  \"docs/a -> b.md\" -> docs/c.md").unwrap();
        assert_eq!(changes[0].from.as_deref(), Some("docs/a -> b.md"));
        assert_eq!(changes[0].path, "docs/c.md");
    }

    #[test]
    fn test_parse_octal_utf8() {
        // "é" is 0xC3 0xA9
        let changes = parse_porcelain("?? \"docs/caf\\303\\251.md\"").unwrap();
        assert_eq!(changes[0].path, "docs/café.md");
    }

    #[test]
    fn test_ignored_and_blank_lines_skipped() {
        let changes = parse_porcelain("!! docs/build.log\n\n M docs/x.md").unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].path, "docs/x.md");
    }

    #[test]
    fn test_conflicts_detected() {
        let changes = parse_porcelain("UU docs/x.md\nAA docs/y.md").unwrap();
        assert!(changes.iter().all(|c| c.kind() == ChangeKind::Conflicted));
    }

    #[test]
    fn test_malformed_line_rejected() {
        assert!(parse_porcelain("M").is_err());
        assert!(parse_porcelain("MMXdocs/x.md").is_err());
    }
}
