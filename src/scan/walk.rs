//! Recursive directory enumeration with hidden-entry and package filtering.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::ScanError;
use super::classify::{is_hidden, is_package};

/// Enumerate everything below `root` in file-name order.
///
/// Hidden entries are skipped together with their contents. Package directories are yielded but their contents
/// are not. Entries that fail mid-walk are logged and skipped; only an unreadable `root` is an error.
pub fn walk(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    fs::read_dir(root).map_err(|source| ScanError::Enumerate {
        path: root.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.path()));

    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping entry that cannot be read");
                continue;
            }
        };

        let is_dir = entry.file_type().is_dir();
        if is_dir && is_package(entry.path()) {
            walker.skip_current_dir();
        }
        tracing::trace!(path = %entry.path().display(), is_dir, "visit");
        entries.push(entry.into_path());
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn relative(root: &Path, entries: &[PathBuf]) -> Vec<String> {
        entries
            .iter()
            .map(|path| path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_walk_is_sorted_and_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b/z.png"), b"").unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();

        let entries = walk(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &entries), vec!["a.png", "b", "b/z.png"]);
        assert!(entries[1].is_dir());
    }

    #[test]
    fn test_walk_skips_hidden_entries_and_their_contents() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/x.png"), b"").unwrap();
        fs::write(dir.path().join(".hidden.png"), b"").unwrap();
        fs::write(dir.path().join("shown.png"), b"").unwrap();

        let entries = walk(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &entries), vec!["shown.png"]);
    }

    #[test]
    fn test_walk_yields_packages_without_contents() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("App.xcodeproj")).unwrap();
        fs::write(dir.path().join("App.xcodeproj/icon.png"), b"").unwrap();

        let entries = walk(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &entries), vec!["App.xcodeproj"]);
    }

    #[test]
    fn test_walk_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = walk(&missing).unwrap_err();
        assert!(matches!(err, ScanError::Enumerate { ref path, .. } if path == &missing));
    }
}
