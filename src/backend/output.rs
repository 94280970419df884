//! Persist the rendered document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes one generated document into a destination directory.
pub struct OutputWriter {
    /// Directory receiving the document; created on demand
    destination: PathBuf,
    /// File name inside `destination`
    file_name: String,
}

impl OutputWriter {
    pub fn new(destination: impl AsRef<Path>, file_name: impl Into<String>) -> Self {
        Self {
            destination: destination.as_ref().to_path_buf(),
            file_name: file_name.into(),
        }
    }

    /// Full path of the document this writer produces.
    pub fn target(&self) -> PathBuf {
        self.destination.join(&self.file_name)
    }

    /// Create the destination directory if needed and write `contents`, replacing any previous document.
    pub fn write(&self, contents: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.destination)?;
        let target = self.target();
        fs::write(&target, contents)?;
        tracing::debug!(path = %target.display(), bytes = contents.len(), "wrote document");
        Ok(target)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_destination() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("Generated/Sources");
        let writer = OutputWriter::new(&destination, "Rigid.swift");

        let written = writer.write("// hi\n").unwrap();
        assert_eq!(written, destination.join("Rigid.swift"));
        assert_eq!(fs::read_to_string(written).unwrap(), "// hi\n");
    }

    #[test]
    fn test_write_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path(), "Rigid.swift");
        writer.write("old").unwrap();
        writer.write("new").unwrap();
        assert_eq!(fs::read_to_string(writer.target()).unwrap(), "new");
    }

    #[test]
    fn test_write_fails_when_destination_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let writer = OutputWriter::new(&blocker, "Rigid.swift");
        assert!(writer.write("x").is_err());
    }
}
