//! Document source
//!
//! Discovers QRDA documents on the local filesystem. A single file is taken
//! as is; a directory is walked recursively for files with the configured
//! extension.

use crate::domain::{QrdaError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where a document came from, used to name its output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOrigin {
    /// Full path of the source document
    pub path: PathBuf,

    /// File name without extension
    pub stem: String,
}

impl DocumentOrigin {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "document".to_string());
        Self { path, stem }
    }
}

/// Filesystem document source
#[derive(Debug, Clone)]
pub struct DocumentSource {
    root: PathBuf,
    extension: String,
}

impl DocumentSource {
    /// Creates a source rooted at `root` matching `extension` (with or without a leading dot)
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_lowercase(),
        }
    }

    /// Lists matching documents, sorted by path
    ///
    /// # Errors
    ///
    /// Returns [`QrdaError::Io`] if the root does not exist or a directory
    /// cannot be read.
    pub fn discover(&self) -> Result<Vec<DocumentOrigin>> {
        if !self.root.exists() {
            return Err(QrdaError::Io(format!(
                "Input path does not exist: {}",
                self.root.display()
            )));
        }

        if self.root.is_file() {
            return Ok(vec![DocumentOrigin::new(&self.root)]);
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.map_err(|e| {
                QrdaError::Io(format!(
                    "Failed to read directory {}: {e}",
                    self.root.display()
                ))
            })?;

            if entry.file_type().is_file() && self.matches(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        paths.sort();

        tracing::debug!(
            root = %self.root.display(),
            extension = %self.extension,
            count = paths.len(),
            "Discovered documents"
        );

        Ok(paths.into_iter().map(DocumentOrigin::new).collect())
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false)
    }
}
