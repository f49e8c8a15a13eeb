//! Resource sinks
//!
//! A sink receives the resource set of one converted document. The filesystem
//! sink lays the resources out as
//! `<output_dir>/<document-stem>/<kind>_<id>.json`, where `kind` is
//! `patient`, `encounter` or `medication`.

use super::source::DocumentOrigin;
use crate::domain::{QrdaError, ResourceRef, ResourceSet, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Destination for converted resources
#[async_trait]
pub trait ResourceSink: Send + Sync {
    /// Write all resources of one document
    ///
    /// Returns the number of resources written.
    ///
    /// # Errors
    ///
    /// Returns [`QrdaError::Output`] if any resource cannot be written.
    async fn write(&self, origin: &DocumentOrigin, resources: &ResourceSet) -> Result<usize>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Writes each resource as a JSON file
#[derive(Debug, Clone)]
pub struct FileSystemSink {
    output_dir: PathBuf,
    pretty: bool,
}

impl FileSystemSink {
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            pretty,
        }
    }

    /// Directory that receives the resources of `origin`
    pub fn document_dir(&self, origin: &DocumentOrigin) -> PathBuf {
        self.output_dir.join(&origin.stem)
    }

    /// File name for one resource, e.g. `patient_12345.json`
    ///
    /// Ids come from the source document, so every character outside
    /// `[A-Za-z0-9._-]` is replaced with `_`. The name never contains a path
    /// separator.
    pub fn file_name(resource: &ResourceRef<'_>) -> String {
        format!("{}_{}.json", resource.kind(), file_safe(resource.id().as_str()))
    }

    fn render(&self, resource: &ResourceRef<'_>) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(resource)?
        } else {
            serde_json::to_vec(resource)?
        };
        Ok(bytes)
    }
}

#[async_trait]
impl ResourceSink for FileSystemSink {
    async fn write(&self, origin: &DocumentOrigin, resources: &ResourceSet) -> Result<usize> {
        let dir = self.document_dir(origin);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| output_error(&dir, e))?;

        let mut written = 0;
        for resource in resources.iter() {
            let path = dir.join(Self::file_name(&resource));
            let bytes = self.render(&resource)?;
            tokio::fs::write(&path, bytes)
                .await
                .map_err(|e| output_error(&path, e))?;

            tracing::trace!(path = %path.display(), kind = resource.kind(), "Wrote resource");
            written += 1;
        }

        Ok(written)
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}

fn file_safe(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn output_error(path: &Path, err: std::io::Error) -> QrdaError {
    QrdaError::Output(format!("Failed to write {}: {err}", path.display()))
}

/// Counts resources without writing anything
#[derive(Debug, Default)]
pub struct DryRunSink {
    resources: AtomicUsize,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resources that would have been written so far
    pub fn resource_count(&self) -> usize {
        self.resources.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ResourceSink for DryRunSink {
    async fn write(&self, origin: &DocumentOrigin, resources: &ResourceSet) -> Result<usize> {
        let count = resources.len();
        self.resources.fetch_add(count, Ordering::Relaxed);

        tracing::debug!(
            document = %origin.stem,
            resources = count,
            "Dry run: skipping write"
        );

        Ok(count)
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::convert::convert_document;
    use tempfile::TempDir;

    const DOCUMENT: &[u8] = br#"<ClinicalDocument xmlns="urn:hl7-org:v3">
  <recordTarget><patientRole><id extension="12345"/></patientRole></recordTarget>
  <entry><encounter><id extension="enc-1"/></encounter></entry>
</ClinicalDocument>"#;

    #[tokio::test]
    async fn test_filesystem_sink_layout() {
        let dir = TempDir::new().unwrap();
        let sink = FileSystemSink::new(dir.path(), false);
        let origin = DocumentOrigin::new("/in/sample.xml");
        let resources = convert_document(DOCUMENT).unwrap();

        let written = sink.write(&origin, &resources).await.unwrap();
        assert_eq!(written, 2);

        let patient_path = dir.path().join("sample").join("patient_12345.json");
        let encounter_path = dir.path().join("sample").join("encounter_enc-1.json");
        assert!(patient_path.exists());
        assert!(encounter_path.exists());

        let patient: serde_json::Value =
            serde_json::from_slice(&std::fs::read(patient_path).unwrap()).unwrap();
        assert_eq!(patient["resourceType"], "Patient");
        assert_eq!(patient["id"], "12345");
    }

    #[tokio::test]
    async fn test_filesystem_sink_pretty_output() {
        let dir = TempDir::new().unwrap();
        let sink = FileSystemSink::new(dir.path(), true);
        let origin = DocumentOrigin::new("sample.xml");
        let resources = convert_document(DOCUMENT).unwrap();

        sink.write(&origin, &resources).await.unwrap();

        let text =
            std::fs::read_to_string(dir.path().join("sample").join("patient_12345.json")).unwrap();
        assert!(text.contains("\n  \"resourceType\": \"Patient\""));
    }

    #[tokio::test]
    async fn test_dry_run_sink_counts_only() {
        let dir = TempDir::new().unwrap();
        let sink = DryRunSink::new();
        let origin = DocumentOrigin::new(dir.path().join("sample.xml"));
        let resources = convert_document(DOCUMENT).unwrap();

        assert_eq!(sink.write(&origin, &resources).await.unwrap(), 2);
        assert_eq!(sink.write(&origin, &resources).await.unwrap(), 2);
        assert_eq!(sink.resource_count(), 4);
        assert!(!dir.path().join("sample").exists());
    }

    #[test]
    fn test_file_name() {
        let resources = convert_document(DOCUMENT).unwrap();
        let names: Vec<_> = resources.iter().map(|r| FileSystemSink::file_name(&r)).collect();
        assert_eq!(names, vec!["patient_12345.json", "encounter_enc-1.json"]);
    }

    #[test]
    fn test_file_safe_replaces_separators() {
        assert_eq!(file_safe("MRN/0042"), "MRN_0042");
        assert_eq!(file_safe("x/../../escaped"), "x_.._.._escaped");
        assert_eq!(file_safe(r"a\b c"), "a__b_c");
        assert_eq!(file_safe("enc-1.v2_final"), "enc-1.v2_final");
    }

    #[tokio::test]
    async fn test_filesystem_sink_keeps_unsafe_ids_inside_document_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let sink = FileSystemSink::new(&out, false);
        let origin = DocumentOrigin::new("doc.xml");
        let xml = br#"<ClinicalDocument xmlns="urn:hl7-org:v3">
  <recordTarget><patientRole><id extension="MRN/0042"/></patientRole></recordTarget>
  <entry><encounter><id extension="/../../escaped"/></encounter></entry>
</ClinicalDocument>"#;
        let resources = convert_document(xml).unwrap();

        assert_eq!(sink.write(&origin, &resources).await.unwrap(), 2);

        let doc_dir = out.join("doc");
        assert!(doc_dir.join("patient_MRN_0042.json").exists());
        assert!(doc_dir.join("encounter__.._.._escaped.json").exists());
        assert_eq!(std::fs::read_dir(&doc_dir).unwrap().count(), 2);
        assert!(!dir.path().join("escaped.json").exists());

        // The resource keeps its original id
        let patient: serde_json::Value = serde_json::from_slice(
            &std::fs::read(doc_dir.join("patient_MRN_0042.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(patient["id"], "MRN/0042");
    }
}
