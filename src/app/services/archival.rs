//! Archival of raw ingested payloads
//!
//! This module persists the raw payload of an ingestion request into a folder
//! selected by source type, under a timestamped name that avoids accidental
//! overwrite during normal operation. Writes go through a temporary file in
//! the destination folder followed by an atomic rename, so a failed write
//! leaves no partial artifact behind.

use chrono::Local;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::app::models::{ArchivalResult, InputOrigin, SourceType};
use crate::config::StorageConfig;
use crate::constants::{ARCHIVE_TIMESTAMP_FORMAT, fallback};
use crate::{Error, Result};

/// Writer persisting raw payloads to per-source-type storage folders
#[derive(Debug, Clone)]
pub struct ArchivalWriter {
    storage: StorageConfig,
}

impl ArchivalWriter {
    /// Create a writer over the given routing table
    pub fn new(storage: StorageConfig) -> Self {
        Self { storage }
    }

    /// Destination folder for a source type
    pub fn destination(&self, source_type: SourceType) -> &Path {
        match source_type {
            SourceType::A => &self.storage.path_a,
            SourceType::B => &self.storage.path_b,
        }
    }

    /// Persist `content` to the folder routed by `source_type`, deriving the
    /// file name from `origin`.
    ///
    /// Returns the written artifact's location only on full success.
    pub async fn archive(
        &self,
        origin: &InputOrigin,
        content: &[u8],
        source_type: SourceType,
    ) -> Result<ArchivalResult> {
        let folder = self.ensure_destination(source_type)?;

        let timestamp = Local::now().format(ARCHIVE_TIMESTAMP_FORMAT);
        let (base_name, extension) = derive_name(origin);
        let file_name = format!("{}_{}.{}", timestamp, base_name, extension);
        let target = folder.join(&file_name);

        debug!("Target file path: {}", target.display());

        write_atomically(&folder, &target, content).map_err(|e| {
            Error::save_failed(
                format!("Failed to save file to {}", target.display()),
                Box::new(e),
            )
        })?;

        info!(
            "Archived {} bytes from {} input to: {}",
            content.len(),
            origin.mode(),
            target.display()
        );

        Ok(ArchivalResult {
            file_path: target,
            folder_path: folder,
        })
    }

    /// Create the destination folder if absent and verify it is usable.
    ///
    /// Failure here is fatal and non-retryable without operator intervention.
    fn ensure_destination(&self, source_type: SourceType) -> Result<PathBuf> {
        let configured = self.destination(source_type);
        info!("Target storage folder: {}", configured.display());

        if !configured.exists() {
            info!("Directory doesn't exist, creating: {}", configured.display());
            // create_dir_all tolerates a concurrent create of the same folder
            std::fs::create_dir_all(configured).map_err(|e| {
                Error::configuration(format!(
                    "Unable to create storage directory {}: {}",
                    configured.display(),
                    e
                ))
            })?;
        }

        let metadata = std::fs::metadata(configured).map_err(|e| {
            Error::configuration(format!(
                "Storage directory {} is not accessible: {}",
                configured.display(),
                e
            ))
        })?;

        if metadata.permissions().readonly() {
            return Err(Error::configuration(format!(
                "Storage directory is not writable: {}",
                configured.display()
            )));
        }

        configured.canonicalize().map_err(|e| {
            Error::configuration(format!(
                "Unable to resolve storage directory {}: {}",
                configured.display(),
                e
            ))
        })
    }
}

/// Derive `<base>.<ext>` parts for the archive file name from the origin
fn derive_name(origin: &InputOrigin) -> (String, String) {
    match origin {
        InputOrigin::File { filename, .. } => {
            let filename = filename.trim();
            if filename.is_empty() {
                (fallback::UPLOAD_BASE.to_string(), fallback::UPLOAD_EXT.to_string())
            } else {
                match filename.rsplit_once('.') {
                    Some((base, ext)) if !base.is_empty() && !ext.is_empty() => {
                        (base.to_string(), ext.to_string())
                    }
                    _ => (filename.to_string(), fallback::UPLOAD_EXT.to_string()),
                }
            }
        }
        InputOrigin::Text { .. } => {
            (fallback::TEXT_BASE.to_string(), fallback::TEXT_EXT.to_string())
        }
        InputOrigin::Predefined { relative_path } => {
            let identifier = relative_path.trim();
            if identifier.is_empty() {
                (
                    fallback::PREDEFINED_BASE.to_string(),
                    fallback::PREDEFINED_EXT.to_string(),
                )
            } else {
                match identifier.rsplit_once('.') {
                    Some((base, ext)) if !base.is_empty() && !ext.is_empty() => {
                        (base.replace('/', "_"), ext.to_string())
                    }
                    _ => (
                        identifier.replace('/', "_"),
                        fallback::PREDEFINED_EXT.to_string(),
                    ),
                }
            }
        }
    }
}

/// Write `content` to `target` via a temporary file in the same folder
fn write_atomically(folder: &Path, target: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut temp = NamedTempFile::new_in(folder)?;
    temp.write_all(content)?;
    temp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use tempfile::TempDir;

    fn writer_in(root: &TempDir) -> ArchivalWriter {
        ArchivalWriter::new(StorageConfig {
            path_a: root.path().join("path-a"),
            path_b: root.path().join("path-b"),
        })
    }

    fn text_origin(content: &str) -> InputOrigin {
        InputOrigin::Text {
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_archive_creates_missing_directory() {
        let root = TempDir::new().unwrap();
        let writer = writer_in(&root);

        let result = writer
            .archive(&text_origin("Alice,1"), b"Alice,1", SourceType::A)
            .await
            .unwrap();

        assert!(root.path().join("path-a").is_dir());
        assert_eq!(
            result.folder_path,
            root.path().join("path-a").canonicalize().unwrap()
        );
        assert!(result.file_path.is_file());
    }

    #[tokio::test]
    async fn test_archive_routes_by_source_type() {
        let root = TempDir::new().unwrap();
        let writer = writer_in(&root);

        let result = writer
            .archive(&text_origin("x"), b"x", SourceType::B)
            .await
            .unwrap();

        assert!(result.file_path.starts_with(result.folder_path.clone()));
        assert!(
            result
                .folder_path
                .ends_with(Path::new("path-b"))
        );
    }

    #[tokio::test]
    async fn test_archive_writes_exact_bytes() {
        let root = TempDir::new().unwrap();
        let writer = writer_in(&root);
        let payload = b"Alice,150.00\nBob,75.50\n";

        let result = writer
            .archive(&text_origin("ignored"), payload, SourceType::A)
            .await
            .unwrap();

        let written = std::fs::read(&result.file_path).unwrap();
        assert_eq!(written, payload);
    }

    #[tokio::test]
    async fn test_text_origin_file_name_shape() {
        let root = TempDir::new().unwrap();
        let writer = writer_in(&root);

        let result = writer
            .archive(&text_origin("x"), b"x", SourceType::A)
            .await
            .unwrap();

        let name = result.file_path.file_name().unwrap().to_string_lossy();
        assert!(name.ends_with("_text-input.txt"), "unexpected name: {}", name);
        // Timestamp prefix is filesystem-safe: seconds resolution, no colons
        let timestamp = name.split('_').next().unwrap();
        assert_eq!(timestamp.len(), "2025-01-01T00-00-00".len());
        assert!(!timestamp.contains(':'));
    }

    #[tokio::test]
    async fn test_file_origin_name_derived_from_original() {
        let root = TempDir::new().unwrap();
        let writer = writer_in(&root);
        let origin = InputOrigin::File {
            filename: "cust_report.csv".to_string(),
            bytes: b"Alice,1".to_vec(),
        };

        let result = writer.archive(&origin, b"Alice,1", SourceType::A).await.unwrap();

        let name = result.file_path.file_name().unwrap().to_string_lossy();
        assert!(name.ends_with("_cust_report.csv"), "unexpected name: {}", name);
    }

    #[tokio::test]
    async fn test_file_origin_without_extension_falls_back() {
        let root = TempDir::new().unwrap();
        let writer = writer_in(&root);
        let origin = InputOrigin::File {
            filename: "rawdata".to_string(),
            bytes: vec![],
        };

        let result = writer.archive(&origin, b"", SourceType::A).await.unwrap();

        let name = result.file_path.file_name().unwrap().to_string_lossy();
        assert!(name.ends_with("_rawdata.txt"), "unexpected name: {}", name);
    }

    #[tokio::test]
    async fn test_file_origin_empty_name_falls_back_to_unknown() {
        let root = TempDir::new().unwrap();
        let writer = writer_in(&root);
        let origin = InputOrigin::File {
            filename: String::new(),
            bytes: vec![],
        };

        let result = writer.archive(&origin, b"", SourceType::A).await.unwrap();

        let name = result.file_path.file_name().unwrap().to_string_lossy();
        assert!(name.ends_with("_unknown.txt"), "unexpected name: {}", name);
    }

    #[tokio::test]
    async fn test_predefined_origin_slashes_replaced() {
        let root = TempDir::new().unwrap();
        let writer = writer_in(&root);
        let origin = InputOrigin::Predefined {
            relative_path: "region-a/cust_report.csv".to_string(),
        };

        let result = writer.archive(&origin, b"Alice,1", SourceType::B).await.unwrap();

        let name = result.file_path.file_name().unwrap().to_string_lossy();
        assert!(
            name.ends_with("_region-a_cust_report.csv"),
            "unexpected name: {}",
            name
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_readonly_directory_is_configuration_error() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let readonly = root.path().join("path-a");
        std::fs::create_dir_all(&readonly).unwrap();
        std::fs::set_permissions(&readonly, std::fs::Permissions::from_mode(0o555)).unwrap();

        let writer = writer_in(&root);
        let result = writer.archive(&text_origin("x"), b"x", SourceType::A).await;

        // Restore permissions so TempDir cleanup succeeds
        std::fs::set_permissions(&readonly, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
