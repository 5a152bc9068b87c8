//! Catalog of bundled sample datasets
//!
//! This module discovers predefined sample files under a fixed dataset root
//! and produces display metadata for each. Discovery matches the active wire
//! format's extension and rescans the root on every query; the root is
//! read-only during normal operation, so no caching is required.

use crate::Result;
use crate::app::models::PredefinedFile;
use crate::config::FormatKind;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Catalog over the bundled sample datasets for one wire format
#[derive(Debug, Clone)]
pub struct PredefinedCatalog {
    dataset_root: PathBuf,
    format: FormatKind,
}

impl PredefinedCatalog {
    /// Create a catalog rooted at the given dataset directory
    pub fn new(dataset_root: impl Into<PathBuf>, format: FormatKind) -> Self {
        Self {
            dataset_root: dataset_root.into(),
            format,
        }
    }

    /// Enumerate sample files, sorted by display name.
    ///
    /// An unreadable individual file is skipped; an unreadable dataset root
    /// yields an empty catalog. Neither case is an error.
    pub fn list(&self) -> Vec<PredefinedFile> {
        info!("Scanning dataset root: {}", self.dataset_root.display());

        if !self.dataset_root.is_dir() {
            warn!(
                "Dataset root not found or not a directory: {}",
                self.dataset_root.display()
            );
            return Vec::new();
        }

        let extension = self.format.extension();
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.dataset_root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry during catalog scan: {}", e);
                    None
                }
            })
        {
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != extension) {
                continue;
            }

            match self.describe(path) {
                Some(file) => files.push(file),
                None => debug!("Skipped catalog candidate: {}", path.display()),
            }
        }

        files.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        info!("Discovered {} predefined files", files.len());
        files
    }

    /// Resolve a catalog identifier to the raw bytes of its sample file
    pub fn read(&self, relative_path: &str) -> Result<Vec<u8>> {
        let path = self.resolve(relative_path)?;
        std::fs::read(&path).map_err(|e| {
            crate::Error::io(format!("Failed to read predefined file {}", path.display()), e)
        })
    }

    /// Resolve a catalog identifier to a path under the dataset root
    fn resolve(&self, relative_path: &str) -> Result<PathBuf> {
        // The dataset root is the trust boundary; identifiers may not climb
        // out of it.
        let candidate = Path::new(relative_path);
        if candidate
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
        {
            warn!("Rejected catalog identifier: {}", relative_path);
            return Err(crate::Error::predefined_not_found(relative_path));
        }

        let path = self.dataset_root.join(candidate);
        if !path.is_file() {
            return Err(crate::Error::predefined_not_found(relative_path));
        }
        Ok(path)
    }

    /// Build the catalog entry for one discovered file
    fn describe(&self, path: &Path) -> Option<PredefinedFile> {
        let filename = path.file_name()?.to_string_lossy().into_owned();

        let relative_path = match path.strip_prefix(&self.dataset_root) {
            Ok(relative) => relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => filename.clone(),
        };

        let record_count = match self.format {
            FormatKind::Delimited => match std::fs::read_to_string(path) {
                Ok(content) => Some(content.lines().filter(|l| !l.trim().is_empty()).count()),
                Err(e) => {
                    warn!("Error reading predefined file {}: {}", path.display(), e);
                    return None;
                }
            },
            // No cheap line-oriented count exists for markup documents.
            FormatKind::Markup => None,
        };

        Some(PredefinedFile {
            display_name: display_name(&relative_path),
            filename,
            relative_path,
            record_count,
        })
    }
}

/// Derive a human-readable display name from a slash-separated relative path.
///
/// Folder segments and the extension-stripped file segment are each split on
/// `-`/`_` and title-cased; folder labels join the file label with `" / "`.
pub fn display_name(relative_path: &str) -> String {
    let segments: Vec<&str> = relative_path.split('/').collect();

    let file_segment = segments.last().copied().unwrap_or_default();
    let file_stem = file_segment
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_segment);
    let file_label = title_case(file_stem);

    if segments.len() > 1 {
        let folder_labels: Vec<String> = segments[..segments.len() - 1]
            .iter()
            .map(|segment| title_case(segment))
            .collect();
        format!("{} / {}", folder_labels.join(" / "), file_label)
    } else {
        file_label
    }
}

/// Split a path segment on `-`/`_` and uppercase each word's first character
fn title_case(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
