use std::path::Path;
use std::fs::{self, File};
use zip::ZipArchive;
use crate::core::compression::common::{ArchiveHandler, has_suffix};
use crate::models::LoaderError;

/// ZIP archive handler
///
/// Extracts every entry while preserving directory hierarchy.
pub struct ZipHandler;

impl ZipHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveHandler for ZipHandler {
    /// Extract ZIP archive to destination directory
    ///
    /// # Behavior
    /// - Preserves directory hierarchy
    /// - Overwrites files that already exist in `dest_dir`
    /// - Skips entries whose names would escape `dest_dir`
    /// - Stored permission bits are ignored; files get the process default mode
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> Result<(), LoaderError> {
        let file = File::open(archive_path)
            .map_err(|e| LoaderError::Archive(
                format!("Failed to open ZIP archive {}: {}", archive_path.display(), e)
            ))?;

        let mut archive = ZipArchive::new(file)
            .map_err(|e| LoaderError::Archive(
                format!("Invalid or corrupt ZIP archive: {}", e)
            ))?;

        fs::create_dir_all(dest_dir)
            .map_err(|e| LoaderError::Archive(
                format!("Failed to create destination directory: {}", e)
            ))?;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)
                .map_err(|e| LoaderError::Archive(
                    format!("Failed to read entry at index {}: {}", i, e)
                ))?;

            let entry_path = match entry.enclosed_name() {
                Some(path) => path.to_path_buf(),
                None => {
                    log::warn!("Skipping ZIP entry with unsafe name: {}", entry.name());
                    continue;
                }
            };

            let output_path = dest_dir.join(&entry_path);

            if entry.is_dir() {
                fs::create_dir_all(&output_path)
                    .map_err(|e| LoaderError::Archive(
                        format!("Failed to create directory {}: {}", output_path.display(), e)
                    ))?;
                continue;
            }

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| LoaderError::Archive(
                        format!("Failed to create parent directory {}: {}", parent.display(), e)
                    ))?;
            }

            let mut output_file = File::create(&output_path)
                .map_err(|e| LoaderError::Archive(
                    format!("Failed to create output file {}: {}", output_path.display(), e)
                ))?;

            std::io::copy(&mut entry, &mut output_file)
                .map_err(|e| LoaderError::Archive(
                    format!("Failed to extract file {}: {}", entry_path.display(), e)
                ))?;

            log::debug!("Extracted {}", entry_path.display());
        }

        Ok(())
    }

    /// Returns true for file names ending in `.zip` (case-insensitive)
    fn supports(&self, archive_path: &Path) -> bool {
        has_suffix(archive_path, ".zip")
    }

    fn format_name(&self) -> &'static str {
        "zip"
    }
}

impl Default for ZipHandler {
    fn default() -> Self {
        Self::new()
    }
}
