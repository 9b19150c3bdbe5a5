use std::path::Path;
use std::fs::{self, File};
use sevenz_rust::{SevenZReader, Password};
use crate::core::compression::common::{ArchiveHandler, enclosed_path, has_suffix};
use crate::models::LoaderError;

/// 7z archive handler
///
/// Extracts 7z archives using sevenz-rust.
pub struct SevenZHandler;

impl SevenZHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveHandler for SevenZHandler {
    /// Extract 7z archive to destination directory
    ///
    /// # Behavior
    /// - Preserves directory hierarchy
    /// - Overwrites files that already exist in `dest_dir`
    /// - Skips entries whose names would escape `dest_dir`
    /// - Does not support password-protected archives
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> Result<(), LoaderError> {
        let file = File::open(archive_path)
            .map_err(|e| LoaderError::Archive(
                format!("Failed to open 7z archive {}: {}", archive_path.display(), e)
            ))?;

        let file_size = file.metadata()
            .map_err(|e| LoaderError::Archive(
                format!("Failed to get file metadata: {}", e)
            ))?
            .len();

        let mut reader = SevenZReader::new(file, file_size, Password::empty())
            .map_err(|e| LoaderError::Archive(
                format!("Invalid or corrupt 7z archive: {}", e)
            ))?;

        fs::create_dir_all(dest_dir)
            .map_err(|e| LoaderError::Archive(
                format!("Failed to create destination directory: {}", e)
            ))?;

        reader.for_each_entries(|entry, reader| {
            let relative = match enclosed_path(entry.name()) {
                Some(path) => path,
                None => {
                    log::warn!("Skipping 7z entry with unsafe name: {}", entry.name());
                    // Solid blocks are decoded sequentially, drain the entry
                    std::io::copy(reader, &mut std::io::sink())
                        .map_err(sevenz_rust::Error::io)?;
                    return Ok(true);
                }
            };
            let output_path = dest_dir.join(&relative);

            if entry.is_directory() {
                fs::create_dir_all(&output_path)
                    .map_err(sevenz_rust::Error::io)?;
            } else {
                if let Some(parent) = output_path.parent() {
                    fs::create_dir_all(parent)
                        .map_err(sevenz_rust::Error::io)?;
                }

                let mut output_file = File::create(&output_path)
                    .map_err(sevenz_rust::Error::io)?;

                std::io::copy(reader, &mut output_file)
                    .map_err(sevenz_rust::Error::io)?;

                log::debug!("Extracted {}", relative.display());
            }

            Ok(true)
        })
        .map_err(|e| LoaderError::Archive(
            format!("Failed to extract 7z archive: {}", e)
        ))?;

        Ok(())
    }

    /// Returns true for file names ending in `.7z` (case-insensitive)
    fn supports(&self, archive_path: &Path) -> bool {
        has_suffix(archive_path, ".7z")
    }

    fn format_name(&self) -> &'static str {
        "7z"
    }
}

impl Default for SevenZHandler {
    fn default() -> Self {
        Self::new()
    }
}
