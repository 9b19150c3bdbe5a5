// Archive compression modules
pub mod common;
pub mod zip_handler;
pub mod rar_handler;

#[path = "7z_handler.rs"]
pub mod sevenz_handler;

use std::path::Path;
use std::sync::Arc;
use crate::models::LoaderError;
use common::ArchiveHandler;
use zip_handler::ZipHandler;
use sevenz_handler::SevenZHandler;
use rar_handler::RarHandler;

/// Archive processor that dispatches extraction by file-name suffix
///
/// Workflow:
/// 1. Pick the first handler whose suffix matches (case-insensitive)
/// 2. Extract the whole archive into the destination directory
///
/// New formats are added as a handler entry, never as a special case here.
pub struct ArchiveProcessor {
    handlers: Vec<Arc<dyn ArchiveHandler>>,
}

impl ArchiveProcessor {
    /// Create a new archive processor with all known handlers
    pub fn new() -> Self {
        let handlers: Vec<Arc<dyn ArchiveHandler>> = vec![
            Arc::new(ZipHandler::new()),
            Arc::new(SevenZHandler::new()),
            Arc::new(RarHandler::new()),
        ];

        Self { handlers }
    }

    /// Auto-detect and get appropriate handler for an archive
    fn get_handler(&self, archive_path: &Path) -> Result<Arc<dyn ArchiveHandler>, LoaderError> {
        for handler in &self.handlers {
            if handler.supports(archive_path) {
                return Ok(Arc::clone(handler));
            }
        }

        let name = archive_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| archive_path.display().to_string());

        Err(LoaderError::UnsupportedArchive(name))
    }

    /// Extract archive to destination directory
    ///
    /// # Errors
    /// * `UnsupportedArchive` / `RarNotSupported` - suffix dispatch rejected the file
    /// * `ExtractionFailed` - the handler failed, wrapping the original message
    pub fn extract(&self, archive_path: &Path, dest_dir: &Path) -> Result<(), LoaderError> {
        let handler = self.get_handler(archive_path)?;

        log::debug!(
            "Using {} handler for {}",
            handler.format_name(),
            archive_path.display()
        );

        handler
            .extract(archive_path, dest_dir)
            .map_err(LoaderError::into_extraction_failure)
    }

    /// Check if a file can actually be extracted
    pub fn is_supported(&self, path: &Path) -> bool {
        Self::supported_extensions()
            .iter()
            .any(|ext| common::has_suffix(path, &format!(".{}", ext)))
    }

    /// Get list of extractable archive extensions
    ///
    /// RAR is claimed by a handler but always rejected, so it is not listed.
    pub fn supported_extensions() -> Vec<&'static str> {
        vec!["zip", "7z"]
    }
}

impl Default for ArchiveProcessor {
    fn default() -> Self {
        Self::new()
    }
}
