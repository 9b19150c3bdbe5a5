use std::path::Path;
use crate::core::compression::common::{ArchiveHandler, has_suffix};
use crate::models::LoaderError;

/// RAR placeholder handler
///
/// Claims `.rar` files so they are rejected with a dedicated message instead of the
/// generic unsupported-format error. Decompression would need the external `unrar`
/// library, which is not a dependency of this crate.
pub struct RarHandler;

impl RarHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveHandler for RarHandler {
    fn extract(&self, _archive_path: &Path, _dest_dir: &Path) -> Result<(), LoaderError> {
        Err(LoaderError::RarNotSupported)
    }

    fn supports(&self, archive_path: &Path) -> bool {
        has_suffix(archive_path, ".rar")
    }

    fn format_name(&self) -> &'static str {
        "rar"
    }
}

impl Default for RarHandler {
    fn default() -> Self {
        Self::new()
    }
}
