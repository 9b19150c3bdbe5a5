use std::path::Path;
use walkdir::WalkDir;
use crate::models::{ImageFile, LoaderError, SortMethod};

/// Flat scanner for loadable images in an extraction directory
///
/// Only the top level is listed: images inside subdirectories of the archive are
/// not part of the batch.
pub struct ImageScanner {
    supported_extensions: Vec<&'static str>,
}

impl ImageScanner {
    /// Create a scanner with the default formats (PNG, JPEG, JPG, WEBP, BMP)
    pub fn new() -> Self {
        Self {
            supported_extensions: vec!["png", "jpg", "jpeg", "webp", "bmp"],
        }
    }

    /// List supported images directly inside `dir`, sorted ascending by file name
    pub fn scan(&self, dir: &Path) -> Result<Vec<ImageFile>, LoaderError> {
        let mut images = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| LoaderError::Io(e.into()))?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().to_string();
            if self.is_supported(&file_name) {
                images.push(ImageFile::new(file_name, path.to_path_buf()));
            }
        }

        images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        Ok(images)
    }

    /// Scan, then apply the requested ordering on top of the ascending sort
    pub fn scan_sorted(&self, dir: &Path, sort_method: SortMethod) -> Result<Vec<ImageFile>, LoaderError> {
        let mut images = self.scan(dir)?;
        sort_method.apply(&mut images);
        Ok(images)
    }

    /// Check if a file name ends with a supported image suffix (case-insensitive)
    pub fn is_supported(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.supported_extensions
            .iter()
            .any(|ext| lower.strip_suffix(ext).is_some_and(|rest| rest.ends_with('.')))
    }

    /// Get list of supported extensions
    pub fn supported_extensions(&self) -> &[&'static str] {
        &self.supported_extensions
    }
}

impl Default for ImageScanner {
    fn default() -> Self {
        Self::new()
    }
}
