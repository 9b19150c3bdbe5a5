use serde::Serialize;
use std::path::PathBuf;

/// An image file found in the extraction directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Entry name inside the extraction directory (lossy UTF-8, used for ordering)
    pub file_name: String,
    /// Full path on disk
    pub path: PathBuf,
}

impl ImageFile {
    pub fn new(file_name: String, path: PathBuf) -> Self {
        Self { file_name, path }
    }
}

impl AsRef<str> for ImageFile {
    fn as_ref(&self) -> &str {
        &self.file_name
    }
}

/// An image that was left out of the batch because it could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedImage {
    pub file_name: String,
    pub reason: String,
}
