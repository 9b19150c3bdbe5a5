use std::path::PathBuf;
use thiserror::Error;

/// Error types for the archive image loader node
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Archive file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported archive format for file: {0}")]
    UnsupportedArchive(String),

    #[error("RAR decompression is not supported due to external dependencies. Please use ZIP or 7z.")]
    RarNotSupported,

    /// Raised by a format handler while decompressing
    #[error("{0}")]
    Archive(String),

    #[error("Failed to extract archive: {0}")]
    ExtractionFailed(String),

    #[error("Could not load image '{file_name}': {reason}")]
    ImageDecode { file_name: String, reason: String },

    #[error("Images in the archive cannot be batched: {0}")]
    BatchShape(String),

    #[error("Invalid node input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoaderError {
    /// Wrap a handler failure as an extraction failure.
    ///
    /// Dispatch rejections keep their own variant so the caller can still tell an
    /// unsupported format apart from a corrupt archive.
    pub fn into_extraction_failure(self) -> Self {
        match self {
            e @ (LoaderError::UnsupportedArchive(_)
            | LoaderError::RarNotSupported
            | LoaderError::ExtractionFailed(_)) => e,
            other => LoaderError::ExtractionFailed(other.to_string()),
        }
    }

    /// Whether the host should halt the node on this error
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LoaderError::ImageDecode { .. })
    }
}

// The host boundary only carries error text
impl From<LoaderError> for String {
    fn from(err: LoaderError) -> String {
        err.to_string()
    }
}
