use std::path::{Path, PathBuf};
use std::fs;
use crate::models::{FolderPaths, LoaderError};

/// Resolved locations for one archive invocation
///
/// Unlike a temporary workspace, the extraction directory lives under the host's
/// input folder and is never cleaned up: later nodes read from it by path.
#[derive(Debug, Clone)]
pub struct ExtractionWorkspace {
    archive_path: PathBuf,
    extract_dir: PathBuf,
}

impl ExtractionWorkspace {
    /// Resolve `archive_file` against the temp upload folder
    ///
    /// Fails with `NotFound` before anything is created on disk.
    pub fn resolve(folders: &FolderPaths, archive_file: &str) -> Result<Self, LoaderError> {
        let archive_path = folders.temp_directory.join(archive_file);

        if !archive_path.exists() {
            return Err(LoaderError::NotFound(archive_path));
        }

        let stem = archive_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| LoaderError::InvalidInput(
                format!("Archive path has no file name: {}", archive_path.display())
            ))?;

        let extract_dir = folders.input_directory.join(stem);

        Ok(Self {
            archive_path,
            extract_dir,
        })
    }

    /// Create the extraction directory (and parents); existing directories are reused
    pub fn prepare(&self) -> Result<(), LoaderError> {
        fs::create_dir_all(&self.extract_dir)?;
        Ok(())
    }

    /// Full path of the uploaded archive
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Directory the archive is extracted into
    pub fn extract_dir(&self) -> &Path {
        &self.extract_dir
    }

    /// Extraction directory as the string handed back to the host
    pub fn extract_dir_string(&self) -> String {
        self.extract_dir.to_string_lossy().to_string()
    }
}
