use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use crate::core::compression::common::has_suffix;
use crate::models::LoaderError;

/// Archive suffixes the upload button and drop target accept
///
/// `.rar` is accepted; the node itself rejects it at extraction time.
pub const UPLOAD_EXTENSIONS: [&str; 3] = [".zip", ".7z", ".rar"];

/// `accept` attribute of the file picker
pub const UPLOAD_ACCEPT: &str = ".zip,.7z,.rar";

/// Check whether a picked or dropped file would be uploaded
pub fn is_uploadable(file_name: &str) -> bool {
    UPLOAD_EXTENSIONS
        .iter()
        .any(|ext| has_suffix(Path::new(file_name), ext))
}

/// Drag-and-drop rule: only the first uploadable file of a drop is taken
pub fn first_uploadable<'a, I>(file_names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    file_names.into_iter().find(|name| is_uploadable(name))
}

/// Stores uploaded archives in the temp upload folder
///
/// Mirrors the host upload endpoint the node's front-end posts to (`type=temp`).
/// The returned name is what ends up in the node's `archive_file` input.
pub struct UploadStager {
    temp_dir: PathBuf,
}

impl UploadStager {
    pub fn new(temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: temp_dir.into(),
        }
    }

    /// Write `content` under the base name of `file_name`
    ///
    /// # Arguments
    /// * `file_name` - Client-side name; any directory part is dropped
    /// * `content` - Archive bytes
    /// * `overwrite` - Replace an existing file instead of picking `"<stem> (n).<ext>"`
    ///
    /// # Returns
    /// * Stored file name, relative to the temp folder
    pub fn stage(&self, file_name: &str, content: &[u8], overwrite: bool) -> Result<String, LoaderError> {
        let base_name = Path::new(&file_name.replace('\\', "/"))
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| LoaderError::InvalidInput(
                format!("Upload has no usable file name: '{}'", file_name)
            ))?;

        fs::create_dir_all(&self.temp_dir)?;

        let stored_name = if overwrite {
            base_name
        } else {
            self.free_name(&base_name)
        };
        let dest = self.temp_dir.join(&stored_name);

        // Write next to the destination, then move into place in one step
        let mut staged = tempfile::NamedTempFile::new_in(&self.temp_dir)?;
        staged.write_all(content)?;
        staged.flush()?;
        staged
            .persist(&dest)
            .map_err(|e| LoaderError::Io(e.error))?;

        log::info!("Staged upload '{}' ({} bytes)", dest.display(), content.len());

        Ok(stored_name)
    }

    /// First name of the form `"<stem> (n).<ext>"` that does not exist yet
    fn free_name(&self, base_name: &str) -> String {
        if !self.temp_dir.join(base_name).exists() {
            return base_name.to_string();
        }

        let path = Path::new(base_name);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| base_name.to_string());
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let mut counter = 1;
        loop {
            let candidate = format!("{} ({}){}", stem, counter, extension);
            if !self.temp_dir.join(&candidate).exists() {
                return candidate;
            }
            counter += 1;
        }
    }
}
