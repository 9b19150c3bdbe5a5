// Archive handler trait for different compression formats

use std::path::{Component, Path, PathBuf};
use crate::models::LoaderError;

/// Trait for handling different archive formats
pub trait ArchiveHandler: Send + Sync {
    /// Extract every entry of the archive into `dest_dir`, preserving hierarchy
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> Result<(), LoaderError>;

    /// Check if this handler claims the given file
    fn supports(&self, archive_path: &Path) -> bool;

    /// Short format name used in log messages
    fn format_name(&self) -> &'static str;
}

/// Case-insensitive suffix match on the file name (content is never sniffed)
///
/// `suffix` must include the leading dot and be lower case.
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(suffix))
        .unwrap_or(false)
}

/// Resolve an archive entry name to a relative path that stays inside the
/// extraction directory. Returns `None` for absolute names or names with `..`.
pub fn enclosed_path(entry_name: &str) -> Option<PathBuf> {
    let normalized = entry_name.replace('\\', "/");
    let mut out = PathBuf::new();

    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if out.as_os_str().is_empty() {
        None
    } else {
        Some(out)
    }
}
