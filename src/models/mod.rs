pub mod error;
pub mod image_file;
pub mod config;

// Re-export commonly used types
pub use error::LoaderError;
pub use image_file::{ImageFile, SkippedImage};
pub use config::{FolderPaths, SortMethod};
