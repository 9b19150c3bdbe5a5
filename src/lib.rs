//! "Load Images from Archive" node for a node-graph image pipeline host.
//!
//! The host uploads a ZIP or 7z archive to its temp folder; the node extracts it into
//! `<input>/<archive stem>`, loads the top-level images as one `[N, H, W, 3]` batch and
//! returns the batch together with the extraction directory.

// Module declarations
pub mod models;
pub mod core;
pub mod commands;

pub use commands::archive::{ArchiveImageLoader, ArchiveLoadOutput, LoadSummary};
pub use commands::registry::{
    node_class_mappings, node_display_name_mappings, NodeDefinition, NodeRegistry,
    NODE_CLASS, NODE_DISPLAY_NAME, WEB_EXTENSION_NAME,
};
pub use crate::core::file_ops::upload::{first_uploadable, is_uploadable, UploadStager, UPLOAD_ACCEPT};
pub use crate::core::imaging::ImageBatch;
pub use models::{FolderPaths, LoaderError, SkippedImage, SortMethod};
