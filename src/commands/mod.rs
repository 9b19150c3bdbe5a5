pub mod archive;
pub mod registry;
