pub mod compression;
pub mod file_ops;
pub mod imaging;
