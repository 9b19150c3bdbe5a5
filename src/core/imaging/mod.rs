// Image decoding and batching
pub mod batch;
pub mod decoder;

pub use batch::ImageBatch;
pub use decoder::{DecodedBatch, ImageDecoder};
