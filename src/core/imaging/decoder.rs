use std::path::Path;
use image::{DynamicImage, ImageReader};
use ndarray::Array3;
use crate::core::imaging::batch::ImageBatch;
use crate::models::{ImageFile, LoaderError, SkippedImage};

/// Decoded batch plus the files that had to be left out
#[derive(Debug, Clone)]
pub struct DecodedBatch {
    pub batch: ImageBatch,
    pub skipped: Vec<SkippedImage>,
}

/// Decodes image files into normalized RGB tensors
///
/// The format is sniffed from the file content, falling back to the extension.
pub struct ImageDecoder;

impl ImageDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode one file into a `[H, W, 3]` array with values in `[0, 1]`
    ///
    /// The file handle is dropped before this returns, on success and on failure.
    pub fn decode(&self, path: &Path) -> Result<Array3<f32>, LoaderError> {
        let image = Self::open(path).map_err(|reason| LoaderError::ImageDecode {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            reason,
        })?;

        Ok(Self::normalize(&image))
    }

    fn open(path: &Path) -> Result<DynamicImage, String> {
        ImageReader::open(path)
            .map_err(|e| e.to_string())?
            .with_guessed_format()
            .map_err(|e| e.to_string())?
            .decode()
            .map_err(|e| e.to_string())
    }

    /// Convert to RGB8 and scale every channel by `1 / 255`
    pub fn normalize(image: &DynamicImage) -> Array3<f32> {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let (w, h) = (width as usize, height as usize);

        Array3::from_shape_fn((h, w, ImageBatch::CHANNELS), |(y, x, ch)| {
            rgb.get_pixel(x as u32, y as u32)[ch] as f32 / 255.0
        })
    }

    /// Decode `files` in order and stack the ones that succeed
    ///
    /// A file that fails to decode is logged and skipped; only a batch that cannot be
    /// stacked (mixed image sizes) fails the whole call.
    pub fn decode_batch(&self, files: &[ImageFile]) -> Result<DecodedBatch, LoaderError> {
        let mut images = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();

        for file in files {
            match self.decode(&file.path) {
                Ok(image) => {
                    log::debug!("Loaded image '{}' ({:?})", file.file_name, image.dim());
                    images.push(image);
                }
                Err(e) => {
                    log::warn!(
                        "Could not load image '{}'. Skipping. Error: {}",
                        file.file_name,
                        e
                    );
                    skipped.push(SkippedImage {
                        file_name: file.file_name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let batch = ImageBatch::from_images(&images)?;

        Ok(DecodedBatch { batch, skipped })
    }
}

impl Default for ImageDecoder {
    fn default() -> Self {
        Self::new()
    }
}
