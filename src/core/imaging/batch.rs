use ndarray::{s, stack, Array3, Array4, ArrayView3, Axis};
use crate::models::LoaderError;

/// A stack of normalized RGB images, shape `[N, H, W, 3]`
///
/// Pixel values are `f32` in `[0, 1]`. An empty batch has shape `[0, 0, 0, 3]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBatch {
    data: Array4<f32>,
}

impl ImageBatch {
    /// Number of channels every image carries
    pub const CHANNELS: usize = 3;

    /// Batch with no images
    pub fn empty() -> Self {
        Self {
            data: Array4::zeros((0, 0, 0, Self::CHANNELS)),
        }
    }

    /// Stack `[H, W, 3]` images along a new leading batch axis, keeping their order
    ///
    /// All images must share the same height and width.
    pub fn from_images(images: &[Array3<f32>]) -> Result<Self, LoaderError> {
        let first = match images.first() {
            Some(first) => first,
            None => return Ok(Self::empty()),
        };

        if let Some((idx, odd)) = images
            .iter()
            .enumerate()
            .find(|(_, img)| img.dim() != first.dim())
        {
            let (h0, w0, _) = first.dim();
            let (h, w, _) = odd.dim();
            return Err(LoaderError::BatchShape(format!(
                "image {} is {}x{} (HxW) but the batch is {}x{}",
                idx, h, w, h0, w0
            )));
        }

        let views: Vec<ArrayView3<f32>> = images.iter().map(|img| img.view()).collect();
        let data = stack(Axis(0), &views)
            .map_err(|e| LoaderError::BatchShape(e.to_string()))?;

        Ok(Self { data })
    }

    /// Number of images in the batch
    pub fn len(&self) -> usize {
        self.data.dim().0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(batch, height, width, channels)`
    pub fn dims(&self) -> (usize, usize, usize, usize) {
        self.data.dim()
    }

    /// View of the `index`-th image, shape `[H, W, 3]`
    pub fn image(&self, index: usize) -> Option<ArrayView3<'_, f32>> {
        if index < self.len() {
            Some(self.data.slice(s![index, .., .., ..]))
        } else {
            None
        }
    }

    /// Underlying tensor
    pub fn as_array(&self) -> &Array4<f32> {
        &self.data
    }

    pub fn into_array(self) -> Array4<f32> {
        self.data
    }
}

impl Default for ImageBatch {
    fn default() -> Self {
        Self::empty()
    }
}
