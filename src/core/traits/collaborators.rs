//! Image source and sink contracts.
//!
//! ```text
//! ┌─────────────┐    ┌──────────────────────┐    ┌─────────────┐
//! │ ImageSource │───▶│ segmentation engine  │───▶│ ImageSink   │
//! │ • load      │    │ split / single/multi │    │ • save      │
//! └─────────────┘    └──────────────────────┘    └─────────────┘
//! ```

use std::fmt::Debug;
use std::path::Path;

use image::DynamicImage;

use crate::core::SegResult;

/// Supplies decoded images.
///
/// Implementations must report a path that cannot be decoded as an image with
/// [`SegmentError::ImageLoad`](crate::core::SegmentError::ImageLoad) so that
/// decode failures stay distinguishable from engine failures.
pub trait ImageSource: Send + Sync + Debug {
    /// Loads and decodes the image at `path`.
    fn load(&self, path: &Path) -> SegResult<DynamicImage>;
}

/// Accepts result images and persists them.
pub trait ImageSink: Send + Sync + Debug {
    /// Encodes `image` and writes it to `path`.
    ///
    /// # Arguments
    ///
    /// * `image` - The cropped or split image to write.
    /// * `path` - Destination path; the extension selects the format.
    /// * `quality` - Encoder quality (1-100) for lossy formats.
    fn save(&self, image: &DynamicImage, path: &Path, quality: u8) -> SegResult<()>;
}
