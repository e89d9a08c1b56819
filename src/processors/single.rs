//! Single-region cropping.
//!
//! Trims the paper margin around a page's content by cropping to the largest
//! foreground region.

use image::DynamicImage;

use super::crop::crop_to_box;
use super::foreground::extract_foreground_regions;
use super::geometry::ContentRegion;
use crate::core::{SegResult, SegmentError, SegmentationConfig};

/// The largest content region of a page and its crop.
#[derive(Debug, Clone)]
pub struct ExtractedRegion {
    /// The region that was cropped.
    pub region: ContentRegion,
    /// Pixels inside the region's padded box.
    pub image: DynamicImage,
}

/// Picks the region with the largest contour area; the earliest wins ties.
pub fn largest_region(regions: &[ContentRegion]) -> Option<ContentRegion> {
    regions.iter().copied().fold(None, |best, region| match best {
        Some(current) if region.area <= current.area => Some(current),
        _ => Some(region),
    })
}

/// Crops an image to its largest content region.
///
/// # Errors
///
/// * `SegmentError::InvalidInput` for an image with zero width or height.
/// * `SegmentError::NoContentFound` when no region reaches `min_area`.
pub fn extract_single_region(
    image: &DynamicImage,
    config: &SegmentationConfig,
) -> SegResult<ExtractedRegion> {
    let regions = extract_foreground_regions(image, config)?;
    let region = largest_region(&regions).ok_or_else(|| {
        SegmentError::no_content(format!(
            "no foreground region of at least {} px in {}x{} image",
            config.min_area,
            image.width(),
            image.height()
        ))
    })?;

    tracing::debug!(
        candidates = regions.len(),
        x = region.bbox.x,
        y = region.bbox.y,
        width = region.bbox.width,
        height = region.bbox.height,
        "largest region selected"
    );
    let cropped = crop_to_box(image, &region.bbox)?;
    Ok(ExtractedRegion {
        region,
        image: cropped,
    })
}
