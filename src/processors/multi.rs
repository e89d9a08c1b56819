//! Multi-region extraction.
//!
//! Pages holding several photographs or illustrations are split into one crop
//! per illustration. Regions are found on a dilated edge mask rather than a
//! threshold so light artwork is not lost, then ordered top to bottom.

use image::DynamicImage;

use super::crop::crop_to_box;
use super::edges::edge_mask;
use super::foreground::find_content_regions;
use super::geometry::ContentRegion;
use super::projection::to_luma;
use crate::core::validation::validate_image_dimensions;
use crate::core::{SegResult, SegmentationConfig};

/// One crop produced by [`extract_multiple_regions`].
#[derive(Debug, Clone)]
pub struct SegmentedRegion {
    /// 1-based position in reading order.
    pub index: usize,
    /// The region that was cropped.
    pub region: ContentRegion,
    /// Pixels inside the region's padded box.
    pub image: DynamicImage,
}

/// All regions found on a page, ordered by their top edge.
#[derive(Debug, Clone, Default)]
pub struct SegmentationResult {
    /// Crops in reading order.
    pub regions: Vec<SegmentedRegion>,
}

impl SegmentationResult {
    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the page yielded no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterates over the regions in reading order.
    pub fn iter(&self) -> std::slice::Iter<'_, SegmentedRegion> {
        self.regions.iter()
    }
}

impl<'a> IntoIterator for &'a SegmentationResult {
    type Item = &'a SegmentedRegion;
    type IntoIter = std::slice::Iter<'a, SegmentedRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

/// Sorts regions by top edge, then left edge.
pub fn sort_reading_order(regions: &mut [ContentRegion]) {
    regions.sort_by_key(|r| (r.bbox.y, r.bbox.x));
}

/// Finds every illustration on a page and crops each one.
///
/// An empty result is not an error: a page with nothing large enough simply
/// yields no crops.
///
/// # Errors
///
/// Returns `SegmentError::InvalidInput` for an image with zero width or
/// height, or a processing error if a crop cannot be taken.
pub fn extract_multiple_regions(
    image: &DynamicImage,
    config: &SegmentationConfig,
) -> SegResult<SegmentationResult> {
    validate_image_dimensions(image, "multi-region extraction")?;
    let mask = edge_mask(&to_luma(image), &config.edges);
    let mut regions = find_content_regions(&mask, config);
    sort_reading_order(&mut regions);

    let regions = regions
        .into_iter()
        .enumerate()
        .map(|(i, region)| {
            crop_to_box(image, &region.bbox).map(|cropped| SegmentedRegion {
                index: i + 1,
                region,
                image: cropped,
            })
        })
        .collect::<SegResult<Vec<_>>>()?;

    tracing::debug!(regions = regions.len(), "multi-region extraction finished");
    Ok(SegmentationResult { regions })
}
