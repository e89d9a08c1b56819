//! Binary foreground extraction.
//!
//! Pages are dark ink on light paper. Thresholding separates the two, and the
//! outer contours of the resulting foreground blobs become candidate content
//! regions. Both extraction paths (threshold and edge based) share
//! [`find_content_regions`] for contour measurement, the area floor and the
//! padding rule.

use image::{DynamicImage, GrayImage};
use imageproc::contours::find_contours;
use imageproc::contrast::{ThresholdType, threshold};

use super::geometry::{BoundingBox, ContentRegion, contour_area};
use super::projection::to_luma;
use crate::core::validation::validate_image_dimensions;
use crate::core::{SegResult, SegmentationConfig};

/// Marks pixels at or below `threshold_value` as foreground (255) and
/// brighter pixels as background (0).
pub fn binarize(gray: &GrayImage, threshold_value: u8) -> GrayImage {
    threshold(gray, threshold_value, ThresholdType::BinaryInverted)
}

/// Measures the outer contours of a binary mask and keeps the ones that count
/// as content.
///
/// Only top-level contours count: holes and blobs nested inside another blob
/// always have a parent and are ignored. The border type is not consulted
/// because `find_contours` can label a blob touching column 0 as a hole
/// without a parent. Each surviving
/// region has `area >= min_area`; its box is the contour's bounding box padded
/// by `padding` and clamped to the mask. Regions are returned in contour scan
/// order (top-to-bottom, left-to-right by first pixel).
pub fn find_content_regions(mask: &GrayImage, config: &SegmentationConfig) -> Vec<ContentRegion> {
    let (width, height) = mask.dimensions();
    let contours = find_contours::<u32>(mask);
    let total = contours.len();

    let regions: Vec<ContentRegion> = contours
        .iter()
        .filter(|c| c.parent.is_none())
        .filter_map(|contour| {
            let area = contour_area(contour);
            if area < config.min_area {
                return None;
            }
            let bbox = BoundingBox::from_contour(contour)?;
            Some(ContentRegion::new(
                bbox.pad_and_clamp(config.padding, width, height),
                area,
            ))
        })
        .collect();

    tracing::debug!(
        contours = total,
        kept = regions.len(),
        min_area = config.min_area,
        "content regions filtered"
    );
    regions
}

/// Thresholds an image and returns its content regions.
///
/// An empty vector means no content was detected; callers decide whether that
/// is an error.
///
/// # Errors
///
/// Returns `SegmentError::InvalidInput` for an image with zero width or height.
pub fn extract_foreground_regions(
    image: &DynamicImage,
    config: &SegmentationConfig,
) -> SegResult<Vec<ContentRegion>> {
    validate_image_dimensions(image, "foreground extraction")?;
    let mask = binarize(&to_luma(image), config.threshold_value);
    Ok(find_content_regions(&mask, config))
}
