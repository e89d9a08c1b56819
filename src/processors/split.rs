//! Dual-page split detection.
//!
//! A scanner sheet sometimes holds two page images stacked vertically. The
//! boundary between them is taken to be the most uniform row inside the
//! configured search window (by default the middle third of the sheet).
//! The detector always answers; [`SplitCandidate`] carries the variance
//! figures for callers that want to judge how convincing the seam is.

use image::DynamicImage;

use super::crop::crop_to_box;
use super::geometry::BoundingBox;
use super::projection::{row_variance_profile, to_luma};
use crate::core::validation::{validate_image_dimensions, validate_split_row};
use crate::core::{SegResult, SegmentError, SplitConfig};

/// The row chosen as split boundary together with its variance statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitCandidate {
    /// Absolute row index of the boundary.
    pub row: u32,
    /// Variance of the chosen row.
    pub variance: f64,
    /// Mean variance over the whole search window.
    pub mean_variance: f64,
}

impl SplitCandidate {
    /// Ratio of the seam variance to the window mean, 0 for a perfectly blank
    /// seam and 1 when the seam is no more uniform than an average row.
    pub fn relative_variance(&self) -> f64 {
        if self.mean_variance <= f64::EPSILON {
            return 0.0;
        }
        self.variance / self.mean_variance
    }
}

/// The two halves of a split sheet.
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// Rows `[0, split_row)` at full width.
    pub top: DynamicImage,
    /// Rows `[split_row, height)` at full width.
    pub bottom: DynamicImage,
    /// The row the image was cut at.
    pub split_row: u32,
}

/// Finds the minimum-variance row inside the search window.
///
/// # Errors
///
/// Returns `SegmentError::InvalidInput` for an image with zero width or
/// height, or when the search window covers no rows.
pub fn analyze_split_point(image: &DynamicImage, config: &SplitConfig) -> SegResult<SplitCandidate> {
    validate_image_dimensions(image, "split detection")?;
    let rows = config.window.rows(image.height());
    if rows.is_empty() {
        return Err(SegmentError::invalid_input(format!(
            "split search window is empty for image height {}",
            image.height()
        )));
    }

    let gray = to_luma(image);
    let profile = row_variance_profile(&gray, rows)?;
    let (offset, variance) = profile
        .argmin()
        .ok_or_else(|| SegmentError::invalid_input("row variance profile is empty"))?;

    let candidate = SplitCandidate {
        row: profile.row_start + offset as u32,
        variance,
        mean_variance: profile.mean(),
    };
    tracing::debug!(
        row = candidate.row,
        variance = candidate.variance,
        mean_variance = candidate.mean_variance,
        "split point detected"
    );
    Ok(candidate)
}

/// Returns the absolute row at which to cut a dual-page scan.
pub fn detect_split_point(image: &DynamicImage, config: &SplitConfig) -> SegResult<u32> {
    analyze_split_point(image, config).map(|candidate| candidate.row)
}

/// Cuts an image into `[0, row)` and `[row, height)`, both at full width.
///
/// # Errors
///
/// Returns `SegmentError::InvalidInput` when the image is empty or when
/// `row` would leave one of the halves without rows.
pub fn split_at_row(image: &DynamicImage, row: u32) -> SegResult<SplitResult> {
    validate_image_dimensions(image, "split")?;
    let (width, height) = (image.width(), image.height());
    validate_split_row(row, height)?;

    let top = crop_to_box(image, &BoundingBox::new(0, 0, width, row))?;
    let bottom = crop_to_box(image, &BoundingBox::new(0, row, width, height - row))?;
    Ok(SplitResult {
        top,
        bottom,
        split_row: row,
    })
}

/// Detects the split row and cuts the image there.
///
/// The detected row is moved into `1..height` so both halves keep at least
/// one row; on very short images the window can start at row 0.
///
/// # Errors
///
/// Returns `SegmentError::InvalidInput` for an empty image, an empty search
/// window, or an image of a single row.
pub fn split_page(image: &DynamicImage, config: &SplitConfig) -> SegResult<SplitResult> {
    let detected = detect_split_point(image, config)?;
    let last = image.height().saturating_sub(1).max(1);
    split_at_row(image, detected.clamp(1, last))
}
