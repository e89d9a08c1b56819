//! Grayscale projection analysis.
//!
//! Reduces an image to one variance score per row. Rows that run through the
//! blank band between two stacked scans are nearly uniform and score close to
//! zero; rows through page content score high.

use std::ops::Range;

use image::{DynamicImage, GrayImage};

use crate::core::{SegResult, SegmentError};

/// Converts an image of any color type into 8-bit luminance.
pub fn to_luma(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

/// Per-row intensity variance over a contiguous band of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RowVarianceProfile {
    /// Absolute index of the first analyzed row.
    pub row_start: u32,
    /// Population variance of each row, indexed relative to `row_start`.
    pub variances: Vec<f64>,
}

impl RowVarianceProfile {
    /// Number of analyzed rows.
    pub fn len(&self) -> usize {
        self.variances.len()
    }

    /// Whether no rows were analyzed.
    pub fn is_empty(&self) -> bool {
        self.variances.is_empty()
    }

    /// Relative index and value of the smallest variance.
    ///
    /// The first occurrence wins ties. Returns `None` for an empty profile.
    pub fn argmin(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, &variance) in self.variances.iter().enumerate() {
            match best {
                Some((_, current)) if variance >= current => {}
                _ => best = Some((idx, variance)),
            }
        }
        best
    }

    /// Mean variance across the profile, or zero when empty.
    pub fn mean(&self) -> f64 {
        if self.variances.is_empty() {
            return 0.0;
        }
        self.variances.iter().sum::<f64>() / self.variances.len() as f64
    }
}

/// Population variance of a row of intensities.
fn row_variance(row: &[u8]) -> f64 {
    let n = row.len() as f64;
    let mean = row.iter().map(|&v| v as f64).sum::<f64>() / n;
    row.iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

/// Computes the variance of every row in `rows`.
///
/// # Errors
///
/// Returns `SegmentError::InvalidInput` when the image has zero width, when
/// `rows` is empty, or when it extends past the image height.
pub fn row_variance_profile(gray: &GrayImage, rows: Range<u32>) -> SegResult<RowVarianceProfile> {
    let (width, height) = gray.dimensions();
    if width == 0 {
        return Err(SegmentError::invalid_input(
            "cannot project an image of zero width",
        ));
    }
    if rows.is_empty() {
        return Err(SegmentError::invalid_input(format!(
            "row range {}..{} is empty for image height {}",
            rows.start, rows.end, height
        )));
    }
    if rows.end > height {
        return Err(SegmentError::invalid_input(format!(
            "row range {}..{} exceeds image height {}",
            rows.start, rows.end, height
        )));
    }

    let stride = width as usize;
    let raw = gray.as_raw();
    let variances = rows
        .clone()
        .map(|row| {
            let start = row as usize * stride;
            row_variance(&raw[start..start + stride])
        })
        .collect();

    Ok(RowVarianceProfile {
        row_start: rows.start,
        variances,
    })
}
