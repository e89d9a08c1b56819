//! Input validation for images entering the engine.

use image::DynamicImage;

use crate::core::SegmentError;

/// Validates that an image has non-zero width and height.
///
/// # Arguments
///
/// * `image` - The image to check.
/// * `context` - Operation name used in the error message.
pub fn validate_image_dimensions(image: &DynamicImage, context: &str) -> Result<(), SegmentError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(SegmentError::InvalidInput {
            message: format!(
                "{}: image dimensions must be positive, got {}x{}",
                context, width, height
            ),
        });
    }
    Ok(())
}

/// Validates that `row` splits an image of `height` rows into two non-empty parts.
pub fn validate_split_row(row: u32, height: u32) -> Result<(), SegmentError> {
    if row == 0 || row >= height {
        return Err(SegmentError::InvalidInput {
            message: format!(
                "split row must be in range [1, {}), got: {}",
                height, row
            ),
        });
    }
    Ok(())
}
