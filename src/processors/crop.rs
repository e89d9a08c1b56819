//! Cropping of regions out of source images.
//!
//! Crops are copied into new buffers; the source image is never modified.

use image::DynamicImage;
use thiserror::Error;

use super::geometry::BoundingBox;
use crate::core::{ProcessingStage, SegResult, SegmentError};

/// Reasons a crop rectangle cannot be applied to an image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CropError {
    /// The rectangle has zero width or height.
    #[error("crop size must be positive, got {width}x{height}")]
    InvalidCropSize { width: u32, height: u32 },

    /// The rectangle extends past the image.
    #[error("crop {bbox:?} exceeds image bounds {image_width}x{image_height}")]
    CropOutOfBounds {
        bbox: BoundingBox,
        image_width: u32,
        image_height: u32,
    },
}

/// Checks that `bbox` is a non-empty rectangle inside a `width x height` image.
pub fn validate_crop_bounds(bbox: &BoundingBox, width: u32, height: u32) -> Result<(), CropError> {
    if bbox.width == 0 || bbox.height == 0 {
        return Err(CropError::InvalidCropSize {
            width: bbox.width,
            height: bbox.height,
        });
    }
    if !bbox.fits_within(width, height) {
        return Err(CropError::CropOutOfBounds {
            bbox: *bbox,
            image_width: width,
            image_height: height,
        });
    }
    Ok(())
}

/// Copies the pixels inside `bbox` into a new image of the same color type.
///
/// # Errors
///
/// Returns `SegmentError::Processing` at the cropping stage when the box is
/// empty or not fully inside the image.
pub fn crop_to_box(image: &DynamicImage, bbox: &BoundingBox) -> SegResult<DynamicImage> {
    validate_crop_bounds(bbox, image.width(), image.height()).map_err(|e| {
        SegmentError::processing_error(
            ProcessingStage::Cropping,
            format!("cannot crop {}x{} image", image.width(), image.height()),
            e,
        )
    })?;
    Ok(image.crop_imm(bbox.x, bbox.y, bbox.width, bbox.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let mut img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
        img.put_pixel(20, 30, Rgb([10, 20, 30]));
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_crop_copies_pixels() {
        let img = create_test_image(100, 80);
        let cropped = crop_to_box(&img, &BoundingBox::new(20, 30, 10, 5)).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (10, 5));
        assert_eq!(cropped.to_rgb8().get_pixel(0, 0), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_crop_full_image() {
        let img = create_test_image(100, 80);
        let cropped = crop_to_box(&img, &BoundingBox::new(0, 0, 100, 80)).unwrap();
        assert_eq!(cropped.to_rgb8(), img.to_rgb8());
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let img = create_test_image(100, 80);
        let err = crop_to_box(&img, &BoundingBox::new(90, 0, 20, 10)).unwrap_err();
        assert!(matches!(
            err,
            SegmentError::Processing {
                kind: ProcessingStage::Cropping,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_crop_rejected() {
        assert_eq!(
            validate_crop_bounds(&BoundingBox::new(0, 0, 0, 10), 100, 80),
            Err(CropError::InvalidCropSize {
                width: 0,
                height: 10
            })
        );
    }
}
