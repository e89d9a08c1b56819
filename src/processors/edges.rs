//! Edge masks for separating multiple illustrations on one page.
//!
//! Plain thresholding loses light or gradient-filled artwork. Tracing edges
//! instead and dilating them closes each illustration's outline into a single
//! blob whose outer contour can be measured like a thresholded one.

use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::dilate;

use crate::core::EdgeConfig;

/// Builds a binary mask (edges = 255) from a grayscale image.
///
/// The image is optionally blurred, passed through Canny hysteresis on the
/// gradient magnitude, and the edges are dilated with a square structuring
/// element `dilation_iterations` times.
pub fn edge_mask(gray: &GrayImage, config: &EdgeConfig) -> GrayImage {
    let edges = match config.blur_sigma {
        Some(sigma) => canny(&gaussian_blur_f32(gray, sigma), config.canny_low, config.canny_high),
        None => canny(gray, config.canny_low, config.canny_high),
    };

    if config.dilation_radius == 0 {
        return edges;
    }
    (0..config.dilation_iterations).fold(edges, |mask, _| {
        dilate(&mask, Norm::LInf, config.dilation_radius)
    })
}
