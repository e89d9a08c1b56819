//! Constants used throughout the segmentation engine.
//!
//! These are the defaults behind the configuration types in
//! [`crate::core::config`]; change them through configuration rather than here.

/// Intensity above which a pixel is treated as paper background (0-255 scale).
pub const DEFAULT_THRESHOLD_VALUE: u8 = 240;

/// Minimum contour area, in square pixels, below which a region is noise.
///
/// Rejects stray specks, isolated glyphs and scanner dust.
pub const DEFAULT_MIN_AREA: f64 = 5000.0;

/// Margin, in pixels, added on every side of a detected region before cropping.
pub const DEFAULT_PADDING: u32 = 10;

/// Lower gradient-magnitude threshold for edge hysteresis.
pub const DEFAULT_CANNY_LOW: f32 = 30.0;

/// Upper gradient-magnitude threshold for edge hysteresis.
pub const DEFAULT_CANNY_HIGH: f32 = 150.0;

/// Gaussian sigma applied before edge detection.
pub const DEFAULT_BLUR_SIGMA: f32 = 1.1;

/// Chebyshev radius of the dilation structuring element (5x5 square).
pub const DEFAULT_DILATION_RADIUS: u8 = 2;

/// Number of dilation passes used to bridge gaps between edge fragments.
pub const DEFAULT_DILATION_ITERATIONS: u32 = 2;

/// JPEG quality used when writing cropped images.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;
