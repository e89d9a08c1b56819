//! Tuning parameters for split detection and region extraction.
//!
//! The engine functions are pure and take these values explicitly; nothing in
//! the crate keeps configuration as mutable instance state.

use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{ConfigError, ConfigValidator};
use super::parallel::ParallelPolicy;
use crate::core::constants::{
    DEFAULT_BLUR_SIGMA, DEFAULT_CANNY_HIGH, DEFAULT_CANNY_LOW, DEFAULT_DILATION_ITERATIONS,
    DEFAULT_DILATION_RADIUS, DEFAULT_MIN_AREA, DEFAULT_PADDING, DEFAULT_THRESHOLD_VALUE,
};

/// Vertical band of an image, expressed as fractions of its height, in which
/// the split row is searched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitSearchWindow {
    /// Start of the band (inclusive). Default: 1/3
    #[serde(default = "SplitSearchWindow::default_start")]
    pub start_fraction: f64,
    /// End of the band (exclusive). Default: 2/3
    #[serde(default = "SplitSearchWindow::default_end")]
    pub end_fraction: f64,
}

impl SplitSearchWindow {
    /// Absorbs floating point error so that `1/3 * 3k` floors to `k`.
    const ROUNDING_SLACK: f64 = 1e-9;

    /// Creates a window from two fractions of the image height.
    pub fn new(start_fraction: f64, end_fraction: f64) -> Self {
        Self {
            start_fraction,
            end_fraction,
        }
    }

    /// Row range covered by this window for an image of the given height.
    ///
    /// With the default fractions this is `height / 3 .. 2 * height / 3`.
    pub fn rows(&self, height: u32) -> Range<u32> {
        let at = |fraction: f64| {
            let row = (height as f64 * fraction + Self::ROUNDING_SLACK).floor();
            (row.max(0.0) as u32).min(height)
        };
        at(self.start_fraction)..at(self.end_fraction)
    }

    fn default_start() -> f64 {
        1.0 / 3.0
    }

    fn default_end() -> f64 {
        2.0 / 3.0
    }
}

impl Default for SplitSearchWindow {
    fn default() -> Self {
        Self::new(Self::default_start(), Self::default_end())
    }
}

/// Configuration for dual-page split detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Band searched for the separating row.
    #[serde(default)]
    pub window: SplitSearchWindow,
}

impl SplitConfig {
    /// Set the search window.
    pub fn with_window(mut self, window: SplitSearchWindow) -> Self {
        self.window = window;
        self
    }
}

impl ConfigValidator for SplitConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let SplitSearchWindow {
            start_fraction,
            end_fraction,
        } = self.window;
        if !(start_fraction.is_finite() && end_fraction.is_finite())
            || start_fraction < 0.0
            || end_fraction > 1.0
            || start_fraction >= end_fraction
        {
            return Err(ConfigError::InvalidConfig {
                message: format!(
                    "split window must satisfy 0 <= start < end <= 1, got [{}, {})",
                    start_fraction, end_fraction
                ),
            });
        }
        Ok(())
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}

/// Edge detection parameters used by the multi-region splitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// Standard deviation of the Gaussian blur applied before edge detection.
    /// None disables the extra blur.
    /// Default: Some(1.1), close to a 5x5 kernel
    #[serde(default = "EdgeConfig::default_blur_sigma")]
    pub blur_sigma: Option<f32>,

    /// Lower hysteresis threshold on gradient magnitude. Default: 30
    #[serde(default = "EdgeConfig::default_canny_low")]
    pub canny_low: f32,

    /// Upper hysteresis threshold on gradient magnitude. Default: 150
    #[serde(default = "EdgeConfig::default_canny_high")]
    pub canny_high: f32,

    /// Chebyshev radius of the square dilation element (2 gives a 5x5 square).
    /// Default: 2
    #[serde(default = "EdgeConfig::default_dilation_radius")]
    pub dilation_radius: u8,

    /// Number of dilation passes. Default: 2
    #[serde(default = "EdgeConfig::default_dilation_iterations")]
    pub dilation_iterations: u32,
}

impl EdgeConfig {
    fn default_blur_sigma() -> Option<f32> {
        Some(DEFAULT_BLUR_SIGMA)
    }

    fn default_canny_low() -> f32 {
        DEFAULT_CANNY_LOW
    }

    fn default_canny_high() -> f32 {
        DEFAULT_CANNY_HIGH
    }

    fn default_dilation_radius() -> u8 {
        DEFAULT_DILATION_RADIUS
    }

    fn default_dilation_iterations() -> u32 {
        DEFAULT_DILATION_ITERATIONS
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            blur_sigma: Self::default_blur_sigma(),
            canny_low: Self::default_canny_low(),
            canny_high: Self::default_canny_high(),
            dilation_radius: Self::default_dilation_radius(),
            dilation_iterations: Self::default_dilation_iterations(),
        }
    }
}

impl ConfigValidator for EdgeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(sigma) = self.blur_sigma {
            self.validate_positive_f32(sigma, "blur_sigma")?;
        }
        self.validate_f32_range(self.canny_low, 0.0, f32::MAX, "canny_low")?;
        self.validate_f32_range(self.canny_high, self.canny_low, f32::MAX, "canny_high")?;
        Ok(())
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}

/// Configuration shared by the single-region and multi-region extractors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Minimum contour area, in square pixels, for a region to count as content.
    /// Default: 5000
    #[serde(default = "SegmentationConfig::default_min_area")]
    pub min_area: f64,

    /// Margin added on every side of a detected box before clamping. Default: 10
    #[serde(default = "SegmentationConfig::default_padding")]
    pub padding: u32,

    /// Intensities above this value are background. Default: 240
    #[serde(default = "SegmentationConfig::default_threshold_value")]
    pub threshold_value: u8,

    /// Edge detection parameters for the multi-region path.
    #[serde(default)]
    pub edges: EdgeConfig,
}

impl SegmentationConfig {
    /// Create a new SegmentationConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum region area.
    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the binarization threshold.
    pub fn with_threshold_value(mut self, threshold_value: u8) -> Self {
        self.threshold_value = threshold_value;
        self
    }

    /// Set the edge detection parameters.
    pub fn with_edges(mut self, edges: EdgeConfig) -> Self {
        self.edges = edges;
        self
    }

    fn default_min_area() -> f64 {
        DEFAULT_MIN_AREA
    }

    fn default_padding() -> u32 {
        DEFAULT_PADDING
    }

    fn default_threshold_value() -> u8 {
        DEFAULT_THRESHOLD_VALUE
    }
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_area: Self::default_min_area(),
            padding: Self::default_padding(),
            threshold_value: Self::default_threshold_value(),
            edges: EdgeConfig::default(),
        }
    }
}

impl ConfigValidator for SegmentationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.validate_non_negative_f64(self.min_area, "min_area")?;
        self.edges.validate()
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}

/// Everything a batch run needs, loadable from a JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Dual-page split detection.
    #[serde(default)]
    pub split: SplitConfig,
    /// Single- and multi-region extraction.
    #[serde(default)]
    pub segmentation: SegmentationConfig,
    /// Worker pool sizing.
    #[serde(default)]
    pub parallel: ParallelPolicy,
}

impl PipelineConfig {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl ConfigValidator for PipelineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.split.validate()?;
        self.segmentation.validate()?;
        self.parallel.validate()
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}
