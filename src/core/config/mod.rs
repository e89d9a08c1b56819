//! Configuration management for the segmentation engine.
//!
//! This module provides configuration types, validation traits, and JSON
//! loading for the split detector, the region extractors and the batch
//! worker pool.

pub mod errors;
pub mod parallel;
pub mod segmentation;

pub use errors::{ConfigError, ConfigValidator, ConfigValidatorExt};
pub use parallel::ParallelPolicy;
pub use segmentation::{
    EdgeConfig, PipelineConfig, SegmentationConfig, SplitConfig, SplitSearchWindow,
};
