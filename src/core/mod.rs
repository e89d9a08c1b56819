//! The core module of the segmentation engine.
//!
//! This module contains the pieces every other module builds on:
//! - Configuration management and validation
//! - Constants used as configuration defaults
//! - Error handling
//! - Collaborator traits for loading and saving images
//! - Input validation helpers

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;
pub mod validation;

pub use config::{
    ConfigError, ConfigValidator, ConfigValidatorExt, EdgeConfig, ParallelPolicy, PipelineConfig,
    SegmentationConfig, SplitConfig, SplitSearchWindow,
};
pub use constants::*;
pub use errors::{ProcessingStage, SegResult, SegmentError};
pub use traits::{ImageSink, ImageSource};

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and formatting layer.
/// It's typically called at the start of an application to enable logging; the library
/// itself never installs a subscriber.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
