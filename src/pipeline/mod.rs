//! The batch pipeline module.
//!
//! This module runs the segmentation engine over many images: it defines the
//! per-image jobs, the bounded worker pool that executes them, disk-backed
//! image collaborators and the reporting hooks used for progress output.

pub mod batch;
pub mod collaborators;
pub mod jobs;
pub mod reporting;
pub mod stats;

pub use batch::BatchProcessor;
pub use collaborators::{DiskImageSink, DiskImageSource};
pub use jobs::{JobKind, JobOutcome, PageJob, WrittenOutput};
pub use reporting::{NoopReporter, SegmentationReporter, TracingReporter};
pub use stats::BatchStats;
