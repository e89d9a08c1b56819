//! # pageseg
//!
//! Segmentation of scanned document pages. Finds the seam between two pages
//! scanned onto one sheet, crops a page to its main content, and cuts out every
//! illustration on a page in reading order.
//!
//! ## Features
//!
//! - Dual-page splitting at the most uniform row of the middle third
//! - Threshold based content cropping with padding and clamping
//! - Edge based multi-illustration extraction
//! - Batch processing on a bounded worker pool
//! - JSON configuration with validation
//!
//! ## Modules
//!
//! * [`core`] - Configuration, errors, collaborator traits and validation
//! * [`processors`] - The segmentation engine
//! * [`pipeline`] - Batch jobs, worker pool, disk collaborators and reporting
//! * [`utils`] - Image loading/saving and output naming
//!
//! ## Quick Start
//!
//! ### Single image
//!
//! ```rust,no_run
//! use pageseg::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let image = load_image(Path::new("scan.jpg"))?;
//!
//! let halves = split_page(&image, &SplitConfig::default())?;
//! println!("split at row {}", halves.split_row);
//!
//! let illustrations = extract_multiple_regions(&image, &SegmentationConfig::default())?;
//! for region in &illustrations {
//!     println!("region_{} at {:?}", region.index, region.region.bbox);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Batch
//!
//! ```rust,no_run
//! use pageseg::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::from_json_str(r#"{ "segmentation": { "min_area": 8000 } }"#)?;
//! let processor = BatchProcessor::new(
//!     config,
//!     Arc::new(DiskImageSource),
//!     Arc::new(DiskImageSink::new("out")),
//! )?
//! .with_reporter(Arc::new(TracingReporter));
//!
//! let jobs = PageJob::for_paths(&["p1.png", "p2.png"], JobKind::ExtractSingle);
//! let (outcomes, stats) = processor.run_with_stats(&jobs);
//! println!("{stats}");
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod core;

pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use pageseg::prelude::*;
/// ```
///
/// Included items focus on the most common tasks:
/// - Engine entry points (`detect_split_point`, `split_at_row`, `extract_single_region`, ...)
/// - Configuration (`SegmentationConfig`, `SplitConfig`, `PipelineConfig`)
/// - Batch processing (`BatchProcessor`, `PageJob`, `JobKind`)
/// - Essential error and result types (`SegmentError`, `SegResult`)
/// - Basic image loading (`load_image`)
pub mod prelude {
    // Engine
    pub use crate::processors::{
        BoundingBox, ContentRegion, SegmentationResult, SplitResult, detect_split_point,
        extract_multiple_regions, extract_single_region, split_at_row, split_page,
    };

    // Configuration
    pub use crate::core::{PipelineConfig, SegmentationConfig, SplitConfig};

    // Batch
    pub use crate::pipeline::{
        BatchProcessor, DiskImageSink, DiskImageSource, JobKind, PageJob, TracingReporter,
    };

    // Error Handling (essential)
    pub use crate::core::{SegResult, SegmentError};

    // Image Utility (minimal)
    pub use crate::utils::{load_image, save_image};
}
