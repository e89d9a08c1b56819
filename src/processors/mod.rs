//! Image analysis for scanned document pages.
//!
//! This module provides the segmentation engine itself. Every function takes an
//! image and an explicit configuration value and returns new images or
//! measurements; nothing is mutated in place and no state survives a call.
//!
//! # Modules
//!
//! * `projection` - Row variance profiles over grayscale images
//! * `split` - Dual-page split detection and splitting
//! * `foreground` - Threshold based content region extraction
//! * `single` - Cropping a page to its largest content region
//! * `edges` - Edge masks for the multi-region path
//! * `multi` - Extracting every illustration on a page
//! * `geometry` - Bounding boxes, regions and contour measurement
//! * `crop` - Bounds-checked cropping

pub mod crop;
pub mod edges;
pub mod foreground;
mod geometry;
pub mod multi;
pub mod projection;
pub mod single;
pub mod split;

pub use crop::{CropError, crop_to_box};
pub use edges::edge_mask;
pub use foreground::{binarize, extract_foreground_regions, find_content_regions};
pub use geometry::*;
pub use multi::{SegmentationResult, SegmentedRegion, extract_multiple_regions, sort_reading_order};
pub use projection::{RowVarianceProfile, row_variance_profile, to_luma};
pub use single::{ExtractedRegion, extract_single_region, largest_region};
pub use split::{
    SplitCandidate, SplitResult, analyze_split_point, detect_split_point, split_at_row, split_page,
};
