//! Utility functions for the segmentation pipeline.
//!
//! This module provides image loading and saving helpers and the output naming
//! scheme used when crops are written to disk.

pub mod image;
pub mod naming;

pub use self::image::{is_jpeg_path, load_image, save_image};
pub use naming::{
    bottom_half_name, region_image_name, region_label, single_region_name,
    source_stem, top_half_name,
};
