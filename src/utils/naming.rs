//! Output file naming.
//!
//! Output names are derived from the source file stem. Region indices are
//! 1-based and follow reading order.

use std::path::Path;

/// Extension used for every crop written by the pipeline.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// File stem of `source`, or `"image"` when it has none.
pub fn source_stem(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "image".to_string())
}

/// `{stem}_top.jpg`
pub fn top_half_name(source: &Path) -> String {
    format!("{}_top.{OUTPUT_EXTENSION}", source_stem(source))
}

/// `{stem}_bottom.jpg`
pub fn bottom_half_name(source: &Path) -> String {
    format!("{}_bottom.{OUTPUT_EXTENSION}", source_stem(source))
}

/// `{stem}_image{index}.jpg` for the `index`-th illustration of a page.
pub fn region_image_name(source: &Path, index: usize) -> String {
    format!("{}_image{index}.{OUTPUT_EXTENSION}", source_stem(source))
}

/// `{stem}.jpg`, the name of a page cropped to its main content.
pub fn single_region_name(source: &Path) -> String {
    format!("{}.{OUTPUT_EXTENSION}", source_stem(source))
}

/// Label of the `index`-th region in reading order.
pub fn region_label(index: usize) -> String {
    format!("region_{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_follow_source_stem() {
        let source = Path::new("/scans/book 1/page_007.png");
        assert_eq!(top_half_name(source), "page_007_top.jpg");
        assert_eq!(bottom_half_name(source), "page_007_bottom.jpg");
        assert_eq!(region_image_name(source, 3), "page_007_image3.jpg");
        assert_eq!(single_region_name(source), "page_007.jpg");
    }

    #[test]
    fn test_region_label() {
        assert_eq!(region_label(1), "region_1");
        assert_eq!(region_label(12), "region_12");
    }

    #[test]
    fn test_stem_fallback() {
        assert_eq!(source_stem(Path::new("")), "image");
        assert_eq!(source_stem(Path::new("archive.tar.gz")), "archive.tar");
    }
}
