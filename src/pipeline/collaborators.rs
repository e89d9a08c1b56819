//! Disk-backed image source and sink.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::core::{ImageSink, ImageSource, ProcessingStage, SegResult, SegmentError};
use crate::utils::{load_image, save_image};

/// Loads images from the local filesystem.
///
/// Decoding falls back to content sniffing when the extension is wrong.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskImageSource;

impl ImageSource for DiskImageSource {
    fn load(&self, path: &Path) -> SegResult<DynamicImage> {
        load_image(path)
    }
}

/// Writes images below an output directory.
///
/// Relative destination paths are resolved against `output_dir`; absolute
/// ones are used unchanged.
#[derive(Debug, Clone)]
pub struct DiskImageSink {
    output_dir: PathBuf,
    create_dirs: bool,
}

impl DiskImageSink {
    /// Creates a sink that writes below `output_dir`, creating missing
    /// directories on demand.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            create_dirs: true,
        }
    }

    /// Sets whether missing parent directories are created before writing.
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// The directory relative paths are resolved against.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where a destination path ends up on disk.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.output_dir.join(path)
        }
    }
}

impl ImageSink for DiskImageSink {
    fn save(&self, image: &DynamicImage, path: &Path, quality: u8) -> SegResult<()> {
        let target = self.resolve(path);
        if self.create_dirs {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SegmentError::processing_error(
                        ProcessingStage::Encoding,
                        format!("cannot create output directory {}", parent.display()),
                        e,
                    )
                })?;
            }
        }
        save_image(image, &target, quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_sink_resolves_relative_paths() {
        let sink = DiskImageSink::new("/out");
        assert_eq!(sink.resolve(Path::new("a.jpg")), PathBuf::from("/out/a.jpg"));
        assert_eq!(sink.resolve(Path::new("/abs/a.jpg")), PathBuf::from("/abs/a.jpg"));
    }

    #[test]
    fn test_sink_creates_directories_and_source_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DiskImageSink::new(dir.path().join("nested"));
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(12, 8, Luma([90])));
        sink.save(&image, Path::new("deeper/crop.jpg"), 95).unwrap();

        let written = dir.path().join("nested/deeper/crop.jpg");
        let loaded = DiskImageSource.load(&written).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (12, 8));
    }

    #[test]
    fn test_sink_without_create_dirs_fails_on_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DiskImageSink::new(dir.path().join("missing")).with_create_dirs(false);
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([0])));
        let err = sink.save(&image, Path::new("x.jpg"), 95).unwrap_err();
        assert!(matches!(err, SegmentError::ImageSave { .. }));
    }
}
