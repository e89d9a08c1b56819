//! Image decoding and encoding helpers.
//!
//! Loading tolerates files whose extension does not match their content, and
//! saving writes JPEG at an explicit quality.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageReader};

use crate::core::{SegResult, SegmentError};

/// Loads an image from disk.
///
/// The decoder is first chosen from the file extension. If that fails to
/// decode, the file is reopened and the format is sniffed from its content,
/// so JPEG bytes stored in a `.png` file still load.
///
/// # Arguments
///
/// * `path` - Path of the image file to load
///
/// # Errors
///
/// Returns `SegmentError::ImageLoad` carrying `path` when the file cannot be
/// read or decoded.
pub fn load_image(path: &Path) -> SegResult<DynamicImage> {
    load_dynamic_image(path).map_err(|err| SegmentError::image_load(path, err))
}

fn load_dynamic_image(path: &Path) -> Result<DynamicImage, ImageError> {
    match image::open(path) {
        Ok(img) => Ok(img),
        Err(err) if should_retry(&err) => {
            tracing::warn!(
                "Standard decode failed for {} ({err}). Retrying with format sniffing.",
                path.display()
            );
            decode_with_guessed_format(path)
        }
        Err(err) => Err(err),
    }
}

fn should_retry(err: &ImageError) -> bool {
    matches!(err, ImageError::Decoding(_) | ImageError::Unsupported(_))
}

fn decode_with_guessed_format(path: &Path) -> Result<DynamicImage, ImageError> {
    let file = File::open(path)?;
    let reader = ImageReader::new(BufReader::new(file)).with_guessed_format()?;
    reader.decode()
}

/// Whether `path` names a JPEG file.
pub fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

/// Saves an image, encoding JPEG at the given quality.
///
/// JPEG has no alpha channel, so color images are flattened to RGB and gray
/// images to 8-bit luma before encoding. Other extensions are written with
/// the format the `image` crate infers from the path; `quality` is ignored
/// for them.
///
/// # Arguments
///
/// * `image` - The image to write
/// * `path` - Destination file; its parent directory must exist
/// * `quality` - JPEG quality in `1..=100`
///
/// # Errors
///
/// Returns `SegmentError::ImageSave` carrying `path` on encode or write
/// failure.
pub fn save_image(image: &DynamicImage, path: &Path, quality: u8) -> SegResult<()> {
    write_image(image, path, quality).map_err(|err| SegmentError::image_save(path, err))
}

fn write_image(image: &DynamicImage, path: &Path, quality: u8) -> Result<(), ImageError> {
    if !is_jpeg_path(path) {
        return image.save(path);
    }

    let flattened = if image.color().has_color() {
        DynamicImage::ImageRgb8(image.to_rgb8())
    } else {
        DynamicImage::ImageLuma8(image.to_luma8())
    };
    let mut writer = BufWriter::new(File::create(path)?);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100));
    flattened.write_with_encoder(encoder)
}
