//! Error types for the segmentation engine.
//!
//! Every operation fails fast for the image it was given. The variants map to
//! the three failure classes callers care about: malformed input, pages
//! without any detectable content, and images that could not be decoded.
//! Lower-level failures (encoding, cropping, I/O) are wrapped with the stage
//! they occurred in.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Stages of the segmentation pipeline, used to attribute processing errors.
///
/// Analysis stages (grayscale, projection, thresholding, edges, contours) are
/// infallible once the input image is validated; only the stages below wrap
/// lower-level errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Cropping regions out of the source image.
    Cropping,
    /// Preparing the destination of a result image.
    Encoding,
    /// Batch scheduling.
    BatchProcessing,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::Cropping => write!(f, "cropping"),
            ProcessingStage::Encoding => write!(f, "encoding"),
            ProcessingStage::BatchProcessing => write!(f, "batch processing"),
        }
    }
}

/// Errors produced by the segmentation engine and its collaborators.
#[derive(Error, Debug)]
pub enum SegmentError {
    /// The input image or a parameter derived from it is unusable.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// No foreground region survived filtering on the single-region path.
    #[error("no content found: {context}")]
    NoContentFound {
        /// Describes which image or search produced no content.
        context: String,
    },

    /// The image source could not decode the file at `path`.
    #[error("failed to decode image {}", path.display())]
    ImageLoad {
        /// The path that failed to decode.
        path: PathBuf,
        /// The decoder error.
        #[source]
        source: image::ImageError,
    },

    /// The image sink could not encode or write the file at `path`.
    #[error("failed to save image {}", path.display())]
    ImageSave {
        /// The destination path.
        path: PathBuf,
        /// The encoder error.
        #[source]
        source: image::ImageError,
    },

    /// A processing stage failed.
    #[error("{kind} failed: {context}")]
    Processing {
        /// The stage of processing where the error occurred.
        kind: ProcessingStage,
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configuration value is out of range.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

/// Convenient result alias for segmentation operations.
pub type SegResult<T> = Result<T, SegmentError>;

impl SegmentError {
    /// Creates an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a `NoContentFound` error.
    pub fn no_content(context: impl Into<String>) -> Self {
        Self::NoContentFound {
            context: context.into(),
        }
    }

    /// Creates an `ImageLoad` error for the given path.
    pub fn image_load(path: &Path, source: image::ImageError) -> Self {
        Self::ImageLoad {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an `ImageSave` error for the given path.
    pub fn image_save(path: &Path, source: image::ImageError) -> Self {
        Self::ImageSave {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a `Processing` error for the given stage.
    ///
    /// # Arguments
    ///
    /// * `kind` - The stage of processing where the error occurred.
    /// * `context` - Additional context about the error.
    /// * `error` - The underlying error that caused this error.
    pub fn processing_error(
        kind: ProcessingStage,
        context: impl Into<String>,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind,
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Whether this error is a `NoContentFound` outcome.
    pub fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContentFound { .. })
    }

    /// Whether this error is a decode failure reported by an image source.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::ImageLoad { .. })
    }
}

/// Allows configuration validation failures to flow through `?`.
impl From<crate::core::config::ConfigError> for SegmentError {
    fn from(error: crate::core::config::ConfigError) -> Self {
        Self::ConfigError {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_input_message() {
        let err = SegmentError::invalid_input("image height is zero");
        assert_eq!(err.to_string(), "invalid input: image height is zero");
        assert!(!err.is_no_content());
    }

    #[test]
    fn test_processing_error_keeps_source() {
        let err = SegmentError::processing_error(
            ProcessingStage::Cropping,
            "region 2",
            std::io::Error::other("out of bounds"),
        );
        assert_eq!(err.to_string(), "cropping failed: region 2");
        assert_eq!(err.source().map(|s| s.to_string()).unwrap(), "out of bounds");
    }

    #[test]
    fn test_image_load_is_decode_failure() {
        let source = image::ImageError::IoError(std::io::Error::other("truncated"));
        let err = SegmentError::image_load(Path::new("scan/page_1.jpg"), source);
        assert!(err.is_decode_failure());
        assert!(err.to_string().contains("scan/page_1.jpg"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: SegmentError = crate::core::config::ConfigError::InvalidConfig {
            message: "padding too large".to_string(),
        }
        .into();
        assert!(matches!(err, SegmentError::ConfigError { .. }));
    }
}
