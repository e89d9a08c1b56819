//! Per-image work items and their outcomes.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{SegResult, SegmentError};
use crate::processors::BoundingBox;

/// What to do with one input image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// Cut a dual-page scan into top and bottom halves.
    SplitPages,
    /// Crop a page to its largest content region.
    ExtractSingle,
    /// Crop every illustration on a page.
    ExtractMultiple,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::SplitPages => write!(f, "split pages"),
            JobKind::ExtractSingle => write!(f, "extract single region"),
            JobKind::ExtractMultiple => write!(f, "extract multiple regions"),
        }
    }
}

/// One input image and the operation to run on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageJob {
    /// Path handed to the image source.
    pub source: PathBuf,
    /// Operation to run.
    pub kind: JobKind,
}

impl PageJob {
    /// Creates a new job.
    pub fn new(source: impl Into<PathBuf>, kind: JobKind) -> Self {
        Self {
            source: source.into(),
            kind,
        }
    }

    /// Builds one job of the same kind for every path.
    pub fn for_paths<P: AsRef<Path>>(paths: &[P], kind: JobKind) -> Vec<Self> {
        paths
            .iter()
            .map(|p| Self::new(p.as_ref(), kind))
            .collect()
    }
}

/// A file written for a job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrittenOutput {
    /// `top`, `bottom`, `region_N` or `content`.
    pub label: String,
    /// Destination handed to the image sink.
    pub path: PathBuf,
    /// Region the crop was taken from; `None` for split halves.
    pub bbox: Option<BoundingBox>,
}

/// Result of one job. Each outcome is independent of every other job.
#[derive(Debug)]
pub struct JobOutcome {
    /// The job that produced this outcome.
    pub job: PageJob,
    /// Files written, or the error that stopped the job.
    pub result: SegResult<Vec<WrittenOutput>>,
}

impl JobOutcome {
    /// Whether the job completed.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Files written by a successful job, empty otherwise.
    pub fn outputs(&self) -> &[WrittenOutput] {
        match &self.result {
            Ok(outputs) => outputs,
            Err(_) => &[],
        }
    }

    /// The error of a failed job.
    pub fn error(&self) -> Option<&SegmentError> {
        self.result.as_ref().err()
    }
}
