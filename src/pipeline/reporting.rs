//! Progress reporting for batch runs.
//!
//! The batch processor never logs on its own behalf; it calls an injected
//! [`SegmentationReporter`] instead.

use std::fmt::Debug;

use super::jobs::{JobOutcome, PageJob, WrittenOutput};

/// Receives progress events from a [`BatchProcessor`](super::BatchProcessor).
///
/// Methods are called from worker threads, possibly concurrently.
pub trait SegmentationReporter: Send + Sync + Debug {
    /// A job is about to load its image.
    fn on_job_started(&self, _job: &PageJob) {}

    /// A file was written for `job`.
    fn on_output_written(&self, _job: &PageJob, _output: &WrittenOutput) {}

    /// A job has finished, successfully or not.
    fn on_job_finished(&self, _outcome: &JobOutcome) {}
}

/// Reports progress as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl SegmentationReporter for TracingReporter {
    fn on_job_started(&self, job: &PageJob) {
        tracing::debug!(source = %job.source.display(), kind = %job.kind, "job started");
    }

    fn on_output_written(&self, job: &PageJob, output: &WrittenOutput) {
        tracing::info!(
            source = %job.source.display(),
            label = %output.label,
            path = %output.path.display(),
            "saved"
        );
    }

    fn on_job_finished(&self, outcome: &JobOutcome) {
        let source = outcome.job.source.display();
        match &outcome.result {
            Ok(outputs) if outputs.is_empty() => {
                tracing::info!(source = %source, "no distinguishable regions")
            }
            Ok(outputs) => {
                tracing::info!(source = %source, outputs = outputs.len(), "processed")
            }
            Err(err) if err.is_no_content() => {
                tracing::warn!(source = %source, "no content found")
            }
            Err(err) => tracing::error!(source = %source, error = %err, "processing failed"),
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl SegmentationReporter for NoopReporter {}
