//! Bounded worker pool over independent page jobs.
//!
//! Each job loads one image, runs one engine operation on it and hands the
//! results to the image sink. Jobs share nothing but read-only configuration
//! and the collaborators, so they run on a dedicated rayon pool without
//! locking. A failing job produces an `Err` outcome and never stops the rest
//! of the batch.
//!
//! All engine work for a job finishes before its first write, so segmentation
//! errors never leave files behind. Writes are not transactional: if the sink
//! fails on a later output of a job, outputs already written for that job stay
//! where the sink put them and the outcome is still `Err`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use image::DynamicImage;
use rayon::prelude::*;

use super::jobs::{JobKind, JobOutcome, PageJob, WrittenOutput};
use super::reporting::{NoopReporter, SegmentationReporter};
use super::stats::BatchStats;
use crate::core::{
    ConfigValidator, DEFAULT_JPEG_QUALITY, ImageSink, ImageSource, PipelineConfig,
    ProcessingStage, SegResult, SegmentError,
};
use crate::processors::{BoundingBox, extract_multiple_regions, extract_single_region, split_page};
use crate::utils::naming::{
    bottom_half_name, region_image_name, region_label, single_region_name, top_half_name,
};

/// Runs page jobs on a bounded thread pool.
pub struct BatchProcessor {
    config: PipelineConfig,
    source: Arc<dyn ImageSource>,
    sink: Arc<dyn ImageSink>,
    reporter: Arc<dyn SegmentationReporter>,
    quality: u8,
    pool: rayon::ThreadPool,
}

impl std::fmt::Debug for BatchProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchProcessor")
            .field("config", &self.config)
            .field("source", &self.source)
            .field("sink", &self.sink)
            .field("reporter", &self.reporter)
            .field("quality", &self.quality)
            .field("workers", &self.pool.current_num_threads())
            .finish()
    }
}

impl BatchProcessor {
    /// Creates a processor with a pool sized by `config.parallel`.
    ///
    /// # Arguments
    ///
    /// * `config` - Engine and pool configuration; validated here
    /// * `source` - Where images are loaded from
    /// * `sink` - Where results are written to
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::ConfigError` for an invalid configuration, or a
    /// `BatchProcessing` error if the thread pool cannot be started.
    pub fn new(
        config: PipelineConfig,
        source: Arc<dyn ImageSource>,
        sink: Arc<dyn ImageSink>,
    ) -> SegResult<Self> {
        config.validate()?;
        let workers = config.parallel.worker_count();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("pageseg-worker-{i}"))
            .build()
            .map_err(|e| {
                SegmentError::processing_error(
                    ProcessingStage::BatchProcessing,
                    format!("failed to start {workers} worker threads"),
                    e,
                )
            })?;
        tracing::debug!(workers, "batch worker pool started");

        Ok(Self {
            config,
            source,
            sink,
            reporter: Arc::new(NoopReporter),
            quality: DEFAULT_JPEG_QUALITY,
            pool,
        })
    }

    /// Sets the reporter that receives progress events.
    pub fn with_reporter(mut self, reporter: Arc<dyn SegmentationReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Sets the quality passed to the image sink.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    /// The configuration jobs run with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Number of worker threads in the pool.
    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs every job and returns one outcome per job, in input order.
    ///
    /// Batches no larger than the policy's sequential threshold run on the
    /// calling thread.
    pub fn run(&self, jobs: &[PageJob]) -> Vec<JobOutcome> {
        if jobs.len() <= self.config.parallel.sequential_threshold {
            jobs.iter().map(|job| self.process(job)).collect()
        } else {
            self.pool
                .install(|| jobs.par_iter().map(|job| self.process(job)).collect())
        }
    }

    /// Runs every job and summarizes the outcomes.
    pub fn run_with_stats(&self, jobs: &[PageJob]) -> (Vec<JobOutcome>, BatchStats) {
        let start = Instant::now();
        let outcomes = self.run(jobs);
        let stats = BatchStats::from_outcomes(&outcomes, start.elapsed());
        (outcomes, stats)
    }

    /// Runs a single job on the calling thread.
    pub fn process(&self, job: &PageJob) -> JobOutcome {
        self.reporter.on_job_started(job);
        let outcome = JobOutcome {
            job: job.clone(),
            result: self.execute(job),
        };
        self.reporter.on_job_finished(&outcome);
        outcome
    }

    fn execute(&self, job: &PageJob) -> SegResult<Vec<WrittenOutput>> {
        let image = self.source.load(&job.source)?;
        let source = job.source.as_path();

        match job.kind {
            JobKind::SplitPages => {
                let split = split_page(&image, &self.config.split)?;
                Ok(vec![
                    self.write(job, "top".to_string(), top_half_name(source), &split.top, None)?,
                    self.write(
                        job,
                        "bottom".to_string(),
                        bottom_half_name(source),
                        &split.bottom,
                        None,
                    )?,
                ])
            }
            JobKind::ExtractSingle => {
                let extracted = extract_single_region(&image, &self.config.segmentation)?;
                let output = self.write(
                    job,
                    "content".to_string(),
                    single_region_name(source),
                    &extracted.image,
                    Some(extracted.region.bbox),
                )?;
                Ok(vec![output])
            }
            JobKind::ExtractMultiple => {
                let segmented = extract_multiple_regions(&image, &self.config.segmentation)?;
                segmented
                    .iter()
                    .map(|segment| {
                        self.write(
                            job,
                            region_label(segment.index),
                            region_image_name(source, segment.index),
                            &segment.image,
                            Some(segment.region.bbox),
                        )
                    })
                    .collect()
            }
        }
    }

    fn write(
        &self,
        job: &PageJob,
        label: String,
        file_name: String,
        image: &DynamicImage,
        bbox: Option<BoundingBox>,
    ) -> SegResult<WrittenOutput> {
        let path = PathBuf::from(file_name);
        self.sink.save(image, &path, self.quality)?;
        let output = WrittenOutput { label, path, bbox };
        self.reporter.on_output_written(job, &output);
        Ok(output)
    }
}
