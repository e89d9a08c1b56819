//! Page Segmentation Example
//!
//! This example runs the segmentation engine over a list of scanned pages and
//! writes the resulting crops as JPEG files.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example segment_pages -- [OPTIONS] --mode <MODE> <IMAGES>...
//! ```
//!
//! # Arguments
//!
//! * `-m, --mode` - `split`, `single` or `multi`
//! * `-o, --output-dir` - Directory to write results to
//! * `-c, --config` - Optional JSON pipeline configuration
//! * `<IMAGES>...` - Paths to input images to process
//!
//! # Example
//!
//! ```bash
//! RUST_LOG=info cargo run --example segment_pages -- -m multi -o out/ page1.png page2.png
//! ```

use clap::{Parser, ValueEnum};
use pageseg::core::{ConfigValidator, ConfigValidatorExt, PipelineConfig, init_tracing};
use pageseg::pipeline::{
    BatchProcessor, DiskImageSink, DiskImageSource, JobKind, PageJob, TracingReporter,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Cut dual-page scans into top and bottom halves
    Split,
    /// Crop each page to its largest content region
    Single,
    /// Cut out every illustration on each page
    Multi,
}

impl From<Mode> for JobKind {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Split => JobKind::SplitPages,
            Mode::Single => JobKind::ExtractSingle,
            Mode::Multi => JobKind::ExtractMultiple,
        }
    }
}

/// Command-line arguments for the page segmentation example
#[derive(Parser)]
#[command(name = "segment_pages")]
#[command(about = "Page Segmentation Example - splits scans and extracts illustrations")]
struct Args {
    /// Operation to run on every image
    #[arg(short, long, value_enum)]
    mode: Mode,

    /// Paths to input images to process
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Directory to write results to
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// JSON pipeline configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum contour area for a region to count as content
    #[arg(long)]
    min_area: Option<f64>,

    /// Padding added around each region, in pixels
    #[arg(long)]
    padding: Option<u32>,

    /// JPEG quality of the written crops
    #[arg(long, default_value = "95")]
    quality: u8,

    /// Maximum number of worker threads
    #[arg(long)]
    workers: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    init_tracing();

    let args = Args::parse();

    info!("Page Segmentation Example");

    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_path(path)?,
        None => PipelineConfig::get_defaults(),
    };
    if let Some(min_area) = args.min_area {
        config.segmentation.min_area = min_area;
    }
    if let Some(padding) = args.padding {
        config.segmentation.padding = padding;
    }
    if args.workers.is_some() {
        config.parallel = config.parallel.with_max_workers(args.workers);
    }
    let config = config.validated()?;

    let existing_images: Vec<PathBuf> = args
        .images
        .iter()
        .filter(|path| {
            let exists = path.exists();
            if !exists {
                error!("Image file not found: {}", path.display());
            }
            exists
        })
        .cloned()
        .collect();

    if existing_images.is_empty() {
        error!("No valid image files found");
        return Err("No valid image files found".into());
    }

    let processor = BatchProcessor::new(
        config,
        Arc::new(DiskImageSource),
        Arc::new(DiskImageSink::new(&args.output_dir)),
    )?
    .with_reporter(Arc::new(TracingReporter))
    .with_quality(args.quality);

    info!(
        "Processing {} images with {} workers ({:?} mode)",
        existing_images.len(),
        processor.worker_count(),
        args.mode
    );

    let jobs = PageJob::for_paths(&existing_images, args.mode.into());
    let (outcomes, stats) = processor.run_with_stats(&jobs);

    for outcome in &outcomes {
        for output in outcome.outputs() {
            info!(
                "{} -> {} ({})",
                outcome.job.source.display(),
                args.output_dir.join(&output.path).display(),
                output.label
            );
        }
    }
    info!("{}", stats);

    if stats.failed > 0 {
        error!("{} images failed", stats.failed);
    }
    Ok(())
}
