//! Batch runs against the real filesystem.

use std::sync::Arc;

use image::{DynamicImage, GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use pageseg::core::{ParallelPolicy, PipelineConfig};
use pageseg::pipeline::{BatchProcessor, DiskImageSink, DiskImageSource, JobKind, PageJob};
use pageseg::utils::{load_image, save_image};

fn write_page(dir: &std::path::Path, name: &str, blocks: &[(i32, i32, u32, u32)]) -> std::path::PathBuf {
    let mut canvas = GrayImage::from_pixel(600, 800, Luma([255]));
    for &(x, y, w, h) in blocks {
        draw_filled_rect_mut(&mut canvas, Rect::at(x, y).of_size(w, h), Luma([0]));
    }
    let path = dir.join(name);
    save_image(&DynamicImage::ImageLuma8(canvas), &path, 100).unwrap();
    path
}

fn processor(output_dir: &std::path::Path) -> BatchProcessor {
    let config = PipelineConfig {
        parallel: ParallelPolicy::new().with_max_workers(Some(3)),
        ..PipelineConfig::default()
    };
    BatchProcessor::new(
        config,
        Arc::new(DiskImageSource),
        Arc::new(DiskImageSink::new(output_dir)),
    )
    .unwrap()
}

#[test]
fn multi_region_batch_writes_numbered_crops() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let pages = vec![
        write_page(input.path(), "plate_a.png", &[(50, 60, 300, 200), (80, 450, 250, 250)]),
        write_page(input.path(), "plate_b.png", &[(100, 100, 400, 500)]),
        write_page(input.path(), "plate_c.png", &[]),
    ];

    let (outcomes, stats) =
        processor(output.path()).run_with_stats(&PageJob::for_paths(&pages, JobKind::ExtractMultiple));

    assert_eq!(stats.total_processed, 3);
    assert_eq!(stats.successful, 3);
    assert_eq!(stats.outputs_written, 3);

    let labels: Vec<_> = outcomes[0].outputs().iter().map(|o| o.label.clone()).collect();
    assert_eq!(labels, vec!["region_1", "region_2"]);
    assert!(outcomes[2].outputs().is_empty());

    let first = load_image(&output.path().join("plate_a_image1.jpg")).unwrap();
    let second = load_image(&output.path().join("plate_a_image2.jpg")).unwrap();
    assert!(first.height() < 300 && second.height() > 250);
    assert!(output.path().join("plate_b_image1.jpg").exists());
}

#[test]
fn split_and_single_batches() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let page = write_page(input.path(), "sheet.png", &[(40, 40, 520, 300), (40, 460, 520, 300)]);

    let processor = processor(output.path());
    let split = processor.process(&PageJob::new(&page, JobKind::SplitPages));
    assert!(split.is_success());
    let top = load_image(&output.path().join("sheet_top.jpg")).unwrap();
    let bottom = load_image(&output.path().join("sheet_bottom.jpg")).unwrap();
    assert_eq!(top.height() + bottom.height(), 800);
    assert!((340..460).contains(&top.height()));

    let single = processor.process(&PageJob::new(&page, JobKind::ExtractSingle));
    let bbox = single.outputs()[0].bbox.unwrap();
    assert_eq!((bbox.x, bbox.width), (30, 540));
    assert!(output.path().join("sheet.jpg").exists());
}

#[test]
fn unreadable_input_fails_only_its_own_job() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let good = write_page(input.path(), "good.png", &[(100, 100, 200, 200)]);
    let bad = input.path().join("bad.png");
    std::fs::write(&bad, b"not an image").unwrap();

    let outcomes =
        processor(output.path()).run(&PageJob::for_paths(&[good, bad], JobKind::ExtractSingle));
    assert!(outcomes[0].is_success());
    assert!(outcomes[1].error().is_some_and(|e| e.is_decode_failure()));
}
