//! End-to-end checks of the segmentation engine on synthetic pages.

use image::{DynamicImage, GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use pageseg::core::{SegmentationConfig, SplitConfig};
use pageseg::processors::{
    BoundingBox, detect_split_point, extract_foreground_regions, extract_multiple_regions,
    extract_single_region, split_at_row,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn white(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([255]))
}

fn black_rect(canvas: &mut GrayImage, x: i32, y: i32, w: u32, h: u32) {
    draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(w, h), Luma([0]));
}

/// Two noise "pages" stacked with a white band of `gap` rows starting at `band_start`.
fn dual_page_scan(width: u32, height: u32, band_start: u32, gap: u32, seed: u64) -> DynamicImage {
    let mut rng = StdRng::seed_from_u64(seed);
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |_, y| {
        if (band_start..band_start + gap).contains(&y) {
            Luma([255])
        } else {
            Luma([rng.gen_range(0..=255)])
        }
    }))
}

#[test]
fn dual_page_scan_splits_inside_white_band() {
    let scan = dual_page_scan(1000, 1400, 650, 100, 7);
    let row = detect_split_point(&scan, &SplitConfig::default()).unwrap();
    assert!((650..750).contains(&row), "row {row} outside band");
    assert_eq!(row, 650);

    let halves = split_at_row(&scan, row).unwrap();
    assert_eq!(halves.top.height() + halves.bottom.height(), 1400);
    assert_eq!(halves.top.width(), 1000);
    assert_eq!(halves.bottom.width(), 1000);
}

#[test]
fn single_white_row_is_found_exactly() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10 {
        let height = rng.gen_range(30..400u32);
        let width = rng.gen_range(8..200u32);
        let k = rng.gen_range(height / 3..2 * height / 3);
        let mut noise = StdRng::seed_from_u64(u64::from(height) * 31 + u64::from(k));
        // Noise rows never reach zero variance: every row holds both 0 and 255.
        let image = DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
            if y == k {
                Luma([255])
            } else if x == 0 {
                Luma([0])
            } else if x == 1 {
                Luma([255])
            } else {
                Luma([noise.gen_range(0..=255)])
            }
        }));
        assert_eq!(detect_split_point(&image, &SplitConfig::default()).unwrap(), k);
    }
}

#[test]
fn split_heights_always_sum_to_source() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let height = rng.gen_range(2..300u32);
        let width = rng.gen_range(1..120u32);
        let row = rng.gen_range(1..height);
        let image = DynamicImage::new_rgb8(width, height);
        let halves = split_at_row(&image, row).unwrap();
        assert_eq!(halves.top.height() + halves.bottom.height(), height);
        assert_eq!(halves.top.width(), width);
        assert_eq!(halves.bottom.width(), width);
    }
}

#[test]
fn single_rectangle_is_cropped_with_padding() {
    let mut canvas = white(800, 600);
    black_rect(&mut canvas, 100, 100, 200, 150);
    let extracted =
        extract_single_region(&DynamicImage::ImageLuma8(canvas), &SegmentationConfig::default())
            .unwrap();

    let bbox = extracted.region.bbox;
    assert_eq!((bbox.x, bbox.y), (90, 90));
    assert_eq!((bbox.right(), bbox.bottom()), (310, 260));
    assert_eq!(extracted.image.width(), 220);
    assert_eq!(extracted.image.height(), 170);
}

#[test]
fn single_region_on_color_page() {
    let mut canvas = image::RgbImage::from_pixel(500, 400, image::Rgb([250, 248, 245]));
    draw_filled_rect_mut(
        &mut canvas,
        Rect::at(120, 80).of_size(160, 200),
        image::Rgb([30, 60, 140]),
    );
    let extracted =
        extract_single_region(&DynamicImage::ImageRgb8(canvas), &SegmentationConfig::default())
            .unwrap();
    assert_eq!(extracted.region.bbox, BoundingBox::new(110, 70, 180, 220));
    assert!(extracted.image.color().has_color());
}

#[test]
fn stacked_rectangles_come_out_top_first() {
    let mut canvas = white(800, 600);
    black_rect(&mut canvas, 100, 350, 200, 200);
    black_rect(&mut canvas, 100, 100, 200, 150);
    let result =
        extract_multiple_regions(&DynamicImage::ImageLuma8(canvas), &SegmentationConfig::default())
            .unwrap();

    assert_eq!(result.len(), 2);
    let upper = result.regions[0].region.bbox;
    let lower = result.regions[1].region.bbox;
    assert!(upper.y <= 100 && upper.bottom() >= 250 && upper.bottom() < 350);
    assert!(lower.y <= 350 && lower.bottom() >= 550);
}

#[test]
fn multi_region_output_is_sorted_and_large_enough() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = SegmentationConfig::default();
    for _ in 0..5 {
        let mut canvas = white(900, 900);
        // A 3x3 grid of cells, each optionally holding one block.
        for cell in 0..9 {
            if !rng.gen_bool(0.6) {
                continue;
            }
            let cx = (cell % 3) * 300;
            let cy = (cell / 3) * 300;
            let w = rng.gen_range(100..220u32);
            let h = rng.gen_range(100..220u32);
            black_rect(&mut canvas, cx + 30, cy + 30, w, h);
        }
        let result = extract_multiple_regions(&DynamicImage::ImageLuma8(canvas), &config).unwrap();
        for pair in result.regions.windows(2) {
            assert!(pair[0].region.bbox.y <= pair[1].region.bbox.y);
        }
        for (i, segment) in result.iter().enumerate() {
            assert_eq!(segment.index, i + 1);
            assert!(segment.region.area >= config.min_area);
            assert!(segment.region.bbox.fits_within(900, 900));
        }
    }
}

#[test]
fn specks_only_yield_empty_results() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut canvas = white(600, 600);
    for _ in 0..40 {
        let x = rng.gen_range(0..570);
        let y = rng.gen_range(0..570);
        black_rect(&mut canvas, x, y, rng.gen_range(1..8), rng.gen_range(1..8));
    }
    let image = DynamicImage::ImageLuma8(canvas);
    let config = SegmentationConfig::default();

    assert!(extract_multiple_regions(&image, &config).unwrap().is_empty());
    assert!(extract_foreground_regions(&image, &config).unwrap().is_empty());
    assert!(extract_single_region(&image, &config).unwrap_err().is_no_content());
}

#[test]
fn boxes_near_edges_are_clamped() {
    let mut canvas = white(300, 200);
    black_rect(&mut canvas, 0, 0, 120, 90);
    black_rect(&mut canvas, 180, 110, 120, 90);
    let image = DynamicImage::ImageLuma8(canvas);
    let config = SegmentationConfig::default().with_padding(25);

    let mut boxes: Vec<_> = extract_foreground_regions(&image, &config)
        .unwrap()
        .into_iter()
        .map(|r| r.bbox)
        .collect();
    boxes.sort_by_key(|b| (b.y, b.x));
    assert_eq!(
        boxes,
        vec![BoundingBox::new(0, 0, 145, 115), BoundingBox::new(155, 85, 145, 115)]
    );
}

#[test]
fn content_on_left_margin_is_extracted() {
    let mut canvas = white(800, 600);
    black_rect(&mut canvas, 0, 150, 300, 200);
    let image = DynamicImage::ImageLuma8(canvas);
    let extracted = extract_single_region(&image, &SegmentationConfig::default()).unwrap();
    assert_eq!(extracted.region.bbox, BoundingBox::new(0, 140, 310, 220));
}

#[test]
fn illustrations_touching_side_edges_are_extracted() {
    let mut canvas = white(800, 600);
    black_rect(&mut canvas, 0, 100, 400, 200);
    black_rect(&mut canvas, 450, 350, 350, 200);
    let image = DynamicImage::ImageLuma8(canvas);
    let result = extract_multiple_regions(&image, &SegmentationConfig::default()).unwrap();

    assert_eq!(result.len(), 2);
    let left = result.regions[0].region.bbox;
    let right = result.regions[1].region.bbox;
    assert_eq!(left.x, 0);
    assert!(left.y <= 100 && left.bottom() >= 300 && left.right() >= 400);
    assert_eq!(right.right(), 800);
    assert!(right.x <= 450 && right.y <= 350 && right.bottom() >= 550);
    for segment in &result {
        assert!(segment.region.bbox.fits_within(800, 600));
    }
}
