//! Geometric primitives for content regions.
//!
//! Contours come from [`imageproc::contours`]; this module turns them into
//! measured, axis-aligned regions and applies the padding/clamping rule shared
//! by every extraction path.

use imageproc::contours::Contour;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in image pixel coordinates.
///
/// Once produced by [`BoundingBox::pad_and_clamp`] a box always satisfies
/// `x + width <= image_width` and `y + height <= image_height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge (inclusive).
    pub x: u32,
    /// Top edge (inclusive).
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl BoundingBox {
    /// Creates a new bounding box.
    #[inline]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box enclosing every point of a contour.
    ///
    /// A contour made of the boundary pixels of a `w x h` block yields a box
    /// of exactly `w x h`. Returns `None` for an empty contour.
    pub fn from_contour(contour: &Contour<u32>) -> Option<Self> {
        let first = contour.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &contour.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Number of pixels covered by the box.
    #[inline]
    pub fn pixel_area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the box lies entirely inside an image of the given size.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.right() <= image_width && self.bottom() <= image_height
    }

    /// Grows the box by `padding` on every side, then clamps it to the image.
    ///
    /// # Arguments
    ///
    /// * `padding` - Margin added to each side.
    /// * `image_width` - Width of the image the box belongs to.
    /// * `image_height` - Height of the image the box belongs to.
    pub fn pad_and_clamp(&self, padding: u32, image_width: u32, image_height: u32) -> Self {
        let left = self.x.saturating_sub(padding);
        let top = self.y.saturating_sub(padding);
        let right = self.right().saturating_add(padding).min(image_width);
        let bottom = self.bottom().saturating_add(padding).min(image_height);
        Self::new(
            left.min(right),
            top.min(bottom),
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }
}

/// A padded bounding box together with the area of the contour it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentRegion {
    /// Padded and clamped box used for cropping.
    pub bbox: BoundingBox,
    /// Area enclosed by the source contour, in square pixels.
    pub area: f64,
}

impl ContentRegion {
    /// Creates a new content region.
    pub fn new(bbox: BoundingBox, area: f64) -> Self {
        Self { bbox, area }
    }
}

/// Area enclosed by a contour polyline, by the shoelace formula.
///
/// Points are pixel centres, so the contour of a filled `w x h` block
/// encloses `(w - 1) * (h - 1)`. Contours with fewer than three points have
/// zero area.
pub fn contour_area(contour: &Contour<u32>) -> f64 {
    let points = &contour.points;
    if points.len() < 3 {
        return 0.0;
    }

    let n = points.len();
    let mut twice_area = 0.0f64;
    for i in 0..n {
        let j = (i + 1) % n;
        twice_area += points[i].x as f64 * points[j].y as f64;
        twice_area -= points[j].x as f64 * points[i].y as f64;
    }
    twice_area.abs() / 2.0
}
