//! Body silhouette, belly, shading and pattern overlay.

use std::f64::consts::PI;

use crate::canvas::{Canvas, CellMask, Layer, GRID_SIZE};
use crate::color::Rgb;
use crate::preset::{BodyShape, PatternStyle};
use crate::rng::XorShift32;

const MIN_BODY_ROW: i32 = 6;
const MIN_BELLY_ROW: i32 = 4;
const STRIPE_STEP: i32 = 4;

/// Vertical placement shared by every stage that works relative to the body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BodyFrame {
    pub top: i32,
    pub height: i32,
    pub width: i32,
    pub center: i32,
}

impl BodyFrame {
    /// First row below the body.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// `top + floor(height * fraction)`.
    #[inline]
    pub fn row_at(&self, fraction: f64) -> i32 {
        self.top + (f64::from(self.height) * fraction).floor() as i32
    }
}

/// `row / (height - 1)`, or the midpoint for single-row shapes.
#[inline]
fn progress(row: i32, height: i32) -> f64 {
    if height <= 1 {
        0.5
    } else {
        f64::from(row) / f64::from(height - 1)
    }
}

/// Center a run of `width` cells and shift it inside `[1, GRID_SIZE - 2]`.
fn centered_span(center: i32, width: i32) -> (i32, i32) {
    let mut start = center - width / 2;
    let mut end = start + width - 1;
    if start < 1 {
        start = 1;
        end = start + width - 1;
    }
    if end > GRID_SIZE - 2 {
        end = GRID_SIZE - 2;
        start = end - width + 1;
    }
    (start, end)
}

/// Rasterize the body on layer 1; returns the cells it covers.
pub fn draw_body(
    canvas: &mut Canvas,
    shape: BodyShape,
    frame: &BodyFrame,
    color: Rgb,
    rng: &mut XorShift32,
) -> CellMask {
    let mut body = CellMask::new();
    for row in 0..frame.height {
        let y = frame.top + row;
        if y >= GRID_SIZE - 1 {
            break;
        }
        let factor = shape.width_factor(progress(row, frame.height));
        let base = ((f64::from(frame.width) * factor).round() as i32).max(MIN_BODY_ROW);
        let wobble = rng.int_between(-1, 1);
        let row_width = (base + wobble).clamp(MIN_BODY_ROW, GRID_SIZE - 4);
        let (start, end) = centered_span(frame.center, row_width);
        for x in start..=end {
            canvas.paint_solid(Layer::Body, x, y, color);
            body.insert(x, y);
        }
    }
    body
}

/// Sine-tapered belly on layer 2; never part of the silhouette.
pub fn draw_belly(canvas: &mut Canvas, frame: &BodyFrame, width_ratio: f64, color: Rgb) {
    let top = frame.row_at(0.45);
    let height = ((f64::from(frame.height) * 0.28).floor() as i32).max(4);
    let width = (f64::from(frame.width) * width_ratio).floor();
    for row in 0..height {
        let y = top + row;
        if y >= GRID_SIZE - 1 {
            break;
        }
        let taper = (progress(row, height) * PI).sin();
        let row_width = ((width * taper).round() as i32).max(MIN_BELLY_ROW);
        let (start, end) = centered_span(frame.center, row_width);
        for x in start..=end {
            canvas.paint(Layer::Decoration, x, y, color);
        }
    }
}

/// Checkerboard highlight near the top and shadow near the bottom (layer 3).
pub fn draw_highlights(canvas: &mut Canvas, body: &CellMask, frame: &BodyFrame, color: Rgb) {
    let highlight = color.lighten(0.25);
    let shadow = color.darken(0.18);
    let height = f64::from(frame.height);
    let highlight_limit = frame.top + ((height * 0.18).round() as i32).max(2);
    let shadow_start = frame.top + ((height * 0.72).round() as i32).max(4);

    for (x, y) in body.iter() {
        if (x + y) % 2 != 0 {
            continue;
        }
        if y <= highlight_limit {
            canvas.paint(Layer::Shading, x, y, highlight);
        } else if y >= shadow_start {
            canvas.paint(Layer::Shading, x, y, shadow);
        }
    }
}

/// Accent overlay on layer 2, restricted to body cells.
pub fn draw_pattern(
    canvas: &mut Canvas,
    body: &CellMask,
    pattern: PatternStyle,
    accent: Rgb,
    frame: &BodyFrame,
    rng: &mut XorShift32,
) {
    match pattern {
        PatternStyle::None => {}
        PatternStyle::Spots => {
            let cells: Vec<(i32, i32)> = body.iter().collect();
            if cells.is_empty() {
                return;
            }
            let spots = rng.int_between(3, 6);
            for _ in 0..spots {
                let (x, y) = *rng.choose(&cells);
                canvas.paint(Layer::Decoration, x, y, accent);
                if rng.coin() {
                    let dx = if rng.coin() { 1 } else { -1 };
                    let nx = (x + dx).clamp(1, GRID_SIZE - 2);
                    canvas.paint(Layer::Decoration, nx, y, accent);
                }
            }
        }
        PatternStyle::Stripes => {
            for (x, y) in body.iter() {
                if (y - frame.top) % STRIPE_STEP == 0 {
                    canvas.paint(Layer::Decoration, x, y, accent);
                }
            }
        }
        PatternStyle::Shell => {
            let limit = frame.top + (f64::from(frame.height) * 0.35).round() as i32;
            for (x, y) in body.iter() {
                if y <= limit {
                    canvas.paint(Layer::Decoration, x, y, accent);
                }
            }
        }
    }
}
