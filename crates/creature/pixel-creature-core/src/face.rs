//! Eyes, mouth variants, beak, snout and cheeks.

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Layer, GRID_SIZE};
use crate::color::Rgb;
use crate::palette::Palette;
use crate::preset::Preset;
use crate::rng::XorShift32;

const EYE_WHITE: Rgb = Rgb::WHITE;
const CHEEK_OFFSET: i32 = 7;

/// Grid-space rectangle of one eye, kept for blink placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl EyeBox {
    /// Horizontal center in grid units (may be a half cell).
    pub fn center_x(&self) -> f64 {
        f64::from(self.x) + f64::from(self.width - 1) / 2.0
    }
}

/// Whites on layer 4, one pupil per eye on layer 5. Returns `[left, right]`.
pub fn draw_eyes(
    canvas: &mut Canvas,
    center: i32,
    row: i32,
    preset: &Preset,
    palette: &Palette,
    rng: &mut XorShift32,
) -> [EyeBox; 2] {
    let width = rng.int_in(preset.eye_width);
    let height = rng.int_in(preset.eye_height);
    let offset = rng.int_in(preset.eye_offset);
    let max_x = GRID_SIZE - width - 2;
    let left = (center - offset).clamp(1, max_x);
    let right = (center + offset - (width - 1)).clamp(1, max_x);

    for dx in 0..width {
        for dy in 0..height {
            canvas.paint(Layer::EyeWhite, left + dx, row + dy, EYE_WHITE);
            canvas.paint(Layer::EyeWhite, right + dx, row + dy, EYE_WHITE);
        }
    }

    // Same shift for both pupils keeps the gaze coherent.
    let look = rng.int_between(-1, 1);
    let pupil_row = row + height - 1;
    canvas.paint(Layer::Pupil, left + width / 2 + look, pupil_row, palette.eye);
    canvas.paint(Layer::Pupil, right + width / 2 + look, pupil_row, palette.eye);

    [
        EyeBox {
            x: left,
            y: row,
            width,
            height,
        },
        EyeBox {
            x: right,
            y: row,
            width,
            height,
        },
    ]
}

/// One of three small mouths on layer 3.
pub fn draw_mouth(canvas: &mut Canvas, center: i32, row: i32, color: Rgb, rng: &mut XorShift32) {
    match rng.int_between(0, 2) {
        0 => {
            for dx in -1..=1 {
                canvas.paint(Layer::Shading, center + dx, row, color);
            }
        }
        1 => {
            canvas.paint(Layer::Shading, center, row, color);
            canvas.paint(Layer::Shading, center - 1, row + 1, color);
            canvas.paint(Layer::Shading, center + 1, row + 1, color);
        }
        _ => {
            canvas.paint(Layer::Shading, center - 1, row, color);
            canvas.paint(Layer::Shading, center + 1, row, color);
        }
    }
}

pub fn draw_beak(canvas: &mut Canvas, center: i32, row: i32, color: Rgb) {
    canvas.paint(Layer::Shading, center, row, color);
    canvas.paint(Layer::Shading, center - 1, row + 1, color);
    canvas.paint(Layer::Shading, center + 1, row + 1, color);
}

/// 5x3 lightened patch on layer 2 with two darkened nostrils on layer 3.
pub fn draw_snout(canvas: &mut Canvas, center: i32, row: i32, color: Rgb) {
    let patch = color.lighten(0.25);
    for dx in -2..=2 {
        for dy in 0..=2 {
            canvas.paint(Layer::Decoration, center + dx, row + dy, patch);
        }
    }
    let nostril = color.darken(0.3);
    canvas.paint(Layer::Shading, center - 1, row + 1, nostril);
    canvas.paint(Layer::Shading, center + 1, row + 1, nostril);
}

pub fn draw_cheeks(canvas: &mut Canvas, center: i32, row: i32, color: Rgb) {
    for dy in 0..=1 {
        canvas.paint(Layer::Decoration, center - CHEEK_OFFSET, row + dy, color);
        canvas.paint(Layer::Decoration, center + CHEEK_OFFSET, row + dy, color);
    }
}
