//! Ears, head accessories, arms, wings, tails and feet.
//!
//! Each routine writes fixed offsets relative to the body center and a
//! reference row. Structural pixels join the outline mask.

use crate::animation::{flap_pair, Flap, Side, WingGroup};
use crate::canvas::{Canvas, Layer, Pixel};
use crate::color::Rgb;
use crate::preset::{AccessoryStyle, EarStyle, FootStyle, TailStyle, WingStyle};
use crate::rng::XorShift32;

/// Horizontal distance from the center to the inner edge of a wing.
const WING_OFFSET: i32 = 9;

/// Symmetric ears rising from `top` (layer 1).
pub fn draw_ears(canvas: &mut Canvas, center: i32, top: i32, style: EarStyle, color: Rgb) {
    let mut place = |dx: i32, dy: i32| {
        canvas.paint_solid(Layer::Body, center + dx, top - dy, color);
    };
    match style {
        EarStyle::None => {}
        EarStyle::Round => {
            for dy in 0..=2 {
                for dx in [-6, -5, 5, 6] {
                    place(dx, dy);
                }
            }
        }
        EarStyle::Pointy => {
            for dy in 0..=3 {
                let offset = if dy < 2 { 6 } else { 5 };
                place(-offset, dy);
                place(offset - 1, dy);
            }
        }
        EarStyle::Bunny => {
            for dy in 0..=5 {
                place(-5, dy);
                place(4, dy);
            }
            place(-5, 1);
            place(4, 1);
        }
        EarStyle::Leaf => {
            for dy in 0..=3 {
                place(-6 + 2 * dy, dy);
                place(6 - 2 * dy, dy);
            }
        }
    }
}

/// Cluster above the head. Flower petals are non-solid shading pixels.
pub fn draw_top_accessory(
    canvas: &mut Canvas,
    center: i32,
    top: i32,
    style: AccessoryStyle,
    color: Rgb,
) {
    match style {
        AccessoryStyle::None => {}
        AccessoryStyle::Leaf => {
            for dy in 0..=3 {
                let y = top - dy - 1;
                canvas.paint_solid(Layer::Body, center, y, color);
                if dy <= 2 {
                    canvas.paint_solid(Layer::Body, center - 1, y, color);
                    canvas.paint_solid(Layer::Body, center + 1, y, color);
                }
            }
        }
        AccessoryStyle::Sprout => {
            canvas.paint_solid(Layer::Body, center, top - 1, color);
            canvas.paint_solid(Layer::Body, center - 1, top - 2, color);
            canvas.paint_solid(Layer::Body, center + 1, top - 2, color);
        }
        AccessoryStyle::Flower => {
            let petals = color.lighten(0.2);
            canvas.paint_solid(Layer::Body, center, top - 1, color);
            canvas.paint(Layer::Shading, center - 1, top - 2, petals);
            canvas.paint(Layer::Shading, center + 1, top - 2, petals);
            canvas.paint(Layer::Shading, center, top - 3, petals);
        }
        AccessoryStyle::Antenna => {
            let tip = color.lighten(0.2);
            for dx in [-2, 2] {
                canvas.paint_solid(Layer::Body, center + dx, top - 1, color);
                canvas.paint_solid(Layer::Body, center + dx, top - 2, color);
                canvas.paint_solid(Layer::Body, center + dx, top - 3, tip);
            }
        }
    }
}

/// Two 2x2 blocks flanking the body.
pub fn draw_arms(canvas: &mut Canvas, center: i32, row: i32, color: Rgb) {
    for dx in 0..=1 {
        for dy in 0..=1 {
            canvas.paint_solid(Layer::Body, center - 9 + dx, row + dy, color);
            canvas.paint_solid(Layer::Body, center + 8 - dx, row + dy, color);
        }
    }
}

/// Wing pixels relative to the wing's inner edge, as `(dx, dy)` pairs.
fn wing_cells(style: WingStyle) -> Vec<(i32, i32)> {
    match style {
        WingStyle::None => Vec::new(),
        WingStyle::Round => (-1..=2)
            .flat_map(|dy| (0..=2).map(move |dx| (dx, dy)))
            .collect(),
        WingStyle::Bat => (0..=4)
            .flat_map(|dy| (0..=(3 - dy)).map(move |dx| (dx, dy)))
            .collect(),
        WingStyle::Bee => (-1..=1)
            .flat_map(|dy| (0..=2).map(move |dx| (dx, dy)))
            .collect(),
    }
}

/// Left and right wing groups at `row`, each with its own flap directive.
///
/// Wing cells feed the outline mask but are kept out of the static layers so
/// the groups can move independently. Returns nothing (and draws nothing
/// from `rng`) for [`WingStyle::None`].
pub fn draw_wings(
    canvas: &mut Canvas,
    center: i32,
    row: i32,
    style: WingStyle,
    color: Rgb,
    rng: &mut XorShift32,
) -> Vec<WingGroup> {
    if style == WingStyle::None {
        return Vec::new();
    }
    let (left, right) = flap_pair(rng);
    let color = if style == WingStyle::Bee {
        color.lighten(0.2)
    } else {
        color
    };
    let cells = wing_cells(style);

    let mut wing = |side: Side, flap: Flap| -> WingGroup {
        let pixels = cells
            .iter()
            .filter_map(|&(dx, dy)| {
                let x = center + side.sign() * (WING_OFFSET + dx);
                let y = row + dy;
                let pixel = Pixel::at(x, y, color)?;
                canvas.mark_solid(x, y);
                Some(pixel)
            })
            .collect();
        WingGroup { side, pixels, flap }
    };

    let groups = vec![wing(Side::Left, left), wing(Side::Right, right)];
    groups.into_iter().filter(|g| !g.pixels.is_empty()).collect()
}

/// Tail hanging from the row below the body (layer 2).
pub fn draw_tail(canvas: &mut Canvas, center: i32, bottom: i32, style: TailStyle, color: Rgb) {
    match style {
        TailStyle::None => {}
        TailStyle::Stub => {
            for dx in -1..=1 {
                canvas.paint_solid(Layer::Decoration, center + dx, bottom + 1, color);
            }
        }
        TailStyle::Leaf => {
            canvas.paint_solid(Layer::Decoration, center + 6, bottom - 1, color);
            canvas.paint_solid(Layer::Decoration, center + 7, bottom, color);
            canvas.paint_solid(Layer::Decoration, center + 8, bottom + 1, color);
        }
        TailStyle::Flame => {
            canvas.paint_solid(Layer::Decoration, center, bottom + 1, color);
            canvas.paint_solid(Layer::Decoration, center, bottom + 2, color.lighten(0.2));
        }
    }
}

pub fn draw_feet(canvas: &mut Canvas, center: i32, bottom: i32, style: FootStyle, color: Rgb) {
    let width = match style {
        FootStyle::None => return,
        FootStyle::Small => 2,
        FootStyle::Wide => 4,
    };
    for dx in 0..width {
        canvas.paint_solid(Layer::Decoration, center - 6 + dx, bottom + 1, color);
        canvas.paint_solid(Layer::Decoration, center + 3 + dx, bottom + 1, color);
    }
}
