//! Silhouette border around everything registered in the outline mask.

use crate::canvas::{Canvas, CellMask, Layer};
use crate::color::Rgb;

const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Cells 4-adjacent to `mask` that are not themselves in it.
pub fn border_cells(mask: &CellMask) -> CellMask {
    let mut border = CellMask::new();
    for (x, y) in mask.iter() {
        for (dx, dy) in NEIGHBORS {
            let (nx, ny) = (x + dx, y + dy);
            if !mask.contains(nx, ny) {
                border.insert(nx, ny);
            }
        }
    }
    border
}

/// Paint the border on layer 0, each cell once, in row-major order.
pub fn draw_outline(canvas: &mut Canvas, color: Rgb) {
    let border = border_cells(canvas.outline_mask());
    for (x, y) in border.iter() {
        canvas.paint(Layer::Outline, x, y, color);
    }
}
