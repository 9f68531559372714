//! Pixel grid, composited layers and the occupancy bitset.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Cells per side of the square grid.
pub const GRID_SIZE: i32 = 32;
/// Output units per cell.
pub const PIXEL_SIZE: i32 = 4;
/// Side of the emitted view box.
pub const CANVAS_SIZE: i32 = GRID_SIZE * PIXEL_SIZE;

pub const LAYER_COUNT: usize = 6;

/// Back-to-front layer routing; every feature writes to a fixed layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layer {
    Outline = 0,
    Body = 1,
    Decoration = 2,
    Shading = 3,
    EyeWhite = 4,
    Pupil = 5,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    pub x: u8,
    pub y: u8,
    pub color: Rgb,
}

impl Pixel {
    /// `None` for coordinates outside the grid.
    pub fn at(x: i32, y: i32, color: Rgb) -> Option<Pixel> {
        in_grid(x, y).then(|| Pixel {
            x: x as u8,
            y: y as u8,
            color,
        })
    }
}

#[inline]
pub fn in_grid(x: i32, y: i32) -> bool {
    (0..GRID_SIZE).contains(&x) && (0..GRID_SIZE).contains(&y)
}

/// One bit per cell, one `u32` per row.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CellMask {
    rows: [u32; GRID_SIZE as usize],
}

impl CellMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Out-of-grid cells are ignored.
    #[inline]
    pub fn insert(&mut self, x: i32, y: i32) {
        if in_grid(x, y) {
            self.rows[y as usize] |= 1u32 << x;
        }
    }

    /// Out-of-grid cells are never contained.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        in_grid(x, y) && self.rows[y as usize] & (1u32 << x) != 0
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| *r == 0)
    }

    /// Occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            (0..GRID_SIZE)
                .filter(move |&x| row & (1u32 << x) != 0)
                .map(move |x| (x, y as i32))
        })
    }
}

/// Serialized as a row-major list of `[x, y]` pairs.
impl Serialize for CellMask {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(x, y)| [x, y]))
    }
}

impl std::fmt::Debug for CellMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CellMask ({} cells)", self.len())?;
        for row in &self.rows {
            let line: String = (0..GRID_SIZE)
                .map(|x| if row & (1u32 << x) != 0 { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Exclusive per-generation drawing surface threaded through every stage.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    layers: [Vec<Pixel>; LAYER_COUNT],
    outline_mask: CellMask,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint a cell that does not affect the silhouette.
    #[inline]
    pub fn paint(&mut self, layer: Layer, x: i32, y: i32, color: Rgb) {
        if let Some(pixel) = Pixel::at(x, y, color) {
            self.layers[layer as usize].push(pixel);
        }
    }

    /// Paint a cell and register it in the outline mask.
    #[inline]
    pub fn paint_solid(&mut self, layer: Layer, x: i32, y: i32, color: Rgb) {
        if let Some(pixel) = Pixel::at(x, y, color) {
            self.layers[layer as usize].push(pixel);
            self.outline_mask.insert(x, y);
        }
    }

    /// Register a silhouette cell drawn outside the static layers (wings).
    #[inline]
    pub fn mark_solid(&mut self, x: i32, y: i32) {
        self.outline_mask.insert(x, y);
    }

    pub fn layer(&self, layer: Layer) -> &[Pixel] {
        &self.layers[layer as usize]
    }

    pub fn outline_mask(&self) -> &CellMask {
        &self.outline_mask
    }

    pub fn into_parts(self) -> ([Vec<Pixel>; LAYER_COUNT], CellMask) {
        (self.layers, self.outline_mask)
    }
}
