//! Geometry of the glyph strip and the per-frame rotation pass.

use crate::angle::{raw_angle, AngleMemory, Point};
use crate::site::{GLYPH_TRANSITION, GLYPH_WIDTH_PX};

/// Measured container box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    pub rows: usize,
    pub cols: usize,
}

impl GlyphGrid {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub const fn index(self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Midpoint of the glyph's cell when `rect` is split into equal cells.
    pub fn center(self, rect: Rect, row: usize, col: usize) -> Point {
        let cell_width = rect.width / self.cols as f64;
        let cell_height = rect.height / self.rows as f64;

        Point::new(
            rect.left + col as f64 * cell_width + cell_width / 2.0,
            rect.top + row as f64 * cell_height + cell_height / 2.0,
        )
    }
}

/// Rotation state of one mounted strip.
#[derive(Clone, Debug)]
pub struct PatternState {
    grid: GlyphGrid,
    memory: AngleMemory,
}

impl PatternState {
    pub fn new(grid: GlyphGrid) -> Self {
        Self {
            grid,
            memory: AngleMemory::new(grid.len()),
        }
    }

    pub fn grid(&self) -> GlyphGrid {
        self.grid
    }

    /// Emitted angle for every glyph in row-major order.
    ///
    /// Without a measured container or a pointer sample every glyph sits at
    /// zero and the remembered angles are left as they are.
    pub fn frame(&mut self, rect: Option<Rect>, pointer: Option<Point>) -> Vec<f64> {
        let (Some(rect), Some(pointer)) = (rect, pointer) else {
            return vec![0.0; self.grid.len()];
        };

        let mut angles = Vec::with_capacity(self.grid.len());
        for row in 0..self.grid.rows {
            for col in 0..self.grid.cols {
                let center = self.grid.center(rect, row, col);
                let index = self.grid.index(row, col);
                angles.push(self.memory.emit(index, raw_angle(center, pointer)));
            }
        }
        angles
    }
}

/// Inline style rotating one glyph about its own centre.
pub fn glyph_style(angle: f64) -> String {
    format!(
        "transform: rotate({angle}deg); transition: {GLYPH_TRANSITION}; \
         transform-origin: center center; width: {GLYPH_WIDTH_PX}px;"
    )
}
