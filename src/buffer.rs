// The canvas pixels: a flat row-major grid of colors at 2x the display size.
// Visual: this is what you have drawn so far; the window shows it downsampled.

use crate::types::{Color, WHITE};

/// Background every cell starts with (and returns to on clear).
pub const BACKGROUND: Color = WHITE;

pub struct PixelBuffer {
    width: usize,
    height: usize,
    cells: Vec<Color>, // length = width * height, index = y * width + x
}

impl PixelBuffer {
    /// Allocate a `width x height` grid filled with the background.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![BACKGROUND; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read one cell. Callers iterate the buffer's own dimensions;
    /// anything else is a caller bug and panics.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Color {
        assert!(x < self.width && y < self.height, "read outside buffer: ({x}, {y})");
        self.cells[y * self.width + x]
    }

    /// Write one cell if it lies in (0, width) x (0, height).
    /// Row 0 and column 0 are never written; out-of-range writes are dropped.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if !self.writable(x, y) {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.cells[idx] = color;
    }

    /// The write policy used by `set`.
    #[inline]
    pub fn writable(&self, x: i32, y: i32) -> bool {
        x > 0 && y > 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Reset every cell to the background.
    pub fn clear(&mut self) {
        self.cells.fill(BACKGROUND);
    }
}
