// Core value types shared by the canvas, the rasterizer and the window.

use image::Rgba;

/// One canvas color. Always opaque in practice (alpha = 255).
pub type Color = Rgba<u8>;

pub const WHITE: Color = Rgba([255, 255, 255, 255]);
pub const BLACK: Color = Rgba([0, 0, 0, 255]);

/// Internal buffer resolution relative to display units.
pub const SUPERSAMPLE: i32 = 2;

/// A cell in buffer space (display coordinates x SUPERSAMPLE).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Scale a device-space position into the buffer and snap it to its cell.
    pub fn from_device(x: f32, y: f32) -> Self {
        let s = SUPERSAMPLE as f32;
        Self {
            x: (x * s).floor() as i32,
            y: (y * s).floor() as i32,
        }
    }
}

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // window width in pixels
    pub height: usize,     // window height in pixels
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// Pack a color as 0x00RRGGBB (alpha dropped; minifb ignores it).
#[inline]
pub fn pack_rgb(c: Color) -> u32 {
    let [r, g, b, _] = c.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_positions_double_and_floor() {
        assert_eq!(Point::from_device(10.0, 3.0), Point::new(20, 6));
        assert_eq!(Point::from_device(10.3, 3.74), Point::new(20, 7));
        assert_eq!(Point::from_device(-0.2, 0.0), Point::new(-1, 0));
    }

    #[test]
    fn pack_drops_alpha() {
        assert_eq!(pack_rgb(WHITE), 0x00FF_FFFF);
        assert_eq!(pack_rgb(Rgba([0x12, 0x34, 0x56, 0x00])), 0x0012_3456);
    }
}
