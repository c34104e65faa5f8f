// The drawing surface: owns the canvas pixels and turns pointer events into strokes.
// Visual: press = a dot appears, drag = a line follows the cursor, release = pen up.

use log::trace;

use crate::brush::BrushState;
use crate::buffer::PixelBuffer;
use crate::raster::{paint_disk, paint_segment};
use crate::types::{Color, Point, SUPERSAMPLE};

/// Pen state between pointer events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stroke {
    Idle,
    /// Button held. `last` is the previous sample in buffer space, if any.
    Pressed { last: Option<Point> },
}

pub struct DrawSurface {
    pixels: PixelBuffer,
    stroke: Stroke,
    changed: bool,
}

impl DrawSurface {
    /// A blank surface for a `width x height` display area (buffer is 2x that).
    pub fn new(width: usize, height: usize) -> Self {
        let s = SUPERSAMPLE as usize;
        Self {
            pixels: PixelBuffer::new(width * s, height * s),
            stroke: Stroke::Idle,
            changed: false,
        }
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Buffer width in cells (2x display width).
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Buffer height in cells (2x display height).
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Read-only lookup for the presenter; (x, y) must lie inside the buffer.
    #[inline]
    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels.get(x, y)
    }

    /// True if the pixels changed since the last call; resets the flag.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Pen down: stamp one brush dab under the cursor.
    pub fn pointer_down(&mut self, x: f32, y: f32, brush: &BrushState) {
        let p = Point::from_device(x, y);
        trace!("pointer down at {p:?}");
        paint_disk(&mut self.pixels, p.x, p.y, brush.width(), brush.color());
        self.stroke = Stroke::Pressed { last: Some(p) };
        self.changed = true;
    }

    /// Drag: connect the previous sample to this one.
    pub fn pointer_move(&mut self, x: f32, y: f32, brush: &BrushState) {
        let Stroke::Pressed { last } = self.stroke else {
            return;
        };
        let cur = Point::from_device(x, y);
        let from = last.unwrap_or(cur);
        trace!("pointer move {from:?} -> {cur:?}");
        paint_segment(&mut self.pixels, from, cur, brush.width(), brush.color());
        self.stroke = Stroke::Pressed { last: Some(cur) };
        self.changed = true;
    }

    /// Cursor came back onto the canvas while held: restart the stroke here
    /// without drawing, so no line jumps across the gap.
    pub fn pointer_enter(&mut self, x: f32, y: f32) {
        if let Stroke::Pressed { .. } = self.stroke {
            let p = Point::from_device(x, y);
            trace!("pointer re-entered at {p:?}");
            self.stroke = Stroke::Pressed { last: Some(p) };
        }
    }

    pub fn pointer_leave(&mut self) {}

    /// Pen up.
    pub fn pointer_up(&mut self) {
        self.stroke = Stroke::Idle;
    }

    /// Wipe the canvas back to white.
    pub fn clear(&mut self) {
        self.pixels.clear();
        self.changed = true;
    }
}
