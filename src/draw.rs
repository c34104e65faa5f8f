// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window laid out like a small paint program: toolbar on top, palette on the
//    left, canvas filling the rest.
// 2) The canvas shown at display size (its 2x buffer averaged down).
// 3) A tiny 5x7 bitmap font for the toolbar labels.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::palette::Palette;
use crate::surface::DrawSurface;
use crate::types::{Color, FrameBuffer, SUPERSAMPLE, pack_rgb};

const TOOLBAR_H: usize = 24;
const PALETTE_COLS: usize = 4;
const PALETTE_ROWS: usize = 64;

const CHROME_BG: u32 = 0x00_30_30_30;
const CHROME_FG: u32 = 0x00_E0_E0_E0;
const HIGHLIGHT: u32 = 0x00_FF_CC_33;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x as f32
            && y >= self.y as f32
            && x < (self.x + self.w) as f32
            && y < (self.y + self.h) as f32
    }
}

/// What sits under a window position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit {
    /// Canvas-local display coordinates.
    Canvas(f32, f32),
    Swatch(usize),
    Clear,
    Toolbar,
    Outside,
}

/// Where every part of the window lives, in window pixels.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub canvas: Rect,
    pub swatch: usize, // side of one palette cell
    pub size_field: Rect,
    pub color_chip: Rect,
    pub clear_button: Rect,
}

impl Layout {
    pub fn new(canvas_w: usize, canvas_h: usize) -> Self {
        let swatch = (canvas_h / PALETTE_ROWS).clamp(1, 10);
        let palette_w = swatch * PALETTE_COLS;
        Self {
            canvas: Rect { x: palette_w, y: TOOLBAR_H, w: canvas_w, h: canvas_h },
            swatch,
            size_field: Rect { x: 40, y: 4, w: 28, h: 16 },
            color_chip: Rect { x: 76, y: 4, w: 16, h: 16 },
            clear_button: Rect { x: 100, y: 4, w: 36, h: 16 },
        }
    }

    /// Window size needed to show everything.
    pub fn window_size(&self) -> (usize, usize) {
        (self.canvas.x + self.canvas.w, self.canvas.y + self.canvas.h)
    }

    pub fn swatch_rect(&self, index: usize) -> Rect {
        let (row, col) = (index / PALETTE_COLS, index % PALETTE_COLS);
        Rect {
            x: col * self.swatch,
            y: TOOLBAR_H + row * self.swatch,
            w: self.swatch,
            h: self.swatch,
        }
    }

    pub fn hit(&self, x: f32, y: f32) -> Hit {
        if x < 0.0 || y < 0.0 {
            return Hit::Outside;
        }
        if self.canvas.contains(x, y) {
            return Hit::Canvas(x - self.canvas.x as f32, y - self.canvas.y as f32);
        }
        if y < TOOLBAR_H as f32 {
            if self.clear_button.contains(x, y) {
                return Hit::Clear;
            }
            return Hit::Toolbar;
        }
        if x < self.canvas.x as f32 {
            let col = x as usize / self.swatch;
            let row = (y as usize - TOOLBAR_H) / self.swatch;
            if row < PALETTE_ROWS {
                return Hit::Swatch(row * PALETTE_COLS + col);
            }
        }
        Hit::Outside
    }
}

/// Keys that edit the SIZE field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKey {
    Digit(char),
    Backspace,
}

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window big enough for the layout.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, layout: &Layout) -> Result<Self, Error> {
        let (w, h) = layout.window_size();
        let window = Window::new(title, w, h, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels; None while the cursor is outside the window.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Visual: when pressed, the canvas goes back to white.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Digit/Backspace presses since the last frame, in order.
    pub fn field_keys(&self) -> Vec<FieldKey> {
        self.window
            .get_keys_pressed(KeyRepeat::Yes)
            .into_iter()
            .filter_map(field_key)
            .collect()
    }
}

fn field_key(key: Key) -> Option<FieldKey> {
    let d = match key {
        Key::Key0 | Key::NumPad0 => '0',
        Key::Key1 | Key::NumPad1 => '1',
        Key::Key2 | Key::NumPad2 => '2',
        Key::Key3 | Key::NumPad3 => '3',
        Key::Key4 | Key::NumPad4 => '4',
        Key::Key5 | Key::NumPad5 => '5',
        Key::Key6 | Key::NumPad6 => '6',
        Key::Key7 | Key::NumPad7 => '7',
        Key::Key8 | Key::NumPad8 => '8',
        Key::Key9 | Key::NumPad9 => '9',
        Key::Backspace => return Some(FieldKey::Backspace),
        _ => return None,
    };
    Some(FieldKey::Digit(d))
}

/* ---------- Canvas presentation ---------- */

/// Copy the surface into the canvas area, averaging each 2x2 block of cells
/// into one window pixel.
/// Visual: strokes look smoother than the raw 2x buffer would at 1:1.
pub fn blit_canvas(fb: &mut FrameBuffer, layout: &Layout, surface: &DrawSurface) {
    let s = SUPERSAMPLE as usize;
    let cols = (surface.width() / s).min(layout.canvas.w);
    let rows = (surface.height() / s).min(layout.canvas.h);
    for dy in 0..rows {
        for dx in 0..cols {
            let mut sum = [0u32; 3];
            for sy in 0..s {
                for sx in 0..s {
                    let c = surface.pixel_at(dx * s + sx, dy * s + sy);
                    for ch in 0..3 {
                        sum[ch] += c.0[ch] as u32;
                    }
                }
            }
            let n = (s * s) as u32;
            let px = ((sum[0] / n) << 16) | ((sum[1] / n) << 8) | (sum[2] / n);
            put_pixel(fb, (layout.canvas.x + dx) as i32, (layout.canvas.y + dy) as i32, px);
        }
    }
}

/* ---------- Chrome: toolbar + palette ---------- */

/// Toolbar: "SIZE:" [field] [current color] [CLEAR].
pub fn draw_toolbar(fb: &mut FrameBuffer, layout: &Layout, size_text: &str, color: Color) {
    let bar = Rect { x: 0, y: 0, w: fb.width, h: TOOLBAR_H };
    fill_rect(fb, bar, CHROME_BG);
    draw_text_5x7(fb, 6, 8, "SIZE:", CHROME_FG);

    let field = layout.size_field;
    fill_rect(fb, field, 0x00_FF_FF_FF);
    draw_text_5x7(fb, field.x as i32 + 3, field.y as i32 + 4, size_text, 0x00_00_00_00);

    fill_rect(fb, layout.color_chip, pack_rgb(color));
    outline_rect(fb, layout.color_chip, CHROME_FG);

    let clear = layout.clear_button;
    outline_rect(fb, clear, CHROME_FG);
    draw_text_5x7(fb, clear.x as i32 + 4, clear.y as i32 + 4, "CLEAR", CHROME_FG);
}

/// Palette grid down the left edge; the selected swatch gets an outline.
pub fn draw_palette(
    fb: &mut FrameBuffer,
    layout: &Layout,
    palette: &Palette,
    selected: Option<usize>,
) {
    let strip = Rect { x: 0, y: TOOLBAR_H, w: layout.canvas.x, h: layout.canvas.h };
    fill_rect(fb, strip, CHROME_BG);
    for (i, c) in palette.iter().enumerate() {
        fill_rect(fb, layout.swatch_rect(i), pack_rgb(c));
    }
    if let Some(i) = selected {
        if layout.swatch >= 3 {
            outline_rect(fb, layout.swatch_rect(i), HIGHLIGHT);
        }
    }
}

/* ---------- Software drawing: pixels, rectangles, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

fn fill_rect(fb: &mut FrameBuffer, r: Rect, color: u32) {
    for y in r.y..r.y + r.h {
        for x in r.x..r.x + r.w {
            put_pixel(fb, x as i32, y as i32, color);
        }
    }
}

/// One-pixel border just inside `r`.
fn outline_rect(fb: &mut FrameBuffer, r: Rect, color: u32) {
    if r.w == 0 || r.h == 0 {
        return;
    }
    let (x0, y0) = (r.x as i32, r.y as i32);
    let (x1, y1) = ((r.x + r.w - 1) as i32, (r.y + r.h - 1) as i32);
    for x in x0..=x1 {
        put_pixel(fb, x, y0, color);
        put_pixel(fb, x, y1, color);
    }
    for y in y0..=y1 {
        put_pixel(fb, x0, y, color);
        put_pixel(fb, x1, y, color);
    }
}

/* ---------- 5x7 bitmap font (digits + the toolbar labels "SIZE:" and "CLEAR") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
