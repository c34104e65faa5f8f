// What you SEE:
// • A white canvas with a palette down the left and a toolbar on top.
// • Hold Left Mouse on the canvas: a line follows the cursor in the brush color.
// • Click a swatch to change color; type digits (Backspace to edit) to set SIZE (0-50).
// • CLEAR button or C wipes the canvas. ESC quits.

mod brush;
mod buffer;
mod cli;
mod draw;
mod error;
mod input;
mod palette;
mod raster;
mod surface;
mod types;

use brush::BrushState;
use clap::Parser;
use cli::Cli;
use draw::{Drawer, FieldKey, Hit, Layout, blit_canvas, draw_palette, draw_toolbar};
use error::Error;
use input::{PointerEvent, PointerTracker};
use log::{debug, info, trace};
use palette::Palette;
use surface::DrawSurface;
use types::FrameBuffer;

/// Longest text the SIZE field holds.
const SIZE_FIELD_MAX: usize = 4;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    /* --- Canvas, brush, palette ---
       Visual: nothing on screen yet; the canvas starts all white. */
    let (canvas_w, canvas_h) = (cli.width as usize, cli.height as usize);
    let mut surface = DrawSurface::new(canvas_w, canvas_h);
    let palette = Palette::plan9();
    let mut brush = BrushState::default();
    let mut size_text = cli.stroke_width.clone();
    apply_size_text(&mut brush, &mut size_text);
    let mut selected: Option<usize> = None;

    /* --- Window setup ---
       Visual: window opens with toolbar, palette and blank canvas. */
    let layout = Layout::new(canvas_w, canvas_h);
    let mut drawer = Drawer::new(&cli.title, &layout)?;
    let (win_w, win_h) = layout.window_size();
    info!(
        "canvas {}x{} (buffer {}x{}), window {}x{}",
        canvas_w, canvas_h, surface.width(), surface.height(), win_w, win_h
    );

    let mut screen = FrameBuffer::new(win_w, win_h);
    let mut tracker = PointerTracker::new();
    let mut was_down = false;
    let mut chrome_dirty = true;
    blit_canvas(&mut screen, &layout, &surface);

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Keyboard: SIZE field edits + clear */
        for key in drawer.field_keys() {
            match key {
                FieldKey::Digit(d) if size_text.len() < SIZE_FIELD_MAX => size_text.push(d),
                FieldKey::Digit(_) => continue,
                FieldKey::Backspace => {
                    size_text.pop();
                }
            }
            apply_size_text(&mut brush, &mut size_text);
            chrome_dirty = true;
        }
        if drawer.c_pressed_once() {
            debug!("clear (key)");
            surface.clear();
        }

        /* 2) Mouse: toolbar/palette clicks, then canvas pointer events */
        let mouse = drawer.mouse_pos();
        let down = drawer.left_mouse_down();
        let hit = mouse.map_or(Hit::Outside, |(x, y)| layout.hit(x, y));
        if down && !was_down {
            match hit {
                Hit::Swatch(i) => {
                    if let Some(c) = palette.get(i) {
                        debug!("color {i} selected: {:?}", c.0);
                        brush.set_color(c);
                        selected = Some(i);
                        chrome_dirty = true;
                    } else {
                        debug!("ignoring swatch index {i} outside palette");
                    }
                }
                Hit::Clear => {
                    debug!("clear (button)");
                    surface.clear();
                }
                _ => {}
            }
        }
        was_down = down;

        let canvas_pos = match hit {
            Hit::Canvas(x, y) => Some((x, y)),
            _ => None,
        };
        for ev in tracker.update(canvas_pos, down) {
            trace!("{ev:?}");
            match ev {
                PointerEvent::Down(x, y) => surface.pointer_down(x, y, &brush),
                PointerEvent::Move(x, y) => surface.pointer_move(x, y, &brush),
                PointerEvent::Enter(x, y) => surface.pointer_enter(x, y),
                PointerEvent::Leave => surface.pointer_leave(),
                PointerEvent::Up(x, y) => {
                    trace!("released at ({x}, {y})");
                    surface.pointer_up();
                }
            }
            trace!("stroke now {:?}", surface.stroke());
        }

        /* 3) Repaint only what changed.
           Visual: the canvas refreshes right after each dab/segment/clear. */
        if surface.take_changed() {
            blit_canvas(&mut screen, &layout, &surface);
        }
        if chrome_dirty {
            draw_toolbar(&mut screen, &layout, &size_text, brush.color());
            draw_palette(&mut screen, &layout, &palette, selected);
            chrome_dirty = false;
        }

        /* 4) Present to the window. */
        drawer.present(&screen)?;
    }

    info!("window closed");
    Ok(())
}

/// Push the field text into the brush; rewrite the field if it was clamped or rejected.
fn apply_size_text(brush: &mut BrushState, size_text: &mut String) {
    let outcome = brush.set_width(size_text);
    if let Some(text) = outcome.replacement_text() {
        *size_text = text;
    }
    debug!("stroke width {} ({outcome:?})", brush.width());
}
