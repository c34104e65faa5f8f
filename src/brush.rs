// Current stroke color + width, edited from the palette and the SIZE field.

use std::num::IntErrorKind;

use crate::types::{BLACK, Color};

/// Widest brush the SIZE field accepts.
pub const MAX_WIDTH: u32 = 50;

/// What happened to a raw SIZE field edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthInput {
    /// Parsed and within range; the field keeps what was typed.
    Accepted(u32),
    /// Parsed but too large; width capped at MAX_WIDTH.
    Clamped(u32),
    /// Not a non-negative integer; width reset to 0.
    Rejected,
}

impl WidthInput {
    /// Text the field must be rewritten to, if any.
    pub fn replacement_text(self) -> Option<String> {
        match self {
            WidthInput::Accepted(_) => None,
            WidthInput::Clamped(w) => Some(w.to_string()),
            WidthInput::Rejected => Some(String::new()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BrushState {
    color: Color,
    width: u32,
}

impl Default for BrushState {
    fn default() -> Self {
        Self { color: BLACK, width: 0 }
    }
}

impl BrushState {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Apply raw text from the SIZE field.
    pub fn set_width(&mut self, raw: &str) -> WidthInput {
        let outcome = match raw.parse::<u32>() {
            Ok(w) if w > MAX_WIDTH => WidthInput::Clamped(MAX_WIDTH),
            Ok(w) => WidthInput::Accepted(w),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => WidthInput::Clamped(MAX_WIDTH),
            Err(_) => WidthInput::Rejected,
        };
        self.width = match outcome {
            WidthInput::Accepted(w) | WidthInput::Clamped(w) => w,
            WidthInput::Rejected => 0,
        };
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn defaults_to_thin_black() {
        let b = BrushState::default();
        assert_eq!(b.color(), BLACK);
        assert_eq!(b.width(), 0);
    }

    #[test]
    fn width_in_range_is_kept() {
        let mut b = BrushState::default();
        assert_eq!(b.set_width("12"), WidthInput::Accepted(12));
        assert_eq!(b.width(), 12);
        assert_eq!(b.set_width("50"), WidthInput::Accepted(50));
        assert_eq!(WidthInput::Accepted(50).replacement_text(), None);
    }

    #[test]
    fn width_above_max_is_clamped() {
        let mut b = BrushState::default();
        let out = b.set_width("75");
        assert_eq!(out, WidthInput::Clamped(50));
        assert_eq!(out.replacement_text().as_deref(), Some("50"));
        assert_eq!(b.width(), 50);
        assert_eq!(b.set_width("99999999999"), WidthInput::Clamped(50));
    }

    #[test]
    fn garbage_width_resets_to_empty() {
        let mut b = BrushState::default();
        for raw in ["abc", "", "-5", "3.5", " 7"] {
            b.set_width("20");
            let out = b.set_width(raw);
            assert_eq!(out, WidthInput::Rejected, "{raw:?}");
            assert_eq!(out.replacement_text().as_deref(), Some(""));
            assert_eq!(b.width(), 0);
        }
    }

    #[test]
    fn color_is_replaced() {
        let mut b = BrushState::default();
        let red = Rgba([255, 0, 0, 255]);
        b.set_color(red);
        assert_eq!(b.color(), red);
    }
}
