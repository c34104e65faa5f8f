// Turns polled mouse state (minifb has no event callbacks) into canvas pointer events.
// Visual: decides when a click starts a stroke, when the cursor leaves/re-enters
// the canvas mid-drag, and when the stroke ends.

/// One pointer event in canvas-local display coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(f32, f32),
    Move(f32, f32),
    Enter(f32, f32),
    Leave,
    Up(f32, f32),
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    /// A press that started on the canvas and hasn't been released yet.
    owned: bool,
    was_down: bool,
    /// Last position seen inside the canvas.
    last_inside: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of mouse state. `canvas_pos` is the cursor in canvas
    /// coordinates, or None when it is off the canvas.
    pub fn update(
        &mut self,
        canvas_pos: Option<(f32, f32)>,
        button_down: bool,
    ) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let was_inside = self.last_inside.is_some();
        let pressed_now = button_down && !self.was_down;
        let released_now = !button_down && self.was_down;
        self.was_down = button_down;

        match canvas_pos {
            Some((x, y)) => {
                if pressed_now {
                    self.owned = true;
                    events.push(PointerEvent::Down(x, y));
                } else if self.owned && button_down {
                    if !was_inside {
                        events.push(PointerEvent::Enter(x, y));
                        events.push(PointerEvent::Move(x, y));
                    } else if self.last_inside != Some((x, y)) {
                        events.push(PointerEvent::Move(x, y));
                    }
                }
                self.last_inside = Some((x, y));
            }
            None => {
                if was_inside {
                    events.push(PointerEvent::Leave);
                }
                self.last_inside = None;
            }
        }

        if released_now && self.owned {
            self.owned = false;
            let (x, y) = canvas_pos.unwrap_or((-1.0, -1.0));
            events.push(PointerEvent::Up(x, y));
        }
        events
    }
}
