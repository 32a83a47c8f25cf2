// Turns per-frame window state into controller events.
// minifb only offers polling, so press/release edges, entering a new cell
// and clicks on panel widgets are all derived by comparing with last frame.

use std::time::Instant;

use crate::brush::PALETTE;
use crate::controller::{Event, GridController};
use crate::draw::TypedKey;
use crate::ui::{Panel, PanelState, Widget};
use crate::viewport::Layout;

/// What the window reported this frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub width: u32,
    pub mouse: Option<(u32, u32)>,
    pub left_down: bool,
    pub keys: Vec<TypedKey>,
}

#[derive(Debug, Default)]
pub struct InputTracker {
    last_width: Option<u32>,
    was_down: bool,
    last_cell: Option<(usize, usize)>,
    pub panel: PanelState,
}

impl InputTracker {
    /// Feed one frame of input to `controller`.
    pub fn process(&mut self, input: &FrameInput, controller: &mut GridController, now: Instant) {
        for event in self.events(input, controller, now) {
            controller.handle(event, now);
        }
    }

    fn events(&mut self, input: &FrameInput, controller: &GridController, now: Instant) -> Vec<Event> {
        let mut events = Vec::new();

        if self.last_width != Some(input.width) {
            self.last_width = Some(input.width);
            events.push(Event::Resize { width: input.width });
        }

        // Resize above may move the grid; hit-test against the new layout.
        let layout = Layout::for_window(input.width);
        let panel = Panel::new(layout.panel);
        let resolution = controller.grid().resolution();
        let widget = input.mouse.and_then(|(x, y)| panel.hit(x, y));
        let cell = input.mouse.and_then(|(x, y)| layout.cell_at(x, y, resolution));
        self.panel.hovered = widget;

        let pressed = input.left_down && !self.was_down;
        let released = !input.left_down && self.was_down;
        self.was_down = input.left_down;

        if pressed {
            // Clicking anywhere but the focused field takes focus away from it.
            if let Some(focused) = controller.focused_field() {
                if widget != Some(Widget::Field(focused)) {
                    events.push(Event::FieldBlur(focused));
                }
            }
            if let Some(widget) = widget {
                events.extend(self.click(widget, now));
            }
            if let Some((row, col)) = cell {
                events.push(Event::PointerDown { row, col });
            }
        } else if cell != self.last_cell {
            if let Some((row, col)) = cell {
                events.push(Event::PointerEnter { row, col });
            }
        }
        self.last_cell = cell;

        if released {
            events.push(Event::PointerUp);
        }

        if let Some(id) = controller.focused_field() {
            for key in &input.keys {
                events.push(match *key {
                    TypedKey::Digit(ch) => Event::FieldChar(id, ch),
                    TypedKey::Backspace => Event::FieldBackspace(id),
                    TypedKey::Confirm => Event::FieldConfirm(id),
                    TypedKey::Tab => Event::FieldTab(id),
                });
            }
        }

        events
    }

    fn click(&mut self, widget: Widget, now: Instant) -> Option<Event> {
        match widget {
            Widget::Swatch(i) => PALETTE.get(i).map(|rgb| Event::SelectSwatch(*rgb)),
            Widget::Rainbow => Some(Event::SelectRainbow),
            Widget::Field(id) => Some(Event::FieldFocus(id)),
            Widget::Gridlines => Some(Event::ToggleGridlines),
            Widget::Reset => {
                self.panel.press(widget, now);
                Some(Event::Reset)
            }
            Widget::Mode => {
                self.panel.press(widget, now);
                Some(Event::ToggleMode)
            }
        }
    }
}
