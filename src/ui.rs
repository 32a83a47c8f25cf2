// The options panel under the grid: colour swatches, rainbow, the two
// numeric fields, the gridlines checkbox and the reset/mode buttons.
// Widget rectangles are derived from the panel rect each frame, so the
// panel follows the grid when the window is resized.

use std::time::{Duration, Instant};

use crate::brush::{BrushColor, PALETTE};
use crate::color::Rgb;
use crate::controller::GridController;
use crate::draw::{GLYPH_H, draw_text_5x7, fill_rect, stroke_rect, text_width};
use crate::field::{FieldId, MAX_FIELD_CHARS};
use crate::types::FrameBuffer;
use crate::viewport::Rect;

const SWATCH: u32 = 18;
const GAP: u32 = 6;
const ROW_SWATCHES: u32 = 6;
const ROW_FIELDS: u32 = 34;
const ROW_BUTTONS: u32 = 60;
const CONTROL_H: u32 = 15;
const CHECKBOX: u32 = 11;
const BUTTON_PAD: u32 = 4;

/// How long a clicked button stays drawn pressed.
pub const PRESS_FLASH: Duration = Duration::from_millis(100);

const TEXT: Rgb = Rgb::new(30, 30, 30);
const FRAME: Rgb = Rgb::new(90, 90, 90);
const FOCUS: Rgb = Rgb::new(0, 110, 220);
const BUTTON_FACE: Rgb = Rgb::new(225, 225, 225);
const BUTTON_PRESSED: Rgb = Rgb::new(180, 180, 180);
const OUTLINE: Rgb = Rgb::new(0, 200, 255);

pub const RAINBOW_STRIPES: [Rgb; 6] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 165, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 170, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(140, 0, 200),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Swatch(usize),
    Rainbow,
    Field(FieldId),
    Gridlines,
    Reset,
    Mode,
}

/// Transient look of the panel: what the pointer hovers, what was clicked.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanelState {
    pub hovered: Option<Widget>,
    pressed: Option<(Widget, Instant)>,
}

impl PanelState {
    pub fn press(&mut self, widget: Widget, now: Instant) {
        self.pressed = Some((widget, now));
    }

    pub fn is_pressed(&self, widget: Widget, now: Instant) -> bool {
        self.pressed
            .is_some_and(|(w, at)| w == widget && now.saturating_duration_since(at) < PRESS_FLASH)
    }
}

pub struct Panel {
    area: Rect,
    widgets: Vec<(Widget, Rect)>,
}

impl Panel {
    pub fn new(area: Rect) -> Self {
        let mut widgets = Vec::new();

        let mut x = area.x;
        let y = area.y + ROW_SWATCHES;
        for i in 0..PALETTE.len() {
            widgets.push((Widget::Swatch(i), Rect::new(x, y, SWATCH, SWATCH)));
            x += SWATCH + GAP;
        }
        widgets.push((Widget::Rainbow, Rect::new(x, y, SWATCH, SWATCH)));

        let field_w = text_width(&"0".repeat(MAX_FIELD_CHARS)) + 2 * BUTTON_PAD;
        let y = area.y + ROW_FIELDS;
        let mut x = area.x + label_width(FieldId::Resolution);
        widgets.push((Widget::Field(FieldId::Resolution), Rect::new(x, y, field_w, CONTROL_H)));
        x += field_w + GAP * 2 + label_width(FieldId::BrushStrength);
        widgets.push((Widget::Field(FieldId::BrushStrength), Rect::new(x, y, field_w, CONTROL_H)));
        x += field_w + GAP * 2;
        widgets.push((Widget::Gridlines, Rect::new(x, y + 2, CHECKBOX, CHECKBOX)));

        let y = area.y + ROW_BUTTONS;
        let reset_w = text_width("RESET") + 2 * BUTTON_PAD;
        widgets.push((Widget::Reset, Rect::new(area.x, y, reset_w, CONTROL_H)));
        let mode_w = text_width("ETCH-A-SKETCH") + 2 * BUTTON_PAD;
        widgets.push((Widget::Mode, Rect::new(area.x + reset_w + GAP, y, mode_w, CONTROL_H)));

        Self { area, widgets }
    }

    pub fn hit(&self, x: u32, y: u32) -> Option<Widget> {
        if !self.area.contains(x, y) {
            return None;
        }
        self.widgets.iter().find(|(_, r)| r.contains(x, y)).map(|(w, _)| *w)
    }

    #[cfg(test)]
    pub fn rect(&self, widget: Widget) -> Option<Rect> {
        self.widgets.iter().find(|(w, _)| *w == widget).map(|(_, r)| *r)
    }

    pub fn draw(&self, fb: &mut FrameBuffer, controller: &GridController, state: &PanelState, now: Instant) {
        for &(widget, rect) in &self.widgets {
            match widget {
                Widget::Swatch(i) => {
                    fill_rect(fb, rect, PALETTE[i]);
                    stroke_rect(fb, rect, FRAME);
                    if controller.brush().color == BrushColor::Solid(PALETTE[i]) {
                        stroke_rect(fb, grow(rect, 2), OUTLINE);
                    }
                }
                Widget::Rainbow => {
                    draw_rainbow(fb, rect);
                    stroke_rect(fb, rect, FRAME);
                    if controller.brush().color == BrushColor::Rainbow {
                        stroke_rect(fb, grow(rect, 2), OUTLINE);
                    }
                }
                Widget::Field(id) => {
                    let label = field_label(id);
                    draw_text_5x7(fb, rect.x - label_width(id), text_y(rect), label, TEXT);
                    let field = controller.field(id);
                    fill_rect(fb, rect, Rgb::WHITE);
                    stroke_rect(fb, rect, if field.is_focused() { FOCUS } else { FRAME });
                    draw_text_5x7(fb, rect.x + BUTTON_PAD, text_y(rect), field.text(), TEXT);
                }
                Widget::Gridlines => {
                    fill_rect(fb, rect, Rgb::WHITE);
                    stroke_rect(fb, rect, FRAME);
                    if controller.gridlines() {
                        fill_rect(fb, shrink(rect, 3), TEXT);
                    }
                    draw_text_5x7(fb, rect.x + rect.w + BUTTON_PAD, rect.y + 2, "GRID", TEXT);
                }
                Widget::Reset => draw_button(fb, rect, "RESET", state.is_pressed(widget, now)),
                Widget::Mode => {
                    let label = if state.hovered == Some(Widget::Mode) {
                        "CHANGE MODE"
                    } else {
                        controller.session().mode.label()
                    };
                    draw_button(fb, rect, label, state.is_pressed(widget, now));
                }
            }
        }
    }
}

fn field_label(id: FieldId) -> &'static str {
    match id {
        FieldId::Resolution => "RES",
        FieldId::BrushStrength => "STR",
    }
}

fn label_width(id: FieldId) -> u32 {
    text_width(field_label(id)) + BUTTON_PAD
}

fn text_y(rect: Rect) -> u32 {
    rect.y + rect.h.saturating_sub(GLYPH_H) / 2
}

fn draw_button(fb: &mut FrameBuffer, rect: Rect, label: &str, pressed: bool) {
    fill_rect(fb, rect, if pressed { BUTTON_PRESSED } else { BUTTON_FACE });
    stroke_rect(fb, rect, FRAME);
    let x = rect.x + rect.w.saturating_sub(text_width(label)) / 2;
    draw_text_5x7(fb, x, text_y(rect), label, TEXT);
}

fn draw_rainbow(fb: &mut FrameBuffer, rect: Rect) {
    let n = RAINBOW_STRIPES.len() as u32;
    for (i, color) in RAINBOW_STRIPES.iter().enumerate() {
        let i = i as u32;
        let x0 = rect.x + rect.w * i / n;
        let x1 = rect.x + rect.w * (i + 1) / n;
        fill_rect(fb, Rect::new(x0, rect.y, x1 - x0, rect.h), *color);
    }
}

fn grow(rect: Rect, by: u32) -> Rect {
    Rect::new(rect.x.saturating_sub(by), rect.y.saturating_sub(by), rect.w + 2 * by, rect.h + 2 * by)
}

fn shrink(rect: Rect, by: u32) -> Rect {
    Rect::new(rect.x + by, rect.y + by, rect.w.saturating_sub(2 * by), rect.h.saturating_sub(2 * by))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Layout;

    fn panel() -> Panel {
        Panel::new(Layout::for_window(800).panel)
    }

    fn centre(r: Rect) -> (u32, u32) {
        (r.x + r.w / 2, r.y + r.h / 2)
    }

    #[test]
    fn every_widget_is_hittable_at_its_centre() {
        let p = panel();
        for &(widget, rect) in &p.widgets {
            let (x, y) = centre(rect);
            assert_eq!(p.hit(x, y), Some(widget));
        }
    }

    #[test]
    fn widgets_fit_inside_the_narrowest_panel() {
        let p = Panel::new(Layout::for_window(100).panel);
        for (widget, rect) in &p.widgets {
            assert!(rect.x + rect.w <= p.area.x + p.area.w, "{widget:?} overflows");
            assert!(rect.y + rect.h <= p.area.y + p.area.h, "{widget:?} overflows");
        }
    }

    #[test]
    fn empty_panel_space_hits_nothing() {
        let p = panel();
        assert_eq!(p.hit(p.area.x + p.area.w - 1, p.area.y + p.area.h - 1), None);
        assert_eq!(p.hit(0, 0), None);
    }

    #[test]
    fn press_flash_expires() {
        let t0 = Instant::now();
        let mut state = PanelState::default();
        state.press(Widget::Reset, t0);
        assert!(state.is_pressed(Widget::Reset, t0 + Duration::from_millis(50)));
        assert!(!state.is_pressed(Widget::Mode, t0));
        assert!(!state.is_pressed(Widget::Reset, t0 + PRESS_FLASH));
    }
}
