//! Grid controller: owns every piece of mutable drawing state and reacts to
//! one `Event` at a time.
//!
//! PAINTING
//! ========
//! A paint run targets one cell. For a solid brush the cell is first reset to
//! the brush colour at alpha 0 if its hue differs, then one step runs at once
//! and further steps follow every `tick_interval` until alpha reaches 1. The
//! rainbow brush skips the hue check and gives the cell a new random colour on
//! every step until interrupted.
//!
//! At most one run is live: starting a run, releasing the pointer, resetting
//! the canvas or dropping the target cell all replace `Session::active`.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::animation::{Animation, AnimationKind};
use crate::brush::{Brush, BrushColor, BrushStrength};
use crate::color::{Color, Rgb};
use crate::config::AppConfig;
use crate::field::{FieldId, NumericField};
use crate::grid::{Grid, MIN_RESOLUTION, ReconcileOutcome, shell_index};
use crate::viewport::{Layout, cell_size_px, gridlines_allowed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Paint while the button is held.
    Paint,
    /// Paint whatever the pointer passes over.
    EtchASketch,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Paint => "Paint",
            Mode::EtchASketch => "Etch-A-Sketch",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Mode::Paint => Mode::EtchASketch,
            Mode::EtchASketch => Mode::Paint,
        }
    }
}

/// Everything the window can tell the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PointerDown { row: usize, col: usize },
    PointerEnter { row: usize, col: usize },
    /// Released anywhere in the window, not only over the grid.
    PointerUp,
    Resize { width: u32 },
    FieldFocus(FieldId),
    FieldBlur(FieldId),
    FieldChar(FieldId, char),
    FieldBackspace(FieldId),
    /// Enter.
    FieldConfirm(FieldId),
    /// Commits like Enter, then focus moves to the next field.
    FieldTab(FieldId),
    SelectSwatch(Rgb),
    SelectRainbow,
    Reset,
    ToggleMode,
    ToggleGridlines,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub pointer_down: bool,
    pub mode: Mode,
    pub active: Option<Animation>,
}

pub struct GridController {
    config: AppConfig,
    grid: Grid,
    brush: Brush,
    layout: Layout,
    gridlines: bool,
    session: Session,
    resolution_field: NumericField,
    strength_field: NumericField,
    rng: StdRng,
}

impl GridController {
    pub fn new(config: AppConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    pub fn with_rng(config: AppConfig, rng: StdRng) -> Self {
        let resolution = config.resolution.clamp(MIN_RESOLUTION, config.max_resolution);
        let mut brush = Brush::new(config.brush_strength);
        brush.color = BrushColor::Solid(config.brush_color);
        Self {
            grid: Grid::new(resolution),
            brush,
            layout: Layout::for_window(config.window_width),
            gridlines: false,
            session: Session { pointer_down: false, mode: Mode::Paint, active: None },
            resolution_field: NumericField::new(resolution),
            strength_field: NumericField::new(config.brush_strength.level()),
            rng,
            config,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn gridlines(&self) -> bool {
        self.gridlines
    }

    pub fn field(&self, id: FieldId) -> &NumericField {
        match id {
            FieldId::Resolution => &self.resolution_field,
            FieldId::BrushStrength => &self.strength_field,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut NumericField {
        match id {
            FieldId::Resolution => &mut self.resolution_field,
            FieldId::BrushStrength => &mut self.strength_field,
        }
    }

    /// The field that currently has keyboard focus, if any.
    pub fn focused_field(&self) -> Option<FieldId> {
        [FieldId::Resolution, FieldId::BrushStrength]
            .into_iter()
            .find(|id| self.field(*id).is_focused())
    }

    // -------------------------------------------------------------------------
    // Event dispatch
    // -------------------------------------------------------------------------

    pub fn handle(&mut self, event: Event, now: Instant) {
        match event {
            Event::PointerDown { row, col } => self.on_pointer_down(row, col, now),
            Event::PointerEnter { row, col } => self.on_pointer_enter(row, col, now),
            Event::PointerUp => self.on_pointer_up(),
            Event::Resize { width } => self.on_resize(width),
            Event::FieldFocus(id) => self.on_field_focus(id),
            Event::FieldBlur(id) => self.on_field_blur(id),
            Event::FieldChar(id, ch) => self.field_mut(id).push(ch),
            Event::FieldBackspace(id) => self.field_mut(id).backspace(),
            Event::FieldConfirm(id) => self.on_field_blur(id),
            Event::FieldTab(id) => self.on_field_tab(id),
            Event::SelectSwatch(rgb) => self.brush.color = BrushColor::Solid(rgb),
            Event::SelectRainbow => self.brush.color = BrushColor::Rainbow,
            Event::Reset => self.on_reset(),
            Event::ToggleMode => self.on_toggle_mode(),
            Event::ToggleGridlines => self.on_toggle_gridlines(),
        }
    }

    /// Run every paint step whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        while let Some(active) = self.session.active.as_mut() {
            if !active.take_due_step(now) {
                break;
            }
            let (cell, kind) = (active.cell, active.kind);
            if !self.paint_step(cell, kind) {
                self.session.active = None;
            }
        }
    }

    fn on_pointer_down(&mut self, row: usize, col: usize, now: Instant) {
        if self.session.mode != Mode::Paint {
            return;
        }
        self.session.pointer_down = true;
        if self.strength_field.is_focused() {
            self.on_field_blur(FieldId::BrushStrength);
        }
        self.paint_at_intervals(row, col, now);
    }

    fn on_pointer_enter(&mut self, row: usize, col: usize, now: Instant) {
        if self.session.pointer_down || self.session.mode == Mode::EtchASketch {
            self.paint_at_intervals(row, col, now);
        }
    }

    fn on_pointer_up(&mut self) {
        self.session.pointer_down = false;
        self.cancel_animation();
    }

    fn on_resize(&mut self, width: u32) {
        let layout = Layout::for_window(width);
        if layout == self.layout {
            return;
        }
        self.layout = layout;
        debug!(width, grid_px = layout.grid_px(), "grid resized");
        self.enforce_gridline_guard();
    }

    fn on_field_focus(&mut self, id: FieldId) {
        if let Some(other) = self.focused_field().filter(|other| *other != id) {
            self.on_field_blur(other);
        }
        self.field_mut(id).focus();
    }

    /// Blur, Tab and Enter all commit the field, once.
    fn on_field_blur(&mut self, id: FieldId) {
        if !self.field_mut(id).blur() {
            return;
        }
        match id {
            FieldId::Resolution => self.commit_resolution(),
            FieldId::BrushStrength => self.commit_brush_strength(),
        }
    }

    fn on_field_tab(&mut self, id: FieldId) {
        if !self.field(id).is_focused() {
            return;
        }
        self.on_field_blur(id);
        if let Some(next) = id.next() {
            self.field_mut(next).focus();
        }
    }

    fn on_reset(&mut self) {
        self.cancel_animation();
        self.grid.clear();
        info!("canvas reset");
    }

    fn on_toggle_mode(&mut self) {
        self.session.mode = self.session.mode.toggled();
        self.session.pointer_down = false;
        self.cancel_animation();
        debug!(mode = self.session.mode.label(), "mode changed");
    }

    fn on_toggle_gridlines(&mut self) {
        if self.gridlines {
            self.gridlines = false;
            self.grid.set_borders(false);
        } else if gridlines_allowed(self.grid.resolution(), self.layout.grid_px()) {
            self.gridlines = true;
            self.grid.set_borders(true);
        } else {
            let cell_px = cell_size_px(self.layout.grid_px(), self.grid.resolution());
            debug!(resolution = self.grid.resolution(), cell_px, "cells too small for gridlines");
        }
    }

    // -------------------------------------------------------------------------
    // Field commits
    // -------------------------------------------------------------------------

    fn commit_resolution(&mut self) {
        let current = self.grid.resolution();
        let parsed = self
            .resolution_field
            .text()
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| (MIN_RESOLUTION..=self.config.max_resolution).contains(n));

        let Some(resolution) = parsed else {
            debug!(input = self.resolution_field.text(), "resolution rejected");
            self.resolution_field.set_text(current);
            return;
        };

        self.resolution_field.set_text(resolution);
        if resolution == current {
            return;
        }
        self.set_resolution(resolution);
    }

    fn set_resolution(&mut self, resolution: u32) {
        let gridlines = self.gridlines && gridlines_allowed(resolution, self.layout.grid_px());
        match self.grid.reconcile(resolution, gridlines) {
            ReconcileOutcome::Shrunk { removed } => info!(resolution, removed, "grid shrunk"),
            ReconcileOutcome::Grown { added } => info!(resolution, added, "grid grown"),
            ReconcileOutcome::Unchanged => {}
        }

        if self.session.active.as_ref().is_some_and(|a| a.cell >= self.grid.len()) {
            self.cancel_animation();
        }
        self.enforce_gridline_guard();
    }

    fn commit_brush_strength(&mut self) {
        match BrushStrength::from_input(self.strength_field.text()) {
            Some(strength) => {
                self.brush.strength = strength;
                self.strength_field.set_text(strength.level());
                debug!(
                    level = strength.level(),
                    strength = strength.value(),
                    ticks = strength.ticks_to_saturate(),
                    "brush strength set"
                );
            }
            None => {
                debug!(input = self.strength_field.text(), "brush strength rejected");
                let shown = BrushStrength::from_value(self.brush.strength.value());
                self.strength_field.set_text(shown.level());
            }
        }
    }

    /// Gridlines switch off everywhere once cells get too small for them.
    fn enforce_gridline_guard(&mut self) {
        if self.gridlines && !gridlines_allowed(self.grid.resolution(), self.layout.grid_px()) {
            self.gridlines = false;
            self.grid.set_borders(false);
            debug!(resolution = self.grid.resolution(), "gridlines disabled");
        }
    }

    // -------------------------------------------------------------------------
    // Painting
    // -------------------------------------------------------------------------

    fn cancel_animation(&mut self) {
        self.session.active = None;
    }

    fn paint_at_intervals(&mut self, row: usize, col: usize, now: Instant) {
        self.cancel_animation();
        let Some(cell) = self.grid.cell_mut(row, col) else {
            return;
        };
        let index = shell_index(row, col);

        let kind = match self.brush.color {
            BrushColor::Rainbow => AnimationKind::Rainbow,
            BrushColor::Solid(rgb) => {
                if cell.color.is_none_or(|c| c.rgb != rgb) {
                    cell.color = Some(Color::transparent(rgb));
                }
                if cell.color.is_some_and(|c| c.is_saturated()) {
                    return;
                }
                AnimationKind::Ramp
            }
        };

        if self.paint_step(index, kind) {
            self.session.active = Some(Animation::start(index, kind, self.tick_interval(), now));
        }
    }

    /// One step on cell `index`. Returns false once the run is finished.
    fn paint_step(&mut self, index: usize, kind: AnimationKind) -> bool {
        let strength = self.brush.strength.value();
        let Some(cell) = self.grid.cell_by_index_mut(index) else {
            return false;
        };

        match kind {
            AnimationKind::Rainbow => {
                cell.color = Some(Color::opaque(Rgb::random(&mut self.rng)));
                true
            }
            AnimationKind::Ramp => {
                let Some(current) = cell.color.as_mut() else {
                    return false;
                };
                current.increase_alpha(strength);
                trace!(cell = index, alpha = current.alpha(), "paint step");
                if current.is_saturated() {
                    debug!(cell = index, color = %current.to_css(), "cell saturated");
                    return false;
                }
                true
            }
        }
    }

    fn tick_interval(&self) -> Duration {
        self.config.tick_interval
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
