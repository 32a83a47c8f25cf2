// Window layout: how big the square grid is for a given window width, where
// it sits, and where the options panel goes underneath.
// Only the pixel footprint depends on the window; the cell count never does.

pub const GRID_MARGIN: u32 = 10;
/// Viewport width minus this is the grid side between the two breakpoints.
pub const NARROW_VIEWPORT_INSET: u32 = 20;
pub const MIN_GRID_PX: u32 = 300;
pub const MAX_GRID_PX: u32 = 584;
pub const PANEL_HEIGHT: u32 = 92;

/// Square grid side in pixels for a viewport `width` pixels wide.
pub fn grid_dimensions(viewport_width: u32) -> u32 {
    if viewport_width <= 300 {
        MIN_GRID_PX
    } else if viewport_width <= 600 {
        viewport_width - NARROW_VIEWPORT_INSET
    } else {
        MAX_GRID_PX
    }
}

pub fn cell_size_px(grid_px: u32, resolution: u32) -> f64 {
    grid_px as f64 / resolution.max(1) as f64
}

/// Gridlines only make sense while cells stay comfortably wider than a border.
pub fn gridlines_allowed(resolution: u32, grid_px: u32) -> bool {
    (resolution as f64 + 2.0) < grid_px as f64 / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.w && y < self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub grid: Rect,
    pub panel: Rect,
}

impl Layout {
    pub fn for_window(width: u32) -> Self {
        let side = grid_dimensions(width);
        let grid = Rect::new(GRID_MARGIN, GRID_MARGIN, side, side);
        let panel = Rect::new(GRID_MARGIN, GRID_MARGIN * 2 + side, side, PANEL_HEIGHT);
        Self { grid, panel }
    }

    pub fn grid_px(&self) -> u32 {
        self.grid.w
    }

    /// Smallest window that shows everything.
    pub fn window_size(&self) -> (u32, u32) {
        (self.grid.w + GRID_MARGIN * 2, self.panel.y + self.panel.h + GRID_MARGIN)
    }

    /// Window pixel -> (row, col) of the cell under it.
    pub fn cell_at(&self, x: u32, y: u32, resolution: u32) -> Option<(usize, usize)> {
        if !self.grid.contains(x, y) {
            return None;
        }
        let n = resolution.max(1) as u64;
        let side = self.grid.w as u64;
        let col = (x - self.grid.x) as u64 * n / side;
        let row = (y - self.grid.y) as u64 * n / side;
        Some((row as usize, col as usize))
    }
}

#[cfg(test)]
#[path = "viewport_test.rs"]
mod tests;
