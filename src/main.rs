// What you SEE:
// • A square grid of cells with an options panel underneath.
// • Hold Left Mouse over the grid: the cell under the pointer darkens toward
//   the brush colour, one step every tick, until fully opaque.
// • Panel: colour swatches + rainbow, RES (cells per side) and STR (1-10
//   brush strength) fields, GRID checkbox, RESET and mode buttons.
// • ESC quits.

mod animation;
mod app;
mod brush;
mod color;
mod config;
mod controller;
mod draw;
mod error;
mod field;
mod grid;
mod render;
mod types;
mod ui;
mod viewport;

use std::time::Instant;

use app::{FrameInput, InputTracker};
use config::AppConfig;
use controller::GridController;
use draw::Drawer;
use error::Error;
use render::{PAGE_BACKGROUND, blit, grid_image};
use types::FrameBuffer;
use ui::Panel;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let mut controller = GridController::new(config);
    let (w, h) = controller.layout().window_size();
    let mut drawer = Drawer::new("Etch-A-Sketch", w as usize, h as usize)?;
    tracing::info!(
        resolution = config.resolution,
        brush_level = config.brush_strength.level(),
        tick_ms = config.tick_interval.as_millis() as u64,
        "etch-grid started"
    );

    let mut screen = FrameBuffer::new(w as usize, h as usize, PAGE_BACKGROUND);
    let mut input = InputTracker::default();

    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Inputs -> controller events */
        let (width, height) = drawer.size();
        let frame = FrameInput {
            width: width as u32,
            mouse: drawer.mouse_pos(),
            left_down: drawer.left_mouse_down(),
            keys: drawer.typed_keys(),
        };
        input.process(&frame, &mut controller, now);

        /* 2) Advance the active paint run */
        controller.tick(now);

        /* 3) Draw grid + panel */
        screen.resize(width.max(1), height.max(1));
        screen.fill(PAGE_BACKGROUND);
        let layout = *controller.layout();
        let image = grid_image(controller.grid(), layout.grid_px());
        blit(&image, &mut screen, layout.grid.x as usize, layout.grid.y as usize);
        Panel::new(layout.panel).draw(&mut screen, &controller, &input.panel, now);

        /* 4) Present */
        drawer.present(&screen)?;
    }

    tracing::info!("etch-grid closed");
    Ok(())
}
