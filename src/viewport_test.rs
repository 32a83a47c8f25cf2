use super::*;

#[test]
fn breakpoints() {
    assert_eq!(grid_dimensions(120), 300);
    assert_eq!(grid_dimensions(300), 300);
    assert_eq!(grid_dimensions(301), 281);
    assert_eq!(grid_dimensions(450), 430);
    assert_eq!(grid_dimensions(600), 580);
    assert_eq!(grid_dimensions(601), 584);
    assert_eq!(grid_dimensions(1920), 584);
}

#[test]
fn cell_size_for_default_grid() {
    assert!((cell_size_px(584, 50) - 11.68).abs() < 1e-9);
}

#[test]
fn gridlines_guard() {
    // 50 + 2 < 584 / 2 = 292
    assert!(gridlines_allowed(50, 584));
    assert!(!gridlines_allowed(290, 584));
    assert!(!gridlines_allowed(148, 300));
    assert!(gridlines_allowed(147, 300));
}

#[test]
fn layout_stacks_panel_under_grid() {
    let layout = Layout::for_window(800);
    assert_eq!(layout.grid, Rect::new(10, 10, 584, 584));
    assert_eq!(layout.panel.y, 604);
    assert_eq!(layout.panel.w, 584);
    assert_eq!(layout.window_size(), (604, 604 + PANEL_HEIGHT + 10));
}

#[test]
fn cell_at_maps_pixels_to_cells() {
    let layout = Layout::for_window(800);
    assert_eq!(layout.cell_at(10, 10, 50), Some((0, 0)));
    assert_eq!(layout.cell_at(10 + 583, 10 + 583, 50), Some((49, 49)));
    assert_eq!(layout.cell_at(10 + 12, 10, 50), Some((0, 1)));
    assert_eq!(layout.cell_at(9, 10, 50), None);
    assert_eq!(layout.cell_at(10 + 584, 20, 50), None);
}

#[test]
fn cell_at_handles_more_cells_than_pixels() {
    let layout = Layout::for_window(300);
    assert_eq!(layout.cell_at(10 + 299, 10 + 299, 500), Some((498, 498)));
}
