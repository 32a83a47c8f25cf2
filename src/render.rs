// Turns the cell grid into pixels.
// The grid is composed into an RGB image first, then blitted into the
// window's framebuffer at the grid origin.

use image::{Rgb as Pixel, RgbImage};

use crate::color::Rgb;
use crate::grid::Grid;
use crate::types::FrameBuffer;

/// What an unpainted cell shows through.
pub const PAGE_BACKGROUND: Rgb = Rgb::WHITE;
pub const GRIDLINE: Rgb = Rgb::new(211, 211, 211);

/// Pixel where cell `i` (of `n`) starts along a side of `side` pixels.
#[inline]
fn cell_start(i: usize, n: usize, side: usize) -> usize {
    (i * side).div_ceil(n)
}

/// Render `grid` as a `side`×`side` image.
pub fn grid_image(grid: &Grid, side: u32) -> RgbImage {
    let n = grid.resolution().max(1) as usize;
    let px = side as usize;
    let line = pixel(GRIDLINE);
    let mut image = RgbImage::from_pixel(side, side, pixel(PAGE_BACKGROUND));

    for (cell, (row, col)) in grid.cells().iter().zip(grid.positions()) {
        let (x0, x1) = (cell_start(col, n, px), cell_start(col + 1, n, px));
        let (y0, y1) = (cell_start(row, n, px), cell_start(row + 1, n, px));
        let fill = pixel(cell.color.map_or(PAGE_BACKGROUND, |c| c.composite_over(PAGE_BACKGROUND)));
        for y in y0..y1 {
            for x in x0..x1 {
                let edge = x == x0 || x + 1 == x1 || y == y0 || y + 1 == y1;
                let p = if cell.bordered && edge { line } else { fill };
                image.put_pixel(x as u32, y as u32, p);
            }
        }
    }
    image
}

fn pixel(rgb: Rgb) -> Pixel<u8> {
    Pixel([rgb.r, rgb.g, rgb.b])
}

/// Copy `image` into `fb` with its top-left corner at (x, y), clipped.
pub fn blit(image: &RgbImage, fb: &mut FrameBuffer, x: usize, y: usize) {
    for (ix, iy, pixel) in image.enumerate_pixels() {
        let (fx, fy) = (x + ix as usize, y + iy as usize);
        if fx >= fb.width || fy >= fb.height {
            continue;
        }
        let [r, g, b] = pixel.0;
        fb.pixels[fy * fb.width + fx] = Rgb::new(r, g, b).to_u32();
    }
}
