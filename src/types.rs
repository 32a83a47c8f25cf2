// Core types shared by the renderer and the window.

use crate::color::Rgb;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the window is (pixels)
    pub height: usize,     // how tall the window is (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        Self { width, height, pixels: vec![fill.to_u32(); width * height] }
    }

    /// Match the window size, keeping the allocation when it already fits.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.resize(width * height, 0);
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color.to_u32());
    }
}
