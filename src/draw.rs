// Window + software drawing utilities.
// 1) A resizable window that shows the framebuffer and reports input.
// 2) Rectangle fills/outlines for the options panel.
// 3) A tiny 5x7 bitmap font for panel labels and field text.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::color::Rgb;
use crate::error::Error;
use crate::types::FrameBuffer;
use crate::viewport::Rect;

pub const GLYPH_W: u32 = 5;
pub const GLYPH_H: u32 = 7;
/// Horizontal advance per character (glyph + 1px spacing).
pub const GLYPH_ADVANCE: u32 = GLYPH_W + 1;

/// Keys a focused text field cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedKey {
    Digit(char),
    Backspace,
    /// Enter.
    Confirm,
    Tab,
}

pub struct Drawer {
    window: Window,
}

impl Drawer {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window =
            Window::new(title, width, height, options).map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current inner size in pixels.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Mouse position in window pixels, `None` while outside the window.
    pub fn mouse_pos(&self) -> Option<(u32, u32)> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| (x.max(0.0) as u32, y.max(0.0) as u32))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Keys pressed since the last frame, with key repeat, mapped for fields.
    pub fn typed_keys(&self) -> Vec<TypedKey> {
        self.window
            .get_keys_pressed(KeyRepeat::Yes)
            .into_iter()
            .filter_map(typed_key)
            .collect()
    }
}

fn typed_key(key: Key) -> Option<TypedKey> {
    let digit = |d: u8| Some(TypedKey::Digit((b'0' + d) as char));
    match key {
        Key::Key0 | Key::NumPad0 => digit(0),
        Key::Key1 | Key::NumPad1 => digit(1),
        Key::Key2 | Key::NumPad2 => digit(2),
        Key::Key3 | Key::NumPad3 => digit(3),
        Key::Key4 | Key::NumPad4 => digit(4),
        Key::Key5 | Key::NumPad5 => digit(5),
        Key::Key6 | Key::NumPad6 => digit(6),
        Key::Key7 | Key::NumPad7 => digit(7),
        Key::Key8 | Key::NumPad8 => digit(8),
        Key::Key9 | Key::NumPad9 => digit(9),
        Key::Backspace | Key::Delete => Some(TypedKey::Backspace),
        Key::Enter | Key::NumPadEnter => Some(TypedKey::Confirm),
        Key::Tab => Some(TypedKey::Tab),
        _ => None,
    }
}

/* ---------- Software drawing: pixels, rectangles, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: u32, y: u32, color: u32) {
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

pub fn fill_rect(fb: &mut FrameBuffer, rect: Rect, color: Rgb) {
    let packed = color.to_u32();
    for y in rect.y..rect.y + rect.h {
        for x in rect.x..rect.x + rect.w {
            put_pixel(fb, x, y, packed);
        }
    }
}

/// 1px outline just inside `rect`.
pub fn stroke_rect(fb: &mut FrameBuffer, rect: Rect, color: Rgb) {
    if rect.w == 0 || rect.h == 0 {
        return;
    }
    let packed = color.to_u32();
    let (right, bottom) = (rect.x + rect.w - 1, rect.y + rect.h - 1);
    for x in rect.x..=right {
        put_pixel(fb, x, rect.y, packed);
        put_pixel(fb, x, bottom, packed);
    }
    for y in rect.y..=bottom {
        put_pixel(fb, rect.x, y, packed);
        put_pixel(fb, right, y, packed);
    }
}

/* ---------- 5x7 bitmap font (digits, A-Z, a little punctuation) ---------- */

/// Return a 5x7 glyph bitmap; lowercase letters use the uppercase glyph.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),

        _ => None,
    }
}

fn draw_char_5x7(fb: &mut FrameBuffer, x: u32, y: u32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..GLYPH_W {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx, y + ry as u32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: u32, y: u32, text: &str, color: Rgb) {
    let packed = color.to_u32();
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, packed);
        x += GLYPH_ADVANCE;
    }
}

/// Width in pixels of `text` drawn with `draw_text_5x7`.
pub fn text_width(text: &str) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 { 0 } else { n * GLYPH_ADVANCE - 1 }
}
