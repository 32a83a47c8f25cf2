// Brush settings: colour (a swatch or rainbow) and strength.
// Strength is entered as a level 1..=10 and applied as 1 / (11 - level)
// alpha per paint step, so level 10 saturates a cell in a single step.

use crate::color::Rgb;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BrushStrength {
    level: u8,
}

impl BrushStrength {
    /// Out-of-range levels are clamped.
    pub fn from_level(level: u8) -> Self {
        Self { level: level.clamp(MIN_LEVEL, MAX_LEVEL) }
    }

    /// Parse what the user typed. `None` means reject and revert the field.
    pub fn from_input(text: &str) -> Option<Self> {
        let level = text.trim().parse::<u8>().ok()?;
        (MIN_LEVEL..=MAX_LEVEL).contains(&level).then_some(Self { level })
    }

    /// Re-derive the level from an applied strength: 11 - round(1 / strength).
    pub fn from_value(strength: f64) -> Self {
        let divisor = (1.0 / strength).round();
        let level = (11.0 - divisor).clamp(MIN_LEVEL as f64, MAX_LEVEL as f64);
        Self { level: level as u8 }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Alpha added per paint step, in (0, 1].
    pub fn value(&self) -> f64 {
        1.0 / (11 - self.level) as f64
    }

    /// Steps needed to take a cell from alpha 0 to alpha 1.
    pub fn ticks_to_saturate(&self) -> u32 {
        (11 - self.level) as u32
    }
}

impl Default for BrushStrength {
    fn default() -> Self {
        Self { level: MAX_LEVEL }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BrushColor {
    Solid(Rgb),
    /// A fresh random colour on every step, no alpha ramp.
    Rainbow,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Brush {
    pub color: BrushColor,
    pub strength: BrushStrength,
}

impl Brush {
    pub fn new(strength: BrushStrength) -> Self {
        Self { color: BrushColor::Solid(Rgb::BLACK), strength }
    }
}

/// Swatches offered by the options panel, black first (the default brush).
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(0, 0, 0),       // black
    Rgb::new(128, 128, 128), // grey
    Rgb::new(255, 0, 0),     // red
    Rgb::new(255, 165, 0),   // orange
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(0, 128, 0),     // green
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(128, 0, 128),   // purple
];

#[cfg(test)]
#[path = "brush_test.rs"]
mod tests;
