// Structured colours for cells and the brush.
// A cell's colour is always an RGB triple plus an alpha in [0,1]; the css
// text form only exists at the boundary (to_css / parse_css).

use std::fmt;

use rand::Rng;

use crate::error::Error;

/// Alpha values this close to 1.0 count as saturated, so ten steps of 0.1
/// land on exactly 1.0 instead of 0.9999999999999999.
pub const ALPHA_EPSILON: f64 = 1e-9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Each channel independently uniform over 0..=255.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { r: rng.random(), g: rng.random(), b: rng.random() }
    }

    /// Pack as 0x00RRGGBB for minifb.
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub rgb: Rgb,
    alpha: f64,
}

impl Color {
    pub fn new(rgb: Rgb, alpha: f64) -> Self {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        Self { rgb, alpha }
    }

    pub fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    pub fn transparent(rgb: Rgb) -> Self {
        Self { rgb, alpha: 0.0 }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn is_saturated(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Raise alpha by `step`, capped at 1. Returns the new alpha.
    pub fn increase_alpha(&mut self, step: f64) -> f64 {
        let next = self.alpha + step;
        self.alpha = if next >= 1.0 - ALPHA_EPSILON { 1.0 } else { next.max(0.0) };
        self.alpha
    }

    /// Straight alpha blend over an opaque background.
    pub fn composite_over(&self, background: Rgb) -> Rgb {
        let mix = |fg: u8, bg: u8| -> u8 {
            let v = fg as f64 * self.alpha + bg as f64 * (1.0 - self.alpha);
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.rgb.r, background.r),
            g: mix(self.rgb.g, background.g),
            b: mix(self.rgb.b, background.b),
        }
    }

    /// `rgba(r,g,b,a)` the way a browser style string carries it.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Accepts `rgb(r,g,b)` and `rgba(r,g,b,a)` with optional whitespace.
    pub fn parse_css(text: &str) -> Result<Self, Error> {
        let err = || Error::ColorParse(text.to_string());
        let t = text.trim();
        let inner = t
            .strip_prefix("rgba(")
            .or_else(|| t.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(err());
        }
        let channel = |s: &str| s.parse::<u8>().map_err(|_| err());
        let rgb = Rgb::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
        let alpha = match parts.get(3) {
            Some(a) => a.parse::<f64>().map_err(|_| err())?,
            None => 1.0,
        };
        if !(0.0..=1.0).contains(&alpha) {
            return Err(err());
        }
        Ok(Self::new(rgb, alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.rgb;
        write!(f, "rgba({r},{g},{b},{})", self.alpha)
    }
}

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;
