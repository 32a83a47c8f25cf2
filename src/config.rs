//! Startup configuration parsed from environment variables.
//!
//! All keys are optional:
//! - `ETCH_RESOLUTION`: cells per side at startup (default 50)
//! - `ETCH_MAX_RESOLUTION`: upper bound accepted by the resolution field,
//!   clamped to 100..=500 (default 500)
//! - `ETCH_BRUSH_STRENGTH`: brush level 1..=10 (default 10, one-step fill)
//! - `ETCH_BRUSH_COLOR`: starting brush as `rgb(r,g,b)` (default black)
//! - `ETCH_TICK_MS`: paint step interval in milliseconds (default 200)
//! - `ETCH_WINDOW_WIDTH`: initial window width in pixels (default 604)

use std::time::Duration;

use crate::brush::BrushStrength;
use crate::color::{Color, Rgb};
use crate::grid::{MAX_RESOLUTION, MIN_RESOLUTION};

pub const DEFAULT_RESOLUTION: u32 = 50;
pub const DEFAULT_MAX_RESOLUTION: u32 = 500;
pub const MIN_MAX_RESOLUTION: u32 = 100;
pub const DEFAULT_BRUSH_LEVEL: u8 = 10;
pub const DEFAULT_TICK_MS: u64 = 200;
pub const DEFAULT_WINDOW_WIDTH: u32 = 604;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub resolution: u32,
    pub max_resolution: u32,
    pub brush_strength: BrushStrength,
    pub brush_color: Rgb,
    pub tick_interval: Duration,
    pub window_width: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            max_resolution: DEFAULT_MAX_RESOLUTION,
            brush_strength: BrushStrength::from_level(DEFAULT_BRUSH_LEVEL),
            brush_color: Rgb::BLACK,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            window_width: DEFAULT_WINDOW_WIDTH,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let max_resolution =
            env_parse("ETCH_MAX_RESOLUTION", DEFAULT_MAX_RESOLUTION).clamp(MIN_MAX_RESOLUTION, MAX_RESOLUTION);
        let resolution = env_parse("ETCH_RESOLUTION", DEFAULT_RESOLUTION).clamp(MIN_RESOLUTION, max_resolution);
        let tick_ms = env_parse("ETCH_TICK_MS", DEFAULT_TICK_MS).max(1);

        Self {
            resolution,
            max_resolution,
            brush_strength: BrushStrength::from_level(env_parse("ETCH_BRUSH_STRENGTH", DEFAULT_BRUSH_LEVEL)),
            brush_color: brush_color_from_env(),
            tick_interval: Duration::from_millis(tick_ms),
            window_width: env_parse("ETCH_WINDOW_WIDTH", DEFAULT_WINDOW_WIDTH).max(1),
        }
    }
}

fn brush_color_from_env() -> Rgb {
    let Ok(raw) = std::env::var("ETCH_BRUSH_COLOR") else {
        return Rgb::BLACK;
    };
    match Color::parse_css(&raw) {
        Ok(color) => color.rgb,
        Err(e) => {
            tracing::warn!(error = %e, "ETCH_BRUSH_COLOR ignored");
            Rgb::BLACK
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
