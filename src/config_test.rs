use super::*;

const KEYS: [&str; 6] = [
    "ETCH_RESOLUTION",
    "ETCH_MAX_RESOLUTION",
    "ETCH_BRUSH_STRENGTH",
    "ETCH_BRUSH_COLOR",
    "ETCH_TICK_MS",
    "ETCH_WINDOW_WIDTH",
];

/// # Safety
/// Tests touching the environment share process state; they all live in the
/// single test below so they never race each other.
unsafe fn clear_etch_env() {
    for key in KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn from_env_defaults_overrides_and_clamping() {
    unsafe { clear_etch_env() };
    assert_eq!(AppConfig::from_env(), AppConfig::default());

    unsafe {
        std::env::set_var("ETCH_RESOLUTION", "16");
        std::env::set_var("ETCH_BRUSH_STRENGTH", "3");
        std::env::set_var("ETCH_TICK_MS", "50");
        std::env::set_var("ETCH_WINDOW_WIDTH", "420");
        std::env::set_var("ETCH_BRUSH_COLOR", "rgb(255, 0, 0)");
    }
    let cfg = AppConfig::from_env();
    assert_eq!(cfg.resolution, 16);
    assert_eq!(cfg.brush_strength.level(), 3);
    assert_eq!(cfg.tick_interval, Duration::from_millis(50));
    assert_eq!(cfg.window_width, 420);
    assert_eq!(cfg.brush_color, Rgb::new(255, 0, 0));

    unsafe {
        std::env::set_var("ETCH_MAX_RESOLUTION", "20");
        std::env::set_var("ETCH_RESOLUTION", "450");
        std::env::set_var("ETCH_BRUSH_STRENGTH", "99");
        std::env::set_var("ETCH_BRUSH_COLOR", "crimson");
    }
    let cfg = AppConfig::from_env();
    assert_eq!(cfg.max_resolution, MIN_MAX_RESOLUTION);
    assert_eq!(cfg.resolution, MIN_MAX_RESOLUTION);
    assert_eq!(cfg.brush_strength.level(), 10);
    assert_eq!(cfg.brush_color, Rgb::BLACK);

    unsafe { std::env::set_var("ETCH_RESOLUTION", "lots") };
    assert_eq!(AppConfig::from_env().resolution, DEFAULT_RESOLUTION);

    unsafe { clear_etch_env() };
}

#[test]
fn default_matches_original_settings() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.resolution, 50);
    assert_eq!(cfg.max_resolution, 500);
    assert_eq!(cfg.brush_strength.value(), 1.0);
    assert_eq!(cfg.brush_color, Rgb::BLACK);
    assert_eq!(cfg.tick_interval, Duration::from_millis(200));
}
