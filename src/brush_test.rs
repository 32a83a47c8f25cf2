use super::*;

#[test]
fn level_maps_to_reciprocal_strength() {
    assert!((BrushStrength::from_level(1).value() - 0.1).abs() < 1e-12);
    assert!((BrushStrength::from_level(9).value() - 0.5).abs() < 1e-12);
    assert_eq!(BrushStrength::from_level(10).value(), 1.0);
}

#[test]
fn from_value_recovers_every_level() {
    for level in MIN_LEVEL..=MAX_LEVEL {
        let strength = BrushStrength::from_level(level);
        assert_eq!(BrushStrength::from_value(strength.value()).level(), level);
    }
}

#[test]
fn from_value_boundaries() {
    assert_eq!(BrushStrength::from_value(0.1).level(), 1);
    assert_eq!(BrushStrength::from_value(1.0).level(), 10);
}

#[test]
fn from_input_accepts_only_one_through_ten() {
    assert_eq!(BrushStrength::from_input("1").map(|s| s.level()), Some(1));
    assert_eq!(BrushStrength::from_input(" 10 ").map(|s| s.level()), Some(10));
    for bad in ["0", "11", "", "abc", "-3", "2.5", "999"] {
        assert!(BrushStrength::from_input(bad).is_none(), "{bad} should be rejected");
    }
}

#[test]
fn ticks_to_saturate_matches_ceil_of_reciprocal() {
    for level in MIN_LEVEL..=MAX_LEVEL {
        let s = BrushStrength::from_level(level);
        assert_eq!(s.ticks_to_saturate(), (1.0 / s.value()).round() as u32);
    }
    assert_eq!(BrushStrength::from_level(1).ticks_to_saturate(), 10);
    assert_eq!(BrushStrength::from_level(10).ticks_to_saturate(), 1);
}

#[test]
fn default_brush_is_black_full_strength() {
    let brush = Brush::new(BrushStrength::default());
    assert_eq!(brush.color, BrushColor::Solid(Rgb::BLACK));
    assert_eq!(brush.strength.level(), 10);
    assert_eq!(PALETTE[0], Rgb::BLACK);
}
