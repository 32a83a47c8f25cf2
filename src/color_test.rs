use super::*;

use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn new_clamps_alpha_into_unit_range() {
    assert_eq!(Color::new(Rgb::BLACK, 1.7).alpha(), 1.0);
    assert_eq!(Color::new(Rgb::BLACK, -0.2).alpha(), 0.0);
    assert_eq!(Color::new(Rgb::BLACK, f64::NAN).alpha(), 0.0);
}

#[test]
fn increase_alpha_caps_at_one() {
    let mut c = Color::new(Rgb::BLACK, 0.8);
    assert_eq!(c.increase_alpha(0.5), 1.0);
    assert!(c.is_saturated());
}

#[test]
fn ten_tenths_saturate_exactly() {
    let mut c = Color::transparent(Rgb::BLACK);
    for _ in 0..9 {
        c.increase_alpha(0.1);
        assert!(!c.is_saturated());
    }
    c.increase_alpha(0.1);
    assert_eq!(c.alpha(), 1.0);
}

#[test]
fn css_output_matches_browser_style_string() {
    assert_eq!(Color::new(Rgb::new(12, 0, 255), 0.5).to_css(), "rgba(12,0,255,0.5)");
    assert_eq!(Color::opaque(Rgb::WHITE).to_css(), "rgba(255,255,255,1)");
}

#[test]
fn parse_css_accepts_rgb_and_rgba() {
    let c = Color::parse_css("rgb(1, 2, 3)").unwrap();
    assert_eq!(c.rgb, Rgb::new(1, 2, 3));
    assert_eq!(c.alpha(), 1.0);

    let c = Color::parse_css(" rgba(10,20,30,0.25) ").unwrap();
    assert_eq!(c.rgb, Rgb::new(10, 20, 30));
    assert!((c.alpha() - 0.25).abs() < f64::EPSILON);
}

#[test]
fn parse_css_rejects_malformed_text_without_panicking() {
    for bad in ["", "red", "rgb(1,2)", "rgb(1,2,3", "rgba(1,2,3,4)", "rgb(256,0,0)", "rgba(a,b,c,d)"] {
        assert!(Color::parse_css(bad).is_err(), "{bad} should be rejected");
    }
}

#[test]
fn parse_css_reads_back_to_css_output() {
    let c = Color::new(Rgb::new(200, 100, 50), 0.3);
    assert_eq!(Color::parse_css(&c.to_css()).unwrap(), c);
}

#[test]
fn composite_over_white() {
    let half_black = Color::new(Rgb::BLACK, 0.5);
    assert_eq!(half_black.composite_over(Rgb::WHITE), Rgb::new(128, 128, 128));
    assert_eq!(Color::transparent(Rgb::BLACK).composite_over(Rgb::WHITE), Rgb::WHITE);
    assert_eq!(Color::opaque(Rgb::new(9, 8, 7)).composite_over(Rgb::WHITE), Rgb::new(9, 8, 7));
}

#[test]
fn rgb_packs_for_framebuffer() {
    assert_eq!(Rgb::new(0x12, 0x34, 0x56).to_u32(), 0x0012_3456);
}

#[test]
fn random_rgb_is_deterministic_for_a_seed() {
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    assert_eq!(Rgb::random(&mut a), Rgb::random(&mut b));
}
