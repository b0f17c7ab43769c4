use globe::color::{glow, heat};

fn intensity(c: [u8; 4]) -> u32 {
    u32::from(c[0]) + u32::from(c[1]) + u32::from(c[2])
}

#[test]
fn ramp_is_monotonic_in_percentage() {
    assert!(intensity(heat(90.0)) > intensity(heat(10.0)));
    let mut prev = intensity(heat(0.0));
    for pct in (10..=100).step_by(10) {
        let cur = intensity(heat(pct as f32));
        assert!(cur >= prev, "ramp dipped at {pct}%");
        prev = cur;
    }
}

#[test]
fn ramp_clamps_out_of_range_input() {
    assert_eq!(heat(-5.0), heat(0.0));
    assert_eq!(heat(150.0), heat(100.0));
    assert_eq!(heat(f32::NAN), heat(0.0));
}

#[test]
fn glow_alpha_rises_with_share() {
    assert!(glow(90.0)[3] > glow(10.0)[3]);
    assert_eq!(glow(50.0)[0..3], heat(50.0)[0..3], "same hue as the dot");
    assert!(glow(0.0)[3] < 255, "glow stays translucent");
}
