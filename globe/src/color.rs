//! Share-of-traffic color mapping for the point pass.

/// RGBA color, 8-bit per channel, straight alpha.
pub type Rgba = [u8; 4];

#[inline]
fn sat01(x: f32) -> f32 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

/// Blue heat ramp over a 0–100 percentage.
///
/// Monotonic: a larger share never maps to a dimmer color, so relative
/// magnitude stays readable when dots overlap.
#[must_use]
pub fn heat(percentage: f32) -> Rgba {
    let t = sat01(percentage / 100.0);
    let r = (40.0 + 50.0 * t) as u8;
    let g = (90.0 + 110.0 * t) as u8;
    let b = (160.0 + 95.0 * t) as u8;
    [r, g, b, 255]
}

/// Glow variant of [`heat`]: same hue, alpha rising with the share.
#[must_use]
pub fn glow(percentage: f32) -> Rgba {
    let t = sat01(percentage / 100.0);
    let [r, g, b, _] = heat(percentage);
    [r, g, b, (40.0 + 140.0 * t) as u8]
}
