//! Colour adjustments: lighten, darken and transparentize.
//!
//! Lightness adjustments work in HSL space and move the lightness channel by
//! an absolute number of percentage points, clamped to `[0, 100]`:
//! `lighten(#333333, 20%)` is `#666666`, and lightening white (or darkening
//! black) leaves it unchanged.

use palette::{Hsl, IntoColor, Srgb};

use super::Colour;

/// Increase HSL lightness by `percent` points.
pub fn lighten(colour: Colour, percent: f32) -> Colour {
    adjust_lightness(colour, percent)
}

/// Decrease HSL lightness by `percent` points.
pub fn darken(colour: Colour, percent: f32) -> Colour {
    adjust_lightness(colour, -percent)
}

/// Reduce alpha by `amount` (a fraction in `[0, 1]`), keeping RGB channels.
pub fn transparentize(colour: Colour, amount: f32) -> Colour {
    colour.with_alpha(colour.alpha - amount)
}

/// Adjust lightness in HSL space.
fn adjust_lightness(colour: Colour, percent: f32) -> Colour {
    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );

    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness + percent / 100.0).clamp(0.0, 1.0);

    let rgb_out: Srgb<f32> = hsl.into_color();
    Colour::rgba(
        to_channel(rgb_out.red),
        to_channel(rgb_out.green),
        to_channel(rgb_out.blue),
        colour.alpha,
    )
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
