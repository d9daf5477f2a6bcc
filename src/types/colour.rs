//! Colour type, CSS colour parsing and CSS rendering.

use std::fmt;
use std::str::FromStr;

use crate::error::{ShadesError, Result};

/// An sRGB colour with a fractional alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub alpha: f32,
}

impl Colour {
    /// Create a new colour from RGB components and an alpha fraction.
    ///
    /// Alpha is clamped to `[0, 1]`.
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r,
            g,
            b,
            alpha: clamp_alpha(alpha),
        }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a CSS colour string.
    ///
    /// Supports formats:
    /// - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
    /// - `rgb(r, g, b)` and `rgba(r, g, b, a)` with `a` in `[0, 1]`
    /// - the sixteen basic CSS colour keywords (`red`, `navy`, ...)
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::from_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            let args = args.strip_suffix(')').ok_or_else(|| ShadesError::Parse {
                message: format!("Unterminated colour function: {}", s),
                help: Some("Close the argument list with ')'".to_string()),
            })?;
            return parse_rgb_args(args);
        }

        named_colour(&lower).ok_or_else(|| ShadesError::Parse {
            message: format!("Unrecognised colour: {}", s),
            help: Some("Use #RRGGBB, rgb(r, g, b), or a CSS colour keyword".to_string()),
        })
    }

    /// Parse the digits of a hex colour (without the leading `#`).
    fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .chars()
            .map(parse_hex_digit)
            .collect::<Result<Vec<u8>>>()?;

        match digits.as_slice() {
            // #RGB -> #RRGGBB
            &[r, g, b] => Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b)),
            // #RGBA -> #RRGGBBAA
            &[r, g, b, a] => Ok(Self::rgba(
                r << 4 | r,
                g << 4 | g,
                b << 4 | b,
                byte_to_alpha(a << 4 | a),
            )),
            &[r1, r0, g1, g0, b1, b0] => Ok(Self::rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            &[r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Self::rgba(
                r1 << 4 | r0,
                g1 << 4 | g0,
                b1 << 4 | b0,
                byte_to_alpha(a1 << 4 | a0),
            )),
            _ => Err(ShadesError::Parse {
                message: format!("Invalid hex colour: #{}", hex),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// Return the same colour with a different alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, alpha)
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Render as a CSS value.
    ///
    /// Opaque colours render as lowercase `#rrggbb`; anything with alpha
    /// below one renders as `rgba(r, g, b, a)` with `a` rounded to three
    /// decimal places.
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                format_alpha(self.alpha)
            )
        }
    }
}

impl FromStr for Colour {
    type Err = ShadesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl serde::Serialize for Colour {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

const MAX_TRANSLUCENT_ALPHA: f32 = 0.999;

fn clamp_alpha(alpha: f32) -> f32 {
    if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

fn byte_to_alpha(byte: u8) -> f32 {
    byte as f32 / 255.0
}

/// Alpha below one never renders as `1`; that would duplicate the hex form.
fn format_alpha(alpha: f32) -> String {
    let fixed = format!("{:.3}", alpha.min(MAX_TRANSLUCENT_ALPHA));
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Parse the argument list of `rgb(...)` / `rgba(...)`.
fn parse_rgb_args(args: &str) -> Result<Colour> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();

    let (channels, alpha) = match parts.as_slice() {
        [r, g, b] => ([*r, *g, *b], None),
        [r, g, b, a] => ([*r, *g, *b], Some(*a)),
        _ => {
            return Err(ShadesError::Parse {
                message: format!("rgb() requires 3 or 4 arguments, got {}", parts.len()),
                help: Some("Usage: rgb(106, 180, 70) or rgba(106, 180, 70, 0.5)".to_string()),
            })
        }
    };

    let [r, g, b] = channels;
    let r = parse_channel(r)?;
    let g = parse_channel(g)?;
    let b = parse_channel(b)?;

    let alpha = match alpha {
        Some(a) => parse_alpha(a)?,
        None => 1.0,
    };

    Ok(Colour::rgba(r, g, b, alpha))
}

fn parse_channel(s: &str) -> Result<u8> {
    s.parse::<u8>().map_err(|_| ShadesError::Parse {
        message: format!("Invalid colour channel: {}", s),
        help: Some("Channels are integers from 0 to 255".to_string()),
    })
}

fn parse_alpha(s: &str) -> Result<f32> {
    match s.parse::<f32>() {
        Ok(a) if (0.0..=1.0).contains(&a) => Ok(a),
        _ => Err(ShadesError::Parse {
            message: format!("Invalid alpha: {}", s),
            help: Some("Alpha is a number from 0 to 1".to_string()),
        }),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| ShadesError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// The basic CSS colour keywords.
fn named_colour(name: &str) -> Option<Colour> {
    let colour = match name {
        "black" => Colour::rgb(0x00, 0x00, 0x00),
        "silver" => Colour::rgb(0xc0, 0xc0, 0xc0),
        "gray" | "grey" => Colour::rgb(0x80, 0x80, 0x80),
        "white" => Colour::rgb(0xff, 0xff, 0xff),
        "maroon" => Colour::rgb(0x80, 0x00, 0x00),
        "red" => Colour::rgb(0xff, 0x00, 0x00),
        "purple" => Colour::rgb(0x80, 0x00, 0x80),
        "fuchsia" => Colour::rgb(0xff, 0x00, 0xff),
        "green" => Colour::rgb(0x00, 0x80, 0x00),
        "lime" => Colour::rgb(0x00, 0xff, 0x00),
        "olive" => Colour::rgb(0x80, 0x80, 0x00),
        "yellow" => Colour::rgb(0xff, 0xff, 0x00),
        "navy" => Colour::rgb(0x00, 0x00, 0x80),
        "blue" => Colour::rgb(0x00, 0x00, 0xff),
        "teal" => Colour::rgb(0x00, 0x80, 0x80),
        "aqua" => Colour::rgb(0x00, 0xff, 0xff),
        _ => return None,
    };
    Some(colour)
}
