// ABOUTME: RGB color decoding, encoding, and interpolation for the tag cloud.
// ABOUTME: Handles 3-digit shorthand expansion, clamped channel blending, and #rrggbb output.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::EnhanceError;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// An RGB triple with channels in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Decodes a hex color string into an RGB triple.
    ///
    /// Accepts `#rrggbb` and the `#rgb` shorthand (each digit duplicated,
    /// so `#abc` decodes the same as `#aabbcc`). The leading `#` is optional.
    pub fn parse(code: &str) -> Result<Self, EnhanceError> {
        let digits = HEX_COLOR_RE
            .captures(code)
            .map(|caps| caps[1].to_string())
            .ok_or_else(|| EnhanceError::invalid_color(code))?;

        let expanded = if digits.len() == 3 {
            let mut full = String::with_capacity(6);
            for ch in digits.chars() {
                full.push(ch);
                full.push(ch);
            }
            full
        } else {
            digits
        };

        let channel = |range: std::ops::Range<usize>| -> u8 {
            // The regex guarantees six hex digits at this point.
            u8::from_str_radix(&expanded[range], 16).unwrap_or(0)
        };

        Ok(Rgb {
            r: channel(0..2),
            g: channel(2..4),
            b: channel(4..6),
        })
    }

    /// Encodes the triple as a `#rrggbb` string, each channel zero-padded.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as floats, for increment arithmetic.
    pub fn channels(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Blends from this color along per-channel increments.
    ///
    /// Each channel is rounded (half away from zero) and clamped to
    /// `[0, 255]`, whatever the increments or weighting were.
    pub fn blend(self, increments: [f64; 3], weighting: f64) -> Rgb {
        let mix = |start: u8, incr: f64| -> u8 {
            let value = (f64::from(start) + incr * weighting).round();
            value.clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, increments[0]),
            g: mix(self.g, increments[1]),
            b: mix(self.b, increments[2]),
        }
    }
}

/// Per-channel increments between two colors over a weight range.
///
/// A zero range yields zero increments, so every element blends to the
/// start color.
pub fn channel_increments(start: Rgb, end: Rgb, range: f64) -> [f64; 3] {
    let from = start.channels();
    let to = end.channels();
    let mut increments = [0.0; 3];
    if range > 0.0 {
        for (slot, (lo, hi)) in increments.iter_mut().zip(from.iter().zip(to.iter())) {
            *slot = (hi - lo) / range;
        }
    }
    increments
}
