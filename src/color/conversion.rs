//! Color space conversion utilities
//!
//! Provides conversions between color representations:
//! - Hex string to RGB (strict and permissive parsing)
//! - RGB to hex string (canonical `#RRGGBB` uppercase form)
//! - RGB to HSL and back
//! - Interop with the `palette` crate types
//!
//! The HSL math is hand-written rather than delegated to `palette` because
//! the rounding behavior at the u8 boundary is part of the round-trip
//! contract: `c.to_hsl().to_rgb()` reproduces `c` within ±1 per channel,
//! and classification callers rely on the exact hue values this produces.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

/// RGB color with integer channels in [0, 255]
///
/// Using `u8` channels makes out-of-range input unrepresentable, so no
/// runtime clamping is needed on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgb {
    /// Construct from raw channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string strictly
    ///
    /// Accepts `#RRGGBB` or `RRGGBB` with case-insensitive hex digits.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidHexColor` if the string has the wrong
    /// length or contains non-hex characters.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(AnalysisError::invalid_hex(
                hex,
                format!("expected 6 hex digits, got {}", digits.len()),
            ));
        }
        // from_str_radix tolerates a leading sign, so every character must
        // be vetted up front. This also guarantees the byte-range slicing
        // below stays on char boundaries.
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AnalysisError::invalid_hex(hex, "non-hex characters"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| AnalysisError::invalid_hex(hex, e.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Parse a hex color string, degrading to black on malformed input
    ///
    /// This is the permissive policy used throughout palette analysis:
    /// malformed strings become `(0, 0, 0)` rather than an error, so the
    /// classification pipeline stays total. Call sites that need to reject
    /// bad input should use [`Rgb::from_hex`] instead.
    pub fn from_hex_or_black(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(Self { r: 0, g: 0, b: 0 })
    }

    /// Format as canonical `#RRGGBB` uppercase hex
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to HSL
    ///
    /// Lightness is `(max + min) / 2`; saturation is zero for achromatic
    /// colors and otherwise piecewise on lightness; hue comes from the
    /// six-case max-channel switch, normalized to [0, 360).
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue is undefined, reported as 0
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let mut h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h = h / 6.0 * 360.0;

        Hsl { h, s, l }
    }
}

impl Hsl {
    /// Construct from hue (degrees), saturation, and lightness
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert to RGB, rounding each channel to the nearest integer
    ///
    /// Out-of-range coordinates are normalized first: hue wraps into
    /// [0, 360) and saturation/lightness clamp into [0, 1]. This is a
    /// hardening of the original behavior, which left such input undefined.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Rgb { r: v, g: v, b: v };
        }

        fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb {
            r: (hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
            g: (hue_to_channel(p, q, h) * 255.0).round() as u8,
            b: (hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
        }
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(c: Rgb) -> Self {
        Srgb::new(c.r, c.g, c.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(c: Srgb<u8>) -> Self {
        Rgb::new(c.red, c.green, c.blue)
    }
}

impl From<Hsl> for palette::Hsl {
    fn from(c: Hsl) -> Self {
        palette::Hsl::new(c.h, c.s, c.l)
    }
}

impl From<palette::Hsl> for Hsl {
    fn from(c: palette::Hsl) -> Self {
        Hsl::new(c.hue.into_positive_degrees(), c.saturation, c.lightness)
    }
}
