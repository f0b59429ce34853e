//! Perceptual classification of single colors
//!
//! Classifies an RGB color along three independent axes: temperature
//! (warm/cool/neutral), brightness (dark/medium/light), and saturation
//! level (muted/moderate/vibrant). Each classifier is total: every RGB
//! value maps to exactly one variant.
//!
//! Note that [`saturation_ratio`] is `(max - min) / max`, which is HSV
//! saturation, while hue work in [`crate::harmony`] uses HSL saturation
//! from [`Rgb::to_hsl`]. The two formulas produce different values and are
//! deliberately kept as distinct functions; unifying them would change
//! classification outcomes that downstream palette records depend on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants::{brightness, saturation, temperature};

/// Warm/cool/neutral temperature classification
///
/// A perceptual warm-vs-cool judgement from channel dominance, distinct
/// from colorimetric temperature in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

/// Dark/medium/light brightness classification from relative luminance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Dark,
    Medium,
    Light,
}

/// Muted/moderate/vibrant saturation classification from chroma ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaturationLevel {
    Muted,
    Moderate,
    Vibrant,
}

impl Temperature {
    /// Lowercase wire form, matching the serialized representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Warm => "warm",
            Temperature::Cool => "cool",
            Temperature::Neutral => "neutral",
        }
    }
}

impl Brightness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Brightness::Dark => "dark",
            Brightness::Medium => "medium",
            Brightness::Light => "light",
        }
    }
}

impl SaturationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaturationLevel::Muted => "muted",
            SaturationLevel::Moderate => "moderate",
            SaturationLevel::Vibrant => "vibrant",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SaturationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify color temperature from weighted channel dominance
///
/// The scoring is asymmetric by design: green feeds both the warm and the
/// cool score, with different weights. A color is warm or cool only when
/// its score clears the other side's by the neutral margin. One side
/// effect worth knowing: bright grays lean warm, because the warm weights
/// sum higher than the cool ones.
pub fn classify_temperature(rgb: Rgb) -> Temperature {
    let warm_score = (rgb.r as f32 * temperature::WARM_RED_WEIGHT
        + rgb.g as f32 * temperature::WARM_GREEN_WEIGHT)
        / 255.0;
    let cool_score = (rgb.b as f32 * temperature::COOL_BLUE_WEIGHT
        + rgb.g as f32 * temperature::COOL_GREEN_WEIGHT)
        / 255.0;

    if warm_score > cool_score + temperature::NEUTRAL_MARGIN {
        Temperature::Warm
    } else if cool_score > warm_score + temperature::NEUTRAL_MARGIN {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}

/// Classify brightness from BT.601 relative luminance
///
/// Comparisons are strict: luminance exactly at a cutoff stays `medium`.
pub fn classify_brightness(rgb: Rgb) -> Brightness {
    let luminance = relative_luminance(rgb);
    if luminance < brightness::DARK_BELOW {
        Brightness::Dark
    } else if luminance > brightness::LIGHT_ABOVE {
        Brightness::Light
    } else {
        Brightness::Medium
    }
}

/// Classify saturation level from the chroma ratio
pub fn classify_saturation(rgb: Rgb) -> SaturationLevel {
    let ratio = saturation_ratio(rgb);
    if ratio < saturation::MUTED_BELOW {
        SaturationLevel::Muted
    } else if ratio > saturation::VIBRANT_ABOVE {
        SaturationLevel::Vibrant
    } else {
        SaturationLevel::Moderate
    }
}

/// Relative luminance in [0, 1] using BT.601 luma weights
///
/// Exposed for live-editing callers that want the raw value behind the
/// brightness label.
pub fn relative_luminance(rgb: Rgb) -> f32 {
    (brightness::LUMA_RED * rgb.r as f32
        + brightness::LUMA_GREEN * rgb.g as f32
        + brightness::LUMA_BLUE * rgb.b as f32)
        / 255.0
}

/// Chroma ratio `(max - min) / max` in [0, 1], zero for black
///
/// This is HSV saturation, not the HSL saturation from [`Rgb::to_hsl`].
pub fn saturation_ratio(rgb: Rgb) -> f32 {
    let max = rgb.r.max(rgb.g).max(rgb.b) as f32;
    let min = rgb.r.min(rgb.g).min(rgb.b) as f32;
    if max == 0.0 {
        0.0
    } else {
        (max - min) / max
    }
}
