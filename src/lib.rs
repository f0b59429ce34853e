//! # decor_colors
//!
//! A Rust crate for deterministic color analysis in interior and exterior
//! design tooling.
//!
//! This library classifies colors and palettes for design applications:
//! - Hex/RGB/HSL conversion with strict and permissive parsing
//! - Perceptual classification: temperature, brightness, saturation
//! - Palette harmony detection (complementary, analogous, triadic, ...)
//! - Derived mood and style-compatibility tags
//! - Complementary scheme generation from a base color
//!
//! Every operation is a pure synchronous function with no I/O and no shared
//! state, so the engine can be called freely from any thread or task.
//!
//! ## Example
//!
//! ```rust
//! use decor_colors::{analyze_color, Temperature};
//!
//! let analysis = analyze_color("#8B4513");
//! assert_eq!(analysis.temperature, Temperature::Warm);
//! assert!(analysis.mood.len() <= 5);
//! ```

use serde::{Deserialize, Serialize};

pub mod color;
pub mod constants;
pub mod error;
pub mod harmony;
pub mod scheme;
pub mod tags;

pub use color::classify::{
    classify_brightness, classify_saturation, classify_temperature, relative_luminance,
    saturation_ratio,
};
pub use color::{Brightness, Hsl, Rgb, SaturationLevel, Temperature};
pub use error::{AnalysisError, Result};
pub use harmony::Harmony;

/// Dominant-color aggregate derived from an ordered palette
///
/// The first palette entry is the primary color and drives the
/// classification triple; harmony considers every color relative to the
/// first. Palette order is presentation-significant, so it is preserved
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantColors {
    /// First color of the palette, echoed as supplied
    pub primary: String,
    /// Second color if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Full palette in supplied order
    pub palette: Vec<String>,
    /// Hue relationship of the palette
    pub harmony: Harmony,
    /// Temperature of the primary color
    pub temperature: Temperature,
    /// Brightness of the primary color
    pub brightness: Brightness,
    /// Saturation level of the primary color
    pub saturation: SaturationLevel,
}

impl DominantColors {
    /// Mood tags for this aggregate's classification triple (at most 5)
    pub fn mood_tags(&self) -> Vec<&'static str> {
        tags::mood_tags(self.temperature, self.brightness, self.saturation)
    }

    /// Style-compatibility tags for this aggregate (at most 6)
    pub fn style_compatibility(&self) -> Vec<&'static str> {
        tags::style_compatibility(self.temperature, self.brightness, self.saturation)
    }
}

/// Read-only analysis projection for a single color
///
/// Combines the classification triple with the derived tag lists; this is
/// the shape persistence and live-editing callers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAnalysis {
    /// The analyzed color as supplied
    pub dominant: String,
    /// Single-element palette holding the analyzed color
    pub palette: Vec<String>,
    pub temperature: Temperature,
    pub brightness: Brightness,
    pub saturation: SaturationLevel,
    /// Always monochromatic for a single color
    pub harmony: Harmony,
    /// Mood tags, at most 5
    pub mood: Vec<String>,
    /// Style-compatibility tags, at most 6
    pub style_compatibility: Vec<String>,
}

/// Analyze a single hex color
///
/// This is the quick-properties entry point used by live-editing UIs: it
/// never fails, parsing permissively (malformed input reads as black), and
/// reports `monochromatic` harmony since a single color has no pairings.
pub fn analyze_color(hex: &str) -> ColorAnalysis {
    let rgb = Rgb::from_hex_or_black(hex);
    let temperature = color::classify::classify_temperature(rgb);
    let brightness = color::classify::classify_brightness(rgb);
    let saturation = color::classify::classify_saturation(rgb);

    ColorAnalysis {
        dominant: hex.to_string(),
        palette: vec![hex.to_string()],
        temperature,
        brightness,
        saturation,
        harmony: Harmony::Monochromatic,
        mood: tags::mood_tags(temperature, brightness, saturation)
            .into_iter()
            .map(String::from)
            .collect(),
        style_compatibility: tags::style_compatibility(temperature, brightness, saturation)
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

/// Derive the dominant-color aggregate for an ordered palette
///
/// The classification triple comes from the first color; harmony considers
/// the whole palette. Colors parse permissively, matching the rest of the
/// pipeline.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyPalette` when `colors` is empty, since an
/// aggregate has no meaning without a primary color.
pub fn analyze_palette<S: AsRef<str>>(colors: &[S]) -> Result<DominantColors> {
    let first = colors.first().ok_or(AnalysisError::EmptyPalette)?;
    let primary_rgb = Rgb::from_hex_or_black(first.as_ref());

    Ok(DominantColors {
        primary: first.as_ref().to_string(),
        secondary: colors.get(1).map(|c| c.as_ref().to_string()),
        palette: colors.iter().map(|c| c.as_ref().to_string()).collect(),
        harmony: harmony::determine_harmony(colors),
        temperature: color::classify::classify_temperature(primary_rgb),
        brightness: color::classify::classify_brightness(primary_rgb),
        saturation: color::classify::classify_saturation(primary_rgb),
    })
}
