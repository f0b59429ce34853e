//! Classification thresholds and tuning constants
//!
//! These values are a compatibility contract: palettes classified by earlier
//! releases (and records persisted by downstream apps) depend on the exact
//! coefficients and cutoffs below. None of them are colorimetric standards
//! unless noted; do not "correct" them.

/// Color temperature scoring weights and margin
///
/// Warm/cool scores are asymmetric weighted channel sums, not correlated
/// color temperature in Kelvin. Green contributes to both sides with
/// different weights.
pub mod temperature {
    /// Red channel weight in the warm score
    pub const WARM_RED_WEIGHT: f32 = 1.2;

    /// Green channel weight in the warm score
    pub const WARM_GREEN_WEIGHT: f32 = 0.6;

    /// Blue channel weight in the cool score
    pub const COOL_BLUE_WEIGHT: f32 = 1.2;

    /// Green channel weight in the cool score
    pub const COOL_GREEN_WEIGHT: f32 = 0.3;

    /// Margin one score must exceed the other by to leave neutral
    pub const NEUTRAL_MARGIN: f32 = 0.15;
}

/// Brightness classification via relative luminance
pub mod brightness {
    /// ITU-R BT.601 luma weight for red
    pub const LUMA_RED: f32 = 0.299;

    /// ITU-R BT.601 luma weight for green
    pub const LUMA_GREEN: f32 = 0.587;

    /// ITU-R BT.601 luma weight for blue
    pub const LUMA_BLUE: f32 = 0.114;

    /// Luminance strictly below this is `dark`
    pub const DARK_BELOW: f32 = 0.3;

    /// Luminance strictly above this is `light`
    pub const LIGHT_ABOVE: f32 = 0.7;
}

/// Saturation-level classification via chroma ratio
///
/// The chroma ratio is `(max - min) / max`, which is HSV saturation, not
/// the HSL saturation used for hue work. The two formulas are kept separate
/// on purpose; see `color::classify::saturation_ratio`.
pub mod saturation {
    /// Ratio strictly below this is `muted`
    pub const MUTED_BELOW: f32 = 0.3;

    /// Ratio strictly above this is `vibrant`
    pub const VIBRANT_ABOVE: f32 = 0.7;
}

/// Harmony detection angles (degrees)
pub mod harmony {
    /// Tolerance window around the complementary/triadic target angles
    pub const ANGLE_TOLERANCE: f32 = 30.0;

    /// Complementary target: opposite hues
    pub const COMPLEMENTARY_ANGLE: f32 = 180.0;

    /// Triadic target: hues a third of the wheel apart
    pub const TRIADIC_ANGLE: f32 = 120.0;

    /// All hue spreads strictly below this classify as analogous
    pub const ANALOGOUS_BELOW: f32 = 60.0;
}

/// Scheme generation parameters
pub mod scheme {
    /// Hue offset for analogous companions (degrees)
    pub const ANALOGOUS_SHIFT: f32 = 30.0;

    /// Maximum colors in a generated scheme
    pub const MAX_SCHEME_COLORS: usize = 5;
}

/// Tag derivation limits
pub mod tags {
    /// Maximum mood tags returned per classification
    pub const MAX_MOOD_TAGS: usize = 5;

    /// Maximum style-compatibility tags returned per classification
    pub const MAX_STYLE_TAGS: usize = 6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights_sum_to_one() {
        let sum = brightness::LUMA_RED + brightness::LUMA_GREEN + brightness::LUMA_BLUE;
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_ordering() {
        assert!(brightness::DARK_BELOW < brightness::LIGHT_ABOVE);
        assert!(saturation::MUTED_BELOW < saturation::VIBRANT_ABOVE);
        assert!(harmony::ANGLE_TOLERANCE < harmony::ANALOGOUS_BELOW);
    }

    #[test]
    fn test_harmony_windows_do_not_overlap() {
        // The complementary and triadic windows must stay disjoint or the
        // first-match classification order would silently decide ties.
        let complementary_low = harmony::COMPLEMENTARY_ANGLE - harmony::ANGLE_TOLERANCE;
        let triadic_high = harmony::TRIADIC_ANGLE + harmony::ANGLE_TOLERANCE;
        assert!(triadic_high <= complementary_low);
    }
}
