//! Palette harmony detection
//!
//! Classifies the hue relationship of an ordered palette relative to its
//! first color. The classification is first-match-wins over increasingly
//! loose criteria, so a palette containing both a complementary and a
//! triadic pairing reports complementary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants::harmony as angles;

/// Categorical hue relationship of a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Harmony {
    Complementary,
    Analogous,
    Triadic,
    Monochromatic,
    SplitComplementary,
}

impl Harmony {
    /// Kebab-case wire form, matching the serialized representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
            Harmony::Monochromatic => "monochromatic",
            Harmony::SplitComplementary => "split-complementary",
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Circular distance between two hues in degrees, folded into [0, 180]
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Determine the harmony of an ordered hex palette
///
/// Colors parse permissively (malformed entries read as black, hue 0).
/// Fewer than two colors is always `Monochromatic`, including the empty
/// slice, which keeps this function total.
///
/// Match order: any pairing within tolerance of 180° is complementary; any
/// within tolerance of 120° is triadic; all spreads under 60° is analogous;
/// anything else is split-complementary.
pub fn determine_harmony<S: AsRef<str>>(colors: &[S]) -> Harmony {
    if colors.len() < 2 {
        return Harmony::Monochromatic;
    }

    let hues: Vec<f32> = colors
        .iter()
        .map(|c| Rgb::from_hex_or_black(c.as_ref()).to_hsl().h)
        .collect();

    let diffs: Vec<f32> = hues[1..]
        .iter()
        .map(|&h| hue_distance(h, hues[0]))
        .collect();

    if diffs
        .iter()
        .any(|&d| (d - angles::COMPLEMENTARY_ANGLE).abs() < angles::ANGLE_TOLERANCE)
    {
        return Harmony::Complementary;
    }

    if diffs
        .iter()
        .any(|&d| (d - angles::TRIADIC_ANGLE).abs() < angles::ANGLE_TOLERANCE)
    {
        return Harmony::Triadic;
    }

    if diffs.iter().all(|&d| d < angles::ANALOGOUS_BELOW) {
        return Harmony::Analogous;
    }

    Harmony::SplitComplementary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_color_is_monochromatic() {
        assert_eq!(determine_harmony(&["#FF0000"]), Harmony::Monochromatic);
    }

    #[test]
    fn test_empty_palette_is_monochromatic() {
        let empty: [&str; 0] = [];
        assert_eq!(determine_harmony(&empty), Harmony::Monochromatic);
    }

    #[test]
    fn test_red_cyan_is_complementary() {
        // Red (hue 0) and cyan (hue 180) sit exactly opposite
        assert_eq!(
            determine_harmony(&["#FF0000", "#00FFFF"]),
            Harmony::Complementary
        );
    }

    #[test]
    fn test_red_green_is_triadic() {
        // Green is 120 degrees from red
        assert_eq!(determine_harmony(&["#FF0000", "#00FF00"]), Harmony::Triadic);
    }

    #[test]
    fn test_red_orange_is_analogous() {
        // Orange sits about 30 degrees from red
        assert_eq!(
            determine_harmony(&["#FF0000", "#FF8000"]),
            Harmony::Analogous
        );
    }

    #[test]
    fn test_red_chartreuse_is_split_complementary() {
        // Chartreuse (hue ~75) is outside every other window
        assert_eq!(
            determine_harmony(&["#FF0000", "#BFFF00"]),
            Harmony::SplitComplementary
        );
    }

    #[test]
    fn test_first_match_wins_over_later_rules() {
        // Palette holds both a complementary and a triadic pairing against
        // the first color; complementary is checked first.
        assert_eq!(
            determine_harmony(&["#FF0000", "#00FFFF", "#00FF00"]),
            Harmony::Complementary
        );
    }

    #[test]
    fn test_malformed_entries_read_as_black() {
        // Black has hue 0, same as red, so the spread stays analogous
        assert_eq!(
            determine_harmony(&["#FF0000", "garbage"]),
            Harmony::Analogous
        );
    }

    #[test]
    fn test_hue_distance_folds_over_180() {
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
        assert_eq!(hue_distance(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Harmony::SplitComplementary).unwrap(),
            "\"split-complementary\""
        );
        assert_eq!(
            serde_json::from_str::<Harmony>("\"monochromatic\"").unwrap(),
            Harmony::Monochromatic
        );
    }
}
