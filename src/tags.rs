//! Mood and style-compatibility tag derivation
//!
//! Static rule tables keyed on the classification triple. The literal tag
//! strings are a contract surface: downstream apps persist them and filter
//! palette records by them, so the vocabulary must not drift.

use crate::color::{Brightness, SaturationLevel, Temperature};
use crate::constants::tags::{MAX_MOOD_TAGS, MAX_STYLE_TAGS};

/// Derive mood tags from a classification triple
///
/// Each axis contributes three tags, concatenated in temperature,
/// brightness, saturation order and truncated to five. With the current
/// table sizes the saturation tags never survive the cut; they are kept in
/// the table because the truncation limit, not the table, is the contract.
pub fn mood_tags(
    temperature: Temperature,
    brightness: Brightness,
    saturation: SaturationLevel,
) -> Vec<&'static str> {
    let mut moods: Vec<&'static str> = Vec::new();

    moods.extend(match temperature {
        Temperature::Warm => ["cozy", "energetic", "inviting"],
        Temperature::Cool => ["calm", "serene", "refreshing"],
        Temperature::Neutral => ["balanced", "sophisticated", "timeless"],
    });

    moods.extend(match brightness {
        Brightness::Dark => ["dramatic", "intimate", "mysterious"],
        Brightness::Light => ["bright", "airy", "spacious"],
        Brightness::Medium => ["comfortable", "lived-in", "welcoming"],
    });

    moods.extend(match saturation {
        SaturationLevel::Vibrant => ["bold", "playful", "dynamic"],
        SaturationLevel::Muted => ["subtle", "elegant", "understated"],
        SaturationLevel::Moderate => ["harmonious", "pleasing", "versatile"],
    });

    moods.truncate(MAX_MOOD_TAGS);
    moods
}

/// Derive style-compatibility tags from a classification triple
///
/// Compound rules over two axes at a time; rules are not mutually
/// exclusive, so a warm muted dark color matches both the warm-muted and
/// the dark rule. Matches concatenate in rule order and truncate to six.
pub fn style_compatibility(
    temperature: Temperature,
    brightness: Brightness,
    saturation: SaturationLevel,
) -> Vec<&'static str> {
    let mut styles: Vec<&'static str> = Vec::new();

    if temperature == Temperature::Warm && saturation == SaturationLevel::Muted {
        styles.extend(["rustic", "traditional", "farmhouse", "cozy-modern"]);
    }

    if temperature == Temperature::Cool && brightness == Brightness::Light {
        styles.extend(["scandinavian", "coastal", "minimalist", "contemporary"]);
    }

    if temperature == Temperature::Neutral && brightness == Brightness::Medium {
        styles.extend(["modern", "transitional", "classic", "timeless"]);
    }

    if brightness == Brightness::Dark {
        styles.extend(["dramatic", "moody", "industrial", "sophisticated"]);
    }

    if saturation == SaturationLevel::Vibrant {
        styles.extend(["eclectic", "bohemian", "maximalist", "artistic"]);
    }

    styles.truncate(MAX_STYLE_TAGS);
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPERATURES: [Temperature; 3] =
        [Temperature::Warm, Temperature::Cool, Temperature::Neutral];
    const BRIGHTNESSES: [Brightness; 3] =
        [Brightness::Dark, Brightness::Medium, Brightness::Light];
    const SATURATIONS: [SaturationLevel; 3] = [
        SaturationLevel::Muted,
        SaturationLevel::Moderate,
        SaturationLevel::Vibrant,
    ];

    #[test]
    fn test_mood_tags_warm_dark_vibrant() {
        let moods = mood_tags(
            Temperature::Warm,
            Brightness::Dark,
            SaturationLevel::Vibrant,
        );
        assert_eq!(
            moods,
            vec!["cozy", "energetic", "inviting", "dramatic", "intimate"]
        );
    }

    #[test]
    fn test_mood_tags_capped_at_five_for_all_triples() {
        for t in TEMPERATURES {
            for b in BRIGHTNESSES {
                for s in SATURATIONS {
                    assert!(mood_tags(t, b, s).len() <= 5);
                }
            }
        }
    }

    #[test]
    fn test_style_warm_muted() {
        let styles = style_compatibility(
            Temperature::Warm,
            Brightness::Medium,
            SaturationLevel::Muted,
        );
        assert_eq!(
            styles,
            vec!["rustic", "traditional", "farmhouse", "cozy-modern"]
        );
    }

    #[test]
    fn test_style_cool_light() {
        let styles = style_compatibility(
            Temperature::Cool,
            Brightness::Light,
            SaturationLevel::Moderate,
        );
        assert_eq!(
            styles,
            vec!["scandinavian", "coastal", "minimalist", "contemporary"]
        );
    }

    #[test]
    fn test_style_rules_are_not_exclusive() {
        // Warm + muted + dark matches two rules; eight candidates truncate
        // to six in rule order.
        let styles =
            style_compatibility(Temperature::Warm, Brightness::Dark, SaturationLevel::Muted);
        assert_eq!(
            styles,
            vec![
                "rustic",
                "traditional",
                "farmhouse",
                "cozy-modern",
                "dramatic",
                "moody"
            ]
        );
    }

    #[test]
    fn test_style_no_matching_rule_yields_empty() {
        let styles = style_compatibility(
            Temperature::Warm,
            Brightness::Medium,
            SaturationLevel::Moderate,
        );
        assert!(styles.is_empty());
    }

    #[test]
    fn test_style_tags_capped_at_six_for_all_triples() {
        for t in TEMPERATURES {
            for b in BRIGHTNESSES {
                for s in SATURATIONS {
                    assert!(style_compatibility(t, b, s).len() <= 6);
                }
            }
        }
    }
}
