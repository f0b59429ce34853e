//! Color scheme generation
//!
//! Builds a small companion palette around a base color: its channel-wise
//! complement plus two analogous hues.

use crate::color::{Hsl, Rgb};
use crate::constants::scheme::{ANALOGOUS_SHIFT, MAX_SCHEME_COLORS};

/// Channel-wise RGB complement
pub fn complement(rgb: Rgb) -> Rgb {
    Rgb::new(255 - rgb.r, 255 - rgb.g, 255 - rgb.b)
}

/// Analogous companions at hue ± 30 degrees, same saturation and lightness
///
/// For achromatic bases (zero saturation) both companions reproduce the
/// base gray, since hue shifts have nothing to act on.
pub fn analogous_pair(rgb: Rgb) -> (Rgb, Rgb) {
    let hsl = rgb.to_hsl();
    let plus = Hsl::new((hsl.h + ANALOGOUS_SHIFT).rem_euclid(360.0), hsl.s, hsl.l);
    let minus = Hsl::new((hsl.h - ANALOGOUS_SHIFT).rem_euclid(360.0), hsl.s, hsl.l);
    (plus.to_rgb(), minus.to_rgb())
}

/// Generate a complementary scheme from a base hex color
///
/// Returns `[base, complement, analogous+30, analogous-30]`, capped at five
/// entries. The base echoes back exactly as supplied; the generated entries
/// use canonical uppercase hex. Malformed bases follow the permissive
/// parse, so the generated entries derive from black.
pub fn complementary_palette(base: &str) -> Vec<String> {
    let rgb = Rgb::from_hex_or_black(base);
    let (plus, minus) = analogous_pair(rgb);

    let mut colors = vec![
        base.to_string(),
        complement(rgb).to_hex(),
        plus.to_hex(),
        minus.to_hex(),
    ];
    colors.truncate(MAX_SCHEME_COLORS);
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_inverts_channels() {
        assert_eq!(complement(Rgb::new(255, 0, 0)), Rgb::new(0, 255, 255));
        assert_eq!(complement(Rgb::new(10, 20, 30)), Rgb::new(245, 235, 225));
    }

    #[test]
    fn test_complementary_palette_white() {
        // White is achromatic: complement is black and both analogous
        // companions collapse back to white.
        let palette = complementary_palette("#FFFFFF");
        assert_eq!(palette, vec!["#FFFFFF", "#000000", "#FFFFFF", "#FFFFFF"]);
    }

    #[test]
    fn test_complementary_palette_red() {
        let palette = complementary_palette("#FF0000");
        assert_eq!(palette.len(), 4);
        assert_eq!(palette[0], "#FF0000");
        assert_eq!(palette[1], "#00FFFF");
        // Analogous companions land near hue 30 and hue 330
        assert_eq!(palette[2], "#FF8000");
        assert_eq!(palette[3], "#FF0080");
    }

    #[test]
    fn test_complementary_palette_echoes_base_verbatim() {
        let palette = complementary_palette("#ff8000");
        assert_eq!(palette[0], "#ff8000");
        // Generated entries are canonical uppercase
        assert!(palette[1..].iter().all(|c| c == &c.to_uppercase()));
    }

    #[test]
    fn test_complementary_palette_never_exceeds_cap() {
        assert!(complementary_palette("#123456").len() <= MAX_SCHEME_COLORS);
    }

    #[test]
    fn test_analogous_hues_shift_by_thirty_degrees() {
        let base = Rgb::new(0, 128, 255);
        let base_hue = base.to_hsl().h;
        let (plus, minus) = analogous_pair(base);
        assert!((plus.to_hsl().h - (base_hue + 30.0).rem_euclid(360.0)).abs() < 1.0);
        assert!((minus.to_hsl().h - (base_hue - 30.0).rem_euclid(360.0)).abs() < 1.0);
    }
}
