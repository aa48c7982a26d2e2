//! Shade ramp generation.
//!
//! Every palette uses the same fixed lightness/saturation curves, indexed by
//! [`SHADE_KEYS`]; only the hue changes. Neutral palettes swap in a
//! near-gray curve so they stay usable as surface and text colors.

use tracing::debug;

use crate::models::{HslColor, Palette, PaletteKind, RgbColor, ShadeInfo, TokenSet, SHADE_KEYS};
use crate::services::contrast::{contrast_ratio_from_luminance, relative_luminance};

/// Lightness (%) per shade for chromatic palettes, lightest first.
pub const LIGHTNESS_CURVE: [f64; 11] = [97.0, 94.0, 86.0, 74.0, 60.0, 48.0, 40.0, 32.0, 26.0, 22.0, 12.0];

/// Saturation (%) per shade for chromatic palettes; lowest at shade 500.
pub const SATURATION_CURVE: [f64; 11] = [95.0, 90.0, 85.0, 80.0, 75.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0];

/// Lightness (%) per shade for neutral palettes.
pub const NEUTRAL_LIGHTNESS_CURVE: [f64; 11] = [98.0, 96.0, 90.0, 83.0, 64.0, 45.0, 32.0, 25.0, 15.0, 9.0, 4.0];

/// Saturation (%) used for every neutral shade.
pub const NEUTRAL_SATURATION: f64 = 5.0;

/// Hue offset of the secondary palette (complement).
pub const SECONDARY_HUE_OFFSET: f64 = 180.0;

/// Hue offset of the accent palette.
pub const ACCENT_HUE_OFFSET: f64 = 45.0;

/// Palette names of a token set, in display order.
pub const TOKEN_SET_NAMES: [&str; 4] = ["primary", "secondary", "accent", "neutral"];

/// Reduces any hue to [0, 360). Non-finite hues become 0.
#[must_use]
pub fn normalize_hue(hue: f64) -> f64 {
    if hue.is_finite() {
        hue.rem_euclid(360.0)
    } else {
        0.0
    }
}

/// Builds one annotated shade.
fn shade_info(shade: u16, hsl: HslColor) -> ShadeInfo {
    let color = RgbColor::from_hsl(hsl.h, hsl.s, hsl.l);
    let luminance = relative_luminance(color);
    ShadeInfo {
        shade,
        color,
        hsl,
        luminance,
        contrast_on_white: contrast_ratio_from_luminance(luminance, relative_luminance(RgbColor::WHITE)),
        contrast_on_black: contrast_ratio_from_luminance(luminance, relative_luminance(RgbColor::BLACK)),
    }
}

/// Generates an 11-shade palette at `base_hue`.
///
/// The palette named "neutral" (any case) uses the low-saturation neutral
/// curves; every other name uses the chromatic curves.
///
/// # Examples
///
/// ```
/// use tokensmith::services::palette::generate_palette;
///
/// let palette = generate_palette(220.0, "primary");
/// assert_eq!(palette.shades.len(), 11);
/// assert_eq!(palette.shade(50).unwrap().hex(), "#f0f5ff");
/// ```
#[must_use]
pub fn generate_palette(base_hue: f64, name: &str) -> Palette {
    let hue = normalize_hue(base_hue);
    let kind = PaletteKind::from_name(name);

    let shades = SHADE_KEYS
        .iter()
        .enumerate()
        .map(|(i, &shade)| {
            let hsl = match kind {
                PaletteKind::Chromatic => HslColor::new(hue, SATURATION_CURVE[i], LIGHTNESS_CURVE[i]),
                PaletteKind::Neutral => {
                    HslColor::new(hue, NEUTRAL_SATURATION, NEUTRAL_LIGHTNESS_CURVE[i])
                }
            };
            shade_info(shade, hsl)
        })
        .collect();

    debug!(name, hue, ?kind, "generated palette");

    Palette {
        name: name.to_string(),
        kind,
        hue,
        shades,
    }
}

/// Generates the four palettes of a color system from one hue:
/// primary at H, secondary at H+180, accent at H+45 and a neutral ramp at H.
#[must_use]
pub fn generate_token_set(base_hue: f64) -> TokenSet {
    let hue = normalize_hue(base_hue);
    let palettes = TOKEN_SET_NAMES
        .iter()
        .map(|&name| {
            let palette_hue = match name {
                "secondary" => hue + SECONDARY_HUE_OFFSET,
                "accent" => hue + ACCENT_HUE_OFFSET,
                _ => hue,
            };
            generate_palette(palette_hue, name)
        })
        .collect();

    TokenSet {
        base_hue: hue,
        palettes,
    }
}
