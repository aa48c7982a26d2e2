//! Color palette data structures.
//!
//! A palette is an 11-step shade ramp (50 lightest … 950 darkest) at a single
//! hue, in the Tailwind CSS naming convention. A token set groups the four
//! palettes a design system starts from.

use super::{HslColor, RgbColor, WcagLevel};
use serde::Serialize;

/// Shade keys in ramp order, lightest first.
pub const SHADE_KEYS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// How a palette's saturation/lightness curves are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Full-saturation ramp
    Chromatic,
    /// Near-gray ramp with its own lightness curve
    Neutral,
}

impl PaletteKind {
    /// Derives the kind from a palette name: only "neutral" is neutral.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("neutral") {
            Self::Neutral
        } else {
            Self::Chromatic
        }
    }
}

/// A single shade of a palette, annotated with its contrast figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadeInfo {
    /// Shade key (50, 100, …, 950)
    pub shade: u16,
    /// Resolved 8-bit color
    pub color: RgbColor,
    /// HSL input the color was derived from
    pub hsl: HslColor,
    /// WCAG relative luminance
    pub luminance: f64,
    /// Contrast ratio against pure white
    pub contrast_on_white: f64,
    /// Contrast ratio against pure black
    pub contrast_on_black: f64,
}

impl ShadeInfo {
    /// Hex code of the shade (e.g., "#3b82f6").
    #[must_use]
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }

    /// CSS `rgb(...)` notation of the shade.
    #[must_use]
    pub fn rgb(&self) -> String {
        self.color.to_css_rgb()
    }

    /// Whether normal-size text in this shade is readable at `level` on
    /// white or on black.
    #[must_use]
    pub fn passes(&self, level: WcagLevel) -> bool {
        let required = level.required_ratio(false);
        self.contrast_on_white >= required || self.contrast_on_black >= required
    }
}

/// A named shade ramp at one hue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    /// Palette name (e.g., "primary")
    pub name: String,
    /// Curve family used
    pub kind: PaletteKind,
    /// Hue in degrees, normalized to [0, 360)
    pub hue: f64,
    /// Shades in `SHADE_KEYS` order
    pub shades: Vec<ShadeInfo>,
}

impl Palette {
    /// Looks up a shade by key (e.g., 500).
    #[must_use]
    pub fn shade(&self, key: u16) -> Option<&ShadeInfo> {
        self.shades.iter().find(|s| s.shade == key)
    }

    /// Get the "primary" shade (500 level, or middle shade).
    #[must_use]
    pub fn primary_shade(&self) -> Option<&ShadeInfo> {
        self.shade(500)
            .or_else(|| self.shades.get(self.shades.len() / 2))
    }

    /// Get the number of shades.
    #[must_use]
    pub fn shade_count(&self) -> usize {
        self.shades.len()
    }
}

/// The four palettes of a generated color system, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenSet {
    /// Hue the set was derived from, normalized to [0, 360)
    pub base_hue: f64,
    /// primary, secondary, accent, neutral
    pub palettes: Vec<Palette>,
}

impl TokenSet {
    /// Looks up a palette by name.
    #[must_use]
    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name == name)
    }

    /// Iterates palettes in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }
}
