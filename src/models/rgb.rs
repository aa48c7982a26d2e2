//! RGB color handling with hex parsing and HSL conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSL conversion (standard algorithm)
#![allow(clippy::float_cmp)]
// Unfused arithmetic keeps channel rounding identical to the reference values
#![allow(clippy::suboptimal_flops)]

use crate::error::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#rrggbb) and conversion from HSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb".
    ///
    /// # Examples
    ///
    /// ```
    /// use tokensmith::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidFormat`] if the string is not exactly six
    /// hex digits after the optional `#`.
    pub fn from_hex(input: &str) -> TokenResult<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);

        if hex.len() != 6 {
            return Err(TokenError::invalid_format(
                input,
                "expected 6 hex digits (RRGGBB)",
            ));
        }
        // from_str_radix would accept a leading '+', so check digits up front.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TokenError::invalid_format(input, "contains non-hex characters"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| TokenError::invalid_format(input, e.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use tokensmith::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `rgb(59, 130, 246)`.
    #[must_use]
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Creates an `RgbColor` from HSL (Hue, Saturation, Lightness).
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees, reduced modulo 360 (negative values wrap)
    /// * `s` - Saturation percentage (0-100, will be clamped)
    /// * `l` - Lightness percentage (0-100, will be clamped)
    ///
    /// Non-finite inputs are treated as 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokensmith::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsl(0.0, 100.0, 50.0), RgbColor::new(255, 0, 0));
    /// assert_eq!(RgbColor::from_hsl(480.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard HSL color model uses single-char names
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = finite_or_zero(h).rem_euclid(360.0);
        let s = finite_or_zero(s).clamp(0.0, 100.0) / 100.0;
        let l = finite_or_zero(l).clamp(0.0, 100.0) / 100.0;

        let a = s * l.min(1.0 - l);
        let channel = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (value * 255.0).round().clamp(0.0, 255.0) as u8
        };

        Self::new(channel(0.0), channel(8.0), channel(4.0))
    }

    /// Converts the RGB color to HSL.
    ///
    /// Hue is 0 for grays. Saturation and lightness are percentages.
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard HSL color model uses single-char names
    pub fn to_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return HslColor::new(0.0, 0.0, l * 100.0);
        }

        let s = delta / (1.0 - 2.0f64.mul_add(l, -1.0).abs());
        let h = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        HslColor::new(h, s * 100.0, l * 100.0)
    }

    /// Returns the color with `amount` subtracted from every channel,
    /// saturating at 0.
    #[must_use]
    pub const fn darken_by(&self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Returns the color with `amount` added to every channel, saturating
    /// at 255.
    #[must_use]
    pub const fn lighten_by(&self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::WHITE
    }
}

/// A color in HSL notation: hue in degrees, saturation and lightness in
/// percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue (0-360)
    pub h: f64,
    /// Saturation (0-100)
    pub s: f64,
    /// Lightness (0-100)
    pub l: f64,
}

impl HslColor {
    /// Creates a new `HslColor`.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts to the nearest 8-bit RGB color.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor::from_hsl(self.h, self.s, self.l)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("#aBcDeF").unwrap();
        assert_eq!(color, RgbColor::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("##ffffff").is_err());
        assert!(RgbColor::from_hex("+fffff").is_err());
        assert!(RgbColor::from_hex("ff ff ff").is_err());
        assert!(RgbColor::from_hex("  #FFFFFF  ").is_err());
        assert!(RgbColor::from_hex("#FFFFFF ").is_err());
        assert!(RgbColor::from_hex("\tffffff").is_err());
        // Multi-byte characters must not panic on slicing.
        assert!(RgbColor::from_hex("ééé").is_err());
    }

    #[test]
    fn test_from_hex_error_kind() {
        let err = RgbColor::from_hex("#12345").unwrap_err();
        assert!(matches!(err, TokenError::InvalidFormat { ref input, .. } if input == "#12345"));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(RgbColor::new(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn test_roundtrip() {
        for (r, g, b) in [(123, 45, 67), (0, 0, 0), (255, 255, 255), (15, 16, 240)] {
            let original = RgbColor::new(r, g, b);
            let parsed = RgbColor::from_hex(&original.to_hex()).unwrap();
            assert_eq!(original, parsed);
            assert_eq!(parsed.to_hex(), original.to_hex());
        }
    }

    #[test]
    fn test_css_rgb() {
        assert_eq!(RgbColor::new(59, 130, 246).to_css_rgb(), "rgb(59, 130, 246)");
    }

    #[test]
    fn test_default() {
        assert_eq!(RgbColor::default(), RgbColor::new(255, 255, 255));
    }

    // HSL conversion tests

    #[test]
    fn test_hsl_to_rgb_primary_colors() {
        assert_eq!(RgbColor::from_hsl(0.0, 100.0, 50.0), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hsl(120.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
        assert_eq!(RgbColor::from_hsl(240.0, 100.0, 50.0), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_hsl_to_rgb_grayscale() {
        assert_eq!(RgbColor::from_hsl(0.0, 0.0, 0.0), RgbColor::BLACK);
        assert_eq!(RgbColor::from_hsl(0.0, 0.0, 100.0), RgbColor::WHITE);
        // Hue doesn't matter for grayscale
        assert_eq!(RgbColor::from_hsl(180.0, 0.0, 50.0), RgbColor::new(128, 128, 128));
    }

    #[test]
    fn test_hsl_to_rgb_palette_values() {
        assert_eq!(RgbColor::from_hsl(220.0, 95.0, 97.0), RgbColor::new(240, 245, 255));
        assert_eq!(RgbColor::from_hsl(220.0, 70.0, 48.0), RgbColor::new(37, 94, 208));
    }

    #[test]
    fn test_hsl_normalization() {
        // Hue wraps, saturation/lightness clamp
        assert_eq!(RgbColor::from_hsl(360.0, 100.0, 50.0), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hsl(-240.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
        assert_eq!(RgbColor::from_hsl(0.0, 150.0, 50.0), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hsl(0.0, -20.0, 150.0), RgbColor::WHITE);
        assert_eq!(RgbColor::from_hsl(f64::NAN, 100.0, 50.0), RgbColor::new(255, 0, 0));
    }

    #[test]
    fn test_hsl_roundtrip() {
        let colors = vec![
            RgbColor::new(255, 0, 0),
            RgbColor::new(255, 255, 0),
            RgbColor::new(0, 255, 255),
            RgbColor::new(128, 64, 192),
            RgbColor::new(200, 100, 50),
            RgbColor::new(17, 17, 17),
        ];

        for color in colors {
            let converted = color.to_hsl().to_rgb();
            // Allow small rounding errors (±1 per channel)
            assert!(
                (i16::from(color.r) - i16::from(converted.r)).abs() <= 1,
                "Red channel mismatch: {} vs {}",
                color.r,
                converted.r
            );
            assert!(
                (i16::from(color.g) - i16::from(converted.g)).abs() <= 1,
                "Green channel mismatch: {} vs {}",
                color.g,
                converted.g
            );
            assert!(
                (i16::from(color.b) - i16::from(converted.b)).abs() <= 1,
                "Blue channel mismatch: {} vs {}",
                color.b,
                converted.b
            );
        }
    }

    #[test]
    fn test_to_hsl_gray_has_zero_hue() {
        let hsl = RgbColor::new(128, 128, 128).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!((hsl.l - 50.196).abs() < 0.01);
    }

    #[test]
    fn test_hsl_display() {
        assert_eq!(HslColor::new(220.0, 95.0, 97.0).to_string(), "hsl(220, 95%, 97%)");
        assert_eq!(HslColor::new(22.5, 5.0, 4.0).to_string(), "hsl(22.5, 5%, 4%)");
    }

    #[test]
    fn test_darken_and_lighten_saturate() {
        let color = RgbColor::new(10, 128, 250);
        assert_eq!(color.darken_by(30), RgbColor::new(0, 98, 220));
        assert_eq!(color.lighten_by(30), RgbColor::new(40, 158, 255));
    }
}
