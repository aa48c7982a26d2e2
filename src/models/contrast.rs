//! Contrast check results and accessibility suggestions.

use super::RgbColor;
use crate::error::TokenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WcagLevel {
    /// Minimum level: 4.5:1 normal text, 3:1 large text
    #[default]
    #[serde(rename = "AA")]
    Aa,
    /// Enhanced level: 7:1 normal text, 4.5:1 large text
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Every level, weakest first.
    pub const ALL: [Self; 2] = [Self::Aa, Self::Aaa];

    /// Minimum contrast ratio required at this level.
    #[must_use]
    pub const fn required_ratio(self, is_large_text: bool) -> f64 {
        match (self, is_large_text) {
            (Self::Aa, false) => 4.5,
            (Self::Aa, true) => 3.0,
            (Self::Aaa, false) => 7.0,
            (Self::Aaa, true) => 4.5,
        }
    }

    /// Display name ("AA" or "AAA").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WcagLevel {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(Self::Aa),
            "AAA" => Ok(Self::Aaa),
            other => Err(TokenError::configuration(format!(
                "unknown WCAG level '{other}' (expected AA or AAA)"
            ))),
        }
    }
}

/// Options for a contrast evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContrastOptions {
    /// Conformance level to check against (default AA)
    pub level: WcagLevel,
    /// Whether the text counts as large (18pt, or 14pt bold)
    pub is_large_text: bool,
}

impl ContrastOptions {
    /// Creates options for `level` and the given text size.
    #[must_use]
    pub const fn new(level: WcagLevel, is_large_text: bool) -> Self {
        Self {
            level,
            is_large_text,
        }
    }
}

/// Outcome of checking one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    /// Contrast ratio in [1, 21]
    pub ratio: f64,
    /// Ratio required by `level` for this text size
    pub required_ratio: f64,
    /// Whether `ratio >= required_ratio`
    pub passes: bool,
    /// Level that was checked
    pub level: WcagLevel,
    /// Whether the large-text threshold was used
    pub is_large_text: bool,
}

impl ContrastResult {
    /// One-line verdict, e.g. `✓ Passes WCAG AA (4.54:1 >= 4.5:1)`.
    #[must_use]
    pub fn message(&self) -> String {
        if self.passes {
            format!(
                "✓ Passes WCAG {} ({:.2}:1 >= {}:1)",
                self.level, self.ratio, self.required_ratio
            )
        } else {
            format!(
                "✗ Fails WCAG {} ({:.2}:1 < {}:1)",
                self.level, self.ratio, self.required_ratio
            )
        }
    }
}

/// Which way a suggested color moved from the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentDirection {
    /// Channels were reduced
    Darker,
    /// Channels were increased
    Lighter,
}

impl fmt::Display for AdjustmentDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Darker => f.write_str("darker"),
            Self::Lighter => f.write_str("lighter"),
        }
    }
}

/// A foreground color that meets a target ratio against a fixed background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccessibleSuggestion {
    /// The adjusted foreground
    pub color: RgbColor,
    /// Its contrast ratio against the background
    pub ratio: f64,
    /// Direction of the adjustment
    pub direction: AdjustmentDirection,
}

/// Outcome of a touch-target size check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TouchTargetResult {
    /// Target width in px
    pub width: u32,
    /// Target height in px
    pub height: u32,
    /// Minimum edge length in px
    pub min_required: u32,
    /// Whether both edges meet the minimum
    pub passes: bool,
}

impl TouchTargetResult {
    /// One-line verdict for console output.
    #[must_use]
    pub fn message(&self) -> String {
        let min = self.min_required;
        if self.passes {
            format!(
                "✓ Touch target meets minimum size ({}x{}px >= {min}x{min}px)",
                self.width, self.height
            )
        } else {
            format!(
                "✗ Touch target too small ({}x{}px < {min}x{min}px)",
                self.width, self.height
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_ratio_table() {
        assert!((WcagLevel::Aa.required_ratio(false) - 4.5).abs() < f64::EPSILON);
        assert!((WcagLevel::Aa.required_ratio(true) - 3.0).abs() < f64::EPSILON);
        assert!((WcagLevel::Aaa.required_ratio(false) - 7.0).abs() < f64::EPSILON);
        assert!((WcagLevel::Aaa.required_ratio(true) - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("aa".parse::<WcagLevel>().unwrap(), WcagLevel::Aa);
        assert_eq!(" AAA ".parse::<WcagLevel>().unwrap(), WcagLevel::Aaa);
        assert!("A".parse::<WcagLevel>().is_err());
    }

    #[test]
    fn test_level_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&WcagLevel::Aaa).unwrap(), "\"AAA\"");
        let level: WcagLevel = serde_json::from_str("\"AA\"").unwrap();
        assert_eq!(level, WcagLevel::Aa);
    }

    #[test]
    fn test_result_message() {
        let result = ContrastResult {
            ratio: 4.542,
            required_ratio: 4.5,
            passes: true,
            level: WcagLevel::Aa,
            is_large_text: false,
        };
        assert_eq!(result.message(), "✓ Passes WCAG AA (4.54:1 >= 4.5:1)");

        let result = ContrastResult {
            ratio: 4.478,
            required_ratio: 7.0,
            passes: false,
            level: WcagLevel::Aaa,
            is_large_text: false,
        };
        assert_eq!(result.message(), "✗ Fails WCAG AAA (4.48:1 < 7:1)");
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AdjustmentDirection::Darker).unwrap(),
            "\"darker\""
        );
        assert_eq!(AdjustmentDirection::Lighter.to_string(), "lighter");
    }
}
