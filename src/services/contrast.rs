//! WCAG relative luminance and contrast ratio.
//!
//! Uses the WCAG 2.x definitions:
//!
//! - channel linearization with the 0.03928 threshold
//! - luminance `L = 0.2126 R + 0.7152 G + 0.0722 B`
//! - contrast `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1, 21]

use tracing::debug;

use crate::error::TokenResult;
use crate::models::{ContrastOptions, ContrastResult, RgbColor, WcagLevel};

/// Linearization threshold for a normalized sRGB channel.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Converts an 8-bit sRGB channel to linear light.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
/// Increasing any channel never decreases the result.
#[must_use]
pub fn relative_luminance(color: RgbColor) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two precomputed luminance values.
#[must_use]
pub fn contrast_ratio_from_luminance(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Compute the WCAG contrast ratio between two colors.
///
/// The result is always in [1.0, 21.0] regardless of argument order.
///
/// # Examples
///
/// ```
/// use tokensmith::models::RgbColor;
/// use tokensmith::services::contrast::contrast_ratio;
///
/// let ratio = contrast_ratio(RgbColor::BLACK, RgbColor::WHITE);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    contrast_ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

/// Checks a parsed color pair against a WCAG level.
#[must_use]
pub fn evaluate(
    foreground: RgbColor,
    background: RgbColor,
    options: ContrastOptions,
) -> ContrastResult {
    let ratio = contrast_ratio(foreground, background);
    let required_ratio = options.level.required_ratio(options.is_large_text);
    let passes = ratio >= required_ratio;

    debug!(
        %foreground,
        %background,
        ratio,
        required_ratio,
        passes,
        "evaluated contrast"
    );

    ContrastResult {
        ratio,
        required_ratio,
        passes,
        level: options.level,
        is_large_text: options.is_large_text,
    }
}

/// Checks a hex color pair against a WCAG level.
///
/// # Errors
///
/// Returns [`crate::TokenError::InvalidFormat`] if either color is not a
/// valid hex string. The error is a value, so batch callers can report it and
/// move on to the next pair.
///
/// # Examples
///
/// ```
/// use tokensmith::models::ContrastOptions;
/// use tokensmith::services::contrast::evaluate_contrast;
///
/// let result = evaluate_contrast("#767676", "#ffffff", ContrastOptions::default()).unwrap();
/// assert!(result.passes);
/// ```
pub fn evaluate_contrast(
    foreground: &str,
    background: &str,
    options: ContrastOptions,
) -> TokenResult<ContrastResult> {
    let fg = RgbColor::from_hex(foreground)?;
    let bg = RgbColor::from_hex(background)?;
    Ok(evaluate(fg, bg, options))
}

/// Checks a hex color pair against every WCAG level (AA, then AAA).
///
/// # Errors
///
/// Returns [`crate::TokenError::InvalidFormat`] if either color is invalid.
pub fn evaluate_all_levels(
    foreground: &str,
    background: &str,
    is_large_text: bool,
) -> TokenResult<Vec<ContrastResult>> {
    let fg = RgbColor::from_hex(foreground)?;
    let bg = RgbColor::from_hex(background)?;
    Ok(WcagLevel::ALL
        .into_iter()
        .map(|level| evaluate(fg, bg, ContrastOptions::new(level, is_large_text)))
        .collect())
}
