//! Accessible-alternative search and other accessibility checks.
//!
//! The search walks a foreground color toward black and toward white in
//! fixed channel increments and keeps the first candidate in each direction
//! that reaches the target ratio. All three channels move together, so the
//! walk never rotates hue; a different hue might reach the target with less
//! visual change, but finding it is outside this search.

use tracing::debug;

use crate::error::TokenResult;
use crate::models::{AccessibleSuggestion, AdjustmentDirection, RgbColor, TouchTargetResult};
use crate::services::contrast::contrast_ratio;

/// Amount added to or subtracted from every channel per search step.
pub const ADJUSTMENT_STEP: u8 = 15;

/// Maximum number of steps tried in each direction.
pub const MAX_ADJUSTMENT_STEPS: u8 = 10;

/// Minimum touch target edge, in px.
pub const MIN_TOUCH_TARGET_PX: u32 = 44;

/// Searches one direction for the nearest candidate meeting `target_ratio`.
///
/// Returns `None` when no step within [`MAX_ADJUSTMENT_STEPS`] is enough.
#[must_use]
pub fn search_direction(
    foreground: RgbColor,
    background: RgbColor,
    target_ratio: f64,
    direction: AdjustmentDirection,
) -> Option<AccessibleSuggestion> {
    (1..=MAX_ADJUSTMENT_STEPS).find_map(|step| {
        // 10 * 15 = 150 fits in u8
        let amount = step * ADJUSTMENT_STEP;
        let candidate = match direction {
            AdjustmentDirection::Darker => foreground.darken_by(amount),
            AdjustmentDirection::Lighter => foreground.lighten_by(amount),
        };
        let ratio = contrast_ratio(candidate, background);
        (ratio >= target_ratio).then_some(AccessibleSuggestion {
            color: candidate,
            ratio,
            direction,
        })
    })
}

/// Suggests up to two foreground colors that meet `target_ratio` against
/// `background`: the nearest darker one, then the nearest lighter one.
///
/// An exhausted direction simply contributes nothing, so the result has
/// zero, one, or two entries.
#[must_use]
pub fn suggest_alternatives(
    foreground: RgbColor,
    background: RgbColor,
    target_ratio: f64,
) -> Vec<AccessibleSuggestion> {
    let suggestions: Vec<_> = [AdjustmentDirection::Darker, AdjustmentDirection::Lighter]
        .into_iter()
        .filter_map(|direction| search_direction(foreground, background, target_ratio, direction))
        .collect();

    debug!(
        %foreground,
        %background,
        target_ratio,
        found = suggestions.len(),
        "searched for accessible alternatives"
    );

    suggestions
}

/// Hex-string entry point for [`suggest_alternatives`].
///
/// # Errors
///
/// Returns [`crate::TokenError::InvalidFormat`] if either color is invalid.
///
/// # Examples
///
/// ```
/// use tokensmith::services::accessibility::suggest_accessible_alternatives;
///
/// let suggestions = suggest_accessible_alternatives("#999999", "#ffffff", 4.5).unwrap();
/// assert_eq!(suggestions.len(), 1);
/// assert_eq!(suggestions[0].color.to_hex(), "#6c6c6c");
/// ```
pub fn suggest_accessible_alternatives(
    foreground: &str,
    background: &str,
    target_ratio: f64,
) -> TokenResult<Vec<AccessibleSuggestion>> {
    let fg = RgbColor::from_hex(foreground)?;
    let bg = RgbColor::from_hex(background)?;
    Ok(suggest_alternatives(fg, bg, target_ratio))
}

/// Checks that a touch target is at least 44×44 px.
#[must_use]
pub const fn check_touch_target(width: u32, height: u32) -> TouchTargetResult {
    TouchTargetResult {
        width,
        height,
        min_required: MIN_TOUCH_TARGET_PX,
        passes: width >= MIN_TOUCH_TARGET_PX && height >= MIN_TOUCH_TARGET_PX,
    }
}

/// A group of checklist items under one WCAG principle.
#[derive(Debug, Clone, Copy)]
pub struct ChecklistSection {
    /// Principle name
    pub title: &'static str,
    /// Items to verify by hand
    pub items: &'static [&'static str],
}

/// Manual accessibility checklist, grouped by WCAG principle.
pub const CHECKLIST: &[ChecklistSection] = &[
    ChecklistSection {
        title: "PERCEIVABLE",
        items: &[
            "Text has sufficient color contrast (4.5:1 for normal, 3:1 for large)",
            "Non-text elements have 3:1 contrast ratio",
            "Color is not the only means of conveying information",
            "Text can be resized to 200% without loss of content",
            "Images have appropriate alt text",
            "Audio/video has captions or transcripts",
        ],
    },
    ChecklistSection {
        title: "OPERABLE",
        items: &[
            "All functionality available via keyboard",
            "No keyboard traps",
            "Focus order is logical",
            "Focus indicators are visible",
            "Touch targets are at least 44x44px",
            "Users can pause, stop, or hide moving content",
            "No content flashes more than 3 times per second",
        ],
    },
    ChecklistSection {
        title: "UNDERSTANDABLE",
        items: &[
            "Language of page is identified",
            "Navigation is consistent",
            "Form labels are associated with inputs",
            "Error messages are clear and specific",
            "Instructions don't rely solely on sensory characteristics",
        ],
    },
    ChecklistSection {
        title: "ROBUST",
        items: &[
            "HTML is valid and well-formed",
            "Name, role, and value are programmatically determined",
            "Status messages are announced to screen readers",
            "Custom components have appropriate ARIA attributes",
        ],
    },
];
