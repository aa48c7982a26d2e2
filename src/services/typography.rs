//! Fluid type scale generation.
//!
//! For each step `s` the maximum size is `base * ratio^s` and the minimum is
//! 80% of that. The size interpolates linearly between the two across the
//! viewport range, which yields a `clamp(min, intercept + slope·vw, max)`.

use tracing::debug;

use crate::error::{TokenError, TokenResult};
use crate::models::{ClampExpression, ScaleStep, TypeScale, TypeScaleOptions};

/// Minimum size as a fraction of the maximum, independent of viewport.
pub const MIN_SIZE_FACTOR: f64 = 0.8;

/// Root font size used for px → rem conversion.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Line-height tokens, tightest first.
pub const LINE_HEIGHTS: [(&str, f64); 5] = [
    ("tight", 1.1),
    ("snug", 1.25),
    ("normal", 1.5),
    ("relaxed", 1.625),
    ("loose", 2.0),
];

/// Letter-spacing tokens, tightest first.
pub const LETTER_SPACING: [(&str, &str); 6] = [
    ("tighter", "-0.05em"),
    ("tight", "-0.025em"),
    ("normal", "0"),
    ("wide", "0.025em"),
    ("wider", "0.05em"),
    ("widest", "0.1em"),
];

/// Font-weight tokens, lightest first.
pub const FONT_WEIGHTS: [(&str, u16); 9] = [
    ("thin", 100),
    ("extralight", 200),
    ("light", 300),
    ("normal", 400),
    ("medium", 500),
    ("semibold", 600),
    ("bold", 700),
    ("extrabold", 800),
    ("black", 900),
];

/// Computes one scale step for an already validated set of options.
#[must_use]
pub fn compute_step(options: &TypeScaleOptions, step: i32) -> ScaleStep {
    let max_size = options.base_size * options.ratio.value().powi(step);
    let min_size = max_size * MIN_SIZE_FACTOR;

    let slope = (max_size - min_size) / (options.max_viewport - options.min_viewport);
    let intercept = min_size - slope * options.min_viewport;

    ScaleStep {
        step,
        min_size_px: min_size,
        max_size_px: max_size,
        clamp: ClampExpression {
            min_rem: min_size / ROOT_FONT_SIZE_PX,
            preferred_rem: intercept / ROOT_FONT_SIZE_PX,
            preferred_vw: slope * 100.0,
            max_rem: max_size / ROOT_FONT_SIZE_PX,
        },
    }
}

/// Generates a fluid type scale.
///
/// # Errors
///
/// Returns [`crate::TokenError::Configuration`] if the options fail
/// [`TypeScaleOptions::validate`] or a step's `clamp()` terms are not finite.
/// No partial scale is returned.
///
/// # Examples
///
/// ```
/// use tokensmith::models::TypeScaleOptions;
/// use tokensmith::services::typography::generate_type_scale;
///
/// let scale = generate_type_scale(TypeScaleOptions::default()).unwrap();
/// let base = scale.step(0).unwrap();
/// assert_eq!(base.max_size_label(), "16.00px");
/// assert_eq!(base.clamp.to_string(), "clamp(0.80rem, 0.73rem + 0.33vw, 1.00rem)");
/// ```
pub fn generate_type_scale(options: TypeScaleOptions) -> TokenResult<TypeScale> {
    options.validate()?;

    let steps = options
        .steps
        .iter()
        .map(|&step| {
            let computed = compute_step(&options, step);
            let clamp = computed.clamp;
            let finite = [clamp.min_rem, clamp.preferred_rem, clamp.preferred_vw, clamp.max_rem]
                .iter()
                .all(|v| v.is_finite());
            if finite {
                Ok(computed)
            } else {
                Err(TokenError::configuration(format!(
                    "step {step} has no finite clamp() expression for the {}px to {}px viewport range",
                    options.min_viewport, options.max_viewport
                )))
            }
        })
        .collect::<TokenResult<Vec<_>>>()?;

    debug!(
        base_size = options.base_size,
        ratio = %options.ratio,
        steps = options.steps.len(),
        "generated type scale"
    );

    Ok(TypeScale { options, steps })
}
