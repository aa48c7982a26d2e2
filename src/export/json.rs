//! JSON views of generated tokens.
//!
//! The engine keeps full `f64` precision; these views round for display
//! (luminance to 4 places, ratios and sizes to 2) and flatten colors to
//! their string forms.

use serde::Serialize;

use crate::models::{Palette, PaletteKind, ScaleStep, ShadeInfo, TokenSet, TypeScale, WcagLevel};

/// Rounds `value` to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Serialize, Debug)]
struct ShadeView {
    shade: u16,
    hex: String,
    rgb: String,
    hsl: String,
    luminance: f64,
    contrast_on_white: f64,
    contrast_on_black: f64,
    passes_aa: bool,
    passes_aaa: bool,
}

impl From<&ShadeInfo> for ShadeView {
    fn from(info: &ShadeInfo) -> Self {
        Self {
            shade: info.shade,
            hex: info.hex(),
            rgb: info.rgb(),
            hsl: info.hsl.to_string(),
            luminance: round_to(info.luminance, 4),
            contrast_on_white: round_to(info.contrast_on_white, 2),
            contrast_on_black: round_to(info.contrast_on_black, 2),
            passes_aa: info.passes(WcagLevel::Aa),
            passes_aaa: info.passes(WcagLevel::Aaa),
        }
    }
}

#[derive(Serialize, Debug)]
struct PaletteView {
    name: String,
    kind: PaletteKind,
    hue: f64,
    shades: Vec<ShadeView>,
}

impl From<&Palette> for PaletteView {
    fn from(palette: &Palette) -> Self {
        Self {
            name: palette.name.clone(),
            kind: palette.kind,
            hue: round_to(palette.hue, 2),
            shades: palette.shades.iter().map(ShadeView::from).collect(),
        }
    }
}

#[derive(Serialize, Debug)]
struct TokenSetView {
    base_hue: f64,
    palettes: Vec<PaletteView>,
}

#[derive(Serialize, Debug)]
struct StepView {
    step: i32,
    label: String,
    min_size_px: f64,
    max_size_px: f64,
    rem: String,
    clamp: String,
}

impl From<&ScaleStep> for StepView {
    fn from(step: &ScaleStep) -> Self {
        Self {
            step: step.step,
            label: step.label(),
            min_size_px: round_to(step.min_size_px, 2),
            max_size_px: round_to(step.max_size_px, 2),
            rem: step.rem_label(),
            clamp: step.clamp.to_string(),
        }
    }
}

#[derive(Serialize, Debug)]
struct TypeScaleView {
    base_size: f64,
    ratio: String,
    ratio_value: f64,
    min_viewport: f64,
    max_viewport: f64,
    steps: Vec<StepView>,
}

/// Renders a token set as pretty JSON.
pub fn token_set_json(set: &TokenSet) -> serde_json::Result<String> {
    let view = TokenSetView {
        base_hue: round_to(set.base_hue, 2),
        palettes: set.iter().map(PaletteView::from).collect(),
    };
    serde_json::to_string_pretty(&view)
}

/// Renders a type scale as pretty JSON.
pub fn type_scale_json(scale: &TypeScale) -> serde_json::Result<String> {
    let options = &scale.options;
    let view = TypeScaleView {
        base_size: options.base_size,
        ratio: options.ratio.to_string(),
        ratio_value: options.ratio.value(),
        min_viewport: options.min_viewport,
        max_viewport: options.max_viewport,
        steps: scale.iter().map(StepView::from).collect(),
    };
    serde_json::to_string_pretty(&view)
}
