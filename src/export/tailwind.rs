//! Tailwind CSS theme extension generation.
//!
//! Output is a CommonJS module whose object literal is pretty-printed JSON,
//! which Tailwind's config loader reads as-is.

use serde_json::{json, Map, Value};

use crate::models::{TokenSet, TypeScale};
use crate::services::typography::{FONT_WEIGHTS, LETTER_SPACING, LINE_HEIGHTS};

/// Wraps a `theme.extend` object in a `module.exports` statement.
fn module_exports(extend: Value) -> serde_json::Result<String> {
    let config = json!({ "theme": { "extend": extend } });
    let body = serde_json::to_string_pretty(&config)?;
    Ok(format!("module.exports = {body};\n"))
}

/// Generates a Tailwind config extending `colors` with every palette.
///
/// Shades keep their ramp order (`50` first, `950` last).
pub fn palette_config(set: &TokenSet) -> serde_json::Result<String> {
    let colors: Map<String, Value> = set
        .iter()
        .map(|palette| {
            let shades: Map<String, Value> = palette
                .shades
                .iter()
                .map(|shade| (shade.shade.to_string(), Value::String(shade.hex())))
                .collect();
            (palette.name.clone(), Value::Object(shades))
        })
        .collect();

    module_exports(json!({ "colors": colors }))
}

/// Generates a Tailwind config extending `fontSize` with the fluid steps and
/// the line-height, letter-spacing and font-weight tables.
///
/// Font size keys drop the `step-` prefix, so step `-1` becomes `"-1"`.
pub fn type_scale_config(scale: &TypeScale) -> serde_json::Result<String> {
    let font_size: Map<String, Value> = scale
        .iter()
        .map(|step| (step.step.to_string(), Value::String(step.clamp.to_string())))
        .collect();

    let line_height: Map<String, Value> = LINE_HEIGHTS
        .iter()
        .map(|(name, value)| ((*name).to_string(), Value::String(value.to_string())))
        .collect();

    let letter_spacing: Map<String, Value> = LETTER_SPACING
        .iter()
        .map(|(name, value)| ((*name).to_string(), Value::String((*value).to_string())))
        .collect();

    let font_weight: Map<String, Value> = FONT_WEIGHTS
        .iter()
        .map(|(name, value)| ((*name).to_string(), Value::String(value.to_string())))
        .collect();

    module_exports(json!({
        "fontSize": font_size,
        "lineHeight": line_height,
        "letterSpacing": letter_spacing,
        "fontWeight": font_weight,
    }))
}
