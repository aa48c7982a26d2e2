//! CSS custom property generation.

use std::fmt::Write as _;

use crate::models::{TokenSet, TypeScale};
use crate::services::typography::{FONT_WEIGHTS, LETTER_SPACING, LINE_HEIGHTS};

/// Capitalizes the first character of a palette name for comment headers.
fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Generates a `:root` block with one `--color-{palette}-{shade}` variable
/// per shade.
///
/// # Examples
///
/// ```
/// use tokensmith::export::css::palette_variables;
/// use tokensmith::services::generate_token_set;
///
/// let css = palette_variables(&generate_token_set(220.0));
/// assert!(css.contains("--color-primary-50: #f0f5ff;"));
/// ```
pub fn palette_variables(set: &TokenSet) -> String {
    let mut output = String::from(":root {\n");

    for palette in set.iter() {
        let _ = writeln!(output, "  /* {} Palette */", title_case(&palette.name));
        for shade in &palette.shades {
            let _ = writeln!(
                output,
                "  --color-{}-{}: {};",
                palette.name,
                shade.shade,
                shade.hex()
            );
        }
        output.push('\n');
    }

    output.push_str("}\n");
    output
}

/// Generates a stylesheet for a fluid type scale.
///
/// Contains a `:root` block with `--step-N` sizes plus the line-height,
/// letter-spacing and font-weight tokens, followed by `.text-step-N`
/// utility classes.
pub fn type_scale_stylesheet(scale: &TypeScale) -> String {
    let options = &scale.options;
    let mut output = String::new();

    output.push_str("/* Typography Scale - Generated */\n");
    let _ = writeln!(
        output,
        "/* Base: {}px | Ratio: {} ({}) | Viewport: {}px - {}px */",
        options.base_size,
        options.ratio,
        options.ratio.value(),
        options.min_viewport,
        options.max_viewport
    );
    output.push('\n');

    output.push_str(":root {\n  /* Font Sizes */\n");
    for step in scale.iter() {
        let _ = writeln!(output, "  --{}: {};", step.label(), step.clamp);
    }

    output.push_str("\n  /* Line Heights */\n");
    for (name, value) in LINE_HEIGHTS {
        let _ = writeln!(output, "  --leading-{name}: {value};");
    }

    output.push_str("\n  /* Letter Spacing */\n");
    for (name, value) in LETTER_SPACING {
        let _ = writeln!(output, "  --tracking-{name}: {value};");
    }

    output.push_str("\n  /* Font Weights */\n");
    for (name, value) in FONT_WEIGHTS {
        let _ = writeln!(output, "  --font-{name}: {value};");
    }
    output.push_str("}\n\n");

    output.push_str("/* Utility Classes */\n");
    for step in scale.iter() {
        let label = step.label();
        let _ = writeln!(output, ".text-{label} {{ font-size: var(--{label}); }}");
    }

    output
}
