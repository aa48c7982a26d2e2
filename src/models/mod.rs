//! Data models for colors, palettes, contrast results and type scales.
//!
//! This module contains the value types produced by the token engine.
//! Models are independent of the CLI and of any output format.

pub mod color_palette;
pub mod contrast;
pub mod rgb;
pub mod type_scale;

// Re-export all model types
pub use color_palette::{Palette, PaletteKind, ShadeInfo, TokenSet, SHADE_KEYS};
pub use contrast::{
    AccessibleSuggestion, AdjustmentDirection, ContrastOptions, ContrastResult, TouchTargetResult,
    WcagLevel,
};
pub use rgb::{HslColor, RgbColor};
pub use type_scale::{
    default_steps, ClampExpression, Ratio, RatioPreset, ScaleStep, TypeScale, TypeScaleOptions,
};
