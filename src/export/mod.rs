//! Export functionality for generated tokens.
//!
//! This module renders palettes and type scales for consumption outside the
//! tool: pretty JSON views, CSS custom properties, and Tailwind theme
//! extensions. Every renderer returns a `String`; writing it anywhere is
//! left to the caller.

pub mod css;
pub mod json;
pub mod tailwind;

use clap::ValueEnum;

pub use css::{palette_variables, type_scale_stylesheet};
pub use json::{round_to, token_set_json, type_scale_json};
pub use tailwind::{palette_config, type_scale_config};

/// Output format for generated tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Human-readable table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// CSS custom properties
    Css,
    /// Tailwind `theme.extend` module
    Tailwind,
}
