//! Design token computation library.
//!
//! This library derives color and typography design tokens: WCAG contrast
//! checks with accessible-alternative suggestions, 11-shade palette ramps
//! from a base hue, and fluid `clamp()` type scales. Results can be exported
//! as JSON, CSS custom properties, or a Tailwind theme extension.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{TokenError, TokenResult};
