//! Service layer for token computation.
//!
//! Each service is a set of pure functions over the value types in
//! [`crate::models`]: contrast math, the accessible-alternative search,
//! palette ramps and fluid type scales.

pub mod accessibility;
pub mod contrast;
pub mod palette;
pub mod typography;

// Re-export commonly used functions
pub use accessibility::{check_touch_target, suggest_accessible_alternatives, suggest_alternatives};
pub use contrast::{contrast_ratio, evaluate, evaluate_contrast, relative_luminance};
pub use palette::{generate_palette, generate_token_set};
pub use typography::generate_type_scale;
