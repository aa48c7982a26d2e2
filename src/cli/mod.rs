//! CLI command handlers for Tokensmith.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method that
//! prints its result to stdout and reports failure as a [`CliError`] whose
//! exit code `main` hands back to the shell.

pub mod checklist;
pub mod common;
pub mod config;
pub mod contrast;
pub mod palette;
pub mod touch;
pub mod typescale;

// Re-export types used by main.rs and tests
pub use checklist::ChecklistArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use palette::PaletteArgs;
pub use touch::TouchArgs;
pub use typescale::TypeScaleArgs;
