//! Palette generation command.

use clap::Args;
use tracing::info;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::models::{Palette, TokenSet, WcagLevel};
use crate::services::palette::{generate_palette, generate_token_set, normalize_hue};

/// Generate shade palettes from a base hue
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Base hue in degrees (defaults to the configured hue)
    #[arg(value_name = "HUE", allow_negative_numbers = true)]
    hue: Option<f64>,

    /// Generate a single palette with this name instead of the full set
    /// ("neutral" selects the gray ramp)
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = ExportFormat::Text)]
    format: ExportFormat,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let hue = self.hue.unwrap_or(config.palette.base_hue);

        let set = match &self.name {
            Some(name) if name.trim().is_empty() => {
                return Err(CliError::validation("Palette name cannot be empty"));
            }
            Some(name) => TokenSet {
                base_hue: normalize_hue(hue),
                palettes: vec![generate_palette(hue, name.trim())],
            },
            None => generate_token_set(hue),
        };

        info!(hue = set.base_hue, palettes = set.palettes.len(), format = ?self.format, "palette");

        match self.format {
            ExportFormat::Text => print_text(&set),
            ExportFormat::Json => {
                let json = export::token_set_json(&set)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
                println!("{json}");
            }
            ExportFormat::Css => print!("{}", export::palette_variables(&set)),
            ExportFormat::Tailwind => {
                let module = export::palette_config(&set)
                    .map_err(|e| CliError::io(format!("Failed to render Tailwind config: {e}")))?;
                print!("{module}");
            }
        }

        Ok(())
    }
}

fn print_text(set: &TokenSet) {
    println!("Base hue: {}°", set.base_hue);
    for palette in set.iter() {
        println!();
        print_palette(palette);
    }
}

fn print_palette(palette: &Palette) {
    let anchor = palette
        .primary_shade()
        .map(|s| format!(", 500 = {}", s.hex()))
        .unwrap_or_default();
    println!(
        "{} ({} shades, hue {}°{anchor})",
        palette.name,
        palette.shade_count(),
        palette.hue
    );
    println!(
        "  {:>5}  {:<8} {:<19} {:>9}  {:>8}  {:>8}  WCAG",
        "shade", "hex", "rgb", "luminance", "on white", "on black"
    );

    for shade in &palette.shades {
        let grade = if shade.passes(WcagLevel::Aaa) {
            "AAA"
        } else if shade.passes(WcagLevel::Aa) {
            "AA"
        } else {
            "-"
        };
        println!(
            "  {:>5}  {:<8} {:<19} {:>9.4}  {:>6.2}:1  {:>6.2}:1  {grade}",
            shade.shade,
            shade.hex(),
            shade.rgb(),
            shade.luminance,
            shade.contrast_on_white,
            shade.contrast_on_black
        );
    }
}
