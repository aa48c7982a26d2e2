//! Fluid type scale command.

use clap::Args;
use tracing::info;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::models::{Ratio, TypeScale, TypeScaleOptions};
use crate::services::typography::generate_type_scale;

/// Generate a fluid type scale
///
/// Flags override the configured defaults one by one.
#[derive(Args, Debug)]
pub struct TypeScaleArgs {
    /// Base font size in px
    #[arg(long, value_name = "PX")]
    base: Option<f64>,

    /// Scale ratio: a preset name (e.g. perfect-fourth) or a number
    #[arg(long, value_name = "RATIO")]
    ratio: Option<Ratio>,

    /// Viewport width where sizes reach their minimum, in px
    #[arg(long, value_name = "PX")]
    min_viewport: Option<f64>,

    /// Viewport width where sizes reach their maximum, in px
    #[arg(long, value_name = "PX")]
    max_viewport: Option<f64>,

    /// Comma-separated step indices, e.g. -2,-1,0,1,2
    #[arg(long, value_name = "LIST", value_delimiter = ',', allow_hyphen_values = true)]
    steps: Option<Vec<i32>>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = ExportFormat::Text)]
    format: ExportFormat,
}

impl TypeScaleArgs {
    /// Merges flags over configured defaults.
    fn options(&self, defaults: &TypeScaleOptions) -> TypeScaleOptions {
        TypeScaleOptions {
            base_size: self.base.unwrap_or(defaults.base_size),
            ratio: self.ratio.unwrap_or(defaults.ratio),
            min_viewport: self.min_viewport.unwrap_or(defaults.min_viewport),
            max_viewport: self.max_viewport.unwrap_or(defaults.max_viewport),
            steps: self
                .steps
                .clone()
                .unwrap_or_else(|| defaults.steps.clone()),
        }
    }

    /// Execute the typescale command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let options = self.options(&config.typography);
        let scale = generate_type_scale(options)?;

        info!(
            base_size = scale.options.base_size,
            ratio = %scale.options.ratio,
            steps = scale.steps.len(),
            format = ?self.format,
            "typescale"
        );

        match self.format {
            ExportFormat::Text => print_text(&scale),
            ExportFormat::Json => {
                let json = export::type_scale_json(&scale)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
                println!("{json}");
            }
            ExportFormat::Css => print!("{}", export::type_scale_stylesheet(&scale)),
            ExportFormat::Tailwind => {
                let module = export::type_scale_config(&scale)
                    .map_err(|e| CliError::io(format!("Failed to render Tailwind config: {e}")))?;
                print!("{module}");
            }
        }

        Ok(())
    }
}

fn print_text(scale: &TypeScale) {
    let options = &scale.options;
    println!(
        "Type scale: {}px base, ratio {} ({}), viewport {}px - {}px",
        options.base_size,
        options.ratio,
        options.ratio.value(),
        options.min_viewport,
        options.max_viewport
    );
    println!();
    println!(
        "  {:<8} {:>9} {:>9} {:>9}  clamp",
        "step", "min", "max", "rem"
    );
    for step in scale.iter() {
        println!(
            "  {:<8} {:>9} {:>9} {:>9}  {}",
            step.label(),
            step.min_size_label(),
            step.max_size_label(),
            step.rem_label(),
            step.clamp
        );
    }
}
