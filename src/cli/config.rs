//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{Ratio, WcagLevel};
use clap::{Args, Subcommand};
use serde::Serialize;
use tracing::info;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default palette hue in degrees
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    hue: Option<f64>,

    /// Default type scale ratio (preset name or number)
    #[arg(long, value_name = "RATIO")]
    ratio: Option<Ratio>,

    /// Default base font size in px
    #[arg(long, value_name = "PX")]
    base: Option<f64>,

    /// Default WCAG level for contrast checks (aa or aaa)
    #[arg(long, value_name = "LEVEL")]
    level: Option<WcagLevel>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    exists: bool,
    #[serde(flatten)]
    config: &'a Config,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
        let exists = Config::exists();

        if self.json {
            print_json(&ConfigOutput {
                path: path.display().to_string(),
                exists,
                config: &config,
            })?;
        } else {
            output_human_readable(&config, &path.display().to_string(), exists);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.hue.is_none() && self.ratio.is_none() && self.base.is_none() && self.level.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --hue, --ratio, --base, or --level",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(hue) = self.hue {
            if !hue.is_finite() {
                return Err(CliError::validation("Hue must be a finite number"));
            }
            config.palette.base_hue = hue.rem_euclid(360.0);
        }
        if let Some(ratio) = self.ratio {
            config.typography.ratio = ratio;
        }
        if let Some(base) = self.base {
            config.typography.base_size = base;
        }
        if let Some(level) = self.level {
            config.contrast.level = level;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        info!("configuration saved");
        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &str, exists: bool) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();
    println!(
        "File: {path}{}",
        if exists { "" } else { " (not created, using defaults)" }
    );
    println!();

    println!("Palette:");
    println!("  Base Hue: {}°", config.palette.base_hue);
    println!();

    let typography = &config.typography;
    println!("Typography:");
    println!("  Base Size: {}px", typography.base_size);
    println!("  Ratio: {} ({})", typography.ratio, typography.ratio.value());
    println!(
        "  Viewport: {}px - {}px",
        typography.min_viewport, typography.max_viewport
    );
    let steps: Vec<String> = typography.steps.iter().map(ToString::to_string).collect();
    println!("  Steps: {}", steps.join(", "));
    println!();

    println!("Contrast:");
    println!("  Level: {}", config.contrast.level);
    match config.contrast.target_ratio {
        Some(target) => println!("  Target Ratio: {target}:1"),
        None => println!("  Target Ratio: (level default)"),
    }
    println!();
}
