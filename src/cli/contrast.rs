//! Contrast check command.

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::export::round_to;
use crate::models::{AccessibleSuggestion, ContrastResult, RgbColor, WcagLevel};
use crate::services::accessibility::{suggest_accessible_alternatives, MAX_ADJUSTMENT_STEPS};
use crate::services::contrast::evaluate_all_levels;

/// Check the contrast of a foreground/background pair
#[derive(Args, Debug)]
pub struct ContrastArgs {
    /// Foreground (text) color, e.g. #767676
    #[arg(value_name = "FOREGROUND")]
    foreground: String,

    /// Background color, e.g. #ffffff
    #[arg(value_name = "BACKGROUND")]
    background: String,

    /// Evaluate as large text (18pt, or 14pt bold)
    #[arg(long)]
    large: bool,

    /// WCAG level that decides the exit code (aa or aaa)
    #[arg(long, value_name = "LEVEL")]
    level: Option<WcagLevel>,

    /// Ratio suggestions must reach (defaults to the level's requirement)
    #[arg(long, value_name = "RATIO")]
    target: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct LevelOutput {
    level: WcagLevel,
    required_ratio: f64,
    passes: bool,
}

impl From<&ContrastResult> for LevelOutput {
    fn from(result: &ContrastResult) -> Self {
        Self {
            level: result.level,
            required_ratio: result.required_ratio,
            passes: result.passes,
        }
    }
}

#[derive(Serialize, Debug)]
struct SuggestionOutput {
    color: String,
    ratio: f64,
    direction: String,
}

impl From<&AccessibleSuggestion> for SuggestionOutput {
    fn from(suggestion: &AccessibleSuggestion) -> Self {
        Self {
            color: suggestion.color.to_hex(),
            ratio: round_to(suggestion.ratio, 2),
            direction: suggestion.direction.to_string(),
        }
    }
}

#[derive(Serialize, Debug)]
struct ContrastOutput {
    foreground: String,
    background: String,
    ratio: f64,
    is_large_text: bool,
    level: WcagLevel,
    passes: bool,
    results: Vec<LevelOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_ratio: Option<f64>,
    suggestions: Vec<SuggestionOutput>,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let level = self.level.unwrap_or(config.contrast.level);
        let target = self
            .target
            .unwrap_or_else(|| config.contrast.target_for(level, self.large));
        if !target.is_finite() || !(1.0..=21.0).contains(&target) {
            return Err(CliError::validation(format!(
                "Invalid target ratio {target}: must be between 1 and 21"
            )));
        }

        // The hex parser rejects surrounding whitespace, so trim shell arguments here.
        let foreground = RgbColor::from_hex(self.foreground.trim())?.to_hex();
        let background = RgbColor::from_hex(self.background.trim())?.to_hex();

        let results = evaluate_all_levels(&foreground, &background, self.large)?;
        let selected = results
            .iter()
            .find(|r| r.level == level)
            .ok_or_else(|| CliError::validation(format!("No result for WCAG {level}")))?;

        let suggestions = if selected.passes {
            Vec::new()
        } else {
            suggest_accessible_alternatives(&foreground, &background, target)?
        };

        info!(
            %foreground,
            %background,
            %level,
            passes = selected.passes,
            suggestions = suggestions.len(),
            "contrast check"
        );

        if self.json {
            let output = ContrastOutput {
                foreground,
                background,
                ratio: round_to(selected.ratio, 2),
                is_large_text: self.large,
                level,
                passes: selected.passes,
                results: results.iter().map(LevelOutput::from).collect(),
                target_ratio: (!selected.passes).then_some(target),
                suggestions: suggestions.iter().map(SuggestionOutput::from).collect(),
            };
            print_json(&output)?;
        } else {
            print_report(
                &foreground,
                &background,
                self.large,
                &results,
                selected.passes,
                target,
                &suggestions,
            );
        }

        if selected.passes {
            Ok(())
        } else {
            Err(CliError::validation(format!(
                "Contrast does not meet WCAG {level}"
            )))
        }
    }
}

fn print_report(
    foreground: &str,
    background: &str,
    large: bool,
    results: &[ContrastResult],
    passes: bool,
    target: f64,
    suggestions: &[AccessibleSuggestion],
) {
    println!("Foreground: {foreground}");
    println!("Background: {background}");
    if let Some(first) = results.first() {
        println!("Contrast ratio: {:.2}:1", first.ratio);
    }
    println!("Text size: {}", if large { "large" } else { "normal" });
    println!();

    for result in results {
        println!("{}", result.message());
    }

    if passes {
        return;
    }

    println!();
    if suggestions.is_empty() {
        println!("No alternative within {MAX_ADJUSTMENT_STEPS} steps reaches {target:.2}:1");
    } else {
        println!("Suggested alternatives (target {target:.2}:1):");
        for suggestion in suggestions {
            println!(
                "  {:<7} {} ({:.2}:1)",
                suggestion.direction.to_string(),
                suggestion.color,
                suggestion.ratio
            );
        }
    }
}
