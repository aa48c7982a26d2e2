//! Tokensmith - design token generator
//!
//! Command-line front end for checking WCAG contrast, generating shade
//! palettes from a hue, and building fluid type scales.

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tokensmith::cli::{
    ChecklistArgs, CliResult, ConfigArgs, ContrastArgs, ExitCode, PaletteArgs, TouchArgs,
    TypeScaleArgs,
};
use tokensmith::config::Config;
use tokensmith::constants::APP_BINARY_NAME;

/// Tokensmith - accessible colors and fluid type scales for design tokens
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check WCAG contrast between two colors and suggest fixes
    Contrast(ContrastArgs),
    /// Check a touch target against the 44x44px minimum
    Touch(TouchArgs),
    /// Print the manual accessibility checklist
    Checklist(ChecklistArgs),
    /// Generate shade palettes from a base hue
    Palette(PaletteArgs),
    /// Generate a fluid clamp() type scale
    #[command(name = "typescale")]
    TypeScale(TypeScaleArgs),
    /// Show or change saved defaults
    Config(ConfigArgs),
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Loads saved defaults, falling back to built-ins if the file is unusable.
fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        warn!("Ignoring configuration: {e:#}");
        Config::default()
    })
}

fn run(command: &Commands) -> CliResult<()> {
    match command {
        Commands::Contrast(args) => args.execute(&load_config()),
        Commands::Touch(args) => args.execute(),
        Commands::Checklist(args) => args.execute(),
        Commands::Palette(args) => args.execute(&load_config()),
        Commands::TypeScale(args) => args.execute(&load_config()),
        Commands::Config(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli.command) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }

    std::process::exit(ExitCode::Success.code());
}
