mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::estimate::EstimateArgs;
use commands::format::FormatArgs;
use commands::render::RenderArgs;
use commands::sanitize::SanitizeArgs;
use commands::session::SessionArgs;

/// Revenue lost to unsuccessful site search
#[derive(Parser)]
#[command(
    name = "slc",
    version,
    about = "Estimate revenue lost to unsuccessful e-commerce site search",
    long_about = "Estimates the monthly and annual revenue an online store loses when \
                  site searches return no usable results, and renders the figures in \
                  Brazilian (domestic) or US (international) formatting."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Calculator configuration file (.json, .yaml or .yml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate monthly and annual lost revenue
    Estimate(EstimateArgs),
    /// Render every display string of the calculator form
    Render(RenderArgs),
    /// Format an amount for a locale
    Format(FormatArgs),
    /// Show how raw field text is sanitized
    Sanitize(SanitizeArgs),
    /// Drive an interactive session from stdin, one event per line
    Session(SessionArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match input::file::read_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Estimate(args) => commands::estimate::run_estimate(args, config),
        Commands::Render(args) => commands::render::run_render(args, config),
        Commands::Format(args) => commands::format::run_format(args),
        Commands::Sanitize(args) => commands::sanitize::run_sanitize(args, config),
        Commands::Session(args) => commands::session::run_session(args, config, cli.output),
        Commands::Version => {
            println!("slc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            // the session command prints as it goes
            if !value.is_null() {
                output::format_output(&cli.output, &value);
            }
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
