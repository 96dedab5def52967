//! Lintset CLI
//!
//! Command-line interface for composing and inspecting lint rule presets

mod commands;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use lintset_core::Severity;
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "lintset")]
#[command(about = "Compose and inspect lint rule presets")]
#[command(version = lintset_core::VERSION)]
#[command(
    long_about = "Lintset folds thematic rulesets into one merged rule configuration.\n\
\n\
Examples:\n  \
lintset show                     # Print the resolved default preset\n  \
lintset rules --severity error   # List rules enforced as errors\n  \
lintset export rules.json        # Write the resolved preset to a file\n  \
lintset -c team.json show        # Resolve a preset file and its extends chain"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Preset file path (default: auto-discovered file, else the bundled preset)
    #[arg(short, long, global = true, help = "Path to a preset file (.json/.toml)")]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved preset
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Print the plain-JavaScript rule table instead of the main one
        #[arg(long)]
        js_rules: bool,
    },

    /// List resolved rules with their severities
    Rules {
        /// Only list rules at this severity
        #[arg(short, long, value_enum)]
        severity: Option<SeverityFilter>,

        /// Include rule options in the listing
        #[arg(long)]
        detailed: bool,
    },

    /// Write the resolved preset to a file for a downstream engine
    Export {
        /// Destination file
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

/// Severity filter accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SeverityFilter {
    Off,
    Warn,
    Error,
    Default,
    None,
}

impl From<SeverityFilter> for Severity {
    fn from(filter: SeverityFilter) -> Self {
        match filter {
            SeverityFilter::Off => Severity::Off,
            SeverityFilter::Warn => Severity::Warn,
            SeverityFilter::Error => Severity::Error,
            SeverityFilter::Default => Severity::Default,
            SeverityFilter::None => Severity::None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let directive = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    lintset_core::init_tracing_with(directive);

    match cli.command {
        Some(Commands::Show { format, js_rules }) => {
            commands::show_command(format, js_rules, cli.config)?;
        }
        Some(Commands::Rules { severity, detailed }) => {
            commands::rules_command(severity.map(Severity::from), detailed, cli.config)?;
        }
        Some(Commands::Export { output, format }) => {
            commands::export_command(&output, format, cli.config)?;
        }
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
        }
    }

    Ok(())
}
