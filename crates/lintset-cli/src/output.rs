//! Output rendering for resolved presets

use clap::ValueEnum;
use lintset_core::{LintsetError, MergedConfig, MergedPreset, Result};

/// Serialization format for `show` and `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

/// Render a whole resolved preset
pub fn render_preset(preset: &MergedPreset, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(preset).map_err(render_error),
        OutputFormat::Toml => toml::to_string_pretty(preset).map_err(render_error),
    }
}

/// Render a single merged rule table
pub fn render_config(config: &MergedConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(config).map_err(render_error),
        OutputFormat::Toml => toml::to_string_pretty(config).map_err(render_error),
    }
}

/// Render rule options on one line for the detailed listing
pub fn render_options(options: &serde_json::Value) -> Result<String> {
    serde_json::to_string(options).map_err(render_error)
}

fn render_error(err: impl std::fmt::Display) -> LintsetError {
    LintsetError::Config {
        message: format!("Failed to render output: {err}"),
    }
}
