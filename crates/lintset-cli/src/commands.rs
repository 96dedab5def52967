//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use lintset_core::{ConfigLoader, LintsetError, MergedPreset, Result, Severity};
use lintset_presets::{builtin_registry, default_preset};
use tracing::{debug, info};

use crate::output::{self, OutputFormat};

/// Show command: print the resolved preset
pub fn show_command(format: OutputFormat, js_rules: bool, config_path: Option<PathBuf>) -> Result<()> {
    let preset = load_preset(config_path)?;

    let rendered = if js_rules {
        output::render_config(&preset.js_rules, format)?
    } else {
        output::render_preset(&preset, format)?
    };
    println!("{rendered}");

    Ok(())
}

/// Rules command: list resolved rules with their severities
pub fn rules_command(
    severity: Option<Severity>,
    detailed: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let preset = load_preset(config_path)?;

    println!("Resolved rules:");
    println!("===============");

    let mut count = 0;
    for (name, entry) in preset.rules.iter() {
        if let Some(filter) = severity
            && entry.severity != filter
        {
            continue;
        }
        count += 1;

        if detailed {
            println!("\n{name}");
            println!("  Severity: {}", entry.severity);
            if let Some(options) = &entry.options {
                println!("  Options: {}", output::render_options(options)?);
            }
        } else {
            println!("{:>7}  {name}", entry.severity.as_str());
        }
    }

    println!("\n{count} rules");
    Ok(())
}

/// Export command: write the resolved preset to a file
pub fn export_command(
    output_path: &Path,
    format: OutputFormat,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let preset = load_preset(config_path)?;
    let rendered = output::render_preset(&preset, format)?;

    fs::write(output_path, rendered).map_err(|e| LintsetError::Io {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    info!("Wrote resolved preset to {}", output_path.display());
    Ok(())
}

/// Resolve the preset to operate on
///
/// An explicit `--config` path wins; otherwise a preset file discovered from
/// the current directory; otherwise the bundled default preset.
fn load_preset(config_path: Option<PathBuf>) -> Result<MergedPreset> {
    let registry = builtin_registry();

    if let Some(path) = config_path {
        debug!("Resolving preset file {}", path.display());
        return ConfigLoader::resolve(&path, &registry);
    }

    if let Some(discovered) = ConfigLoader::auto_discover(Path::new("."))? {
        debug!("Resolving discovered preset file {}", discovered.display());
        return ConfigLoader::resolve(&discovered, &registry);
    }

    default_preset().merged(&registry)
}
