//! Preset file discovery, loading, and extends resolution

use std::fs;
use std::path::{Path, PathBuf};

use super::merge::apply;
use super::preset::{MergedPreset, Preset};
use super::ruleset::RuleTable;
use super::RulesetRegistry;
use crate::error::LintsetError;
use crate::result::Result;

/// File names probed during auto-discovery, in priority order
const CONFIG_FILE_NAMES: &[&str] = &[
    ".lintsetrc.json",
    ".lintsetrc.toml",
    "lintset.json",
    "lintset.toml",
];

/// Loader for preset files on disk
///
/// Supports JSON and TOML preset files whose `extends` entries are either
/// registered ruleset names or relative paths to further preset files.
pub struct ConfigLoader;

/// Tables accumulated while resolving one file and everything it extends
#[derive(Default)]
struct ResolvedTables {
    plugins: Vec<String>,
    rules: RuleTable,
    js_rules: RuleTable,
}

impl ConfigLoader {
    /// Auto-discover a preset file by traversing upward from `start_path`
    ///
    /// Probes `.lintsetrc.json`, `.lintsetrc.toml`, `lintset.json`, and
    /// `lintset.toml` in each directory, moving up until a file is found or
    /// the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| LintsetError::config(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found preset file: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Load a single preset file without resolving its `extends`
    ///
    /// The format is chosen by file extension: `.json` or `.toml`.
    pub fn load_from_file(path: &Path) -> Result<Preset> {
        let content = fs::read_to_string(path).map_err(|e| LintsetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let ext = path.extension().and_then(|e| e.to_str());
        match ext {
            Some("json") => serde_json::from_str(&content).map_err(|e| LintsetError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Some("toml") => toml::from_str(&content).map_err(|e| LintsetError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            _ => Err(LintsetError::config(format!(
                "Unsupported preset file extension for '{}' (expected .json or .toml)",
                path.display()
            ))),
        }
    }

    /// Load a preset file and resolve its whole `extends` chain
    ///
    /// Path-like entries (`./x.json`, `../shared/base.toml`, anything with a
    /// separator or a known extension) are loaded relative to the referencing
    /// file and resolved recursively; all other entries must resolve in
    /// `registry`. Cycles across files fail with the offending chain.
    pub fn resolve(path: &Path, registry: &RulesetRegistry) -> Result<MergedPreset> {
        let mut stack = Vec::new();
        let resolved = Self::resolve_file(path, registry, &mut stack)?;

        Ok(MergedPreset {
            plugins: resolved.plugins,
            rules: resolved.rules.into(),
            js_rules: resolved.js_rules.into(),
        })
    }

    fn resolve_file(
        path: &Path,
        registry: &RulesetRegistry,
        stack: &mut Vec<PathBuf>,
    ) -> Result<ResolvedTables> {
        let canonical = path.canonicalize().map_err(|e| LintsetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if stack.contains(&canonical) {
            let chain = stack
                .iter()
                .chain(std::iter::once(&canonical))
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(LintsetError::CircularExtends { chain });
        }
        stack.push(canonical);

        let preset = Self::load_from_file(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

        let mut out = ResolvedTables::default();
        for reference in &preset.extends {
            if Self::is_path_reference(reference) {
                let child = Self::resolve_file(&base_dir.join(reference), registry, stack)?;
                extend_unique(&mut out.plugins, &child.plugins);
                apply(&mut out.rules, &child.rules);
                apply(&mut out.js_rules, &child.js_rules);
            } else {
                let ruleset = registry.resolve(reference)?;
                apply(&mut out.rules, ruleset.rules());
            }
        }

        // The file's own tables are the final overrides for its chain
        extend_unique(&mut out.plugins, &preset.plugins);
        apply(&mut out.rules, &preset.rules);
        apply(&mut out.js_rules, &preset.js_rules);

        stack.pop();
        Ok(out)
    }

    /// Whether an `extends` entry names a file rather than a registered ruleset
    fn is_path_reference(reference: &str) -> bool {
        reference.starts_with("./")
            || reference.starts_with("../")
            || reference.contains('/')
            || reference.ends_with(".json")
            || reference.ends_with(".toml")
    }
}

/// Append entries from `source` that `target` does not already carry
fn extend_unique(target: &mut Vec<String>, source: &[String]) {
    for item in source {
        if !target.contains(item) {
            target.push(item.clone());
        }
    }
}
