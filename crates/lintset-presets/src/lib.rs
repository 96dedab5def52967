//! Built-in rule catalog for lintset
//!
//! The catalog groups the engine's rule set into six thematic rulesets and
//! composes them into the default preset. Severity expectations by ruleset:
//!
//! - [`STRICT`] — non-negotiable; fix the code rather than the rule
//! - [`RECOMMENDED`] — encouraged defaults, bypassable case-by-case
//! - [`FIXABLE`] — kept chiefly for their auto-fixers
//! - [`OVERRIDABLE`] — per-site disabling is expected
//! - [`PENDING`] — awaiting triage or tooling improvements
//! - [`DISABLED`] — intentionally off, or legacy-syntax only
//!
//! All construction functions return plain immutable values; callers hold
//! the registry and preset themselves, and nothing lives in process-wide
//! mutable state.

mod disabled;
mod fixable;
mod overridable;
mod pending;
mod recommended;
mod strict;

use lintset_core::{MergedPreset, Preset, Result, RuleEntry, Ruleset, RulesetRegistry};
use once_cell::sync::Lazy;

/// Registry name of the strict ruleset
pub const STRICT: &str = "strict";
/// Registry name of the recommended ruleset
pub const RECOMMENDED: &str = "recommended";
/// Registry name of the auto-fixable ruleset
pub const FIXABLE: &str = "fixable";
/// Registry name of the overridable ruleset
pub const OVERRIDABLE: &str = "overridable";
/// Registry name of the pending ruleset
pub const PENDING: &str = "pending";
/// Registry name of the disabled ruleset
pub const DISABLED: &str = "disabled";

/// Extension order of the default preset; later rulesets win on collision
pub const DEFAULT_EXTENDS: &[&str] = &[
    STRICT,
    RECOMMENDED,
    FIXABLE,
    OVERRIDABLE,
    PENDING,
    DISABLED,
];

static CATALOG: Lazy<Vec<Ruleset>> = Lazy::new(|| {
    vec![
        strict::ruleset(),
        recommended::ruleset(),
        fixable::ruleset(),
        overridable::ruleset(),
        pending::ruleset(),
        disabled::ruleset(),
    ]
});

/// Build a registry holding the six built-in rulesets
pub fn builtin_registry() -> RulesetRegistry {
    let mut registry = RulesetRegistry::new();
    for ruleset in CATALOG.iter() {
        registry.register(ruleset.clone());
    }
    registry
}

/// The default preset: the full catalog plus the always-on top-level rules
///
/// `react-hooks-nesting` comes from the react-hooks engine plugin, which is
/// carried in `plugins`; the plain-JavaScript table only pins key quoting.
pub fn default_preset() -> Preset {
    let mut preset = Preset::new();
    preset.extends = DEFAULT_EXTENDS.iter().map(|s| s.to_string()).collect();
    preset.plugins = vec!["react-hooks".to_string()];
    preset
        .rules
        .insert("react-hooks-nesting".to_string(), RuleEntry::error());
    preset.js_rules.insert(
        "object-literal-key-quotes".to_string(),
        RuleEntry::error().with_options("always"),
    );
    preset
}

/// Resolve the default preset against the built-in registry
pub fn default_merged() -> Result<MergedPreset> {
    default_preset().merged(&builtin_registry())
}
