//! Ruleset resolution and merging
//!
//! This module folds an ordered extension list of named rulesets into one
//! merged table. Later rulesets win on key collision, and a local override
//! table applied last always wins. Entries are replaced wholesale; severity
//! and options are never merged field-by-field across rulesets.

use indexmap::IndexMap;
use serde::Serialize;

use super::ruleset::{RuleEntry, RuleTable, Ruleset};
use crate::error::LintsetError;
use crate::result::Result;

/// Ordered sequence of ruleset names; later entries override earlier ones
pub type ExtensionList = Vec<String>;

/// An explicit mapping from ruleset name to ruleset
///
/// Registries are plain values constructed by the caller. Resolution happens
/// against exactly what was registered; nothing is looked up globally.
#[derive(Debug, Clone, Default)]
pub struct RulesetRegistry {
    tables: IndexMap<String, Ruleset>,
}

impl RulesetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ruleset under its own name, replacing any previous one
    pub fn register(&mut self, ruleset: Ruleset) {
        self.tables.insert(ruleset.name().to_string(), ruleset);
    }

    /// Register a ruleset, builder style
    pub fn with(mut self, ruleset: Ruleset) -> Self {
        self.register(ruleset);
        self
    }

    /// Look up a ruleset by name
    pub fn get(&self, name: &str) -> Option<&Ruleset> {
        self.tables.get(name)
    }

    /// Resolve a ruleset by name, failing on unknown identifiers
    pub fn resolve(&self, name: &str) -> Result<&Ruleset> {
        self.tables
            .get(name)
            .ok_or_else(|| LintsetError::UnknownRuleset {
                name: name.to_string(),
            })
    }

    /// Names of all registered rulesets, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Number of registered rulesets
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// The result of folding an extension list: a single immutable rule table
///
/// Never mutated after construction, so it can be shared freely across
/// threads by consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MergedConfig {
    rules: RuleTable,
}

impl MergedConfig {
    /// Look up a rule entry by name
    pub fn get(&self, rule: &str) -> Option<&RuleEntry> {
        self.rules.get(rule)
    }

    /// Whether the merged configuration covers the given rule
    pub fn contains(&self, rule: &str) -> bool {
        self.rules.contains_key(rule)
    }

    /// Number of configured rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the configuration is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate entries in the order they first appeared during the fold
    pub fn iter(&self) -> impl Iterator<Item = (&String, &RuleEntry)> {
        self.rules.iter()
    }

    /// Borrow the underlying table
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Convert into a named ruleset, e.g. to re-register the merged result
    pub fn into_ruleset(self, name: impl Into<String>) -> Ruleset {
        Ruleset::from((name.into(), self.rules))
    }
}

impl From<RuleTable> for MergedConfig {
    fn from(rules: RuleTable) -> Self {
        Self { rules }
    }
}

/// Fold an extension list into a merged configuration
///
/// Rulesets are resolved by name against `registry` and applied in order,
/// overwriting whole entries on collision. The `overrides` table, when
/// present, is applied last with the same overwrite rule. Fails with
/// [`LintsetError::UnknownRuleset`] when a name does not resolve.
pub fn merge<S: AsRef<str>>(
    registry: &RulesetRegistry,
    extends: &[S],
    overrides: Option<&RuleTable>,
) -> Result<MergedConfig> {
    let mut rules = RuleTable::new();

    for name in extends {
        let ruleset = registry.resolve(name.as_ref())?;
        apply(&mut rules, ruleset.rules());
        tracing::debug!(
            ruleset = name.as_ref(),
            entries = ruleset.len(),
            "applied ruleset"
        );
    }

    if let Some(local) = overrides {
        apply(&mut rules, local);
    }

    Ok(MergedConfig { rules })
}

/// Overlay `source` onto `target`, replacing entries wholesale
pub(super) fn apply(target: &mut RuleTable, source: &RuleTable) {
    for (rule, entry) in source {
        target.insert(rule.clone(), entry.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Severity;
    use serde_json::json;

    const NO_EXTENDS: &[&str] = &[];

    fn registry() -> RulesetRegistry {
        RulesetRegistry::new()
            .with(Ruleset::new("a").with("x", RuleEntry::warn()))
            .with(
                Ruleset::new("b")
                    .with("x", RuleEntry::error())
                    .with("y", RuleEntry::off()),
            )
    }

    #[test]
    fn test_merge_contains_every_source_key() {
        let merged = merge(&registry(), &["a", "b"], None).unwrap();
        assert!(merged.contains("x"));
        assert!(merged.contains("y"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_last_writer_wins() {
        let merged = merge(&registry(), &["a", "b"], None).unwrap();
        assert_eq!(merged.get("x").unwrap().severity, Severity::Error);

        let merged = merge(&registry(), &["b", "a"], None).unwrap();
        assert_eq!(merged.get("x").unwrap().severity, Severity::Warn);
    }

    #[test]
    fn test_merge_overrides_have_highest_precedence() {
        let mut overrides = RuleTable::new();
        overrides.insert("y".to_string(), RuleEntry::warn());

        let merged = merge(&registry(), &["a", "b"], Some(&overrides)).unwrap();
        assert_eq!(merged.get("x").unwrap().severity, Severity::Error);
        assert_eq!(merged.get("y").unwrap().severity, Severity::Warn);
    }

    #[test]
    fn test_merge_empty_inputs_yield_empty_output() {
        let merged = merge(&RulesetRegistry::new(), NO_EXTENDS, None).unwrap();
        assert!(merged.is_empty());

        let merged = merge(&RulesetRegistry::new(), NO_EXTENDS, Some(&RuleTable::new())).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_merge_empty_extension_list_yields_overrides_only() {
        let mut overrides = RuleTable::new();
        overrides.insert("x".to_string(), RuleEntry::error());

        let merged = merge(&registry(), NO_EXTENDS, Some(&overrides)).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("x").unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let merged = merge(&registry(), &["a", "b"], None).unwrap();

        let remerge_registry =
            RulesetRegistry::new().with(merged.clone().into_ruleset("merged"));
        let remerged = merge(&remerge_registry, &["merged"], None).unwrap();

        assert_eq!(merged, remerged);
    }

    #[test]
    fn test_merge_replaces_entries_wholesale() {
        let registry = RulesetRegistry::new()
            .with(Ruleset::new("base").with(
                "max-line-length",
                RuleEntry::warn().with_options(json!({ "limit": 140 })),
            ))
            .with(Ruleset::new("override").with("max-line-length", RuleEntry::error()));

        let merged = merge(&registry, &["base", "override"], None).unwrap();
        let entry = merged.get("max-line-length").unwrap();
        assert_eq!(entry.severity, Severity::Error);
        // The earlier options must not leak into the replacing entry
        assert!(entry.options.is_none());
    }

    #[test]
    fn test_merge_unknown_ruleset_fails() {
        let err = merge(&registry(), &["a", "missing"], None).unwrap_err();
        assert!(matches!(
            err,
            LintsetError::UnknownRuleset { ref name } if name == "missing"
        ));
    }

    #[test]
    fn test_merge_empty_table_contributes_nothing() {
        let registry = registry().with(Ruleset::new("empty"));
        let merged = merge(&registry, &["a", "empty"], None).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("x").unwrap().severity, Severity::Warn);
    }

    #[test]
    fn test_merge_concrete_scenario() {
        // A={"x": warn}, B={"x": error, "y": off}, extends=[A, B],
        // override={"y": warn} -> {"x": error, "y": warn}
        let mut overrides = RuleTable::new();
        overrides.insert("y".to_string(), RuleEntry::warn());

        let merged = merge(&registry(), &["a", "b"], Some(&overrides)).unwrap();

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("x").unwrap().severity, Severity::Error);
        assert_eq!(merged.get("y").unwrap().severity, Severity::Warn);
    }
}
