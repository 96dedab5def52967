//! Preset composition
//!
//! A [`Preset`] is the aggregation surface: the rulesets it extends, external
//! engine plugins it expects, always-on top-level overrides, and a separate
//! table applied to plain-JavaScript sources. [`Preset::merged`] folds it
//! into an immutable [`MergedPreset`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::merge::{ExtensionList, MergedConfig, RulesetRegistry, merge};
use super::ruleset::RuleTable;
use crate::result::Result;

/// A composable preset: extension list plus local overrides
///
/// This is also the on-disk shape of a preset file; see
/// [`ConfigLoader`](super::ConfigLoader).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Preset {
    /// Ruleset names (or, in files, relative paths) applied in order;
    /// later entries win on key collision
    #[schemars(description = "Rulesets to extend, in precedence order")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: ExtensionList,

    /// External engine plugins this preset expects to be loaded
    ///
    /// Plugins name code, not rule tables, so they are carried through as
    /// metadata rather than resolved by the merge.
    #[schemars(description = "External engine plugins required by this preset")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// Always-on top-level rules, applied after everything in `extends`
    #[schemars(description = "Local rule overrides with highest precedence")]
    #[serde(skip_serializing_if = "RuleTable::is_empty")]
    #[schemars(with = "std::collections::BTreeMap<String, serde_json::Value>")]
    pub rules: RuleTable,

    /// Rules applied to plain-JavaScript sources, kept separate from `rules`
    #[schemars(description = "Rule overrides for plain-JavaScript sources")]
    #[serde(skip_serializing_if = "RuleTable::is_empty")]
    #[schemars(with = "std::collections::BTreeMap<String, serde_json::Value>")]
    pub js_rules: RuleTable,
}

impl Preset {
    /// Create an empty preset
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold this preset into a merged configuration
    ///
    /// The extension list is resolved against `registry` and folded in order,
    /// then `rules` is applied as the final override table. `js_rules` is an
    /// independent table and does not inherit the extension chain.
    pub fn merged(&self, registry: &RulesetRegistry) -> Result<MergedPreset> {
        const NO_EXTENDS: &[&str] = &[];

        Ok(MergedPreset {
            plugins: self.plugins.clone(),
            rules: merge(registry, &self.extends, Some(&self.rules))?,
            js_rules: merge(registry, NO_EXTENDS, Some(&self.js_rules))?,
        })
    }
}

/// A fully resolved preset, immutable after construction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPreset {
    /// External engine plugins carried through from the preset
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// The merged rule table
    pub rules: MergedConfig,

    /// The merged plain-JavaScript rule table
    #[serde(skip_serializing_if = "MergedConfig::is_empty")]
    pub js_rules: MergedConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RuleEntry, Ruleset, Severity};

    fn registry() -> RulesetRegistry {
        RulesetRegistry::new().with(
            Ruleset::new("base")
                .with("prefer-const", RuleEntry::warn())
                .with("no-eval", RuleEntry::error()),
        )
    }

    #[test]
    fn test_preset_merges_extends_then_rules() {
        let mut preset = Preset {
            extends: vec!["base".to_string()],
            ..Default::default()
        };
        preset
            .rules
            .insert("prefer-const".to_string(), RuleEntry::error());

        let merged = preset.merged(&registry()).unwrap();
        assert_eq!(merged.rules.get("prefer-const").unwrap().severity, Severity::Error);
        assert_eq!(merged.rules.get("no-eval").unwrap().severity, Severity::Error);
        assert!(merged.js_rules.is_empty());
    }

    #[test]
    fn test_js_rules_do_not_inherit_extends() {
        let mut preset = Preset {
            extends: vec!["base".to_string()],
            ..Default::default()
        };
        preset
            .js_rules
            .insert("object-literal-key-quotes".to_string(), RuleEntry::error());

        let merged = preset.merged(&registry()).unwrap();
        assert_eq!(merged.js_rules.len(), 1);
        assert!(!merged.js_rules.contains("prefer-const"));
    }

    #[test]
    fn test_preset_file_shape_deserializes() {
        let json = r#"{
            "extends": ["base"],
            "plugins": ["react-hooks"],
            "rules": { "react-hooks-nesting": "error" },
            "jsRules": { "object-literal-key-quotes": { "severity": "error", "options": "always" } }
        }"#;

        let preset: Preset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.extends, vec!["base"]);
        assert_eq!(preset.plugins, vec!["react-hooks"]);
        assert_eq!(
            preset.rules.get("react-hooks-nesting").unwrap().severity,
            Severity::Error
        );
        assert_eq!(
            preset.js_rules.get("object-literal-key-quotes").unwrap().options,
            Some(serde_json::json!("always"))
        );
    }

    #[test]
    fn test_empty_preset_merges_empty() {
        let merged = Preset::new().merged(&RulesetRegistry::new()).unwrap();
        assert!(merged.rules.is_empty());
        assert!(merged.js_rules.is_empty());
        assert!(merged.plugins.is_empty());
    }
}
