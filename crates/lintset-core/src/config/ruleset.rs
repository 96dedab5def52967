//! Rule entry and ruleset types
//!
//! A [`RuleEntry`] pairs an enforcement [`Severity`] with opaque rule-specific
//! options. A [`Ruleset`] is a named, insertion-ordered table of entries.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Insertion-ordered mapping from rule name to its configuration
pub type RuleTable = IndexMap<String, RuleEntry>;

/// Enforcement level for a rule
///
/// This is a closed enumeration. `Default` defers to the execution engine's
/// built-in level for the rule; `None` marks an entry as explicitly unset.
/// Neither is collapsed into `Off` here: how they differ is the engine's
/// contract, not this crate's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Disable the rule
    Off,
    /// Report without failing the run
    #[serde(alias = "warning")]
    Warn,
    /// Report and fail the run
    Error,
    /// Defer to the engine's built-in level for this rule
    Default,
    /// Explicitly unset
    None,
}

impl Severity {
    /// The lowercase name used in serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Default => "default",
            Severity::None => "none",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for a single rule
///
/// Options are treated as an opaque value; their shape is rule-specific and
/// validated, if at all, by the consuming rule-execution engine.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleEntry {
    /// Enforcement level for this rule
    #[schemars(description = "Enforcement level for this rule")]
    pub severity: Severity,

    /// Rule-specific options
    #[schemars(description = "Opaque options passed through to the rule")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

/// Accepted serialized shapes for a rule entry: a bare bool (enable at the
/// engine default), a bare severity string, or the full form.
#[derive(Deserialize)]
#[serde(untagged)]
enum RuleEntryRepr {
    Enabled(bool),
    Severity(Severity),
    Full {
        severity: Severity,
        #[serde(default)]
        options: Option<serde_json::Value>,
    },
}

impl From<RuleEntryRepr> for RuleEntry {
    fn from(repr: RuleEntryRepr) -> Self {
        match repr {
            RuleEntryRepr::Enabled(true) => RuleEntry::new(Severity::Default),
            RuleEntryRepr::Enabled(false) => RuleEntry::new(Severity::Off),
            RuleEntryRepr::Severity(severity) => RuleEntry::new(severity),
            RuleEntryRepr::Full { severity, options } => RuleEntry { severity, options },
        }
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RuleEntryRepr::deserialize(deserializer).map(RuleEntry::from)
    }
}

impl RuleEntry {
    /// Create an entry with the given severity and no options
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: None,
        }
    }

    /// Entry at `error` severity
    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    /// Entry at `warn` severity
    pub fn warn() -> Self {
        Self::new(Severity::Warn)
    }

    /// Entry at `off` severity
    pub fn off() -> Self {
        Self::new(Severity::Off)
    }

    /// Attach rule-specific options
    pub fn with_options(mut self, options: impl Into<serde_json::Value>) -> Self {
        self.options = Some(options.into());
        self
    }
}

/// A named collection of rule configurations
///
/// Rule names are unique within a ruleset; inserting an existing name
/// replaces the whole entry. Iteration follows insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ruleset {
    name: String,
    rules: RuleTable,
}

impl Ruleset {
    /// Create an empty ruleset with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: RuleTable::new(),
        }
    }

    /// The registry name of this ruleset
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add or replace a rule entry, builder style
    pub fn with(mut self, rule: impl Into<String>, entry: RuleEntry) -> Self {
        self.rules.insert(rule.into(), entry);
        self
    }

    /// Add or replace a rule entry, returning the previous one if any
    pub fn insert(&mut self, rule: impl Into<String>, entry: RuleEntry) -> Option<RuleEntry> {
        self.rules.insert(rule.into(), entry)
    }

    /// Look up a rule entry by name
    pub fn get(&self, rule: &str) -> Option<&RuleEntry> {
        self.rules.get(rule)
    }

    /// Whether the ruleset configures the given rule
    pub fn contains(&self, rule: &str) -> bool {
        self.rules.contains_key(rule)
    }

    /// Number of configured rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the ruleset is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &RuleEntry)> {
        self.rules.iter()
    }

    /// Borrow the underlying table
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Consume the ruleset, keeping only the table
    pub fn into_rules(self) -> RuleTable {
        self.rules
    }
}

impl From<(String, RuleTable)> for Ruleset {
    fn from((name, rules): (String, RuleTable)) -> Self {
        Self { name, rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&Severity::Error).unwrap();
        assert_eq!(json, r#""error""#);

        let json = serde_json::to_string(&Severity::Off).unwrap();
        assert_eq!(json, r#""off""#);

        let json = serde_json::to_string(&Severity::None).unwrap();
        assert_eq!(json, r#""none""#);
    }

    #[test]
    fn test_severity_warning_alias() {
        let severity: Severity = serde_json::from_str(r#""warning""#).unwrap();
        assert_eq!(severity, Severity::Warn);

        let severity: Severity = serde_json::from_str(r#""warn""#).unwrap();
        assert_eq!(severity, Severity::Warn);
    }

    #[test]
    fn test_entry_from_full_form() {
        let entry: RuleEntry =
            serde_json::from_str(r#"{"severity": "error", "options": ["name", "length"]}"#)
                .unwrap();
        assert_eq!(entry.severity, Severity::Error);
        assert_eq!(entry.options, Some(json!(["name", "length"])));
    }

    #[test]
    fn test_entry_from_severity_shorthand() {
        let entry: RuleEntry = serde_json::from_str(r#""warn""#).unwrap();
        assert_eq!(entry.severity, Severity::Warn);
        assert!(entry.options.is_none());
    }

    #[test]
    fn test_entry_from_bool_shorthand() {
        let entry: RuleEntry = serde_json::from_str("true").unwrap();
        assert_eq!(entry.severity, Severity::Default);

        let entry: RuleEntry = serde_json::from_str("false").unwrap();
        assert_eq!(entry.severity, Severity::Off);
    }

    #[test]
    fn test_entry_serialization_skips_missing_options() {
        let json = serde_json::to_string(&RuleEntry::error()).unwrap();
        assert_eq!(json, r#"{"severity":"error"}"#);
    }

    #[test]
    fn test_ruleset_insert_replaces_whole_entry() {
        let mut ruleset = Ruleset::new("test").with(
            "max-line-length",
            RuleEntry::warn().with_options(json!({ "limit": 140 })),
        );

        ruleset.insert("max-line-length", RuleEntry::error());

        let entry = ruleset.get("max-line-length").unwrap();
        assert_eq!(entry.severity, Severity::Error);
        // No field-level merging: the old options are gone
        assert!(entry.options.is_none());
    }

    #[test]
    fn test_ruleset_preserves_insertion_order() {
        let ruleset = Ruleset::new("test")
            .with("b-rule", RuleEntry::warn())
            .with("a-rule", RuleEntry::error());

        let names: Vec<&str> = ruleset.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["b-rule", "a-rule"]);
    }
}
