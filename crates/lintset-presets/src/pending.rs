//! Rules awaiting triage or tooling improvements before adoption

use lintset_core::{RuleEntry, Ruleset, Severity};
use serde_json::json;

pub(crate) fn ruleset() -> Ruleset {
    Ruleset::new("pending")
        .with(
            "completed-docs",
            RuleEntry::error().with_options(json!({
                "classes": { "visibilities": "exported" },
                "functions": { "visibilities": "exported" },
                "enum-members": { "visibilities": "exported" },
                "enum": { "visibilities": "exported" },
                "interfaces": { "visibilities": "exported" },
            })),
        )
        .with("no-unbound-method", RuleEntry::off())
        .with("member-ordering", RuleEntry::off())
        .with("no-console", RuleEntry::error())
        // default exports/imports need a companion rule tying the imported
        // name to the file name before these can be enforced
        .with("no-default-export", RuleEntry::new(Severity::None))
        .with("no-default-import", RuleEntry::new(Severity::None))
        .with("match-default-export-name", RuleEntry::off())
        .with("type-literal-delimiter", RuleEntry::off())
        .with("import-spacing", RuleEntry::off())
        // left at the engine default until their effect is understood
        .with("unnecessary-bind", RuleEntry::new(Severity::Default))
        .with("no-inferred-empty-object-type", RuleEntry::new(Severity::Default))
        .with(
            "no-unnecessary-class",
            RuleEntry::new(Severity::Default).with_options(json!([])),
        )
        .with("strict-type-predicates", RuleEntry::new(Severity::Default))
        .with(
            "space-within-parens",
            RuleEntry::new(Severity::Default).with_options(json!([0])),
        )
        .with("no-irregular-whitespace", RuleEntry::new(Severity::Default))
}
