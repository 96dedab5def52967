//! Rules intentionally off, or only relevant to legacy syntax
//!
//! Every catalog rule lives in one of the thematic rulesets; this one holds
//! the remainder so coverage of the engine's rule set stays complete.

use lintset_core::{RuleEntry, Ruleset, Severity};

pub(crate) fn ruleset() -> Ruleset {
    Ruleset::new("disabled")
        // rules we disagree with
        .with("no-unnecessary-initializer", RuleEntry::off())
        .with("ban-ts-ignore", RuleEntry::off())
        .with("no-any", RuleEntry::off())
        .with("no-non-null-assertion", RuleEntry::off())
        .with("only-arrow-functions", RuleEntry::off())
        .with("label-position", RuleEntry::off())
        .with("no-null-keyword", RuleEntry::off())
        .with("no-unsafe-any", RuleEntry::off())
        .with("restrict-plus-operands", RuleEntry::off())
        .with("static-this", RuleEntry::off())
        .with("unnecessary-constructor", RuleEntry::off())
        .with("use-default-type-parameter", RuleEntry::off())
        .with("max-classes-per-file", RuleEntry::off())
        .with("array-type", RuleEntry::off().with_options("array-simple"))
        .with("binary-expression-operand-order", RuleEntry::off())
        .with("interface-name", RuleEntry::off())
        .with("newline-per-chained-call", RuleEntry::off())
        .with("no-redundant-jsdoc", RuleEntry::off())
        .with("one-line", RuleEntry::off())
        .with("prefer-function-over-method", RuleEntry::off())
        .with("prefer-method-signature", RuleEntry::off())
        .with("prefer-switch", RuleEntry::off())
        .with("unnecessary-else", RuleEntry::off())
        .with("align", RuleEntry::off())
        .with("arrow-parens", RuleEntry::off())
        .with("newline-before-return", RuleEntry::off())
        // not applicable alongside the libraries in use
        .with("no-null-undefined-union", RuleEntry::off())
        .with("no-misused-new", RuleEntry::off())
        .with("ban-types", RuleEntry::off())
        .with("no-invalid-this", RuleEntry::off())
        .with("import-blacklist", RuleEntry::off())
        .with("no-submodule-imports", RuleEntry::off())
        .with("typeof-compare", RuleEntry::new(Severity::None))
        // legacy import mechanics stay blocked
        .with("no-internal-module", RuleEntry::error())
        .with(
            "no-namespace",
            RuleEntry::error().with_options("allow-declarations"),
        )
        .with("no-reference", RuleEntry::error())
        .with("no-var-requires", RuleEntry::error())
        .with("no-require-imports", RuleEntry::error())
        .with("no-reference-import", RuleEntry::new(Severity::Default))
        // would only be worth enabling with an auto-fixer
        .with("jsdoc-format", RuleEntry::off())
        .with("prefer-conditional-expression", RuleEntry::off())
        .with("typedef", RuleEntry::off())
}
