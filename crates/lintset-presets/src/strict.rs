//! Rules that guard basic project sanity; fix the code, not the rule

use lintset_core::{RuleEntry, Ruleset, Severity};
use serde_json::json;

pub(crate) fn ruleset() -> Ruleset {
    Ruleset::new("strict")
        // basic sanity
        .with("no-duplicate-super", RuleEntry::error())
        .with("function-constructor", RuleEntry::error().with_options(json!([])))
        .with("no-arg", RuleEntry::error())
        .with(
            "no-restricted-globals",
            RuleEntry::error().with_options(json!(["name", "length"])),
        )
        .with("encoding", RuleEntry::error())
        .with("no-angle-bracket-type-assertion", RuleEntry::error())
        // methods and declarations
        .with("adjacent-overload-signatures", RuleEntry::error())
        .with(
            // constructors stay implicitly public, so no "check-constructor"
            "member-access",
            RuleEntry::error().with_options(json!(["check-accessor", "check-parameter-property"])),
        )
        // promises
        .with("promise-function-async", RuleEntry::warn())
        .with("no-async-without-await", RuleEntry::warn())
        .with("await-promise", RuleEntry::error())
        .with("no-floating-promises", RuleEntry::warn())
        // switch statements
        .with("no-duplicate-switch-case", RuleEntry::error())
        .with("no-switch-case-fall-through", RuleEntry::error())
        .with("switch-default", RuleEntry::error())
        .with("switch-final-break", RuleEntry::warn())
        // loops
        .with("prefer-for-of", RuleEntry::error())
        .with("no-for-in-array", RuleEntry::error())
        .with("prefer-while", RuleEntry::new(Severity::Default))
        // comparisons
        .with(
            "triple-equals",
            RuleEntry::error().with_options("allow-null-check"),
        )
        .with(
            "strict-comparisons",
            RuleEntry::error().with_options(json!({
                "allow-object-equal-comparison": true,
                "allow-string-order-comparison": true,
            })),
        )
        .with("use-isnan", RuleEntry::error())
        .with("no-tautology-expression", RuleEntry::error())
        // formatting that affects meaning
        .with("indent", RuleEntry::error().with_options(json!(["spaces", 4])))
        .with("no-mergeable-namespace", RuleEntry::error())
        .with("no-parameter-properties", RuleEntry::error())
        .with(
            "one-variable-per-declaration",
            RuleEntry::error().with_options("ignore-for-loop"),
        )
        // general
        .with("no-unsafe-finally", RuleEntry::error())
        .with("ban-comma-operator", RuleEntry::error())
        .with("radix", RuleEntry::error())
        .with("no-string-throw", RuleEntry::error())
}
