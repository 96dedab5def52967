//! Encouraged defaults; bypassing case-by-case with a justifying comment is fine

use lintset_core::{RuleEntry, Ruleset};
use serde_json::json;

pub(crate) fn ruleset() -> Ruleset {
    Ruleset::new("recommended")
        // ban carries the message text, so it replaces the dedicated rules below
        .with(
            "ban",
            RuleEntry::warn().with_options(json!([
                {
                    "name": ["*", "forEach"],
                    "message": "Use a regular for loop instead."
                },
                {
                    "name": ["eval"],
                    "message": "don't use eval, see alternatives here https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/eval#Do_not_ever_use_eval!"
                },
                {
                    "name": ["name"],
                    "message": "global variable 'name' is almost certainly not what you meant to use."
                },
                {
                    "name": ["length"],
                    "message": "global variable 'length' is almost certainly not what you meant to use."
                },
                {
                    "name": ["console"],
                    "message": "use utils.console instead."
                }
            ])),
        )
        .with("no-eval", RuleEntry::off())
        // cleanup pointers during development
        .with("no-empty", RuleEntry::warn())
        .with("no-empty-interface", RuleEntry::off())
        .with(
            "no-magic-numbers",
            RuleEntry::warn().with_options(json!([-3, -2, -1, 0, 1, 2, 3, 4, 5])),
        )
        .with("no-debugger", RuleEntry::warn())
        .with("no-shadowed-variable", RuleEntry::warn())
        .with("no-unused-expression", RuleEntry::warn())
        .with(
            "no-void-expression",
            RuleEntry::warn().with_options("ignore-arrow-function-shorthand"),
        )
        .with("no-duplicate-imports", RuleEntry::warn())
        .with(
            "prefer-const",
            RuleEntry::warn().with_options(json!({ "destructuring": "all" })),
        )
        .with(
            "prefer-readonly",
            RuleEntry::warn().with_options("only-inline-lambdas"),
        )
        // general
        .with(
            "no-implicit-dependencies",
            RuleEntry::warn().with_options(json!({ "ignore": "src" })),
        )
        .with(
            "no-import-side-effect",
            RuleEntry::warn().with_options(json!({ "ignore-module": "(\\.css)$" })),
        )
        .with("no-parameter-reassignment", RuleEntry::warn())
        .with("forin", RuleEntry::warn())
        .with("no-conditional-assignment", RuleEntry::warn())
        .with("no-object-literal-type-assertion", RuleEntry::warn())
        .with("no-string-literal", RuleEntry::warn())
        .with("deprecation", RuleEntry::warn())
        // no auto-fixer yet, so warn rather than error
        .with("unified-signatures", RuleEntry::warn())
        .with(
            // ignore-rhs is required to keep JSX `loaded && <div/>` guards working
            "strict-boolean-expressions",
            RuleEntry::warn().with_options(json!(["allow-boolean-or-undefined", "ignore-rhs"])),
        )
        .with("no-this-assignment", RuleEntry::warn())
        .with(
            "comment-type",
            RuleEntry::warn().with_options(json!(["doc", "singleline", "directive"])),
        )
        .with("increment-decrement", RuleEntry::error().with_options(json!([])))
        .with("class-name", RuleEntry::warn())
        .with("return-undefined", RuleEntry::warn())
        .with(
            "variable-name",
            RuleEntry::warn().with_options(json!([
                "ban-keywords",
                "check-format",
                "require-const-for-all-caps",
                "allow-leading-underscore",
                "allow-pascal-case"
            ])),
        )
        .with(
            "max-line-length",
            RuleEntry::warn().with_options(json!({
                "limit": 140,
                "ignore-pattern": "//",
            })),
        )
}
