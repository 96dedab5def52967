//! Rules kept chiefly for their auto-fixers; organization over functionality

use lintset_core::{RuleEntry, Ruleset};
use serde_json::json;

pub(crate) fn ruleset() -> Ruleset {
    Ruleset::new("fixable")
        // problematic enough to be errors when left unfixed
        .with("curly", RuleEntry::error().with_options("ignore-same-line"))
        .with("linebreak-style", RuleEntry::error().with_options("LF"))
        .with(
            "trailing-comma",
            RuleEntry::error().with_options(json!({
                "multiline": "always",
                "singleline": "never",
                "esSpecCompliant": true,
            })),
        )
        .with("new-parens", RuleEntry::error())
        .with(
            "no-trailing-whitespace",
            RuleEntry::error().with_options("ignore-blank-lines"),
        )
        // organization
        .with(
            "ordered-imports",
            RuleEntry::warn().with_options(json!({
                "named-imports-order": "case-insensitive",
                "import-sources-order": "case-insensitive",
                "grouped-imports": true,
                "groups": [
                    {
                        "name": "library",
                        "match": "^[\\w-]+$",
                        "order": 0
                    },
                    {
                        "name": "project wide",
                        "match": "^src/",
                        "order": 1
                    },
                    {
                        "name": "relative imports",
                        "match": "\\.{1,2}/",
                        "order": 2
                    },
                    {
                        "name": "resources",
                        "match": "\\.(css|html|json)$",
                        "order": 3
                    }
                ],
            })),
        )
        .with(
            "object-literal-sort-keys",
            RuleEntry::warn().with_options("match-declaration-order-only"),
        )
        // whitespace and comments
        .with(
            "space-before-function-paren",
            RuleEntry::warn().with_options(json!({
                "anonymous": "never",
                "asyncArrow": "never",
                "method": "never",
                "named": "never",
            })),
        )
        .with("comment-format", RuleEntry::warn().with_options("check-space"))
        .with("eofline", RuleEntry::warn())
        .with("no-consecutive-blank-lines", RuleEntry::warn().with_options(5))
        .with(
            "typedef-whitespace",
            RuleEntry::warn().with_options(json!([
                {
                    "call-signature": "nospace",
                    "index-signature": "nospace",
                    "parameter": "nospace",
                    "property-declaration": "nospace",
                    "variable-declaration": "nospace"
                },
                {
                    "call-signature": "onespace",
                    "index-signature": "onespace",
                    "parameter": "onespace",
                    "property-declaration": "onespace",
                    "variable-declaration": "onespace"
                }
            ])),
        )
        .with(
            "whitespace",
            RuleEntry::warn().with_options(json!([
                "check-decl",
                "check-operator",
                "check-module",
                "check-separator",
                "check-rest-spread",
                "check-type",
                "check-typecast",
                "check-type-operator"
            ])),
        )
        // types
        .with("no-inferrable-types", RuleEntry::warn())
        .with("no-unnecessary-type-assertion", RuleEntry::warn())
        .with("callable-types", RuleEntry::warn())
        .with("interface-over-type-literal", RuleEntry::warn())
        // quotes and object literals
        .with("no-unnecessary-qualifier", RuleEntry::warn())
        .with("object-literal-shorthand", RuleEntry::warn())
        .with(
            "object-literal-key-quotes",
            RuleEntry::warn().with_options("always"),
        )
        .with(
            "quotemark",
            RuleEntry::warn().with_options(json!(["double", "jsx-double", "avoid-escape"])),
        )
        .with("prefer-template", RuleEntry::warn())
        // general
        .with("no-return-await", RuleEntry::warn())
        .with("arrow-return-shorthand", RuleEntry::warn())
        .with("no-unnecessary-callback-wrapper", RuleEntry::warn())
        .with("no-boolean-literal-compare", RuleEntry::warn())
        .with("number-literal-format", RuleEntry::warn())
        .with(
            "semicolon",
            RuleEntry::warn().with_options(json!(["always", "ignore-interfaces"])),
        )
}
