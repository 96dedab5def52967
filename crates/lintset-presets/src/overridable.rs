//! Rules that catch mistakes but also block legitimate patterns
//!
//! Disabling any of these per-site is acceptable; the disable comment itself
//! documents that the unusual construct is intentional.

use lintset_core::{RuleEntry, Ruleset, Severity};

pub(crate) fn ruleset() -> Ruleset {
    Ruleset::new("overridable")
        .with("no-sparse-arrays", RuleEntry::warn())
        .with("no-bitwise", RuleEntry::warn())
        .with("no-construct", RuleEntry::warn())
        .with("no-dynamic-delete", RuleEntry::warn())
        .with("no-invalid-template-strings", RuleEntry::warn())
        .with("prefer-object-spread", RuleEntry::error())
        .with("cyclomatic-complexity", RuleEntry::warn().with_options(16))
        .with("max-file-line-count", RuleEntry::warn().with_options(3000))
        // var is only for the narrow scoping cases let cannot express
        .with("no-var-keyword", RuleEntry::error())
        .with("no-duplicate-variable", RuleEntry::new(Severity::Default))
}
