//! Configuration model and composition for lintset
//!
//! This module provides the rule-configuration data model and the composition
//! engine that folds rulesets into one merged configuration:
//! - Rule entries: a severity level plus opaque, rule-specific options
//! - Named rulesets: insertion-ordered tables of rule entries
//! - Extension/inheritance: an ordered `extends` list where later rulesets
//!   override earlier ones wholesale on key collision
//! - JSON/TOML preset file support with auto-discovery by traversing up
//!   directories
//!
//! ## Composition
//!
//! Rulesets are resolved by name against an explicit [`RulesetRegistry`] value
//! (there is no process-wide registry) and folded left-to-right by [`merge`].
//! A local override table, applied last, always wins. An entry is replaced as
//! a unit; severity and options are never merged field-by-field across tables.
//!
//! ## Preset Files
//!
//! A preset file names the rulesets it extends and adds local overrides:
//!
//! ```json
//! {
//!   "extends": ["strict", "./team-overrides.json"],
//!   "rules": {
//!     "no-floating-promises": "error"
//!   }
//! }
//! ```
//!
//! Entries in `extends` that look like paths are loaded relative to the
//! referencing file; anything else must resolve in the registry.

mod loader;
mod merge;
mod preset;
mod ruleset;

pub use loader::ConfigLoader;
pub use merge::{ExtensionList, MergedConfig, RulesetRegistry, merge};
pub use preset::{MergedPreset, Preset};
pub use ruleset::{RuleEntry, RuleTable, Ruleset, Severity};
