//! Lintset Core
//!
//! Core data model and composition engine for lint-rule presets.
//! This crate provides the fundamental components for describing rule
//! configurations (severity plus rule-specific options), grouping them into
//! named rulesets, and folding an ordered extension list of rulesets into a
//! single merged configuration consumable by a rule-execution engine.

pub mod config;
pub mod error;
pub mod result;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ExtensionList, MergedConfig, MergedPreset, Preset, RuleEntry, RuleTable, Ruleset,
    RulesetRegistry, Severity, merge,
};
pub use error::LintsetError;
pub use result::Result;

/// Crate version, exposed for the CLI `--version` flag
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber with the default `info` level
pub fn init_tracing() {
    init_tracing_with("info");
}

/// Initialize the tracing subscriber, falling back to the given filter
/// directive when `RUST_LOG` is not set
pub fn init_tracing_with(default_directive: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();
}
