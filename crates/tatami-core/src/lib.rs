//! Tatami Core
//!
//! Core model and machinery for composing flat lint configurations.
//! This crate provides the fragment and rule-map model, option
//! normalization, plugin handles and installed-package detection that the
//! group builders are written against.

pub mod detect;
pub mod error;
pub mod fragment;
pub mod globs;
pub mod options;
pub mod plugin;
pub mod rules;

// Re-export commonly used types
pub use detect::PackageProbe;
pub use error::{Result, TatamiError};
pub use fragment::{
    ConfigFragment, EcmaVersion, GlobalAccess, LanguageOptions, SourceType,
};
pub use options::{Resolved, Toggle, normalize};
pub use plugin::{PluginHandle, PluginLoader, PresetFn, PresetKind, resolve_preset};
pub use rules::{RuleEntry, RuleMap, Severity, overlay, rule_map};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tatami=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
