//! Tatami Groups
//!
//! The built-in config groups and the assembler that turns a
//! [`ConfigOptions`] into a flat list of config fragments. Groups run in a
//! fixed registry order, later fragments override earlier ones, and
//! detection of companion packages (typescript, react, svelte, prettier,
//! vitest) drives the defaults.
//!
//! ```no_run
//! use tatami_groups::{ConfigOptions, compose};
//!
//! # async fn assemble() -> tatami_core::Result<()> {
//! let fragments = compose(ConfigOptions::default()).await?;
//! println!("{}", serde_json::to_string_pretty(&fragments).unwrap());
//! # Ok(())
//! # }
//! ```

pub mod compose;
pub mod context;
pub mod globals;
mod groups;
pub mod hooks;
pub mod loader;
pub mod options;
pub mod plugins;

// Re-export commonly used types
pub use compose::{compose, compose_in};
pub use context::{AssemblyContext, DetectedPackages};
pub use hooks::FinalizeHook;
pub use loader::{CONFIG_FILES, ConfigLoader, config_schema};
pub use options::{
    A11yOptions, A11yPreset, BraceStyle, CommaDangle, ConfigOptions, DisablesOptions,
    GitignoreOptions, GroupName, IgnoresOptions, ImportsOptions, Indent, JsOptions, JsdocOptions,
    JsonOptions, JsxOptions, NodeOptions, PerfectionistOptions, PerfectionistPreset,
    PrettierOptions, QuoteProps, QuoteStyle, ReactOptions, RegexpOptions, ResolvedOptions,
    ReturnTypeOptions, SortOrder, SortPackageJsonOptions, SortTsconfigJsonOptions, StandardPreset,
    StylisticOptions, SvelteOptions, TestOptions, TsOptions, TsPreset, TsStylisticPreset,
    VitestOptions,
};
pub use tatami_core::{
    ConfigFragment, GlobalAccess, PackageProbe, Result, RuleEntry, RuleMap, Severity, TatamiError,
    Toggle, rule_map,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
