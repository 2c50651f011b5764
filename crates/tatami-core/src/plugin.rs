//! Plugin handles, loaders and preset resolution
//!
//! A [`PluginHandle`] is the composer-side description of a lint plugin: the
//! prefix its rules are named under, the package specifier fragments register
//! it as, and the preset rule tables it ships. Handles are resolved through
//! loader functions so a group only pays for (and can only fail on) the
//! plugins it actually enables.

use crate::error::{Result, TatamiError};
use crate::rules::RuleMap;

/// Produces one of a plugin's preset rule tables
pub type PresetFn = fn() -> RuleMap;

/// Resolves a plugin handle, failing when the plugin cannot be provided
pub type PluginLoader = fn() -> Result<&'static PluginHandle>;

/// Composer-side description of a lint plugin
#[derive(Debug)]
pub struct PluginHandle {
    /// Rule prefix and registry name, e.g. `@typescript-eslint`
    pub name: &'static str,
    /// Package specifier fragments register the plugin under
    pub package: &'static str,
    /// Host packages the plugin cannot work without. Loading fails when one
    /// of these is missing from the project being linted; an empty list means
    /// the plugin is self-contained.
    pub requires: &'static [&'static str],
    /// Named preset rule tables, e.g. `("recommended", fn)`
    pub presets: &'static [(&'static str, PresetFn)],
}

impl PluginHandle {
    /// Look up a preset table by name
    pub fn preset(&self, name: &str) -> Option<RuleMap> {
        self.presets
            .iter()
            .find(|(preset_name, _)| *preset_name == name)
            .map(|(_, build)| build())
    }

    pub fn preset_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.presets.iter().map(|(name, _)| *name)
    }
}

/// How a group wants its preset rules resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    /// The group's curated default rule set
    Default,
    /// A named preset from the plugin's table
    Named(&'static str),
    /// No preset rules; start from an empty table
    None,
}

/// Resolve a preset selection against a plugin's tables
///
/// `default_rules` supplies the group's curated defaults; named presets come
/// from the plugin itself. Asking for a preset the plugin doesn't ship is a
/// configuration error.
pub fn resolve_preset(
    plugin: &PluginHandle,
    kind: PresetKind,
    default_rules: PresetFn,
) -> Result<RuleMap> {
    match kind {
        PresetKind::None => Ok(RuleMap::new()),
        PresetKind::Default => Ok(default_rules()),
        PresetKind::Named(name) => plugin.preset(name).ok_or_else(|| {
            TatamiError::config_error(format!(
                "plugin `{}` has no preset named `{name}`",
                plugin.name
            ))
        }),
    }
}
