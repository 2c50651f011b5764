//! Prettier group
//!
//! Hands layout over to Prettier: turns off every rule the formatter would
//! fight with, and optionally runs Prettier itself through
//! `eslint-plugin-prettier`.

use crate::context::AssemblyContext;
use crate::groups::stylistic;
use crate::hooks::apply_finalize;
use crate::options::{PrettierOptions, StandardPreset, StylisticOptions};
use tatami_core::{ConfigFragment, Result, RuleEntry, RuleMap, overlay, rule_map};

pub(crate) fn build(
    options: &PrettierOptions,
    ctx: &AssemblyContext,
) -> Result<Vec<ConfigFragment>> {
    let mut items = Vec::new();

    if options.disable_conflicting_rules {
        let mut rules = conflict_rules();
        // the default js preset leaves brace enforcement to layout rules,
        // which are off from here on
        if ctx.options.js.options.preset == StandardPreset::Default {
            rules.insert("curly".to_string(), RuleEntry::error());
        }
        items.push(ConfigFragment {
            name: "tatami/disables/prettier".to_string(),
            rules: overlay([Some(&rules), options.rules.as_ref()]),
            ..ConfigFragment::default()
        });
    }

    if options.enable_plugin {
        let plugin = ctx.load_plugin("prettier")?;
        let mut plugins = indexmap::IndexMap::new();
        plugins.insert(plugin.name.to_string(), plugin.package.to_string());
        items.push(ConfigFragment {
            name: "tatami/prettier/plugin".to_string(),
            plugins,
            rules: rule_map([("prettier/prettier", RuleEntry::error())]),
            ..ConfigFragment::default()
        });
    }

    apply_finalize(options.on_finalize.as_ref(), "prettier", items, ctx)
}

/// Everything the formatter owns, derived from the generated layout table
pub(crate) fn conflict_rules() -> RuleMap {
    let mut rules: RuleMap = stylistic::customize_rules(&StylisticOptions::default())
        .into_keys()
        .map(|name| (name, RuleEntry::off()))
        .collect();
    rules.insert("no-unexpected-multiline".to_string(), RuleEntry::off());
    rules
}
