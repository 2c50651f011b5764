//! Perfectionist group
//!
//! Sorting of imports, exports, and named specifiers via
//! `eslint-plugin-perfectionist`. The default preset only sorts the module
//! boundary; the named presets sort everything the plugin knows about.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::PerfectionistOptions;
use serde_json::json;
use tatami_core::{ConfigFragment, Result, RuleEntry, RuleMap, overlay, resolve_preset, rule_map};

pub(crate) fn build(
    options: &PerfectionistOptions,
    ctx: &AssemblyContext,
) -> Result<Vec<ConfigFragment>> {
    let plugin = ctx.load_plugin("perfectionist")?;
    let preset_rules = resolve_preset(plugin, options.preset.kind(), default_rules)?;

    let mut plugins = indexmap::IndexMap::new();
    plugins.insert(plugin.name.to_string(), plugin.package.to_string());

    let items = vec![ConfigFragment {
        name: "tatami/perfectionist/rules".to_string(),
        plugins,
        rules: overlay([Some(&preset_rules), options.rules.as_ref()]),
        ..ConfigFragment::default()
    }];

    apply_finalize(options.on_finalize.as_ref(), "perfectionist", items, ctx)
}

pub(crate) fn default_rules() -> RuleMap {
    rule_map([
        (
            "perfectionist/sort-exports",
            RuleEntry::error_with([json!({ "order": "asc", "type": "natural" })]),
        ),
        (
            "perfectionist/sort-imports",
            RuleEntry::error_with([json!({
                "groups": [
                    "type-builtin",
                    "type-external",
                    { "newlinesBetween": "always" },
                    ["type-internal", "type-subpath"],
                    { "newlinesBetween": "always" },
                    ["type-parent", "type-sibling", "type-index"],
                    { "newlinesBetween": "always" },
                    "builtin",
                    "external",
                    { "newlinesBetween": "always" },
                    ["internal", "subpath"],
                    { "newlinesBetween": "always" },
                    ["parent", "sibling", "index"],
                    { "newlinesBetween": "always" },
                    "side-effect",
                    "unknown",
                ],
                "internalPattern": ["^@/", "^~"],
                "newlinesBetween": "never",
                "order": "asc",
                "type": "natural",
            })]),
        ),
        (
            "perfectionist/sort-named-exports",
            RuleEntry::error_with([json!({ "order": "asc", "type": "natural" })]),
        ),
        (
            "perfectionist/sort-named-imports",
            RuleEntry::error_with([json!({ "order": "asc", "type": "natural" })]),
        ),
    ])
}

/// Every sortable construct the plugin covers
const SORT_RULES: &[&str] = &[
    "sort-array-includes",
    "sort-classes",
    "sort-decorators",
    "sort-enums",
    "sort-exports",
    "sort-heritage-clauses",
    "sort-imports",
    "sort-interfaces",
    "sort-intersection-types",
    "sort-jsx-props",
    "sort-maps",
    "sort-modules",
    "sort-named-exports",
    "sort-named-imports",
    "sort-object-types",
    "sort-objects",
    "sort-sets",
    "sort-switch-case",
    "sort-union-types",
    "sort-variable-declarations",
];

fn sort_everything(options: serde_json::Value) -> RuleMap {
    SORT_RULES
        .iter()
        .map(|name| {
            (
                format!("perfectionist/{name}"),
                RuleEntry::error_with([options.clone()]),
            )
        })
        .collect()
}

pub(crate) fn recommended_alphabetical_rules() -> RuleMap {
    sort_everything(json!({ "order": "asc", "type": "alphabetical" }))
}

pub(crate) fn recommended_natural_rules() -> RuleMap {
    sort_everything(json!({ "order": "asc", "type": "natural" }))
}

pub(crate) fn recommended_line_length_rules() -> RuleMap {
    sort_everything(json!({ "order": "desc", "type": "line-length" }))
}

pub(crate) fn recommended_custom_rules() -> RuleMap {
    sort_everything(json!({ "alphabet": "", "order": "asc", "type": "custom" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;
    use crate::options::PerfectionistPreset;

    #[test]
    fn default_preset_sorts_the_module_boundary_only() {
        let ctx = test_context();
        let items = build(&PerfectionistOptions::default(), &ctx).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].rules.len(), 4);
        assert!(items[0].rules.contains_key("perfectionist/sort-imports"));
        assert!(!items[0].rules.contains_key("perfectionist/sort-objects"));
    }

    #[test]
    fn named_presets_sort_everything() {
        let ctx = test_context();
        let options = PerfectionistOptions {
            preset: PerfectionistPreset::RecommendedNatural,
            ..PerfectionistOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert!(items[0].rules.contains_key("perfectionist/sort-objects"));
        assert_eq!(items[0].rules.len(), SORT_RULES.len());
    }

    #[test]
    fn line_length_preset_sorts_descending() {
        let rules = recommended_line_length_rules();
        let entry = &rules["perfectionist/sort-imports"];
        assert_eq!(entry.options[0]["order"], "desc");
    }
}
