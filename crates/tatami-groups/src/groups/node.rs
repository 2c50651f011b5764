//! Node group
//!
//! Node.js specifics via `eslint-plugin-n`.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::NodeOptions;
use tatami_core::{ConfigFragment, Result, RuleEntry, RuleMap, overlay, resolve_preset, rule_map};

pub(crate) fn build(options: &NodeOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let plugin = ctx.load_plugin("n")?;
    let preset_rules = resolve_preset(plugin, options.preset.kind(), default_rules)?;

    let mut plugins = indexmap::IndexMap::new();
    plugins.insert(plugin.name.to_string(), plugin.package.to_string());

    let items = vec![ConfigFragment {
        name: "tatami/node/rules".to_string(),
        plugins,
        rules: overlay([Some(&preset_rules), options.rules.as_ref()]),
        ..ConfigFragment::default()
    }];

    apply_finalize(options.on_finalize.as_ref(), "node", items, ctx)
}

/// Curated defaults: a small safety set that works for libraries and apps
pub(crate) fn default_rules() -> RuleMap {
    rule_map([
        ("n/no-deprecated-api", RuleEntry::error()),
        ("n/no-exports-assign", RuleEntry::error()),
        ("n/no-new-require", RuleEntry::error()),
        ("n/no-path-concat", RuleEntry::error()),
        ("n/prefer-global/buffer", RuleEntry::error()),
        ("n/prefer-global/process", RuleEntry::error()),
        ("n/prefer-node-protocol", RuleEntry::error()),
        ("n/process-exit-as-throw", RuleEntry::error()),
    ])
}

pub(crate) fn recommended_rules() -> RuleMap {
    rule_map([
        ("n/hashbang", RuleEntry::error()),
        ("n/no-deprecated-api", RuleEntry::error()),
        ("n/no-exports-assign", RuleEntry::error()),
        ("n/no-extraneous-import", RuleEntry::error()),
        ("n/no-extraneous-require", RuleEntry::error()),
        ("n/no-missing-import", RuleEntry::error()),
        ("n/no-missing-require", RuleEntry::error()),
        ("n/no-process-exit", RuleEntry::error()),
        ("n/no-unpublished-bin", RuleEntry::error()),
        ("n/no-unpublished-import", RuleEntry::error()),
        ("n/no-unpublished-require", RuleEntry::error()),
        ("n/no-unsupported-features/es-builtins", RuleEntry::error()),
        ("n/no-unsupported-features/es-syntax", RuleEntry::error()),
        ("n/no-unsupported-features/node-builtins", RuleEntry::error()),
        ("n/process-exit-as-throw", RuleEntry::error()),
    ])
}

pub(crate) fn all_rules() -> RuleMap {
    overlay([Some(&recommended_rules()), Some(&default_rules())])
        .into_keys()
        .map(|name| (name, RuleEntry::error()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;
    use crate::options::StandardPreset;

    #[test]
    fn emits_a_single_rules_fragment() {
        let ctx = test_context();
        let items = build(&NodeOptions::default(), &ctx).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "tatami/node/rules");
        assert_eq!(
            items[0].plugins.get("n"),
            Some(&"eslint-plugin-n".to_string())
        );
        assert_eq!(items[0].rules["n/prefer-node-protocol"], RuleEntry::error());
    }

    #[test]
    fn recommended_preset_swaps_the_rule_table() {
        let ctx = test_context();
        let options = NodeOptions {
            preset: StandardPreset::Recommended,
            ..NodeOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert!(items[0].rules.contains_key("n/no-missing-import"));
        assert!(!items[0].rules.contains_key("n/prefer-node-protocol"));
    }

    #[test]
    fn custom_rules_override_the_preset() {
        let ctx = test_context();
        let options = NodeOptions {
            rules: Some(rule_map([("n/no-path-concat", RuleEntry::off())])),
            ..NodeOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert_eq!(items[0].rules["n/no-path-concat"], RuleEntry::off());
    }
}
