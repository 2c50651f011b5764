//! Imports group
//!
//! Import and export hygiene via `eslint-plugin-import-x`.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::ImportsOptions;
use serde_json::json;
use tatami_core::{ConfigFragment, Result, RuleEntry, RuleMap, overlay, rule_map};

pub(crate) fn build(options: &ImportsOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let plugin = ctx.load_plugin("import-x")?;

    let mut plugins = indexmap::IndexMap::new();
    plugins.insert(plugin.name.to_string(), plugin.package.to_string());

    let items = vec![ConfigFragment {
        name: "tatami/imports/rules".to_string(),
        plugins,
        rules: overlay([Some(&default_rules()), options.rules.as_ref()]),
        ..ConfigFragment::default()
    }];

    apply_finalize(options.on_finalize.as_ref(), "imports", items, ctx)
}

pub(crate) fn default_rules() -> RuleMap {
    rule_map([
        (
            "import-x/consistent-type-specifier-style",
            RuleEntry::error_with([json!("prefer-top-level")]),
        ),
        ("import-x/first", RuleEntry::error()),
        ("import-x/newline-after-import", RuleEntry::error()),
        ("import-x/no-duplicates", RuleEntry::error()),
        ("import-x/no-mutable-exports", RuleEntry::error()),
        ("import-x/no-named-default", RuleEntry::error()),
        ("import-x/no-self-import", RuleEntry::error()),
        ("import-x/no-useless-path-segments", RuleEntry::error()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;

    #[test]
    fn registers_the_plugin_and_default_rules() {
        let ctx = test_context();
        let items = build(&ImportsOptions::default(), &ctx).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "tatami/imports/rules");
        assert_eq!(
            items[0].plugins.get("import-x"),
            Some(&"eslint-plugin-import-x".to_string())
        );
        assert_eq!(items[0].rules["import-x/first"], RuleEntry::error());
    }

    #[test]
    fn custom_rules_override_defaults() {
        let ctx = test_context();
        let options = ImportsOptions {
            rules: Some(rule_map([("import-x/no-duplicates", RuleEntry::off())])),
            ..ImportsOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert_eq!(items[0].rules["import-x/no-duplicates"], RuleEntry::off());
    }
}
