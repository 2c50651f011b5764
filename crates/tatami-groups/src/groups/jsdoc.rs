//! JSDoc group
//!
//! Doc-comment consistency checks via `eslint-plugin-jsdoc`. Warn-level by
//! default: stale docs should not block a build.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::JsdocOptions;
use tatami_core::{ConfigFragment, Result, RuleEntry, RuleMap, overlay, rule_map};

pub(crate) fn build(options: &JsdocOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let plugin = ctx.load_plugin("jsdoc")?;

    let mut plugins = indexmap::IndexMap::new();
    plugins.insert(plugin.name.to_string(), plugin.package.to_string());

    let items = vec![ConfigFragment {
        name: "tatami/jsdoc/rules".to_string(),
        plugins,
        rules: overlay([Some(&default_rules()), options.rules.as_ref()]),
        ..ConfigFragment::default()
    }];

    apply_finalize(options.on_finalize.as_ref(), "jsdoc", items, ctx)
}

pub(crate) fn default_rules() -> RuleMap {
    rule_map([
        ("jsdoc/check-access", RuleEntry::warn()),
        ("jsdoc/check-param-names", RuleEntry::warn()),
        ("jsdoc/check-property-names", RuleEntry::warn()),
        ("jsdoc/check-types", RuleEntry::warn()),
        ("jsdoc/empty-tags", RuleEntry::warn()),
        ("jsdoc/implements-on-classes", RuleEntry::warn()),
        ("jsdoc/no-defaults", RuleEntry::warn()),
        ("jsdoc/no-multi-asterisks", RuleEntry::warn()),
        ("jsdoc/require-param-name", RuleEntry::warn()),
        ("jsdoc/require-property", RuleEntry::warn()),
        ("jsdoc/require-returns-check", RuleEntry::warn()),
        ("jsdoc/require-yields-check", RuleEntry::warn()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;
    use tatami_core::Severity;

    #[test]
    fn defaults_are_warn_level() {
        let ctx = test_context();
        let items = build(&JsdocOptions::default(), &ctx).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "tatami/jsdoc/rules");
        assert!(
            items[0]
                .rules
                .values()
                .all(|entry| entry.severity == Severity::Warn)
        );
    }

    #[test]
    fn custom_rules_can_raise_severity() {
        let ctx = test_context();
        let options = JsdocOptions {
            rules: Some(rule_map([("jsdoc/check-param-names", RuleEntry::error())])),
            ..JsdocOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert_eq!(items[0].rules["jsdoc/check-param-names"], RuleEntry::error());
    }
}
