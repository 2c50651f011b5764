//! React group
//!
//! React component and hook rules via `@eslint-react/eslint-plugin` and
//! `eslint-plugin-react-hooks`. Picks the TypeScript-aware preset and parser
//! automatically when the ts group is enabled.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::ReactOptions;
use crate::plugins::TS_PARSER;
use serde_json::json;
use tatami_core::{
    ConfigFragment, LanguageOptions, Result, RuleEntry, RuleMap, globs, overlay, rule_map,
};

pub(crate) fn build(options: &ReactOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let react = ctx.load_plugin("@eslint-react")?;
    let hooks = ctx.load_plugin("react-hooks")?;

    let mut plugins = indexmap::IndexMap::new();
    plugins.insert(react.name.to_string(), react.package.to_string());
    plugins.insert(hooks.name.to_string(), hooks.package.to_string());

    let files = options
        .files
        .clone()
        .unwrap_or_else(|| globs::patterns(&[globs::SRC]));

    let ts_enabled = ctx.options.ts.enabled;
    let preset = if ts_enabled {
        recommended_typescript_rules()
    } else {
        recommended_rules()
    };
    let language_options = ts_enabled.then(|| LanguageOptions {
        parser: Some(TS_PARSER.to_string()),
        parser_options: Some(json!({ "projectService": true })),
        ..LanguageOptions::default()
    });

    let hook_rules = rule_map([
        ("react-hooks/exhaustive-deps", RuleEntry::warn()),
        ("react-hooks/rules-of-hooks", RuleEntry::error()),
    ]);

    let items = vec![
        ConfigFragment {
            name: "tatami/react/setup".to_string(),
            plugins,
            settings: Some(json!({ "react-x": { "version": "detect" } })),
            ..ConfigFragment::default()
        },
        ConfigFragment {
            name: "tatami/react/rules".to_string(),
            files: Some(files),
            language_options,
            rules: overlay([Some(&preset), Some(&hook_rules), options.rules.as_ref()]),
            ..ConfigFragment::default()
        },
    ];

    apply_finalize(options.on_finalize.as_ref(), "react", items, ctx)
}

pub(crate) fn recommended_rules() -> RuleMap {
    rule_map([
        (
            "@eslint-react/dom/no-dangerously-set-innerhtml-with-children",
            RuleEntry::error(),
        ),
        ("@eslint-react/dom/no-find-dom-node", RuleEntry::error()),
        ("@eslint-react/dom/no-flush-sync", RuleEntry::error()),
        ("@eslint-react/dom/no-missing-button-type", RuleEntry::warn()),
        ("@eslint-react/dom/no-missing-iframe-sandbox", RuleEntry::warn()),
        ("@eslint-react/dom/no-namespace", RuleEntry::error()),
        ("@eslint-react/dom/no-render-return-value", RuleEntry::error()),
        ("@eslint-react/dom/no-script-url", RuleEntry::warn()),
        ("@eslint-react/dom/no-unsafe-iframe-sandbox", RuleEntry::warn()),
        (
            "@eslint-react/dom/no-void-elements-with-children",
            RuleEntry::error(),
        ),
        (
            "@eslint-react/hooks-extra/no-direct-set-state-in-use-effect",
            RuleEntry::warn(),
        ),
        ("@eslint-react/naming-convention/use-state", RuleEntry::warn()),
        ("@eslint-react/no-access-state-in-setstate", RuleEntry::error()),
        ("@eslint-react/no-array-index-key", RuleEntry::warn()),
        ("@eslint-react/no-children-count", RuleEntry::warn()),
        ("@eslint-react/no-children-for-each", RuleEntry::warn()),
        ("@eslint-react/no-children-map", RuleEntry::warn()),
        ("@eslint-react/no-children-only", RuleEntry::warn()),
        ("@eslint-react/no-children-to-array", RuleEntry::warn()),
        ("@eslint-react/no-clone-element", RuleEntry::warn()),
        ("@eslint-react/no-comment-textnodes", RuleEntry::warn()),
        ("@eslint-react/no-component-will-mount", RuleEntry::error()),
        (
            "@eslint-react/no-component-will-receive-props",
            RuleEntry::error(),
        ),
        ("@eslint-react/no-component-will-update", RuleEntry::error()),
        ("@eslint-react/no-context-provider", RuleEntry::warn()),
        ("@eslint-react/no-create-ref", RuleEntry::error()),
        ("@eslint-react/no-default-props", RuleEntry::error()),
        ("@eslint-react/no-direct-mutation-state", RuleEntry::error()),
        ("@eslint-react/no-duplicate-key", RuleEntry::error()),
        ("@eslint-react/no-forward-ref", RuleEntry::warn()),
        ("@eslint-react/no-implicit-key", RuleEntry::warn()),
        ("@eslint-react/no-missing-key", RuleEntry::error()),
        ("@eslint-react/no-nested-components", RuleEntry::error()),
        ("@eslint-react/no-prop-types", RuleEntry::error()),
        (
            "@eslint-react/no-redundant-should-component-update",
            RuleEntry::error(),
        ),
        (
            "@eslint-react/no-set-state-in-component-did-mount",
            RuleEntry::warn(),
        ),
        (
            "@eslint-react/no-set-state-in-component-did-update",
            RuleEntry::warn(),
        ),
        (
            "@eslint-react/no-set-state-in-component-will-update",
            RuleEntry::warn(),
        ),
        ("@eslint-react/no-string-refs", RuleEntry::error()),
        ("@eslint-react/no-unsafe-component-will-mount", RuleEntry::warn()),
        (
            "@eslint-react/no-unsafe-component-will-receive-props",
            RuleEntry::warn(),
        ),
        ("@eslint-react/no-unsafe-component-will-update", RuleEntry::warn()),
        ("@eslint-react/no-unstable-context-value", RuleEntry::warn()),
        ("@eslint-react/no-unstable-default-props", RuleEntry::warn()),
        (
            "@eslint-react/no-unused-class-component-members",
            RuleEntry::warn(),
        ),
        ("@eslint-react/no-unused-state", RuleEntry::warn()),
        (
            "@eslint-react/web-api/no-leaked-event-listener",
            RuleEntry::warn(),
        ),
        ("@eslint-react/web-api/no-leaked-interval", RuleEntry::warn()),
        (
            "@eslint-react/web-api/no-leaked-resize-observer",
            RuleEntry::warn(),
        ),
        ("@eslint-react/web-api/no-leaked-timeout", RuleEntry::warn()),
    ])
}

/// The recommended set minus runtime prop validation, which types replace
pub(crate) fn recommended_typescript_rules() -> RuleMap {
    let replaced = rule_map([
        ("@eslint-react/no-default-props", RuleEntry::off()),
        ("@eslint-react/no-prop-types", RuleEntry::off()),
    ]);
    overlay([Some(&recommended_rules()), Some(&replaced)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{install_test_package, test_context_in};
    use crate::options::ConfigOptions;
    use tempfile::TempDir;

    fn react_context(with_ts: bool) -> (TempDir, AssemblyContext) {
        let dir = TempDir::new().unwrap();
        install_test_package(dir.path(), "react");
        if with_ts {
            install_test_package(dir.path(), "typescript");
        }
        let ctx = test_context_in(ConfigOptions::default(), dir.path());
        (dir, ctx)
    }

    #[test]
    fn registers_both_plugins_in_the_setup_fragment() {
        let (_dir, ctx) = react_context(false);
        let items = build(&ReactOptions::default(), &ctx).unwrap();

        assert_eq!(items[0].name, "tatami/react/setup");
        assert!(items[0].plugins.contains_key("@eslint-react"));
        assert!(items[0].plugins.contains_key("react-hooks"));
        assert_eq!(
            items[0].settings.as_ref().unwrap()["react-x"]["version"],
            "detect"
        );
    }

    #[test]
    fn plain_js_projects_get_no_parser_override() {
        let (_dir, ctx) = react_context(false);
        let items = build(&ReactOptions::default(), &ctx).unwrap();

        assert!(items[1].language_options.is_none());
        assert_eq!(items[1].rules["@eslint-react/no-prop-types"], RuleEntry::error());
    }

    #[test]
    fn ts_projects_get_the_typescript_preset_and_parser() {
        let (_dir, ctx) = react_context(true);
        let items = build(&ReactOptions::default(), &ctx).unwrap();

        let language = items[1].language_options.as_ref().unwrap();
        assert_eq!(language.parser.as_deref(), Some("@typescript-eslint/parser"));
        assert_eq!(items[1].rules["@eslint-react/no-prop-types"], RuleEntry::off());
    }

    #[test]
    fn hook_rules_are_always_present() {
        let (_dir, ctx) = react_context(false);
        let items = build(&ReactOptions::default(), &ctx).unwrap();
        assert_eq!(items[1].rules["react-hooks/rules-of-hooks"], RuleEntry::error());
    }
}
