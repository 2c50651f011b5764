//! JSX group
//!
//! Parser wiring for JSX syntax, with opt-in accessibility rules from
//! `eslint-plugin-jsx-a11y`. Off by default; framework groups usually pull
//! this in explicitly.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::JsxOptions;
use serde_json::json;
use tatami_core::{
    ConfigFragment, LanguageOptions, Result, RuleEntry, RuleMap, globs, normalize, overlay,
    resolve_preset, rule_map,
};

pub(crate) fn build(options: &JsxOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let mut plugins = indexmap::IndexMap::new();
    let mut a11y_rules = None;

    let a11y = normalize(options.a11y.clone(), false);
    if a11y.enabled {
        let plugin = ctx.load_plugin("jsx-a11y")?;
        plugins.insert(plugin.name.to_string(), plugin.package.to_string());
        let preset = resolve_preset(plugin, a11y.options.preset.kind(), a11y_recommended_rules)?;
        a11y_rules = Some(overlay([Some(&preset), a11y.options.rules.as_ref()]));
    }

    let items = vec![ConfigFragment {
        name: "tatami/jsx/rules".to_string(),
        files: Some(globs::patterns(&[globs::JSX, globs::TSX])),
        plugins,
        language_options: Some(LanguageOptions {
            parser_options: Some(json!({ "ecmaFeatures": { "jsx": true } })),
            ..LanguageOptions::default()
        }),
        rules: overlay([a11y_rules.as_ref(), options.rules.as_ref()]),
        ..ConfigFragment::default()
    }];

    apply_finalize(options.on_finalize.as_ref(), "jsx", items, ctx)
}

pub(crate) fn a11y_recommended_rules() -> RuleMap {
    rule_map([
        ("jsx-a11y/alt-text", RuleEntry::error()),
        ("jsx-a11y/anchor-has-content", RuleEntry::error()),
        ("jsx-a11y/anchor-is-valid", RuleEntry::error()),
        (
            "jsx-a11y/aria-activedescendant-has-tabindex",
            RuleEntry::error(),
        ),
        ("jsx-a11y/aria-props", RuleEntry::error()),
        ("jsx-a11y/aria-proptypes", RuleEntry::error()),
        ("jsx-a11y/aria-role", RuleEntry::error()),
        ("jsx-a11y/aria-unsupported-elements", RuleEntry::error()),
        ("jsx-a11y/autocomplete-valid", RuleEntry::error()),
        ("jsx-a11y/click-events-have-key-events", RuleEntry::error()),
        ("jsx-a11y/heading-has-content", RuleEntry::error()),
        ("jsx-a11y/html-has-lang", RuleEntry::error()),
        ("jsx-a11y/iframe-has-title", RuleEntry::error()),
        ("jsx-a11y/img-redundant-alt", RuleEntry::error()),
        ("jsx-a11y/interactive-supports-focus", RuleEntry::error()),
        ("jsx-a11y/label-has-associated-control", RuleEntry::error()),
        ("jsx-a11y/media-has-caption", RuleEntry::error()),
        ("jsx-a11y/mouse-events-have-key-events", RuleEntry::error()),
        ("jsx-a11y/no-access-key", RuleEntry::error()),
        ("jsx-a11y/no-autofocus", RuleEntry::error_with([json!({ "ignoreNonDOM": true })])),
        ("jsx-a11y/no-distracting-elements", RuleEntry::error()),
        (
            "jsx-a11y/no-interactive-element-to-noninteractive-role",
            RuleEntry::error_with([json!({ "tr": ["none", "presentation"] })]),
        ),
        (
            "jsx-a11y/no-noninteractive-element-interactions",
            RuleEntry::error(),
        ),
        (
            "jsx-a11y/no-noninteractive-element-to-interactive-role",
            RuleEntry::error(),
        ),
        ("jsx-a11y/no-noninteractive-tabindex", RuleEntry::error()),
        ("jsx-a11y/no-redundant-roles", RuleEntry::error()),
        ("jsx-a11y/no-static-element-interactions", RuleEntry::error()),
        ("jsx-a11y/role-has-required-aria-props", RuleEntry::error()),
        ("jsx-a11y/role-supports-aria-props", RuleEntry::error()),
        ("jsx-a11y/scope", RuleEntry::error()),
        ("jsx-a11y/tabindex-no-positive", RuleEntry::error()),
    ])
}

/// The recommended set with every relaxation option removed
pub(crate) fn a11y_strict_rules() -> RuleMap {
    a11y_recommended_rules()
        .into_keys()
        .map(|name| (name, RuleEntry::error()))
        .collect()
}
