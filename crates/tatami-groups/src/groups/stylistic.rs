//! Stylistic group
//!
//! Layout and formatting rules via `@stylistic/eslint-plugin`. The bulk of
//! the table is generated from a handful of knobs (indent, quotes, semi, ...).
//! When an external formatter owns layout, the generated table is skipped and
//! only comment formatting remains.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::{Indent, StylisticOptions};
use serde_json::json;
use tatami_core::{ConfigFragment, Result, RuleEntry, RuleMap, overlay, rule_map};

pub(crate) fn build(
    options: &StylisticOptions,
    ctx: &AssemblyContext,
) -> Result<Vec<ConfigFragment>> {
    let plugin = ctx.load_plugin("@stylistic")?;

    let mut plugins = indexmap::IndexMap::new();
    plugins.insert(plugin.name.to_string(), plugin.package.to_string());

    let generated = if ctx.external_formatter {
        None
    } else {
        Some(customize_rules(options))
    };
    let always_on = rule_map([("@stylistic/spaced-comment", RuleEntry::error())]);

    let items = vec![ConfigFragment {
        name: "tatami/stylistic/rules".to_string(),
        plugins,
        rules: overlay([generated.as_ref(), Some(&always_on), options.rules.as_ref()]),
        ..ConfigFragment::default()
    }];

    apply_finalize(options.on_finalize.as_ref(), "stylistic", items, ctx)
}

/// Expand the layout knobs into the full rule table
pub(crate) fn customize_rules(options: &StylisticOptions) -> RuleMap {
    let indent = match options.indent {
        Indent::Spaces(width) => json!(width),
        Indent::Tab => json!("tab"),
    };
    let quotes = options.quotes.as_str();
    let semi = if options.semi { "always" } else { "never" };
    let arrow_parens = if options.arrow_parens { "always" } else { "as-needed" };
    let block_spacing = if options.block_spacing { "always" } else { "never" };
    let no_tabs = if options.indent == Indent::Tab {
        RuleEntry::off()
    } else {
        RuleEntry::error()
    };

    rule_map([
        ("@stylistic/array-bracket-spacing", RuleEntry::error_with([json!("never")])),
        (
            "@stylistic/arrow-parens",
            RuleEntry::error_with([json!(arrow_parens), json!({ "requireForBlockBody": true })]),
        ),
        (
            "@stylistic/arrow-spacing",
            RuleEntry::error_with([json!({ "after": true, "before": true })]),
        ),
        ("@stylistic/block-spacing", RuleEntry::error_with([json!(block_spacing)])),
        (
            "@stylistic/brace-style",
            RuleEntry::error_with([
                json!(options.brace_style.as_str()),
                json!({ "allowSingleLine": true }),
            ]),
        ),
        (
            "@stylistic/comma-dangle",
            RuleEntry::error_with([json!(options.comma_dangle.as_str())]),
        ),
        (
            "@stylistic/comma-spacing",
            RuleEntry::error_with([json!({ "after": true, "before": false })]),
        ),
        ("@stylistic/comma-style", RuleEntry::error_with([json!("last")])),
        (
            "@stylistic/computed-property-spacing",
            RuleEntry::error_with([json!("never"), json!({ "enforceForClassMembers": true })]),
        ),
        ("@stylistic/dot-location", RuleEntry::error_with([json!("property")])),
        ("@stylistic/eol-last", RuleEntry::error()),
        (
            "@stylistic/indent",
            RuleEntry::error_with([
                indent.clone(),
                json!({
                    "ArrayExpression": 1,
                    "CallExpression": { "arguments": 1 },
                    "ImportDeclaration": 1,
                    "MemberExpression": 1,
                    "ObjectExpression": 1,
                    "SwitchCase": 1,
                    "flatTernaryExpressions": false,
                    "offsetTernaryExpressions": true,
                    "outerIIFEBody": 1,
                }),
            ]),
        ),
        ("@stylistic/indent-binary-ops", RuleEntry::error_with([indent])),
        (
            "@stylistic/key-spacing",
            RuleEntry::error_with([json!({ "afterColon": true, "beforeColon": false })]),
        ),
        (
            "@stylistic/keyword-spacing",
            RuleEntry::error_with([json!({ "after": true, "before": true })]),
        ),
        (
            "@stylistic/lines-between-class-members",
            RuleEntry::error_with([json!("always"), json!({ "exceptAfterSingleLine": true })]),
        ),
        (
            "@stylistic/max-statements-per-line",
            RuleEntry::error_with([json!({ "max": 1 })]),
        ),
        (
            "@stylistic/member-delimiter-style",
            RuleEntry::error_with([json!({
                "multiline": { "delimiter": if options.semi { "semi" } else { "none" } },
                "singleline": { "delimiter": "semi" },
            })]),
        ),
        (
            "@stylistic/multiline-ternary",
            RuleEntry::error_with([json!("always-multiline")]),
        ),
        ("@stylistic/new-parens", RuleEntry::error()),
        ("@stylistic/no-extra-parens", RuleEntry::error_with([json!("functions")])),
        ("@stylistic/no-floating-decimal", RuleEntry::error()),
        ("@stylistic/no-mixed-spaces-and-tabs", RuleEntry::error()),
        ("@stylistic/no-multi-spaces", RuleEntry::error()),
        (
            "@stylistic/no-multiple-empty-lines",
            RuleEntry::error_with([json!({ "max": 1, "maxBOF": 0, "maxEOF": 0 })]),
        ),
        ("@stylistic/no-tabs", no_tabs),
        ("@stylistic/no-trailing-spaces", RuleEntry::error()),
        ("@stylistic/no-whitespace-before-property", RuleEntry::error()),
        (
            "@stylistic/object-curly-spacing",
            RuleEntry::error_with([json!("always")]),
        ),
        (
            "@stylistic/operator-linebreak",
            RuleEntry::error_with([json!("before")]),
        ),
        (
            "@stylistic/padded-blocks",
            RuleEntry::error_with([json!({
                "blocks": "never",
                "classes": "never",
                "switches": "never",
            })]),
        ),
        (
            "@stylistic/quote-props",
            RuleEntry::error_with([json!(options.quote_props.as_str())]),
        ),
        (
            "@stylistic/quotes",
            RuleEntry::error_with([
                json!(quotes),
                json!({ "allowTemplateLiterals": true, "avoidEscape": false }),
            ]),
        ),
        ("@stylistic/rest-spread-spacing", RuleEntry::error_with([json!("never")])),
        ("@stylistic/semi", RuleEntry::error_with([json!(semi)])),
        (
            "@stylistic/semi-spacing",
            RuleEntry::error_with([json!({ "after": true, "before": false })]),
        ),
        ("@stylistic/space-before-blocks", RuleEntry::error_with([json!("always")])),
        (
            "@stylistic/space-before-function-paren",
            RuleEntry::error_with([json!({
                "anonymous": "always",
                "asyncArrow": "always",
                "named": "never",
            })]),
        ),
        ("@stylistic/space-in-parens", RuleEntry::error_with([json!("never")])),
        ("@stylistic/space-infix-ops", RuleEntry::error()),
        (
            "@stylistic/space-unary-ops",
            RuleEntry::error_with([json!({ "nonwords": false, "words": true })]),
        ),
        ("@stylistic/template-curly-spacing", RuleEntry::error()),
        ("@stylistic/template-tag-spacing", RuleEntry::error_with([json!("never")])),
        ("@stylistic/type-annotation-spacing", RuleEntry::error()),
        ("@stylistic/type-generic-spacing", RuleEntry::error()),
        ("@stylistic/type-named-tuple-spacing", RuleEntry::error()),
        (
            "@stylistic/wrap-iife",
            RuleEntry::error_with([json!("any"), json!({ "functionPrototypeMethods": true })]),
        ),
        (
            "@stylistic/yield-star-spacing",
            RuleEntry::error_with([json!({ "after": true, "before": false })]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{install_test_package, test_context, test_context_in};
    use crate::options::{ConfigOptions, QuoteStyle};
    use tempfile::TempDir;

    #[test]
    fn generates_the_layout_table_by_default() {
        let ctx = test_context();
        let items = build(&StylisticOptions::default(), &ctx).unwrap();

        assert_eq!(items.len(), 1);
        let rules = &items[0].rules;
        assert_eq!(rules["@stylistic/indent"].options[0], json!(2));
        assert_eq!(rules["@stylistic/quotes"].options[0], json!("single"));
        assert_eq!(rules["@stylistic/semi"].options[0], json!("never"));
        assert_eq!(rules["@stylistic/spaced-comment"], RuleEntry::error());
    }

    #[test]
    fn knobs_flow_into_the_generated_rules() {
        let options = StylisticOptions {
            indent: Indent::Tab,
            quotes: QuoteStyle::Double,
            semi: true,
            ..StylisticOptions::default()
        };
        let rules = customize_rules(&options);
        assert_eq!(rules["@stylistic/indent"].options[0], json!("tab"));
        assert_eq!(rules["@stylistic/no-tabs"], RuleEntry::off());
        assert_eq!(rules["@stylistic/quotes"].options[0], json!("double"));
        assert_eq!(rules["@stylistic/semi"].options[0], json!("always"));
    }

    #[test]
    fn external_formatter_skips_the_layout_table() {
        let dir = TempDir::new().unwrap();
        install_test_package(dir.path(), "prettier");
        let ctx = test_context_in(ConfigOptions::default(), dir.path());
        assert!(ctx.external_formatter);

        let items = build(&StylisticOptions::default(), &ctx).unwrap();
        let rules = &items[0].rules;
        assert!(!rules.contains_key("@stylistic/indent"));
        assert_eq!(rules["@stylistic/spaced-comment"], RuleEntry::error());
    }

    #[test]
    fn custom_rules_override_generated_ones() {
        let ctx = test_context();
        let options = StylisticOptions {
            rules: Some(rule_map([("@stylistic/semi", RuleEntry::off())])),
            ..StylisticOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert_eq!(items[0].rules["@stylistic/semi"], RuleEntry::off());
    }
}
