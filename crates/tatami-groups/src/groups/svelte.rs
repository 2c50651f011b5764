//! Svelte group
//!
//! Svelte component linting via `eslint-plugin-svelte` and
//! `svelte-eslint-parser`. TypeScript projects get the ts parser wired into
//! `<script lang="ts">` blocks; markup layout extras follow the stylistic
//! group and yield to an external formatter.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::SvelteOptions;
use crate::plugins::{SVELTE_PARSER, TS_PARSER};
use serde_json::json;
use tatami_core::{
    ConfigFragment, LanguageOptions, Result, RuleEntry, RuleMap, globs, overlay, rule_map,
};

pub(crate) fn build(options: &SvelteOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let plugin = ctx.load_plugin("svelte")?;
    let ts_enabled = ctx.options.ts.enabled;

    let files = options.files.clone().unwrap_or_else(|| {
        if ts_enabled {
            globs::patterns(&[globs::SVELTE, globs::SVELTE_JS, globs::SVELTE_TS])
        } else {
            globs::patterns(&[globs::SVELTE, globs::SVELTE_JS])
        }
    });

    let mut parser_options = serde_json::Map::new();
    if ts_enabled {
        parser_options.insert("extraFileExtensions".into(), json!([".svelte"]));
        parser_options.insert("parser".into(), json!(TS_PARSER));
        parser_options.insert("projectService".into(), json!(true));
    }
    if let Some(config) = &options.svelte_config {
        parser_options.insert("svelteConfig".into(), config.clone());
    }

    let mut plugins = indexmap::IndexMap::new();
    plugins.insert(plugin.name.to_string(), plugin.package.to_string());

    let handoffs = rule_map([
        ("import-x/no-mutable-exports", RuleEntry::off()),
        ("svelte/no-dom-manipulating", RuleEntry::off()),
    ]);
    let stylistic = ctx.options.stylistic.enabled.then(stylistic_extras);
    let formatter = ctx.external_formatter.then(prettier_rules);

    let items = vec![
        ConfigFragment {
            name: "tatami/svelte/setup".to_string(),
            files: Some(files.clone()),
            plugins,
            language_options: Some(LanguageOptions {
                parser: Some(SVELTE_PARSER.to_string()),
                parser_options: (!parser_options.is_empty())
                    .then(|| serde_json::Value::Object(parser_options)),
                ..LanguageOptions::default()
            }),
            ..ConfigFragment::default()
        },
        ConfigFragment {
            name: "tatami/svelte/rules".to_string(),
            files: Some(files),
            rules: overlay([
                Some(&recommended_rules()),
                Some(&handoffs),
                stylistic.as_ref(),
                formatter.as_ref(),
                options.rules.as_ref(),
            ]),
            ..ConfigFragment::default()
        },
    ];

    apply_finalize(options.on_finalize.as_ref(), "svelte", items, ctx)
}

pub(crate) fn recommended_rules() -> RuleMap {
    rule_map([
        ("svelte/comment-directive", RuleEntry::error()),
        ("svelte/no-at-debug-tags", RuleEntry::warn()),
        ("svelte/no-at-html-tags", RuleEntry::error()),
        ("svelte/no-dupe-else-if-blocks", RuleEntry::error()),
        ("svelte/no-dupe-style-properties", RuleEntry::error()),
        ("svelte/no-dynamic-slot-name", RuleEntry::error()),
        ("svelte/no-inner-declarations", RuleEntry::error()),
        ("svelte/no-not-function-handler", RuleEntry::error()),
        ("svelte/no-object-in-text-mustaches", RuleEntry::error()),
        ("svelte/no-shorthand-style-property-overrides", RuleEntry::error()),
        ("svelte/no-unknown-style-directive-property", RuleEntry::error()),
        ("svelte/no-unused-svelte-ignore", RuleEntry::error()),
        ("svelte/system", RuleEntry::error()),
        ("svelte/valid-compile", RuleEntry::error()),
    ])
}

/// Markup layout rules that only make sense without an external formatter
fn stylistic_extras() -> RuleMap {
    rule_map([
        ("svelte/derived-has-same-inputs-outputs", RuleEntry::error()),
        ("svelte/html-closing-bracket-new-line", RuleEntry::error()),
        ("svelte/html-closing-bracket-spacing", RuleEntry::error()),
        ("svelte/html-quotes", RuleEntry::error()),
        ("svelte/html-self-closing", RuleEntry::error()),
        ("svelte/mustache-spacing", RuleEntry::error()),
        (
            "svelte/no-spaces-around-equal-signs-in-attribute",
            RuleEntry::error(),
        ),
        ("svelte/no-trailing-spaces", RuleEntry::error()),
        ("svelte/shorthand-attribute", RuleEntry::error()),
        ("svelte/shorthand-directive", RuleEntry::error()),
        ("svelte/spaced-html-comment", RuleEntry::error()),
    ])
}

/// Off-switches for markup rules a formatter owns
pub(crate) fn prettier_rules() -> RuleMap {
    rule_map([
        ("svelte/first-attribute-linebreak", RuleEntry::off()),
        ("svelte/html-closing-bracket-new-line", RuleEntry::off()),
        ("svelte/html-closing-bracket-spacing", RuleEntry::off()),
        ("svelte/html-quotes", RuleEntry::off()),
        ("svelte/html-self-closing", RuleEntry::off()),
        ("svelte/indent", RuleEntry::off()),
        ("svelte/max-attributes-per-line", RuleEntry::off()),
        ("svelte/mustache-spacing", RuleEntry::off()),
        (
            "svelte/no-spaces-around-equal-signs-in-attribute",
            RuleEntry::off(),
        ),
        ("svelte/no-trailing-spaces", RuleEntry::off()),
        ("svelte/shorthand-attribute", RuleEntry::off()),
        ("svelte/shorthand-directive", RuleEntry::off()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{install_test_package, test_context_in};
    use crate::options::ConfigOptions;
    use tempfile::TempDir;

    fn svelte_context(extra_packages: &[&str]) -> (TempDir, AssemblyContext) {
        let dir = TempDir::new().unwrap();
        install_test_package(dir.path(), "svelte");
        for package in extra_packages {
            install_test_package(dir.path(), package);
        }
        let ctx = test_context_in(ConfigOptions::default(), dir.path());
        (dir, ctx)
    }

    #[test]
    fn plain_projects_parse_svelte_without_ts_wiring() {
        let (_dir, ctx) = svelte_context(&[]);
        let items = build(&SvelteOptions::default(), &ctx).unwrap();

        let files = items[0].files.as_ref().unwrap();
        assert_eq!(files.len(), 2);

        let language = items[0].language_options.as_ref().unwrap();
        assert_eq!(language.parser.as_deref(), Some("svelte-eslint-parser"));
        assert!(language.parser_options.is_none());
    }

    #[test]
    fn ts_projects_wire_the_ts_parser_into_script_blocks() {
        let (_dir, ctx) = svelte_context(&["typescript"]);
        let items = build(&SvelteOptions::default(), &ctx).unwrap();

        let files = items[0].files.as_ref().unwrap();
        assert!(files.contains(&"**/*.svelte.ts".to_string()));

        let parser_options = items[0]
            .language_options
            .as_ref()
            .unwrap()
            .parser_options
            .as_ref()
            .unwrap();
        assert_eq!(parser_options["parser"], "@typescript-eslint/parser");
        assert_eq!(parser_options["projectService"], true);
    }

    #[test]
    fn svelte_config_flows_into_parser_options() {
        let (_dir, ctx) = svelte_context(&[]);
        let options = SvelteOptions {
            svelte_config: Some(json!({ "compilerOptions": { "runes": true } })),
            ..SvelteOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        let parser_options = items[0]
            .language_options
            .as_ref()
            .unwrap()
            .parser_options
            .as_ref()
            .unwrap();
        assert_eq!(parser_options["svelteConfig"]["compilerOptions"]["runes"], true);
    }

    #[test]
    fn stylistic_extras_follow_the_stylistic_group() {
        let (_dir, ctx) = svelte_context(&[]);
        let items = build(&SvelteOptions::default(), &ctx).unwrap();
        assert_eq!(items[1].rules["svelte/html-quotes"], RuleEntry::error());

        let mut config = ConfigOptions::default();
        config.stylistic = Some(false.into());
        let dir = TempDir::new().unwrap();
        install_test_package(dir.path(), "svelte");
        let ctx = test_context_in(config, dir.path());
        let items = build(&SvelteOptions::default(), &ctx).unwrap();
        assert!(!items[1].rules.contains_key("svelte/html-quotes"));
    }

    #[test]
    fn external_formatter_turns_markup_layout_off() {
        let (_dir, ctx) = svelte_context(&["prettier"]);
        let items = build(&SvelteOptions::default(), &ctx).unwrap();
        assert_eq!(items[1].rules["svelte/html-quotes"], RuleEntry::off());
        assert_eq!(items[1].rules["svelte/indent"], RuleEntry::off());
    }
}
