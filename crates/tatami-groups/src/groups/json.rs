//! JSON group
//!
//! JSON, JSON5, and JSONC linting via `eslint-plugin-jsonc`, plus opt-out
//! key sorting for `package.json` and `tsconfig.json`.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::{JsonOptions, SortOrder, SortPackageJsonOptions, SortTsconfigJsonOptions};
use crate::plugins::JSONC_PARSER;
use serde_json::json;
use tatami_core::{
    ConfigFragment, LanguageOptions, Result, RuleEntry, RuleMap, globs, normalize, overlay,
    rule_map,
};

const PACKAGE_JSON_TOP_KEYS: &[&str] = &[
    "name",
    "version",
    "private",
    "description",
    "keywords",
    "license",
    "author",
    "homepage",
    "repository",
    "bugs",
    "type",
    "exports",
    "main",
    "module",
    "types",
    "bin",
    "files",
    "engines",
    "packageManager",
    "scripts",
    "peerDependencies",
    "peerDependenciesMeta",
    "dependencies",
    "optionalDependencies",
    "devDependencies",
];

const TSCONFIG_TOP_KEYS: &[&str] = &[
    "target",
    "module",
    "moduleResolution",
    "lib",
    "rootDir",
    "rootDirs",
    "baseUrl",
];

pub(crate) fn build(options: &JsonOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let plugin = ctx.load_plugin("jsonc")?;

    let files = options
        .files
        .clone()
        .unwrap_or_else(|| globs::patterns(&[globs::JSON, globs::JSON5, globs::JSONC]));

    let mut plugins = indexmap::IndexMap::new();
    plugins.insert(plugin.name.to_string(), plugin.package.to_string());

    let mut items = vec![
        ConfigFragment {
            name: "tatami/json/setup".to_string(),
            files: Some(files.clone()),
            plugins,
            language_options: Some(LanguageOptions {
                parser: Some(JSONC_PARSER.to_string()),
                ..LanguageOptions::default()
            }),
            ..ConfigFragment::default()
        },
        ConfigFragment {
            name: "tatami/json/rules".to_string(),
            files: Some(files),
            rules: overlay([Some(&default_rules()), options.rules.as_ref()]),
            ..ConfigFragment::default()
        },
    ];

    let package_sort = normalize(options.sort_package_json.clone(), true);
    if package_sort.enabled {
        items.push(package_json_fragment(&package_sort.options));
    }

    let tsconfig_sort = normalize(options.sort_tsconfig_json.clone(), true);
    if tsconfig_sort.enabled {
        items.push(tsconfig_json_fragment(&tsconfig_sort.options));
    }

    apply_finalize(options.on_finalize.as_ref(), "json", items, ctx)
}

pub(crate) fn default_rules() -> RuleMap {
    rule_map([
        ("jsonc/no-bigint-literals", RuleEntry::error()),
        ("jsonc/no-binary-expression", RuleEntry::error()),
        ("jsonc/no-binary-numeric-literals", RuleEntry::error()),
        ("jsonc/no-dupe-keys", RuleEntry::error()),
        ("jsonc/no-escape-sequence-in-identifier", RuleEntry::error()),
        ("jsonc/no-floating-decimal", RuleEntry::error()),
        ("jsonc/no-hexadecimal-numeric-literals", RuleEntry::error()),
        ("jsonc/no-infinity", RuleEntry::error()),
        ("jsonc/no-multi-str", RuleEntry::error()),
        ("jsonc/no-nan", RuleEntry::error()),
        ("jsonc/no-number-props", RuleEntry::error()),
        ("jsonc/no-numeric-separators", RuleEntry::error()),
        ("jsonc/no-octal-numeric-literals", RuleEntry::error()),
        ("jsonc/no-parenthesized", RuleEntry::error()),
        ("jsonc/no-plus-sign", RuleEntry::error()),
        ("jsonc/no-regexp-literals", RuleEntry::error()),
        ("jsonc/no-sparse-arrays", RuleEntry::error()),
        ("jsonc/no-template-literals", RuleEntry::error()),
        ("jsonc/no-undefined-value", RuleEntry::error()),
        ("jsonc/no-unicode-codepoint-escapes", RuleEntry::error()),
        ("jsonc/space-unary-ops", RuleEntry::error()),
        ("jsonc/valid-json-number", RuleEntry::error()),
        ("jsonc/vue-custom-block/no-parsing-error", RuleEntry::error()),
    ])
}

fn package_json_fragment(options: &SortPackageJsonOptions) -> ConfigFragment {
    let top_keys = match &options.top_keys {
        Some(keys) => keys.clone(),
        None => PACKAGE_JSON_TOP_KEYS.iter().map(|k| k.to_string()).collect(),
    };
    let sort_keys = match options.order {
        SortOrder::Asc => RuleEntry::error_with([json!({
            "order": { "type": "asc" },
            "pathPattern": ".*",
        })]),
        SortOrder::TopAsc => RuleEntry::error_with([
            json!({ "order": top_keys, "pathPattern": "^$" }),
            json!({
                "order": { "type": "asc" },
                "pathPattern": "^(?:dev|peer|optional)?[Dd]ependencies(?:Meta)?$",
            }),
        ]),
    };

    ConfigFragment {
        name: "tatami/json/sort-package-json".to_string(),
        files: Some(vec!["**/package.json".to_string()]),
        rules: rule_map([("jsonc/sort-keys", sort_keys)]),
        ..ConfigFragment::default()
    }
}

fn tsconfig_json_fragment(options: &SortTsconfigJsonOptions) -> ConfigFragment {
    let top_keys = match &options.compiler_options_top_keys {
        Some(keys) => keys.clone(),
        None => TSCONFIG_TOP_KEYS.iter().map(|k| k.to_string()).collect(),
    };
    let compiler_options = match options.compiler_options_order {
        SortOrder::Asc => json!({
            "order": { "type": "asc" },
            "pathPattern": "^compilerOptions$",
        }),
        SortOrder::TopAsc => json!({
            "order": top_keys,
            "pathPattern": "^compilerOptions$",
        }),
    };
    let sort_keys = RuleEntry::error_with([
        json!({
            "order": ["extends", "compilerOptions", "references", "files", "include", "exclude"],
            "pathPattern": "^$",
        }),
        compiler_options,
    ]);

    ConfigFragment {
        name: "tatami/json/sort-tsconfig-json".to_string(),
        files: Some(vec![
            "**/tsconfig.json".to_string(),
            "**/tsconfig.*.json".to_string(),
        ]),
        rules: rule_map([("jsonc/sort-keys", sort_keys)]),
        ..ConfigFragment::default()
    }
}
