//! TS group
//!
//! TypeScript support: parser setup, the `typescript-eslint` preset family,
//! and the optional explicit-function-return-type sub-fragment.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::TsOptions;
use crate::plugins::TS_PARSER;
use serde_json::json;
use tatami_core::{
    ConfigFragment, LanguageOptions, PresetKind, Result, RuleEntry, RuleMap, SourceType, globs,
    normalize, overlay, resolve_preset, rule_map,
};

pub(crate) fn build(options: &TsOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let plugin = ctx.load_plugin("@typescript-eslint")?;
    let preset_rules = resolve_preset(plugin, options.preset.kind(), default_rules)?;

    let stylistic_rules = match options.stylistic_preset.preset_name() {
        Some(name) => Some(resolve_preset(plugin, PresetKind::Named(name), default_rules)?),
        None => None,
    };

    let files = match &options.files {
        Some(files) => files.clone(),
        None => {
            let mut files = globs::patterns(&[globs::TS, globs::TSX]);
            if let Some(extra) = &options.extra_files {
                files.extend(extra.iter().cloned());
            }
            files
        }
    };

    let mut plugins = indexmap::IndexMap::new();
    plugins.insert(plugin.name.to_string(), plugin.package.to_string());

    let mut items = vec![
        ConfigFragment {
            name: "tatami/ts/setup".to_string(),
            files: Some(files.clone()),
            plugins,
            language_options: Some(LanguageOptions {
                source_type: Some(SourceType::Module),
                parser: Some(TS_PARSER.to_string()),
                parser_options: options.parser_options.clone(),
                ..LanguageOptions::default()
            }),
            ..ConfigFragment::default()
        },
        ConfigFragment {
            name: "tatami/ts/rules".to_string(),
            files: Some(files.clone()),
            rules: overlay([
                Some(&preset_rules),
                stylistic_rules.as_ref(),
                options.rules.as_ref(),
            ]),
            ..ConfigFragment::default()
        },
    ];

    let return_type = normalize(options.explicit_function_return_type.clone(), false);
    if return_type.enabled {
        let base = rule_map([(
            "@typescript-eslint/explicit-function-return-type",
            RuleEntry::error_with([json!({ "allowExpressions": true, "allowIIFEs": true })]),
        )]);
        items.push(ConfigFragment {
            name: "tatami/ts/explicit-function-return-type".to_string(),
            files: Some(return_type.options.files.clone().unwrap_or(files)),
            rules: overlay([Some(&base), return_type.options.rules.as_ref()]),
            ..ConfigFragment::default()
        });
    }

    apply_finalize(options.on_finalize.as_ref(), "ts", items, ctx)
}

/// Curated defaults: strict, not type-checked, with a few softened rules
pub(crate) fn default_rules() -> RuleMap {
    let curated = rule_map([
        (
            "@typescript-eslint/consistent-type-definitions",
            RuleEntry::error_with([json!("interface")]),
        ),
        (
            "@typescript-eslint/no-empty-object-type",
            RuleEntry::error_with([json!({ "allowInterfaces": "always" })]),
        ),
        ("@typescript-eslint/no-explicit-any", RuleEntry::off()),
        (
            "@typescript-eslint/no-unused-vars",
            RuleEntry::warn_with([json!({
                "args": "after-used",
                "argsIgnorePattern": "^_",
                "caughtErrors": "none",
                "ignoreRestSiblings": true,
                "vars": "all",
                "varsIgnorePattern": "[iI]gnored",
            })]),
        ),
    ]);

    overlay([Some(&strict_rules()), Some(&curated)])
}

/// Core rules superseded by the TypeScript compiler or plugin equivalents
fn eslint_recommended_rules() -> RuleMap {
    rule_map([
        ("constructor-super", RuleEntry::off()),
        ("getter-return", RuleEntry::off()),
        ("no-class-assign", RuleEntry::off()),
        ("no-const-assign", RuleEntry::off()),
        ("no-dupe-args", RuleEntry::off()),
        ("no-dupe-class-members", RuleEntry::off()),
        ("no-dupe-keys", RuleEntry::off()),
        ("no-func-assign", RuleEntry::off()),
        ("no-import-assign", RuleEntry::off()),
        ("no-new-native-nonconstructor", RuleEntry::off()),
        ("no-obj-calls", RuleEntry::off()),
        ("no-redeclare", RuleEntry::off()),
        ("no-setter-return", RuleEntry::off()),
        ("no-this-before-super", RuleEntry::off()),
        ("no-undef", RuleEntry::off()),
        ("no-unreachable", RuleEntry::off()),
        ("no-unsafe-negation", RuleEntry::off()),
        ("no-var", RuleEntry::error()),
        ("prefer-const", RuleEntry::error()),
        ("prefer-rest-params", RuleEntry::error()),
        ("prefer-spread", RuleEntry::error()),
    ])
}

fn recommended_plugin_rules() -> RuleMap {
    rule_map([
        ("@typescript-eslint/ban-ts-comment", RuleEntry::error()),
        ("no-array-constructor", RuleEntry::off()),
        ("@typescript-eslint/no-array-constructor", RuleEntry::error()),
        ("@typescript-eslint/no-duplicate-enum-values", RuleEntry::error()),
        ("@typescript-eslint/no-empty-object-type", RuleEntry::error()),
        ("@typescript-eslint/no-explicit-any", RuleEntry::error()),
        ("@typescript-eslint/no-extra-non-null-assertion", RuleEntry::error()),
        ("@typescript-eslint/no-misused-new", RuleEntry::error()),
        ("@typescript-eslint/no-namespace", RuleEntry::error()),
        (
            "@typescript-eslint/no-non-null-asserted-optional-chain",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-require-imports", RuleEntry::error()),
        ("@typescript-eslint/no-this-alias", RuleEntry::error()),
        (
            "@typescript-eslint/no-unnecessary-type-constraint",
            RuleEntry::error(),
        ),
        (
            "@typescript-eslint/no-unsafe-declaration-merging",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-unsafe-function-type", RuleEntry::error()),
        ("no-unused-expressions", RuleEntry::off()),
        ("@typescript-eslint/no-unused-expressions", RuleEntry::error()),
        ("no-unused-vars", RuleEntry::off()),
        ("@typescript-eslint/no-unused-vars", RuleEntry::error()),
        ("@typescript-eslint/no-wrapper-object-types", RuleEntry::error()),
        ("@typescript-eslint/prefer-as-const", RuleEntry::error()),
        ("@typescript-eslint/prefer-namespace-keyword", RuleEntry::error()),
        ("@typescript-eslint/triple-slash-reference", RuleEntry::error()),
    ])
}

fn strict_extras() -> RuleMap {
    rule_map([
        ("@typescript-eslint/no-dynamic-delete", RuleEntry::error()),
        ("@typescript-eslint/no-extraneous-class", RuleEntry::error()),
        ("@typescript-eslint/no-invalid-void-type", RuleEntry::error()),
        (
            "@typescript-eslint/no-non-null-asserted-nullish-coalescing",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-non-null-assertion", RuleEntry::error()),
        ("no-useless-constructor", RuleEntry::off()),
        ("@typescript-eslint/no-useless-constructor", RuleEntry::error()),
        ("@typescript-eslint/unified-signatures", RuleEntry::error()),
    ])
}

fn type_checked_extras() -> RuleMap {
    rule_map([
        ("@typescript-eslint/await-thenable", RuleEntry::error()),
        ("@typescript-eslint/no-array-delete", RuleEntry::error()),
        ("@typescript-eslint/no-base-to-string", RuleEntry::error()),
        (
            "@typescript-eslint/no-duplicate-type-constituents",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-floating-promises", RuleEntry::error()),
        ("@typescript-eslint/no-for-in-array", RuleEntry::error()),
        ("no-implied-eval", RuleEntry::off()),
        ("@typescript-eslint/no-implied-eval", RuleEntry::error()),
        ("@typescript-eslint/no-misused-promises", RuleEntry::error()),
        (
            "@typescript-eslint/no-redundant-type-constituents",
            RuleEntry::error(),
        ),
        (
            "@typescript-eslint/no-unnecessary-type-assertion",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-unsafe-argument", RuleEntry::error()),
        ("@typescript-eslint/no-unsafe-assignment", RuleEntry::error()),
        ("@typescript-eslint/no-unsafe-call", RuleEntry::error()),
        ("@typescript-eslint/no-unsafe-enum-comparison", RuleEntry::error()),
        ("@typescript-eslint/no-unsafe-member-access", RuleEntry::error()),
        ("@typescript-eslint/no-unsafe-return", RuleEntry::error()),
        ("@typescript-eslint/no-unsafe-unary-minus", RuleEntry::error()),
        ("no-throw-literal", RuleEntry::off()),
        ("@typescript-eslint/only-throw-error", RuleEntry::error()),
        ("prefer-promise-reject-errors", RuleEntry::off()),
        (
            "@typescript-eslint/prefer-promise-reject-errors",
            RuleEntry::error(),
        ),
        ("require-await", RuleEntry::off()),
        ("@typescript-eslint/require-await", RuleEntry::error()),
        ("@typescript-eslint/restrict-plus-operands", RuleEntry::error()),
        (
            "@typescript-eslint/restrict-template-expressions",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/unbound-method", RuleEntry::error()),
    ])
}

fn strict_type_checked_extras() -> RuleMap {
    rule_map([
        ("@typescript-eslint/no-confusing-void-expression", RuleEntry::error()),
        ("@typescript-eslint/no-deprecated", RuleEntry::error()),
        (
            "@typescript-eslint/no-meaningless-void-operator",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-mixed-enums", RuleEntry::error()),
        (
            "@typescript-eslint/no-unnecessary-boolean-literal-compare",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-unnecessary-condition", RuleEntry::error()),
        (
            "@typescript-eslint/no-unnecessary-template-expression",
            RuleEntry::error(),
        ),
        (
            "@typescript-eslint/no-unnecessary-type-arguments",
            RuleEntry::error(),
        ),
        (
            "@typescript-eslint/prefer-reduce-type-parameter",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/prefer-return-this-type", RuleEntry::error()),
        (
            "@typescript-eslint/return-await",
            RuleEntry::error_with([json!("error-handling-correctness-only")]),
        ),
        (
            "@typescript-eslint/use-unknown-in-catch-callback-variable",
            RuleEntry::error(),
        ),
    ])
}

fn stylistic_plugin_rules() -> RuleMap {
    rule_map([
        (
            "@typescript-eslint/adjacent-overload-signatures",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/array-type", RuleEntry::error()),
        ("@typescript-eslint/ban-tslint-comment", RuleEntry::error()),
        (
            "@typescript-eslint/class-literal-property-style",
            RuleEntry::error(),
        ),
        (
            "@typescript-eslint/consistent-generic-constructors",
            RuleEntry::error(),
        ),
        (
            "@typescript-eslint/consistent-indexed-object-style",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/consistent-type-assertions", RuleEntry::error()),
        (
            "@typescript-eslint/consistent-type-definitions",
            RuleEntry::error(),
        ),
        (
            "@typescript-eslint/no-confusing-non-null-assertion",
            RuleEntry::error(),
        ),
        ("no-empty-function", RuleEntry::off()),
        ("@typescript-eslint/no-empty-function", RuleEntry::error()),
        ("@typescript-eslint/no-inferrable-types", RuleEntry::error()),
        ("@typescript-eslint/prefer-for-of", RuleEntry::error()),
        ("@typescript-eslint/prefer-function-type", RuleEntry::error()),
    ])
}

fn stylistic_type_checked_extras() -> RuleMap {
    rule_map([
        ("dot-notation", RuleEntry::off()),
        ("@typescript-eslint/dot-notation", RuleEntry::error()),
        (
            "@typescript-eslint/non-nullable-type-assertion-style",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/prefer-nullish-coalescing", RuleEntry::error()),
        ("@typescript-eslint/prefer-optional-chain", RuleEntry::error()),
        (
            "@typescript-eslint/prefer-string-starts-ends-with",
            RuleEntry::error(),
        ),
    ])
}

pub(crate) fn recommended_rules() -> RuleMap {
    overlay([
        Some(&eslint_recommended_rules()),
        Some(&recommended_plugin_rules()),
    ])
}

pub(crate) fn recommended_type_checked_rules() -> RuleMap {
    overlay([Some(&recommended_rules()), Some(&type_checked_extras())])
}

pub(crate) fn recommended_type_checked_only_rules() -> RuleMap {
    overlay([Some(&eslint_recommended_rules()), Some(&type_checked_extras())])
}

pub(crate) fn strict_rules() -> RuleMap {
    overlay([Some(&recommended_rules()), Some(&strict_extras())])
}

pub(crate) fn strict_type_checked_rules() -> RuleMap {
    overlay([
        Some(&strict_rules()),
        Some(&type_checked_extras()),
        Some(&strict_type_checked_extras()),
    ])
}

pub(crate) fn strict_type_checked_only_rules() -> RuleMap {
    overlay([
        Some(&eslint_recommended_rules()),
        Some(&type_checked_extras()),
        Some(&strict_type_checked_extras()),
    ])
}

pub(crate) fn stylistic_rules() -> RuleMap {
    overlay([
        Some(&eslint_recommended_rules()),
        Some(&stylistic_plugin_rules()),
    ])
}

pub(crate) fn stylistic_type_checked_rules() -> RuleMap {
    overlay([Some(&stylistic_rules()), Some(&stylistic_type_checked_extras())])
}

pub(crate) fn stylistic_type_checked_only_rules() -> RuleMap {
    overlay([
        Some(&eslint_recommended_rules()),
        Some(&stylistic_type_checked_extras()),
    ])
}

/// Every plugin rule at error severity; core off-switches stay off
pub(crate) fn all_rules() -> RuleMap {
    let combined = overlay([
        Some(&strict_type_checked_rules()),
        Some(&stylistic_type_checked_rules()),
    ]);
    combined
        .into_iter()
        .map(|(name, entry)| {
            if name.starts_with("@typescript-eslint/") {
                (name, RuleEntry::error())
            } else {
                (name, entry)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{install_test_package, test_context_in};
    use crate::options::{ConfigOptions, TsPreset, TsStylisticPreset};
    use tatami_core::{Severity, Toggle};
    use tempfile::TempDir;

    fn ts_context() -> (TempDir, AssemblyContext) {
        let dir = TempDir::new().unwrap();
        install_test_package(dir.path(), "typescript");
        let ctx = test_context_in(ConfigOptions::default(), dir.path());
        (dir, ctx)
    }

    #[test]
    fn emits_setup_and_rules_with_default_files() {
        let (_dir, ctx) = ts_context();
        let items = build(&TsOptions::default(), &ctx).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "tatami/ts/setup");
        assert_eq!(items[1].name, "tatami/ts/rules");

        let files = items[0].files.as_ref().unwrap();
        assert!(files.iter().any(|f| f.contains("ts")));

        let language = items[0].language_options.as_ref().unwrap();
        assert_eq!(language.parser.as_deref(), Some("@typescript-eslint/parser"));
    }

    #[test]
    fn explicit_files_replace_the_default_set() {
        let (_dir, ctx) = ts_context();
        let options = TsOptions {
            files: Some(vec!["src/**/*.ts".to_string()]),
            extra_files: Some(vec!["ignored/**".to_string()]),
            ..TsOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert_eq!(
            items[0].files.as_ref().unwrap(),
            &vec!["src/**/*.ts".to_string()]
        );
    }

    #[test]
    fn extra_files_extend_the_default_set() {
        let (_dir, ctx) = ts_context();
        let options = TsOptions {
            extra_files: Some(vec!["**/*.vue".to_string()]),
            ..TsOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        let files = items[0].files.as_ref().unwrap();
        assert!(files.contains(&"**/*.vue".to_string()));
    }

    #[test]
    fn default_preset_softens_no_unused_vars() {
        let rules = default_rules();
        assert_eq!(rules["@typescript-eslint/no-unused-vars"].severity, Severity::Warn);
        assert_eq!(rules["@typescript-eslint/no-explicit-any"], RuleEntry::off());
        // strict base is still present
        assert_eq!(
            rules["@typescript-eslint/no-non-null-assertion"],
            RuleEntry::error()
        );
    }

    #[test]
    fn stylistic_preset_layers_on_top() {
        let (_dir, ctx) = ts_context();
        let options = TsOptions {
            preset: TsPreset::Recommended,
            stylistic_preset: TsStylisticPreset::Stylistic,
            ..TsOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        let rules = &items[1].rules;
        assert!(rules.contains_key("@typescript-eslint/ban-ts-comment"));
        assert!(rules.contains_key("@typescript-eslint/prefer-for-of"));
    }

    #[test]
    fn return_type_toggle_adds_a_third_fragment() {
        let (_dir, ctx) = ts_context();
        let options = TsOptions {
            explicit_function_return_type: Some(Toggle::Enabled(true)),
            ..TsOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].name, "tatami/ts/explicit-function-return-type");
        assert!(
            items[2]
                .rules
                .contains_key("@typescript-eslint/explicit-function-return-type")
        );
        // inherits the group's file globs
        assert_eq!(items[2].files, items[0].files);
    }

    #[test]
    fn type_checked_presets_enable_await_thenable() {
        let rules = recommended_type_checked_rules();
        assert_eq!(rules["@typescript-eslint/await-thenable"], RuleEntry::error());
        assert!(!recommended_rules().contains_key("@typescript-eslint/await-thenable"));
    }

    #[test]
    fn all_preset_keeps_core_rules_off() {
        let rules = all_rules();
        assert_eq!(rules["no-undef"], RuleEntry::off());
        assert_eq!(rules["@typescript-eslint/no-explicit-any"], RuleEntry::error());
    }
}
