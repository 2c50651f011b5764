//! JS group
//!
//! The core JavaScript rules. Always enabled: every other group layers on
//! top of the language setup this group emits (globals, ECMAScript version,
//! module source type).

use crate::context::AssemblyContext;
use crate::globals;
use crate::hooks::apply_finalize;
use crate::options::JsOptions;
use serde_json::json;
use tatami_core::{
    ConfigFragment, EcmaVersion, LanguageOptions, Result, RuleEntry, RuleMap, SourceType,
    overlay, resolve_preset, rule_map,
};

pub(crate) fn build(options: &JsOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let plugin = ctx.load_plugin("js")?;
    let preset_rules = resolve_preset(plugin, options.preset.kind(), default_rules)?;

    let mut declared = globals::default_globals();
    if let Some(custom) = &options.globals {
        for (name, access) in custom {
            declared.insert(name.clone(), *access);
        }
    }

    let items = vec![
        ConfigFragment {
            name: "tatami/js/setup".to_string(),
            language_options: Some(LanguageOptions {
                ecma_version: Some(EcmaVersion::Latest),
                source_type: Some(SourceType::Module),
                parser_options: Some(json!({
                    "ecmaFeatures": { "jsx": true },
                    "ecmaVersion": "latest",
                    "sourceType": "module",
                })),
                globals: declared,
                ..LanguageOptions::default()
            }),
            ..ConfigFragment::default()
        },
        ConfigFragment {
            name: "tatami/js/rules".to_string(),
            rules: overlay([Some(&preset_rules), options.rules.as_ref()]),
            ..ConfigFragment::default()
        },
    ];

    apply_finalize(options.on_finalize.as_ref(), "js", items, ctx)
}

/// Curated defaults: the recommended set plus opinionated additions
pub(crate) fn default_rules() -> RuleMap {
    let curated = rule_map([
        // Possible problems
        ("array-callback-return", RuleEntry::error()),
        (
            "no-unused-vars",
            RuleEntry::warn_with([json!({
                "argsIgnorePattern": "^_",
                "ignoreRestSiblings": true,
                "varsIgnorePattern": "[iI]gnored",
            })]),
        ),
        // Suggestions
        ("accessor-pairs", RuleEntry::error()),
        ("default-case-last", RuleEntry::error()),
        ("dot-notation", RuleEntry::error()),
        (
            "eqeqeq",
            RuleEntry::error_with([json!("always"), json!({ "null": "ignore" })]),
        ),
        ("no-alert", RuleEntry::warn()),
        ("no-array-constructor", RuleEntry::error()),
        (
            "no-console",
            RuleEntry::warn_with([json!({ "allow": ["error", "info", "warn"] })]),
        ),
        ("no-empty", RuleEntry::error_with([json!({ "allowEmptyCatch": true })])),
        ("no-eval", RuleEntry::error()),
        ("no-implied-eval", RuleEntry::error()),
        ("no-lone-blocks", RuleEntry::error()),
        ("no-new-func", RuleEntry::error()),
        ("no-script-url", RuleEntry::warn()),
        ("no-sequences", RuleEntry::error()),
        ("no-unneeded-ternary", RuleEntry::error()),
        ("no-unused-expressions", RuleEntry::error()),
        ("no-useless-call", RuleEntry::error()),
        ("no-useless-computed-key", RuleEntry::error()),
        ("no-useless-concat", RuleEntry::error()),
        ("no-useless-constructor", RuleEntry::error()),
        ("no-useless-rename", RuleEntry::error()),
        ("no-useless-return", RuleEntry::error()),
        ("no-var", RuleEntry::error()),
        ("object-shorthand", RuleEntry::error()),
        (
            "prefer-const",
            RuleEntry::error_with([json!({ "destructuring": "all", "ignoreReadBeforeAssign": true })]),
        ),
        ("prefer-exponentiation-operator", RuleEntry::error()),
        (
            "prefer-regex-literals",
            RuleEntry::error_with([json!({ "disallowRedundantWrapping": true })]),
        ),
        ("prefer-rest-params", RuleEntry::error()),
        ("prefer-spread", RuleEntry::error()),
        ("prefer-template", RuleEntry::error()),
        ("symbol-description", RuleEntry::error()),
        ("yoda", RuleEntry::error_with([json!("never")])),
    ]);

    overlay([Some(&recommended_rules()), Some(&curated)])
}

/// The core recommended set
pub(crate) fn recommended_rules() -> RuleMap {
    let names = [
        "constructor-super",
        "for-direction",
        "getter-return",
        "no-async-promise-executor",
        "no-case-declarations",
        "no-class-assign",
        "no-compare-neg-zero",
        "no-cond-assign",
        "no-const-assign",
        "no-constant-binary-expression",
        "no-constant-condition",
        "no-control-regex",
        "no-debugger",
        "no-delete-var",
        "no-dupe-args",
        "no-dupe-class-members",
        "no-dupe-else-if",
        "no-dupe-keys",
        "no-duplicate-case",
        "no-empty",
        "no-empty-character-class",
        "no-empty-pattern",
        "no-empty-static-block",
        "no-ex-assign",
        "no-extra-boolean-cast",
        "no-fallthrough",
        "no-func-assign",
        "no-global-assign",
        "no-import-assign",
        "no-invalid-regexp",
        "no-irregular-whitespace",
        "no-loss-of-precision",
        "no-misleading-character-class",
        "no-new-native-nonconstructor",
        "no-nonoctal-decimal-escape",
        "no-obj-calls",
        "no-octal",
        "no-prototype-builtins",
        "no-redeclare",
        "no-regex-spaces",
        "no-self-assign",
        "no-setter-return",
        "no-shadow-restricted-names",
        "no-sparse-arrays",
        "no-this-before-super",
        "no-undef",
        "no-unexpected-multiline",
        "no-unreachable",
        "no-unsafe-finally",
        "no-unsafe-negation",
        "no-unsafe-optional-chaining",
        "no-unused-labels",
        "no-unused-private-class-members",
        "no-unused-vars",
        "no-useless-backreference",
        "no-useless-catch",
        "no-useless-escape",
        "no-with",
        "require-yield",
        "use-isnan",
        "valid-typeof",
    ];
    names
        .into_iter()
        .map(|name| (name.to_string(), RuleEntry::error()))
        .collect()
}

/// Every known core rule, at error severity
pub(crate) fn all_rules() -> RuleMap {
    default_rules()
        .into_keys()
        .map(|name| (name, RuleEntry::error()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;
    use crate::options::StandardPreset;
    use tatami_core::Severity;

    #[test]
    fn emits_setup_then_rules() {
        let ctx = test_context();
        let items = build(&JsOptions::default(), &ctx).unwrap();

        assert_eq!(items[0].name, "tatami/js/setup");
        assert_eq!(items[1].name, "tatami/js/rules");

        let language = items[0].language_options.as_ref().unwrap();
        assert_eq!(language.ecma_version, Some(EcmaVersion::Latest));
        assert!(language.globals.contains_key("window"));
        assert!(language.globals.contains_key("process"));
    }

    #[test]
    fn default_preset_layers_curated_rules_over_recommended() {
        let rules = default_rules();
        // from the recommended base
        assert_eq!(rules["no-debugger"], RuleEntry::error());
        // curated override of a recommended rule
        assert_eq!(rules["no-unused-vars"].severity, Severity::Warn);
        // curated addition
        assert!(rules.contains_key("prefer-template"));
    }

    #[test]
    fn custom_rules_override_the_preset() {
        let ctx = test_context();
        let options = JsOptions {
            rules: Some(rule_map([("no-console", RuleEntry::off())])),
            ..JsOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert_eq!(items[1].rules["no-console"], RuleEntry::off());
    }

    #[test]
    fn custom_globals_extend_the_default_set() {
        let ctx = test_context();
        let mut globals = indexmap::IndexMap::new();
        globals.insert("myGlobal".to_string(), tatami_core::GlobalAccess::Writable);

        let options = JsOptions {
            globals: Some(globals),
            ..JsOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        let language = items[0].language_options.as_ref().unwrap();
        assert_eq!(
            language.globals.get("myGlobal"),
            Some(&tatami_core::GlobalAccess::Writable)
        );
    }

    #[test]
    fn none_preset_emits_only_custom_rules() {
        let ctx = test_context();
        let options = JsOptions {
            preset: StandardPreset::None,
            rules: Some(rule_map([("no-var", RuleEntry::error())])),
            ..JsOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert_eq!(items[1].rules.len(), 1);
    }
}
