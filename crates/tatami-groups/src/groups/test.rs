//! Test group
//!
//! Relaxations for test files, plus Vitest-specific rules when the runner is
//! present (or the whole suite is forced on).

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::TestOptions;
use serde_json::json;
use tatami_core::{
    ConfigFragment, Result, RuleEntry, RuleMap, globs, normalize, overlay, resolve_preset,
    rule_map,
};

pub(crate) fn build(options: &TestOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let files = options
        .files
        .clone()
        .unwrap_or_else(|| globs::patterns(globs::TESTS));

    let vitest = normalize(
        options.vitest.clone(),
        ctx.enable_all_groups || ctx.detected.vitest,
    );

    let mut items = Vec::new();
    let mut vitest_rules = None;
    if vitest.enabled {
        let plugin = ctx.load_plugin("vitest")?;
        let mut plugins = indexmap::IndexMap::new();
        plugins.insert(plugin.name.to_string(), plugin.package.to_string());
        items.push(ConfigFragment {
            name: "tatami/test/setup".to_string(),
            plugins,
            ..ConfigFragment::default()
        });

        let preset = resolve_preset(plugin, vitest.options.preset.kind(), default_vitest_rules)?;
        vitest_rules = Some(overlay([Some(&preset), vitest.options.rules.as_ref()]));
    }

    let relaxed = rule_map([(
        "@typescript-eslint/explicit-function-return-type",
        RuleEntry::off(),
    )]);

    items.push(ConfigFragment {
        name: "tatami/test/rules".to_string(),
        files: Some(files),
        rules: overlay([
            vitest_rules.as_ref(),
            Some(&relaxed),
            options.rules.as_ref(),
        ]),
        ..ConfigFragment::default()
    });
    items.push(ConfigFragment {
        name: "tatami/test/rules-fixture".to_string(),
        files: Some(globs::patterns(globs::TESTS_FIXTURE)),
        rules: relaxed,
        ..ConfigFragment::default()
    });

    apply_finalize(options.on_finalize.as_ref(), "test", items, ctx)
}

pub(crate) fn default_vitest_rules() -> RuleMap {
    rule_map([
        (
            "vitest/consistent-test-it",
            RuleEntry::error_with([json!({ "fn": "test", "withinDescribe": "test" })]),
        ),
        (
            "vitest/consistent-vitest-vi",
            RuleEntry::error_with([json!({ "fn": "vi" })]),
        ),
        ("vitest/no-identical-title", RuleEntry::error()),
        ("vitest/no-import-node-test", RuleEntry::error()),
        ("vitest/prefer-hooks-in-order", RuleEntry::error()),
    ])
}

pub(crate) fn vitest_recommended_rules() -> RuleMap {
    rule_map([
        ("vitest/expect-expect", RuleEntry::error()),
        ("vitest/no-commented-out-tests", RuleEntry::error()),
        ("vitest/no-identical-title", RuleEntry::error()),
        ("vitest/no-import-node-test", RuleEntry::error()),
        (
            "vitest/require-local-test-context-for-concurrent-snapshots",
            RuleEntry::error(),
        ),
        ("vitest/valid-describe-callback", RuleEntry::error()),
        ("vitest/valid-expect", RuleEntry::error()),
        ("vitest/valid-title", RuleEntry::error()),
    ])
}

pub(crate) fn vitest_all_rules() -> RuleMap {
    overlay([Some(&vitest_recommended_rules()), Some(&default_vitest_rules())])
        .into_keys()
        .map(|name| (name, RuleEntry::error()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{install_test_package, test_context, test_context_in};
    use crate::options::ConfigOptions;
    use tempfile::TempDir;

    #[test]
    fn without_vitest_only_relaxations_remain() {
        let ctx = test_context();
        let items = build(&TestOptions::default(), &ctx).unwrap();

        let names: Vec<&str> = items.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["tatami/test/rules", "tatami/test/rules-fixture"]);
        assert_eq!(
            items[0].rules["@typescript-eslint/explicit-function-return-type"],
            RuleEntry::off()
        );
    }

    #[test]
    fn detected_vitest_adds_the_plugin_and_rules() {
        let dir = TempDir::new().unwrap();
        install_test_package(dir.path(), "vitest");
        let ctx = test_context_in(ConfigOptions::default(), dir.path());

        let items = build(&TestOptions::default(), &ctx).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "tatami/test/setup");
        assert!(items[0].plugins.contains_key("vitest"));
        assert!(items[1].rules.contains_key("vitest/consistent-test-it"));
    }

    #[test]
    fn fixture_files_get_their_own_relaxations() {
        let ctx = test_context();
        let items = build(&TestOptions::default(), &ctx).unwrap();
        let fixture = items.last().unwrap();
        assert!(
            fixture
                .files
                .as_ref()
                .unwrap()
                .iter()
                .any(|f| f.contains("fixtures"))
        );
    }

    #[test]
    fn custom_test_files_replace_the_default_globs() {
        let ctx = test_context();
        let options = TestOptions {
            files: Some(vec!["checks/**/*.ts".to_string()]),
            ..TestOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert_eq!(
            items[0].files.as_ref().unwrap(),
            &vec!["checks/**/*.ts".to_string()]
        );
    }
}
