//! Disables group
//!
//! Late-position relaxations for file kinds where the strict defaults get in
//! the way: CommonJS files, declaration files, CLIs, scripts, config files,
//! tests, and stories. Runs last so it wins over every other group.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::DisablesOptions;
use tatami_core::{ConfigFragment, Result, RuleEntry, globs, rule_map};

const RETURN_TYPE: &str = "@typescript-eslint/explicit-function-return-type";

pub(crate) fn build(options: &DisablesOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let src = globs::SRC;
    let ext = globs::SRC_EXT;

    let items = vec![
        ConfigFragment {
            name: "tatami/disables/cjs".to_string(),
            files: Some(vec!["**/*.js".to_string(), "**/*.cjs".to_string()]),
            rules: rule_map([("@typescript-eslint/no-require-imports", RuleEntry::off())]),
            ..ConfigFragment::default()
        },
        ConfigFragment {
            name: "tatami/disables/dts".to_string(),
            files: Some(vec!["**/*.d.?([cm])ts".to_string()]),
            rules: rule_map([
                ("import-x/no-duplicates", RuleEntry::off()),
                ("no-restricted-syntax", RuleEntry::off()),
            ]),
            ..ConfigFragment::default()
        },
        ConfigFragment {
            name: "tatami/disables/cli".to_string(),
            files: Some(vec![format!("**/cli/{src}"), format!("**/cli.{ext}")]),
            rules: rule_map([("no-console", RuleEntry::off())]),
            ..ConfigFragment::default()
        },
        ConfigFragment {
            name: "tatami/disables/scripts".to_string(),
            files: Some(vec![format!("**/scripts/{src}")]),
            rules: rule_map([
                ("no-console", RuleEntry::off()),
                (RETURN_TYPE, RuleEntry::off()),
            ]),
            ..ConfigFragment::default()
        },
        ConfigFragment {
            name: "tatami/disables/config-files".to_string(),
            files: Some(vec![
                format!("**/*.config.{ext}"),
                format!("**/*.config.*.{ext}"),
            ]),
            rules: rule_map([
                ("no-console", RuleEntry::off()),
                (RETURN_TYPE, RuleEntry::off()),
            ]),
            ..ConfigFragment::default()
        },
        ConfigFragment {
            name: "tatami/disables/tests".to_string(),
            files: Some(vec![
                format!("**/*.{{bench,fixture,spec,test}}.{ext}"),
                format!("**/{{tests,__tests__}}/**/*.{ext}"),
            ]),
            rules: rule_map([(RETURN_TYPE, RuleEntry::off())]),
            ..ConfigFragment::default()
        },
        ConfigFragment {
            name: "tatami/disables/stories".to_string(),
            files: Some(vec![format!("**/*.stories.{ext}")]),
            rules: rule_map([
                ("no-console", RuleEntry::off()),
                (RETURN_TYPE, RuleEntry::off()),
            ]),
            ..ConfigFragment::default()
        },
    ];

    apply_finalize(options.on_finalize.as_ref(), "disables", items, ctx)
}
