//! Regexp group
//!
//! Regular-expression correctness and hygiene via `eslint-plugin-regexp`.

use crate::context::AssemblyContext;
use crate::hooks::apply_finalize;
use crate::options::RegexpOptions;
use tatami_core::{ConfigFragment, Result, RuleEntry, RuleMap, overlay, resolve_preset, rule_map};

pub(crate) fn build(options: &RegexpOptions, ctx: &AssemblyContext) -> Result<Vec<ConfigFragment>> {
    let plugin = ctx.load_plugin("regexp")?;
    let preset_rules = resolve_preset(plugin, options.preset.kind(), default_rules)?;

    let mut plugins = indexmap::IndexMap::new();
    plugins.insert(plugin.name.to_string(), plugin.package.to_string());

    let items = vec![ConfigFragment {
        name: "tatami/regexp/rules".to_string(),
        plugins,
        rules: overlay([Some(&preset_rules), options.rules.as_ref()]),
        ..ConfigFragment::default()
    }];

    apply_finalize(options.on_finalize.as_ref(), "regexp", items, ctx)
}

/// The default preset is the plugin's recommended set unchanged
pub(crate) fn default_rules() -> RuleMap {
    recommended_rules()
}

pub(crate) fn recommended_rules() -> RuleMap {
    rule_map([
        ("regexp/match-any", RuleEntry::error()),
        ("regexp/negation", RuleEntry::error()),
        ("regexp/no-contradiction-with-assertion", RuleEntry::error()),
        ("regexp/no-dupe-characters-character-class", RuleEntry::error()),
        ("regexp/no-dupe-disjunctions", RuleEntry::error()),
        ("regexp/no-empty-alternative", RuleEntry::warn()),
        ("regexp/no-empty-capturing-group", RuleEntry::error()),
        ("regexp/no-empty-character-class", RuleEntry::error()),
        ("regexp/no-empty-group", RuleEntry::error()),
        ("regexp/no-empty-lookarounds-assertion", RuleEntry::error()),
        ("regexp/no-escape-backspace", RuleEntry::error()),
        ("regexp/no-invalid-regexp", RuleEntry::error()),
        ("regexp/no-invisible-character", RuleEntry::error()),
        ("regexp/no-lazy-ends", RuleEntry::warn()),
        ("regexp/no-legacy-features", RuleEntry::error()),
        ("regexp/no-misleading-capturing-group", RuleEntry::error()),
        ("regexp/no-misleading-unicode-character", RuleEntry::error()),
        ("regexp/no-missing-g-flag", RuleEntry::error()),
        ("regexp/no-non-standard-flag", RuleEntry::error()),
        ("regexp/no-obscure-range", RuleEntry::error()),
        ("regexp/no-optional-assertion", RuleEntry::error()),
        ("regexp/no-potentially-useless-backreference", RuleEntry::warn()),
        ("regexp/no-super-linear-backtracking", RuleEntry::error()),
        ("regexp/no-trivially-nested-assertion", RuleEntry::error()),
        ("regexp/no-trivially-nested-quantifier", RuleEntry::error()),
        ("regexp/no-unused-capturing-group", RuleEntry::error()),
        ("regexp/no-useless-assertions", RuleEntry::error()),
        ("regexp/no-useless-backreference", RuleEntry::error()),
        ("regexp/no-useless-character-class", RuleEntry::error()),
        ("regexp/no-useless-dollar-replacements", RuleEntry::error()),
        ("regexp/no-useless-escape", RuleEntry::error()),
        ("regexp/no-useless-flag", RuleEntry::warn()),
        ("regexp/no-useless-lazy", RuleEntry::error()),
        ("regexp/no-useless-non-capturing-group", RuleEntry::error()),
        ("regexp/no-useless-quantifier", RuleEntry::error()),
        ("regexp/no-useless-range", RuleEntry::error()),
        ("regexp/no-useless-two-nums-quantifier", RuleEntry::error()),
        ("regexp/no-zero-quantifier", RuleEntry::error()),
        ("regexp/optimal-lookaround-quantifier", RuleEntry::warn()),
        ("regexp/optimal-quantifier-concatenation", RuleEntry::error()),
        ("regexp/prefer-character-class", RuleEntry::error()),
        ("regexp/prefer-d", RuleEntry::error()),
        ("regexp/prefer-plus-quantifier", RuleEntry::error()),
        ("regexp/prefer-question-quantifier", RuleEntry::error()),
        ("regexp/prefer-range", RuleEntry::error()),
        ("regexp/prefer-set-operation", RuleEntry::error()),
        ("regexp/prefer-star-quantifier", RuleEntry::error()),
        ("regexp/prefer-unicode-codepoint-escapes", RuleEntry::error()),
        ("regexp/prefer-w", RuleEntry::error()),
        ("regexp/simplify-set-operations", RuleEntry::error()),
        ("regexp/sort-flags", RuleEntry::error()),
        ("regexp/strict", RuleEntry::error()),
        ("regexp/use-ignore-case", RuleEntry::error()),
    ])
}

pub(crate) fn all_rules() -> RuleMap {
    recommended_rules()
        .into_keys()
        .map(|name| (name, RuleEntry::error()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;
    use tatami_core::Severity;

    #[test]
    fn default_preset_is_recommended() {
        let ctx = test_context();
        let items = build(&RegexpOptions::default(), &ctx).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].rules["regexp/no-super-linear-backtracking"],
            RuleEntry::error()
        );
        assert_eq!(items[0].rules["regexp/no-useless-flag"].severity, Severity::Warn);
    }

    #[test]
    fn all_preset_raises_warns_to_error() {
        let rules = all_rules();
        assert_eq!(rules["regexp/no-useless-flag"], RuleEntry::error());
    }

    #[test]
    fn custom_rules_override_the_preset() {
        let ctx = test_context();
        let options = RegexpOptions {
            rules: Some(rule_map([("regexp/strict", RuleEntry::off())])),
            ..RegexpOptions::default()
        };
        let items = build(&options, &ctx).unwrap();
        assert_eq!(items[0].rules["regexp/strict"], RuleEntry::off());
    }
}
