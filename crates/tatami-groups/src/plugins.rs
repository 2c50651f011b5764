//! Plugin registry
//!
//! Maps registry names to plugin handles. Groups resolve their plugins here
//! lazily, through [`AssemblyContext::load_plugin`](crate::context::AssemblyContext::load_plugin),
//! so a disabled group never touches its plugins and an enabled group fails
//! fast when a plugin cannot be provided.
//!
//! Preset rule tables live next to the group that owns them; this module
//! only wires them together.

use crate::groups;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tatami_core::{PluginHandle, PluginLoader, Result, TatamiError};

// Parser package specifiers referenced from language options
pub(crate) const TS_PARSER: &str = "@typescript-eslint/parser";
pub(crate) const SVELTE_PARSER: &str = "svelte-eslint-parser";
pub(crate) const JSONC_PARSER: &str = "jsonc-eslint-parser";

// =============================================================================
// Handles
// =============================================================================

static JS: PluginHandle = PluginHandle {
    name: "js",
    package: "@eslint/js",
    requires: &[],
    presets: &[
        ("recommended", groups::js::recommended_rules),
        ("all", groups::js::all_rules),
    ],
};

static IMPORT_X: PluginHandle = PluginHandle {
    name: "import-x",
    package: "eslint-plugin-import-x",
    requires: &[],
    presets: &[],
};

static TS: PluginHandle = PluginHandle {
    name: "@typescript-eslint",
    package: "typescript-eslint",
    requires: &["typescript"],
    presets: &[
        ("all", groups::ts::all_rules),
        ("recommended", groups::ts::recommended_rules),
        ("recommended-type-checked", groups::ts::recommended_type_checked_rules),
        ("recommended-type-checked-only", groups::ts::recommended_type_checked_only_rules),
        ("strict", groups::ts::strict_rules),
        ("strict-type-checked", groups::ts::strict_type_checked_rules),
        ("strict-type-checked-only", groups::ts::strict_type_checked_only_rules),
        ("stylistic", groups::ts::stylistic_rules),
        ("stylistic-type-checked", groups::ts::stylistic_type_checked_rules),
        ("stylistic-type-checked-only", groups::ts::stylistic_type_checked_only_rules),
    ],
};

static NODE: PluginHandle = PluginHandle {
    name: "n",
    package: "eslint-plugin-n",
    requires: &[],
    presets: &[
        ("recommended", groups::node::recommended_rules),
        ("all", groups::node::all_rules),
    ],
};

static JSDOC: PluginHandle = PluginHandle {
    name: "jsdoc",
    package: "eslint-plugin-jsdoc",
    requires: &[],
    presets: &[],
};

static REGEXP: PluginHandle = PluginHandle {
    name: "regexp",
    package: "eslint-plugin-regexp",
    requires: &[],
    presets: &[
        ("recommended", groups::regexp::recommended_rules),
        ("all", groups::regexp::all_rules),
    ],
};

static PERFECTIONIST: PluginHandle = PluginHandle {
    name: "perfectionist",
    package: "eslint-plugin-perfectionist",
    requires: &[],
    presets: &[
        ("recommended-alphabetical", groups::perfectionist::recommended_alphabetical_rules),
        ("recommended-natural", groups::perfectionist::recommended_natural_rules),
        ("recommended-line-length", groups::perfectionist::recommended_line_length_rules),
        ("recommended-custom", groups::perfectionist::recommended_custom_rules),
    ],
};

static STYLISTIC: PluginHandle = PluginHandle {
    name: "@stylistic",
    package: "@stylistic/eslint-plugin",
    requires: &[],
    presets: &[],
};

static JSONC: PluginHandle = PluginHandle {
    name: "jsonc",
    package: "eslint-plugin-jsonc",
    requires: &[],
    presets: &[],
};

static JSX_A11Y: PluginHandle = PluginHandle {
    name: "jsx-a11y",
    package: "eslint-plugin-jsx-a11y",
    requires: &[],
    presets: &[
        ("recommended", groups::jsx::a11y_recommended_rules),
        ("strict", groups::jsx::a11y_strict_rules),
    ],
};

static REACT: PluginHandle = PluginHandle {
    name: "@eslint-react",
    package: "@eslint-react/eslint-plugin",
    requires: &["react"],
    presets: &[
        ("recommended", groups::react::recommended_rules),
        ("recommended-typescript", groups::react::recommended_typescript_rules),
    ],
};

static REACT_HOOKS: PluginHandle = PluginHandle {
    name: "react-hooks",
    package: "eslint-plugin-react-hooks",
    requires: &["react"],
    presets: &[],
};

static SVELTE: PluginHandle = PluginHandle {
    name: "svelte",
    package: "eslint-plugin-svelte",
    requires: &["svelte"],
    presets: &[
        ("recommended", groups::svelte::recommended_rules),
        ("prettier", groups::svelte::prettier_rules),
    ],
};

static VITEST: PluginHandle = PluginHandle {
    name: "vitest",
    package: "@vitest/eslint-plugin",
    requires: &["vitest"],
    presets: &[
        ("recommended", groups::test::vitest_recommended_rules),
        ("all", groups::test::vitest_all_rules),
    ],
};

static PRETTIER: PluginHandle = PluginHandle {
    name: "prettier",
    package: "eslint-plugin-prettier",
    requires: &["prettier"],
    presets: &[],
};

// =============================================================================
// Registry
// =============================================================================

static REGISTRY: Lazy<IndexMap<&'static str, PluginLoader>> = Lazy::new(|| {
    let mut registry: IndexMap<&'static str, PluginLoader> = IndexMap::new();
    registry.insert(JS.name, || Ok(&JS));
    registry.insert(IMPORT_X.name, || Ok(&IMPORT_X));
    registry.insert(TS.name, || Ok(&TS));
    registry.insert(NODE.name, || Ok(&NODE));
    registry.insert(JSDOC.name, || Ok(&JSDOC));
    registry.insert(REGEXP.name, || Ok(&REGEXP));
    registry.insert(PERFECTIONIST.name, || Ok(&PERFECTIONIST));
    registry.insert(STYLISTIC.name, || Ok(&STYLISTIC));
    registry.insert(JSONC.name, || Ok(&JSONC));
    registry.insert(JSX_A11Y.name, || Ok(&JSX_A11Y));
    registry.insert(REACT.name, || Ok(&REACT));
    registry.insert(REACT_HOOKS.name, || Ok(&REACT_HOOKS));
    registry.insert(SVELTE.name, || Ok(&SVELTE));
    registry.insert(VITEST.name, || Ok(&VITEST));
    registry.insert(PRETTIER.name, || Ok(&PRETTIER));
    registry
});

/// Resolve a registered plugin by name
pub fn load(name: &str) -> Result<&'static PluginHandle> {
    let loader = REGISTRY
        .get(name)
        .ok_or_else(|| TatamiError::plugin_not_found(name))?;
    loader()
}

/// Names of every registered plugin, in registration order
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}
