//! User-facing configuration options
//!
//! [`ConfigOptions`] is the whole input surface of the composer. Every group
//! accepts `true` / `false` / an options object (see
//! [`Toggle`](tatami_core::Toggle)); [`ResolvedOptions`] is the normalized
//! form the builders and hooks read, with every group collapsed to an
//! `enabled` flag plus materialized options.

use crate::context::DetectedPackages;
use crate::hooks::FinalizeHook;
use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use tatami_core::{ConfigFragment, GlobalAccess, PresetKind, Resolved, RuleMap, Toggle, normalize};

// =============================================================================
// Group names and registry order
// =============================================================================

/// The built-in config groups
///
/// [`GroupName::ALL`] is the assembly order: enabled groups always emit their
/// fragments in this sequence, regardless of how the options were written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GroupName {
    Ignores,
    Js,
    Imports,
    Ts,
    Node,
    Jsdoc,
    Regexp,
    Perfectionist,
    Stylistic,
    Json,
    Jsx,
    React,
    Svelte,
    Test,
    Prettier,
    Disables,
}

impl GroupName {
    /// Every group, in assembly order
    pub const ALL: [GroupName; 16] = [
        GroupName::Ignores,
        GroupName::Js,
        GroupName::Imports,
        GroupName::Ts,
        GroupName::Node,
        GroupName::Jsdoc,
        GroupName::Regexp,
        GroupName::Perfectionist,
        GroupName::Stylistic,
        GroupName::Json,
        GroupName::Jsx,
        GroupName::React,
        GroupName::Svelte,
        GroupName::Test,
        GroupName::Prettier,
        GroupName::Disables,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupName::Ignores => "ignores",
            GroupName::Js => "js",
            GroupName::Imports => "imports",
            GroupName::Ts => "ts",
            GroupName::Node => "node",
            GroupName::Jsdoc => "jsdoc",
            GroupName::Regexp => "regexp",
            GroupName::Perfectionist => "perfectionist",
            GroupName::Stylistic => "stylistic",
            GroupName::Json => "json",
            GroupName::Jsx => "jsx",
            GroupName::React => "react",
            GroupName::Svelte => "svelte",
            GroupName::Test => "test",
            GroupName::Prettier => "prettier",
            GroupName::Disables => "disables",
        }
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Root options
// =============================================================================

/// Top-level composer options
///
/// Each group field follows the same convention: absent means "use the
/// group's default", a boolean forces the group on or off, and an options
/// object customizes the group (and opts it in).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOptions {
    /// Enable every group by default. Individual groups can still be
    /// disabled explicitly.
    pub enable_all_groups: bool,

    /// Extra fragments appended verbatim after all group output
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_configs: Vec<ConfigFragment>,

    /// Hook over the final flattened fragment list
    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,

    /// Ignore patterns applied before any linting happens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignores: Option<Toggle<IgnoresOptions>>,

    /// Core JavaScript rules. This group cannot be disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js: Option<Toggle<JsOptions>>,

    /// Rules for import/export statements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imports: Option<Toggle<ImportsOptions>>,

    /// TypeScript support. Defaults to enabled when TypeScript is detected
    /// in the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Toggle<TsOptions>>,

    /// Node.js specific rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<Toggle<NodeOptions>>,

    /// JSDoc comment rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsdoc: Option<Toggle<JsdocOptions>>,

    /// Regular expression rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regexp: Option<Toggle<RegexpOptions>>,

    /// Sorted imports, exports and object keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perfectionist: Option<Toggle<PerfectionistOptions>>,

    /// Formatting-style rules. Suppressed automatically when an external
    /// formatter owns formatting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylistic: Option<Toggle<StylisticOptions>>,

    /// JSON / JSON5 / JSONC files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<Toggle<JsonOptions>>,

    /// JSX files, optionally with accessibility rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsx: Option<Toggle<JsxOptions>>,

    /// React rules. Defaults to enabled when React is detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub react: Option<Toggle<ReactOptions>>,

    /// Svelte rules. Defaults to enabled when Svelte is detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svelte: Option<Toggle<SvelteOptions>>,

    /// Test-file rules (Vitest)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<Toggle<TestOptions>>,

    /// Formatter conflict handling. Defaults to enabled when Prettier is
    /// detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prettier: Option<Toggle<PrettierOptions>>,

    /// Blanket rule disables for generated and auxiliary files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disables: Option<Toggle<DisablesOptions>>,
}

// =============================================================================
// Group options
// =============================================================================

/// Options for the `ignores` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct IgnoresOptions {
    /// Additional ignore patterns on top of the built-in excludes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_ignores: Option<Vec<String>>,

    /// Translate the project's `.gitignore` into ignore patterns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore: Option<Toggle<GitignoreOptions>>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Options for `.gitignore` translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GitignoreOptions {
    /// Gitignore files to read, relative to the project root
    pub files: Vec<String>,
    /// Error when a listed gitignore file is missing instead of skipping it
    pub strict: bool,
}

impl Default for GitignoreOptions {
    fn default() -> Self {
        Self {
            files: vec![".gitignore".to_string()],
            strict: true,
        }
    }
}

/// Options for the `js` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct JsOptions {
    /// Additional global identifiers to declare
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globals: Option<IndexMap<String, GlobalAccess>>,

    /// Which core rule preset to start from
    pub preset: StandardPreset,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Preset choice shared by the groups that offer `default` / `all` /
/// `recommended`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StandardPreset {
    /// No preset rules at all
    None,
    /// Curated defaults
    #[default]
    Default,
    /// Everything the plugin ships, at error severity
    All,
    /// The plugin's recommended set
    Recommended,
}

impl StandardPreset {
    pub(crate) fn kind(self) -> PresetKind {
        match self {
            StandardPreset::None => PresetKind::None,
            StandardPreset::Default => PresetKind::Default,
            StandardPreset::All => PresetKind::Named("all"),
            StandardPreset::Recommended => PresetKind::Named("recommended"),
        }
    }
}

/// Options for the `imports` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportsOptions {
    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Options for the `ts` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TsOptions {
    /// Glob patterns the TypeScript rules apply to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Additional glob patterns appended to the default file set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_files: Option<Vec<String>>,

    /// Extra parser options merged into the TypeScript parser setup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<serde_json::Value>,

    /// Which plugin rule preset to start from
    pub preset: TsPreset,

    /// Optional stylistic preset layered on top of `preset`
    pub stylistic_preset: TsStylisticPreset,

    /// Require explicit function return types in the matched files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_function_return_type: Option<Toggle<ReturnTypeOptions>>,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// TypeScript rule presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TsPreset {
    None,
    #[default]
    Default,
    All,
    Recommended,
    RecommendedTypeChecked,
    RecommendedTypeCheckedOnly,
    Strict,
    StrictTypeChecked,
    StrictTypeCheckedOnly,
}

impl TsPreset {
    pub(crate) fn kind(self) -> PresetKind {
        match self {
            TsPreset::None => PresetKind::None,
            TsPreset::Default => PresetKind::Default,
            TsPreset::All => PresetKind::Named("all"),
            TsPreset::Recommended => PresetKind::Named("recommended"),
            TsPreset::RecommendedTypeChecked => PresetKind::Named("recommended-type-checked"),
            TsPreset::RecommendedTypeCheckedOnly => {
                PresetKind::Named("recommended-type-checked-only")
            }
            TsPreset::Strict => PresetKind::Named("strict"),
            TsPreset::StrictTypeChecked => PresetKind::Named("strict-type-checked"),
            TsPreset::StrictTypeCheckedOnly => PresetKind::Named("strict-type-checked-only"),
        }
    }
}

/// Stylistic TypeScript presets, layered on top of the main preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TsStylisticPreset {
    #[default]
    None,
    Stylistic,
    StylisticTypeChecked,
    StylisticTypeCheckedOnly,
}

impl TsStylisticPreset {
    pub(crate) fn preset_name(self) -> Option<&'static str> {
        match self {
            TsStylisticPreset::None => None,
            TsStylisticPreset::Stylistic => Some("stylistic"),
            TsStylisticPreset::StylisticTypeChecked => Some("stylistic-type-checked"),
            TsStylisticPreset::StylisticTypeCheckedOnly => Some("stylistic-type-checked-only"),
        }
    }
}

/// Sub-options for the explicit return type requirement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ReturnTypeOptions {
    /// Globs to apply the requirement to; defaults to the group's files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Rules to add or override in the emitted fragment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,
}

/// Options for the `node` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeOptions {
    /// Which plugin rule preset to start from
    pub preset: StandardPreset,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Options for the `jsdoc` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct JsdocOptions {
    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Options for the `regexp` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RegexpOptions {
    /// Which plugin rule preset to start from
    pub preset: StandardPreset,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Options for the `perfectionist` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PerfectionistOptions {
    /// Which plugin rule preset to start from
    pub preset: PerfectionistPreset,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Sorting presets of the perfectionist plugin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PerfectionistPreset {
    None,
    #[default]
    Default,
    RecommendedAlphabetical,
    RecommendedNatural,
    RecommendedLineLength,
    RecommendedCustom,
}

impl PerfectionistPreset {
    pub(crate) fn kind(self) -> PresetKind {
        match self {
            PerfectionistPreset::None => PresetKind::None,
            PerfectionistPreset::Default => PresetKind::Default,
            PerfectionistPreset::RecommendedAlphabetical => {
                PresetKind::Named("recommended-alphabetical")
            }
            PerfectionistPreset::RecommendedNatural => PresetKind::Named("recommended-natural"),
            PerfectionistPreset::RecommendedLineLength => {
                PresetKind::Named("recommended-line-length")
            }
            PerfectionistPreset::RecommendedCustom => PresetKind::Named("recommended-custom"),
        }
    }
}

/// Options for the `stylistic` group
///
/// The layout fields mirror the plugin's customization surface; they shape
/// the generated formatting rules. All of them are ignored when an external
/// formatter owns formatting.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct StylisticOptions {
    /// Indentation width, or `"tab"`
    pub indent: Indent,
    /// Quote style for string literals
    pub quotes: QuoteStyle,
    /// Require semicolons
    pub semi: bool,
    /// Require parentheses around single arrow-function parameters
    pub arrow_parens: bool,
    /// Require spaces inside single-line blocks
    pub block_spacing: bool,
    /// Brace placement style
    pub brace_style: BraceStyle,
    /// Trailing comma policy
    pub comma_dangle: CommaDangle,
    /// When object properties must be quoted
    pub quote_props: QuoteProps,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

impl Default for StylisticOptions {
    fn default() -> Self {
        Self {
            indent: Indent::Spaces(2),
            quotes: QuoteStyle::Single,
            semi: false,
            arrow_parens: false,
            block_spacing: true,
            brace_style: BraceStyle::Stroustrup,
            comma_dangle: CommaDangle::AlwaysMultiline,
            quote_props: QuoteProps::ConsistentAsNeeded,
            rules: None,
            on_finalize: None,
        }
    }
}

/// Indentation: a space count or `"tab"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Serialize for Indent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Indent::Spaces(width) => serializer.serialize_u8(*width),
            Indent::Tab => serializer.serialize_str("tab"),
        }
    }
}

impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IndentVisitor;

        impl Visitor<'_> for IndentVisitor {
            type Value = Indent;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a space count or \"tab\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Indent, E> {
                if value == "tab" {
                    Ok(Indent::Tab)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Indent, E> {
                u8::try_from(value)
                    .map(Indent::Spaces)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Indent, E> {
                u8::try_from(value)
                    .map(Indent::Spaces)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            }
        }

        deserializer.deserialize_any(IndentVisitor)
    }
}

impl JsonSchema for Indent {
    fn schema_name() -> Cow<'static, str> {
        "Indent".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "integer", "minimum": 0, "maximum": 16 },
                { "type": "string", "const": "tab" }
            ]
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            QuoteStyle::Single => "single",
            QuoteStyle::Double => "double",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BraceStyle {
    #[serde(rename = "1tbs")]
    OneTrueBrace,
    #[default]
    Stroustrup,
    Allman,
}

impl BraceStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BraceStyle::OneTrueBrace => "1tbs",
            BraceStyle::Stroustrup => "stroustrup",
            BraceStyle::Allman => "allman",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CommaDangle {
    Never,
    Always,
    #[default]
    AlwaysMultiline,
    OnlyMultiline,
}

impl CommaDangle {
    pub fn as_str(self) -> &'static str {
        match self {
            CommaDangle::Never => "never",
            CommaDangle::Always => "always",
            CommaDangle::AlwaysMultiline => "always-multiline",
            CommaDangle::OnlyMultiline => "only-multiline",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteProps {
    AsNeeded,
    Consistent,
    #[default]
    ConsistentAsNeeded,
    Always,
}

impl QuoteProps {
    pub fn as_str(self) -> &'static str {
        match self {
            QuoteProps::AsNeeded => "as-needed",
            QuoteProps::Consistent => "consistent",
            QuoteProps::ConsistentAsNeeded => "consistent-as-needed",
            QuoteProps::Always => "always",
        }
    }
}

/// Options for the `json` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct JsonOptions {
    /// Glob patterns the JSON rules apply to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Sort `package.json` keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_package_json: Option<Toggle<SortPackageJsonOptions>>,

    /// Sort `tsconfig.json` / `tsconfig.*.json` keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_tsconfig_json: Option<Toggle<SortTsconfigJsonOptions>>,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Key ordering styles for the JSON sorting rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Plain ascending order
    Asc,
    /// Ascending order with a pinned leading key set
    #[default]
    TopAsc,
}

/// Sub-options for `package.json` key sorting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SortPackageJsonOptions {
    pub order: SortOrder,
    /// Keys kept at the top for readability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_keys: Option<Vec<String>>,
}

/// Sub-options for `tsconfig.json` key sorting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SortTsconfigJsonOptions {
    pub compiler_options_order: SortOrder,
    /// `compilerOptions` keys kept at the top for readability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler_options_top_keys: Option<Vec<String>>,
}

/// Options for the `jsx` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct JsxOptions {
    /// Accessibility rules; off unless opted in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a11y: Option<Toggle<A11yOptions>>,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Sub-options for JSX accessibility rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct A11yOptions {
    /// Which accessibility preset to start from
    pub preset: A11yPreset,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum A11yPreset {
    None,
    #[default]
    Default,
    Recommended,
    Strict,
}

impl A11yPreset {
    pub(crate) fn kind(self) -> PresetKind {
        match self {
            A11yPreset::None => PresetKind::None,
            A11yPreset::Default => PresetKind::Default,
            A11yPreset::Recommended => PresetKind::Named("recommended"),
            A11yPreset::Strict => PresetKind::Named("strict"),
        }
    }
}

/// Options for the `react` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ReactOptions {
    /// Glob patterns the React rules apply to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Options for the `svelte` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SvelteOptions {
    /// Glob patterns the Svelte rules apply to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Contents of the project's `svelte.config.js`, forwarded to the parser
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svelte_config: Option<serde_json::Value>,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Options for the `test` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TestOptions {
    /// Glob patterns the test rules apply to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Vitest rules. Defaults to enabled when Vitest is detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitest: Option<Toggle<VitestOptions>>,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

/// Sub-options for Vitest rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct VitestOptions {
    /// Which plugin rule preset to start from
    pub preset: StandardPreset,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,
}

/// Options for the `prettier` group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PrettierOptions {
    /// Turn off every rule that would fight the formatter
    pub disable_conflicting_rules: bool,

    /// Also run the formatter as a lint rule
    pub enable_plugin: bool,

    /// Rules to add or override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

impl Default for PrettierOptions {
    fn default() -> Self {
        Self {
            disable_conflicting_rules: true,
            enable_plugin: false,
            rules: None,
            on_finalize: None,
        }
    }
}

/// Options for the `disables` group
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DisablesOptions {
    #[serde(skip)]
    #[schemars(skip)]
    pub on_finalize: Option<FinalizeHook>,
}

// =============================================================================
// Resolved options
// =============================================================================

/// All group options after normalization
///
/// This is what builders and hooks see: every group has an `enabled` flag
/// and fully materialized options, and the input shapes (`true`, `false`,
/// object, absent) are gone.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub enable_all_groups: bool,
    pub ignores: Resolved<IgnoresOptions>,
    pub js: Resolved<JsOptions>,
    pub imports: Resolved<ImportsOptions>,
    pub ts: Resolved<TsOptions>,
    pub node: Resolved<NodeOptions>,
    pub jsdoc: Resolved<JsdocOptions>,
    pub regexp: Resolved<RegexpOptions>,
    pub perfectionist: Resolved<PerfectionistOptions>,
    pub stylistic: Resolved<StylisticOptions>,
    pub json: Resolved<JsonOptions>,
    pub jsx: Resolved<JsxOptions>,
    pub react: Resolved<ReactOptions>,
    pub svelte: Resolved<SvelteOptions>,
    pub test: Resolved<TestOptions>,
    pub prettier: Resolved<PrettierOptions>,
    pub disables: Resolved<DisablesOptions>,
}

impl ResolvedOptions {
    /// Normalize raw options against the detection-driven defaults
    pub fn resolve(options: ConfigOptions, detected: &DetectedPackages) -> Self {
        let enable_all = options.enable_all_groups;
        Self {
            enable_all_groups: enable_all,
            ignores: normalize(options.ignores, detected.default_enabled(GroupName::Ignores, enable_all)),
            js: normalize(options.js, detected.default_enabled(GroupName::Js, enable_all)),
            imports: normalize(options.imports, detected.default_enabled(GroupName::Imports, enable_all)),
            ts: normalize(options.ts, detected.default_enabled(GroupName::Ts, enable_all)),
            node: normalize(options.node, detected.default_enabled(GroupName::Node, enable_all)),
            jsdoc: normalize(options.jsdoc, detected.default_enabled(GroupName::Jsdoc, enable_all)),
            regexp: normalize(options.regexp, detected.default_enabled(GroupName::Regexp, enable_all)),
            perfectionist: normalize(
                options.perfectionist,
                detected.default_enabled(GroupName::Perfectionist, enable_all),
            ),
            stylistic: normalize(
                options.stylistic,
                detected.default_enabled(GroupName::Stylistic, enable_all),
            ),
            json: normalize(options.json, detected.default_enabled(GroupName::Json, enable_all)),
            jsx: normalize(options.jsx, detected.default_enabled(GroupName::Jsx, enable_all)),
            react: normalize(options.react, detected.default_enabled(GroupName::React, enable_all)),
            svelte: normalize(options.svelte, detected.default_enabled(GroupName::Svelte, enable_all)),
            test: normalize(options.test, detected.default_enabled(GroupName::Test, enable_all)),
            prettier: normalize(
                options.prettier,
                detected.default_enabled(GroupName::Prettier, enable_all),
            ),
            disables: normalize(
                options.disables,
                detected.default_enabled(GroupName::Disables, enable_all),
            ),
        }
    }

    /// Whether a group ended up enabled
    pub fn enabled(&self, group: GroupName) -> bool {
        match group {
            GroupName::Ignores => self.ignores.enabled,
            GroupName::Js => self.js.enabled,
            GroupName::Imports => self.imports.enabled,
            GroupName::Ts => self.ts.enabled,
            GroupName::Node => self.node.enabled,
            GroupName::Jsdoc => self.jsdoc.enabled,
            GroupName::Regexp => self.regexp.enabled,
            GroupName::Perfectionist => self.perfectionist.enabled,
            GroupName::Stylistic => self.stylistic.enabled,
            GroupName::Json => self.json.enabled,
            GroupName::Jsx => self.jsx.enabled,
            GroupName::React => self.react.enabled,
            GroupName::Svelte => self.svelte.enabled,
            GroupName::Test => self.test.enabled,
            GroupName::Prettier => self.prettier.enabled,
            GroupName::Disables => self.disables.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_is_the_assembly_order() {
        let names: Vec<_> = GroupName::ALL.iter().map(|g| g.as_str()).collect();
        assert_eq!(
            names,
            [
                "ignores",
                "js",
                "imports",
                "ts",
                "node",
                "jsdoc",
                "regexp",
                "perfectionist",
                "stylistic",
                "json",
                "jsx",
                "react",
                "svelte",
                "test",
                "prettier",
                "disables"
            ]
        );
    }

    #[test]
    fn options_parse_mixed_toggle_shapes() {
        let options: ConfigOptions = serde_json::from_value(json!({
            "ts": true,
            "stylistic": false,
            "js": { "preset": "recommended" },
            "test": { "vitest": { "preset": "all" } }
        }))
        .unwrap();

        assert!(matches!(options.ts, Some(Toggle::Enabled(true))));
        assert!(matches!(options.stylistic, Some(Toggle::Enabled(false))));

        let Some(Toggle::Options(js)) = options.js else {
            panic!("expected js options object");
        };
        assert_eq!(js.preset, StandardPreset::Recommended);

        let Some(Toggle::Options(test)) = options.test else {
            panic!("expected test options object");
        };
        let Some(Toggle::Options(vitest)) = test.vitest else {
            panic!("expected vitest options object");
        };
        assert_eq!(vitest.preset, StandardPreset::All);
    }

    #[test]
    fn bare_host_defaults() {
        let resolved = ResolvedOptions::resolve(ConfigOptions::default(), &DetectedPackages::default());

        for group in [
            GroupName::Ignores,
            GroupName::Js,
            GroupName::Imports,
            GroupName::Node,
            GroupName::Jsdoc,
            GroupName::Regexp,
            GroupName::Perfectionist,
            GroupName::Stylistic,
            GroupName::Test,
            GroupName::Disables,
        ] {
            assert!(resolved.enabled(group), "{group} should default on");
        }

        for group in [
            GroupName::Ts,
            GroupName::Json,
            GroupName::Jsx,
            GroupName::React,
            GroupName::Svelte,
            GroupName::Prettier,
        ] {
            assert!(!resolved.enabled(group), "{group} should default off");
        }
    }

    #[test]
    fn detection_flips_the_detected_groups() {
        let detected = DetectedPackages {
            ts: true,
            prettier: true,
            ..DetectedPackages::default()
        };
        let resolved = ResolvedOptions::resolve(ConfigOptions::default(), &detected);

        assert!(resolved.enabled(GroupName::Ts));
        assert!(resolved.enabled(GroupName::Prettier));
        assert!(!resolved.enabled(GroupName::React));
    }

    #[test]
    fn enable_all_groups_turns_everything_on() {
        let options = ConfigOptions {
            enable_all_groups: true,
            ..ConfigOptions::default()
        };
        let resolved = ResolvedOptions::resolve(options, &DetectedPackages::default());

        for group in GroupName::ALL {
            assert!(resolved.enabled(group), "{group} should be on");
        }
    }

    #[test]
    fn explicit_false_beats_enable_all_groups() {
        let options = ConfigOptions {
            enable_all_groups: true,
            svelte: Some(false.into()),
            ..ConfigOptions::default()
        };
        let resolved = ResolvedOptions::resolve(options, &DetectedPackages::default());

        assert!(!resolved.enabled(GroupName::Svelte));
        assert!(resolved.enabled(GroupName::React));
    }

    #[test]
    fn stylistic_defaults_follow_the_customize_surface() {
        let options = StylisticOptions::default();
        assert_eq!(options.indent, Indent::Spaces(2));
        assert_eq!(options.quotes, QuoteStyle::Single);
        assert!(!options.semi);
        assert!(options.block_spacing);
        assert_eq!(options.comma_dangle, CommaDangle::AlwaysMultiline);
    }

    #[test]
    fn brace_style_uses_the_engine_spelling() {
        assert_eq!(
            serde_json::to_value(BraceStyle::OneTrueBrace).unwrap(),
            json!("1tbs")
        );
        let parsed: BraceStyle = serde_json::from_value(json!("stroustrup")).unwrap();
        assert_eq!(parsed, BraceStyle::Stroustrup);
    }
}
