//! Flat configuration fragments
//!
//! A [`ConfigFragment`] is one entry of the flat configuration array handed
//! to the linting engine. Fragments are positional: when two fragments match
//! the same file, the later one overrides the earlier one rule by rule, so
//! the composer cares deeply about the order in which fragments are emitted
//! and never reorders them after assembly.

use crate::rules::RuleMap;
use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// One entry of the flat configuration array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFragment {
    /// Diagnostic name, e.g. `tatami/js/rules`
    pub name: String,
    /// Glob patterns this fragment applies to (all files when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    /// Glob patterns excluded from this fragment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignores: Option<Vec<String>>,
    /// Plugin prefix -> package specifier registrations
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub plugins: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_options: Option<LanguageOptions>,
    /// Free-form shared settings plugins can read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "RuleMap::is_empty")]
    pub rules: RuleMap,
}

impl ConfigFragment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Parser and environment settings for the files a fragment matches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecma_version: Option<EcmaVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    /// Package specifier of the parser to use for these files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub globals: IndexMap<String, GlobalAccess>,
}

/// ECMAScript language version: `"latest"` or a year like `2024`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcmaVersion {
    Latest,
    Year(u16),
}

impl Serialize for EcmaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EcmaVersion::Latest => serializer.serialize_str("latest"),
            EcmaVersion::Year(year) => serializer.serialize_u16(*year),
        }
    }
}

impl<'de> Deserialize<'de> for EcmaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = EcmaVersion;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"latest\" or an ECMAScript year")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<EcmaVersion, E> {
                if value == "latest" {
                    Ok(EcmaVersion::Latest)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<EcmaVersion, E> {
                u16::try_from(value)
                    .map(EcmaVersion::Year)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<EcmaVersion, E> {
                u16::try_from(value)
                    .map(EcmaVersion::Year)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            }
        }

        deserializer.deserialize_any(VersionVisitor)
    }
}

impl JsonSchema for EcmaVersion {
    fn schema_name() -> Cow<'static, str> {
        "EcmaVersion".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string", "const": "latest" },
                { "type": "integer", "minimum": 2015 }
            ]
        })
    }
}

/// How source files should be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Module,
    Script,
    Commonjs,
}

/// Access level of a declared global identifier
///
/// The legacy boolean forms are accepted on input: `true` means writable,
/// `false` means read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAccess {
    Readonly,
    Writable,
    Off,
}

impl GlobalAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalAccess::Readonly => "readonly",
            GlobalAccess::Writable => "writable",
            GlobalAccess::Off => "off",
        }
    }
}

impl Serialize for GlobalAccess {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GlobalAccess {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AccessVisitor;

        impl Visitor<'_> for AccessVisitor {
            type Value = GlobalAccess;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"readonly\", \"writable\", \"off\", or a boolean")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<GlobalAccess, E> {
                match value {
                    "readonly" | "readable" => Ok(GlobalAccess::Readonly),
                    "writable" | "writeable" => Ok(GlobalAccess::Writable),
                    "off" => Ok(GlobalAccess::Off),
                    _ => Err(E::unknown_variant(value, &["readonly", "writable", "off"])),
                }
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<GlobalAccess, E> {
                Ok(if value {
                    GlobalAccess::Writable
                } else {
                    GlobalAccess::Readonly
                })
            }
        }

        deserializer.deserialize_any(AccessVisitor)
    }
}

impl JsonSchema for GlobalAccess {
    fn schema_name() -> Cow<'static, str> {
        "GlobalAccess".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string", "enum": ["readonly", "writable", "off"] },
                { "type": "boolean" }
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RuleEntry, rule_map};
    use serde_json::json;

    #[test]
    fn fragment_serializes_camel_case_and_skips_empty() {
        let fragment = ConfigFragment {
            name: "tatami/js/setup".to_string(),
            files: Some(vec!["**/*.js".to_string()]),
            language_options: Some(LanguageOptions {
                ecma_version: Some(EcmaVersion::Latest),
                source_type: Some(SourceType::Module),
                ..LanguageOptions::default()
            }),
            ..ConfigFragment::default()
        };

        let value = serde_json::to_value(&fragment).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "tatami/js/setup",
                "files": ["**/*.js"],
                "languageOptions": { "ecmaVersion": "latest", "sourceType": "module" }
            })
        );
    }

    #[test]
    fn fragment_round_trips_rules() {
        let fragment = ConfigFragment {
            name: "tatami/js/rules".to_string(),
            rules: rule_map([
                ("no-var", RuleEntry::error()),
                ("eqeqeq", RuleEntry::error_with([json!("always")])),
            ]),
            ..ConfigFragment::default()
        };

        let text = serde_json::to_string(&fragment).unwrap();
        let parsed: ConfigFragment = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, fragment);
    }

    #[test]
    fn ecma_version_forms() {
        assert_eq!(serde_json::to_value(EcmaVersion::Latest).unwrap(), json!("latest"));
        assert_eq!(serde_json::to_value(EcmaVersion::Year(2024)).unwrap(), json!(2024));

        let year: EcmaVersion = serde_json::from_str("2022").unwrap();
        assert_eq!(year, EcmaVersion::Year(2022));
        assert!(serde_json::from_str::<EcmaVersion>(r#""newest""#).is_err());
    }

    #[test]
    fn global_access_accepts_legacy_booleans() {
        let writable: GlobalAccess = serde_json::from_str("true").unwrap();
        assert_eq!(writable, GlobalAccess::Writable);

        let readonly: GlobalAccess = serde_json::from_str("false").unwrap();
        assert_eq!(readonly, GlobalAccess::Readonly);

        assert_eq!(
            serde_json::to_string(&GlobalAccess::Readonly).unwrap(),
            r#""readonly""#
        );
    }
}
