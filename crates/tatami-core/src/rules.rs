//! Rule severity, rule entries and ordered rule maps
//!
//! A rule map is the flat `rule-name -> entry` table a fragment carries. The
//! linting engine merges fragments positionally (later fragments override
//! earlier ones key by key), so maps here preserve insertion order and the
//! wire shape matches what the engine reads: a bare severity, or an array of
//! severity followed by rule-specific options.

use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeSeq};
use std::borrow::Cow;
use std::fmt;

/// Rule severity levels
///
/// Serializes as `"off" | "warn" | "error"`; the numeric legacy forms
/// `0 | 1 | 2` are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Disable the rule
    Off,
    /// Warning (doesn't fail the lint run)
    Warn,
    /// Error (fails the lint run)
    Error,
}

impl Severity {
    /// The canonical string form understood by the engine
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "off" => Some(Severity::Off),
            "warn" => Some(Severity::Warn),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }

    fn from_level(level: u64) -> Option<Self> {
        match level {
            0 => Some(Severity::Off),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeverityVisitor;

        impl Visitor<'_> for SeverityVisitor {
            type Value = Severity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"off\", \"warn\", \"error\", or 0..=2")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Severity, E> {
                Severity::from_name(value)
                    .ok_or_else(|| E::unknown_variant(value, &["off", "warn", "error"]))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Severity, E> {
                Severity::from_level(value)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Severity, E> {
                u64::try_from(value)
                    .ok()
                    .and_then(Severity::from_level)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
            }
        }

        deserializer.deserialize_any(SeverityVisitor)
    }
}

impl JsonSchema for Severity {
    fn schema_name() -> Cow<'static, str> {
        "Severity".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string", "enum": ["off", "warn", "error"] },
                { "type": "integer", "enum": [0, 1, 2] }
            ]
        })
    }
}

/// A single rule configuration: severity plus optional rule-specific options
///
/// The wire shape is the engine's: `"error"` when there are no options,
/// `["error", ...options]` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    pub severity: Severity,
    pub options: Vec<serde_json::Value>,
}

impl RuleEntry {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    pub fn off() -> Self {
        Self::new(Severity::Off)
    }

    pub fn warn() -> Self {
        Self::new(Severity::Warn)
    }

    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    /// Attach rule-specific options, in the order the engine expects them
    pub fn with_options(mut self, options: impl IntoIterator<Item = serde_json::Value>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn warn_with(options: impl IntoIterator<Item = serde_json::Value>) -> Self {
        Self::warn().with_options(options)
    }

    pub fn error_with(options: impl IntoIterator<Item = serde_json::Value>) -> Self {
        Self::error().with_options(options)
    }
}

impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            self.severity.serialize(serializer)
        } else {
            let mut seq = serializer.serialize_seq(Some(1 + self.options.len()))?;
            seq.serialize_element(&self.severity)?;
            for option in &self.options {
                seq.serialize_element(option)?;
            }
            seq.end()
        }
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = RuleEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a severity or a [severity, ...options] array")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<RuleEntry, E> {
                Severity::deserialize(de::value::StrDeserializer::new(value)).map(RuleEntry::new)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<RuleEntry, E> {
                Severity::deserialize(de::value::U64Deserializer::new(value)).map(RuleEntry::new)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<RuleEntry, E> {
                Severity::deserialize(de::value::I64Deserializer::new(value)).map(RuleEntry::new)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleEntry, A::Error> {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut options = Vec::new();
                while let Some(option) = seq.next_element::<serde_json::Value>()? {
                    options.push(option);
                }
                Ok(RuleEntry { severity, options })
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

impl JsonSchema for RuleEntry {
    fn schema_name() -> Cow<'static, str> {
        "RuleEntry".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let severity = generator.subschema_for::<Severity>();
        json_schema!({
            "anyOf": [
                severity,
                { "type": "array", "minItems": 1 }
            ]
        })
    }
}

/// Ordered `rule-name -> entry` mapping
pub type RuleMap = IndexMap<String, RuleEntry>;

/// Build a rule map from `(name, entry)` pairs, preserving order
pub fn rule_map<'a>(entries: impl IntoIterator<Item = (&'a str, RuleEntry)>) -> RuleMap {
    entries
        .into_iter()
        .map(|(name, entry)| (name.to_string(), entry))
        .collect()
}

/// Ordered merge of rule maps: later layers override earlier ones key by key
///
/// An overridden key keeps the position of its first occurrence, so the
/// merged table reads in the order the base layer introduced the rules.
pub fn overlay<'a>(layers: impl IntoIterator<Item = Option<&'a RuleMap>>) -> RuleMap {
    let mut merged = RuleMap::new();
    for layer in layers.into_iter().flatten() {
        for (name, entry) in layer {
            merged.insert(name.clone(), entry.clone());
        }
    }
    merged
}
