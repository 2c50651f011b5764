//! Option toggles and normalization
//!
//! Every group option accepts three input shapes: absent (fall back to the
//! group's default), a bare boolean (explicit on/off with default options),
//! or an options object (which always opts the group in). [`normalize`]
//! collapses those shapes into a [`Resolved`] value so group builders only
//! ever see `enabled` plus fully materialized options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// User-facing option value: a bare switch or an options object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Toggle<T> {
    /// `true` / `false`: turn the group on or off with default options
    Enabled(bool),
    /// An options object; providing one always opts the group in
    Options(T),
}

impl<T> From<bool> for Toggle<T> {
    fn from(value: bool) -> Self {
        Toggle::Enabled(value)
    }
}

/// A normalized option: the group's on/off state plus materialized options
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub enabled: bool,
    pub options: T,
}

impl<T: Default> Default for Resolved<T> {
    fn default() -> Self {
        Self {
            enabled: false,
            options: T::default(),
        }
    }
}

/// Collapse a raw option value into its resolved form
///
/// | input           | enabled           | options    |
/// |-----------------|-------------------|------------|
/// | `None`          | `default_enabled` | `T::default()` |
/// | `Some(false)`   | `false`           | `T::default()` |
/// | `Some(true)`    | `true`            | `T::default()` |
/// | options object  | `true`            | the object |
pub fn normalize<T: Default>(toggle: Option<Toggle<T>>, default_enabled: bool) -> Resolved<T> {
    match toggle {
        None => Resolved {
            enabled: default_enabled,
            options: T::default(),
        },
        Some(Toggle::Enabled(enabled)) => Resolved {
            enabled,
            options: T::default(),
        },
        Some(Toggle::Options(options)) => Resolved {
            enabled: true,
            options,
        },
    }
}
