//! Context configuration: namespace depth plus excluded and authorized contexts.
//!
//! Raw values arrive from whatever loads the project's settings (TOML files in
//! the CLI). This module owns the defaults and the parsing rules; it never
//! keeps process-wide state, so every file can resolve its own
//! [`ContextConfig`] independently.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Default depth of the namespace where contexts live.
pub const DEFAULT_NAMESPACE_DEPTH: usize = 4;

/// Smallest depth for which the application prefix is meaningful.
pub const MIN_NAMESPACE_DEPTH: usize = 2;

/// Default excluded contexts (may import from anywhere).
pub const DEFAULT_EXCLUDED_CONTEXTS: &str = "infra";

/// Default authorized contexts (may be imported from anywhere).
pub const DEFAULT_AUTHORIZED_CONTEXTS: &str = "core";

/// Describes one configurable setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDescriptor {
    /// Key as written in settings files.
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Default value, rendered as text.
    pub default: &'static str,
}

/// The settings understood by the boundary rule.
pub const SETTINGS_SCHEMA: [SettingDescriptor; 3] = [
    SettingDescriptor {
        key: "namespace_depth",
        description: "Defines the depth of the namespace where the modules live",
        default: "4",
    },
    SettingDescriptor {
        key: "excluded_contexts",
        description: "Defines the modules that should be excluded from the rule",
        default: DEFAULT_EXCLUDED_CONTEXTS,
    },
    SettingDescriptor {
        key: "authorized_contexts",
        description: "Defines the contexts which can be imported everywhere",
        default: DEFAULT_AUTHORIZED_CONTEXTS,
    },
];

/// A settings value of a type no key accepts, kept as its TOML rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "toml::Value", into = "String")]
pub struct InvalidValue(String);

impl From<toml::Value> for InvalidValue {
    fn from(value: toml::Value) -> Self {
        Self(value.to_string())
    }
}

impl From<InvalidValue> for String {
    fn from(value: InvalidValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A namespace depth as written by the user: `4` or `"4"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDepth {
    /// Integer value.
    Int(i64),
    /// String value, parsed on resolution.
    Text(String),
    /// Any other type (`4.0`, `true`, ...); resolves to the default.
    Invalid(InvalidValue),
}

impl From<i64> for RawDepth {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RawDepth {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A list of context names: `"infra,shared"` or `["infra", "shared"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawContexts {
    /// Comma-separated names, split literally on `,`.
    Csv(String),
    /// Already-split names.
    Items(Vec<String>),
    /// Any other type; resolves to the default list.
    Invalid(InvalidValue),
}

impl From<&str> for RawContexts {
    fn from(value: &str) -> Self {
        Self::Csv(value.to_owned())
    }
}

impl RawContexts {
    fn to_set(&self) -> Option<BTreeSet<String>> {
        match self {
            Self::Csv(s) => Some(s.split(',').map(str::to_owned).collect()),
            Self::Items(items) => Some(items.iter().cloned().collect()),
            Self::Invalid(value) => {
                debug!("Invalid context list ({value}), using the default");
                None
            }
        }
    }
}

/// Optional raw values for one configuration scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSettings {
    /// Raw `namespace_depth`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_depth: Option<RawDepth>,
    /// Raw `excluded_contexts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_contexts: Option<RawContexts>,
    /// Raw `authorized_contexts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_contexts: Option<RawContexts>,
}

impl RawSettings {
    /// Layers `self` (the nearer scope) over `parent`: each key present here
    /// wins, absent keys are inherited.
    #[must_use]
    pub fn layered_over(self, parent: &Self) -> Self {
        Self {
            namespace_depth: self
                .namespace_depth
                .or_else(|| parent.namespace_depth.clone()),
            excluded_contexts: self
                .excluded_contexts
                .or_else(|| parent.excluded_contexts.clone()),
            authorized_contexts: self
                .authorized_contexts
                .or_else(|| parent.authorized_contexts.clone()),
        }
    }
}

/// Why a raw depth was rejected. Always recovered by using the default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DepthError {
    /// The value is not an integer.
    #[error("'{0}' is not an integer")]
    NotANumber(String),
    /// The value is smaller than [`MIN_NAMESPACE_DEPTH`].
    #[error("{0} is below the minimum depth of {MIN_NAMESPACE_DEPTH}")]
    BelowMinimum(i64),
}

/// Parses a raw depth, enforcing `depth >= 2`.
///
/// # Errors
///
/// Returns a [`DepthError`] for non-numeric, non-positive or too small values.
pub fn parse_depth(raw: &RawDepth) -> Result<usize, DepthError> {
    let value = match raw {
        RawDepth::Int(v) => *v,
        RawDepth::Text(s) => s
            .parse::<i64>()
            .map_err(|_| DepthError::NotANumber(s.clone()))?,
        RawDepth::Invalid(v) => return Err(DepthError::NotANumber(v.to_string())),
    };
    match usize::try_from(value) {
        Ok(depth) if depth >= MIN_NAMESPACE_DEPTH => Ok(depth),
        _ => Err(DepthError::BelowMinimum(value)),
    }
}

/// Resolved, immutable configuration for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextConfig {
    namespace_depth: usize,
    excluded_contexts: BTreeSet<String>,
    authorized_contexts: BTreeSet<String>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::resolve(&RawSettings::default())
    }
}

impl ContextConfig {
    /// Resolves raw settings, applying defaults for absent or invalid values.
    #[must_use]
    pub fn resolve(raw: &RawSettings) -> Self {
        resolve(
            raw.namespace_depth.as_ref(),
            raw.excluded_contexts.as_ref(),
            raw.authorized_contexts.as_ref(),
        )
    }

    /// Depth of the namespace where contexts live (always `>= 2`).
    #[must_use]
    pub fn namespace_depth(&self) -> usize {
        self.namespace_depth
    }

    /// Number of leading segments that identify the application root,
    /// not counting the segment right before the context.
    #[must_use]
    pub fn application_prefix_len(&self) -> usize {
        self.namespace_depth - 2
    }

    /// Index of the segment naming the context.
    #[must_use]
    pub fn context_index(&self) -> usize {
        self.namespace_depth - 1
    }

    /// Contexts exempt from the rule when they do the importing.
    #[must_use]
    pub fn excluded_contexts(&self) -> &BTreeSet<String> {
        &self.excluded_contexts
    }

    /// Contexts that anyone may import.
    #[must_use]
    pub fn authorized_contexts(&self) -> &BTreeSet<String> {
        &self.authorized_contexts
    }

    /// Whether `context` is excluded.
    #[must_use]
    pub fn is_excluded(&self, context: &str) -> bool {
        self.excluded_contexts.contains(context)
    }

    /// Whether `context` is authorized.
    #[must_use]
    pub fn is_authorized(&self, context: &str) -> bool {
        self.authorized_contexts.contains(context)
    }
}

/// Builds a [`ContextConfig`] from optional raw values.
#[must_use]
pub fn resolve(
    depth: Option<&RawDepth>,
    excluded: Option<&RawContexts>,
    authorized: Option<&RawContexts>,
) -> ContextConfig {
    let namespace_depth = match depth.map(parse_depth) {
        None => DEFAULT_NAMESPACE_DEPTH,
        Some(Ok(depth)) => depth,
        Some(Err(e)) => {
            debug!("Invalid namespace_depth ({e}), using {DEFAULT_NAMESPACE_DEPTH}");
            DEFAULT_NAMESPACE_DEPTH
        }
    };

    let contexts_or = |raw: Option<&RawContexts>, default: &str| {
        raw.and_then(RawContexts::to_set)
            .unwrap_or_else(|| BTreeSet::from([default.to_owned()]))
    };

    ContextConfig {
        namespace_depth,
        excluded_contexts: contexts_or(excluded, DEFAULT_EXCLUDED_CONTEXTS),
        authorized_contexts: contexts_or(authorized, DEFAULT_AUTHORIZED_CONTEXTS),
    }
}
