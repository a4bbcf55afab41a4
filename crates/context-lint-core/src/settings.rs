//! The `context-lint.toml` settings file.
//!
//! ```toml
//! root = true
//!
//! [analyzer]
//! exclude = ["**/build/**"]
//!
//! [context]
//! namespace_depth = 4
//! excluded_contexts = "infra"
//! authorized_contexts = "core,shared"
//!
//! [rules.no-context-leaking-import]
//! severity = "warning"
//! ```
//!
//! Settings files nest: a file in a subdirectory is layered over the files
//! above it with [`Settings::layered_over`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::{ContextConfig, RawSettings};
use crate::types::Severity;

/// One settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Stops the upward search for parent settings files.
    #[serde(default)]
    pub root: bool,

    /// File discovery settings.
    #[serde(default)]
    pub analyzer: AnalyzerSettings,

    /// Raw context configuration.
    #[serde(default)]
    pub context: RawSettings,

    /// Per-rule settings keyed by rule name.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSettings>,
}

/// File discovery settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerSettings {
    /// Glob patterns (relative to the analysis root) to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Per-rule settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

impl RuleSettings {
    fn layered_over(self, parent: Self) -> Self {
        Self {
            enabled: self.enabled.or(parent.enabled),
            severity: self.severity.or(parent.severity),
        }
    }
}

/// Errors loading a settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the settings file.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in the settings file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Layers `self` (the nearer file) over `parent`.
    ///
    /// Context keys and rule fields present here win; exclude patterns
    /// accumulate.
    #[must_use]
    pub fn layered_over(self, parent: &Self) -> Self {
        let mut rules = parent.rules.clone();
        for (name, settings) in self.rules {
            let merged = match rules.get(&name) {
                Some(inherited) => settings.layered_over(*inherited),
                None => settings,
            };
            rules.insert(name, merged);
        }

        let mut exclude = parent.analyzer.exclude.clone();
        exclude.extend(self.analyzer.exclude);

        Self {
            root: self.root,
            analyzer: AnalyzerSettings { exclude },
            context: self.context.layered_over(&parent.context),
            rules,
        }
    }

    /// Resolves the context configuration of this scope.
    #[must_use]
    pub fn context_config(&self) -> ContextConfig {
        ContextConfig::resolve(&self.context)
    }

    /// Checks if a rule is enabled (rules are enabled unless turned off).
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |r| r.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|r| r.severity)
    }
}
