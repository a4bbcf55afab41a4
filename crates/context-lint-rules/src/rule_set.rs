//! Rule registry.

use context_lint_core::RuleBox;

use crate::NoContextLeakingImport;

/// Identifier of the built-in rule set.
pub const RULE_SET_ID: &str = "context";

/// A named collection of rules handed to the analyzer.
pub struct RuleSet {
    /// Rule set identifier.
    pub id: &'static str,
    /// Rules in this set.
    pub rules: Vec<RuleBox>,
}

impl RuleSet {
    /// Returns the built-in rule set.
    #[must_use]
    pub fn provide() -> Self {
        Self {
            id: RULE_SET_ID,
            rules: all_rules(),
        }
    }
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(NoContextLeakingImport::new())]
}

/// Looks up a rule by name or code (e.g. `no-context-leaking-import` or `CTX001`).
#[must_use]
pub fn find_rule(name_or_code: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|r| r.name() == name_or_code || r.code() == name_or_code)
}
