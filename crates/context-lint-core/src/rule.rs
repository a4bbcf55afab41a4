//! Rule and diagnostic-sink traits.

use crate::config::ContextConfig;
use crate::source::SourceImports;
use crate::types::Severity;

/// Receives the diagnostics a rule reports.
///
/// `offset` is the byte offset of the offending statement. Callers emit at
/// most once per offending statement.
pub trait DiagnosticSink {
    /// Reports one diagnostic.
    fn emit(&mut self, offset: usize, message: &str, auto_fixable: bool);
}

impl DiagnosticSink for Vec<(usize, String, bool)> {
    fn emit(&mut self, offset: usize, message: &str, auto_fixable: bool) {
        self.push((offset, message.to_owned(), auto_fixable));
    }
}

/// A per-file lint rule over the imports of a source file.
///
/// Rules hold no per-file state; one instance may check many files
/// concurrently.
///
/// # Example
///
/// ```ignore
/// use context_lint_core::{ContextConfig, DiagnosticSink, Rule, SourceImports};
///
/// pub struct NoWildcardImports;
///
/// impl Rule for NoWildcardImports {
///     fn name(&self) -> &'static str { "no-wildcard-imports" }
///     fn code(&self) -> &'static str { "CTX100" }
///
///     fn check(&self, source: &SourceImports, _: &ContextConfig, sink: &mut dyn DiagnosticSink) {
///         for import in &source.imports {
///             if import.path.as_deref().is_some_and(|p| p.ends_with('*')) {
///                 sink.emit(import.offset, "Wildcard import", false);
///             }
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-context-leaking-import").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CTX001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks one file, reporting each violation to `sink`.
    fn check(&self, source: &SourceImports, config: &ContextConfig, sink: &mut dyn DiagnosticSink);
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
