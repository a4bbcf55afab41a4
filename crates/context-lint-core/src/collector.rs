//! A [`DiagnosticSink`] that turns emissions into [`Violation`]s.

use crate::context::FileContext;
use crate::rule::{DiagnosticSink, Rule};
use crate::types::{Severity, Violation};

/// Collects the diagnostics one rule emits for one file.
pub struct ViolationCollector<'a> {
    file: &'a FileContext<'a>,
    code: &'static str,
    rule: &'static str,
    severity: Severity,
    violations: Vec<Violation>,
}

impl<'a> ViolationCollector<'a> {
    /// Creates a collector reporting under `rule`'s code and name.
    #[must_use]
    pub fn new(file: &'a FileContext<'a>, rule: &dyn Rule, severity: Severity) -> Self {
        Self {
            file,
            code: rule.code(),
            rule: rule.name(),
            severity,
            violations: Vec::new(),
        }
    }

    /// Returns the collected violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl DiagnosticSink for ViolationCollector<'_> {
    fn emit(&mut self, offset: usize, message: &str, auto_fixable: bool) {
        let mut violation = Violation::new(
            self.code,
            self.rule,
            self.severity,
            self.file.location_at(offset),
            message,
        );
        violation.auto_fixable = auto_fixable;
        self.violations.push(violation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContextConfig;
    use crate::source::SourceImports;
    use std::path::{Path, PathBuf};

    struct FlagAll;

    impl Rule for FlagAll {
        fn name(&self) -> &'static str {
            "flag-all"
        }
        fn code(&self) -> &'static str {
            "TEST002"
        }
        fn check(&self, source: &SourceImports, _: &ContextConfig, sink: &mut dyn DiagnosticSink) {
            for import in &source.imports {
                sink.emit(import.offset, "flagged", false);
            }
        }
    }

    #[test]
    fn emissions_become_located_violations() {
        let content = "package a\nimport b.C\n";
        let file = FileContext::new(Path::new("src/A.kt"), content, Path::new(""));
        let mut collector = ViolationCollector::new(&file, &FlagAll, Severity::Warning);

        FlagAll.check(
            &SourceImports::new("a").with_import("b.C", 10),
            &ContextConfig::default(),
            &mut collector,
        );

        let violations = collector.into_violations();
        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.code, "TEST002");
        assert_eq!(v.rule, "flag-all");
        assert_eq!(v.severity, Severity::Warning);
        assert_eq!(v.location.file, PathBuf::from("src/A.kt"));
        assert_eq!((v.location.line, v.location.column), (2, 1));
        assert_eq!(v.location.length, "import b.C".len());
        assert!(!v.auto_fixable);
    }
}
