//! Shared output formatting for lint results.

use anyhow::Result;
use context_lint_core::{LintResult, Severity, ViolationDiagnostic};
use miette::{NamedSource, Report};
use std::fmt::Write as _;
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is where the violations' relative paths are resolved for
/// source snippets in [`OutputFormat::Rich`].
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Compact => print!("{}", render_compact(result)),
        OutputFormat::Rich => print_rich(result, root),
    }
    Ok(())
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
    }
}

fn render_text(result: &LintResult) -> String {
    let mut out = String::new();

    for violation in &result.violations {
        let _ = writeln!(
            out,
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        let _ = writeln!(
            out,
            "  {}: {}\n",
            severity_indicator(violation.severity),
            violation.message
        );
    }

    out.push_str(&summary(result));
    out
}

fn summary(result: &LintResult) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    let color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    format!(
        "{color}Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s)\x1b[0m\n",
        result.files_checked
    )
}

fn render_compact(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .fold(String::new(), |mut out, violation| {
            let _ = writeln!(out, "{violation}");
            out
        })
}

/// Renders each violation as a miette report with its source line.
fn print_rich(result: &LintResult, root: &Path) {
    for violation in &result.violations {
        let diagnostic = ViolationDiagnostic::from(violation);
        let file = &violation.location.file;
        let report = match std::fs::read_to_string(root.join(file)) {
            Ok(content) => Report::new(diagnostic)
                .with_source_code(NamedSource::new(file.display().to_string(), content)),
            Err(e) => {
                tracing::debug!("No source for {}: {}", file.display(), e);
                Report::new(diagnostic)
            }
        };
        println!("{report:?}");
    }
    print!("{}", summary(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use context_lint_core::{Location, Violation};
    use std::path::PathBuf;

    fn sample() -> LintResult {
        let mut result = LintResult::new();
        for (file, line, severity) in [
            ("billing/Invoice.kt", 3, Severity::Error),
            ("orders/Order.kt", 5, Severity::Warning),
        ] {
            result.violations.push(Violation::new(
                "CTX001",
                "no-context-leaking-import",
                severity,
                Location::new(PathBuf::from(file), line, 1),
                "Importing from another context package",
            ));
        }
        result.files_checked = 4;
        result
    }

    #[test]
    fn compact_is_one_line_per_violation() {
        insta::assert_snapshot!(render_compact(&sample()), @r"
        billing/Invoice.kt:3:1: error [CTX001] Importing from another context package
        orders/Order.kt:5:1: warning [CTX001] Importing from another context package
        ");
    }

    #[test]
    fn compact_is_empty_without_violations() {
        assert!(render_compact(&LintResult::new()).is_empty());
    }

    #[test]
    fn text_ends_with_summary() {
        let text = render_text(&sample());
        assert!(text.contains("CTX001 no-context-leaking-import at billing/Invoice.kt:3:1"));
        assert!(text.contains("Found 1 error(s), 1 warning(s), 0 info(s) in 4 file(s)"));
    }

    #[test]
    fn json_lists_violations() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["files_checked"], 4);
        assert_eq!(json["violations"][1]["severity"], "warning");
    }
}
