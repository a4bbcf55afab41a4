//! Check command implementation.

use anyhow::{bail, Context, Result};
use context_lint_core::RuleBox;
use context_lint_rules::{all_rules, find_rule};
use std::path::Path;

use crate::analyzer::Analyzer;
use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<&str>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    if let Some(p) = source.path() {
        tracing::info!("Using base config: {}", p.display());
    }
    let base = source
        .load()
        .with_context(|| format!("Failed to load base config {source:?}"))?;

    let rules = match rules_filter {
        Some(filter) => filter_rules(filter)?,
        None => all_rules(),
    };

    let mut builder = Analyzer::builder()
        .root(path)
        .base_settings(base)
        .excludes(exclude);
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;
    let root = analyzer.root().to_path_buf();
    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, &root)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Resolves a comma-separated list of rule names or codes.
fn filter_rules(filter: &str) -> Result<Vec<RuleBox>> {
    let mut rules = Vec::new();
    for name in filter.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match find_rule(name) {
            Some(rule) => rules.push(rule),
            None => bail!("Unknown rule: {name}. Run `context-lint list-rules` to see available rules."),
        }
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_names_and_codes() {
        let rules = filter_rules("CTX001, no-context-leaking-import").unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.iter().all(|r| r.code() == "CTX001"));
    }

    #[test]
    fn filter_rejects_unknown_rules() {
        let err = filter_rules("no-such-rule")
            .err()
            .expect("expected unknown rule to be rejected");
        assert!(err.to_string().contains("no-such-rule"));
    }
}
