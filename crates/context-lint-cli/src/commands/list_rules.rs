//! List rules command implementation.

use context_lint_core::config::SETTINGS_SCHEMA;
use context_lint_rules::RuleSet;

/// Runs the list-rules command.
pub fn run() {
    let set = RuleSet::provide();

    println!("Available rules (rule set \"{}\"):\n", set.id);
    println!("{:<10} {:<28} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in &set.rules {
        println!(
            "{:<10} {:<28} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nSettings ([context] in context-lint.toml):\n");
    println!("{:<22} {:<8} Description", "Key", "Default");
    println!("{}", "-".repeat(80));

    for setting in &SETTINGS_SCHEMA {
        println!(
            "{:<22} {:<8} {}",
            setting.key, setting.default, setting.description
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  context-lint check --rules no-context-leaking-import");
}
