//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config_resolver::PROJECT_CONFIG_NAMES;

const CONFIG_TEMPLATE: &str = r#"# context-lint configuration
#
# Files nest: a context-lint.toml in a subdirectory overrides the keys it
# sets for the files below it. Set `root = true` to ignore files further up.
root = true

[analyzer]
exclude = ["**/build/**", "**/generated/**"]

[context]
# Number of leading segments up to and including the context,
# e.g. com.acme.app.billing -> 4
namespace_depth = 4

# Contexts whose files may import from any other context
excluded_contexts = "infra"

# Contexts that may be imported from anywhere
authorized_contexts = "core"

# [rules.no-context-leaking-import]
# enabled = true
# severity = "warning"
"#;

/// Runs the init command in the current directory.
pub fn run(force: bool) -> Result<()> {
    write_template(Path::new("."), force)?;

    println!("Created {}", PROJECT_CONFIG_NAMES[0]);
    println!();
    println!("Next steps:");
    println!("  1. Set namespace_depth and the context lists for your project");
    println!("  2. Run: context-lint check");

    Ok(())
}

fn write_template(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(PROJECT_CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, CONFIG_TEMPLATE)?;
    Ok(())
}
