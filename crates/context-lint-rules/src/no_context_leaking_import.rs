//! Rule to forbid importing from another bounded context.
//!
//! # Rationale
//!
//! Each context of a monolith (`com.acme.app.billing`, `com.acme.app.shipping`)
//! is meant to be an encapsulated unit. Reaching into another context's
//! packages couples them; shared code belongs in an authorized context such
//! as `core`.
//!
//! # Configuration
//!
//! Read from the `[context]` section of `context-lint.toml`:
//!
//! - `namespace_depth`: depth of the namespace where contexts live (default: 4)
//! - `excluded_contexts`: contexts that may import from anywhere (default: `infra`)
//! - `authorized_contexts`: contexts anyone may import (default: `core`)
//!
//! # Skipped imports
//!
//! Files without a package declaration, imports without a readable path and
//! malformed dotted paths are skipped without a violation.

use context_lint_core::{
    evaluate, ContextConfig, Decision, DiagnosticSink, NamespacePath, Rule, SourceImports,
};
use tracing::{debug, trace};

/// Rule code for no-context-leaking-import.
pub const CODE: &str = "CTX001";

/// Rule name for no-context-leaking-import.
pub const NAME: &str = "no-context-leaking-import";

/// Message reported for every leaking import.
pub const MESSAGE: &str = "Importing from another context package";

/// Forbids imports that cross from one context into another.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContextLeakingImport;

impl NoContextLeakingImport {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoContextLeakingImport {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids importing from another context package"
    }

    fn check(&self, source: &SourceImports, config: &ContextConfig, sink: &mut dyn DiagnosticSink) {
        let Some(package) = source.package.as_deref() else {
            if !source.imports.is_empty() {
                debug!("No package declaration, skipping {} import(s)", source.imports.len());
            }
            return;
        };

        let declaring = match NamespacePath::parse(package) {
            Ok(p) => p,
            Err(e) => {
                debug!("Skipping file with malformed package: {e}");
                return;
            }
        };

        for import in &source.imports {
            let Some(path) = import.path.as_deref() else {
                debug!("Skipping import at offset {} without a path", import.offset);
                continue;
            };

            let imported = match NamespacePath::parse(path) {
                Ok(p) => p,
                Err(e) => {
                    debug!("Skipping malformed import at offset {}: {e}", import.offset);
                    continue;
                }
            };

            match evaluate(&declaring, &imported, config) {
                Decision::Deny => sink.emit(import.offset, MESSAGE, false),
                Decision::Allow(reason) => trace!("{declaring} -> {imported}: {reason:?}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use context_lint_core::{ImportSite, RawContexts, RawDepth};

    type Emitted = Vec<(usize, String, bool)>;

    fn check_with(source: &SourceImports, config: &ContextConfig) -> Emitted {
        let mut sink = Emitted::new();
        NoContextLeakingImport::new().check(source, config, &mut sink);
        sink
    }

    fn check(package: &str, import: &str) -> Emitted {
        check_with(
            &SourceImports::new(package).with_import(import, 34),
            &ContextConfig::default(),
        )
    }

    #[test]
    fn importing_from_another_context_package() {
        assert_eq!(
            check("com.barkibu.app.contextA", "com.barkibu.app.contextB.MyClass"),
            vec![(34, MESSAGE.to_owned(), false)]
        );
    }

    #[test]
    fn importing_from_same_context_package() {
        assert!(check("com.barkibu.app.contextA", "com.barkibu.app.contextA.MyClass").is_empty());
    }

    #[test]
    fn importing_from_common_context_package() {
        assert!(check("com.barkibu.app.contextA", "com.barkibu.app.core.MyClass").is_empty());
    }

    #[test]
    fn importing_in_the_infra_package() {
        assert!(check("com.barkibu.app.infra", "com.barkibu.app.core.MyClass").is_empty());
    }

    #[test]
    fn third_party_imports_are_ignored() {
        assert!(check("com.barkibu.app.contextA", "java.util.UUID").is_empty());
    }

    #[test]
    fn one_violation_per_denied_import() {
        let source = SourceImports::new("com.acme.app.billing")
            .with_import("com.acme.app.shipping.Parcel", 20)
            .with_import("com.acme.app.billing.Invoice", 50)
            .with_import("com.acme.app.core.Money", 80)
            .with_import("com.acme.app.orders.Order", 110);

        let offsets: Vec<usize> = check_with(&source, &ContextConfig::default())
            .into_iter()
            .map(|(offset, _, _)| offset)
            .collect();
        assert_eq!(offsets, [20, 110]);
    }

    #[test]
    fn missing_package_skips_file() {
        let source = SourceImports {
            package: None,
            imports: vec![ImportSite::new("com.acme.app.shipping.Parcel", 0)],
        };
        assert!(check_with(&source, &ContextConfig::default()).is_empty());
    }

    #[test]
    fn unresolved_import_is_skipped_and_the_rest_still_checked() {
        let mut source = SourceImports::new("com.acme.app.billing");
        source.imports.push(ImportSite::unresolved(10));
        source.imports.push(ImportSite::new("com.acme.app..Broken", 20));
        source.imports.push(ImportSite::new("", 25));
        source.imports.push(ImportSite::new("com.acme.app.shipping.Parcel", 30));

        let emitted = check_with(&source, &ContextConfig::default());
        assert_eq!(emitted, vec![(30, MESSAGE.to_owned(), false)]);
    }

    #[test]
    fn malformed_package_skips_file() {
        let source =
            SourceImports::new("com.acme..billing").with_import("com.acme.app.shipping.X", 0);
        assert!(check_with(&source, &ContextConfig::default()).is_empty());
    }

    #[test]
    fn configuration_is_honoured() {
        let config = context_lint_core::config::resolve(
            Some(&RawDepth::from("3")),
            Some(&RawContexts::from("jobs")),
            Some(&RawContexts::from("shared")),
        );

        let leak = SourceImports::new("com.acme.billing").with_import("com.acme.shipping.X", 5);
        assert_eq!(check_with(&leak, &config).len(), 1);

        let shared = SourceImports::new("com.acme.billing").with_import("com.acme.shared.Id", 5);
        assert!(check_with(&shared, &config).is_empty());

        let job = SourceImports::new("com.acme.jobs").with_import("com.acme.billing.Invoice", 5);
        assert!(check_with(&job, &config).is_empty());
    }

    #[test]
    fn metadata() {
        let rule = NoContextLeakingImport::new();
        assert_eq!(rule.name(), "no-context-leaking-import");
        assert_eq!(rule.code(), "CTX001");
    }
}
