//! # context-lint-rules
//!
//! Built-in lint rules for context-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | CTX001 | `no-context-leaking-import` | Forbids importing from another context package |
//!
//! ## Usage
//!
//! ```ignore
//! use context_lint_core::{ContextConfig, Rule, SourceImports};
//! use context_lint_rules::NoContextLeakingImport;
//!
//! let source = SourceImports::new("com.acme.app.billing")
//!     .with_import("com.acme.app.shipping.Parcel", 30);
//! let mut emitted = Vec::new();
//! NoContextLeakingImport::new().check(&source, &ContextConfig::default(), &mut emitted);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod no_context_leaking_import;
mod rule_set;

pub use no_context_leaking_import::NoContextLeakingImport;
pub use rule_set::{all_rules, find_rule, RuleSet, RULE_SET_ID};
