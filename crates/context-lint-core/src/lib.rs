//! # context-lint-core
//!
//! Core of context-lint, an architecture linter that keeps bounded contexts
//! of a monolith from importing each other's internals.
//!
//! Code is organised as a tree of dotted namespaces such as
//! `com.acme.app.billing.domain`. With the default namespace depth of 4,
//! `com.acme.app` is the application and `billing` is the context. An import
//! from one context into another is a violation unless the importing context
//! is *excluded* (e.g. `infra`) or the imported context is *authorized*
//! (e.g. `core`).
//!
//! This crate provides:
//!
//! - [`NamespacePath`] for parsing and comparing dotted identifiers
//! - [`ContextConfig`] and [`config::resolve`] for defaults and raw-value parsing
//! - [`evaluate`], the pure boundary decision
//! - [`Rule`] and [`DiagnosticSink`], the seams rules are written against
//! - [`Settings`] for `context-lint.toml` files
//! - [`Violation`] and [`LintResult`] for reporting
//!
//! ## Example
//!
//! ```
//! use context_lint_core::{evaluate, ContextConfig, Decision, NamespacePath};
//!
//! let declaring = NamespacePath::parse("com.acme.app.billing")?;
//! let imported = NamespacePath::parse("com.acme.app.shipping.Parcel")?;
//!
//! let decision = evaluate(&declaring, &imported, &ContextConfig::default());
//! assert_eq!(decision, Decision::Deny);
//! # Ok::<(), context_lint_core::PathError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod boundary;
mod collector;
pub mod config;
mod context;
pub mod namespace;
mod rule;
pub mod settings;
mod source;
mod types;

#[cfg(test)]
mod proptest;

pub use boundary::{evaluate, AllowReason, Decision};
pub use collector::ViolationCollector;
pub use config::{ContextConfig, RawContexts, RawDepth, RawSettings};
pub use context::FileContext;
pub use namespace::{NamespacePath, PathError};
pub use rule::{DiagnosticSink, Rule, RuleBox};
pub use settings::{ConfigError, Settings};
pub use source::{ImportSite, SourceImports};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
