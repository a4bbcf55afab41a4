//! # context-lint-ts
//!
//! Tree-sitter based import extraction for context-lint.
//!
//! Turns source files into [`context_lint_core::SourceImports`]: the
//! declaring package plus every import statement with its byte offset.
//!
//! - [`LanguageExtractor`] trait for pluggable language support
//! - [`KotlinExtractor`] for Kotlin package/import extraction

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod extractor;
pub mod kotlin;

pub use extractor::{extractor_for, ExtractError, LanguageExtractor};
pub use kotlin::KotlinExtractor;
