//! Language-agnostic extraction trait.
//!
//! `LanguageExtractor` is the extension point for adding new languages.
//! Implement it to teach context-lint how to read the package declaration
//! and import statements of a language via Tree-sitter.

use std::path::Path;

use context_lint_core::SourceImports;

/// Errors raised while extracting imports.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The grammar is incompatible with the linked Tree-sitter runtime.
    #[error("failed to load {language} grammar: {source}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Underlying error.
        source: tree_sitter::LanguageError,
    },
    /// Tree-sitter returned no tree.
    #[error("failed to parse {language} source")]
    Parse {
        /// Language identifier.
        language: &'static str,
    },
}

/// Trait for language-specific Tree-sitter extraction.
pub trait LanguageExtractor: Send + Sync {
    /// Language identifier (e.g., `"kotlin"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles (e.g., `&[".kt", ".kts"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Extracts the package declaration and imports from source code.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractError`] when the grammar cannot be loaded or the
    /// source cannot be parsed at all.
    fn analyze(&self, source: &str) -> Result<SourceImports, ExtractError>;
}

/// Finds the extractor responsible for `path`, by extension.
#[must_use]
pub fn extractor_for<'a>(
    extractors: &'a [Box<dyn LanguageExtractor>],
    path: &Path,
) -> Option<&'a dyn LanguageExtractor> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))?;

    extractors
        .iter()
        .find(|e| e.extensions().contains(&ext.as_str()))
        .map(|e| &**e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KotlinExtractor;

    #[test]
    fn finds_extractor_by_extension() {
        let extractors: Vec<Box<dyn LanguageExtractor>> = vec![Box::new(KotlinExtractor::new())];
        let found = extractor_for(&extractors, Path::new("src/Billing.kt"));
        assert_eq!(found.map(|e| e.language_id()), Some("kotlin"));
        assert!(extractor_for(&extractors, Path::new("build.gradle.kts")).is_some());
        assert!(extractor_for(&extractors, Path::new("Main.java")).is_none());
        assert!(extractor_for(&extractors, Path::new("Makefile")).is_none());
    }
}
