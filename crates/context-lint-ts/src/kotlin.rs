//! Kotlin import extraction using Tree-sitter.

use tree_sitter::{Language, Node, Parser};

use context_lint_core::{ImportSite, SourceImports};

use crate::extractor::{ExtractError, LanguageExtractor};

const LANGUAGE_ID: &str = "kotlin";

/// Extracts the package declaration and imports from Kotlin source.
pub struct KotlinExtractor {
    language: Language,
}

impl KotlinExtractor {
    /// Creates a new Kotlin extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_kotlin_ng::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    /// Strips one pair of surrounding backticks: `` `billing` `` names `billing`.
    fn unquote(id: &str) -> &str {
        id.strip_prefix('`')
            .and_then(|s| s.strip_suffix('`'))
            .unwrap_or(id)
    }

    /// Join identifier children of a `qualified_identifier` node with dots.
    fn qualified_id(node: &Node<'_>, src: &[u8]) -> String {
        let mut parts = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "identifier" {
                parts.push(Self::unquote(Self::text(&child, src)));
            }
        }
        parts.join(".")
    }

    fn package_path(node: &Node<'_>, src: &[u8]) -> Option<String> {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "qualified_identifier" {
                return Some(Self::qualified_id(&child, src));
            }
        }
        None
    }

    /// The imported path; star imports keep their trailing `.*`.
    fn import_path(node: &Node<'_>, src: &[u8]) -> Option<String> {
        let mut path = None;
        let mut wildcard = false;
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "qualified_identifier" => path = Some(Self::qualified_id(&child, src)),
                "*" => wildcard = true,
                _ => {}
            }
        }
        path.map(|p| if wildcard { format!("{p}.*") } else { p })
    }
}

impl Default for KotlinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for KotlinExtractor {
    fn language_id(&self) -> &'static str {
        LANGUAGE_ID
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".kt", ".kts"]
    }

    fn analyze(&self, source: &str) -> Result<SourceImports, ExtractError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|source| ExtractError::Language {
                language: LANGUAGE_ID,
                source,
            })?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(ExtractError::Parse {
            language: LANGUAGE_ID,
        })?;
        let root = tree.root_node();

        let mut result = SourceImports::default();

        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            match node.kind() {
                "package_header" => {
                    result.package = Self::package_path(&node, src);
                }
                "import" => {
                    let offset = node.start_byte();
                    result.imports.push(match Self::import_path(&node, src) {
                        Some(path) => ImportSite::new(path, offset),
                        None => ImportSite::unresolved(offset),
                    });
                }
                _ => {}
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(src: &str) -> SourceImports {
        KotlinExtractor::new().analyze(src).expect("kotlin source parses")
    }

    fn paths(a: &SourceImports) -> Vec<&str> {
        a.imports.iter().filter_map(|i| i.path.as_deref()).collect()
    }

    #[test]
    fn extracts_package() {
        let a = analyze("package com.example.domain.model\n");
        assert_eq!(a.package.as_deref(), Some("com.example.domain.model"));
    }

    #[test]
    fn extracts_imports_in_order() {
        let a = analyze(
            "package com.example.app\nimport com.example.domain.User\nimport com.example.infra.Repo\n",
        );
        assert_eq!(
            paths(&a),
            ["com.example.domain.User", "com.example.infra.Repo"]
        );
    }

    #[test]
    fn import_offsets_point_at_the_statement() {
        let src = "package com.example.app\n\nimport com.example.domain.User\n";
        let a = analyze(src);
        assert_eq!(a.imports.len(), 1);
        let offset = a.imports[0].offset;
        assert_eq!(offset, src.find("import").expect("has import"));
    }

    #[test]
    fn aliased_import_keeps_original_path() {
        let a = analyze("package com.example.app\nimport com.example.domain.User as DomainUser\n");
        assert_eq!(paths(&a), ["com.example.domain.User"]);
    }

    #[test]
    fn star_import_keeps_its_wildcard() {
        let a = analyze("package com.example.app\nimport com.example.domain.*\n");
        assert_eq!(paths(&a), ["com.example.domain.*"]);
    }

    #[test]
    fn backtick_quoted_segments_are_unquoted() {
        let a = analyze(
            "package com.acme.`app`.billing\nimport com.acme.app.`billing`.Invoice\nimport `in`.x.Y\n",
        );
        assert_eq!(a.package.as_deref(), Some("com.acme.app.billing"));
        assert_eq!(paths(&a), ["com.acme.app.billing.Invoice", "in.x.Y"]);
    }

    #[test]
    fn unquote_leaves_plain_identifiers_alone() {
        assert_eq!(KotlinExtractor::unquote("`billing`"), "billing");
        assert_eq!(KotlinExtractor::unquote("billing"), "billing");
        assert_eq!(KotlinExtractor::unquote("`"), "`");
    }

    #[test]
    fn script_without_package() {
        let a = analyze("import com.example.domain.User\n");
        assert!(a.package.is_none());
        assert_eq!(paths(&a), ["com.example.domain.User"]);
    }

    #[test]
    fn empty_source() {
        let a = analyze("");
        assert!(a.package.is_none());
        assert!(a.imports.is_empty());
    }

    #[test]
    fn declarations_are_not_imports() {
        let a = analyze(
            "package com.example.domain\n\nclass User(val id: Long)\nfun make() = User(1)\n",
        );
        assert_eq!(a.package.as_deref(), Some("com.example.domain"));
        assert!(a.imports.is_empty());
    }
}
