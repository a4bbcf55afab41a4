//! What a syntax-tree traversal reports about one source file.

/// A single import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSite {
    /// Dotted path of the imported identifier, when the traversal could read one.
    pub path: Option<String>,
    /// Byte offset of the import statement in the file.
    pub offset: usize,
}

impl ImportSite {
    /// Creates an import site with a known path.
    #[must_use]
    pub fn new(path: impl Into<String>, offset: usize) -> Self {
        Self {
            path: Some(path.into()),
            offset,
        }
    }

    /// Creates an import site whose path could not be resolved.
    #[must_use]
    pub fn unresolved(offset: usize) -> Self {
        Self { path: None, offset }
    }
}

/// The declaring package and the imports of one file, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceImports {
    /// Package declaration, if the file has one.
    pub package: Option<String>,
    /// Import statements in source order.
    pub imports: Vec<ImportSite>,
}

impl SourceImports {
    /// Creates the imports of a file declaring `package`.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            imports: Vec::new(),
        }
    }

    /// Appends an import.
    #[must_use]
    pub fn with_import(mut self, path: impl Into<String>, offset: usize) -> Self {
        self.imports.push(ImportSite::new(path, offset));
        self
    }
}
