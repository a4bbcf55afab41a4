//! Per-file context shared by the diagnostics of one file.

use std::path::{Path, PathBuf};

use crate::types::Location;

/// The file being checked.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path relative to the analysis root.
    pub relative_path: PathBuf,
    /// File contents.
    pub content: &'a str,
}

impl<'a> FileContext<'a> {
    /// Creates a file context, stripping `root` from `path` when possible.
    #[must_use]
    pub fn new(path: &Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        Self {
            relative_path,
            content,
        }
    }

    /// 1-indexed line and column for a byte offset.
    ///
    /// Offsets past the end clamp to the end of the file.
    #[must_use]
    pub fn position_of(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let before = &self.content.as_bytes()[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        (line, offset - line_start + 1)
    }

    /// Byte length from `offset` to the end of its line.
    #[must_use]
    pub fn line_remainder(&self, offset: usize) -> usize {
        let rest = self.content.get(offset..).unwrap_or("");
        rest.find('\n')
            .map_or(rest.len(), |end| rest[..end].trim_end_matches('\r').len())
    }

    /// Location of the statement starting at `offset`.
    #[must_use]
    pub fn location_at(&self, offset: usize) -> Location {
        let (line, column) = self.position_of(offset);
        Location::new(self.relative_path.clone(), line, column)
            .with_span(offset, self.line_remainder(offset))
    }
}
