//! Orchestrates lint execution over a source tree.
//!
//! Directory settings are resolved up front; files are then extracted and
//! checked in parallel against the shared, read-only configuration.

use context_lint_core::{
    ConfigError, ContextConfig, FileContext, LintResult, RuleBox, Settings, Violation,
    ViolationCollector,
};
use context_lint_ts::{extractor_for, KotlinExtractor, LanguageExtractor};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config_resolver::DirectorySettings;

/// Excludes used when neither the command line nor the settings name any.
const DEFAULT_EXCLUDES: &[&str] = &["**/build/**", "**/.gradle/**"];

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading a source file.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Error walking the source tree.
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The root directory is missing.
    #[error("Path does not exist: {}", .0.display())]
    MissingRoot(PathBuf),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    base: Option<Settings>,
}

impl AnalyzerBuilder {
    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple exclude patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the base settings layer under every directory's files.
    #[must_use]
    pub fn base_settings(mut self, settings: Settings) -> Self {
        self.base = Some(settings);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory doesn't exist or a pattern is invalid.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        if !root.is_dir() {
            return Err(AnalyzerError::MissingRoot(root));
        }
        let root = root.canonicalize().map_err(|source| AnalyzerError::Io {
            path: root.clone(),
            source,
        })?;

        let base = self.base.unwrap_or_default();
        let mut dirs = DirectorySettings::new(base);
        let root_settings = dirs.for_dir(&root)?;

        let mut patterns = self.exclude_patterns;
        patterns.extend(root_settings.analyzer.exclude.iter().cloned());
        if patterns.is_empty() {
            patterns.extend(DEFAULT_EXCLUDES.iter().map(|p| (*p).to_string()));
        }
        let exclude = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Analyzer {
            root,
            rules: self.rules,
            extractors: vec![Box::new(KotlinExtractor::new())],
            exclude,
            dirs,
        })
    }
}

/// Settings and boundary configuration shared by the files of one directory.
struct DirectoryConfig {
    settings: Arc<Settings>,
    context: ContextConfig,
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    extractors: Vec<Box<dyn LanguageExtractor>>,
    exclude: Vec<glob::Pattern>,
    dirs: DirectorySettings,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Analyzes all files and returns the results.
    ///
    /// Files the extractor cannot handle are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery, reading, or settings resolution fails.
    pub fn analyze(mut self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {}", self.root.display());

        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        let mut configs: HashMap<PathBuf, Arc<DirectoryConfig>> = HashMap::new();
        let mut jobs = Vec::with_capacity(files.len());
        for file in files {
            let dir = file.parent().unwrap_or(self.root.as_path()).to_path_buf();
            let config = match configs.get(&dir) {
                Some(c) => Arc::clone(c),
                None => {
                    let settings = self.dirs.for_dir(&dir)?;
                    let context = settings.context_config();
                    debug!("Resolved {} -> {:?}", dir.display(), context);
                    let c = Arc::new(DirectoryConfig { settings, context });
                    configs.insert(dir, Arc::clone(&c));
                    c
                }
            };
            jobs.push((file, config));
        }

        let outcomes: Vec<_> = jobs
            .par_iter()
            .map(|(file, config)| self.analyze_file(file, config))
            .collect();

        let mut result = LintResult::new();
        for outcome in outcomes {
            if let Some(violations) = outcome? {
                result.violations.extend(violations);
                result.files_checked += 1;
            }
        }
        result.sort();

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Checks one file; `None` when its source could not be extracted.
    fn analyze_file(
        &self,
        path: &Path,
        config: &DirectoryConfig,
    ) -> Result<Option<Vec<Violation>>, AnalyzerError> {
        let Some(extractor) = extractor_for(&self.extractors, path) else {
            return Ok(None);
        };
        debug!("Analyzing: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let source = match extractor.analyze(&content) {
            Ok(source) => source,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                return Ok(None);
            }
        };

        let file = FileContext::new(path, &content, &self.root);
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !config.settings.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let severity = config
                .settings
                .rule_severity(rule.name())
                .unwrap_or_else(|| rule.default_severity());
            let mut collector = ViolationCollector::new(&file, &**rule, severity);
            rule.check(&source, &config.context, &mut collector);
            violations.extend(collector.into_violations());
        }

        Ok(Some(violations))
    }

    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder.hidden(false).git_ignore(true);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || extractor_for(&self.extractors, path).is_none() {
                continue;
            }

            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks a path, relative to the root, against the exclude patterns.
    fn should_exclude(&self, path: &Path) -> bool {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        self.exclude.iter().any(|p| p.matches_path(rel))
    }
}
