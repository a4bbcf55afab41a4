//! Configuration resolution.
//!
//! The base layer is resolved in this order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `~/.context-lint/config.toml` (global fallback)
//! 3. No config found → defaults
//!
//! On top of the base, every `context-lint.toml` (or `.context-lint.toml`)
//! from a source directory upwards is layered, nearest file winning per key.
//! The walk does not stop at the analysis root: it continues until a file
//! with `root = true` or the filesystem root, so checking `src/main/kotlin`
//! still picks up the project's top-level file.

use context_lint_core::Settings;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the base configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Loaded from the global config directory (`~/.context-lint/`).
    Global(PathBuf),
    /// No base config; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the settings this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Settings, context_lint_core::ConfigError> {
        match self.path() {
            Some(p) => Settings::from_file(p),
            None => Ok(Settings::default()),
        }
    }
}

/// Directory-level config file names, checked in order.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["context-lint.toml", ".context-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the base configuration file.
#[must_use]
pub fn resolve(explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(explicit, global_config_dir())
}

/// Testable core: accepts `global_dir` as parameter to avoid env var races.
fn resolve_inner(explicit: Option<&Path>, global_dir: Option<PathBuf>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.exists() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// Returns the global config directory path.
///
/// Resolution: `$CONTEXT_LINT_CONFIG_DIR` > `~/.context-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("CONTEXT_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".context-lint"))
}

/// Resolves the layered settings of each directory.
///
/// Results are memoised per directory; the resolver is filled before files
/// are checked and then only read. Directories should be absolute so the
/// upward walk sees every ancestor.
pub struct DirectorySettings {
    base: Arc<Settings>,
    cache: HashMap<PathBuf, Arc<Settings>>,
}

impl DirectorySettings {
    /// Creates a resolver layering directory files over `base`.
    #[must_use]
    pub fn new(base: Settings) -> Self {
        Self {
            base: Arc::new(base),
            cache: HashMap::new(),
        }
    }

    /// Settings in effect for files directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file on the way cannot be read or parsed.
    pub fn for_dir(&mut self, dir: &Path) -> Result<Arc<Settings>, context_lint_core::ConfigError> {
        if let Some(settings) = self.cache.get(dir) {
            return Ok(Arc::clone(settings));
        }

        let local = Self::load_local(dir)?;

        let parent = match (&local, dir.parent()) {
            (Some(l), _) if l.root => Arc::clone(&self.base),
            (_, Some(up)) if !up.as_os_str().is_empty() => self.for_dir(up)?,
            _ => Arc::clone(&self.base),
        };

        let resolved = match local {
            Some(l) => Arc::new(l.layered_over(&parent)),
            None => parent,
        };

        self.cache.insert(dir.to_path_buf(), Arc::clone(&resolved));
        Ok(resolved)
    }

    fn load_local(dir: &Path) -> Result<Option<Settings>, context_lint_core::ConfigError> {
        for name in PROJECT_CONFIG_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                tracing::debug!("Found directory config: {}", candidate.display());
                return Settings::from_file(&candidate).map(Some);
            }
        }
        Ok(None)
    }
}
