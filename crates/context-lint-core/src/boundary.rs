//! Boundary evaluation: may a file in one context import from another?
//!
//! [`evaluate`] is a pure function over two [`NamespacePath`]s and a
//! [`ContextConfig`]. The checks run in a fixed order and the first one that
//! allows the import wins:
//!
//! 1. the paths do not share the application prefix (external import),
//! 2. the declaring context is excluded,
//! 3. the imported context is authorized,
//! 4. both paths are in the same context.
//!
//! Anything else is denied.

use crate::config::ContextConfig;
use crate::namespace::NamespacePath;

/// Which check allowed an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowReason {
    /// The import is not between two contexts of the same application.
    OutsideApplication,
    /// The declaring file lives in an excluded context.
    ExcludedContext,
    /// The imported identifier lives in an authorized context.
    AuthorizedContext,
    /// Both paths belong to the same context.
    SameContext,
}

/// Outcome of evaluating one import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The import is permitted.
    Allow(AllowReason),
    /// The import reaches into another context.
    Deny,
}

impl Decision {
    /// `true` for every [`Decision::Allow`].
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow(_))
    }
}

/// Decides whether `declaring` may import `imported` under `config`.
#[must_use]
pub fn evaluate(
    declaring: &NamespacePath,
    imported: &NamespacePath,
    config: &ContextConfig,
) -> Decision {
    let context_index = config.context_index();

    if !declaring.shares_prefix(imported, config.application_prefix_len() + 1) {
        return Decision::Allow(AllowReason::OutsideApplication);
    }

    if declaring
        .segment_at(context_index)
        .is_some_and(|context| config.is_excluded(context))
    {
        return Decision::Allow(AllowReason::ExcludedContext);
    }

    if imported
        .segment_at(context_index)
        .is_some_and(|context| config.is_authorized(context))
    {
        return Decision::Allow(AllowReason::AuthorizedContext);
    }

    if declaring.shares_prefix(imported, context_index + 1) {
        return Decision::Allow(AllowReason::SameContext);
    }

    Decision::Deny
}
