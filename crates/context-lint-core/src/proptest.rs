//! Property-based tests for the boundary evaluator.

use crate::boundary::{evaluate, AllowReason, Decision};
use crate::config::{resolve, ContextConfig, RawContexts, RawDepth};
use crate::namespace::NamespacePath;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Segments drawn from a small alphabet so that random paths collide often.
fn arb_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("com".to_string()),
        Just("acme".to_string()),
        Just("app".to_string()),
        Just("core".to_string()),
        Just("infra".to_string()),
        Just("billing".to_string()),
        Just("shipping".to_string()),
        prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_]{0,7}").unwrap(),
    ]
}

fn arb_path() -> impl Strategy<Value = NamespacePath> {
    prop::collection::vec(arb_segment(), 1..8).prop_map(|segments| {
        NamespacePath::parse(&segments.join(".")).expect("segments are non-empty")
    })
}

fn arb_contexts() -> impl Strategy<Value = Option<RawContexts>> {
    prop::option::of(
        prop::collection::vec(arb_segment(), 1..4)
            .prop_map(|s| RawContexts::from(s.join(",").as_str())),
    )
}

fn arb_config() -> impl Strategy<Value = ContextConfig> {
    (prop::option::of(-2i64..8), arb_contexts(), arb_contexts()).prop_map(
        |(depth, excluded, authorized)| {
            resolve(
                depth.map(RawDepth::Int).as_ref(),
                excluded.as_ref(),
                authorized.as_ref(),
            )
        },
    )
}

/// Paths long enough to reach the context segment for any valid depth.
fn arb_long_path() -> impl Strategy<Value = NamespacePath> {
    prop::collection::vec(arb_segment(), 8..12).prop_map(|segments| {
        NamespacePath::parse(&segments.join(".")).expect("segments are non-empty")
    })
}

/// Rewrites `imported` so that it starts with the first `len` segments of `declaring`.
fn with_prefix_of(declaring: &NamespacePath, imported: &NamespacePath, len: usize) -> NamespacePath {
    let mut segments: Vec<String> = declaring.segments().iter().take(len).cloned().collect();
    segments.extend(imported.segments().iter().skip(segments.len()).cloned());
    NamespacePath::parse(&segments.join(".")).expect("segments are non-empty")
}

/// Replaces the segment at `index` (which must exist) with `value`.
fn with_segment(path: &NamespacePath, index: usize, value: &str) -> NamespacePath {
    let mut segments = path.segments().to_vec();
    segments[index] = value.to_owned();
    NamespacePath::parse(&segments.join(".")).expect("segments are non-empty")
}

/// Picks one member of a non-empty context set.
fn pick<'a>(contexts: &'a BTreeSet<String>, index: &prop::sample::Index) -> &'a str {
    let members: Vec<&String> = contexts.iter().collect();
    members[index.index(members.len())]
}

proptest! {
    /// Paths that agree through the context segment are always allowed.
    #[test]
    fn same_context_is_allowed(
        declaring in arb_long_path(),
        imported in arb_path(),
        config in arb_config(),
    ) {
        let imported = with_prefix_of(&declaring, &imported, config.context_index() + 1);
        prop_assert!(declaring.shares_prefix(&imported, config.context_index() + 1));
        prop_assert!(evaluate(&declaring, &imported, &config).is_allowed());
    }

    /// An excluded declaring context may import anything.
    #[test]
    fn excluded_declaring_context_is_allowed(
        declaring in arb_long_path(),
        imported in arb_path(),
        config in arb_config(),
        index in any::<prop::sample::Index>(),
    ) {
        let context = pick(config.excluded_contexts(), &index);
        // contexts containing a dot cannot appear as a single segment
        prop_assume!(!context.is_empty() && !context.contains('.'));
        let declaring = with_segment(&declaring, config.context_index(), context);
        prop_assert!(evaluate(&declaring, &imported, &config).is_allowed());
    }

    /// An authorized imported context is importable from anywhere.
    #[test]
    fn authorized_imported_context_is_allowed(
        declaring in arb_path(),
        imported in arb_long_path(),
        config in arb_config(),
        index in any::<prop::sample::Index>(),
    ) {
        let context = pick(config.authorized_contexts(), &index);
        prop_assume!(!context.is_empty() && !context.contains('.'));
        let imported = with_segment(&imported, config.context_index(), context);
        prop_assert!(evaluate(&declaring, &imported, &config).is_allowed());
    }

    /// Paths that disagree on the application prefix are out of scope.
    #[test]
    fn different_application_is_allowed(
        declaring in arb_path(),
        imported in arb_path(),
        config in arb_config(),
    ) {
        prop_assume!(!declaring.shares_prefix(&imported, config.application_prefix_len() + 1));
        prop_assert_eq!(
            evaluate(&declaring, &imported, &config),
            Decision::Allow(AllowReason::OutsideApplication)
        );
    }

    /// Evaluation is deterministic.
    #[test]
    fn evaluation_is_pure(
        declaring in arb_path(),
        imported in arb_path(),
        config in arb_config(),
    ) {
        let first = evaluate(&declaring, &imported, &config);
        let snapshot = config.clone();
        for _ in 0..3 {
            prop_assert_eq!(evaluate(&declaring, &imported, &config), first);
        }
        prop_assert_eq!(config, snapshot);
    }

    /// Resolved depth is never below the minimum.
    #[test]
    fn resolved_depth_is_at_least_two(config in arb_config()) {
        prop_assert!(config.namespace_depth() >= 2);
    }

    /// A denial only happens when every allowing condition fails.
    #[test]
    fn deny_implies_different_contexts(
        declaring in arb_path(),
        imported in arb_path(),
        config in arb_config(),
    ) {
        if evaluate(&declaring, &imported, &config) == Decision::Deny {
            let ctx = config.context_index();
            prop_assert!(declaring.shares_prefix(&imported, config.application_prefix_len() + 1));
            prop_assert!(!declaring.shares_prefix(&imported, ctx + 1));
            prop_assert!(!declaring.segment_at(ctx).is_some_and(|c| config.is_excluded(c)));
            prop_assert!(!imported.segment_at(ctx).is_some_and(|c| config.is_authorized(c)));
        }
    }
}
