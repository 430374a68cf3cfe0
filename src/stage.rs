//! Core constant-case stage abstraction.
//!
//! A constant-case conversion is five small rewrites applied in a fixed
//! order. Each rewrite is a zero-sized [`Stage`]; a [`Process`](crate::process::Process)
//! chains them.
//!
//! Every stage is infallible and allocation-aware: `needs_apply` is an exact
//! pre-check, so a pipeline that skips stages reporting `false` hands the
//! caller's `&str` straight back when nothing would change.

pub mod collapse_whitespace;
pub mod split_camel_case;
pub mod strip_symbols;
pub mod trim_whitespace;
pub mod upper_case;

use std::borrow::Cow;

/// A single rewrite step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and test diagnostics.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Must return `true` iff `apply` would change `text`.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called on text for which `needs_apply` is `false`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
