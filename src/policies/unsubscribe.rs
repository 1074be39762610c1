//! # Unsubscribe policy: what happens to detached subscriptions.
//!
//! - [`UnsubscribePolicy::Remove`] drop matching subscriptions and delete names whose
//!   list becomes empty (default).
//! - [`UnsubscribePolicy::Decay`] zero the countdown of matching subscriptions and keep
//!   them in place; emit skips them forever.
//!
//! Under both policies the subscription's countdown is zeroed first, so an `emit` that
//! is already iterating a snapshot skips it too.
//!
//! ## Trade-offs
//! - **Remove**: memory is released immediately.
//! - **Decay**: the name → list map only grows; call `Registry::compact` to reclaim.

/// Policy deciding how `unsubscribe` detaches subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnsubscribePolicy {
    /// Physically remove matching subscriptions (default).
    #[default]
    Remove,
    /// Leave matching subscriptions in place with a zero countdown.
    Decay,
}

impl UnsubscribePolicy {
    /// Short stable label for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            UnsubscribePolicy::Remove => "remove",
            UnsubscribePolicy::Decay => "decay",
        }
    }
}
