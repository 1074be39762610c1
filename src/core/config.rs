//! # Registry configuration.
//!
//! Provides [`Config`] centralized settings for a [`Registry`](crate::Registry).
//!
//! Config is used in two ways:
//! 1. **Direct creation**: `Registry::new(config)`
//! 2. **Builder**: `RegistryBuilder::default().with_match_rule(..).build()`
//!
//! ## Defaults
//! - `match_rule = MatchRule::Hierarchical` (same rule as the emit ancestor walk)
//! - `unsubscribe = UnsubscribePolicy::Remove` (detached subscriptions are dropped)

use crate::events::MatchRule;
use crate::policies::UnsubscribePolicy;

/// Configuration for a registry.
///
/// ## Field semantics
/// - `match_rule`: which registered names `unsubscribe(event, ctx)` fans out to
/// - `unsubscribe`: whether detached subscriptions are removed or left inert
///
/// ## Notes
/// All fields are public for flexibility; both are plain `Copy` enums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Sub-event rule used by `unsubscribe`.
    ///
    /// `emit` always walks ancestors hierarchically; only [`MatchRule::Hierarchical`]
    /// keeps the two consistent.
    pub match_rule: MatchRule,

    /// How `unsubscribe` detaches matching subscriptions.
    ///
    /// With [`UnsubscribePolicy::Decay`] inert entries accumulate until
    /// [`Registry::compact`](crate::Registry::compact) is called.
    pub unsubscribe: UnsubscribePolicy,
}

impl Config {
    /// True if unsubscribe keeps inert entries in place.
    #[inline]
    pub fn retains_inert(&self) -> bool {
        matches!(self.unsubscribe, UnsubscribePolicy::Decay)
    }
}
