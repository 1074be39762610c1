use crate::core::Config;
use crate::events::MatchRule;
use crate::policies::UnsubscribePolicy;

use super::registry::Registry;

/// Builder for constructing a [`Registry`] with non-default policies.
///
/// ## Example
/// ```rust
/// use eventree::{MatchRule, Registry, RegistryBuilder, UnsubscribePolicy};
///
/// let registry: Registry<u32> = RegistryBuilder::default()
///     .with_match_rule(MatchRule::Hierarchical)
///     .with_unsubscribe_policy(UnsubscribePolicy::Decay)
///     .build();
/// assert_eq!(registry.config().unsubscribe, UnsubscribePolicy::Decay);
/// ```
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct RegistryBuilder {
    cfg: Config,
}

impl RegistryBuilder {
    /// Creates a new builder starting from the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Sets the sub-event rule used by `unsubscribe`.
    pub fn with_match_rule(mut self, rule: MatchRule) -> Self {
        self.cfg.match_rule = rule;
        self
    }

    /// Sets how `unsubscribe` detaches subscriptions.
    pub fn with_unsubscribe_policy(mut self, policy: UnsubscribePolicy) -> Self {
        self.cfg.unsubscribe = policy;
        self
    }

    /// Builds an empty registry with the accumulated configuration.
    pub fn build<C>(self) -> Registry<C> {
        Registry::new(self.cfg)
    }
}
