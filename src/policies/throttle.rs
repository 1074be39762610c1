//! # Throttle policy: how often a subscription is delivered.
//!
//! [`ThrottlePolicy`] thins out deliveries by occurrence count.
//!
//! - [`ThrottlePolicy::Off`] every occurrence reaches the handler (default).
//! - [`ThrottlePolicy::Every`] the 1st occurrence and then every `n`-th after it.
//!
//! The counter lives in the subscription (see `subscribers::Subscription`), starts at
//! zero and is read before it is incremented, so the very first occurrence fires:
//! ```text
//! Every(3):  occurrence  1  2  3  4  5  6  7
//!            seen        0  1  2  3  4  5  6
//!            fires       ✓  ·  ·  ✓  ·  ·  ✓
//! ```

use std::num::NonZeroU64;

/// Policy thinning out deliveries to a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThrottlePolicy {
    /// No throttling (default).
    #[default]
    Off,
    /// Deliver on occurrence 1, then every `n`-th occurrence after it.
    Every(NonZeroU64),
}

impl ThrottlePolicy {
    /// Normalizes a caller-supplied frequency: `frequency <= 0` disables throttling.
    ///
    /// # Example
    /// ```rust
    /// use std::num::NonZeroU64;
    /// use eventree::ThrottlePolicy;
    ///
    /// assert_eq!(ThrottlePolicy::from_frequency(0), ThrottlePolicy::Off);
    /// assert_eq!(
    ///     ThrottlePolicy::from_frequency(3),
    ///     ThrottlePolicy::Every(NonZeroU64::new(3).unwrap())
    /// );
    /// ```
    pub fn from_frequency(frequency: i64) -> Self {
        u64::try_from(frequency)
            .ok()
            .and_then(NonZeroU64::new)
            .map_or(ThrottlePolicy::Off, ThrottlePolicy::Every)
    }

    /// Returns the divisor, if throttling is enabled.
    #[inline]
    pub fn every(&self) -> Option<NonZeroU64> {
        match self {
            ThrottlePolicy::Off => None,
            ThrottlePolicy::Every(n) => Some(*n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_frequency() {
        assert_eq!(ThrottlePolicy::from_frequency(-4), ThrottlePolicy::Off);
        assert_eq!(ThrottlePolicy::from_frequency(0), ThrottlePolicy::Off);
        assert_eq!(
            ThrottlePolicy::from_frequency(1).every().map(NonZeroU64::get),
            Some(1)
        );
        assert_eq!(
            ThrottlePolicy::from_frequency(7).every().map(NonZeroU64::get),
            Some(7)
        );
    }

    #[test]
    fn test_default_is_off() {
        assert_eq!(ThrottlePolicy::default(), ThrottlePolicy::Off);
        assert!(ThrottlePolicy::default().every().is_none());
    }
}
