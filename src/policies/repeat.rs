//! # Repeat policy: how many deliveries a subscription gets.
//!
//! [`RepeatPolicy`] bounds the number of times a subscription's handler may run.
//!
//! - [`RepeatPolicy::Unbounded`] fires on every occurrence (default).
//! - [`RepeatPolicy::Times`] fires on the first `n` occurrences, then goes inert.
//!
//! Occurrences include ancestor-triggered ones: a subscription on `"a"` counts
//! `emit("a.b")` as one occurrence.
//!
//! ## Zero
//! `Times(0)` is a valid policy that never fires. Only [`RepeatPolicy::from_times`]
//! (used by `subscribe_times`) normalizes `0` and negatives to `Unbounded`.
//! ```text
//! subscribe_with_repeat(.., Times(0))   → never fires
//! subscribe_times(.., 0)                → Unbounded
//! subscribe_times(.., -5)               → Unbounded
//! subscribe_times(.., 3)                → Times(3)
//! ```

/// Policy bounding how many times a subscription is delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RepeatPolicy {
    /// Deliver on every occurrence (default).
    #[default]
    Unbounded,
    /// Deliver on at most this many occurrences.
    Times(u64),
}

impl RepeatPolicy {
    /// Normalizes a caller-supplied count: `times <= 0` means unbounded.
    ///
    /// # Example
    /// ```rust
    /// use eventree::RepeatPolicy;
    ///
    /// assert_eq!(RepeatPolicy::from_times(3), RepeatPolicy::Times(3));
    /// assert_eq!(RepeatPolicy::from_times(0), RepeatPolicy::Unbounded);
    /// assert_eq!(RepeatPolicy::from_times(-1), RepeatPolicy::Unbounded);
    /// ```
    pub fn from_times(times: i64) -> Self {
        match u64::try_from(times) {
            Ok(n) if n > 0 => RepeatPolicy::Times(n),
            _ => RepeatPolicy::Unbounded,
        }
    }

    /// Returns the bound as an `Option` (`None` = unbounded).
    #[inline]
    pub fn limit(&self) -> Option<u64> {
        match self {
            RepeatPolicy::Unbounded => None,
            RepeatPolicy::Times(n) => Some(*n),
        }
    }

    /// True if this policy can never fire.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, RepeatPolicy::Times(0))
    }
}
