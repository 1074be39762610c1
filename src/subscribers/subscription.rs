//! # Subscription record: context, handler, countdown and throttle gate.
//!
//! A [`Subscription`] is owned by the registry entry it belongs to and shared (via
//! `Arc`) with any `emit` currently iterating a snapshot of that entry.
//!
//! ## Delivery path
//! ```text
//! emit ──► Subscription::deliver()
//!             ├─► countdown.claim()   remaining > 0 ? decrement (unless unbounded) : skip
//!             ├─► gate.admit()        seen++ % every == 0 ? pass : skip
//!             └─► handler(&context)
//! ```
//!
//! ## Rules
//! - The countdown only decreases; once it reaches zero the subscription is inert forever.
//! - The countdown is claimed **before** the handler runs, so a handler that re-emits its own
//!   event cannot be delivered past its bound.
//! - The throttle gate counts occurrences that passed the countdown; `seen` starts at zero.
//! - Both are atomics, so deliveries from a shared registry never need the registry lock.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::policies::{RepeatPolicy, ThrottlePolicy};

use super::handler::HandlerFn;

/// Countdown value meaning "unbounded".
const UNBOUNDED: u64 = u64::MAX;

/// Remaining-deliveries counter.
///
/// `RepeatPolicy::Times(u64::MAX)` is indistinguishable from `Unbounded`.
struct Countdown(AtomicU64);

impl Countdown {
    fn new(repeat: RepeatPolicy) -> Self {
        Self(AtomicU64::new(repeat.limit().unwrap_or(UNBOUNDED)))
    }

    /// Takes one delivery if any remain.
    fn claim(&self) -> bool {
        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| match n {
                0 => None,
                UNBOUNDED => Some(UNBOUNDED),
                n => Some(n - 1),
            })
            .is_ok()
    }

    fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire) > 0
    }

    fn zero(&self) {
        self.0.store(0, Ordering::Release);
    }

    fn remaining(&self) -> RepeatPolicy {
        match self.0.load(Ordering::Acquire) {
            UNBOUNDED => RepeatPolicy::Unbounded,
            n => RepeatPolicy::Times(n),
        }
    }
}

/// Frequency gate: `{every, seen}` owned by the subscription.
struct Gate {
    every: NonZeroU64,
    seen: AtomicU64,
}

impl Gate {
    fn new(every: NonZeroU64) -> Self {
        Self {
            every,
            seen: AtomicU64::new(0),
        }
    }

    /// Post-increment modulo: passes on the 1st, (every+1)-th, (2·every+1)-th... call.
    fn admit(&self) -> bool {
        let seen = self.seen.fetch_add(1, Ordering::AcqRel);
        seen % self.every.get() == 0
    }
}

/// Outcome of a single delivery attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Delivery {
    /// Handler was invoked.
    Fired,
    /// Countdown passed but the throttle gate held the handler back.
    Throttled,
    /// Countdown was already zero.
    Inert,
}

/// A single handler registration on one event name.
pub(crate) struct Subscription<C> {
    context: C,
    handler: HandlerFn<C>,
    countdown: Countdown,
    gate: Option<Gate>,
}

impl<C> Subscription<C> {
    pub(crate) fn new(
        context: C,
        handler: HandlerFn<C>,
        repeat: RepeatPolicy,
        throttle: ThrottlePolicy,
    ) -> Self {
        Self {
            context,
            handler,
            countdown: Countdown::new(repeat),
            gate: throttle.every().map(Gate::new),
        }
    }

    /// Runs the delivery path once for this occurrence.
    pub(crate) fn deliver(&self) -> Delivery {
        if !self.countdown.claim() {
            return Delivery::Inert;
        }
        if let Some(gate) = &self.gate {
            if !gate.admit() {
                return Delivery::Throttled;
            }
        }
        (self.handler)(&self.context);
        Delivery::Fired
    }

    /// Makes the subscription permanently inert.
    #[inline]
    pub(crate) fn deactivate(&self) {
        self.countdown.zero();
    }

    #[inline]
    pub(crate) fn is_live(&self) -> bool {
        self.countdown.is_live()
    }

    #[inline]
    pub(crate) fn context(&self) -> &C {
        &self.context
    }

    #[inline]
    pub(crate) fn remaining(&self) -> RepeatPolicy {
        self.countdown.remaining()
    }
}

impl<C: fmt::Debug> fmt::Debug for Subscription<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("context", &self.context)
            .field("remaining", &self.remaining())
            .field("throttle", &self.gate.as_ref().map(|g| g.every))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    fn counting(
        repeat: RepeatPolicy,
        throttle: ThrottlePolicy,
    ) -> (Subscription<()>, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        let handler: HandlerFn<()> = Arc::new(move |_: &()| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        (Subscription::new((), handler, repeat, throttle), hits)
    }

    #[test]
    fn test_bounded_countdown_goes_inert() {
        let (sub, hits) = counting(RepeatPolicy::Times(2), ThrottlePolicy::Off);
        assert_eq!(sub.deliver(), Delivery::Fired);
        assert_eq!(sub.remaining(), RepeatPolicy::Times(1));
        assert_eq!(sub.deliver(), Delivery::Fired);
        assert_eq!(sub.deliver(), Delivery::Inert);
        assert!(!sub.is_live());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unbounded_never_decrements() {
        let (sub, hits) = counting(RepeatPolicy::Unbounded, ThrottlePolicy::Off);
        for _ in 0..100 {
            assert_eq!(sub.deliver(), Delivery::Fired);
        }
        assert_eq!(sub.remaining(), RepeatPolicy::Unbounded);
        assert_eq!(hits.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn test_zero_repeat_never_fires() {
        let (sub, hits) = counting(RepeatPolicy::Times(0), ThrottlePolicy::Off);
        assert!(!sub.is_live());
        assert_eq!(sub.deliver(), Delivery::Inert);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_gate_fires_first_then_every_nth() {
        let (sub, hits) = counting(RepeatPolicy::Unbounded, ThrottlePolicy::from_frequency(3));
        let outcomes: Vec<Delivery> = (0..7).map(|_| sub.deliver()).collect();
        assert_eq!(
            outcomes,
            [
                Delivery::Fired,
                Delivery::Throttled,
                Delivery::Throttled,
                Delivery::Fired,
                Delivery::Throttled,
                Delivery::Throttled,
                Delivery::Fired,
            ]
        );
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_deactivate_is_permanent() {
        let (sub, hits) = counting(RepeatPolicy::Unbounded, ThrottlePolicy::Off);
        sub.deactivate();
        assert_eq!(sub.deliver(), Delivery::Inert);
        assert_eq!(sub.remaining(), RepeatPolicy::Times(0));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
