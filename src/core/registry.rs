//! # Event registry - subscription storage and hierarchical emit.
//!
//! [`Registry`] maps event names to ordered lists of subscriptions and delivers each
//! emitted event to the subscribers of that name **and** of every ancestor name.
//!
//! ## Architecture
//! ```text
//! subscribe("a.b", ctx, f)  ──► entries["a.b"].push(Subscription)
//!
//! emit("a.b.c")
//!   ├─► level "a.b.c": lock → snapshot live entries → unlock → deliver each in order
//!   ├─► level "a.b"  : lock → snapshot live entries → unlock → deliver each in order
//!   └─► level "a"    : lock → snapshot live entries → unlock → deliver each in order
//!
//! unsubscribe("a", ctx)
//!   └─► every name where MatchRule::matches(name, "a"):
//!         subscriptions with context == ctx → deactivate → (Remove) drop / (Decay) keep
//! ```
//!
//! ## Rules
//! - Each level delivers only to subscribers registered on exactly that literal name.
//! - Insertion order is notification order within a level.
//! - The lock is **never** held while a handler runs, so handlers may re-enter the registry.
//! - Subscriptions leave the map under the lock but are dropped after it, so a context
//!   whose `Drop` re-enters the registry does not deadlock.
//! - A level's snapshot is taken when the walk reaches it: changes a handler makes to a
//!   parent name's list are visible when the walk gets there.
//! - Subscriptions added during a level are not delivered in that level.
//! - Subscriptions detached during a level are skipped if they have not fired yet.
//! - Unknown names, unknown contexts and malformed names are silent no-ops.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::core::Config;
use crate::events::ancestors;
use crate::policies::{RepeatPolicy, ThrottlePolicy, UnsubscribePolicy};
use crate::subscribers::{erase, Delivery, Subscription};

type Entries<C> = HashMap<String, Vec<Arc<Subscription<C>>>>;

/// Hierarchical publish/subscribe registry.
///
/// `C` is the subscription context: passed to the handler on every delivery and
/// compared with `==` by [`Registry::unsubscribe`]. It is never inspected otherwise.
///
/// All operations take `&self` and return `&Self`, so calls chain and the registry can
/// be shared through an `Arc`.
///
/// ## Example
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use eventree::Registry;
///
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let registry = Registry::default();
///
/// for level in ["slide", "slide.show", "slide.show.next"] {
///     let log = Arc::clone(&log);
///     registry.subscribe(level, level, move |ctx| log.lock().unwrap().push(*ctx));
/// }
///
/// registry.emit("slide.show.next");
/// assert_eq!(*log.lock().unwrap(), ["slide.show.next", "slide.show", "slide"]);
/// ```
pub struct Registry<C> {
    cfg: Config,
    entries: Mutex<Entries<C>>,
}

impl<C> Registry<C> {
    /// Creates an empty registry with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the configuration this registry was built with.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Subscribes `handler` to `event` with unbounded repeat.
    ///
    /// No validation of `event` is performed; any string is accepted.
    pub fn subscribe<F>(&self, event: &str, context: C, handler: F) -> &Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.subscribe_with(
            event,
            context,
            handler,
            RepeatPolicy::Unbounded,
            ThrottlePolicy::Off,
        )
    }

    /// Subscribes `handler` to `event` with an explicit countdown.
    ///
    /// `RepeatPolicy::Times(0)` is kept as is: the subscription never fires.
    pub fn subscribe_with_repeat<F>(
        &self,
        event: &str,
        context: C,
        handler: F,
        repeat: RepeatPolicy,
    ) -> &Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.subscribe_with(event, context, handler, repeat, ThrottlePolicy::Off)
    }

    /// Subscribes `handler` to at most `times` occurrences of `event`.
    ///
    /// `times <= 0` means unbounded. Occurrences triggered by descendant events count.
    ///
    /// # Example
    /// ```rust
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use eventree::Registry;
    ///
    /// let hits = Arc::new(AtomicUsize::new(0));
    /// let h = Arc::clone(&hits);
    /// let registry = Registry::default();
    /// registry.subscribe_times("tick", (), move |_: &()| { h.fetch_add(1, Ordering::SeqCst); }, 2);
    ///
    /// registry.emit("tick").emit("tick.sub").emit("tick");
    /// assert_eq!(hits.load(Ordering::SeqCst), 2);
    /// ```
    pub fn subscribe_times<F>(&self, event: &str, context: C, handler: F, times: i64) -> &Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.subscribe_with(
            event,
            context,
            handler,
            RepeatPolicy::from_times(times),
            ThrottlePolicy::Off,
        )
    }

    /// Subscribes `handler` to the 1st occurrence of `event` and every `frequency`-th after it.
    ///
    /// `frequency <= 0` disables throttling. Repeat is unbounded.
    ///
    /// # Example
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use eventree::Registry;
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let registry: Registry<()> = Registry::default();
    /// let occurrence = Arc::new(Mutex::new(0));
    ///
    /// let (s, o) = (Arc::clone(&seen), Arc::clone(&occurrence));
    /// registry.subscribe("beat", (), move |_| *o.lock().unwrap() += 1);
    /// let o = Arc::clone(&occurrence);
    /// registry.subscribe_throttled("beat", (), move |_| s.lock().unwrap().push(*o.lock().unwrap()), 3);
    ///
    /// for _ in 0..7 {
    ///     registry.emit("beat");
    /// }
    /// assert_eq!(*seen.lock().unwrap(), [1, 4, 7]);
    /// ```
    pub fn subscribe_throttled<F>(
        &self,
        event: &str,
        context: C,
        handler: F,
        frequency: i64,
    ) -> &Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.subscribe_with(
            event,
            context,
            handler,
            RepeatPolicy::Unbounded,
            ThrottlePolicy::from_frequency(frequency),
        )
    }

    /// General form of every `subscribe*` method.
    ///
    /// Appends a subscription to the list for `event`, creating the list if absent.
    pub fn subscribe_with<F>(
        &self,
        event: &str,
        context: C,
        handler: F,
        repeat: RepeatPolicy,
        throttle: ThrottlePolicy,
    ) -> &Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        let sub = Arc::new(Subscription::new(context, erase(handler), repeat, throttle));
        let mut entries = self.entries();
        match entries.get_mut(event) {
            Some(list) => list.push(sub),
            None => {
                entries.insert(event.to_owned(), vec![sub]);
            }
        }
        drop(entries);
        debug!(
            event,
            ?repeat,
            ?throttle,
            inert = repeat.is_exhausted(),
            "subscribed"
        );
        self
    }

    /// Emits `event`, notifying its subscribers and then those of each ancestor.
    ///
    /// `emit("a.b.c")` delivers to `"a.b.c"`, then `"a.b"`, then `"a"`. Emitting a name
    /// nobody subscribed to is a no-op (ancestors are still walked).
    ///
    /// A panicking handler unwinds out of `emit`; the registry stays consistent and the
    /// remaining subscribers of this emit are not notified.
    pub fn emit(&self, event: &str) -> &Self {
        for level in ancestors(event) {
            let Some(snapshot) = self.snapshot(level) else {
                continue;
            };

            let mut fired = 0usize;
            let mut throttled = 0usize;
            for sub in &snapshot {
                match sub.deliver() {
                    Delivery::Fired => fired += 1,
                    Delivery::Throttled => throttled += 1,
                    Delivery::Inert => {}
                }
            }
            trace!(event, level, fired, throttled, "delivered");
        }
        self
    }

    /// Number of live (non-inert) subscriptions on exactly `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.entries()
            .get(event)
            .map_or(0, |list| list.iter().filter(|s| s.is_live()).count())
    }

    /// Registered event names, sorted.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of stored subscriptions, inert ones included.
    pub fn len(&self) -> usize {
        self.entries().values().map(Vec::len).sum()
    }

    /// True if no subscriptions are stored.
    pub fn is_empty(&self) -> bool {
        self.entries().values().all(Vec::is_empty)
    }

    /// Drops inert subscriptions and names left without any; returns how many were dropped.
    ///
    /// Dropped subscriptions are released after the lock, so a context or handler whose
    /// `Drop` re-enters the registry is fine.
    pub fn compact(&self) -> usize {
        let mut released: Vec<Arc<Subscription<C>>> = Vec::new();
        let mut entries = self.entries();
        entries.retain(|_, list| {
            let (live, inert): (Vec<_>, Vec<_>) =
                std::mem::take(list).into_iter().partition(|s| s.is_live());
            *list = live;
            released.extend(inert);
            !list.is_empty()
        });
        drop(entries);

        let dropped = released.len();
        drop(released);
        debug!(dropped, "compacted");
        dropped
    }

    /// Detaches every subscription.
    pub fn clear(&self) -> &Self {
        let drained: Entries<C> = std::mem::take(&mut *self.entries());
        let mut count = 0usize;
        for sub in drained.values().flatten() {
            sub.deactivate();
            count += 1;
        }
        drop(drained);
        debug!(count, "cleared");
        self
    }

    /// Clones the live subscriptions of exactly `name`, releasing the lock before returning.
    fn snapshot(&self, name: &str) -> Option<Vec<Arc<Subscription<C>>>> {
        let entries = self.entries();
        let list = entries.get(name)?;
        Some(list.iter().filter(|s| s.is_live()).cloned().collect())
    }

    /// Locks the map. Registry code never leaves it half-updated, so poison is ignored.
    fn entries(&self) -> MutexGuard<'_, Entries<C>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: PartialEq> Registry<C> {
    /// Detaches `context` from `event` and every sub-event of it.
    ///
    /// Which names count as sub-events is decided by [`Config::match_rule`]; what happens to
    /// detached subscriptions by [`Config::unsubscribe`]. Either way they never fire again,
    /// including later in an emit that is already running.
    ///
    /// Removed subscriptions are released after the lock, so a context or handler whose
    /// `Drop` re-enters the registry is fine.
    pub fn unsubscribe(&self, event: &str, context: &C) -> &Self {
        let rule = self.cfg.match_rule;
        let mut detached = 0usize;
        let mut released: Vec<Arc<Subscription<C>>> = Vec::new();
        let mut entries = self.entries();

        match self.cfg.unsubscribe {
            UnsubscribePolicy::Remove => entries.retain(|name, list| {
                if !rule.matches(name, event) {
                    return true;
                }
                let (gone, kept): (Vec<_>, Vec<_>) = std::mem::take(list)
                    .into_iter()
                    .partition(|s| s.context() == context);
                for s in &gone {
                    s.deactivate();
                }
                detached += gone.len();
                released.extend(gone);
                *list = kept;
                !list.is_empty()
            }),
            UnsubscribePolicy::Decay => {
                for (_, list) in entries.iter().filter(|(name, _)| rule.matches(name, event)) {
                    for s in list.iter().filter(|s| s.context() == context && s.is_live()) {
                        s.deactivate();
                        detached += 1;
                    }
                }
            }
        }
        drop(entries);
        drop(released);

        debug!(
            event,
            detached,
            rule = rule.as_label(),
            policy = self.cfg.unsubscribe.as_label(),
            retains_inert = self.cfg.retains_inert(),
            "unsubscribed"
        );
        self
    }
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<C> fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries();
        f.debug_struct("Registry")
            .field("config", &self.cfg)
            .field("events", &entries.len())
            .field("subscriptions", &entries.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

/// Creates a registry with the default configuration.
///
/// Shorthand for [`Registry::default`].
pub fn create_registry<C>() -> Registry<C> {
    Registry::default()
}
