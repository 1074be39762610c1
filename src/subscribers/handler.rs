//! # Handler callables.
//!
//! A handler is any `Fn(&C) + Send + Sync + 'static`. The registry passes the
//! subscription's context explicitly on every call; there is no receiver rebinding.
//!
//! Handlers are stored type-erased as [`HandlerFn`] so one event name can hold handlers
//! of different closure types.
//!
//! ## Rules
//! - Handlers run synchronously inside `emit`, on the caller's thread.
//! - The registry lock is **not** held while a handler runs: handlers may call
//!   `emit`, `subscribe` and `unsubscribe` on the same registry.
//! - Mutable handler state belongs in the closure's captures (`Arc<AtomicUsize>`,
//!   `Arc<Mutex<_>>`, ...). Throttle state is kept by the registry, not the closure.

use std::sync::Arc;

/// Type-erased, shareable handler.
pub(crate) type HandlerFn<C> = Arc<dyn Fn(&C) + Send + Sync + 'static>;

/// Erases a concrete handler into a [`HandlerFn`].
#[inline]
pub(crate) fn erase<C, F>(handler: F) -> HandlerFn<C>
where
    F: Fn(&C) + Send + Sync + 'static,
{
    Arc::new(handler)
}
