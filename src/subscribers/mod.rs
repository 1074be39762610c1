//! # Subscriptions held by the registry.
//!
//! This module provides the handler type and the per-registration record the
//! [`Registry`](crate::Registry) keeps for each `subscribe*` call.
//!
//! ## Architecture
//! ```text
//! Registry
//!   └─► "a.b"  ──► [ Subscription, Subscription, ... ]   (insertion order = call order)
//!                       │
//!                       ├── context   (compared with == on unsubscribe)
//!                       ├── handler   (HandlerFn<C>, called with &context)
//!                       ├── countdown (RepeatPolicy, claimed per occurrence)
//!                       └── gate      (ThrottlePolicy, {every, seen})
//! ```

mod handler;
mod subscription;

pub(crate) use handler::erase;
pub(crate) use subscription::{Delivery, Subscription};
