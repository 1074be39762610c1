//! # eventree
//!
//! **eventree** is a small hierarchical publish/subscribe registry for Rust.
//!
//! Handlers subscribe to dot-delimited event names (`"lecture.begin"`), publishers emit
//! events by name, and every handler registered on the emitted name **and on each of its
//! ancestors** is notified, most specific first. Delivery is synchronous, in-process and
//! happens inside the `emit` call.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     subscribe("a", ctx1, f1)   subscribe("a.b", ctx2, f2)   subscribe_times("a.b.c", ctx3, f3, 2)
//!                │                          │                              │
//!                ▼                          ▼                              ▼
//! ┌───────────────────────────────────────────────────────────────────────────────────┐
//! │  Registry<C>                                                                      │
//! │  - Mutex<HashMap<name, Vec<Arc<Subscription>>>>   (insertion order kept)          │
//! │  - Config { match_rule, unsubscribe }                                             │
//! └──────────────────────────────────────┬────────────────────────────────────────────┘
//!                                        │ emit("a.b.c")
//!                                        ▼
//!        level "a.b.c" ──► snapshot ──► Subscription::deliver() ──► f3(&ctx3)
//!        level "a.b"   ──► snapshot ──► Subscription::deliver() ──► f2(&ctx2)
//!        level "a"     ──► snapshot ──► Subscription::deliver() ──► f1(&ctx1)
//! ```
//!
//! ### Delivery
//! ```text
//! Subscription::deliver()
//!   ├─► countdown.claim()     RepeatPolicy: Unbounded | Times(n)   (0 → inert forever)
//!   ├─► gate.admit()          ThrottlePolicy: Off | Every(n)       (1st, then every n-th)
//!   └─► handler(&context)
//! ```
//!
//! ### Unsubscribe
//! ```text
//! unsubscribe("a", &ctx)
//!   └─► names where MatchRule::matches(name, "a")     Hierarchical (default) | Substring
//!         └─► subscriptions with context == ctx
//!               ├─ UnsubscribePolicy::Remove (default) ─► drop, delete empty names
//!               └─ UnsubscribePolicy::Decay            ─► zero countdown, keep in place
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types                                  |
//! |-------------------|---------------------------------------------------------------|--------------------------------------------|
//! | **Registry**      | Subscribe, unsubscribe, hierarchical emit, introspection.     | [`Registry`], [`create_registry`]          |
//! | **Policies**      | Bounded-count and bounded-frequency delivery.                 | [`RepeatPolicy`], [`ThrottlePolicy`]       |
//! | **Unsubscribe**   | Removal or decay; hierarchical or substring matching.         | [`UnsubscribePolicy`], [`MatchRule`]       |
//! | **Names**         | Ancestor walk helpers and an optional validated name.         | [`EventName`], [`events::ancestors`]       |
//! | **Configuration** | Centralize registry settings.                                 | [`Config`], [`RegistryBuilder`]            |
//! | **Errors**        | Validation boundary error.                                    | [`RegistryError`]                          |
//!
//! ## Logging
//! The crate logs through [`tracing`]: `debug` for subscribe/unsubscribe/compact/clear and
//! `trace` for each delivered level. Install any `tracing` subscriber to see them.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use eventree::create_registry;
//!
//! let log = Arc::new(Mutex::new(Vec::<String>::new()));
//! let registry = create_registry::<&'static str>();
//!
//! let l = Arc::clone(&log);
//! registry.subscribe("lecture", "daria", move |who| l.lock().unwrap().push(format!("{who}: lecture")));
//! let l = Arc::clone(&log);
//! registry.subscribe_times("lecture.begin", "sam", move |who| l.lock().unwrap().push(format!("{who}: begin")), 1);
//!
//! registry.emit("lecture.begin").emit("lecture.begin");
//! registry.unsubscribe("lecture", &"daria").emit("lecture.begin");
//!
//! assert_eq!(
//!     *log.lock().unwrap(),
//!     ["sam: begin", "daria: lecture", "daria: lecture"]
//! );
//! ```

mod core;
mod error;
mod policies;
mod subscribers;

pub mod events;

// ---- Public re-exports ----

pub use crate::core::{create_registry, Config, Registry, RegistryBuilder};
pub use error::RegistryError;
pub use events::{EventName, MatchRule};
pub use policies::{RepeatPolicy, ThrottlePolicy, UnsubscribePolicy};
