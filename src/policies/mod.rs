//! Delivery and unsubscription policies.
//!
//! This module groups the knobs that control **how many times** and **how often** a
//! subscription is delivered, and **what unsubscribe does** with it.
//!
//! ## Contents
//! - [`RepeatPolicy`]      countdown bound (unbounded / first `n` occurrences)
//! - [`ThrottlePolicy`]    frequency gate (every occurrence / 1st and every `n`-th)
//! - [`UnsubscribePolicy`] removal or decay of detached subscriptions
//!
//! ## Quick wiring
//! ```text
//! Registry::subscribe_with(event, ctx, handler, repeat, throttle)
//!      └─► Subscription { countdown: repeat, gate: throttle }
//!            on each occurrence: countdown.claim() → gate.admit() → handler(&ctx)
//!
//! Config { unsubscribe: UnsubscribePolicy, .. }
//!      └─► Registry::unsubscribe uses it to remove or decay
//! ```
//!
//! ## Defaults
//! - `RepeatPolicy::Unbounded`
//! - `ThrottlePolicy::Off`
//! - `UnsubscribePolicy::Remove`

mod repeat;
mod throttle;
mod unsubscribe;

pub use repeat::RepeatPolicy;
pub use throttle::ThrottlePolicy;
pub use unsubscribe::UnsubscribePolicy;
