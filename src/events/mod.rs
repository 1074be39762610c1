//! Event names: hierarchy helpers and sub-event matching.
//!
//! This module groups everything the registry knows about event **names**.
//! Names are plain strings; the registry never validates them.
//!
//! ## Contents
//! - [`parent`], [`ancestors`], [`Ancestors`] the walk used by `emit`
//! - [`EventName`] optional validated name (rejects empty segments)
//! - [`MatchRule`] what `unsubscribe` treats as a sub-event
//!
//! ## Quick reference
//! ```text
//! emit("a.b.c")            ─► ancestors: "a.b.c" → "a.b" → "a"
//! unsubscribe("a", ctx)    ─► every registered name where MatchRule::matches(name, "a")
//! ```

mod matching;
mod name;

pub use matching::MatchRule;
pub use name::{ancestors, parent, Ancestors, EventName, SEPARATOR};
