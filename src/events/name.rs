//! # Dot-delimited event names.
//!
//! Event names form a hierarchy through their `.`-separated segments:
//! `"a.b.c"` is a child of `"a.b"`, which is a child of `"a"`.
//!
//! The registry accepts **any** string as an event name and walks the hierarchy with
//! the plain helpers [`parent`] and [`ancestors`]. [`EventName`] is an optional,
//! validated wrapper for callers that want to reject malformed names up front.
//!
//! ## Ancestor walk
//! ```text
//! "a.b.c" ──parent──► "a.b" ──parent──► "a" ──parent──► (none)
//! ```
//!
//! ## Example
//! ```rust
//! use eventree::events::ancestors;
//!
//! let walk: Vec<&str> = ancestors("a.b.c").collect();
//! assert_eq!(walk, ["a.b.c", "a.b", "a"]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::RegistryError;

/// Segment separator.
pub const SEPARATOR: char = '.';

/// Returns the immediate parent of `name`: everything before the last `.`.
///
/// Returns `None` when `name` contains no `.`. No validation is done, so
/// `parent("a.")` is `Some("a")` and `parent(".")` is `Some("")`.
#[inline]
pub fn parent(name: &str) -> Option<&str> {
    name.rfind(SEPARATOR).map(|idx| &name[..idx])
}

/// Returns an iterator over `name` followed by each of its ancestors, most specific first.
#[inline]
pub fn ancestors(name: &str) -> Ancestors<'_> {
    Ancestors { next: Some(name) }
}

/// Iterator produced by [`ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = parent(current);
        Some(current)
    }
}

impl FusedIterator for Ancestors<'_> {}

/// A validated, non-empty event name without empty segments.
///
/// ## Rules
/// - The name must not be empty.
/// - No segment may be empty (`"a..b"`, `".a"` and `"a."` are rejected).
///
/// Registry methods take `&str`; pass [`EventName::as_str`] (or use `AsRef<str>`).
///
/// ## Example
/// ```rust
/// use eventree::EventName;
///
/// let name = EventName::parse("orders.created")?;
/// assert_eq!(name.parent(), Some("orders"));
/// assert!(name.is_sub_event_of("orders"));
/// assert!(EventName::parse("orders..created").is_err());
/// # Ok::<(), eventree::RegistryError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventName(String);

impl EventName {
    /// Validates `name` and wraps it.
    ///
    /// # Errors
    /// [`RegistryError::InvalidArgument`] when the name is empty or has an empty segment.
    pub fn parse(name: impl Into<String>) -> Result<Self, RegistryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::invalid("event name is empty"));
        }
        if let Some(pos) = name.split(SEPARATOR).position(str::is_empty) {
            return Err(RegistryError::invalid(format!(
                "event name {name:?} has an empty segment at position {pos}"
            )));
        }
        Ok(Self(name))
    }

    /// Borrows the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Immediate parent name, if any.
    #[inline]
    pub fn parent(&self) -> Option<&str> {
        parent(&self.0)
    }

    /// This name followed by its ancestors.
    #[inline]
    pub fn ancestors(&self) -> Ancestors<'_> {
        ancestors(&self.0)
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.0.split(SEPARATOR).count()
    }

    /// True if this name equals `event` or lies below it in the hierarchy.
    #[inline]
    pub fn is_sub_event_of(&self, event: &str) -> bool {
        super::matching::MatchRule::Hierarchical.matches(&self.0, event)
    }

    /// Unwraps into the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for EventName {
    type Error = RegistryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for EventName {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
