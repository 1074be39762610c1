//! # Sub-event matching rules for unsubscribe fan-out.
//!
//! `unsubscribe(event, ctx)` detaches `ctx` from every registered name that counts as a
//! "sub-event" of `event`. [`MatchRule`] decides what counts.
//!
//! - [`MatchRule::Hierarchical`] exact name or dot-delimited descendant (default).
//! - [`MatchRule::Substring`] looser textual match; matches partial segments too.
//!
//! ## Comparison
//! ```text
//! registered      event   Hierarchical  Substring
//! "a"             "a"     yes           yes
//! "a.b"           "a"     yes           yes
//! "ab"            "a"     no            yes   (prefix "a")
//! "x.a"           "a"     no            yes   (suffix "a")
//! "x.a.y"         "a"     no            yes   (".a.")
//! "xa.y"          "a"     no            no
//! ```
//!
//! The emit ancestor walk is always hierarchical, so only `Hierarchical` keeps
//! unsubscribe and emit consistent.

use super::name::SEPARATOR;

/// Rule deciding whether a registered event name is a sub-event of another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MatchRule {
    /// `name == event`, or `name` starts with `event` followed by `.` (default).
    #[default]
    Hierarchical,

    /// `name` starts with `event`, ends with `event`, or contains `.event.`.
    ///
    /// Produces false positives on partial segments (`"ab"` matches `"a"`).
    Substring,
}

impl MatchRule {
    /// Returns `true` if `name` is a sub-event of `event` under this rule.
    ///
    /// # Example
    /// ```rust
    /// use eventree::MatchRule;
    ///
    /// assert!(MatchRule::Hierarchical.matches("a.b", "a"));
    /// assert!(!MatchRule::Hierarchical.matches("ab", "a"));
    /// assert!(MatchRule::Substring.matches("ab", "a"));
    /// ```
    pub fn matches(&self, name: &str, event: &str) -> bool {
        match self {
            MatchRule::Hierarchical => match name.strip_prefix(event) {
                Some(rest) => rest.is_empty() || rest.starts_with(SEPARATOR),
                None => false,
            },
            MatchRule::Substring => {
                name.starts_with(event)
                    || name.ends_with(event)
                    || name.contains(&format!("{SEPARATOR}{event}{SEPARATOR}"))
            }
        }
    }

    /// Short stable label for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            MatchRule::Hierarchical => "hierarchical",
            MatchRule::Substring => "substring",
        }
    }
}
