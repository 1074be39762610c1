//! Error types used by the eventree registry.
//!
//! Registry operations themselves never fail: unknown event names, missing
//! subscriptions and malformed names are silent no-ops. The only fallible
//! surface is the optional validation boundary ([`EventName::parse`](crate::EventName::parse)),
//! which reports [`RegistryError::InvalidArgument`].
//!
//! Like the rest of the crate, the error provides helper methods (`as_label`, `as_message`)
//! for logging/metrics.

use thiserror::Error;

/// # Errors produced at the eventree API boundary.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An argument violated its contract (e.g. an event name with an empty segment).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: String,
    },
}

impl RegistryError {
    /// Shorthand for building [`RegistryError::InvalidArgument`].
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        RegistryError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventree::EventName;
    ///
    /// let err = EventName::parse("a..b").unwrap_err();
    /// assert_eq!(err.as_label(), "invalid_argument");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::InvalidArgument { .. } => "invalid_argument",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RegistryError::InvalidArgument { reason } => format!("invalid argument: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_message() {
        let err = RegistryError::invalid("empty event name");
        assert_eq!(err.as_label(), "invalid_argument");
        assert_eq!(err.as_message(), "invalid argument: empty event name");
        assert_eq!(err.to_string(), "invalid argument: empty event name");
    }
}
