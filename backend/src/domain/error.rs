//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map each variant to
//! an HTTP status code and a JSON envelope; nothing in this module knows
//! about actix or status codes.

/// Failure categories produced by the event registry, registration
/// coordinator, and stats aggregator.
///
/// ## Propagation
///
/// Errors are produced deep inside the domain services and propagate
/// unchanged to the HTTP adapter. Any failure raised inside a storage
/// transaction has already triggered a rollback by the time it reaches a
/// service, so observing an [`Error`] never implies partial writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed or out-of-range input; carries every violation found, not
    /// just the first.
    #[error("validation failed: {}", errors.join("; "))]
    Validation {
        /// Human-readable description of each violated rule.
        errors: Vec<String>,
    },

    /// A referenced event or registration does not exist.
    #[error("{message}")]
    NotFound {
        /// Description of the missing resource.
        message: String,
    },

    /// The user already holds a registration for this event.
    #[error("{message}")]
    Conflict {
        /// Description of the conflicting state.
        message: String,
    },

    /// The event has no free seats left.
    #[error("{message}")]
    CapacityExceeded {
        /// Description of the capacity violation.
        message: String,
    },

    /// The operation is not valid for the event's current state, such as
    /// registering for an event that has already started.
    #[error("{message}")]
    InvalidState {
        /// Description of the state violation.
        message: String,
    },

    /// Transient storage failure (connection checkout, broken connection).
    /// Not retried by this layer; surfaced to the caller.
    #[error("{message}")]
    Unavailable {
        /// Description of the outage.
        message: String,
    },

    /// Unexpected internal failure. The message is logged server-side and
    /// redacted from client responses.
    #[error("{message}")]
    Internal {
        /// Diagnostic detail, never sent to clients.
        message: String,
    },
}

impl Error {
    /// Build a [`Error::Validation`] from a list of violations.
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::CapacityExceeded`].
    pub fn capacity_exceeded(message: impl Into<String>) -> Self {
        Self::CapacityExceeded {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::InvalidState`].
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn validation_display_joins_all_violations() {
        let err = Error::validation(vec![
            "title is required".into(),
            "location is required".into(),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: title is required; location is required"
        );
    }

    #[rstest]
    fn message_variants_display_verbatim() {
        assert_eq!(
            Error::not_found("Event not found").to_string(),
            "Event not found"
        );
        assert_eq!(
            Error::conflict("Already registered").to_string(),
            "Already registered"
        );
        assert_eq!(
            Error::capacity_exceeded("Event is full").to_string(),
            "Event is full"
        );
    }
}
