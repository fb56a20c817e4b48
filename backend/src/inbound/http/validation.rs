//! Shared parsing helpers for inbound HTTP adapters.

use uuid::Uuid;

use crate::domain::Error;

/// Parse a path or body segment as a UUID, rejecting malformed input as a
/// validation error naming the offending field.
pub(crate) fn parse_uuid(value: &str, field: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(value)
        .map_err(|_| Error::validation(vec![format!("{field} must be a valid UUID")]))
}
