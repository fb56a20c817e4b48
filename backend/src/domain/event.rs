//! Event entity and creation-time validation.
//!
//! Events are immutable once created: this module deliberately offers no
//! update or delete operations. Validation collects *every* violated rule so
//! callers can report them together rather than one at a time.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inclusive lower bound for an event's attendee capacity.
pub const MIN_CAPACITY: i64 = 1;
/// Inclusive upper bound for an event's attendee capacity.
pub const MAX_CAPACITY: i64 = 1000;

/// Stable event identifier stored as a UUID v4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, typically one read back from storage.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Borrow the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Violations detected while validating an event creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventValidationError {
    /// Title absent or blank.
    MissingTitle,
    /// Scheduled date-time absent.
    MissingDateTime,
    /// Scheduled date-time present but not a parseable instant.
    InvalidDateTime,
    /// Location absent or blank.
    MissingLocation,
    /// Capacity absent or outside `[1, 1000]`. Non-integer capacities are
    /// rejected at the JSON boundary before a draft is built.
    InvalidCapacity,
}

impl fmt::Display for EventValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "title is required"),
            Self::MissingDateTime => write!(f, "date_time is required"),
            Self::InvalidDateTime => {
                write!(f, "date_time must be a valid RFC 3339 timestamp")
            }
            Self::MissingLocation => write!(f, "location is required"),
            Self::InvalidCapacity => write!(
                f,
                "capacity must be an integer between {MIN_CAPACITY} and {MAX_CAPACITY}"
            ),
        }
    }
}

impl std::error::Error for EventValidationError {}

/// Raw event creation record as received at the boundary, before any rule
/// has been checked. Fields are optional so that missing and malformed
/// values can be reported together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    /// Proposed title.
    pub title: Option<String>,
    /// Proposed scheduled instant as an RFC 3339 string.
    pub date_time: Option<String>,
    /// Proposed location.
    pub location: Option<String>,
    /// Proposed capacity. Kept as a raw integer so range checking happens
    /// here rather than at deserialisation.
    pub capacity: Option<i64>,
}

impl EventDraft {
    /// Check every creation rule and return all violations found.
    ///
    /// Pure: no side effects, no allocation beyond the violation list.
    pub fn validate(&self) -> Vec<EventValidationError> {
        self.parse().err().unwrap_or_default()
    }

    /// Validate the draft and, when clean, produce the parsed field values.
    fn parse(&self) -> Result<ParsedDraft<'_>, Vec<EventValidationError>> {
        let mut violations = Vec::new();

        let title = match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => Some(title),
            _ => {
                violations.push(EventValidationError::MissingTitle);
                None
            }
        };

        let event_datetime = match self.date_time.as_deref() {
            None => {
                violations.push(EventValidationError::MissingDateTime);
                None
            }
            Some(raw) => match DateTime::parse_from_rfc3339(raw) {
                Ok(instant) => Some(instant.with_timezone(&Utc)),
                Err(_) => {
                    violations.push(EventValidationError::InvalidDateTime);
                    None
                }
            },
        };

        let location = match self.location.as_deref().map(str::trim) {
            Some(location) if !location.is_empty() => Some(location),
            _ => {
                violations.push(EventValidationError::MissingLocation);
                None
            }
        };

        let capacity = match self.capacity {
            Some(capacity) if (MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) => {
                i32::try_from(capacity).ok()
            }
            _ => {
                violations.push(EventValidationError::InvalidCapacity);
                None
            }
        };

        match (title, event_datetime, location, capacity) {
            (Some(title), Some(event_datetime), Some(location), Some(capacity))
                if violations.is_empty() =>
            {
                Ok(ParsedDraft {
                    title,
                    event_datetime,
                    location,
                    capacity,
                })
            }
            _ => Err(violations),
        }
    }
}

/// Field values extracted from a draft that passed every rule.
struct ParsedDraft<'a> {
    title: &'a str,
    event_datetime: DateTime<Utc>,
    location: &'a str,
    capacity: i32,
}

/// A schedulable activity with a fixed attendee capacity.
///
/// ## Invariants
/// - `title` and `location` are non-empty after trimming.
/// - `capacity` lies in `[1, 1000]`.
///
/// Instances only come out of [`Event::new`] (fresh identity, validated
/// draft) or [`Event::from_stored`] (row already persisted under the same
/// rules, which the database CHECK constraints also enforce).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    title: String,
    event_datetime: DateTime<Utc>,
    location: String,
    capacity: i32,
}

impl Event {
    /// Validate a draft and mint a new event with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns the full list of violated rules when any creation rule fails.
    pub fn new(draft: &EventDraft) -> Result<Self, Vec<EventValidationError>> {
        let parsed = draft.parse()?;
        Ok(Self {
            id: EventId::random(),
            title: parsed.title.to_owned(),
            event_datetime: parsed.event_datetime,
            location: parsed.location.to_owned(),
            capacity: parsed.capacity,
        })
    }

    /// Rehydrate an event from already-persisted field values.
    pub fn from_stored(
        id: EventId,
        title: String,
        event_datetime: DateTime<Utc>,
        location: String,
        capacity: i32,
    ) -> Self {
        Self {
            id,
            title,
            event_datetime,
            location,
            capacity,
        }
    }

    /// Event identifier.
    pub const fn id(&self) -> EventId {
        self.id
    }

    /// Event title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Scheduled instant.
    pub const fn event_datetime(&self) -> DateTime<Utc> {
        self.event_datetime
    }

    /// Event location.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Maximum number of active registrations.
    pub const fn capacity(&self) -> i32 {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_draft() -> EventDraft {
        EventDraft {
            title: Some("RustConf".into()),
            date_time: Some("2030-06-01T18:00:00Z".into()),
            location: Some("Hall A".into()),
            capacity: Some(100),
        }
    }

    #[rstest]
    fn valid_draft_passes_and_builds_event() {
        let draft = valid_draft();
        assert!(draft.validate().is_empty());

        let event = Event::new(&draft).expect("draft is valid");
        assert_eq!(event.title(), "RustConf");
        assert_eq!(event.location(), "Hall A");
        assert_eq!(event.capacity(), 100);
        assert_eq!(
            event.event_datetime(),
            DateTime::parse_from_rfc3339("2030-06-01T18:00:00Z")
                .expect("literal timestamp parses")
                .with_timezone(&Utc)
        );
    }

    #[rstest]
    fn empty_draft_reports_every_violation() {
        let violations = EventDraft::default().validate();
        assert_eq!(
            violations,
            vec![
                EventValidationError::MissingTitle,
                EventValidationError::MissingDateTime,
                EventValidationError::MissingLocation,
                EventValidationError::InvalidCapacity,
            ]
        );
    }

    #[rstest]
    #[case(Some("   "), EventValidationError::MissingTitle)]
    #[case(Some(""), EventValidationError::MissingTitle)]
    fn blank_title_is_missing(#[case] title: Option<&str>, #[case] expected: EventValidationError) {
        let draft = EventDraft {
            title: title.map(ToOwned::to_owned),
            ..valid_draft()
        };
        assert_eq!(draft.validate(), vec![expected]);
    }

    #[rstest]
    #[case("yesterday")]
    #[case("2030-13-45T99:00:00Z")]
    #[case("June 1st 2030")]
    fn unparseable_date_time_is_invalid(#[case] raw: &str) {
        let draft = EventDraft {
            date_time: Some(raw.into()),
            ..valid_draft()
        };
        assert_eq!(draft.validate(), vec![EventValidationError::InvalidDateTime]);
    }

    #[rstest]
    #[case(Some(0))]
    #[case(Some(1001))]
    #[case(Some(-3))]
    #[case(None)]
    fn capacity_outside_range_is_invalid(#[case] capacity: Option<i64>) {
        let draft = EventDraft {
            capacity,
            ..valid_draft()
        };
        assert_eq!(draft.validate(), vec![EventValidationError::InvalidCapacity]);
    }

    #[rstest]
    #[case(1)]
    #[case(1000)]
    fn capacity_bounds_are_inclusive(#[case] capacity: i64) {
        let draft = EventDraft {
            capacity: Some(capacity),
            ..valid_draft()
        };
        assert!(draft.validate().is_empty());
    }

    #[rstest]
    fn fresh_events_get_distinct_ids() {
        let draft = valid_draft();
        let first = Event::new(&draft).expect("valid");
        let second = Event::new(&draft).expect("valid");
        assert_ne!(first.id(), second.id());
    }
}
