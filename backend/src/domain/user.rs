//! Attendee identity.
//!
//! Users are created lazily: the first registration that names an unknown
//! email mints a new identity, and later registrations with the same email
//! reuse it. The email therefore acts as a natural secondary key.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable user identifier stored as a UUID v4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An attendee known to the system.
///
/// The name is optional: registrations that only supply an email still
/// create a usable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: Option<String>,
    email: String,
}

impl User {
    /// Build a user from its stored fields.
    pub const fn new(id: UserId, name: Option<String>, email: String) -> Self {
        Self { id, name, email }
    }

    /// User identifier.
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Display name, when one was supplied at creation.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Email address used for idempotent lookup.
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// How a registration request identifies the attendee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendeeRef {
    /// An already-known user id, used as-is without an application-level
    /// existence check (the schema's foreign key is the only guard).
    Existing(UserId),
    /// Look the user up by email, creating a new identity when absent.
    ByEmail {
        /// Display name for a newly created user; ignored when the email is
        /// already known.
        name: Option<String>,
        /// Email address, the idempotent lookup key.
        email: String,
    },
}
