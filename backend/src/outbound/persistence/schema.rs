//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must stay in lockstep with the SQL under `migrations/`; Diesel uses
//! them for compile-time query validation.

diesel::table! {
    /// Scheduled events open for registration.
    events (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Event title, non-empty after trimming.
        title -> Text,
        /// Scheduled instant, stored in UTC.
        event_datetime -> Timestamptz,
        /// Event location, non-empty after trimming.
        location -> Text,
        /// Attendee capacity, constrained to 1..=1000.
        capacity -> Int4,
    }
}

diesel::table! {
    /// Attendees, created lazily on first registration by email.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Optional display name.
        name -> Nullable<Text>,
        /// Unique email address used as the idempotent lookup key.
        email -> Text,
    }
}

diesel::table! {
    /// Join table binding users to events, unique per (event, user).
    registrations (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Event being registered for.
        event_id -> Uuid,
        /// Registered attendee.
        user_id -> Uuid,
    }
}

diesel::joinable!(registrations -> events (event_id));
diesel::joinable!(registrations -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(events, registrations, users);
