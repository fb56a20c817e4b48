//! Shared helpers for integration suites that need a real PostgreSQL
//! database.
//!
//! Point `TEST_DATABASE_URL` at a disposable database to run these suites.
//! Without it each test prints `SKIP-TEST-DB` and passes vacuously, so the
//! default `cargo test` run stays green on machines without PostgreSQL.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use backend::domain::{Event, EventDraft};
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

/// Build a pool against `TEST_DATABASE_URL` with migrations applied, or
/// `None` when the suite should be skipped.
pub async fn test_pool() -> Option<DbPool> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        announce_skip();
        return None;
    };
    run_pending_migrations(&url).expect("apply migrations to test database");
    let pool = DbPool::new(PoolConfig::new(url))
        .await
        .expect("build test connection pool");
    Some(pool)
}

#[expect(
    clippy::print_stderr,
    reason = "skip marker must reach the test harness output"
)]
fn announce_skip() {
    eprintln!("SKIP-TEST-DB: TEST_DATABASE_URL not set");
}

/// A validated event scheduled relative to now. The title carries a random
/// marker so suites sharing a database can recognise their own rows.
pub fn event_fixture(offset: Duration, location: &str, capacity: i64) -> Event {
    event_fixture_at(Utc::now() + offset, location, capacity)
}

/// A validated event at an exact instant.
#[allow(dead_code, reason = "suites use different subsets of these helpers")]
pub fn event_fixture_at(instant: DateTime<Utc>, location: &str, capacity: i64) -> Event {
    Event::new(&EventDraft {
        title: Some(format!("test-event-{}", Uuid::new_v4())),
        date_time: Some(instant.to_rfc3339()),
        location: Some(location.to_owned()),
        capacity: Some(capacity),
    })
    .expect("fixture draft is valid")
}

/// A unique email address for attendee fixtures.
pub fn email_fixture() -> String {
    format!("attendee-{}@example.com", Uuid::new_v4())
}
