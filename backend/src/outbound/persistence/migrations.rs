//! Embedded schema migrations.
//!
//! The SQL under `migrations/` is compiled into the binary and applied at
//! startup, so a deployment never serves traffic against a stale schema.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use super::pool::PoolError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run all pending migrations against the given database URL.
///
/// Uses a short-lived synchronous connection; the migration harness is not
/// async and this runs once before the server accepts requests.
///
/// # Errors
///
/// Returns [`PoolError::Build`] when the connection cannot be established
/// or a migration fails to apply.
pub fn run_pending_migrations(database_url: &str) -> Result<(), PoolError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| PoolError::build(err.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| PoolError::build(format!("migration: {err}")))?;
    Ok(())
}
