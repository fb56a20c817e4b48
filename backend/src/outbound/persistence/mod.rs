//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the driven ports, backed by PostgreSQL via
//! `diesel-async` with `bb8` connection pooling. The adapters are thin:
//! they translate between Diesel rows and domain types, keep schema and row
//! structs private, and map every storage failure onto a port error. The
//! one piece of behaviour that lives here rather than in the domain is the
//! seat-reservation transaction in [`DieselRegistrationStore`], because its
//! correctness depends on database row locking.

mod diesel_error;
mod diesel_event_repository;
mod diesel_registration_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_event_repository::DieselEventRepository;
pub use diesel_registration_store::DieselRegistrationStore;
pub use migrations::run_pending_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
