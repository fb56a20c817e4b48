//! Driven adapters. Only PostgreSQL persistence today.

pub mod persistence;
