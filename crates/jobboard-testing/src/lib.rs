//! Test utilities for the job board service.
//!
//! Provides a migrated in-memory database and row seeding helpers.
//! Import from tests only, never from production code.

pub mod db;
pub mod fixture;
