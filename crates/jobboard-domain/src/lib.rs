//! Domain types shared across the job board crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers as well as in `infra/` row mapping.

pub mod catalog;
pub mod codec;
pub mod listing;
pub mod role;
pub mod salary;
pub mod status;
