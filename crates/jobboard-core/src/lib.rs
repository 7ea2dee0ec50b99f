//! Service plumbing shared by the job board binaries: tracing, configuration,
//! health probes, HTTP middleware, serde helpers and sea-orm extensions.

pub mod config;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
