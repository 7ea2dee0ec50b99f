pub mod repository;
pub mod types;
pub mod validate;
