pub mod account;
pub mod application;
pub mod catalog;
pub mod company;
pub mod course;
pub mod enrollment;
pub mod offer;

#[cfg(test)]
pub(crate) mod mock;
