pub mod application;
pub mod company;
pub mod course;
pub mod extract;
pub mod health;
pub mod offer;
pub mod response;
pub mod user;
