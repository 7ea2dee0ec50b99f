//! sea-orm implementations of the repository traits.

mod account;
mod application;
mod catalog;
mod course;
mod mapping;
mod offer;

pub use account::{DbCompanyRepository, DbProfileRepository, DbUserRepository};
pub use application::DbApplicationRepository;
pub use catalog::DbCatalogRepository;
pub use course::{DbAssessmentRepository, DbCourseRepository, DbEnrollmentRepository};
pub use offer::DbOfferRepository;
