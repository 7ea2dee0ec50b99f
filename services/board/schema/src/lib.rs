//! sea-orm entities for the job board tables.

pub mod applications;
pub mod assessments;
pub mod badges;
pub mod companies;
pub mod courses;
pub mod enrollments;
pub mod offers;
pub mod seeker_profiles;
pub mod status_history;
pub mod users;
