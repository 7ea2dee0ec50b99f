#![allow(async_fn_in_trait)]

use jobboard_domain::listing::Limit;

use crate::domain::types::{
    Applicant, Application, ApplicationSummary, ApplicationWithHistory, Assessment, Badge,
    Company, CompanyApplication, CompanyOffer, Course, CourseCard, CourseDetail, Credentials,
    Enrollment, EnrollmentView, HistoryEntry, NewApplication, NewAssessment, NewCompany,
    NewCourse, NewOffer, NewUser, Offer, OfferDetail, OfferListing, ProfileApplication,
    ProfileFields, SeekerProfile, StatusChange, StatusTransition, User, UserCourse,
};
use crate::error::BoardError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, BoardError>;

    /// Look up login material by normalized email.
    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, BoardError>;

    /// Returns `None` when the email is already registered.
    async fn create(&self, user: &NewUser) -> Result<Option<User>, BoardError>;
}

/// Repository for seeker profiles (zero or one per seeker).
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: i32) -> Result<Option<SeekerProfile>, BoardError>;

    /// Insert or replace the profile of `user_id`.
    async fn upsert(
        &self,
        user_id: i32,
        fields: &ProfileFields,
    ) -> Result<SeekerProfile, BoardError>;
}

/// Repository for company records (zero or one per company-role user).
pub trait CompanyRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, BoardError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Option<Company>, BoardError>;
    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Company>, BoardError>;

    /// Returns `None` when the user or tax id is already taken.
    async fn create(&self, company: &NewCompany) -> Result<Option<Company>, BoardError>;
}

/// Repository for job offers.
pub trait OfferRepository: Send + Sync {
    /// Any offer, active or not.
    async fn find_by_id(&self, id: i32) -> Result<Option<Offer>, BoardError>;

    /// An active offer joined with its company.
    async fn find_active(&self, id: i32) -> Result<Option<OfferListing>, BoardError>;

    async fn create(&self, offer: &NewOffer) -> Result<Offer, BoardError>;

    /// Persist every editable field of `offer`.
    async fn update(&self, offer: &Offer) -> Result<Offer, BoardError>;

    /// Soft delete. Returns `false` when no offer has this id.
    async fn deactivate(&self, id: i32) -> Result<bool, BoardError>;
}

/// Repository for applications and their status history.
pub trait ApplicationRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Application>, BoardError>;

    async fn find_by_user_and_offer(
        &self,
        user_id: i32,
        offer_id: i32,
    ) -> Result<Option<Application>, BoardError>;

    /// Insert the application and its opening history entry in one transaction.
    /// Returns `None` when the seeker already applied to the offer.
    async fn create_with_history(
        &self,
        application: &NewApplication,
    ) -> Result<Option<Application>, BoardError>;

    /// Read the current status, update it and append the history entry in one
    /// transaction. Returns `None` when the application does not exist.
    async fn change_status(
        &self,
        id: i32,
        change: &StatusChange,
    ) -> Result<Option<StatusTransition>, BoardError>;

    /// History of one application, newest first.
    async fn history(&self, application_id: i32) -> Result<Vec<HistoryEntry>, BoardError>;
}

/// Repository for training courses.
pub trait CourseRepository: Send + Sync {
    /// Any course, active or not.
    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, BoardError>;
    async fn create(&self, course: &NewCourse) -> Result<Course, BoardError>;
}

/// Repository for course enrollments.
pub trait EnrollmentRepository: Send + Sync {
    async fn find_by_user_and_course(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<Enrollment>, BoardError>;

    /// Insert a not-started enrollment. Returns `None` when the seeker is
    /// already enrolled in the course.
    async fn create(
        &self,
        user_id: i32,
        course_id: i32,
        enrolled_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<Enrollment>, BoardError>;
}

/// Repository for course assessments.
pub trait AssessmentRepository: Send + Sync {
    async fn create(&self, assessment: &NewAssessment) -> Result<Assessment, BoardError>;

    /// Active assessments of a course in creation order.
    async fn list_by_course(&self, course_id: i32) -> Result<Vec<Assessment>, BoardError>;
}

/// Read-side joins. Lists are newest first unless stated otherwise.
pub trait CatalogRepository: Send + Sync {
    /// Active offers with company name and sector, most recently published first.
    async fn active_offers(&self, limit: Limit) -> Result<Vec<OfferListing>, BoardError>;

    /// An active offer with the full company record.
    async fn offer_detail(&self, id: i32) -> Result<Option<OfferDetail>, BoardError>;

    /// Every offer of a company, active or not, with applicant counts.
    async fn company_offers(&self, company_id: i32) -> Result<Vec<CompanyOffer>, BoardError>;

    async fn company_courses(&self, company_id: i32) -> Result<Vec<Course>, BoardError>;

    async fn user_applications(
        &self,
        user_id: i32,
    ) -> Result<Vec<ApplicationWithHistory>, BoardError>;

    async fn user_application_summaries(
        &self,
        user_id: i32,
    ) -> Result<Vec<ApplicationSummary>, BoardError>;

    async fn company_applications(
        &self,
        company_id: i32,
    ) -> Result<Vec<CompanyApplication>, BoardError>;

    async fn company_applicants(
        &self,
        company_id: i32,
        limit: Limit,
    ) -> Result<Vec<Applicant>, BoardError>;

    /// Public, active courses with their company.
    async fn public_courses(&self) -> Result<Vec<CourseCard>, BoardError>;

    /// An active course with its company and associated offer.
    async fn course_detail(&self, id: i32) -> Result<Option<CourseDetail>, BoardError>;

    /// Active courses a user is enrolled in, most recent enrollment first.
    async fn user_courses(&self, user_id: i32) -> Result<Vec<UserCourse>, BoardError>;

    async fn user_badges(&self, user_id: i32) -> Result<Vec<Badge>, BoardError>;

    async fn user_enrollments(&self, user_id: i32) -> Result<Vec<EnrollmentView>, BoardError>;

    async fn user_profile_applications(
        &self,
        user_id: i32,
    ) -> Result<Vec<ProfileApplication>, BoardError>;
}
