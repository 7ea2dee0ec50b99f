use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use jobboard_domain::catalog::{Difficulty, EnrollmentStatus, Modality, Question, Visibility};
use jobboard_domain::role::UserRole;
use jobboard_domain::salary::SalaryRange;
use jobboard_domain::status::{Actor, ApplicationStatus};

/// Note written on the history entry that opens every application.
pub const CREATION_NOTE: &str = "created by user";

/// Default number of offers on the recommendations strip.
pub const RECOMMENDED_OFFERS: i64 = 2;

/// Result of an idempotent create: `created` is false when an existing record
/// was returned instead of inserting a new one.
#[derive(Debug, Clone)]
pub struct Created<T> {
    pub record: T,
    pub created: bool,
}

// ── Accounts ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Stored login material for one account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: User,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i32,
    pub role: UserRole,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct SeekerProfile {
    pub id: i32,
    pub user_id: i32,
    pub fields: ProfileFields,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFields {
    pub gender_identity: Option<String>,
    pub disability: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub skills: Vec<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Company {
    pub id: i32,
    pub user_id: i32,
    pub legal_name: String,
    pub tax_id: String,
    pub sector: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub social_links: BTreeMap<String, String>,
    pub economic_activity: Option<String>,
    pub size: Option<String>,
    pub verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub user_id: i32,
    pub legal_name: String,
    pub tax_id: String,
    pub sector: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub social_links: BTreeMap<String, String>,
    pub economic_activity: Option<String>,
    pub size: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ── Offers ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Offer {
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    pub description: String,
    pub duties: Option<String>,
    pub requirements: Option<String>,
    pub required_skills: Vec<String>,
    pub location: Option<String>,
    pub modality: Modality,
    pub contract_type: Option<String>,
    pub schedule: Option<String>,
    pub salary: SalaryRange,
    pub published_at: DateTime<Utc>,
    pub closes_on: Option<NaiveDate>,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct NewOffer {
    pub company_id: i32,
    pub title: String,
    pub description: String,
    pub duties: Option<String>,
    pub requirements: Option<String>,
    pub required_skills: Vec<String>,
    pub location: Option<String>,
    pub modality: Modality,
    pub contract_type: Option<String>,
    pub schedule: Option<String>,
    pub salary: SalaryRange,
    pub published_at: DateTime<Utc>,
    pub closes_on: Option<NaiveDate>,
}

/// Name and sector of the company behind an offer or course.
#[derive(Debug, Clone)]
pub struct CompanyBrief {
    pub id: i32,
    pub legal_name: String,
    pub sector: Option<String>,
}

/// An offer joined with its company.
#[derive(Debug, Clone)]
pub struct OfferListing {
    pub offer: Offer,
    pub company: CompanyBrief,
}

/// Offer detail page: the offer plus the company's contact data.
#[derive(Debug, Clone)]
pub struct OfferDetail {
    pub offer: Offer,
    pub company: Company,
}

/// An offer as its company sees it, with the number of applications received.
#[derive(Debug, Clone)]
pub struct CompanyOffer {
    pub offer: Offer,
    pub applicant_count: u64,
}

// ── Applications ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Application {
    pub id: i32,
    pub user_id: i32,
    pub offer_id: i32,
    pub company_name: String,
    pub position: String,
    pub description: Option<String>,
    pub status: ApplicationStatus,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Snapshot of an offer taken when a seeker applies.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub user_id: i32,
    pub offer_id: i32,
    pub company_name: String,
    pub position: String,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl NewApplication {
    /// Copy the fields an application keeps from the offer it targets.
    pub fn snapshot(user_id: i32, listing: &OfferListing, now: DateTime<Utc>) -> Self {
        let offer = &listing.offer;
        Self {
            user_id,
            offer_id: offer.id,
            company_name: listing.company.legal_name.clone(),
            position: offer.title.clone(),
            description: None,
            salary: offer.salary.display(),
            location: offer.location.clone(),
            tags: Vec::new(),
            created_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub id: i32,
    pub application_id: i32,
    pub previous_status: Option<ApplicationStatus>,
    pub new_status: ApplicationStatus,
    pub actor: Actor,
    pub note: Option<String>,
    pub changed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StatusChange {
    pub status: ApplicationStatus,
    pub actor: Actor,
    pub note: Option<String>,
    pub changed_at: DateTime<Utc>,
}

/// The application after a status change and the history entry recording it.
#[derive(Debug, Clone)]
pub struct StatusTransition {
    pub application: Application,
    pub entry: HistoryEntry,
}

/// History is newest first.
#[derive(Debug, Clone)]
pub struct ApplicationWithHistory {
    pub application: Application,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone)]
pub struct ApplicationSummary {
    pub id: i32,
    pub offer_id: i32,
    /// Live offer title, or the snapshot position when the offer is gone.
    pub offer_title: String,
    pub company_name: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An application received by a company, with the applicant and offer joined in.
#[derive(Debug, Clone)]
pub struct CompanyApplication {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub user_email: String,
    pub offer_id: i32,
    pub offer_title: String,
    pub modality: Modality,
    pub contract_type: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Applicant {
    pub application_id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub offer_id: i32,
    pub offer_title: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// Split a display name at its first space. A single word has an empty last name.
pub fn split_name(full: &str) -> (String, String) {
    match full.trim().split_once(' ') {
        Some((first, last)) => (first.to_owned(), last.trim().to_owned()),
        None => (full.trim().to_owned(), String::new()),
    }
}

// ── Courses ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Course {
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    pub description: String,
    pub objectives: Option<String>,
    pub syllabus: Option<String>,
    pub duration_hours: i32,
    pub difficulty: Difficulty,
    pub content_formats: Vec<String>,
    pub visibility: Visibility,
    pub offer_id: Option<i32>,
    pub published_at: DateTime<Utc>,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub company_id: i32,
    pub title: String,
    pub description: String,
    pub objectives: Option<String>,
    pub syllabus: Option<String>,
    pub duration_hours: i32,
    pub difficulty: Difficulty,
    pub content_formats: Vec<String>,
    pub visibility: Visibility,
    pub offer_id: Option<i32>,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CourseCard {
    pub course: Course,
    pub company: CompanyBrief,
}

#[derive(Debug, Clone)]
pub struct OfferBrief {
    pub id: i32,
    pub title: String,
    pub modality: Modality,
    pub location: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct CourseDetail {
    pub course: Course,
    pub company: CompanyBrief,
    pub offer: Option<OfferBrief>,
}

#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub course_id: i32,
    pub progress: f64,
    pub status: EnrollmentStatus,
    pub completed_at: Option<DateTime<Utc>>,
    pub test_score: Option<f64>,
    pub enrolled_at: DateTime<Utc>,
}

/// An enrollment joined with the title of its course.
#[derive(Debug, Clone)]
pub struct EnrollmentView {
    pub enrollment: Enrollment,
    pub course_title: String,
}

/// An active course a seeker is enrolled in, with their progress.
#[derive(Debug, Clone)]
pub struct UserCourse {
    pub course: Course,
    pub enrollment: Enrollment,
}

#[derive(Debug, Clone)]
pub struct Badge {
    pub id: i32,
    pub user_id: i32,
    pub course_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub verification_code: String,
    pub image_url: Option<String>,
    pub obtained_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Assessment {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
    pub min_score: f64,
    pub max_attempts: i32,
    pub required: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
    pub min_score: f64,
    pub max_attempts: i32,
    pub required: bool,
    pub created_at: DateTime<Utc>,
}

// ── Profile aggregates ───────────────────────────────────────────────────────

/// An application on the seeker's profile page, joined with its offer.
#[derive(Debug, Clone)]
pub struct ProfileApplication {
    pub application: Application,
    pub offer_title: String,
    pub offer_modality: Option<Modality>,
}

/// Everything shown on a seeker's profile. Every list is newest first.
#[derive(Debug, Clone)]
pub struct SeekerAggregate {
    pub user: User,
    pub profile: Option<SeekerProfile>,
    pub badges: Vec<Badge>,
    pub enrollments: Vec<EnrollmentView>,
    pub applications: Vec<ProfileApplication>,
}

#[derive(Debug, Clone)]
pub struct CompanyAggregate {
    pub company: Company,
    pub offers: Vec<CompanyOffer>,
    pub courses: Vec<Course>,
}
