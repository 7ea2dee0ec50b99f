//! JSON shapes shared by several handlers.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use jobboard_domain::catalog::{Difficulty, EnrollmentStatus, Modality, Question, Visibility};
use jobboard_domain::role::UserRole;
use jobboard_domain::status::{Actor, ApplicationStatus};

use crate::domain::types::{
    Application, Assessment, Badge, Company, CompanyBrief, CompanyOffer, Course, Enrollment,
    HistoryEntry, Offer, OfferBrief, OfferListing, User,
};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub active: bool,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct CompanyResponse {
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
    #[serde(serialize_with = "jobboard_core::serde::opt_to_rfc3339_ms")]
    pub verified_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            legal_name: c.legal_name,
            tax_id: c.tax_id,
            sector: c.sector,
            address: c.address,
            phone: c.phone,
            website: c.website,
            social_links: c.social_links,
            economic_activity: c.economic_activity,
            size: c.size,
            verified: c.verified,
            verified_at: c.verified_at,
            created_at: c.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct CompanyBriefResponse {
    pub id: i32,
    pub legal_name: String,
    pub sector: Option<String>,
}

impl From<CompanyBrief> for CompanyBriefResponse {
    fn from(c: CompanyBrief) -> Self {
        Self {
            id: c.id,
            legal_name: c.legal_name,
            sector: c.sector,
        }
    }
}

#[derive(Serialize)]
pub struct OfferResponse {
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
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    /// Display form of the salary range, as copied onto applications.
    pub salary: Option<String>,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub published_at: DateTime<Utc>,
    pub closes_on: Option<NaiveDate>,
    pub active: bool,
}

impl From<Offer> for OfferResponse {
    fn from(o: Offer) -> Self {
        Self {
            salary: o.salary.display(),
            id: o.id,
            company_id: o.company_id,
            title: o.title,
            description: o.description,
            duties: o.duties,
            requirements: o.requirements,
            required_skills: o.required_skills,
            location: o.location,
            modality: o.modality,
            contract_type: o.contract_type,
            schedule: o.schedule,
            salary_min: o.salary.min,
            salary_max: o.salary.max,
            published_at: o.published_at,
            closes_on: o.closes_on,
            active: o.active,
        }
    }
}

#[derive(Serialize)]
pub struct OfferListingResponse {
    #[serde(flatten)]
    pub offer: OfferResponse,
    pub company: CompanyBriefResponse,
}

impl From<OfferListing> for OfferListingResponse {
    fn from(l: OfferListing) -> Self {
        Self {
            offer: l.offer.into(),
            company: l.company.into(),
        }
    }
}

#[derive(Serialize)]
pub struct CompanyOfferResponse {
    #[serde(flatten)]
    pub offer: OfferResponse,
    pub applicant_count: u64,
}

impl From<CompanyOffer> for CompanyOfferResponse {
    fn from(o: CompanyOffer) -> Self {
        Self {
            offer: o.offer.into(),
            applicant_count: o.applicant_count,
        }
    }
}

#[derive(Serialize)]
pub struct OfferBriefResponse {
    pub id: i32,
    pub title: String,
    pub modality: Modality,
    pub location: Option<String>,
    pub active: bool,
}

impl From<OfferBrief> for OfferBriefResponse {
    fn from(o: OfferBrief) -> Self {
        Self {
            id: o.id,
            title: o.title,
            modality: o.modality,
            location: o.location,
            active: o.active,
        }
    }
}

#[derive(Serialize)]
pub struct ApplicationResponse {
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
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponse {
    fn from(a: Application) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            offer_id: a.offer_id,
            company_name: a.company_name,
            position: a.position,
            description: a.description,
            status: a.status,
            salary: a.salary,
            location: a.location,
            tags: a.tags,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct HistoryEntryResponse {
    pub id: i32,
    pub previous_status: Option<ApplicationStatus>,
    pub new_status: ApplicationStatus,
    pub actor: Actor,
    pub note: Option<String>,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub changed_at: DateTime<Utc>,
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(h: HistoryEntry) -> Self {
        Self {
            id: h.id,
            previous_status: h.previous_status,
            new_status: h.new_status,
            actor: h.actor,
            note: h.note,
            changed_at: h.changed_at,
        }
    }
}

#[derive(Serialize)]
pub struct CourseResponse {
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
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub published_at: DateTime<Utc>,
    pub active: bool,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        Self {
            id: c.id,
            company_id: c.company_id,
            title: c.title,
            description: c.description,
            objectives: c.objectives,
            syllabus: c.syllabus,
            duration_hours: c.duration_hours,
            difficulty: c.difficulty,
            content_formats: c.content_formats,
            visibility: c.visibility,
            offer_id: c.offer_id,
            published_at: c.published_at,
            active: c.active,
        }
    }
}

#[derive(Serialize)]
pub struct EnrollmentResponse {
    pub id: i32,
    pub user_id: i32,
    pub course_id: i32,
    pub progress: f64,
    pub status: EnrollmentStatus,
    #[serde(serialize_with = "jobboard_core::serde::opt_to_rfc3339_ms")]
    pub completed_at: Option<DateTime<Utc>>,
    pub test_score: Option<f64>,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub enrolled_at: DateTime<Utc>,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(e: Enrollment) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            course_id: e.course_id,
            progress: e.progress,
            status: e.status,
            completed_at: e.completed_at,
            test_score: e.test_score,
            enrolled_at: e.enrolled_at,
        }
    }
}

#[derive(Serialize)]
pub struct BadgeResponse {
    pub id: i32,
    pub course_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub verification_code: String,
    pub image_url: Option<String>,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub obtained_at: DateTime<Utc>,
}

impl From<Badge> for BadgeResponse {
    fn from(b: Badge) -> Self {
        Self {
            id: b.id,
            course_id: b.course_id,
            name: b.name,
            description: b.description,
            verification_code: b.verification_code,
            image_url: b.image_url,
            obtained_at: b.obtained_at,
        }
    }
}

#[derive(Serialize)]
pub struct AssessmentResponse {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
    pub min_score: f64,
    pub max_attempts: i32,
    pub required: bool,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Assessment> for AssessmentResponse {
    fn from(a: Assessment) -> Self {
        Self {
            id: a.id,
            course_id: a.course_id,
            title: a.title,
            description: a.description,
            questions: a.questions,
            min_score: a.min_score,
            max_attempts: a.max_attempts,
            required: a.required,
            created_at: a.created_at,
        }
    }
}
