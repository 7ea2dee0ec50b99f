use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use jobboard_domain::catalog::{EnrollmentStatus, Modality};
use jobboard_domain::listing::Listing;
use jobboard_domain::role::UserRole;
use jobboard_domain::status::ApplicationStatus;

use crate::domain::types::{
    ApplicationSummary, EnrollmentView, ProfileApplication, SeekerAggregate, SeekerProfile,
    Session, UserCourse,
};
use crate::error::BoardError;
use crate::handlers::extract::{Json, Path};
use crate::handlers::response::{
    ApplicationResponse, BadgeResponse, CourseResponse, EnrollmentResponse, UserResponse,
};
use crate::state::AppState;
use crate::usecase::account::{
    GetUserUseCase, LoginInput, LoginUseCase, ProfileInput, RegisterUserInput,
    RegisterUserUseCase, UpsertProfileUseCase,
};
use crate::usecase::catalog::{
    SeekerAggregateUseCase, UserApplicationSummariesUseCase, UserCoursesUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SessionResponse {
    pub user_id: i32,
    pub role: UserRole,
    pub name: String,
    pub email: String,
}

impl From<Session> for SessionResponse {
    fn from(s: Session) -> Self {
        Self {
            user_id: s.user_id,
            role: s.role,
            name: s.name,
            email: s.email,
        }
    }
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: i32,
    pub user_id: i32,
    pub gender_identity: Option<String>,
    pub disability: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub skills: Vec<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<SeekerProfile> for ProfileResponse {
    fn from(p: SeekerProfile) -> Self {
        let f = p.fields;
        Self {
            id: p.id,
            user_id: p.user_id,
            gender_identity: f.gender_identity,
            disability: f.disability,
            education: f.education,
            experience: f.experience,
            skills: f.skills,
            birth_date: f.birth_date,
            phone: f.phone,
            location: f.location,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct EnrollmentViewResponse {
    #[serde(flatten)]
    pub enrollment: EnrollmentResponse,
    pub course_title: String,
}

impl From<EnrollmentView> for EnrollmentViewResponse {
    fn from(v: EnrollmentView) -> Self {
        Self {
            enrollment: v.enrollment.into(),
            course_title: v.course_title,
        }
    }
}

#[derive(Serialize)]
pub struct ProfileApplicationResponse {
    #[serde(flatten)]
    pub application: ApplicationResponse,
    pub offer_title: String,
    pub offer_modality: Option<Modality>,
}

impl From<ProfileApplication> for ProfileApplicationResponse {
    fn from(p: ProfileApplication) -> Self {
        Self {
            application: p.application.into(),
            offer_title: p.offer_title,
            offer_modality: p.offer_modality,
        }
    }
}

#[derive(Serialize)]
pub struct SeekerAggregateResponse {
    pub user: UserResponse,
    pub profile: Option<ProfileResponse>,
    pub badges: Vec<BadgeResponse>,
    pub enrollments: Vec<EnrollmentViewResponse>,
    pub applications: Vec<ProfileApplicationResponse>,
}

impl From<SeekerAggregate> for SeekerAggregateResponse {
    fn from(a: SeekerAggregate) -> Self {
        Self {
            user: a.user.into(),
            profile: a.profile.map(Into::into),
            badges: a.badges.into_iter().map(Into::into).collect(),
            enrollments: a.enrollments.into_iter().map(Into::into).collect(),
            applications: a.applications.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct ApplicationSummaryResponse {
    pub id: i32,
    pub offer_id: i32,
    pub offer_title: String,
    pub company_name: String,
    pub status: ApplicationStatus,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<ApplicationSummary> for ApplicationSummaryResponse {
    fn from(s: ApplicationSummary) -> Self {
        Self {
            id: s.id,
            offer_id: s.offer_id,
            offer_title: s.offer_title,
            company_name: s.company_name,
            status: s.status,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct UserCourseResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub progress: f64,
    pub enrollment_status: EnrollmentStatus,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub enrolled_at: DateTime<Utc>,
}

impl From<UserCourse> for UserCourseResponse {
    fn from(u: UserCourse) -> Self {
        Self {
            course: u.course.into(),
            progress: u.enrollment.progress,
            enrollment_status: u.enrollment.status,
            enrolled_at: u.enrollment.enrolled_at,
        }
    }
}

// ── POST /api/users ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), BoardError> {
    let usecase = RegisterUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(RegisterUserInput {
            email: body.email,
            password: body.password,
            name: body.name,
            role: body.role,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── POST /api/login ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, BoardError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
    };
    let session = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(session.into()))
}

// ── GET /api/users/{user_id} ─────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserResponse>, BoardError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
    };
    Ok(Json(usecase.execute(user_id).await?.into()))
}

// ── PUT /api/users/{user_id}/profile ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct ProfileRequest {
    pub gender_identity: Option<String>,
    pub disability: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<Vec<String>>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

pub async fn upsert_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(body): Json<ProfileRequest>,
) -> Result<Json<ProfileResponse>, BoardError> {
    let usecase = UpsertProfileUseCase {
        users: state.user_repo(),
        profiles: state.profile_repo(),
    };
    let profile = usecase
        .execute(
            user_id,
            ProfileInput {
                gender_identity: body.gender_identity,
                disability: body.disability,
                education: body.education,
                experience: body.experience,
                skills: body.skills,
                birth_date: body.birth_date,
                phone: body.phone,
                location: body.location,
            },
        )
        .await?;
    Ok(Json(profile.into()))
}

// ── GET /api/users/{user_id}/profile ─────────────────────────────────────────

pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<SeekerAggregateResponse>, BoardError> {
    let usecase = SeekerAggregateUseCase {
        users: state.user_repo(),
        profiles: state.profile_repo(),
        catalog: state.catalog_repo(),
    };
    Ok(Json(usecase.execute(user_id).await?.into()))
}

// ── GET /api/users/{user_id}/applications ────────────────────────────────────

pub async fn get_user_applications(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Listing<ApplicationSummaryResponse>>, BoardError> {
    let usecase = UserApplicationSummariesUseCase {
        users: state.user_repo(),
        catalog: state.catalog_repo(),
    };
    Ok(Json(usecase.execute(user_id).await?.map(Into::into)))
}

// ── GET /api/users/{user_id}/courses ─────────────────────────────────────────

pub async fn get_user_courses(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Listing<UserCourseResponse>>, BoardError> {
    let usecase = UserCoursesUseCase {
        users: state.user_repo(),
        catalog: state.catalog_repo(),
    };
    Ok(Json(usecase.execute(user_id).await?.map(Into::into)))
}
