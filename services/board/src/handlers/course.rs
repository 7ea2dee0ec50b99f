use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use jobboard_domain::listing::Listing;

use crate::domain::types::{CourseCard, CourseDetail, Created, Enrollment};
use crate::domain::validate::RawQuestion;
use crate::error::BoardError;
use crate::handlers::extract::{Json, Path};
use crate::handlers::response::{
    AssessmentResponse, CompanyBriefResponse, CourseResponse, EnrollmentResponse,
    OfferBriefResponse,
};
use crate::state::AppState;
use crate::usecase::catalog::{CourseDetailUseCase, PublicCoursesUseCase};
use crate::usecase::course::{
    CreateAssessmentInput, CreateAssessmentUseCase, CreateCourseInput, CreateCourseUseCase,
    ListAssessmentsUseCase,
};
use crate::usecase::enrollment::EnrollUseCase;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CourseCardResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub company: CompanyBriefResponse,
}

impl From<CourseCard> for CourseCardResponse {
    fn from(c: CourseCard) -> Self {
        Self {
            course: c.course.into(),
            company: c.company.into(),
        }
    }
}

#[derive(Serialize)]
pub struct CourseDetailResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub company: CompanyBriefResponse,
    pub offer: Option<OfferBriefResponse>,
}

impl From<CourseDetail> for CourseDetailResponse {
    fn from(d: CourseDetail) -> Self {
        Self {
            course: d.course.into(),
            company: d.company.into(),
            offer: d.offer.map(Into::into),
        }
    }
}

#[derive(Serialize)]
pub struct CreatedEnrollmentResponse {
    pub created: bool,
    pub enrollment: EnrollmentResponse,
}

impl CreatedEnrollmentResponse {
    fn reply(created: Created<Enrollment>) -> (StatusCode, Json<Self>) {
        let status = if created.created {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };
        let body = Self {
            created: created.created,
            enrollment: created.record.into(),
        };
        (status, Json(body))
    }
}

// ── GET /api/courses ─────────────────────────────────────────────────────────

pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Listing<CourseCardResponse>>, BoardError> {
    let usecase = PublicCoursesUseCase {
        catalog: state.catalog_repo(),
    };
    Ok(Json(usecase.execute().await?.map(Into::into)))
}

// ── POST /api/courses ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCourseRequest {
    pub company_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub objectives: Option<String>,
    pub syllabus: Option<String>,
    pub duration_hours: Option<i64>,
    pub difficulty: Option<String>,
    pub content_formats: Option<Vec<String>>,
    pub visibility: Option<String>,
    pub offer_id: Option<i32>,
}

pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), BoardError> {
    let usecase = CreateCourseUseCase {
        companies: state.company_repo(),
        offers: state.offer_repo(),
        courses: state.course_repo(),
    };
    let course = usecase
        .execute(CreateCourseInput {
            company_id: body.company_id,
            title: body.title,
            description: body.description,
            objectives: body.objectives,
            syllabus: body.syllabus,
            duration_hours: body.duration_hours,
            difficulty: body.difficulty,
            content_formats: body.content_formats,
            visibility: body.visibility,
            offer_id: body.offer_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(course.into())))
}

// ── GET /api/courses/{course_id} ─────────────────────────────────────────────

pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<CourseDetailResponse>, BoardError> {
    let usecase = CourseDetailUseCase {
        catalog: state.catalog_repo(),
    };
    Ok(Json(usecase.execute(course_id).await?.into()))
}

// ── POST /api/courses/{course_id}/enroll ─────────────────────────────────────

#[derive(Deserialize)]
pub struct EnrollRequest {
    pub user_id: Option<i32>,
}

pub async fn enroll(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(body): Json<EnrollRequest>,
) -> Result<(StatusCode, Json<CreatedEnrollmentResponse>), BoardError> {
    let usecase = EnrollUseCase {
        users: state.user_repo(),
        courses: state.course_repo(),
        enrollments: state.enrollment_repo(),
    };
    let created = usecase.execute(body.user_id, course_id).await?;
    Ok(CreatedEnrollmentResponse::reply(created))
}

// ── GET /api/courses/{course_id}/assessments ─────────────────────────────────

pub async fn list_assessments(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<Listing<AssessmentResponse>>, BoardError> {
    let usecase = ListAssessmentsUseCase {
        courses: state.course_repo(),
        assessments: state.assessment_repo(),
    };
    let assessments = usecase.execute(course_id).await?;
    Ok(Json(Listing::from(assessments).map(Into::into)))
}

// ── POST /api/courses/{course_id}/assessments ────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAssessmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<RawQuestion>,
    pub min_score: Option<f64>,
    pub max_attempts: Option<i64>,
    pub required: Option<bool>,
}

pub async fn create_assessment(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(body): Json<CreateAssessmentRequest>,
) -> Result<(StatusCode, Json<AssessmentResponse>), BoardError> {
    let usecase = CreateAssessmentUseCase {
        courses: state.course_repo(),
        assessments: state.assessment_repo(),
    };
    let assessment = usecase
        .execute(
            course_id,
            CreateAssessmentInput {
                title: body.title,
                description: body.description,
                questions: body.questions,
                min_score: body.min_score,
                max_attempts: body.max_attempts,
                required: body.required,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(assessment.into())))
}
