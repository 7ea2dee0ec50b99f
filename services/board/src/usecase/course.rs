use chrono::Utc;
use tracing::info;

use jobboard_domain::codec::clean_list;

use crate::domain::repository::{
    AssessmentRepository, CompanyRepository, CourseRepository, OfferRepository,
};
use crate::domain::types::{Assessment, Course, NewAssessment, NewCourse};
use crate::domain::validate::{self, RawQuestion};
use crate::error::BoardError;

// ── CreateCourse ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct CreateCourseInput {
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

pub struct CreateCourseUseCase<C, O, R>
where
    C: CompanyRepository,
    O: OfferRepository,
    R: CourseRepository,
{
    pub companies: C,
    pub offers: O,
    pub courses: R,
}

impl<C, O, R> CreateCourseUseCase<C, O, R>
where
    C: CompanyRepository,
    O: OfferRepository,
    R: CourseRepository,
{
    pub async fn execute(&self, input: CreateCourseInput) -> Result<Course, BoardError> {
        let company_id = input
            .company_id
            .ok_or_else(|| BoardError::validation("company_id is required"))?;
        let new = NewCourse {
            company_id,
            title: validate::required("title", input.title, 200)?,
            description: validate::required("description", input.description, 10_000)?,
            objectives: validate::optional(input.objectives),
            syllabus: validate::optional(input.syllabus),
            duration_hours: validate::duration_hours(input.duration_hours)?,
            difficulty: validate::difficulty(input.difficulty)?,
            content_formats: clean_list(input.content_formats.unwrap_or_default()),
            visibility: validate::visibility(input.visibility),
            offer_id: input.offer_id,
            published_at: Utc::now(),
        };

        self.companies
            .find_by_id(company_id)
            .await?
            .ok_or(BoardError::CompanyNotFound)?;
        if let Some(offer_id) = new.offer_id {
            self.offers
                .find_by_id(offer_id)
                .await?
                .ok_or(BoardError::OfferNotFound)?;
        }

        let course = self.courses.create(&new).await?;
        info!(course_id = course.id, company_id, "course published");
        Ok(course)
    }
}

// ── CreateAssessment ─────────────────────────────────────────────────────────

#[derive(Default)]
pub struct CreateAssessmentInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub questions: Vec<RawQuestion>,
    pub min_score: Option<f64>,
    pub max_attempts: Option<i64>,
    pub required: Option<bool>,
}

pub struct CreateAssessmentUseCase<R, A>
where
    R: CourseRepository,
    A: AssessmentRepository,
{
    pub courses: R,
    pub assessments: A,
}

impl<R, A> CreateAssessmentUseCase<R, A>
where
    R: CourseRepository,
    A: AssessmentRepository,
{
    pub async fn execute(
        &self,
        course_id: i32,
        input: CreateAssessmentInput,
    ) -> Result<Assessment, BoardError> {
        self.courses
            .find_by_id(course_id)
            .await?
            .ok_or(BoardError::CourseNotFound)?;
        let new = NewAssessment {
            course_id,
            title: validate::required("title", input.title, 200)?,
            description: validate::optional(input.description),
            questions: validate::questions(input.questions)?,
            min_score: validate::min_score(input.min_score)?,
            max_attempts: validate::max_attempts(input.max_attempts)?,
            required: input.required.unwrap_or(false),
            created_at: Utc::now(),
        };
        let assessment = self.assessments.create(&new).await?;
        info!(
            assessment_id = assessment.id,
            course_id,
            questions = assessment.questions.len(),
            "assessment created"
        );
        Ok(assessment)
    }
}

// ── ListAssessments ──────────────────────────────────────────────────────────

pub struct ListAssessmentsUseCase<R, A>
where
    R: CourseRepository,
    A: AssessmentRepository,
{
    pub courses: R,
    pub assessments: A,
}

impl<R, A> ListAssessmentsUseCase<R, A>
where
    R: CourseRepository,
    A: AssessmentRepository,
{
    pub async fn execute(&self, course_id: i32) -> Result<Vec<Assessment>, BoardError> {
        self.courses
            .find_by_id(course_id)
            .await?
            .ok_or(BoardError::CourseNotFound)?;
        self.assessments.list_by_course(course_id).await
    }
}
