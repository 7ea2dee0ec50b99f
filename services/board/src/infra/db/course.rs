use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use jobboard_board_schema::{assessments, courses, enrollments};
use jobboard_core::sea_ext::is_unique_violation;
use jobboard_domain::catalog::EnrollmentStatus;

use super::mapping::{assessment_from_model, course_from_model, encode, enrollment_from_model};
use crate::domain::repository::{AssessmentRepository, CourseRepository, EnrollmentRepository};
use crate::domain::types::{Assessment, Course, Enrollment, NewAssessment, NewCourse};
use crate::error::BoardError;

// ── Course repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseRepository {
    pub db: DatabaseConnection,
}

impl CourseRepository for DbCourseRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, BoardError> {
        let model = courses::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find course by id")?;
        model.map(course_from_model).transpose()
    }

    async fn create(&self, course: &NewCourse) -> Result<Course, BoardError> {
        let model = courses::ActiveModel {
            company_id: Set(course.company_id),
            title: Set(course.title.clone()),
            description: Set(course.description.clone()),
            objectives: Set(course.objectives.clone()),
            syllabus: Set(course.syllabus.clone()),
            duration_hours: Set(course.duration_hours),
            difficulty: Set(course.difficulty.as_str().to_owned()),
            content_formats: Set(Some(encode(&course.content_formats, "content_formats")?)),
            visibility: Set(course.visibility.as_str().to_owned()),
            offer_id: Set(course.offer_id),
            published_at: Set(course.published_at),
            active: Set(true),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create course")?;
        course_from_model(model)
    }
}

// ── Enrollment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEnrollmentRepository {
    pub db: DatabaseConnection,
}

impl EnrollmentRepository for DbEnrollmentRepository {
    async fn find_by_user_and_course(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<Enrollment>, BoardError> {
        let model = enrollments::Entity::find()
            .filter(enrollments::Column::UserId.eq(user_id))
            .filter(enrollments::Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .context("find enrollment by user and course")?;
        model.map(enrollment_from_model).transpose()
    }

    async fn create(
        &self,
        user_id: i32,
        course_id: i32,
        enrolled_at: DateTime<Utc>,
    ) -> Result<Option<Enrollment>, BoardError> {
        let result = enrollments::ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            progress: Set(0.0),
            status: Set(EnrollmentStatus::NotStarted.as_str().to_owned()),
            completed_at: Set(None),
            test_score: Set(None),
            enrolled_at: Set(enrolled_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(Some(enrollment_from_model(model)?)),
            Err(err) if is_unique_violation(&err) => Ok(None),
            Err(err) => Err(anyhow::Error::new(err).context("create enrollment").into()),
        }
    }
}

// ── Assessment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAssessmentRepository {
    pub db: DatabaseConnection,
}

impl AssessmentRepository for DbAssessmentRepository {
    async fn create(&self, assessment: &NewAssessment) -> Result<Assessment, BoardError> {
        let model = assessments::ActiveModel {
            course_id: Set(assessment.course_id),
            title: Set(assessment.title.clone()),
            description: Set(assessment.description.clone()),
            questions: Set(Some(encode(&assessment.questions, "questions")?)),
            min_score: Set(assessment.min_score),
            max_attempts: Set(assessment.max_attempts),
            required: Set(assessment.required),
            active: Set(true),
            created_at: Set(assessment.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create assessment")?;
        Ok(assessment_from_model(model))
    }

    async fn list_by_course(&self, course_id: i32) -> Result<Vec<Assessment>, BoardError> {
        let models = assessments::Entity::find()
            .filter(assessments::Column::CourseId.eq(course_id))
            .filter(assessments::Column::Active.eq(true))
            .order_by_asc(assessments::Column::CreatedAt)
            .order_by_asc(assessments::Column::Id)
            .all(&self.db)
            .await
            .context("list assessments")?;
        Ok(models.into_iter().map(assessment_from_model).collect())
    }
}
