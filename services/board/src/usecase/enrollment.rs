use anyhow::anyhow;
use chrono::Utc;
use tracing::{debug, info};

use crate::domain::repository::{CourseRepository, EnrollmentRepository, UserRepository};
use crate::domain::types::{Created, Enrollment};
use crate::error::BoardError;

// ── Enroll ───────────────────────────────────────────────────────────────────

pub struct EnrollUseCase<U, C, E>
where
    U: UserRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    pub users: U,
    pub courses: C,
    pub enrollments: E,
}

impl<U, C, E> EnrollUseCase<U, C, E>
where
    U: UserRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    /// Enroll `user_id` in `course_id`. Enrolling twice returns the first
    /// enrollment with `created = false`. No status history is kept.
    pub async fn execute(
        &self,
        user_id: Option<i32>,
        course_id: i32,
    ) -> Result<Created<Enrollment>, BoardError> {
        let user_id = user_id.ok_or_else(|| BoardError::validation("user_id is required"))?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(BoardError::UserNotFound)?;
        if !user.role.is_seeker() {
            return Err(BoardError::Forbidden);
        }
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or(BoardError::CourseNotFound)?;
        if !course.active {
            return Err(BoardError::CourseInactive);
        }

        if let Some(existing) = self
            .enrollments
            .find_by_user_and_course(user_id, course_id)
            .await?
        {
            debug!(enrollment_id = existing.id, user_id, course_id, "already enrolled");
            return Ok(Created {
                record: existing,
                created: false,
            });
        }

        match self.enrollments.create(user_id, course_id, Utc::now()).await? {
            Some(enrollment) => {
                info!(enrollment_id = enrollment.id, user_id, course_id, "enrollment created");
                Ok(Created {
                    record: enrollment,
                    created: true,
                })
            }
            None => {
                let existing = self
                    .enrollments
                    .find_by_user_and_course(user_id, course_id)
                    .await?
                    .ok_or_else(|| anyhow!("enrollment {user_id}/{course_id} missing after conflict"))?;
                Ok(Created {
                    record: existing,
                    created: false,
                })
            }
        }
    }
}
