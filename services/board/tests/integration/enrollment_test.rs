use jobboard_board::domain::repository::CatalogRepository;
use jobboard_board::error::BoardError;
use jobboard_board::usecase::enrollment::EnrollUseCase;
use jobboard_domain::catalog::EnrollmentStatus;
use jobboard_testing::fixture::seed_course;

use crate::helpers::{seed_board, state};

#[tokio::test]
async fn should_enroll_once_per_course() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let course = seed_course(&state.db, board.company.id, "Rust 101", true).await;
    let usecase = EnrollUseCase {
        users: state.user_repo(),
        courses: state.course_repo(),
        enrollments: state.enrollment_repo(),
    };

    let first = usecase.execute(Some(board.seeker.id), course.id).await.unwrap();
    let second = usecase.execute(Some(board.seeker.id), course.id).await.unwrap();

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(first.record.id, second.record.id);
    assert_eq!(first.record.status, EnrollmentStatus::NotStarted);
    assert_eq!(first.record.progress, 0.0);

    let courses = state
        .catalog_repo()
        .user_courses(board.seeker.id)
        .await
        .unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].course.title, "Rust 101");
}

#[tokio::test]
async fn should_reject_inactive_course() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let course = seed_course(&state.db, board.company.id, "Retired", false).await;

    let result = EnrollUseCase {
        users: state.user_repo(),
        courses: state.course_repo(),
        enrollments: state.enrollment_repo(),
    }
    .execute(Some(board.seeker.id), course.id)
    .await;

    assert!(matches!(result, Err(BoardError::CourseInactive)), "got {result:?}");
}

#[tokio::test]
async fn should_reject_unknown_course() {
    let state = state().await;
    let board = seed_board(&state.db).await;

    let result = EnrollUseCase {
        users: state.user_repo(),
        courses: state.course_repo(),
        enrollments: state.enrollment_repo(),
    }
    .execute(Some(board.seeker.id), 999)
    .await;

    assert!(matches!(result, Err(BoardError::CourseNotFound)), "got {result:?}");
}

#[tokio::test]
async fn should_list_enrollments_with_course_title_on_profile() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let course = seed_course(&state.db, board.company.id, "SQL basics", true).await;
    EnrollUseCase {
        users: state.user_repo(),
        courses: state.course_repo(),
        enrollments: state.enrollment_repo(),
    }
    .execute(Some(board.seeker.id), course.id)
    .await
    .unwrap();

    let enrollments = state
        .catalog_repo()
        .user_enrollments(board.seeker.id)
        .await
        .unwrap();

    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0].course_title, "SQL basics");
    assert_eq!(enrollments[0].enrollment.course_id, course.id);
}
