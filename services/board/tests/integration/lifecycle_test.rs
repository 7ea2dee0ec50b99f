use chrono::{Duration, Utc};

use jobboard_board::domain::repository::ApplicationRepository;
use jobboard_board::domain::types::{NewApplication, StatusChange};
use jobboard_board::error::BoardError;
use jobboard_board::infra::db::{DbApplicationRepository, DbOfferRepository, DbUserRepository};
use jobboard_board::state::AppState;
use jobboard_board::usecase::application::{
    ChangeStatusInput, ChangeStatusUseCase, CreateApplicationUseCase, GetApplicationUseCase,
};
use jobboard_board::usecase::offer::DeactivateOfferUseCase;
use jobboard_domain::status::{Actor, ApplicationStatus};
use jobboard_testing::fixture::{OfferSeed, seed_offer};

use crate::helpers::{seed_board, state};

type ApplyUseCase =
    CreateApplicationUseCase<DbUserRepository, DbOfferRepository, DbApplicationRepository>;

fn apply(state: &AppState) -> ApplyUseCase {
    CreateApplicationUseCase {
        users: state.user_repo(),
        offers: state.offer_repo(),
        applications: state.application_repo(),
    }
}

fn change(status: &str, actor: &str, note: Option<&str>) -> ChangeStatusInput {
    ChangeStatusInput {
        status: Some(status.to_owned()),
        actor: Some(actor.to_owned()),
        note: note.map(str::to_owned),
    }
}

fn snapshot(user_id: i32, offer_id: i32) -> NewApplication {
    NewApplication {
        user_id,
        offer_id,
        company_name: "Acme SAS".to_owned(),
        position: "Engineer".to_owned(),
        description: None,
        salary: None,
        location: None,
        tags: Vec::new(),
        created_at: Utc::now(),
    }
}

// ── CreateApplication ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_snapshot_offer_and_open_history() {
    let state = state().await;
    let board = seed_board(&state.db).await;

    let created = apply(&state)
        .execute(Some(board.seeker.id), Some(board.offer.id))
        .await
        .unwrap();

    assert!(created.created);
    let application = created.record;
    assert_eq!(application.status, ApplicationStatus::Registered);
    assert_eq!(application.company_name, "Acme SAS");
    assert_eq!(application.position, "Engineer");
    assert_eq!(application.salary.as_deref(), Some("$2,800,000 - $3,500,000"));
    assert_eq!(application.location.as_deref(), Some("Bogota"));

    let history = state.application_repo().history(application.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].previous_status, None);
    assert_eq!(history[0].new_status, ApplicationStatus::Registered);
    assert_eq!(history[0].actor, Actor::Seeker);
    assert_eq!(history[0].note.as_deref(), Some("created by user"));
}

#[tokio::test]
async fn should_return_existing_application_when_applying_twice() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let usecase = apply(&state);

    let first = usecase
        .execute(Some(board.seeker.id), Some(board.offer.id))
        .await
        .unwrap();
    let second = usecase
        .execute(Some(board.seeker.id), Some(board.offer.id))
        .await
        .unwrap();

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(first.record.id, second.record.id);
    let history = state.application_repo().history(first.record.id).await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn should_yield_none_when_unique_pair_already_exists() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let repo = state.application_repo();

    let first = repo
        .create_with_history(&snapshot(board.seeker.id, board.offer.id))
        .await
        .unwrap();
    let duplicate = repo
        .create_with_history(&snapshot(board.seeker.id, board.offer.id))
        .await
        .unwrap();

    let first = first.expect("first insert creates the application");
    assert!(duplicate.is_none());
    let history = repo.history(first.id).await.unwrap();
    assert_eq!(history.len(), 1);
    let existing = repo
        .find_by_user_and_offer(board.seeker.id, board.offer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(existing.id, first.id);
}

#[tokio::test]
async fn should_reject_company_account_applying() {
    let state = state().await;
    let board = seed_board(&state.db).await;

    let result = apply(&state)
        .execute(Some(board.owner.id), Some(board.offer.id))
        .await;

    assert!(matches!(result, Err(BoardError::Forbidden)), "got {result:?}");
}

#[tokio::test]
async fn should_reject_inactive_offer() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let closed = seed_offer(
        &state.db,
        board.company.id,
        OfferSeed {
            active: false,
            ..OfferSeed::default()
        },
    )
    .await;

    let result = apply(&state)
        .execute(Some(board.seeker.id), Some(closed.id))
        .await;

    assert!(matches!(result, Err(BoardError::OfferNotFound)), "got {result:?}");
}

#[tokio::test]
async fn should_stop_accepting_applications_after_deactivation() {
    let state = state().await;
    let board = seed_board(&state.db).await;

    DeactivateOfferUseCase {
        offers: state.offer_repo(),
    }
    .execute(board.offer.id)
    .await
    .unwrap();

    let result = apply(&state)
        .execute(Some(board.seeker.id), Some(board.offer.id))
        .await;
    assert!(matches!(result, Err(BoardError::OfferNotFound)), "got {result:?}");
}

// ── ChangeStatus ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_chain_history_across_status_changes() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let application = apply(&state)
        .execute(Some(board.seeker.id), Some(board.offer.id))
        .await
        .unwrap()
        .record;

    let usecase = ChangeStatusUseCase {
        applications: state.application_repo(),
    };
    usecase
        .execute(application.id, change("InProgress", "company", Some("screening")))
        .await
        .unwrap();
    let updated = usecase
        .execute(application.id, change("Approved", "company", None))
        .await
        .unwrap();
    assert_eq!(updated.status, ApplicationStatus::Approved);

    let view = GetApplicationUseCase {
        applications: state.application_repo(),
    }
    .execute(application.id)
    .await
    .unwrap();

    assert_eq!(view.application.status, ApplicationStatus::Approved);
    let moves: Vec<_> = view
        .history
        .iter()
        .map(|h| (h.previous_status, h.new_status))
        .collect();
    assert_eq!(
        moves,
        vec![
            (Some(ApplicationStatus::InProgress), ApplicationStatus::Approved),
            (Some(ApplicationStatus::Registered), ApplicationStatus::InProgress),
            (None, ApplicationStatus::Registered),
        ]
    );
    assert_eq!(view.history[1].note.as_deref(), Some("screening"));
    assert_eq!(view.history[1].actor, Actor::Company);
}

#[tokio::test]
async fn should_keep_history_chained_when_later_write_carries_older_stamp() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let repo = state.application_repo();
    let application = repo
        .create_with_history(&snapshot(board.seeker.id, board.offer.id))
        .await
        .unwrap()
        .unwrap();

    // The second writer stamped its change before the first one committed.
    let now = Utc::now();
    repo.change_status(
        application.id,
        &StatusChange {
            status: ApplicationStatus::InProgress,
            actor: Actor::Company,
            note: None,
            changed_at: now + Duration::milliseconds(5),
        },
    )
    .await
    .unwrap()
    .unwrap();
    repo.change_status(
        application.id,
        &StatusChange {
            status: ApplicationStatus::Approved,
            actor: Actor::Company,
            note: None,
            changed_at: now,
        },
    )
    .await
    .unwrap()
    .unwrap();

    let history = repo.history(application.id).await.unwrap();
    let moves: Vec<_> = history
        .iter()
        .rev()
        .map(|h| (h.previous_status, h.new_status))
        .collect();
    assert_eq!(
        moves,
        vec![
            (None, ApplicationStatus::Registered),
            (Some(ApplicationStatus::Registered), ApplicationStatus::InProgress),
            (Some(ApplicationStatus::InProgress), ApplicationStatus::Approved),
        ]
    );
    assert!(history[0].changed_at >= history[1].changed_at);
}

#[tokio::test]
async fn should_record_change_to_same_status() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let application = apply(&state)
        .execute(Some(board.seeker.id), Some(board.offer.id))
        .await
        .unwrap()
        .record;

    let usecase = ChangeStatusUseCase {
        applications: state.application_repo(),
    };
    usecase
        .execute(
            application.id,
            ChangeStatusInput {
                status: Some("Registered".to_owned()),
                actor: None,
                note: None,
            },
        )
        .await
        .unwrap();

    let history = state.application_repo().history(application.id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].previous_status, Some(ApplicationStatus::Registered));
    assert_eq!(history[0].new_status, ApplicationStatus::Registered);
    assert_eq!(history[0].actor, Actor::System);
}

#[tokio::test]
async fn should_leave_application_untouched_on_invalid_status() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let application = apply(&state)
        .execute(Some(board.seeker.id), Some(board.offer.id))
        .await
        .unwrap()
        .record;

    let result = ChangeStatusUseCase {
        applications: state.application_repo(),
    }
    .execute(application.id, change("Hired", "company", None))
    .await;

    assert!(matches!(result, Err(BoardError::InvalidStatus)), "got {result:?}");
    let history = state.application_repo().history(application.id).await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn should_report_missing_application_before_status_check() {
    let state = state().await;

    let result = ChangeStatusUseCase {
        applications: state.application_repo(),
    }
    .execute(404, change("Hired", "company", None))
    .await;

    assert!(
        matches!(result, Err(BoardError::ApplicationNotFound)),
        "got {result:?}"
    );
}
