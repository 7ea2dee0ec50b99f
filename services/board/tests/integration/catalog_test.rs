use jobboard_board::domain::repository::CatalogRepository;
use jobboard_board::error::BoardError;
use jobboard_board::usecase::application::CreateApplicationUseCase;
use jobboard_board::usecase::catalog::{
    CompanyAggregateUseCase, CompanyApplicantsUseCase, RecommendedOffersUseCase,
    SeekerAggregateUseCase,
};
use jobboard_domain::listing::Limit;
use jobboard_testing::fixture::{
    OfferSeed, at_minute, seed_badge, seed_course, seed_named_user, seed_offer, seed_user,
};

use crate::helpers::{seed_board, state};

// ── Offers ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_active_offers_newest_first() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let newer = seed_offer(
        &state.db,
        board.company.id,
        OfferSeed {
            title: "Data Engineer".to_owned(),
            published_at: at_minute(30),
            ..OfferSeed::default()
        },
    )
    .await;
    seed_offer(
        &state.db,
        board.company.id,
        OfferSeed {
            title: "Closed".to_owned(),
            published_at: at_minute(60),
            active: false,
            ..OfferSeed::default()
        },
    )
    .await;

    let offers = state
        .catalog_repo()
        .active_offers(Limit::Unlimited)
        .await
        .unwrap();

    let ids: Vec<_> = offers.iter().map(|l| l.offer.id).collect();
    assert_eq!(ids, vec![newer.id, board.offer.id]);
    assert_eq!(offers[0].company.legal_name, "Acme SAS");
    assert_eq!(offers[0].offer.required_skills, vec!["rust", "sql"]);
}

#[tokio::test]
async fn should_default_recommendations_to_two_offers() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    for minute in 1..=3 {
        seed_offer(
            &state.db,
            board.company.id,
            OfferSeed {
                published_at: at_minute(minute),
                ..OfferSeed::default()
            },
        )
        .await;
    }
    let usecase = RecommendedOffersUseCase {
        catalog: state.catalog_repo(),
    };

    assert_eq!(usecase.execute(None).await.unwrap().total, 2);
    assert_eq!(usecase.execute(Some(0)).await.unwrap().total, 2);
    assert_eq!(usecase.execute(Some(3)).await.unwrap().total, 3);
}

// ── Company views ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_count_applicants_per_offer() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let quiet = seed_offer(
        &state.db,
        board.company.id,
        OfferSeed {
            title: "Nobody applies".to_owned(),
            published_at: at_minute(5),
            active: false,
            ..OfferSeed::default()
        },
    )
    .await;
    let other = seed_user(&state.db, "luis@example.com", "seeker").await;
    let apply = CreateApplicationUseCase {
        users: state.user_repo(),
        offers: state.offer_repo(),
        applications: state.application_repo(),
    };
    for user_id in [board.seeker.id, other.id] {
        apply
            .execute(Some(user_id), Some(board.offer.id))
            .await
            .unwrap();
    }
    seed_course(&state.db, board.company.id, "Rust 101", false).await;

    let aggregate = CompanyAggregateUseCase {
        companies: state.company_repo(),
        catalog: state.catalog_repo(),
    }
    .execute(board.company.id)
    .await
    .unwrap();

    let counts: Vec<_> = aggregate
        .offers
        .iter()
        .map(|o| (o.offer.id, o.applicant_count))
        .collect();
    assert_eq!(counts, vec![(quiet.id, 0), (board.offer.id, 2)]);
    assert_eq!(aggregate.courses.len(), 1);
    assert_eq!(
        aggregate.company.social_links.get("linkedin").map(String::as_str),
        Some("https://linkedin.com/company/acme")
    );
}

#[tokio::test]
async fn should_split_applicant_names_and_honor_limit() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let maria = seed_named_user(&state.db, "maria@example.com", "Maria Jose Perez", "seeker").await;
    let apply = CreateApplicationUseCase {
        users: state.user_repo(),
        offers: state.offer_repo(),
        applications: state.application_repo(),
    };
    apply
        .execute(Some(board.seeker.id), Some(board.offer.id))
        .await
        .unwrap();
    apply
        .execute(Some(maria.id), Some(board.offer.id))
        .await
        .unwrap();
    let usecase = CompanyApplicantsUseCase {
        companies: state.company_repo(),
        catalog: state.catalog_repo(),
    };

    let limited = usecase
        .execute(board.company.id, Limit::from_query(Some(1)))
        .await
        .unwrap();
    assert_eq!(limited.total, 1);
    assert_eq!(limited.items[0].first_name, "Maria");
    assert_eq!(limited.items[0].last_name, "Jose Perez");
    assert_eq!(limited.items[0].offer_title, "Engineer");

    let all = usecase
        .execute(board.company.id, Limit::from_query(Some(0)))
        .await
        .unwrap();
    assert_eq!(all.total, 2);
}

#[tokio::test]
async fn should_report_unknown_company() {
    let state = state().await;

    let result = CompanyApplicantsUseCase {
        companies: state.company_repo(),
        catalog: state.catalog_repo(),
    }
    .execute(77, Limit::Unlimited)
    .await;

    assert!(matches!(result, Err(BoardError::CompanyNotFound)), "got {result:?}");
}

// ── Seeker profile ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_assemble_seeker_profile_without_profile_row() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let course = seed_course(&state.db, board.company.id, "Rust 101", true).await;
    seed_badge(&state.db, board.seeker.id, course.id, "Rustacean", at_minute(1)).await;
    seed_badge(&state.db, board.seeker.id, course.id, "Async", at_minute(2)).await;
    CreateApplicationUseCase {
        users: state.user_repo(),
        offers: state.offer_repo(),
        applications: state.application_repo(),
    }
    .execute(Some(board.seeker.id), Some(board.offer.id))
    .await
    .unwrap();

    let aggregate = SeekerAggregateUseCase {
        users: state.user_repo(),
        profiles: state.profile_repo(),
        catalog: state.catalog_repo(),
    }
    .execute(board.seeker.id)
    .await
    .unwrap();

    assert!(aggregate.profile.is_none());
    let badges: Vec<_> = aggregate.badges.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(badges, vec!["Async", "Rustacean"]);
    assert_eq!(aggregate.applications.len(), 1);
    assert_eq!(aggregate.applications[0].offer_title, "Engineer");
    assert!(aggregate.enrollments.is_empty());
}

#[tokio::test]
async fn should_hide_inactive_courses_from_catalog() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let open = seed_course(&state.db, board.company.id, "Open", true).await;
    seed_course(&state.db, board.company.id, "Retired", false).await;

    let courses = state.catalog_repo().public_courses().await.unwrap();

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].course.id, open.id);
    assert_eq!(courses[0].company.legal_name, "Acme SAS");
    assert!(state.catalog_repo().course_detail(open.id).await.unwrap().is_some());
}
