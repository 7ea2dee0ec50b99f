use axum::http::StatusCode;
use serde_json::{Value, json};

use jobboard_testing::fixture::{seed_company, seed_course, seed_user};

use crate::helpers::{seed_board, server, state};

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_health_probes_with_request_id() {
    let server = server(state().await);

    let live = server.get("/healthz").await;
    live.assert_status_ok();
    assert!(!live.header("x-request-id").is_empty());

    server.get("/readyz").await.assert_status_ok();
}

// ── Accounts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_and_log_in() {
    let server = server(state().await);

    let created = server
        .post("/api/users")
        .json(&json!({
            "email": "  Ana@Example.com ",
            "password": "password123",
            "name": "Ana Gomez",
            "role": "seeker",
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let user: Value = created.json();
    assert_eq!(user["email"], "ana@example.com");
    assert!(user.get("password").is_none());

    let session = server
        .post("/api/login")
        .json(&json!({"email": "ana@example.com", "password": "password123"}))
        .await;
    session.assert_status_ok();
    let session: Value = session.json();
    assert_eq!(session["user_id"], user["id"]);
    assert_eq!(session["role"], "seeker");

    let wrong = server
        .post("/api/login")
        .json(&json!({"email": "ana@example.com", "password": "password999"}))
        .await;
    wrong.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.json::<Value>()["kind"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn should_reject_duplicate_email_and_missing_fields() {
    let server = server(state().await);
    let body = json!({
        "email": "hr@acme.com",
        "password": "password123",
        "name": "Acme HR",
        "role": "company",
    });
    server
        .post("/api/users")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);

    let again = server.post("/api/users").json(&body).await;
    again.assert_status(StatusCode::CONFLICT);
    assert_eq!(again.json::<Value>()["kind"], "EMAIL_TAKEN");

    let missing = server
        .post("/api/users")
        .json(&json!({"email": "x@acme.com", "password": "password123", "role": "seeker"}))
        .await;
    missing.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(missing.json::<Value>()["kind"], "VALIDATION");
}

#[tokio::test]
async fn should_upsert_profile_and_show_it_on_profile_page() {
    let state = state().await;
    let seeker = seed_user(&state.db, "ana@example.com", "seeker").await;
    let server = server(state);
    let path = format!("/api/users/{}/profile", seeker.id);

    server
        .put(&path)
        .json(&json!({"education": "BSc", "skills": [" rust ", "", "sql"]}))
        .await
        .assert_status_ok();
    let updated = server
        .put(&path)
        .json(&json!({"education": "MSc", "skills": ["go"]}))
        .await;
    updated.assert_status_ok();

    let page: Value = server.get(&path).await.json();
    assert_eq!(page["user"]["id"], seeker.id);
    assert_eq!(page["profile"]["education"], "MSc");
    assert_eq!(page["profile"]["skills"], json!(["go"]));
    assert_eq!(page["badges"], json!([]));
}

// ── Companies and offers ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_company_once_per_tax_id() {
    let state = state().await;
    let first = seed_user(&state.db, "hr@acme.com", "company").await;
    let second = seed_user(&state.db, "hr@globex.com", "company").await;
    let seeker = seed_user(&state.db, "ana@example.com", "seeker").await;
    let server = server(state);

    let created = server
        .post("/api/companies")
        .json(&json!({
            "user_id": first.id,
            "legal_name": "Acme SAS",
            "tax_id": "900123456",
            "social_links": {"linkedin": " https://linkedin.com/acme ", "x": " "},
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let company: Value = created.json();
    assert_eq!(company["social_links"], json!({"linkedin": "https://linkedin.com/acme"}));
    assert_eq!(company["verified"], false);

    let taken = server
        .post("/api/companies")
        .json(&json!({"user_id": second.id, "legal_name": "Globex", "tax_id": "900123456"}))
        .await;
    taken.assert_status(StatusCode::CONFLICT);
    assert_eq!(taken.json::<Value>()["kind"], "TAX_ID_TAKEN");

    let forbidden = server
        .post("/api/companies")
        .json(&json!({"user_id": seeker.id, "legal_name": "Nope", "tax_id": "1"}))
        .await;
    forbidden.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn should_publish_update_and_deactivate_offer() {
    let state = state().await;
    let owner = seed_user(&state.db, "hr@acme.com", "company").await;
    let company = seed_company(&state.db, owner.id, "Acme SAS", "900123456").await;
    let server = server(state);

    let created = server
        .post("/api/offers")
        .json(&json!({
            "company_id": company.id,
            "title": "Backend Engineer",
            "description": "Axum services",
            "modality": "Remote",
            "salary_min": 3000000.0,
            "required_skills": ["rust"],
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let offer: Value = created.json();
    assert_eq!(offer["modality"], "remote");
    assert_eq!(offer["salary"], "Desde $3,000,000");
    let path = format!("/api/offers/{}", offer["id"]);

    let inverted = server
        .patch(&path)
        .json(&json!({"salary_max": 1000000.0}))
        .await;
    inverted.assert_status(StatusCode::BAD_REQUEST);

    let patched = server
        .patch(&path)
        .json(&json!({"title": "Senior Backend Engineer"}))
        .await;
    patched.assert_status_ok();
    assert_eq!(patched.json::<Value>()["title"], "Senior Backend Engineer");

    let empty = server.patch(&path).json(&json!({})).await;
    assert_eq!(empty.json::<Value>()["kind"], "MISSING_DATA");

    let detail: Value = server.get(&path).await.json();
    assert_eq!(detail["company"]["legal_name"], "Acme SAS");

    server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&path)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    let listing: Value = server.get("/api/offers").await.json();
    assert_eq!(listing["total"], 0);
}

// ── Applications ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_apply_idempotently_and_track_status() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let server = server(state);
    let apply_path = format!("/api/offers/{}/apply", board.offer.id);

    let first = server
        .post(&apply_path)
        .json(&json!({"user_id": board.seeker.id}))
        .await;
    first.assert_status(StatusCode::CREATED);
    let first: Value = first.json();
    assert_eq!(first["created"], true);
    assert_eq!(first["application"]["status"], "Registered");

    let second = server
        .post("/api/applications")
        .json(&json!({"user_id": board.seeker.id, "offer_id": board.offer.id}))
        .await;
    second.assert_status_ok();
    let second: Value = second.json();
    assert_eq!(second["created"], false);
    assert_eq!(second["application"]["id"], first["application"]["id"]);

    let status_path = format!("/api/applications/{}/status", first["application"]["id"]);
    let changed = server
        .put(&status_path)
        .json(&json!({"status": "InProgress", "actor": "company", "note": "call scheduled"}))
        .await;
    changed.assert_status_ok();
    assert_eq!(changed.json::<Value>()["status"], "InProgress");

    let invalid = server
        .put(&status_path)
        .json(&json!({"status": "Hired"}))
        .await;
    invalid.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(invalid.json::<Value>()["kind"], "INVALID_STATUS");

    let view: Value = server
        .get(&format!("/api/applications/{}", first["application"]["id"]))
        .await
        .json();
    let history = view["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["previous_status"], "Registered");
    assert_eq!(history[0]["new_status"], "InProgress");
    assert_eq!(history[1]["previous_status"], Value::Null);

    let listed: Value = server
        .get("/api/applications")
        .add_query_param("user_id", board.seeker.id)
        .await
        .json();
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["items"][0]["history"].as_array().unwrap().len(), 2);

    let applicants: Value = server
        .get(&format!("/api/companies/{}/applicants", board.company.id))
        .add_query_param("limit", 5)
        .await
        .json();
    assert_eq!(applicants["total"], 1);
    assert_eq!(applicants["items"][0]["first_name"], "ana");
}

#[tokio::test]
async fn should_require_user_id_for_application_listing() {
    let server = server(state().await);

    let response = server.get("/api/applications").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "VALIDATION");
}

#[tokio::test]
async fn should_answer_mistyped_input_with_validation_error() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let server = server(state);

    let body = server
        .post("/api/applications")
        .json(&json!({"user_id": "abc", "offer_id": board.offer.id}))
        .await;
    body.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(body.json::<Value>()["kind"], "VALIDATION");

    let applied: Value = server
        .post("/api/applications")
        .json(&json!({"user_id": board.seeker.id, "offer_id": board.offer.id}))
        .await
        .json();
    let status = server
        .put(&format!("/api/applications/{}/status", applied["application"]["id"]))
        .json(&json!({"status": 5}))
        .await;
    status.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(status.json::<Value>()["kind"], "VALIDATION");

    let path = server.get("/api/applications/abc").await;
    path.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(path.json::<Value>()["kind"], "VALIDATION");

    let query = server
        .get("/api/applications")
        .add_query_param("user_id", "abc")
        .await;
    query.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(query.json::<Value>()["kind"], "VALIDATION");
}

// ── Courses ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_course_with_assessment_and_enroll() {
    let state = state().await;
    let board = seed_board(&state.db).await;
    let retired = seed_course(&state.db, board.company.id, "Retired", false).await;
    let server = server(state);

    let created = server
        .post("/api/courses")
        .json(&json!({
            "company_id": board.company.id,
            "title": "Rust 101",
            "description": "Ownership",
            "duration_hours": 12,
            "difficulty": "basic",
            "visibility": "unknown",
            "offer_id": board.offer.id,
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let course: Value = created.json();
    assert_eq!(course["visibility"], "public");
    let course_path = format!("/api/courses/{}", course["id"]);

    let detail: Value = server.get(&course_path).await.json();
    assert_eq!(detail["offer"]["id"], board.offer.id);

    let assessment = server
        .post(&format!("{course_path}/assessments"))
        .json(&json!({
            "title": "Final quiz",
            "questions": [
                {
                    "text": "Is Rust memory safe?",
                    "kind": "true_false",
                    "correct_answer": "True",
                    "points": 10,
                },
            ],
        }))
        .await;
    assessment.assert_status(StatusCode::CREATED);
    let assessments: Value = server
        .get(&format!("{course_path}/assessments"))
        .await
        .json();
    assert_eq!(assessments["total"], 1);

    let enrolled = server
        .post(&format!("{course_path}/enroll"))
        .json(&json!({"user_id": board.seeker.id}))
        .await;
    enrolled.assert_status(StatusCode::CREATED);
    assert_eq!(enrolled.json::<Value>()["enrollment"]["status"], "not_started");
    server
        .post(&format!("{course_path}/enroll"))
        .json(&json!({"user_id": board.seeker.id}))
        .await
        .assert_status_ok();

    let inactive = server
        .post(&format!("/api/courses/{}/enroll", retired.id))
        .json(&json!({"user_id": board.seeker.id}))
        .await;
    inactive.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(inactive.json::<Value>()["kind"], "COURSE_INACTIVE");

    let mine: Value = server
        .get(&format!("/api/users/{}/courses", board.seeker.id))
        .await
        .json();
    assert_eq!(mine["total"], 1);
    assert_eq!(mine["items"][0]["title"], "Rust 101");
}
