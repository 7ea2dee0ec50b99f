use axum::{
    Router,
    routing::{get, post, put},
};

use jobboard_core::health::healthz;
use jobboard_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    application::{change_status, create_application, get_application, list_applications},
    company::{
        get_company, get_company_applicants, get_company_applications, get_company_offers,
        register_company,
    },
    course::{
        create_assessment, create_course, enroll, get_course, list_assessments, list_courses,
    },
    health::readyz,
    offer::{
        apply_to_offer, create_offer, deactivate_offer, get_offer, list_offers,
        recommended_offers, update_offer,
    },
    user::{
        get_profile, get_user, get_user_applications, get_user_courses, login, register_user,
        upsert_profile,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/api/users", post(register_user))
        .route("/api/login", post(login))
        .route("/api/users/{user_id}", get(get_user))
        .route("/api/users/{user_id}/profile", get(get_profile).put(upsert_profile))
        .route("/api/users/{user_id}/applications", get(get_user_applications))
        .route("/api/users/{user_id}/courses", get(get_user_courses))
        // Companies
        .route("/api/companies", post(register_company))
        .route("/api/companies/{company_id}", get(get_company))
        .route("/api/companies/{company_id}/offers", get(get_company_offers))
        .route(
            "/api/companies/{company_id}/applications",
            get(get_company_applications),
        )
        .route(
            "/api/companies/{company_id}/applicants",
            get(get_company_applicants),
        )
        // Offers
        .route("/api/offers", get(list_offers).post(create_offer))
        .route("/api/offers/recommended", get(recommended_offers))
        .route(
            "/api/offers/{offer_id}",
            get(get_offer).patch(update_offer).delete(deactivate_offer),
        )
        .route("/api/offers/{offer_id}/apply", post(apply_to_offer))
        // Applications
        .route(
            "/api/applications",
            get(list_applications).post(create_application),
        )
        .route("/api/applications/{application_id}", get(get_application))
        .route(
            "/api/applications/{application_id}/status",
            put(change_status),
        )
        // Courses
        .route("/api/courses", get(list_courses).post(create_course))
        .route("/api/courses/{course_id}", get(get_course))
        .route("/api/courses/{course_id}/enroll", post(enroll))
        .route(
            "/api/courses/{course_id}/assessments",
            get(list_assessments).post(create_assessment),
        )
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
