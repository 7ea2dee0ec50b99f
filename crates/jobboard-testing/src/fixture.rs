//! Row seeding helpers. Each helper inserts one row and returns the stored model.

use chrono::{DateTime, Duration, Utc};
use jobboard_board_schema::{badges, companies, courses, offers, users};
use sea_orm::{ActiveModelTrait, DatabaseConnection, NotSet, Set};

/// Fixed base instant so ordering assertions do not depend on the wall clock.
pub fn base_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_717_200_000, 0).expect("valid timestamp")
}

/// `base_time() + minutes`.
pub fn at_minute(minutes: i64) -> DateTime<Utc> {
    base_time() + Duration::minutes(minutes)
}

pub async fn seed_user(db: &DatabaseConnection, email: &str, role: &str) -> users::Model {
    let name = email.split('@').next().unwrap_or(email).to_owned();
    users::ActiveModel {
        id: NotSet,
        email: Set(email.to_lowercase()),
        password: Set("password123".to_owned()),
        name: Set(name),
        role: Set(role.to_owned()),
        active: Set(true),
        created_at: Set(base_time()),
        updated_at: Set(base_time()),
    }
    .insert(db)
    .await
    .expect("seed user")
}

/// Seeds a user with an explicit display name.
pub async fn seed_named_user(
    db: &DatabaseConnection,
    email: &str,
    name: &str,
    role: &str,
) -> users::Model {
    users::ActiveModel {
        id: NotSet,
        email: Set(email.to_lowercase()),
        password: Set("password123".to_owned()),
        name: Set(name.to_owned()),
        role: Set(role.to_owned()),
        active: Set(true),
        created_at: Set(base_time()),
        updated_at: Set(base_time()),
    }
    .insert(db)
    .await
    .expect("seed named user")
}

pub async fn seed_company(
    db: &DatabaseConnection,
    user_id: i32,
    legal_name: &str,
    tax_id: &str,
) -> companies::Model {
    companies::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        legal_name: Set(legal_name.to_owned()),
        tax_id: Set(tax_id.to_owned()),
        sector: Set(Some("Technology".to_owned())),
        address: Set(None),
        phone: Set(None),
        website: Set(None),
        social_links: Set(Some(r#"{"linkedin":"https://linkedin.com/company/acme"}"#.to_owned())),
        economic_activity: Set(None),
        size: Set(None),
        verified: Set(false),
        verified_at: Set(None),
        created_at: Set(base_time()),
    }
    .insert(db)
    .await
    .expect("seed company")
}

/// Offer columns the tests vary; everything else gets a plain default.
#[derive(Debug, Clone)]
pub struct OfferSeed {
    pub title: String,
    pub location: Option<String>,
    pub modality: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub required_skills: Option<String>,
    pub published_at: DateTime<Utc>,
    pub active: bool,
}

impl Default for OfferSeed {
    fn default() -> Self {
        Self {
            title: "Engineer".to_owned(),
            location: Some("Bogota".to_owned()),
            modality: "remote".to_owned(),
            salary_min: Some(2_800_000.0),
            salary_max: Some(3_500_000.0),
            required_skills: Some(r#"["rust","sql"]"#.to_owned()),
            published_at: base_time(),
            active: true,
        }
    }
}

pub async fn seed_offer(db: &DatabaseConnection, company_id: i32, seed: OfferSeed) -> offers::Model {
    offers::ActiveModel {
        id: NotSet,
        company_id: Set(company_id),
        title: Set(seed.title),
        description: Set("Build and operate services".to_owned()),
        duties: Set(None),
        requirements: Set(None),
        required_skills: Set(seed.required_skills),
        location: Set(seed.location),
        modality: Set(seed.modality),
        contract_type: Set(Some("full_time".to_owned())),
        schedule: Set(None),
        salary_min: Set(seed.salary_min),
        salary_max: Set(seed.salary_max),
        published_at: Set(seed.published_at),
        closes_on: Set(None),
        active: Set(seed.active),
    }
    .insert(db)
    .await
    .expect("seed offer")
}

pub async fn seed_course(
    db: &DatabaseConnection,
    company_id: i32,
    title: &str,
    active: bool,
) -> courses::Model {
    courses::ActiveModel {
        id: NotSet,
        company_id: Set(company_id),
        title: Set(title.to_owned()),
        description: Set("Hands-on training".to_owned()),
        objectives: Set(None),
        syllabus: Set(None),
        duration_hours: Set(10),
        difficulty: Set("basic".to_owned()),
        content_formats: Set(Some(r#"["video"]"#.to_owned())),
        visibility: Set("public".to_owned()),
        offer_id: Set(None),
        published_at: Set(base_time()),
        active: Set(active),
    }
    .insert(db)
    .await
    .expect("seed course")
}

pub async fn seed_badge(
    db: &DatabaseConnection,
    user_id: i32,
    course_id: i32,
    name: &str,
    obtained_at: DateTime<Utc>,
) -> badges::Model {
    badges::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        course_id: Set(course_id),
        name: Set(name.to_owned()),
        description: Set(None),
        verification_code: Set(format!("BADGE-{user_id}-{course_id}-{name}")),
        image_url: Set(None),
        obtained_at: Set(obtained_at),
    }
    .insert(db)
    .await
    .expect("seed badge")
}
