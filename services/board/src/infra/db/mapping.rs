//! Row to domain conversions.
//!
//! Enumerated columns are written by this service only, so an unknown value is
//! a store failure. JSON text columns decode best effort and never fail.

use std::collections::BTreeMap;

use anyhow::anyhow;

use jobboard_domain::catalog::{Difficulty, EnrollmentStatus, Modality, Question, Visibility};
use jobboard_domain::codec::TextColumn;
use jobboard_domain::role::UserRole;
use jobboard_domain::salary::SalaryRange;
use jobboard_domain::status::{Actor, ApplicationStatus};
use jobboard_board_schema::{
    applications, assessments, badges, companies, courses, enrollments, offers, seeker_profiles,
    status_history, users,
};

use crate::domain::types::{
    Application, Assessment, Badge, Company, CompanyBrief, Course, Enrollment, HistoryEntry,
    Offer, OfferBrief, ProfileFields, SeekerProfile, User,
};
use crate::error::BoardError;

fn stored<T>(parsed: Option<T>, column: &str, raw: &str) -> Result<T, BoardError> {
    parsed.ok_or_else(|| BoardError::Store(anyhow!("unexpected {column} value {raw:?} in store")))
}

pub(crate) fn parse_status(raw: &str) -> Result<ApplicationStatus, BoardError> {
    stored(ApplicationStatus::parse(raw), "status", raw)
}

pub(crate) fn parse_modality(raw: &str) -> Result<Modality, BoardError> {
    stored(Modality::parse(raw), "modality", raw)
}

/// Serialize a list or map column.
pub(crate) fn encode<T: TextColumn>(value: &T, column: &str) -> Result<String, BoardError> {
    value
        .encode()
        .map_err(|err| BoardError::Store(anyhow::Error::new(err).context(format!("encode {column}"))))
}

pub(crate) fn user_from_model(model: users::Model) -> Result<User, BoardError> {
    Ok(User {
        role: stored(UserRole::parse(&model.role), "role", &model.role)?,
        id: model.id,
        email: model.email,
        name: model.name,
        active: model.active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

pub(crate) fn profile_from_model(model: seeker_profiles::Model) -> SeekerProfile {
    SeekerProfile {
        id: model.id,
        user_id: model.user_id,
        fields: ProfileFields {
            gender_identity: model.gender_identity,
            disability: model.disability,
            education: model.education,
            experience: model.experience,
            skills: Vec::decode(model.skills.as_deref()),
            birth_date: model.birth_date,
            phone: model.phone,
            location: model.location,
        },
        updated_at: model.updated_at,
    }
}

pub(crate) fn company_from_model(model: companies::Model) -> Company {
    Company {
        social_links: BTreeMap::decode(model.social_links.as_deref()),
        id: model.id,
        user_id: model.user_id,
        legal_name: model.legal_name,
        tax_id: model.tax_id,
        sector: model.sector,
        address: model.address,
        phone: model.phone,
        website: model.website,
        economic_activity: model.economic_activity,
        size: model.size,
        verified: model.verified,
        verified_at: model.verified_at,
        created_at: model.created_at,
    }
}

pub(crate) fn brief_from_model(model: &companies::Model) -> CompanyBrief {
    CompanyBrief {
        id: model.id,
        legal_name: model.legal_name.clone(),
        sector: model.sector.clone(),
    }
}

/// A joined row whose parent is missing means a broken foreign key.
pub(crate) fn joined<T>(parent: Option<T>, what: &str, child_id: i32) -> Result<T, BoardError> {
    parent.ok_or_else(|| BoardError::Store(anyhow!("{what} missing for row {child_id}")))
}

pub(crate) fn offer_from_model(model: offers::Model) -> Result<Offer, BoardError> {
    Ok(Offer {
        modality: parse_modality(&model.modality)?,
        required_skills: Vec::decode(model.required_skills.as_deref()),
        salary: SalaryRange {
            min: model.salary_min,
            max: model.salary_max,
        },
        id: model.id,
        company_id: model.company_id,
        title: model.title,
        description: model.description,
        duties: model.duties,
        requirements: model.requirements,
        location: model.location,
        contract_type: model.contract_type,
        schedule: model.schedule,
        published_at: model.published_at,
        closes_on: model.closes_on,
        active: model.active,
    })
}

pub(crate) fn offer_brief_from_model(model: offers::Model) -> Result<OfferBrief, BoardError> {
    Ok(OfferBrief {
        modality: parse_modality(&model.modality)?,
        id: model.id,
        title: model.title,
        location: model.location,
        active: model.active,
    })
}

pub(crate) fn application_from_model(model: applications::Model) -> Result<Application, BoardError> {
    Ok(Application {
        status: parse_status(&model.status)?,
        tags: Vec::decode(model.tags.as_deref()),
        id: model.id,
        user_id: model.user_id,
        offer_id: model.offer_id,
        company_name: model.company_name,
        position: model.position,
        description: model.description,
        salary: model.salary,
        location: model.location,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

pub(crate) fn history_from_model(model: status_history::Model) -> Result<HistoryEntry, BoardError> {
    let previous_status = match model.previous_status.as_deref() {
        Some(raw) => Some(parse_status(raw)?),
        None => None,
    };
    Ok(HistoryEntry {
        previous_status,
        new_status: parse_status(&model.new_status)?,
        actor: stored(Actor::parse(&model.actor), "actor", &model.actor)?,
        id: model.id,
        application_id: model.application_id,
        note: model.note,
        changed_at: model.changed_at,
    })
}

pub(crate) fn course_from_model(model: courses::Model) -> Result<Course, BoardError> {
    Ok(Course {
        difficulty: stored(
            Difficulty::parse(&model.difficulty),
            "difficulty",
            &model.difficulty,
        )?,
        visibility: stored(
            Visibility::parse(&model.visibility),
            "visibility",
            &model.visibility,
        )?,
        content_formats: Vec::decode(model.content_formats.as_deref()),
        id: model.id,
        company_id: model.company_id,
        title: model.title,
        description: model.description,
        objectives: model.objectives,
        syllabus: model.syllabus,
        duration_hours: model.duration_hours,
        offer_id: model.offer_id,
        published_at: model.published_at,
        active: model.active,
    })
}

pub(crate) fn enrollment_from_model(model: enrollments::Model) -> Result<Enrollment, BoardError> {
    Ok(Enrollment {
        status: stored(
            EnrollmentStatus::parse(&model.status),
            "enrollment status",
            &model.status,
        )?,
        id: model.id,
        user_id: model.user_id,
        course_id: model.course_id,
        progress: model.progress,
        completed_at: model.completed_at,
        test_score: model.test_score,
        enrolled_at: model.enrolled_at,
    })
}

pub(crate) fn badge_from_model(model: badges::Model) -> Badge {
    Badge {
        id: model.id,
        user_id: model.user_id,
        course_id: model.course_id,
        name: model.name,
        description: model.description,
        verification_code: model.verification_code,
        image_url: model.image_url,
        obtained_at: model.obtained_at,
    }
}

pub(crate) fn assessment_from_model(model: assessments::Model) -> Assessment {
    Assessment {
        questions: Vec::<Question>::decode(model.questions.as_deref()),
        id: model.id,
        course_id: model.course_id,
        title: model.title,
        description: model.description,
        min_score: model.min_score,
        max_attempts: model.max_attempts,
        required: model.required,
        active: model.active,
        created_at: model.created_at,
    }
}
