//! Field rules applied to request input before it reaches a repository.
//!
//! Every rule trims text first. Failures are `BoardError::Validation` with a
//! message naming the field, except status which has its own error kind.

use serde::Deserialize;

use jobboard_domain::catalog::{Difficulty, Modality, Question, QuestionKind, Visibility};
use jobboard_domain::role::UserRole;
use jobboard_domain::salary::SalaryRange;
use jobboard_domain::status::{Actor, ApplicationStatus};

use crate::error::BoardError;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const DEFAULT_MIN_SCORE: f64 = 60.0;

/// Required text of at most `max` characters.
pub fn required(field: &str, value: Option<String>, max: usize) -> Result<String, BoardError> {
    let value = optional(value).ok_or_else(|| BoardError::validation(format!("{field} is required")))?;
    if value.chars().count() > max {
        return Err(BoardError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(value)
}

/// Trimmed text; blank becomes absent.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub fn email(value: Option<String>) -> Result<String, BoardError> {
    let email = required("email", value, 254)?.to_lowercase();
    if !email.contains('@') {
        return Err(BoardError::validation("email is not valid"));
    }
    Ok(email)
}

/// Passwords are opaque: no trimming, only a length floor.
pub fn password(value: Option<String>) -> Result<String, BoardError> {
    match value {
        Some(p) if p.chars().count() >= MIN_PASSWORD_LEN => Ok(p),
        Some(_) => Err(BoardError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        ))),
        None => Err(BoardError::validation("password is required")),
    }
}

pub fn role(value: Option<String>) -> Result<UserRole, BoardError> {
    value
        .as_deref()
        .and_then(UserRole::parse)
        .ok_or_else(|| BoardError::validation("role must be seeker or company"))
}

pub fn modality(value: Option<String>) -> Result<Modality, BoardError> {
    value
        .as_deref()
        .and_then(Modality::parse)
        .ok_or_else(|| BoardError::validation("modality must be onsite, remote or hybrid"))
}

pub fn difficulty(value: Option<String>) -> Result<Difficulty, BoardError> {
    value
        .as_deref()
        .and_then(Difficulty::parse)
        .ok_or_else(|| BoardError::validation("difficulty must be basic, intermediate or advanced"))
}

/// Unrecognised or absent visibility falls back to public.
pub fn visibility(value: Option<String>) -> Visibility {
    value
        .as_deref()
        .and_then(Visibility::parse)
        .unwrap_or_default()
}

pub fn status(value: Option<String>) -> Result<ApplicationStatus, BoardError> {
    value
        .as_deref()
        .map(str::trim)
        .and_then(ApplicationStatus::parse)
        .ok_or(BoardError::InvalidStatus)
}

/// Absent actor means the system made the change.
pub fn actor(value: Option<String>) -> Result<Actor, BoardError> {
    match optional(value) {
        None => Ok(Actor::default()),
        Some(raw) => Actor::parse(&raw)
            .ok_or_else(|| BoardError::validation("actor must be seeker, company or system")),
    }
}

pub fn salary(min: Option<f64>, max: Option<f64>) -> Result<SalaryRange, BoardError> {
    Ok(SalaryRange::new(min, max)?)
}

pub fn duration_hours(value: Option<i64>) -> Result<i32, BoardError> {
    match value {
        Some(h) if (1..=i64::from(i32::MAX)).contains(&h) => Ok(h as i32),
        Some(_) => Err(BoardError::validation("duration must be at least 1 hour")),
        None => Err(BoardError::validation("duration is required")),
    }
}

pub fn min_score(value: Option<f64>) -> Result<f64, BoardError> {
    let score = value.unwrap_or(DEFAULT_MIN_SCORE);
    if !(0.0..=100.0).contains(&score) {
        return Err(BoardError::validation("minimum score must be between 0 and 100"));
    }
    Ok(score)
}

pub fn max_attempts(value: Option<i64>) -> Result<i32, BoardError> {
    match value {
        None => Ok(1),
        Some(n) if (1..=i64::from(i32::MAX)).contains(&n) => Ok(n as i32),
        Some(_) => Err(BoardError::validation("max attempts must be at least 1")),
    }
}

/// Assessment question as submitted, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuestion {
    pub text: Option<String>,
    pub kind: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
    pub points: Option<i64>,
}

pub fn questions(raw: Vec<RawQuestion>) -> Result<Vec<Question>, BoardError> {
    raw.into_iter()
        .enumerate()
        .map(|(i, q)| question(i + 1, q))
        .collect()
}

fn question(number: usize, raw: RawQuestion) -> Result<Question, BoardError> {
    let text = required(&format!("question {number} text"), raw.text, 1000)?;
    let kind = raw
        .kind
        .as_deref()
        .and_then(QuestionKind::parse)
        .ok_or_else(|| {
            BoardError::validation(format!(
                "question {number} kind must be multiple_choice or true_false"
            ))
        })?;
    let points = match raw.points {
        Some(p) if p > 0 && p <= i64::from(u32::MAX) => p as u32,
        _ => {
            return Err(BoardError::validation(format!(
                "question {number} points must be positive"
            )));
        }
    };
    let answer = required(&format!("question {number} answer"), raw.correct_answer, 1000)?;
    let options = jobboard_domain::codec::clean_list(raw.options.unwrap_or_default());

    match kind {
        QuestionKind::MultipleChoice => {
            if options.len() < 2 {
                return Err(BoardError::validation(format!(
                    "question {number} needs at least 2 options"
                )));
            }
            if !options.contains(&answer) {
                return Err(BoardError::validation(format!(
                    "question {number} answer must be one of its options"
                )));
            }
            Ok(Question {
                text,
                kind,
                options,
                correct_answer: answer,
                points,
            })
        }
        QuestionKind::TrueFalse => {
            let answer = answer.to_ascii_lowercase();
            if answer != "true" && answer != "false" {
                return Err(BoardError::validation(format!(
                    "question {number} answer must be true or false"
                )));
            }
            Ok(Question {
                text,
                kind,
                options: vec!["true".to_owned(), "false".to_owned()],
                correct_answer: answer,
                points,
            })
        }
    }
}
