use chrono::{NaiveDate, Utc};
use tracing::info;

use jobboard_domain::codec::clean_list;

use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::domain::types::{NewUser, ProfileFields, SeekerProfile, Session, User};
use crate::domain::validate;
use crate::error::BoardError;

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

pub struct RegisterUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> RegisterUserUseCase<U> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, BoardError> {
        let new = NewUser {
            email: validate::email(input.email)?,
            password: validate::password(input.password)?,
            name: validate::required("name", input.name, 100)?,
            role: validate::role(input.role)?,
            created_at: Utc::now(),
        };
        let user = self
            .users
            .create(&new)
            .await?
            .ok_or(BoardError::EmailTaken)?;
        info!(user_id = user.id, role = %user.role, "user registered");
        Ok(user)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> LoginUseCase<U> {
    pub async fn execute(&self, input: LoginInput) -> Result<Session, BoardError> {
        let email = validate::email(input.email)?;
        let password = validate::password(input.password)?;
        let credentials = self
            .users
            .find_credentials(&email)
            .await?
            .ok_or(BoardError::UserNotFound)?;
        if credentials.password != password {
            return Err(BoardError::InvalidCredentials);
        }
        let user = credentials.user;
        if !user.active {
            return Err(BoardError::Forbidden);
        }
        Ok(Session {
            user_id: user.id,
            role: user.role,
            name: user.name,
            email: user.email,
        })
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetUserUseCase<U> {
    pub async fn execute(&self, user_id: i32) -> Result<User, BoardError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(BoardError::UserNotFound)
    }
}

// ── UpsertSeekerProfile ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct ProfileInput {
    pub gender_identity: Option<String>,
    pub disability: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<Vec<String>>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

pub struct UpsertProfileUseCase<U, P>
where
    U: UserRepository,
    P: ProfileRepository,
{
    pub users: U,
    pub profiles: P,
}

impl<U, P> UpsertProfileUseCase<U, P>
where
    U: UserRepository,
    P: ProfileRepository,
{
    pub async fn execute(
        &self,
        user_id: i32,
        input: ProfileInput,
    ) -> Result<SeekerProfile, BoardError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(BoardError::UserNotFound)?;
        if !user.role.is_seeker() {
            return Err(BoardError::Forbidden);
        }
        let fields = ProfileFields {
            gender_identity: validate::optional(input.gender_identity),
            disability: validate::optional(input.disability),
            education: validate::optional(input.education),
            experience: validate::optional(input.experience),
            skills: clean_list(input.skills.unwrap_or_default()),
            birth_date: input.birth_date,
            phone: validate::optional(input.phone),
            location: validate::optional(input.location),
        };
        self.profiles.upsert(user_id, &fields).await
    }
}
