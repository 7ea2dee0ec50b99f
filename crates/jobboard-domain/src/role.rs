//! Account roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two mutually exclusive account roles. Seekers apply to offers and enroll in
/// courses; companies publish offers and courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Seeker,
    Company,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seeker => "seeker",
            Self::Company => "company",
        }
    }

    /// Parse a role, ignoring surrounding whitespace and case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seeker" => Some(Self::Seeker),
            "company" => Some(Self::Company),
            _ => None,
        }
    }

    pub fn is_seeker(self) -> bool {
        self == Self::Seeker
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
