//! Application lifecycle status and the actors that move it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Current state of a job application.
///
/// Transitions are unrestricted: any status may move to any other
/// status, including itself. Every move is recorded in the status history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Registered,
    InProgress,
    Approved,
    Rejected,
    Cancelled,
}

impl ApplicationStatus {
    pub const ALL: [Self; 5] = [
        Self::Registered,
        Self::InProgress,
        Self::Approved,
        Self::Rejected,
        Self::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "Registered",
            Self::InProgress => "InProgress",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Exact, case-sensitive match against the five canonical names.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who performed a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    Seeker,
    Company,
    #[default]
    System,
}

impl Actor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seeker => "seeker",
            Self::Company => "company",
            Self::System => "system",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seeker" => Some(Self::Seeker),
            "company" => Some(Self::Company),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
