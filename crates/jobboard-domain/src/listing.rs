//! Collection envelope and list limits.

use serde::Serialize;

/// Every collection endpoint answers with `{"items": [...], "total": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

impl<T> Listing<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        Listing {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Optional cap on the number of rows a list query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    #[default]
    Unlimited,
    AtMost(u64),
}

impl Limit {
    /// Largest page any caller may request.
    pub const MAX: u64 = 100;

    /// Interpret a raw query value: zero or negative means no cap, larger values
    /// are clamped to [`Limit::MAX`].
    pub fn from_query(raw: Option<i64>) -> Self {
        match raw {
            Some(n) if n > 0 => Self::AtMost((n as u64).min(Self::MAX)),
            _ => Self::Unlimited,
        }
    }

    pub fn as_option(self) -> Option<u64> {
        match self {
            Self::Unlimited => None,
            Self::AtMost(n) => Some(n),
        }
    }
}
